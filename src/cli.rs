use clap::Parser;
use secrecy::SecretString;

use crate::gerrit::Credentials;
use crate::list_changes::OutputFormat;
use crate::styling::ColorChoice;

/// List open Gerrit changes for the project in the current Git checkout.
#[derive(Debug, Clone, Parser)]
#[command(version, author, about)]
#[command(max_term_width = 100)]
pub struct Opts {
    /// Log filter directives, of the form `target[span{field=value}]=level`, where all components
    /// except the level are optional.
    ///
    /// Try `debug` or `trace`.
    #[arg(long, default_value = "info", env = "GERRIT_OPEN_LOG")]
    pub log: String,

    /// The maximum number of changes to list.
    #[arg(short = 'n', long, default_value_t = 20)]
    pub limit: u32,

    /// Print changes as JSON.
    #[arg(long)]
    pub json: bool,

    /// Print changes as XML.
    ///
    /// Ignored if `--json` is also given.
    #[arg(long)]
    pub xml: bool,

    /// When to color output.
    #[arg(long, value_enum, default_value_t, env = "GERRIT_OPEN_COLOR")]
    pub color: ColorChoice,

    /// The Git remote pointing at Gerrit.
    #[arg(long, default_value = "origin")]
    pub remote: String,

    /// The Gerrit base URL, like `https://gerrit.example.com`.
    ///
    /// Defaults to the host of the Git remote, over HTTPS.
    #[arg(long, env = "GERRIT_URL")]
    pub url: Option<String>,

    /// Username for Gerrit's authenticated REST API.
    #[arg(long, env = "GERRIT_USERNAME")]
    pub username: Option<String>,

    /// HTTP password for Gerrit's authenticated REST API.
    #[arg(long, env = "GERRIT_PASSWORD", hide_env_values = true)]
    pub password: Option<String>,
}

impl Opts {
    pub fn output_format(&self) -> OutputFormat {
        OutputFormat::from_flags(self.json, self.xml)
    }

    /// Credentials, if both a username and password are given.
    pub fn credentials(&self) -> Option<Credentials> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some(Credentials {
                username: username.clone(),
                password: SecretString::new(password.clone()),
            }),
            (Some(_), None) | (None, Some(_)) => {
                tracing::warn!(
                    "Both a Gerrit username and password are needed for authentication; \
                    querying anonymously"
                );
                None
            }
            (None, None) => None,
        }
    }
}
