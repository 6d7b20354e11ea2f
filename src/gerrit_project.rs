use std::fmt::Display;
use std::sync::OnceLock;

use regex::Regex;

/// Something that can tell us the URL of the Git remote we're working against.
pub trait RemoteUrlSource {
    /// The remote's name, like `origin`.
    fn remote_name(&self) -> &str;

    fn remote_url(&self) -> miette::Result<String>;
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum DetectProjectError {
    #[error("Not in a Git repository")]
    #[diagnostic(help("Run this command from inside a checkout of a Gerrit project"))]
    NotARepository,

    #[error("The Git repository has no `{remote}` remote")]
    #[diagnostic(help("Add one with `git remote add {remote} <url>`, or pass `--remote`"))]
    NoOriginRemote { remote: String },

    #[error("Could not parse project name from Git remote: {url}")]
    UrlParse { url: String },

    #[error("Failed to read Git remote URL: {message}")]
    Remote { message: String },
}

/// How a Git remote URL was written.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoteScheme {
    /// `ssh://[USER@]HOST[:PORT]/PROJECT`
    Ssh,
    /// `http://HOST/[a/]PROJECT`
    Http,
    /// `https://HOST/[a/]PROJECT`
    Https,
    /// `[USER@]HOST:PROJECT`
    Scp,
}

/// A Git remote URL pointing at a Gerrit project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RemoteUrl {
    pub scheme: RemoteScheme,
    /// Includes the port for HTTP(S) remotes, but never for SSH ones.
    pub host: String,
    pub project: String,
}

impl RemoteUrl {
    /// Parse a Git remote URL. Trailing whitespace and `.git` suffixes are ignored.
    pub fn parse(url: &str) -> Result<Self, DetectProjectError> {
        let url = url.trim_end();
        let parse_error = || DetectProjectError::UrlParse {
            url: url.to_owned(),
        };

        let (scheme, captures) = if url.starts_with("ssh://") {
            static RE: OnceLock<Regex> = OnceLock::new();
            let captures = RE
                .get_or_init(|| {
                    Regex::new(
                        r"(?x)
                        ^
                        ssh://
                        (?:[^@/]+@)?
                        (?P<host>[^:/]+)
                        (?::[0-9]+)?
                        /
                        (?P<project>.*)
                        $",
                    )
                    .expect("Regex parses")
                })
                .captures(url);
            (RemoteScheme::Ssh, captures)
        } else if url.starts_with("http://") || url.starts_with("https://") {
            static RE: OnceLock<Regex> = OnceLock::new();
            let captures = RE
                .get_or_init(|| {
                    // Gerrit serves authenticated REST and Git requests under `/a/`.
                    Regex::new(
                        r"(?x)
                        ^
                        (?P<scheme>https?)://
                        (?:[^@/]+@)?
                        (?P<host>[^/]+)
                        /
                        (?:a/)?
                        (?P<project>.*)
                        $",
                    )
                    .expect("Regex parses")
                })
                .captures(url);
            let scheme = match captures.as_ref().map(|captures| &captures["scheme"]) {
                Some("http") => RemoteScheme::Http,
                _ => RemoteScheme::Https,
            };
            (scheme, captures)
        } else if url.contains(':') && !url.contains("://") {
            static RE: OnceLock<Regex> = OnceLock::new();
            let captures = RE
                .get_or_init(|| {
                    Regex::new(
                        r"(?x)
                        ^
                        (?:[^@:/]+@)?
                        (?P<host>[^:/]+)
                        :
                        (?P<project>.*)
                        $",
                    )
                    .expect("Regex parses")
                })
                .captures(url);
            (RemoteScheme::Scp, captures)
        } else {
            return Err(parse_error());
        };

        let captures = captures.ok_or_else(parse_error)?;
        let project = strip_project_suffix(&captures["project"]);
        if project.is_empty() {
            return Err(parse_error());
        }

        Ok(Self {
            scheme,
            host: captures["host"].to_owned(),
            project: project.to_owned(),
        })
    }
}

impl Display for RemoteUrl {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.scheme {
            RemoteScheme::Ssh => write!(f, "ssh://{}/{}", self.host, self.project),
            RemoteScheme::Http => write!(f, "http://{}/{}", self.host, self.project),
            RemoteScheme::Https => write!(f, "https://{}/{}", self.host, self.project),
            RemoteScheme::Scp => write!(f, "{}:{}", self.host, self.project),
        }
    }
}

fn strip_project_suffix(project: &str) -> &str {
    let project = project.trim_end_matches('/');
    project.strip_suffix(".git").unwrap_or(project)
}

/// Detect the Gerrit project for the current checkout by reading and parsing the Git remote URL
/// from `source`.
///
/// The project name is [`RemoteUrl::project`]; the host is kept so we know which server to ask.
pub fn detect_remote(source: &impl RemoteUrlSource) -> Result<RemoteUrl, DetectProjectError> {
    let url = source.remote_url().map_err(|error| {
        let messages = error
            .chain()
            .map(|cause| cause.to_string().to_lowercase())
            .collect::<Vec<_>>();
        if messages
            .iter()
            .any(|message| message.contains("not a git repository"))
        {
            DetectProjectError::NotARepository
        } else if messages
            .iter()
            .any(|message| message.contains("no such remote"))
        {
            DetectProjectError::NoOriginRemote {
                remote: source.remote_name().to_owned(),
            }
        } else {
            DetectProjectError::Remote {
                message: error.to_string(),
            }
        }
    })?;
    tracing::debug!(url = url.trim_end(), "Read Git remote URL");

    let remote = RemoteUrl::parse(&url)?;
    tracing::debug!(project = %remote.project, host = %remote.host, "Detected Gerrit project");
    Ok(remote)
}
