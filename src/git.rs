use std::process::Command;

use command_error::CommandExt;
use miette::Context;
use miette::IntoDiagnostic;
use utf8_command::Utf8Output;

use crate::gerrit_project::RemoteUrlSource;

/// `git` CLI wrapper.
#[derive(Debug, Clone, Default)]
pub struct Git {}

impl Git {
    pub fn new() -> Self {
        Self {}
    }

    /// Get a `git` command.
    pub fn command(&self) -> Command {
        Command::new("git")
    }

    /// Get the (fetch) URL for the given remote.
    pub fn remote_url(&self, remote: &str) -> miette::Result<String> {
        let output: Utf8Output = self
            .command()
            .args(["remote", "get-url", remote])
            .output_checked_utf8()
            .into_diagnostic()
            .wrap_err_with(|| format!("Failed to get URL for Git remote `{remote}`"))?;
        Ok(output.stdout.trim_end().to_owned())
    }

    /// A named remote in this repository.
    pub fn remote(&self, name: impl Into<String>) -> GitRemote {
        GitRemote {
            git: self.clone(),
            name: name.into(),
        }
    }
}

/// A named Git remote, like `origin`.
#[derive(Debug, Clone)]
pub struct GitRemote {
    git: Git,
    name: String,
}

impl RemoteUrlSource for GitRemote {
    fn remote_name(&self) -> &str {
        &self.name
    }

    fn remote_url(&self) -> miette::Result<String> {
        self.git.remote_url(&self.name)
    }
}
