use std::fmt::Display;

use miette::miette;
use miette::Context;
use miette::IntoDiagnostic;

use crate::endpoint::Endpoint;
use crate::gerrit_project::RemoteScheme;
use crate::gerrit_project::RemoteUrl;

/// The base URL of a Gerrit server's web interface and REST API.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
pub struct GerritHost {
    base_url: String,
}

impl GerritHost {
    /// Use an explicitly configured base URL, like `https://gerrit.example.com/r`.
    pub fn from_base_url(url: &str) -> miette::Result<Self> {
        let parsed = reqwest::Url::parse(url)
            .into_diagnostic()
            .wrap_err_with(|| format!("Invalid Gerrit URL: {url}"))?;
        match parsed.scheme() {
            "http" | "https" => Ok(Self {
                base_url: url.trim_end_matches('/').to_owned(),
            }),
            scheme => Err(miette!(
                "Gerrit URL must use `http` or `https`, not `{scheme}`: {url}"
            )),
        }
    }

    /// Guess the REST API location from a Git remote.
    ///
    /// SSH remotes are assumed to be served over HTTPS on the default port.
    pub fn from_remote(remote: &RemoteUrl) -> Self {
        let scheme = match remote.scheme {
            RemoteScheme::Http => "http",
            RemoteScheme::Https | RemoteScheme::Ssh | RemoteScheme::Scp => "https",
        };
        Self {
            base_url: format!("{scheme}://{}", remote.host),
        }
    }

    /// Given an endpoint path, format an HTTP request URL.
    ///
    /// Authenticated requests go under `/a/`.
    pub fn endpoint(&self, endpoint: &Endpoint, authenticated: bool) -> String {
        if authenticated {
            format!("{}/a/{endpoint}", self.base_url)
        } else {
            format!("{}/{endpoint}", self.base_url)
        }
    }
}

impl Display for GerritHost {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.base_url)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_remote() {
        let host = GerritHost::from_remote(
            &RemoteUrl::parse("ssh://rbt@gerrit.example.com:29418/my-project").unwrap(),
        );
        assert_eq!(host.to_string(), "https://gerrit.example.com");

        let host =
            GerritHost::from_remote(&RemoteUrl::parse("http://localhost:8080/a/p").unwrap());
        assert_eq!(host.to_string(), "http://localhost:8080");
    }

    #[test]
    fn test_from_base_url() {
        let host = GerritHost::from_base_url("https://review.example.com/r/").unwrap();
        assert_eq!(
            host.endpoint(&Endpoint::new("changes/"), true),
            "https://review.example.com/r/a/changes/"
        );
        assert_eq!(
            host.endpoint(&Endpoint::new("changes/"), false),
            "https://review.example.com/r/changes/"
        );
        assert!(GerritHost::from_base_url("ssh://review.example.com").is_err());
        assert!(GerritHost::from_base_url("not a url").is_err());
    }
}
