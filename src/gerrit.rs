use std::time::Duration;

use miette::IntoDiagnostic;
use reqwest::blocking::Client;
use reqwest::StatusCode;
use secrecy::ExposeSecret;
use secrecy::SecretString;

use crate::change::Change;
use crate::endpoint::Endpoint;
use crate::gerrit_host::GerritHost;
use crate::gerrit_query::ChangeQuery;
use crate::query_result::parse_changes;

/// Something that can answer Gerrit change queries.
pub trait ChangeSource {
    fn list_changes(&self, query: &ChangeQuery) -> Result<Vec<Change>, ApiError>;
}

#[derive(Debug, thiserror::Error, miette::Diagnostic)]
pub enum ApiError {
    #[error("Failed to query Gerrit at {url}")]
    Http {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("Gerrit rejected our credentials ({status}) for {url}")]
    #[diagnostic(help(
        "Check `GERRIT_USERNAME` and `GERRIT_PASSWORD`; Gerrit wants the HTTP password from your \
        account settings, not your login password"
    ))]
    Authentication { url: String, status: StatusCode },

    #[error("Gerrit returned {status} for {url}: {body}")]
    Status {
        url: String,
        status: StatusCode,
        body: String,
    },

    #[error("Failed to parse Gerrit response from {url}")]
    Parse {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Credentials for Gerrit's authenticated REST API.
#[derive(Debug)]
pub struct Credentials {
    pub username: String,
    pub password: SecretString,
}

/// Gerrit REST API client.
#[derive(Debug)]
pub struct Gerrit {
    host: GerritHost,
    client: Client,
    credentials: Option<Credentials>,
}

impl Gerrit {
    pub fn new(host: GerritHost, credentials: Option<Credentials>) -> miette::Result<Self> {
        let client = Client::builder()
            .user_agent(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            ))
            .timeout(Duration::from_secs(30))
            .build()
            .into_diagnostic()?;
        Ok(Self {
            host,
            client,
            credentials,
        })
    }

    fn get(&self, endpoint: &Endpoint, params: &[(&str, String)]) -> Result<String, ApiError> {
        let base = self.host.endpoint(endpoint, self.credentials.is_some());
        let url = reqwest::Url::parse_with_params(&base, params)
            .map(String::from)
            .unwrap_or(base);
        tracing::debug!(%url, "Querying Gerrit");

        let mut request = self.client.get(&url);
        if let Some(credentials) = &self.credentials {
            request = request.basic_auth(
                &credentials.username,
                Some(credentials.password.expose_secret()),
            );
        }

        let http_error = |source| ApiError::Http {
            url: url.clone(),
            source,
        };
        let response = request.send().map_err(http_error)?;
        let status = response.status();
        let body = response.text().map_err(http_error)?;

        match status {
            status if status.is_success() => Ok(body),
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => {
                Err(ApiError::Authentication { url, status })
            }
            status => Err(ApiError::Status {
                url,
                status,
                body: body.trim().to_owned(),
            }),
        }
    }
}

impl ChangeSource for Gerrit {
    fn list_changes(&self, query: &ChangeQuery) -> Result<Vec<Change>, ApiError> {
        let endpoint = Endpoint::new("changes/");
        let body = self.get(&endpoint, &query.to_params())?;
        let changes = parse_changes(&body).map_err(|source| ApiError::Parse {
            url: self.host.endpoint(&endpoint, self.credentials.is_some()),
            source,
        })?;
        tracing::debug!(count = changes.len(), "Received changes");
        Ok(changes)
    }
}
