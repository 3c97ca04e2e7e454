// MobileApi HTTP client
//
// Wraps `reqwest::Client` with credential injection, the 200-only status
// check, and the JSON-or-text body classification. Endpoint groups
// (lookups, lists, live, recordings, reports) are inherent methods in
// separate files to keep this module focused on transport mechanics.

use reqwest::StatusCode;
use tracing::{debug, trace};
use url::Url;

use crate::auth::Credentials;
use crate::error::{self, Error};
use crate::operation::{Operation, Payload};
use crate::transport::TransportConfig;

/// Production MobileApi endpoint.
pub const DEFAULT_BASE_URL: &str = "https://manager.fenero.com/MobileApi/";

/// Client for the Fenero MobileApi.
///
/// Holds the account credentials and base URL; both are fixed once built.
/// Each call issues exactly one GET and never retries.
pub struct FeneroClient {
    http: reqwest::Client,
    base_url: Url,
    credentials: Credentials,
}

impl FeneroClient {
    /// Build a client against [`DEFAULT_BASE_URL`].
    pub fn new(credentials: Credentials, transport: &TransportConfig) -> Result<Self, Error> {
        let http = transport.build_client()?;
        Self::with_client(http, DEFAULT_BASE_URL, credentials)
    }

    /// Wrap an existing `reqwest::Client` and point it at `base_url`.
    ///
    /// The base URL is the `MobileApi` root; operation names are joined
    /// onto it, so a trailing slash is added when missing.
    pub fn with_client(
        http: reqwest::Client,
        base_url: &str,
        credentials: Credentials,
    ) -> Result<Self, Error> {
        let base_url = Self::normalize_base_url(base_url)?;
        Ok(Self {
            http,
            base_url,
            credentials,
        })
    }

    fn normalize_base_url(raw: &str) -> Result<Url, Error> {
        let mut url = Url::parse(raw)?;
        if !url.path().ends_with('/') {
            let path = format!("{}/", url.path());
            url.set_path(&path);
        }
        Ok(url)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn credentials(&self) -> &Credentials {
        &self.credentials
    }

    /// Full query for `op`: credentials first, then the operation's own
    /// parameters.
    pub fn query(&self, op: &Operation) -> Vec<(&'static str, String)> {
        let mut query = Vec::with_capacity(op.params().len() + 2);
        query.extend(self.credentials.query_pairs());
        query.extend(op.params().iter().cloned());
        query
    }

    // ── Request helpers ──────────────────────────────────────────────

    /// Issue the GET for `op` and enforce the HTTP 200 contract.
    pub(crate) async fn send(&self, op: &Operation) -> Result<reqwest::Response, Error> {
        let url = self.base_url.join(op.name())?;
        let keys: Vec<&str> = op.params().iter().map(|(k, _)| *k).collect();
        debug!(operation = op.name(), params = ?keys, "GET {url}");

        let resp = self.http.get(url).query(&self.query(op)).send().await?;

        let status = resp.status();
        if status != StatusCode::OK {
            let body = resp.text().await.unwrap_or_default();
            debug!(operation = op.name(), %status, "request rejected");
            return Err(Error::RequestFailed {
                operation: op.name().to_owned(),
                status: status.as_u16(),
                body: error::preview(&body),
            });
        }

        Ok(resp)
    }

    /// Run any operation: JSON bodies decode to [`Payload::Json`], anything
    /// else comes back verbatim as [`Payload::Text`].
    pub async fn perform(&self, op: &Operation) -> Result<Payload, Error> {
        let body = self.send(op).await?.text().await?;
        trace!(operation = op.name(), bytes = body.len(), "response received");
        Ok(Payload::from_body(body))
    }

    /// Run an operation whose contract is a JSON body.
    pub async fn perform_json(&self, op: &Operation) -> Result<serde_json::Value, Error> {
        match self.perform(op).await? {
            Payload::Json(value) => Ok(value),
            Payload::Text(body) => Err(Error::Deserialization {
                message: format!("{} returned a non-JSON body", op.name()),
                body: error::preview(&body),
            }),
        }
    }

    /// Run an operation whose contract is raw delimited text.
    ///
    /// The body is returned untouched, even if it happens to parse as JSON.
    pub async fn perform_text(&self, op: &Operation) -> Result<String, Error> {
        let body = self.send(op).await?.text().await?;
        trace!(operation = op.name(), bytes = body.len(), "report received");
        Ok(body)
    }
}
