use std::path::PathBuf;

use thiserror::Error;

/// Top-level error type for the `fenero-api` crate.
///
/// The MobileApi reports every rejection (bad credentials, bad parameters,
/// server faults) as a bare non-200 status, so those all collapse into
/// [`Error::RequestFailed`]. The remaining variants cover failures that
/// happen before a status exists or after the body arrives.
#[derive(Debug, Error)]
pub enum Error {
    // ── Remote ──────────────────────────────────────────────────────
    /// The server answered with anything other than HTTP 200.
    #[error("{operation} failed with HTTP {status}")]
    RequestFailed {
        operation: String,
        status: u16,
        /// Leading part of the response body, for diagnostics.
        body: String,
    },

    // ── Transport ───────────────────────────────────────────────────
    /// HTTP transport error (connection refused, DNS failure, etc.)
    ///
    /// The request URL kept on the inner error has its query stripped,
    /// since the query carries the access token.
    #[error("HTTP transport error: {0}")]
    Transport(#[source] reqwest::Error),

    /// URL parsing error.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// TLS setup or HTTP client construction error.
    #[error("TLS error: {0}")]
    Tls(String),

    // ── Data ────────────────────────────────────────────────────────
    /// A JSON body was required but the server sent something else.
    #[error("Deserialization error: {message}")]
    Deserialization { message: String, body: String },

    /// Caller-supplied value that cannot be used as given.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ── Local I/O ───────────────────────────────────────────────────
    /// Writing a downloaded recording failed.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// HTTP status carried by this error, if the server answered at all.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::RequestFailed { status, .. } => Some(*status),
            Self::Transport(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }

    /// Returns `true` if the server rejected the account id or token.
    pub fn is_auth_failure(&self) -> bool {
        matches!(self.status(), Some(401 | 403))
    }

    /// Returns `true` if this is a transient error worth retrying.
    ///
    /// The client itself never retries; this is for callers.
    pub fn is_transient(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_timeout() || e.is_connect(),
            Self::RequestFailed { status, .. } => matches!(status, 502..=504),
            _ => false,
        }
    }

    /// Returns `true` if the connection timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Transport(e) if e.is_timeout())
    }
}

impl From<reqwest::Error> for Error {
    fn from(mut err: reqwest::Error) -> Self {
        if let Some(url) = err.url_mut() {
            url.set_query(None);
        }
        Self::Transport(err)
    }
}

/// Truncate a body to a short preview without splitting a UTF-8 sequence.
pub(crate) fn preview(body: &str) -> String {
    const LIMIT: usize = 200;
    if body.len() <= LIMIT {
        return body.to_owned();
    }
    let mut end = LIMIT;
    while !body.is_char_boundary(end) {
        end -= 1;
    }
    body[..end].to_owned()
}
