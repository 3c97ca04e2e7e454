//! CLI error types with miette diagnostics.
//!
//! Maps `fenero_api::Error` and `ConfigError` variants into user-facing
//! errors with actionable help text.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use fenero_config::ConfigError;

/// Process exit codes.
pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const AUTH: i32 = 3;
    pub const NOT_FOUND: i32 = 4;
    pub const CONNECTION: i32 = 7;
    pub const TIMEOUT: i32 = 8;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── Connection ───────────────────────────────────────────────────

    #[error("Could not reach the MobileApi at {url}")]
    #[diagnostic(
        code(fenero::connection_failed),
        help(
            "Check network access to the Fenero host.\n\
             URL: {url}"
        )
    )]
    ConnectionFailed {
        url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    #[error("TLS setup failed: {message}")]
    #[diagnostic(
        code(fenero::tls_error),
        help("Check the ca_cert path configured for this profile.")
    )]
    TlsError { message: String },

    #[error("Request timed out")]
    #[diagnostic(
        code(fenero::timeout),
        help("Increase the timeout with --timeout or unset it to wait indefinitely.")
    )]
    Timeout,

    // ── Authentication ───────────────────────────────────────────────

    #[error("{operation} was rejected (HTTP {status})")]
    #[diagnostic(
        code(fenero::auth_failed),
        help(
            "Verify the account id and access token.\n\
             Run: fenero config set-token --profile {profile}"
        )
    )]
    AuthFailed {
        operation: String,
        status: u16,
        profile: String,
    },

    #[error("No access token configured for profile '{profile}'")]
    #[diagnostic(
        code(fenero::no_credentials),
        help(
            "Configure credentials with: fenero config init\n\
             Or set FENERO_ACCOUNT_ID and FENERO_ACCESS_TOKEN."
        )
    )]
    NoCredentials { profile: String },

    // ── API ──────────────────────────────────────────────────────────

    #[error("{operation} failed with HTTP {status}")]
    #[diagnostic(code(fenero::request_failed))]
    RequestFailed {
        operation: String,
        status: u16,
        #[help]
        body: Option<String>,
    },

    #[error("Unexpected response: {message}")]
    #[diagnostic(code(fenero::unexpected_response))]
    UnexpectedResponse {
        message: String,
        #[help]
        body: Option<String>,
    },

    // ── Validation ───────────────────────────────────────────────────

    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(fenero::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────

    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(fenero::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: fenero config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("Configuration file not found")]
    #[diagnostic(
        code(fenero::no_config),
        help(
            "Create one with: fenero config init\n\
             Expected at: {path}\n\
             Or pass --account-id and --access-token."
        )
    )]
    NoConfig { path: String },

    #[error(transparent)]
    #[diagnostic(code(fenero::config))]
    Config(Box<figment::Error>),

    // ── IO ───────────────────────────────────────────────────────────

    #[error("Failed to write {}", path.display())]
    #[diagnostic(code(fenero::write_failed))]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for CliError {
    fn from(err: figment::Error) -> Self {
        Self::Config(Box::new(err))
    }
}

impl CliError {
    /// Attach the active profile name to auth failures for the help text.
    pub fn with_profile(mut self, name: &str) -> Self {
        if let Self::AuthFailed { ref mut profile, .. } = self {
            name.clone_into(profile);
        }
        self
    }

    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::ConnectionFailed { .. } | Self::TlsError { .. } => exit_code::CONNECTION,
            Self::AuthFailed { .. } | Self::NoCredentials { .. } => exit_code::AUTH,
            Self::RequestFailed { status: 404, .. } | Self::ProfileNotFound { .. } => {
                exit_code::NOT_FOUND
            }
            Self::Timeout => exit_code::TIMEOUT,
            Self::Validation { .. } | Self::NoConfig { .. } => exit_code::USAGE,
            _ => exit_code::GENERAL,
        }
    }
}

fn non_empty(body: String) -> Option<String> {
    (!body.trim().is_empty()).then_some(body)
}

// ── fenero_api::Error → CliError mapping ─────────────────────────────

impl From<fenero_api::Error> for CliError {
    fn from(err: fenero_api::Error) -> Self {
        use fenero_api::Error as Api;

        match err {
            Api::RequestFailed {
                operation,
                status: status @ (401 | 403),
                ..
            } => CliError::AuthFailed {
                operation,
                status,
                profile: "default".into(),
            },

            Api::RequestFailed {
                operation,
                status,
                body,
            } => CliError::RequestFailed {
                operation,
                status,
                body: non_empty(body),
            },

            Api::Transport(e) if e.is_timeout() => CliError::Timeout,

            Api::Transport(e) => CliError::ConnectionFailed {
                url: e
                    .url()
                    .map_or_else(|| "(unknown)".into(), |u| u.origin().ascii_serialization()),
                source: Box::new(e),
            },

            Api::InvalidUrl(e) => CliError::Validation {
                field: "base_url".into(),
                reason: e.to_string(),
            },

            Api::Tls(message) => CliError::TlsError { message },

            Api::Deserialization { message, body } => CliError::UnexpectedResponse {
                message,
                body: non_empty(body),
            },

            Api::InvalidArgument(reason) => CliError::Validation {
                field: "argument".into(),
                reason,
            },

            Api::Io { path, source } => CliError::WriteFailed { path, source },
        }
    }
}

// ── ConfigError → CliError mapping ───────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => CliError::Validation { field, reason },
            ConfigError::NoCredentials { profile } => CliError::NoCredentials { profile },
            ConfigError::Serialization(e) => CliError::Validation {
                field: "config".into(),
                reason: e.to_string(),
            },
            ConfigError::Figment(e) => CliError::Config(e),
            ConfigError::Io(e) => CliError::Io(e),
            ConfigError::Api(e) => e.into(),
        }
    }
}
