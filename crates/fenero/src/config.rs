//! CLI configuration -- thin wrapper around `fenero_config` shared types.
//!
//! Re-exports the shared types and adds CLI-specific resolution that
//! respects `GlobalOpts` flag overrides (--account-id, --access-token, etc.).

use std::time::Duration;

use secrecy::SecretString;

use fenero_api::{Credentials, DEFAULT_BASE_URL, FeneroClient};

use crate::cli::GlobalOpts;
use crate::error::CliError;

// ── Re-exports from shared crate ────────────────────────────────────

pub use fenero_config::{
    Config, Defaults, KEYRING_SERVICE, Profile, config_path, keyring_key, load_config_or_default,
    save_config,
};

// ── CLI-specific helpers ────────────────────────────────────────────

/// Resolve the active profile name from CLI flags and config.
pub fn active_profile_name(global: &GlobalOpts, config: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| config.default_profile.clone())
        .unwrap_or_else(|| "default".into())
}

/// Comma-separated profile names for error help text.
pub fn available_profiles(config: &Config) -> String {
    let mut names: Vec<_> = config.profiles.keys().cloned().collect();
    if names.is_empty() {
        return "(none)".into();
    }
    names.sort();
    names.join(", ")
}

/// Build a `FeneroClient` for `profile_name` from `cfg` and CLI overrides.
///
/// CLI flags take priority over profile values. Without a matching profile
/// the account id and token must both come from flags / env vars.
pub fn build_client(
    cfg: &Config,
    profile_name: &str,
    global: &GlobalOpts,
) -> Result<FeneroClient, CliError> {
    let profile = match cfg.profiles.get(profile_name) {
        Some(profile) => profile.clone(),
        None if global.account_id.is_some() || global.access_token.is_some() => {
            Profile::default()
        }
        None if global.profile.is_some() => {
            return Err(CliError::ProfileNotFound {
                name: profile_name.to_owned(),
                available: available_profiles(cfg),
            });
        }
        None => {
            return Err(CliError::NoConfig {
                path: config_path().display().to_string(),
            });
        }
    };

    resolve_client(&profile, profile_name, &cfg.defaults, global)
}

/// Translate a `Profile` + global flags into a `FeneroClient`.
pub fn resolve_client(
    profile: &Profile,
    profile_name: &str,
    defaults: &Defaults,
    global: &GlobalOpts,
) -> Result<FeneroClient, CliError> {
    // 1. Account id (flag > env > profile)
    let account_id = global
        .account_id
        .clone()
        .unwrap_or_else(|| profile.account_id.clone());
    if account_id.is_empty() {
        return Err(CliError::Validation {
            field: "account_id".into(),
            reason: "no account id given; pass --account-id or set it on the profile".into(),
        });
    }

    // 2. Access token (flag > env > keyring > plaintext)
    let token = match global.access_token {
        Some(ref token) => SecretString::from(token.clone()),
        None => fenero_config::resolve_access_token(profile, profile_name)?,
    };

    // 3. Base URL (flag > env > profile > default)
    let base_url = global
        .base_url
        .as_deref()
        .or(profile.base_url.as_deref())
        .unwrap_or(DEFAULT_BASE_URL);

    // 4. Transport (timeout flag > profile > defaults)
    let mut transport = fenero_config::profile_transport(profile, defaults);
    if let Some(secs) = global.timeout {
        transport.timeout = Some(Duration::from_secs(secs));
    }

    let http = transport.build_client()?;
    let credentials = Credentials::new(account_id, token);
    Ok(FeneroClient::with_client(http, base_url, credentials)?)
}
