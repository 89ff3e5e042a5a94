//! CLI configuration: profile resolution with flag overrides.
//!
//! File and env loading live in `hostdesk-config`; this module layers the
//! `GlobalOpts` flags on top and produces the core `ConsoleConfig`.

use hostdesk_config::{Config, Profile};
use hostdesk_core::ConsoleConfig;

use crate::cli::GlobalOpts;
use crate::error::CliError;

/// Name of the profile this invocation uses.
pub fn active_profile_name(global: &GlobalOpts, cfg: &Config) -> String {
    global
        .profile
        .clone()
        .or_else(|| cfg.default_profile.clone())
        .unwrap_or_else(|| hostdesk_config::DEFAULT_PROFILE.into())
}

/// Apply `--api-url`, `--insecure`, and `--timeout` to a resolved profile.
pub fn apply_overrides(mut profile: Profile, global: &GlobalOpts) -> Profile {
    if let Some(ref url) = global.api_url {
        profile.api_url.clone_from(url);
    }
    if global.insecure {
        profile.insecure = Some(true);
    }
    if let Some(secs) = global.timeout {
        profile.timeout = Some(secs);
    }
    profile
}

/// Build a `ConsoleConfig` from the config file, profile, and flag overrides.
pub fn build_console_config(global: &GlobalOpts) -> Result<ConsoleConfig, CliError> {
    let cfg = hostdesk_config::load_config()?;
    let (name, profile) = cfg.resolve_profile(global.profile.as_deref())?;
    tracing::debug!(profile = %name, "resolved profile");

    let profile = apply_overrides(profile, global);
    Ok(hostdesk_config::profile_to_console_config(
        &profile,
        &cfg.defaults,
    )?)
}
