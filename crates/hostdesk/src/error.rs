//! CLI error types with miette diagnostics.
//!
//! Maps `CoreError` and `ConfigError` into user-facing errors with help text
//! and a stable process exit code.

use miette::Diagnostic;
use thiserror::Error;

use hostdesk_config::ConfigError;
use hostdesk_core::CoreError;

pub mod exit_code {
    pub const GENERAL: i32 = 1;
    pub const USAGE: i32 = 2;
    pub const CONFIG: i32 = 3;
    pub const API: i32 = 4;
}

#[derive(Debug, Error, Diagnostic)]
pub enum CliError {
    // ── API ──────────────────────────────────────────────────────────
    #[error("{message}")]
    #[diagnostic(
        code(hostdesk::operation_failed),
        help(
            "The API at {api_url} rejected or never answered the request.\n\
             Re-run with -vv for request details, or point --api-url at another host."
        )
    )]
    OperationFailed { message: String, api_url: String },

    // ── Validation ───────────────────────────────────────────────────
    #[error("Invalid value for {field}: {reason}")]
    #[diagnostic(code(hostdesk::validation))]
    Validation { field: String, reason: String },

    // ── Configuration ────────────────────────────────────────────────
    #[error("Profile '{name}' not found in configuration")]
    #[diagnostic(
        code(hostdesk::profile_not_found),
        help(
            "Available profiles: {available}\n\
             Create one with: hostdesk config init"
        )
    )]
    ProfileNotFound { name: String, available: String },

    #[error("{message}")]
    #[diagnostic(
        code(hostdesk::config),
        help("Check {path} or run: hostdesk config init")
    )]
    Config { message: String, path: String },

    // ── Session ──────────────────────────────────────────────────────
    #[error("Nobody is signed in")]
    #[diagnostic(
        code(hostdesk::no_session),
        help("Sign in with: hostdesk session set --email <EMAIL> --name <NAME>")
    )]
    NoSession,

    // ── Interactive ──────────────────────────────────────────────────
    #[error("'{action}' needs an interactive terminal")]
    #[diagnostic(
        code(hostdesk::interactive_required),
        help("Use --yes (-y) to accept defaults in non-interactive contexts.")
    )]
    NonInteractive { action: String },

    // ── IO / Serialization ───────────────────────────────────────────
    #[error(transparent)]
    #[diagnostic(code(hostdesk::io))]
    Io(#[from] std::io::Error),

    #[error("Invalid JSON payload: {0}")]
    #[diagnostic(code(hostdesk::json), help("Check the JSON file contents and try again."))]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    #[diagnostic(code(hostdesk::internal))]
    Internal(String),
}

impl CliError {
    /// Map this error to an exit code for process termination.
    pub fn exit_code(&self) -> i32 {
        match self {
            Self::Validation { .. } | Self::NonInteractive { .. } => exit_code::USAGE,
            Self::ProfileNotFound { .. } | Self::Config { .. } | Self::NoSession => {
                exit_code::CONFIG
            }
            Self::OperationFailed { .. } => exit_code::API,
            Self::Io(_) | Self::Json(_) | Self::Internal(_) => exit_code::GENERAL,
        }
    }

    /// Attach the API host to an operation failure.
    pub fn at(self, api_url: &url::Url) -> Self {
        match self {
            Self::OperationFailed { message, .. } => Self::OperationFailed {
                message,
                api_url: api_url.to_string(),
            },
            other => other,
        }
    }
}

// ── CoreError → CliError ─────────────────────────────────────────────

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::OperationFailed { message } => Self::OperationFailed {
                message,
                api_url: "(configured API)".into(),
            },
            CoreError::ValidationFailed { message } => Self::Validation {
                field: "input".into(),
                reason: message,
            },
            CoreError::Config { message } => Self::Config {
                message,
                path: hostdesk_config::config_path().display().to_string(),
            },
            CoreError::Internal(message) => Self::Internal(message),
        }
    }
}

// ── ConfigError → CliError ───────────────────────────────────────────

impl From<ConfigError> for CliError {
    fn from(err: ConfigError) -> Self {
        match err {
            ConfigError::Validation { field, reason } => Self::Validation { field, reason },
            ConfigError::UnknownProfile { name } => {
                let cfg = hostdesk_config::load_config_or_default();
                let mut available: Vec<_> = cfg.profiles.keys().cloned().collect();
                available.sort();
                Self::ProfileNotFound {
                    name,
                    available: if available.is_empty() {
                        "(none)".into()
                    } else {
                        available.join(", ")
                    },
                }
            }
            ConfigError::Io(e) => Self::Io(e),
            other => Self::Config {
                message: other.to_string(),
                path: hostdesk_config::config_path().display().to_string(),
            },
        }
    }
}
