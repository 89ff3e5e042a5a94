// ── Core error types ──
//
// User-facing errors from hostdesk-core. Consumers never match on HTTP
// status codes or JSON failures: every transport-layer error collapses
// into `OperationFailed` carrying the message the store records.

use thiserror::Error;

/// Unified error type for the core crate.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum CoreError {
    // ── Operation errors ─────────────────────────────────────────────
    /// A remote call failed. `message` is exactly what the store's
    /// `error` field shows after the rejected transition.
    #[error("Operation failed: {message}")]
    OperationFailed { message: String },

    /// Input was rejected locally, before any network call.
    #[error("Validation failed: {message}")]
    ValidationFailed { message: String },

    // ── Configuration errors ─────────────────────────────────────────
    #[error("Configuration error: {message}")]
    Config { message: String },

    // ── Internal errors ──────────────────────────────────────────────
    #[error("Internal error: {0}")]
    Internal(String),
}

impl CoreError {
    pub(crate) fn validation(message: impl Into<String>) -> Self {
        Self::ValidationFailed {
            message: message.into(),
        }
    }

    /// The bare message, without the variant prefix.
    pub fn message(&self) -> &str {
        match self {
            Self::OperationFailed { message }
            | Self::ValidationFailed { message }
            | Self::Config { message }
            | Self::Internal(message) => message,
        }
    }
}

// ── Conversion from transport-layer errors ───────────────────────────

impl From<hostdesk_api::Error> for CoreError {
    fn from(err: hostdesk_api::Error) -> Self {
        match err {
            hostdesk_api::Error::InvalidUrl(e) => CoreError::Config {
                message: format!("Invalid URL: {e}"),
            },
            hostdesk_api::Error::Tls(msg) => CoreError::Config {
                message: format!("TLS error: {msg}"),
            },
            other => CoreError::OperationFailed {
                message: other.to_string(),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_errors_keep_the_status_message() {
        let api = hostdesk_api::Error::Http {
            status: 500,
            message: "Request failed with status code 500".into(),
        };
        let err = CoreError::from(api);
        assert_eq!(err.message(), "Request failed with status code 500");
        assert_eq!(
            err.to_string(),
            "Operation failed: Request failed with status code 500"
        );
    }

    #[test]
    fn deserialization_errors_become_operation_failures() {
        let api = hostdesk_api::Error::Deserialization {
            message: "missing field `id`".into(),
            body: "{}".into(),
        };
        assert!(matches!(
            CoreError::from(api),
            CoreError::OperationFailed { ref message } if message.contains("missing field")
        ));
    }
}
