// ── Local input validation ──
//
// Checks that run before any dispatch. A failure never reaches the
// store or the network.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Return true if `email` has a local part, an `@`, and a dotted domain.
pub fn is_valid_email(email: &str) -> bool {
    static RE: LazyLock<Regex> = LazyLock::new(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex")
    });
    RE.is_match(email)
}

/// Reject an email that [`is_valid_email`] does not accept.
pub fn validate_email(email: &str) -> Result<(), CoreError> {
    if is_valid_email(email) {
        Ok(())
    } else {
        Err(CoreError::validation(format!("invalid email address: {email:?}")))
    }
}

/// Reject an empty or whitespace-only value for the named field.
pub(crate) fn require(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        Err(CoreError::validation(format!("{field} is required")))
    } else {
        Ok(())
    }
}
