//! Structured error value handed across the bridge boundary.

use serde::{Deserialize, Serialize};

use super::error_code;

/// Diagnostic record produced when the bridge intercepts a panic.
///
/// Immutable once constructed and fully owned by the caller after the bridge
/// returns. `domain` and `code` fall back to [`error_code::DOMAIN_PANIC`] and
/// [`error_code::CODE_GENERIC`] when the panic payload supplies neither.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error, Serialize, Deserialize)]
#[error("[{domain}:{code}] {message}")]
pub struct ErrorInfo {
    /// Identifies the subsystem or failure family the error belongs to.
    pub domain: String,
    /// Numeric error code within the domain.
    pub code: i64,
    /// Human-readable description derived from the panic message.
    pub message: String,
}

impl ErrorInfo {
    /// Create an error with an explicit domain and code.
    pub fn new(domain: impl Into<String>, code: i64, message: impl Into<String>) -> Self {
        Self {
            domain: domain.into(),
            code,
            message: message.into(),
        }
    }

    /// Create an error in the default panic domain with the generic code.
    /// An empty message is replaced so the record never lacks a description.
    pub fn from_message(message: impl Into<String>) -> Self {
        let mut message = message.into();
        if message.is_empty() {
            message = error_code::MESSAGE_OPAQUE.to_string();
        }
        Self::new(error_code::DOMAIN_PANIC, error_code::CODE_GENERIC, message)
    }
}
