//! # Secret Service Errors
//!
//! The two outcomes a caller can get besides success. Both are expected and
//! are reported as part of the normal response contract.

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SecretError {
    /// Write payload was missing, malformed or empty
    #[error("secret payload is missing or empty")]
    Validation,
    /// Id was never stored, has already been read, or is not a valid id
    #[error("secret not found")]
    NotFound,
}

impl SecretError {
    /// Get reason string for metrics and logs
    pub fn as_str(&self) -> &'static str {
        match self {
            SecretError::Validation => "validation",
            SecretError::NotFound => "not_found",
        }
    }
}
