//! Input file format errors.

use super::error_code::{self, LexisErrorCode};

/// Errors raised while reading the keyed dictionary input.
#[derive(Debug, thiserror::Error)]
pub enum FormatError {
    #[error("cannot read {path}: {reason}")]
    Unreadable { path: String, reason: String },

    #[error("invalid JSON in {path}: {reason}")]
    InvalidJson { path: String, reason: String },

    #[error("top-level value in {path} must be an object, found {found}")]
    NotAnObject { path: String, found: String },
}

impl LexisErrorCode for FormatError {
    fn error_code(&self) -> &'static str {
        error_code::FORMAT_ERROR
    }
}
