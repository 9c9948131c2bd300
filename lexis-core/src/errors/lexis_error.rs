//! Top-level error type aggregating every subsystem error.

use super::error_code::{self, LexisErrorCode};
use super::{
    AlignmentError, ClusterError, ConfigError, EmbeddingError, ExpansionError, FormatError,
    ReductionError,
};

/// Errors surfaced by any lexis operation.
#[derive(Debug, thiserror::Error)]
pub enum LexisError {
    #[error("embedding error: {0}")]
    EmbeddingError(#[from] EmbeddingError),

    #[error("expansion error: {0}")]
    ExpansionError(#[from] ExpansionError),

    #[error("reduction error: {0}")]
    ReductionError(#[from] ReductionError),

    #[error("cluster error: {0}")]
    ClusterError(#[from] ClusterError),

    #[error("alignment error: {0}")]
    AlignmentError(#[from] AlignmentError),

    #[error("format error: {0}")]
    FormatError(#[from] FormatError),

    #[error("config error: {0}")]
    ConfigError(#[from] ConfigError),

    #[error("invalid word: {reason}")]
    InvalidWord { reason: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),
}

/// Result alias used across the workspace.
pub type LexisResult<T> = Result<T, LexisError>;

impl LexisErrorCode for LexisError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::EmbeddingError(e) => e.error_code(),
            Self::ExpansionError(e) => e.error_code(),
            Self::ReductionError(e) => e.error_code(),
            Self::ClusterError(e) => e.error_code(),
            Self::AlignmentError(e) => e.error_code(),
            Self::FormatError(e) => e.error_code(),
            Self::ConfigError(e) => e.error_code(),
            Self::InvalidWord { .. } => error_code::INVALID_WORD,
            Self::Io(_) => error_code::IO_ERROR,
            Self::SerializationError(_) => error_code::SERIALIZATION_ERROR,
        }
    }
}
