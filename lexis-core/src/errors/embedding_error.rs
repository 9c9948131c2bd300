//! Embedding space errors.

use super::error_code::{self, LexisErrorCode};

/// Errors raised by a vector source or while loading one.
#[derive(Debug, thiserror::Error)]
pub enum EmbeddingError {
    #[error("word not found in embedding space: {word}")]
    WordNotFound { word: String },

    #[error("dimension mismatch: expected {expected}, got {actual}")]
    DimensionMismatch { expected: usize, actual: usize },

    #[error("model load failed: {path}: {reason}")]
    ModelLoadFailed { path: String, reason: String },

    #[error("malformed model at record {record}: {reason}")]
    MalformedModel { record: usize, reason: String },

    #[error("embedding model contains no vectors")]
    EmptyModel,
}

impl LexisErrorCode for EmbeddingError {
    fn error_code(&self) -> &'static str {
        match self {
            Self::WordNotFound { .. } => error_code::LOOKUP_ERROR,
            Self::DimensionMismatch { .. } => error_code::DIMENSION_MISMATCH,
            Self::ModelLoadFailed { .. } | Self::MalformedModel { .. } | Self::EmptyModel => {
                error_code::MODEL_LOAD_ERROR
            }
        }
    }
}
