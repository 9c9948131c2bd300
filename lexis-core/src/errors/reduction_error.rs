//! Dimensionality reduction errors.
//!
//! All variants belong to the dimension-mismatch class of the taxonomy.

use super::error_code::{self, LexisErrorCode};

#[derive(Debug, thiserror::Error)]
pub enum ReductionError {
    #[error("target dimensionality must be at least 1")]
    ZeroTarget,

    #[error("target dimensionality {target_dim} exceeds sample count {samples}")]
    TooFewSamples { target_dim: usize, samples: usize },

    #[error("target dimensionality {target_dim} exceeds input dimensionality {input_dim}")]
    TooFewDimensions { target_dim: usize, input_dim: usize },

    #[error("vector {index} has {actual} components, expected {expected}")]
    InconsistentInput {
        index: usize,
        expected: usize,
        actual: usize,
    },
}

impl LexisErrorCode for ReductionError {
    fn error_code(&self) -> &'static str {
        error_code::DIMENSION_MISMATCH
    }
}
