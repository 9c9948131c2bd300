//! Error handling for lexis.
//! One error enum per subsystem, `thiserror` only, aggregated into `LexisError`.

pub mod alignment_error;
pub mod cluster_error;
pub mod config_error;
pub mod embedding_error;
pub mod error_code;
pub mod expansion_error;
pub mod format_error;
pub mod lexis_error;
pub mod reduction_error;

pub use alignment_error::AlignmentError;
pub use cluster_error::ClusterError;
pub use config_error::ConfigError;
pub use embedding_error::EmbeddingError;
pub use error_code::LexisErrorCode;
pub use expansion_error::ExpansionError;
pub use format_error::FormatError;
pub use lexis_error::{LexisError, LexisResult};
pub use reduction_error::ReductionError;
