//! Configuration system for lexis.
//! TOML-based, 3-layer resolution: CLI > env > file > defaults.

pub mod clustering_config;
pub mod defaults;
pub mod embedding_config;
pub mod expansion_config;
pub mod ingest_config;
pub mod lexis_config;
pub mod observability_config;
pub mod output_config;
pub mod reduction_config;

pub use clustering_config::ClusteringConfig;
pub use embedding_config::{EmbeddingConfig, ModelFormat};
pub use expansion_config::ExpansionConfig;
pub use ingest_config::IngestConfig;
pub use lexis_config::{CliOverrides, LexisConfig};
pub use observability_config::ObservabilityConfig;
pub use output_config::OutputConfig;
pub use reduction_config::ReductionConfig;
