//! # lexis-pipeline
//!
//! Seed expansion → projection → PCA → HDBSCAN → centroid labeling.
//!
//! Every stage after projection works on an `AlignedWordVectorTable` or on a
//! label sequence of the same length, so words, vectors and cluster labels
//! cannot drift out of step.

pub mod engine;
pub mod report;
pub mod stages;

pub use engine::{PipelineEngine, PipelineOutput, PipelineStats};
pub use report::ClusterReport;
pub use stages::clustering::HdbscanClusterer;
pub use stages::reduction::{Pca, PcaReducer};
