/// Clustering errors.
#[derive(Debug, thiserror::Error)]
pub enum ClusterError {
    #[error("cannot cluster an empty vector set")]
    EmptyInput,

    #[error("min_cluster_size must be at least 2, got {min_cluster_size}")]
    InvalidMinClusterSize { min_cluster_size: usize },

    #[error("clustering failed: {reason}")]
    ClusteringFailed { reason: String },
}

impl super::LexisErrorCode for ClusterError {
    fn error_code(&self) -> &'static str {
        super::error_code::CLUSTER_ERROR
    }
}
