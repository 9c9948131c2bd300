use crate::errors::LexisResult;
use crate::models::ClusterLabel;

/// Density-based partitioner: one label per input vector, noise allowed.
pub trait IClusterer: Send + Sync {
    /// Label every vector, preserving input order and length.
    ///
    /// Every non-noise label appears at least `min_cluster_size` times.
    ///
    /// # Errors
    /// `ClusterError` on empty input or `min_cluster_size < 2`.
    fn cluster(&self, vectors: &[Vec<f32>], min_cluster_size: usize)
        -> LexisResult<Vec<ClusterLabel>>;

    fn name(&self) -> &str;
}
