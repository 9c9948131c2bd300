use crate::errors::LexisResult;

/// Compresses a batch of vectors to a lower dimensionality.
///
/// Implementations fit on the batch they are given, so two different batches
/// produce projections that are not comparable with each other.
pub trait IDimensionReducer: Send + Sync {
    /// Return one `target_dim`-long vector per input row, in input order.
    ///
    /// # Errors
    /// A reduction error if `target_dim` is zero or exceeds either the row
    /// count or the input dimensionality.
    fn reduce(&self, vectors: &[Vec<f32>], target_dim: usize) -> LexisResult<Vec<Vec<f32>>>;

    fn name(&self) -> &str;
}
