use crate::errors::LexisResult;
use crate::models::Neighbor;

/// A read-only word-embedding space.
///
/// Loaded once and shared by every pipeline stage. Neighbour lists are ordered
/// by descending cosine similarity, ties broken by ascending word, so repeated
/// queries against the same space return identical results.
pub trait IVectorSource: Send + Sync {
    /// Whether `word` has a vector in this space.
    fn has(&self, word: &str) -> bool;

    /// The vector for `word`.
    ///
    /// # Errors
    /// `WordNotFound` if the word is absent.
    fn vector_of(&self, word: &str) -> LexisResult<&[f32]>;

    /// The `k` words nearest to `word`, excluding `word` itself.
    ///
    /// # Errors
    /// `WordNotFound` if the word is absent.
    fn nearest_by_word(&self, word: &str, k: usize) -> LexisResult<Vec<Neighbor>>;

    /// The `k` words nearest to an arbitrary vector.
    ///
    /// # Errors
    /// `DimensionMismatch` if `vector.len() != self.dimensions()`.
    fn nearest_by_vector(&self, vector: &[f32], k: usize) -> LexisResult<Vec<Neighbor>>;

    /// Dimensionality shared by every vector in the space.
    fn dimensions(&self) -> usize;

    /// Number of words in the space.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Human-readable source name.
    fn name(&self) -> &str;
}
