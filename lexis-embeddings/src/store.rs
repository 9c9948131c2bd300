//! EmbeddingStore: the immutable in-memory vector source.
//!
//! Rows live in one flat row-major matrix, with a second matrix of the same
//! rows scaled to unit length so cosine similarity is a dot product.

use std::collections::HashMap;
use std::fmt;

use lexis_core::errors::{EmbeddingError, LexisResult};
use lexis_core::models::{Neighbor, Word};
use lexis_core::traits::IVectorSource;
use rayon::prelude::*;
use tracing::{debug, warn};

use crate::cache::NeighborCache;
use crate::similarity;

pub struct EmbeddingStore {
    name: String,
    words: Vec<Word>,
    index: HashMap<Word, usize>,
    dims: usize,
    matrix: Vec<f32>,
    unit_matrix: Vec<f32>,
    cache: NeighborCache,
}

impl EmbeddingStore {
    /// Build a store from `(word, vector)` pairs.
    ///
    /// A repeated word keeps its first vector.
    ///
    /// # Errors
    /// `DimensionMismatch` if the vectors are ragged, `EmptyModel` if no pair
    /// is given.
    pub fn from_pairs(
        name: impl Into<String>,
        pairs: impl IntoIterator<Item = (Word, Vec<f32>)>,
        cache_size: u64,
    ) -> LexisResult<Self> {
        let mut words = Vec::new();
        let mut index = HashMap::new();
        let mut matrix = Vec::new();
        let mut dims: Option<usize> = None;

        for (word, vector) in pairs {
            let expected = *dims.get_or_insert(vector.len());
            if vector.len() != expected {
                return Err(EmbeddingError::DimensionMismatch {
                    expected,
                    actual: vector.len(),
                }
                .into());
            }
            if index.contains_key(&word) {
                warn!(word = %word, "duplicate word in embedding model, keeping first vector");
                continue;
            }
            index.insert(word.clone(), words.len());
            words.push(word);
            matrix.extend_from_slice(&vector);
        }

        let dims = match dims {
            Some(d) if d > 0 => d,
            Some(_) => {
                return Err(EmbeddingError::DimensionMismatch {
                    expected: 1,
                    actual: 0,
                }
                .into())
            }
            None => return Err(EmbeddingError::EmptyModel.into()),
        };

        let unit_matrix = matrix
            .chunks_exact(dims)
            .flat_map(similarity::normalized)
            .collect();

        let store = Self {
            name: name.into(),
            words,
            index,
            dims,
            matrix,
            unit_matrix,
            cache: NeighborCache::new(cache_size),
        };
        debug!(
            name = %store.name,
            words = store.words.len(),
            dims = store.dims,
            "embedding store built"
        );
        Ok(store)
    }

    /// Words in load order.
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    pub fn cache(&self) -> &NeighborCache {
        &self.cache
    }

    fn row(&self, i: usize) -> &[f32] {
        &self.matrix[i * self.dims..(i + 1) * self.dims]
    }

    fn unit_row(&self, i: usize) -> &[f32] {
        &self.unit_matrix[i * self.dims..(i + 1) * self.dims]
    }

    /// Score every row against a unit-length query, skip `exclude`, keep the best `k`.
    fn rank(&self, unit_query: &[f32], k: usize, exclude: Option<usize>) -> Vec<Neighbor> {
        if k == 0 {
            return Vec::new();
        }
        let mut scored: Vec<(usize, f32)> = (0..self.words.len())
            .into_par_iter()
            .filter(|&i| Some(i) != exclude)
            .map(|i| (i, similarity::dot(self.unit_row(i), unit_query)))
            .collect();

        let by_rank = |a: &(usize, f32), b: &(usize, f32)| {
            Neighbor::score_order(a.1, b.1).then_with(|| self.words[a.0].cmp(&self.words[b.0]))
        };

        if scored.len() > k {
            scored.select_nth_unstable_by(k - 1, by_rank);
            scored.truncate(k);
        }
        scored.sort_by(by_rank);

        scored
            .into_iter()
            .map(|(i, score)| Neighbor::new(self.words[i].clone(), score))
            .collect()
    }
}

impl fmt::Debug for EmbeddingStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EmbeddingStore")
            .field("name", &self.name)
            .field("words", &self.words.len())
            .field("dims", &self.dims)
            .finish_non_exhaustive()
    }
}

impl IVectorSource for EmbeddingStore {
    fn has(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    fn vector_of(&self, word: &str) -> LexisResult<&[f32]> {
        self.index
            .get(word)
            .map(|&i| self.row(i))
            .ok_or_else(|| {
                EmbeddingError::WordNotFound {
                    word: word.to_string(),
                }
                .into()
            })
    }

    fn nearest_by_word(&self, word: &str, k: usize) -> LexisResult<Vec<Neighbor>> {
        let &i = self.index.get(word).ok_or_else(|| EmbeddingError::WordNotFound {
            word: word.to_string(),
        })?;
        if let Some(hit) = self.cache.get(word, k) {
            return Ok(hit);
        }
        let neighbors = self.rank(self.unit_row(i), k, Some(i));
        self.cache.insert(word, k, neighbors.clone());
        Ok(neighbors)
    }

    fn nearest_by_vector(&self, vector: &[f32], k: usize) -> LexisResult<Vec<Neighbor>> {
        if vector.len() != self.dims {
            return Err(EmbeddingError::DimensionMismatch {
                expected: self.dims,
                actual: vector.len(),
            }
            .into());
        }
        let query = similarity::normalized(vector);
        Ok(self.rank(&query, k, None))
    }

    fn dimensions(&self) -> usize {
        self.dims
    }

    fn len(&self) -> usize {
        self.words.len()
    }

    fn name(&self) -> &str {
        &self.name
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    fn store() -> EmbeddingStore {
        EmbeddingStore::from_pairs(
            "test",
            vec![
                (w("cat"), vec![1.0, 0.0, 0.0]),
                (w("dog"), vec![0.9, 0.1, 0.0]),
                (w("car"), vec![0.0, 1.0, 0.0]),
                (w("bus"), vec![0.0, 0.9, 0.1]),
                (w("sky"), vec![0.0, 0.0, 1.0]),
            ],
            100,
        )
        .unwrap()
    }

    #[test]
    fn debug_summarises_without_dumping_vectors() {
        let out = format!("{:?}", store());
        assert!(out.starts_with("EmbeddingStore"));
        assert!(out.contains("words: 5"));
        assert!(out.contains("dims: 3"));
    }

    #[test]
    fn vector_lookup_and_membership() {
        let s = store();
        assert!(s.has("cat"));
        assert!(!s.has("emu"));
        assert_eq!(s.vector_of("car").unwrap(), &[0.0, 1.0, 0.0]);
        assert!(s.vector_of("emu").is_err());
    }

    #[test]
    fn nearest_by_word_excludes_query() {
        let s = store();
        let hits = s.nearest_by_word("cat", 2).unwrap();
        assert_eq!(hits.len(), 2);
        assert_eq!(hits[0].word.as_str(), "dog");
        assert!(hits.iter().all(|n| n.word.as_str() != "cat"));
    }

    #[test]
    fn nearest_by_word_unknown_is_lookup_error() {
        let s = store();
        assert!(s.nearest_by_word("emu", 3).is_err());
    }

    #[test]
    fn nearest_by_vector_checks_dimensions() {
        let s = store();
        assert!(s.nearest_by_vector(&[1.0, 0.0], 1).is_err());
        let hits = s.nearest_by_vector(&[0.0, 0.0, 2.0], 1).unwrap();
        assert_eq!(hits[0].word.as_str(), "sky");
    }

    #[test]
    fn ties_break_by_word() {
        let s = EmbeddingStore::from_pairs(
            "ties",
            vec![
                (w("zulu"), vec![1.0, 0.0]),
                (w("alpha"), vec![2.0, 0.0]),
                (w("mike"), vec![0.0, 1.0]),
            ],
            10,
        )
        .unwrap();
        let hits = s.nearest_by_vector(&[1.0, 0.0], 3).unwrap();
        let order: Vec<&str> = hits.iter().map(|n| n.word.as_str()).collect();
        assert_eq!(order, vec!["alpha", "zulu", "mike"]);
    }

    #[test]
    fn k_larger_than_space_returns_everything_else() {
        let s = store();
        assert_eq!(s.nearest_by_word("cat", 50).unwrap().len(), 4);
        assert_eq!(s.nearest_by_vector(&[1.0, 1.0, 1.0], 50).unwrap().len(), 5);
        assert!(s.nearest_by_word("cat", 0).unwrap().is_empty());
    }

    #[test]
    fn repeated_query_is_served_from_cache() {
        let s = store();
        let first = s.nearest_by_word("car", 2).unwrap();
        assert!(s.cache().get("car", 2).is_some());
        assert_eq!(s.nearest_by_word("car", 2).unwrap(), first);
    }

    #[test]
    fn duplicate_words_keep_first_vector() {
        let s = EmbeddingStore::from_pairs(
            "dups",
            vec![(w("a"), vec![1.0, 0.0]), (w("a"), vec![0.0, 1.0])],
            10,
        )
        .unwrap();
        assert_eq!(s.len(), 1);
        assert_eq!(s.vector_of("a").unwrap(), &[1.0, 0.0]);
    }

    #[test]
    fn ragged_and_empty_inputs_are_rejected() {
        assert!(EmbeddingStore::from_pairs(
            "ragged",
            vec![(w("a"), vec![1.0, 0.0]), (w("b"), vec![1.0])],
            10
        )
        .is_err());
        assert!(EmbeddingStore::from_pairs("empty", Vec::new(), 10).is_err());
    }
}
