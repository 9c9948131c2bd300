//! Nearest-by-word result cache using moka.
//!
//! Seed expansion and repeated CLI lookups ask for the same `(word, k)` pairs;
//! the store is immutable so cached results never go stale.

use moka::sync::Cache;

use lexis_core::models::Neighbor;

/// Bounded cache of neighbour lists keyed by `(word, k)`.
pub struct NeighborCache {
    cache: Cache<(String, usize), Vec<Neighbor>>,
}

impl NeighborCache {
    /// Create a new cache with the given max entry count.
    pub fn new(max_entries: u64) -> Self {
        let cache = Cache::builder().max_capacity(max_entries).build();
        Self { cache }
    }

    pub fn get(&self, word: &str, k: usize) -> Option<Vec<Neighbor>> {
        self.cache.get(&(word.to_string(), k))
    }

    pub fn insert(&self, word: &str, k: usize, neighbors: Vec<Neighbor>) {
        self.cache.insert((word.to_string(), k), neighbors);
    }

    /// Number of entries currently in the cache.
    pub fn len(&self) -> u64 {
        self.cache.entry_count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Invalidate all entries.
    pub fn clear(&self) {
        self.cache.invalidate_all();
    }
}
