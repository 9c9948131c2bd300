//! Seed expansion: union of each seed's nearest neighbours.

use lexis_core::errors::{ExpansionError, LexisResult};
use lexis_core::models::{Neighbor, Vocabulary, Word};
use lexis_core::traits::IVectorSource;
use rayon::prelude::*;
use tracing::{debug, info};

/// Neighbours fetched per seed: `total_target / seeds`, truncating.
///
/// The division is over every seed, present in the source or not, so absent
/// seeds shrink the total rather than enlarging the others' share.
pub fn per_seed_share(total_target: usize, seed_count: usize) -> usize {
    if seed_count == 0 {
        0
    } else {
        total_target / seed_count
    }
}

/// Expand `seeds` into a deduplicated candidate vocabulary.
///
/// Seeds missing from `source` are skipped. The result never contains a
/// seed and may hold fewer than `total_target` words when neighbour sets
/// overlap. Order follows the seeds, then neighbour rank.
///
/// # Errors
/// `ExpansionError::NoSeeds` for an empty seed list, `NoSeedPresent` when
/// no seed is in the source.
pub fn expand(
    seeds: &Vocabulary,
    total_target: usize,
    source: &dyn IVectorSource,
) -> LexisResult<Vocabulary> {
    if seeds.is_empty() {
        return Err(ExpansionError::NoSeeds.into());
    }
    let per_seed = per_seed_share(total_target, seeds.len());
    let _span = lexis_observability::expansion_span!(seeds.len(), per_seed).entered();

    let present: Vec<&Word> = seeds.iter().filter(|s| source.has(s.as_str())).collect();
    for missing in seeds.iter().filter(|s| !source.has(s.as_str())) {
        debug!(seed = %missing, "seed absent from embedding space, skipping");
    }
    if present.is_empty() {
        return Err(ExpansionError::NoSeedPresent {
            seeds: seeds.iter().map(Word::as_str).collect::<Vec<_>>().join(", "),
        }
        .into());
    }

    // Collect keeps seed order regardless of which query finishes first.
    let neighbour_lists: Vec<Vec<Neighbor>> = present
        .par_iter()
        .map(|seed| source.nearest_by_word(seed.as_str(), per_seed))
        .collect::<LexisResult<_>>()?;

    let mut expanded = Vocabulary::new();
    let mut fetched = 0usize;
    for neighbour in neighbour_lists.into_iter().flatten() {
        fetched += 1;
        if !seeds.contains(neighbour.word.as_str()) {
            expanded.insert(neighbour.word);
        }
    }

    info!(
        seeds_present = present.len(),
        fetched,
        expanded = expanded.len(),
        "seed expansion complete"
    );
    Ok(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_truncates() {
        assert_eq!(per_seed_share(60, 3), 20);
        assert_eq!(per_seed_share(10, 3), 3);
        assert_eq!(per_seed_share(2, 3), 0);
        assert_eq!(per_seed_share(10, 0), 0);
    }
}
