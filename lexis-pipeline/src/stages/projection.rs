//! Projection: words → aligned (word, vector) table.

use lexis_core::errors::LexisResult;
use lexis_core::models::{AlignedWordVectorTable, Vocabulary};
use lexis_core::traits::IVectorSource;
use tracing::{debug, info};

/// Pair every word present in `source` with its vector, in input order.
///
/// Words the source does not know are dropped. An empty result is valid here;
/// clustering rejects it later.
pub fn project(words: &Vocabulary, source: &dyn IVectorSource) -> LexisResult<AlignedWordVectorTable> {
    let _span = lexis_observability::projection_span!(words.len()).entered();

    let mut table = AlignedWordVectorTable::new();
    let mut dropped = 0usize;
    for word in words {
        if !source.has(word.as_str()) {
            debug!(word = %word, "not in embedding space, dropping");
            dropped += 1;
            continue;
        }
        let vector = source.vector_of(word.as_str())?;
        table.push(word.clone(), vector.to_vec())?;
    }

    info!(kept = table.len(), dropped, "projection complete");
    Ok(table)
}
