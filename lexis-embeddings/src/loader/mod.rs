//! Embedding model loading.
//!
//! Supports the two word2vec layouts: plain text and binary.

pub mod binary;
pub mod text;

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use lexis_core::config::{EmbeddingConfig, ModelFormat};
use lexis_core::errors::{EmbeddingError, LexisResult};
use lexis_core::traits::IVectorSource;
use tracing::info;

use crate::store::EmbeddingStore;

/// Load an embedding store from `path` according to `config`.
///
/// # Errors
/// `ModelLoadFailed` if the file cannot be opened, `MalformedModel` on a bad
/// record, `EmptyModel` if no vectors were read.
pub fn load_model(path: &Path, config: &EmbeddingConfig) -> LexisResult<EmbeddingStore> {
    let file = File::open(path).map_err(|e| EmbeddingError::ModelLoadFailed {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let reader = BufReader::new(file);

    let format = resolve_format(path, config.format);
    let pairs = match format {
        ModelFormat::Binary => binary::read_pairs(reader, config.limit)?,
        _ => text::read_pairs(reader, config.limit)?,
    };

    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string());
    let store = EmbeddingStore::from_pairs(name, pairs, config.neighbor_cache_size)?;

    info!(
        path = %path.display(),
        format = ?format,
        words = store.len(),
        dims = store.dimensions(),
        "embedding model loaded"
    );
    Ok(store)
}

/// Resolve `Auto` by file extension: `.bin` is binary, everything else text.
pub fn resolve_format(path: &Path, format: ModelFormat) -> ModelFormat {
    match format {
        ModelFormat::Auto => match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("bin") => ModelFormat::Binary,
            _ => ModelFormat::Text,
        },
        other => other,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn auto_format_follows_extension() {
        assert_eq!(
            resolve_format(Path::new("vectors.bin"), ModelFormat::Auto),
            ModelFormat::Binary
        );
        assert_eq!(
            resolve_format(Path::new("glove.6B.50d.txt"), ModelFormat::Auto),
            ModelFormat::Text
        );
        assert_eq!(
            resolve_format(Path::new("vectors.bin"), ModelFormat::Text),
            ModelFormat::Text
        );
    }
}
