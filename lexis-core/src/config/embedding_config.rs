use serde::{Deserialize, Serialize};

use super::defaults;

/// On-disk layout of an embedding model file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModelFormat {
    /// Pick by extension: `.bin` is binary, anything else text.
    #[default]
    Auto,
    /// word2vec/GloVe text: optional `count dim` header, then `word v1 .. vd`.
    Text,
    /// word2vec binary: header line, then `word ` and `dim` little-endian f32s.
    Binary,
}

/// Embedding space configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EmbeddingConfig {
    /// Path to the embedding model file.
    pub model_path: Option<String>,
    /// File format of the model.
    pub format: ModelFormat,
    /// Load only the first N vectors.
    pub limit: Option<usize>,
    /// Max cached nearest-by-word results.
    pub neighbor_cache_size: u64,
}

impl Default for EmbeddingConfig {
    fn default() -> Self {
        Self {
            model_path: None,
            format: ModelFormat::Auto,
            limit: None,
            neighbor_cache_size: defaults::DEFAULT_NEIGHBOR_CACHE_SIZE,
        }
    }
}
