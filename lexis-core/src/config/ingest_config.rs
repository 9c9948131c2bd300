use serde::{Deserialize, Serialize};

use super::defaults;

/// Dictionary ingestion and preprocessing configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IngestConfig {
    /// Path to the keyed JSON dictionary. Only its keys are read.
    pub dictionary_path: Option<String>,
    /// Tokens shorter than this are dropped.
    pub min_word_length: usize,
    /// Reduce regular plural nouns to their singular form.
    pub lemmatize: bool,
    /// Drop English stop words.
    pub remove_stop_words: bool,
}

impl Default for IngestConfig {
    fn default() -> Self {
        Self {
            dictionary_path: None,
            min_word_length: defaults::DEFAULT_MIN_WORD_LENGTH,
            lemmatize: defaults::DEFAULT_LEMMATIZE,
            remove_stop_words: defaults::DEFAULT_REMOVE_STOP_WORDS,
        }
    }
}
