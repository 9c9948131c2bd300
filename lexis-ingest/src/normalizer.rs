//! Word normalisation for preprocessing.

use lexis_core::config::IngestConfig;
use lexis_core::models::{Vocabulary, Word};
use tracing::debug;

use crate::lemmatizer::lemmatize;
use crate::stopwords::is_stop_word;

/// Turns raw tokens into normalised words: lowercase, alphabetic only, long
/// enough, not a stop word, optionally lemmatised. Output is deduplicated.
#[derive(Debug, Clone)]
pub struct Preprocessor {
    min_word_length: usize,
    lemmatize: bool,
    remove_stop_words: bool,
}

impl Preprocessor {
    pub fn new(config: &IngestConfig) -> Self {
        Self {
            min_word_length: config.min_word_length,
            lemmatize: config.lemmatize,
            remove_stop_words: config.remove_stop_words,
        }
    }

    /// Normalises a single token.
    ///
    /// Returns `None` if the token should be filtered out.
    pub fn normalize(&self, token: &str) -> Option<Word> {
        let lowered = token.trim().to_lowercase();

        if lowered.is_empty() || !lowered.chars().all(char::is_alphabetic) {
            return None;
        }
        if self.remove_stop_words && is_stop_word(&lowered) {
            return None;
        }

        let lemma = if self.lemmatize {
            lemmatize(&lowered)
        } else {
            lowered
        };

        if lemma.chars().count() < self.min_word_length {
            return None;
        }
        Word::new(lemma).ok()
    }

    /// Normalises every token and deduplicates, keeping first occurrences.
    pub fn process<I, S>(&self, tokens: I) -> Vocabulary
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut seen = 0usize;
        let vocabulary: Vocabulary = tokens
            .into_iter()
            .inspect(|_| seen += 1)
            .filter_map(|token| self.normalize(token.as_ref()))
            .collect();
        debug!(
            input = seen,
            output = vocabulary.len(),
            "preprocessed tokens"
        );
        vocabulary
    }
}

impl Default for Preprocessor {
    fn default() -> Self {
        Self::new(&IngestConfig::default())
    }
}
