use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::errors::{LexisError, LexisResult};

/// A normalized, non-empty word token.
///
/// Normalisation (lowercasing, lemmatisation) happens before a word is
/// constructed; `Word` only guarantees it is non-empty and free of whitespace.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Word(String);

impl Word {
    pub fn new(text: impl Into<String>) -> LexisResult<Self> {
        let text = text.into();
        if text.is_empty() {
            return Err(LexisError::InvalidWord {
                reason: "word is empty".to_string(),
            });
        }
        if text.chars().any(char::is_whitespace) {
            return Err(LexisError::InvalidWord {
                reason: format!("word {text:?} contains whitespace"),
            });
        }
        Ok(Self(text))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Word {
    type Error = LexisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<&str> for Word {
    type Error = LexisError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Word> for String {
    fn from(word: Word) -> Self {
        word.0
    }
}

impl AsRef<str> for Word {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for Word {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Word {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
