use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::Word;

/// An ordered sequence of unique words.
///
/// Insertion order is kept; inserting a word already present is a no-op.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<Word>", into = "Vec<Word>")]
pub struct Vocabulary {
    words: Vec<Word>,
    #[serde(skip)]
    seen: HashSet<Word>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `word` unless it is already present. Returns whether it was added.
    pub fn insert(&mut self, word: Word) -> bool {
        if self.seen.contains(&word) {
            return false;
        }
        self.seen.insert(word.clone());
        self.words.push(word);
        true
    }

    pub fn contains(&self, word: &str) -> bool {
        self.seen.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Word> {
        self.words.iter()
    }

    pub fn as_slice(&self) -> &[Word] {
        &self.words
    }

    /// Keep only the words matching `keep`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(&Word) -> bool) {
        let seen = &mut self.seen;
        self.words.retain(|w| {
            let k = keep(w);
            if !k {
                seen.remove(w);
            }
            k
        });
    }

    pub fn into_vec(self) -> Vec<Word> {
        self.words
    }
}

impl From<Vec<Word>> for Vocabulary {
    fn from(words: Vec<Word>) -> Self {
        words.into_iter().collect()
    }
}

impl From<Vocabulary> for Vec<Word> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.words
    }
}

impl FromIterator<Word> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = Word>>(iter: I) -> Self {
        let mut vocabulary = Vocabulary::new();
        vocabulary.extend(iter);
        vocabulary
    }
}

impl Extend<Word> for Vocabulary {
    fn extend<I: IntoIterator<Item = Word>>(&mut self, iter: I) {
        for word in iter {
            self.insert(word);
        }
    }
}

impl IntoIterator for Vocabulary {
    type Item = Word;
    type IntoIter = std::vec::IntoIter<Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.into_iter()
    }
}

impl<'a> IntoIterator for &'a Vocabulary {
    type Item = &'a Word;
    type IntoIter = std::slice::Iter<'a, Word>;

    fn into_iter(self) -> Self::IntoIter {
        self.words.iter()
    }
}
