//! AlignedWordVectorTable: the word/vector pairing every stage after
//! projection works on.
//!
//! Rows are stored as `(word, vector)` records so any filtering drops both
//! halves together. All vectors in a table share one dimensionality.

use serde::{Deserialize, Serialize};

use super::Word;
use crate::errors::{AlignmentError, EmbeddingError, LexisResult};

/// One row of an aligned table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WordVector {
    pub word: Word,
    pub vector: Vec<f32>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AlignedWordVectorTable {
    rows: Vec<WordVector>,
}

impl AlignedWordVectorTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from rows, checking that every vector has the same length.
    pub fn from_rows(rows: Vec<WordVector>) -> LexisResult<Self> {
        let mut table = Self::new();
        for row in rows {
            table.push(row.word, row.vector)?;
        }
        Ok(table)
    }

    /// Append a row.
    ///
    /// # Errors
    /// Returns `DimensionMismatch` if `vector` differs in length from the rows
    /// already present.
    pub fn push(&mut self, word: Word, vector: Vec<f32>) -> LexisResult<()> {
        if let Some(expected) = self.dimensions() {
            if vector.len() != expected {
                return Err(EmbeddingError::DimensionMismatch {
                    expected,
                    actual: vector.len(),
                }
                .into());
            }
        }
        self.rows.push(WordVector { word, vector });
        Ok(())
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Vector length shared by every row, `None` for an empty table.
    pub fn dimensions(&self) -> Option<usize> {
        self.rows.first().map(|r| r.vector.len())
    }

    pub fn rows(&self) -> &[WordVector] {
        &self.rows
    }

    pub fn get(&self, index: usize) -> Option<&WordVector> {
        self.rows.get(index)
    }

    pub fn words(&self) -> impl ExactSizeIterator<Item = &Word> + '_ {
        self.rows.iter().map(|r| &r.word)
    }

    pub fn vectors(&self) -> impl ExactSizeIterator<Item = &[f32]> + '_ {
        self.rows.iter().map(|r| r.vector.as_slice())
    }

    /// Owned copy of the vectors in row order, the shape reducers and clusterers take.
    pub fn to_matrix(&self) -> Vec<Vec<f32>> {
        self.rows.iter().map(|r| r.vector.clone()).collect()
    }

    /// Keep only rows matching `keep`. Words and vectors leave together.
    pub fn retain(&mut self, keep: impl FnMut(&WordVector) -> bool) {
        self.rows.retain(keep);
    }

    /// A new table with the same words and `vectors` substituted row by row.
    ///
    /// # Errors
    /// Returns `AlignmentError` if the row counts differ and
    /// `DimensionMismatch` if the replacement vectors are ragged.
    pub fn with_vectors(&self, vectors: Vec<Vec<f32>>) -> LexisResult<Self> {
        if vectors.len() != self.rows.len() {
            return Err(AlignmentError::LengthMismatch {
                left: "table",
                left_len: self.rows.len(),
                right: "vectors",
                right_len: vectors.len(),
            }
            .into());
        }
        let rows = self
            .rows
            .iter()
            .zip(vectors)
            .map(|(row, vector)| WordVector {
                word: row.word.clone(),
                vector,
            })
            .collect();
        Self::from_rows(rows)
    }
}

impl<'a> IntoIterator for &'a AlignedWordVectorTable {
    type Item = &'a WordVector;
    type IntoIter = std::slice::Iter<'a, WordVector>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn w(s: &str) -> Word {
        Word::new(s).unwrap()
    }

    #[test]
    fn push_rejects_ragged_rows() {
        let mut t = AlignedWordVectorTable::new();
        t.push(w("a"), vec![1.0, 2.0]).unwrap();
        assert!(t.push(w("b"), vec![1.0]).is_err());
        assert_eq!(t.len(), 1);
    }

    #[test]
    fn retain_keeps_pairs_together() {
        let mut t = AlignedWordVectorTable::new();
        t.push(w("a"), vec![1.0]).unwrap();
        t.push(w("b"), vec![2.0]).unwrap();
        t.push(w("c"), vec![3.0]).unwrap();
        t.retain(|r| r.word.as_str() != "b");
        let pairs: Vec<(&str, f32)> = t.rows().iter().map(|r| (r.word.as_str(), r.vector[0])).collect();
        assert_eq!(pairs, vec![("a", 1.0), ("c", 3.0)]);
    }

    #[test]
    fn with_vectors_requires_same_row_count() {
        let mut t = AlignedWordVectorTable::new();
        t.push(w("a"), vec![1.0, 0.0]).unwrap();
        assert!(t.with_vectors(vec![]).is_err());
        let reduced = t.with_vectors(vec![vec![0.5]]).unwrap();
        assert_eq!(reduced.dimensions(), Some(1));
        assert_eq!(reduced.get(0).unwrap().word.as_str(), "a");
    }
}
