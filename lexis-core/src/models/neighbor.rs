use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::Word;

/// A nearest-neighbour hit: a word and its similarity to the query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Neighbor {
    pub word: Word,
    pub score: f32,
}

impl Neighbor {
    pub fn new(word: Word, score: f32) -> Self {
        Self { word, score }
    }

    /// Result ordering for neighbour lists: descending score, then ascending word.
    pub fn rank_order(a: &Neighbor, b: &Neighbor) -> Ordering {
        Self::score_order(a.score, b.score).then_with(|| a.word.cmp(&b.word))
    }

    /// Descending score order. NaN sorts after every real score.
    pub fn score_order(a: f32, b: f32) -> Ordering {
        match (a.is_nan(), b.is_nan()) {
            (true, true) => Ordering::Equal,
            (true, false) => Ordering::Greater,
            (false, true) => Ordering::Less,
            (false, false) => b.partial_cmp(&a).unwrap_or(Ordering::Equal),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ties_break_lexicographically() {
        let mut hits = vec![
            Neighbor::new(Word::new("zeta").unwrap(), 0.5),
            Neighbor::new(Word::new("alpha").unwrap(), 0.5),
            Neighbor::new(Word::new("mid").unwrap(), 0.9),
            Neighbor::new(Word::new("nan").unwrap(), f32::NAN),
        ];
        hits.sort_by(Neighbor::rank_order);
        let order: Vec<&str> = hits.iter().map(|n| n.word.as_str()).collect();
        assert_eq!(order, vec!["mid", "alpha", "zeta", "nan"]);
    }
}
