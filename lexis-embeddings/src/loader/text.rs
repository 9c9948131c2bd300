//! word2vec / GloVe text format.
//!
//! An optional header line `count dims`, then one `word v1 v2 .. vd` record per
//! line. Blank lines are skipped.

use std::io::BufRead;

use lexis_core::errors::{EmbeddingError, LexisResult};
use lexis_core::models::Word;

pub fn read_pairs<R: BufRead>(reader: R, limit: Option<usize>) -> LexisResult<Vec<(Word, Vec<f32>)>> {
    let mut pairs = Vec::new();
    let mut dims: Option<usize> = None;

    for (line_no, line) in reader.lines().enumerate() {
        let record = line_no + 1;
        let line = line.map_err(|e| EmbeddingError::MalformedModel {
            record,
            reason: e.to_string(),
        })?;
        let mut fields = line.split_whitespace();
        let Some(head) = fields.next() else {
            continue;
        };
        let rest: Vec<&str> = fields.collect();

        if line_no == 0 {
            if let Some(header_dims) = parse_header(head, &rest) {
                dims = Some(header_dims);
                continue;
            }
        }

        if limit.is_some_and(|l| pairs.len() >= l) {
            break;
        }

        let vector = rest
            .iter()
            .map(|v| v.parse::<f32>())
            .collect::<Result<Vec<f32>, _>>()
            .map_err(|e| EmbeddingError::MalformedModel {
                record,
                reason: format!("bad component for {head:?}: {e}"),
            })?;

        let expected = *dims.get_or_insert(vector.len());
        if vector.len() != expected || expected == 0 {
            return Err(EmbeddingError::MalformedModel {
                record,
                reason: format!(
                    "{head:?} has {} components, expected {expected}",
                    vector.len()
                ),
            }
            .into());
        }

        pairs.push((Word::new(head)?, vector));
    }

    Ok(pairs)
}

/// `count dims` header: exactly two unsigned integers.
fn parse_header(head: &str, rest: &[&str]) -> Option<usize> {
    if rest.len() != 1 {
        return None;
    }
    head.parse::<usize>().ok()?;
    rest[0].parse::<usize>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_records_with_header() {
        let data = "2 3\ncat 1 0 0\ndog 0.5 0.5 0\n";
        let pairs = read_pairs(data.as_bytes(), None).unwrap();
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[1].0.as_str(), "dog");
        assert_eq!(pairs[1].1, vec![0.5, 0.5, 0.0]);
    }

    #[test]
    fn reads_headerless_glove_style() {
        let data = "the 0.1 0.2\n\nof 0.3 0.4\n";
        let pairs = read_pairs(data.as_bytes(), None).unwrap();
        assert_eq!(pairs.len(), 2);
    }

    #[test]
    fn header_dims_are_enforced() {
        let data = "1 3\ncat 1 0\n";
        assert!(read_pairs(data.as_bytes(), None).is_err());
    }

    #[test]
    fn bad_float_is_malformed() {
        let data = "cat 1 zero\n";
        assert!(read_pairs(data.as_bytes(), None).is_err());
    }

    #[test]
    fn limit_stops_early() {
        let data = "a 1\nb 2\nc 3\n";
        let pairs = read_pairs(data.as_bytes(), Some(2)).unwrap();
        assert_eq!(pairs.len(), 2);
    }
}
