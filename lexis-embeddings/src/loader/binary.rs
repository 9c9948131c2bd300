//! word2vec binary format.
//!
//! Header line `count dims\n`, then per record: the word bytes up to a single
//! space, `dims` little-endian f32 values, and an optional trailing newline.

use std::io::BufRead;

use lexis_core::errors::{EmbeddingError, LexisResult};
use lexis_core::models::Word;

/// Header counts are untrusted: preallocation is capped and vectors are read
/// in chunks, so memory grows only with bytes actually present.
const MAX_PREALLOCATED: usize = 4096;
const F32_BYTES: usize = std::mem::size_of::<f32>();

pub fn read_pairs<R: BufRead>(
    mut reader: R,
    limit: Option<usize>,
) -> LexisResult<Vec<(Word, Vec<f32>)>> {
    let mut header = String::new();
    reader
        .read_line(&mut header)
        .map_err(|e| malformed(0, e.to_string()))?;
    let mut parts = header.split_whitespace();
    let (count, dims) = match (
        parts.next().and_then(|c| c.parse::<usize>().ok()),
        parts.next().and_then(|d| d.parse::<usize>().ok()),
    ) {
        (Some(c), Some(d)) if d > 0 => (c, d),
        _ => return Err(malformed(0, format!("bad header {:?}", header.trim())).into()),
    };

    let take = limit.map_or(count, |l| l.min(count));
    if dims
        .checked_mul(F32_BYTES)
        .and_then(|b| isize::try_from(b).ok())
        .is_none()
    {
        return Err(malformed(0, format!("dimension {dims} too large")).into());
    }
    let mut pairs = Vec::with_capacity(take.min(MAX_PREALLOCATED));
    let mut buf = vec![0u8; dims.min(MAX_PREALLOCATED) * F32_BYTES];

    for record in 1..=take {
        let word = read_word(&mut reader, record)?;
        let mut vector = Vec::with_capacity(dims.min(MAX_PREALLOCATED));
        let mut remaining = dims;
        while remaining > 0 {
            let chunk = &mut buf[..remaining.min(MAX_PREALLOCATED) * F32_BYTES];
            reader
                .read_exact(chunk)
                .map_err(|e| malformed(record, format!("vector for {word:?}: {e}")))?;
            vector.extend(
                chunk
                    .chunks_exact(F32_BYTES)
                    .map(|b| f32::from_le_bytes([b[0], b[1], b[2], b[3]])),
            );
            remaining -= chunk.len() / F32_BYTES;
        }
        pairs.push((Word::new(word)?, vector));
    }

    Ok(pairs)
}

/// Read bytes up to the separating space, skipping newlines left by the
/// previous record.
fn read_word<R: BufRead>(reader: &mut R, record: usize) -> LexisResult<String> {
    let mut bytes = Vec::new();
    reader
        .read_until(b' ', &mut bytes)
        .map_err(|e| malformed(record, e.to_string()))?;
    if bytes.last() != Some(&b' ') {
        return Err(malformed(record, "unexpected end of file".to_string()).into());
    }
    bytes.pop();
    let start = bytes.iter().position(|&b| b != b'\n').unwrap_or(bytes.len());
    let word = String::from_utf8_lossy(&bytes[start..]).into_owned();
    if word.is_empty() {
        return Err(malformed(record, "empty word".to_string()).into());
    }
    Ok(word)
}

fn malformed(record: usize, reason: String) -> EmbeddingError {
    EmbeddingError::MalformedModel { record, reason }
}
