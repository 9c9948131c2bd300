//! Keyed dictionary loading. Only the key set of the top-level object is read.

use std::path::Path;

use lexis_core::errors::{FormatError, LexisResult};
use lexis_core::models::{Vocabulary, Word};
use serde_json::Value;
use tracing::{debug, info};

/// Read a JSON dictionary file and return its keys as a vocabulary.
///
/// # Errors
/// `FormatError::Unreadable` if the file cannot be read, `InvalidJson` if it
/// does not parse, `NotAnObject` if the top level is not an object.
pub fn load_dictionary(path: &Path) -> LexisResult<Vocabulary> {
    let source = path.display().to_string();
    let content = std::fs::read_to_string(path).map_err(|e| FormatError::Unreadable {
        path: source.clone(),
        reason: e.to_string(),
    })?;
    let vocabulary = parse_dictionary(&content, &source)?;
    info!(path = %source, words = vocabulary.len(), "dictionary loaded");
    Ok(vocabulary)
}

/// Parse dictionary content. `source` names the input in errors.
///
/// Keys come back in parser order, which for `serde_json` maps is sorted.
/// Keys that are not a single word (blank, or containing whitespace) are
/// skipped.
pub fn parse_dictionary(content: &str, source: &str) -> LexisResult<Vocabulary> {
    let value: Value = serde_json::from_str(content).map_err(|e| FormatError::InvalidJson {
        path: source.to_string(),
        reason: e.to_string(),
    })?;

    let Value::Object(entries) = value else {
        return Err(FormatError::NotAnObject {
            path: source.to_string(),
            found: json_kind(&value).to_string(),
        }
        .into());
    };

    let mut vocabulary = Vocabulary::new();
    for key in entries.keys() {
        match Word::new(key.as_str()) {
            Ok(word) => {
                vocabulary.insert(word);
            }
            Err(_) => debug!(key = %key, "skipping dictionary key that is not a single word"),
        }
    }
    Ok(vocabulary)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
