use std::io::Write;

use lexis_core::config::IngestConfig;
use lexis_core::errors::{LexisError, LexisErrorCode};
use lexis_ingest::{load_dictionary, Preprocessor};
use proptest::prelude::*;

#[test]
fn dictionary_file_then_preprocess() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{"Teachers": "people who teach", "the": "article", "2nd": "ordinal", "school": "", "Schools": ""}}"#
    )
    .unwrap();

    let raw = load_dictionary(file.path()).unwrap();
    assert_eq!(raw.len(), 5);

    let words = Preprocessor::new(&IngestConfig::default()).process(&raw);
    let words: Vec<&str> = words.iter().map(|w| w.as_str()).collect();
    // serde_json sorts keys: "2nd", "Schools", "Teachers", "school", "the".
    assert_eq!(words, vec!["school", "teacher"]);
}

#[test]
fn missing_dictionary_is_format_error() {
    let err = load_dictionary(std::path::Path::new("/nonexistent/dict.json")).unwrap_err();
    assert!(matches!(err, LexisError::FormatError(_)));
    assert_eq!(err.error_code(), "FORMAT_ERROR");
}

#[test]
fn scalar_top_level_is_format_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "42").unwrap();
    let err = load_dictionary(file.path()).unwrap_err();
    assert_eq!(err.error_code(), "FORMAT_ERROR");
}

proptest! {
    #[test]
    fn preprocessed_words_are_unique_lowercase_alphabetic(
        tokens in prop::collection::vec("[A-Za-z0-9 -]{0,12}", 0..60)
    ) {
        let v = Preprocessor::default().process(&tokens);
        let mut seen = std::collections::HashSet::new();
        for w in &v {
            prop_assert!(seen.insert(w.as_str().to_string()));
            prop_assert!(w.as_str().chars().all(|c| c.is_alphabetic() && !c.is_uppercase()));
            prop_assert!(w.as_str().chars().count() >= 2);
        }
    }

    #[test]
    fn preprocessing_is_idempotent(
        tokens in prop::collection::vec("[a-z]{1,10}", 0..40)
    ) {
        let p = Preprocessor::new(&IngestConfig { lemmatize: false, ..IngestConfig::default() });
        let once = p.process(&tokens);
        let twice = p.process(&once);
        prop_assert_eq!(once, twice);
    }
}
