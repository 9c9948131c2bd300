use lexis_core::errors::*;

#[test]
fn lookup_error_carries_word_and_code() {
    let err = EmbeddingError::WordNotFound {
        word: "zzyzx".into(),
    };
    assert!(err.to_string().contains("zzyzx"));
    assert_eq!(err.error_code(), error_code::LOOKUP_ERROR);
}

#[test]
fn dimension_mismatch_carries_values() {
    let err = EmbeddingError::DimensionMismatch {
        expected: 300,
        actual: 10,
    };
    let msg = err.to_string();
    assert!(msg.contains("300"));
    assert!(msg.contains("10"));
    assert_eq!(err.error_code(), error_code::DIMENSION_MISMATCH);
}

#[test]
fn reduction_errors_are_dimension_mismatches() {
    let err: LexisError = ReductionError::TooFewSamples {
        target_dim: 5,
        samples: 3,
    }
    .into();
    assert!(matches!(err, LexisError::ReductionError(_)));
    assert_eq!(err.error_code(), error_code::DIMENSION_MISMATCH);
}

#[test]
fn cluster_error_converts_to_lexis_error() {
    let err: LexisError = ClusterError::EmptyInput.into();
    assert!(matches!(err, LexisError::ClusterError(_)));
    assert_eq!(err.error_code(), error_code::CLUSTER_ERROR);
}

#[test]
fn alignment_error_names_both_sides() {
    let err = AlignmentError::LengthMismatch {
        left: "table",
        left_len: 4,
        right: "labels",
        right_len: 3,
    };
    let msg = err.to_string();
    assert!(msg.contains("table has 4"));
    assert!(msg.contains("labels has 3"));
    let wrapped: LexisError = err.into();
    assert_eq!(wrapped.error_code(), error_code::ALIGNMENT_ERROR);
}

#[test]
fn format_error_converts_and_codes() {
    let err: LexisError = FormatError::NotAnObject {
        path: "words.json".into(),
        found: "array".into(),
    }
    .into();
    assert_eq!(err.error_code(), error_code::FORMAT_ERROR);
    assert!(err.coded_string().starts_with("[FORMAT_ERROR]"));
}

#[test]
fn serialization_error_converts_to_lexis_error() {
    let json_err = serde_json::from_str::<String>("not valid json").unwrap_err();
    let err: LexisError = json_err.into();
    assert!(matches!(err, LexisError::SerializationError(_)));
}

#[test]
fn expansion_error_lists_seeds() {
    let err = ExpansionError::NoSeedPresent {
        seeds: "foo, bar".into(),
    };
    assert!(err.to_string().contains("foo, bar"));
}
