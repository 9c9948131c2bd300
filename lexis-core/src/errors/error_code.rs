//! LexisErrorCode trait: stable codes for the error taxonomy.

/// Every error enum implements this to expose a structured code string,
/// used by the CLI and by tests that check which class of failure surfaced.
pub trait LexisErrorCode {
    /// Returns the error code string (e.g., "CLUSTER_ERROR").
    fn error_code(&self) -> &'static str;

    /// Returns the formatted error string: `[ERROR_CODE] message`.
    fn coded_string(&self) -> String
    where
        Self: std::fmt::Display,
    {
        format!("[{}] {}", self.error_code(), self)
    }
}

// Error code constants.
pub const LOOKUP_ERROR: &str = "LOOKUP_ERROR";
pub const DIMENSION_MISMATCH: &str = "DIMENSION_MISMATCH";
pub const CLUSTER_ERROR: &str = "CLUSTER_ERROR";
pub const ALIGNMENT_ERROR: &str = "ALIGNMENT_ERROR";
pub const FORMAT_ERROR: &str = "FORMAT_ERROR";
pub const CONFIG_ERROR: &str = "CONFIG_ERROR";
pub const EXPANSION_ERROR: &str = "EXPANSION_ERROR";
pub const MODEL_LOAD_ERROR: &str = "MODEL_LOAD_ERROR";
pub const INVALID_WORD: &str = "INVALID_WORD";
pub const IO_ERROR: &str = "IO_ERROR";
pub const SERIALIZATION_ERROR: &str = "SERIALIZATION_ERROR";
