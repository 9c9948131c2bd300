/// Parallel-collection alignment errors.
#[derive(Debug, thiserror::Error)]
pub enum AlignmentError {
    #[error("{left} has {left_len} entries but {right} has {right_len}")]
    LengthMismatch {
        left: &'static str,
        left_len: usize,
        right: &'static str,
        right_len: usize,
    },
}

impl super::LexisErrorCode for AlignmentError {
    fn error_code(&self) -> &'static str {
        super::error_code::ALIGNMENT_ERROR
    }
}
