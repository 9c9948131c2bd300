/// Seed expansion errors.
#[derive(Debug, thiserror::Error)]
pub enum ExpansionError {
    #[error("no seed word is present in the embedding space: [{seeds}]")]
    NoSeedPresent { seeds: String },

    #[error("seed list is empty")]
    NoSeeds,
}

impl super::LexisErrorCode for ExpansionError {
    fn error_code(&self) -> &'static str {
        super::error_code::EXPANSION_ERROR
    }
}
