//! # lexis-ingest
//!
//! Vocabulary ingestion from a keyed JSON dictionary and the preprocessing
//! collaborator that turns raw tokens into normalised, deduplicated words.

pub mod dictionary;
pub mod lemmatizer;
pub mod normalizer;
pub mod stopwords;

pub use dictionary::{load_dictionary, parse_dictionary};
pub use normalizer::Preprocessor;
