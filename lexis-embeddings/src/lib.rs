//! # lexis-embeddings
//!
//! The concrete vector source: an immutable in-memory embedding store loaded
//! once per process from a word2vec text or binary file. Implements
//! `IVectorSource` with cosine nearest-neighbour queries.

pub mod cache;
pub mod loader;
pub mod similarity;
pub mod store;

pub use cache::NeighborCache;
pub use loader::load_model;
pub use store::EmbeddingStore;
