// Single source of truth for all default values.

// --- Embeddings ---
pub const DEFAULT_NEIGHBOR_CACHE_SIZE: u64 = 10_000;

// --- Ingest ---
pub const DEFAULT_MIN_WORD_LENGTH: usize = 2;
pub const DEFAULT_LEMMATIZE: bool = true;
pub const DEFAULT_REMOVE_STOP_WORDS: bool = true;

// --- Expansion ---
pub const DEFAULT_SEEDS: &[&str] = &["language", "learning", "education"];
pub const DEFAULT_TOP_N: usize = 60;

// --- Reduction ---
pub const DEFAULT_N_COMPONENTS: usize = 10;
pub const DEFAULT_PCA_MAX_ITERATIONS: usize = 200;
pub const DEFAULT_PCA_TOLERANCE: f64 = 1e-6;

// --- Clustering ---
pub const DEFAULT_MIN_CLUSTER_SIZE: usize = 5;

// --- Output ---
pub const DEFAULT_INCLUDE_SCATTER: bool = true;

// --- Observability ---
pub const DEFAULT_LOG_LEVEL: &str = "info";
pub const DEFAULT_JSON_LOGS: bool = false;
