/// lexis version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Cluster id reserved for points outside every dense region.
pub const NOISE_CLUSTER_ID: i32 = -1;

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "LEXIS_LOG";

/// Dimensionality of the scatter projection handed to the visualisation step.
pub const SCATTER_DIMENSIONS: usize = 2;
