use serde::{Deserialize, Serialize};

use super::defaults;

/// HDBSCAN configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ClusteringConfig {
    /// Smallest group reported as a cluster.
    pub min_cluster_size: usize,
    /// Neighbourhood size for core distances. `None` uses `min_cluster_size`.
    pub min_samples: Option<usize>,
}

impl Default for ClusteringConfig {
    fn default() -> Self {
        Self {
            min_cluster_size: defaults::DEFAULT_MIN_CLUSTER_SIZE,
            min_samples: None,
        }
    }
}
