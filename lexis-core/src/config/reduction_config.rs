use serde::{Deserialize, Serialize};

use super::defaults;

/// PCA configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ReductionConfig {
    /// Target dimensionality handed to the clusterer.
    pub n_components: usize,
    /// Power-iteration cap per component.
    pub max_iterations: usize,
    /// Convergence threshold on the L1 change of a component between iterations.
    pub tolerance: f64,
}

impl Default for ReductionConfig {
    fn default() -> Self {
        Self {
            n_components: defaults::DEFAULT_N_COMPONENTS,
            max_iterations: defaults::DEFAULT_PCA_MAX_ITERATIONS,
            tolerance: defaults::DEFAULT_PCA_TOLERANCE,
        }
    }
}
