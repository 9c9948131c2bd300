use serde::{Deserialize, Serialize};

use super::defaults;

/// Seed expansion configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ExpansionConfig {
    /// Hand-chosen seed words.
    pub seeds: Vec<String>,
    /// Total neighbour budget, split evenly (integer division) across seeds.
    pub top_n: usize,
}

impl Default for ExpansionConfig {
    fn default() -> Self {
        Self {
            seeds: defaults::DEFAULT_SEEDS.iter().map(|s| s.to_string()).collect(),
            top_n: defaults::DEFAULT_TOP_N,
        }
    }
}
