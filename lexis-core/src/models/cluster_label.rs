use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::NOISE_CLUSTER_ID;

/// Cluster assignment for one row of an aligned table.
///
/// Negative ids are normalised to the noise sentinel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "i32", into = "i32")]
pub struct ClusterLabel(i32);

impl ClusterLabel {
    /// The "not part of any dense cluster" sentinel.
    pub const NOISE: ClusterLabel = ClusterLabel(NOISE_CLUSTER_ID);

    pub fn cluster(id: i32) -> Self {
        Self::from(id)
    }

    pub fn is_noise(self) -> bool {
        self.0 == NOISE_CLUSTER_ID
    }

    /// The cluster id, or `None` for noise.
    pub fn cluster_id(self) -> Option<i32> {
        if self.is_noise() {
            None
        } else {
            Some(self.0)
        }
    }

    pub fn raw(self) -> i32 {
        self.0
    }
}

impl From<i32> for ClusterLabel {
    fn from(raw: i32) -> Self {
        if raw < 0 {
            Self::NOISE
        } else {
            Self(raw)
        }
    }
}

impl From<ClusterLabel> for i32 {
    fn from(label: ClusterLabel) -> Self {
        label.0
    }
}

impl fmt::Display for ClusterLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_noise() {
            f.write_str("noise")
        } else {
            write!(f, "{}", self.0)
        }
    }
}
