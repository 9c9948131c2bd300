use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::Word;

/// Cluster id → representative word. Never contains the noise sentinel.
///
/// Built once after clustering; exposes no mutation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClusterLabelMap {
    labels: BTreeMap<i32, Word>,
}

impl ClusterLabelMap {
    pub fn get(&self, cluster_id: i32) -> Option<&Word> {
        self.labels.get(&cluster_id)
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }

    /// Cluster ids in ascending order.
    pub fn cluster_ids(&self) -> impl Iterator<Item = i32> + '_ {
        self.labels.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (i32, &Word)> + '_ {
        self.labels.iter().map(|(id, word)| (*id, word))
    }
}

impl FromIterator<(i32, Word)> for ClusterLabelMap {
    /// Negative ids are dropped.
    fn from_iter<I: IntoIterator<Item = (i32, Word)>>(iter: I) -> Self {
        Self {
            labels: iter.into_iter().filter(|(id, _)| *id >= 0).collect(),
        }
    }
}
