//! Clustering: HDBSCAN over the reduced vectors.
//!
//! Points outside every sufficiently dense region get the noise label.
//! Any group the algorithm reports below `min_cluster_size` is folded into
//! noise so callers can rely on the size floor.

use std::collections::HashMap;

use hdbscan::{Hdbscan, HdbscanHyperParams};
use lexis_core::config::ClusteringConfig;
use lexis_core::errors::{ClusterError, LexisResult};
use lexis_core::models::ClusterLabel;
use lexis_core::traits::IClusterer;
use tracing::{debug, info};

#[derive(Debug, Clone, Default)]
pub struct HdbscanClusterer {
    /// Core-distance neighbourhood. `None` follows `min_cluster_size`.
    min_samples: Option<usize>,
}

impl HdbscanClusterer {
    pub fn new(config: &ClusteringConfig) -> Self {
        Self {
            min_samples: config.min_samples,
        }
    }
}

impl IClusterer for HdbscanClusterer {
    fn cluster(
        &self,
        vectors: &[Vec<f32>],
        min_cluster_size: usize,
    ) -> LexisResult<Vec<ClusterLabel>> {
        if min_cluster_size < 2 {
            return Err(ClusterError::InvalidMinClusterSize { min_cluster_size }.into());
        }
        if vectors.is_empty() {
            return Err(ClusterError::EmptyInput.into());
        }
        let _span = lexis_observability::clustering_span!(vectors.len(), min_cluster_size).entered();

        let n = vectors.len();
        if n < min_cluster_size {
            debug!(rows = n, min_cluster_size, "fewer rows than min_cluster_size, all noise");
            return Ok(vec![ClusterLabel::NOISE; n]);
        }

        let min_samples = self
            .min_samples
            .unwrap_or(min_cluster_size)
            .clamp(1, n.saturating_sub(1).max(1));
        let hyper_params = HdbscanHyperParams::builder()
            .min_cluster_size(min_cluster_size)
            .min_samples(min_samples)
            .build();

        // hdbscan borrows its input as `&Vec<Vec<f32>>`.
        let data = vectors.to_vec();
        let raw = Hdbscan::new(&data, hyper_params)
            .cluster()
            .map_err(|e| ClusterError::ClusteringFailed {
                reason: format!("{e:?}"),
            })?;

        let labels = enforce_min_size(&raw, min_cluster_size);
        let clusters = labels
            .iter()
            .filter_map(|l| l.cluster_id())
            .collect::<std::collections::HashSet<_>>()
            .len();
        let noise = labels.iter().filter(|l| l.is_noise()).count();
        info!(rows = n, clusters, noise, min_samples, "clustering complete");
        Ok(labels)
    }

    fn name(&self) -> &str {
        "hdbscan"
    }
}

/// Map raw ids to labels, turning any group smaller than `min_size` into noise.
fn enforce_min_size(raw: &[i32], min_size: usize) -> Vec<ClusterLabel> {
    let mut sizes: HashMap<i32, usize> = HashMap::new();
    for &id in raw.iter().filter(|&&id| id >= 0) {
        *sizes.entry(id).or_default() += 1;
    }
    raw.iter()
        .map(|&id| match sizes.get(&id) {
            Some(&size) if size >= min_size => ClusterLabel::cluster(id),
            _ => ClusterLabel::NOISE,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn blob(cx: f32, cy: f32, count: usize, offset: usize) -> Vec<Vec<f32>> {
        (0..count)
            .map(|i| {
                let k = (i + offset) as f32;
                vec![cx + (k * 0.37).sin() * 0.05, cy + (k * 0.73).cos() * 0.05]
            })
            .collect()
    }

    #[test]
    fn rejects_empty_input_and_tiny_min_size() {
        let c = HdbscanClusterer::default();
        assert!(matches!(
            c.cluster(&[], 5),
            Err(lexis_core::LexisError::ClusterError(ClusterError::EmptyInput))
        ));
        assert!(matches!(
            c.cluster(&[vec![0.0]], 1),
            Err(lexis_core::LexisError::ClusterError(
                ClusterError::InvalidMinClusterSize { min_cluster_size: 1 }
            ))
        ));
    }

    #[test]
    fn fewer_rows_than_min_size_is_all_noise() {
        let labels = HdbscanClusterer::default().cluster(&blob(0.0, 0.0, 4, 0), 5).unwrap();
        assert_eq!(labels, vec![ClusterLabel::NOISE; 4]);
    }

    #[test]
    fn separated_blobs_never_share_a_cluster() {
        let mut data = blob(0.0, 0.0, 20, 0);
        data.extend(blob(10.0, 10.0, 20, 100));
        let labels = HdbscanClusterer::default().cluster(&data, 5).unwrap();
        assert_eq!(labels.len(), 40);

        let left: Vec<i32> = labels[..20].iter().filter_map(|l| l.cluster_id()).collect();
        let right: Vec<i32> = labels[20..].iter().filter_map(|l| l.cluster_id()).collect();
        assert!(left.iter().all(|id| !right.contains(id)));
        assert!(!left.is_empty() || !right.is_empty());
    }

    #[test]
    fn clusters_a_borrowed_sub_slice() {
        let mut data = blob(0.0, 0.0, 12, 0);
        data.extend(blob(8.0, 8.0, 12, 50));
        data.push(vec![100.0, -100.0]);
        let clusterer = HdbscanClusterer::new(&ClusteringConfig {
            min_samples: Some(3),
            ..ClusteringConfig::default()
        });
        let labels = clusterer.cluster(&data[..24], 5).unwrap();
        assert_eq!(labels.len(), 24);
        assert!(labels.iter().any(|l| !l.is_noise()));
    }

    #[test]
    fn undersized_groups_become_noise() {
        let raw = [0, 0, 0, 1, 1, -1, 2, 2, 2, 2];
        let labels = enforce_min_size(&raw, 3);
        let ids: Vec<i32> = labels.iter().map(|l| l.raw()).collect();
        assert_eq!(ids, vec![0, 0, 0, -1, -1, -1, 2, 2, 2, 2]);
    }
}
