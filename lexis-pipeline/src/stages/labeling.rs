//! Cluster labeling: the real word nearest each cluster centroid.

use std::collections::BTreeMap;

use lexis_core::errors::{AlignmentError, EmbeddingError, LexisResult};
use lexis_core::models::{AlignedWordVectorTable, ClusterLabel, ClusterLabelMap, Word};
use lexis_core::traits::IVectorSource;
use rayon::prelude::*;
use tracing::{debug, info};

/// Component-wise mean vector of every non-noise cluster, keyed by id.
///
/// # Errors
/// `AlignmentError` if `labels` and `table` differ in length.
pub fn cluster_centroids(
    table: &AlignedWordVectorTable,
    labels: &[ClusterLabel],
) -> LexisResult<BTreeMap<i32, Vec<f32>>> {
    check_aligned(table, labels)?;
    let dims = table.dimensions().unwrap_or(0);

    let mut sums: BTreeMap<i32, (Vec<f64>, usize)> = BTreeMap::new();
    for (vector, label) in table.vectors().zip(labels) {
        let Some(id) = label.cluster_id() else {
            continue;
        };
        let (sum, count) = sums.entry(id).or_insert_with(|| (vec![0.0; dims], 0));
        for (s, &x) in sum.iter_mut().zip(vector) {
            *s += f64::from(x);
        }
        *count += 1;
    }

    Ok(sums
        .into_iter()
        .map(|(id, (sum, count))| {
            let centroid = sum.into_iter().map(|s| (s / count as f64) as f32).collect();
            (id, centroid)
        })
        .collect())
}

/// Label every non-noise cluster with the word nearest its centroid.
///
/// The result has exactly one entry per distinct non-noise id in `labels`.
/// Any failed lookup fails the whole labeling.
///
/// # Errors
/// `AlignmentError` on a length mismatch; `DimensionMismatch` if the table's
/// vectors do not match the source's dimensionality.
pub fn label(
    table: &AlignedWordVectorTable,
    labels: &[ClusterLabel],
    source: &dyn IVectorSource,
) -> LexisResult<ClusterLabelMap> {
    let _span = lexis_observability::labeling_span!(labels.len()).entered();
    let centroids = cluster_centroids(table, labels)?;

    // Ascending id order survives the parallel collect.
    let labeled: Vec<(i32, Word)> = centroids
        .into_par_iter()
        .map(|(id, centroid)| -> LexisResult<(i32, Word)> {
            let nearest = source
                .nearest_by_vector(&centroid, 1)?
                .into_iter()
                .next()
                .ok_or(EmbeddingError::EmptyModel)?;
            debug!(cluster = id, label = %nearest.word, score = nearest.score, "cluster labeled");
            Ok((id, nearest.word))
        })
        .collect::<LexisResult<_>>()?;

    let map: ClusterLabelMap = labeled.into_iter().collect();
    info!(clusters = map.len(), "labeling complete");
    Ok(map)
}

fn check_aligned(table: &AlignedWordVectorTable, labels: &[ClusterLabel]) -> LexisResult<()> {
    if table.len() != labels.len() {
        return Err(AlignmentError::LengthMismatch {
            left: "table",
            left_len: table.len(),
            right: "labels",
            right_len: labels.len(),
        }
        .into());
    }
    Ok(())
}
