//! Span definitions per pipeline stage.
//!
//! Each span carries the stage's input size; events inside it add results.

/// Create the span wrapping a whole pipeline run.
#[macro_export]
macro_rules! pipeline_span {
    ($seed_count:expr, $top_n:expr) => {
        tracing::info_span!("lexis.pipeline", seeds = $seed_count, top_n = $top_n)
    };
}

/// Create a seed expansion span.
#[macro_export]
macro_rules! expansion_span {
    ($seed_count:expr, $per_seed:expr) => {
        tracing::info_span!("lexis.expansion", seeds = $seed_count, per_seed = $per_seed)
    };
}

/// Create a projection span.
#[macro_export]
macro_rules! projection_span {
    ($word_count:expr) => {
        tracing::info_span!("lexis.projection", words = $word_count)
    };
}

/// Create a dimensionality reduction span.
#[macro_export]
macro_rules! reduction_span {
    ($rows:expr, $target_dim:expr) => {
        tracing::info_span!("lexis.reduction", rows = $rows, target_dim = $target_dim)
    };
}

/// Create a clustering span.
#[macro_export]
macro_rules! clustering_span {
    ($rows:expr, $min_cluster_size:expr) => {
        tracing::info_span!(
            "lexis.clustering",
            rows = $rows,
            min_cluster_size = $min_cluster_size
        )
    };
}

/// Create a labeling span.
#[macro_export]
macro_rules! labeling_span {
    ($rows:expr) => {
        tracing::info_span!("lexis.labeling", rows = $rows)
    };
}

/// Span names as constants for programmatic use.
pub mod names {
    pub const PIPELINE: &str = "lexis.pipeline";
    pub const EXPANSION: &str = "lexis.expansion";
    pub const PROJECTION: &str = "lexis.projection";
    pub const REDUCTION: &str = "lexis.reduction";
    pub const CLUSTERING: &str = "lexis.clustering";
    pub const LABELING: &str = "lexis.labeling";
}

#[cfg(test)]
mod tests {
    #[test]
    fn span_macros_expand() {
        let _p = pipeline_span!(3usize, 60usize);
        let _e = expansion_span!(3usize, 20usize);
        let _r = projection_span!(10usize);
        let _d = reduction_span!(10usize, 2usize);
        let _c = clustering_span!(10usize, 2usize);
        let _l = labeling_span!(10usize);
    }

    #[test]
    fn names_share_prefix() {
        for name in [
            super::names::PIPELINE,
            super::names::EXPANSION,
            super::names::PROJECTION,
            super::names::REDUCTION,
            super::names::CLUSTERING,
            super::names::LABELING,
        ] {
            assert!(name.starts_with("lexis."));
        }
    }
}
