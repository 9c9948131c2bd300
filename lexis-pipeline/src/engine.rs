//! PipelineEngine: runs expand → preprocess → filter → project → reduce →
//! cluster → label against one shared vector source.

use std::sync::Arc;
use std::time::Instant;

use lexis_core::config::LexisConfig;
use lexis_core::errors::{ClusterError, LexisResult};
use lexis_core::models::{
    AlignedWordVectorTable, ClusterLabel, ClusterLabelMap, Vocabulary, Word,
};
use lexis_core::traits::{IClusterer, IDimensionReducer, IVectorSource};
use lexis_ingest::Preprocessor;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::stages::{self, clustering::HdbscanClusterer, reduction::PcaReducer};

/// Per-stage counts for one run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PipelineStats {
    pub seeds: usize,
    pub seeds_present: usize,
    pub per_seed: usize,
    pub expanded: usize,
    pub preprocessed: usize,
    /// Words left after the dictionary filter, `None` without a dictionary.
    pub dictionary_filtered: Option<usize>,
    pub projected: usize,
    pub reduced_dims: usize,
    pub clusters: usize,
    pub noise: usize,
    pub elapsed_ms: u64,
}

/// Everything a run produced. `table`, `reduced` and `labels` share one row order.
#[derive(Debug, Clone)]
pub struct PipelineOutput {
    pub seeds: Vocabulary,
    /// Candidate words after expansion, preprocessing and filtering.
    pub vocabulary: Vocabulary,
    /// Full-dimensional vectors; labels are looked up against these.
    pub table: AlignedWordVectorTable,
    /// The same rows after dimensionality reduction; clustering ran on these.
    pub reduced: AlignedWordVectorTable,
    pub labels: Vec<ClusterLabel>,
    pub label_map: ClusterLabelMap,
    pub stats: PipelineStats,
}

impl PipelineOutput {
    /// Words assigned to `cluster_id`, in row order.
    pub fn members(&self, cluster_id: i32) -> Vec<&Word> {
        self.table
            .words()
            .zip(&self.labels)
            .filter(|(_, l)| l.cluster_id() == Some(cluster_id))
            .map(|(w, _)| w)
            .collect()
    }

    /// Words the clusterer left as noise, in row order.
    pub fn noise(&self) -> Vec<&Word> {
        self.table
            .words()
            .zip(&self.labels)
            .filter(|(_, l)| l.is_noise())
            .map(|(w, _)| w)
            .collect()
    }

    /// `(word, cluster, label word)` for every row.
    pub fn assignments(&self) -> impl Iterator<Item = (&Word, ClusterLabel, Option<&Word>)> + '_ {
        self.table.words().zip(&self.labels).map(move |(w, &l)| {
            let label = l.cluster_id().and_then(|id| self.label_map.get(id));
            (w, l, label)
        })
    }
}

/// The pipeline orchestrator.
///
/// Holds the read-only vector source by handle; nothing is shared between
/// runs.
pub struct PipelineEngine {
    source: Arc<dyn IVectorSource>,
    config: LexisConfig,
    preprocessor: Preprocessor,
    reducer: Box<dyn IDimensionReducer>,
    clusterer: Box<dyn IClusterer>,
}

impl PipelineEngine {
    /// Engine with PCA reduction and HDBSCAN clustering configured from `config`.
    pub fn new(source: Arc<dyn IVectorSource>, config: LexisConfig) -> Self {
        Self {
            preprocessor: Preprocessor::new(&config.ingest),
            reducer: Box::new(PcaReducer::new(&config.reduction)),
            clusterer: Box::new(HdbscanClusterer::new(&config.clustering)),
            source,
            config,
        }
    }

    pub fn with_reducer(mut self, reducer: Box<dyn IDimensionReducer>) -> Self {
        self.reducer = reducer;
        self
    }

    pub fn with_clusterer(mut self, clusterer: Box<dyn IClusterer>) -> Self {
        self.clusterer = clusterer;
        self
    }

    pub fn source(&self) -> &dyn IVectorSource {
        self.source.as_ref()
    }

    pub fn config(&self) -> &LexisConfig {
        &self.config
    }

    /// Configured seeds as words.
    ///
    /// # Errors
    /// `InvalidWord` for a blank seed or one containing whitespace.
    pub fn seeds(&self) -> LexisResult<Vocabulary> {
        self.config
            .expansion
            .seeds
            .iter()
            .map(|s| Word::new(s.trim()))
            .collect()
    }

    /// Run the whole pipeline. With a `dictionary`, expanded words outside it
    /// (after both are preprocessed) are dropped before projection.
    ///
    /// # Errors
    /// Expansion errors when no seed is known, `ClusterError::EmptyInput`
    /// when nothing survives projection, reduction errors when
    /// `n_components` exceeds the surviving rows or dimensions, and any
    /// labeling failure.
    pub fn run(&self, dictionary: Option<&Vocabulary>) -> LexisResult<PipelineOutput> {
        let started = Instant::now();
        let seeds = self.seeds()?;
        let top_n = self.config.expansion.top_n;
        let _span = lexis_observability::pipeline_span!(seeds.len(), top_n).entered();
        let source = self.source.as_ref();

        let mut stats = PipelineStats {
            seeds: seeds.len(),
            seeds_present: seeds.iter().filter(|s| source.has(s.as_str())).count(),
            per_seed: stages::expansion::per_seed_share(top_n, seeds.len()),
            ..PipelineStats::default()
        };

        let expanded = stages::expand(&seeds, top_n, source)?;
        stats.expanded = expanded.len();

        let mut vocabulary = self.preprocessor.process(&expanded);
        // Lemmatising a neighbour can land back on a seed.
        vocabulary.retain(|w| !seeds.contains(w.as_str()));
        stats.preprocessed = vocabulary.len();

        if let Some(dictionary) = dictionary {
            let allowed = self.preprocessor.process(dictionary);
            vocabulary.retain(|w| allowed.contains(w.as_str()));
            stats.dictionary_filtered = Some(vocabulary.len());
            debug!(
                dictionary = allowed.len(),
                kept = vocabulary.len(),
                "dictionary filter applied"
            );
        }

        let table = stages::project(&vocabulary, source)?;
        stats.projected = table.len();
        if table.is_empty() {
            warn!("no candidate word has a vector; nothing to cluster");
            return Err(ClusterError::EmptyInput.into());
        }

        let n_components = self.config.reduction.n_components;
        let reduced_vectors = self.reducer.reduce(&table.to_matrix(), n_components)?;
        let reduced = table.with_vectors(reduced_vectors)?;
        stats.reduced_dims = reduced.dimensions().unwrap_or(0);

        let labels = self.clusterer.cluster(
            &reduced.to_matrix(),
            self.config.clustering.min_cluster_size,
        )?;
        let label_map = stages::label(&table, &labels, source)?;
        stats.clusters = label_map.len();
        stats.noise = labels.iter().filter(|l| l.is_noise()).count();
        stats.elapsed_ms = started.elapsed().as_millis() as u64;

        info!(
            source = source.name(),
            reducer = self.reducer.name(),
            clusterer = self.clusterer.name(),
            words = table.len(),
            clusters = stats.clusters,
            noise = stats.noise,
            elapsed_ms = stats.elapsed_ms,
            "pipeline complete"
        );

        Ok(PipelineOutput {
            seeds,
            vocabulary,
            table,
            reduced,
            labels,
            label_map,
            stats,
        })
    }
}
