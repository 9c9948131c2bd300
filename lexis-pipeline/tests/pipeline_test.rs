//! End-to-end pipeline scenarios against the fixture embedding spaces.

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use lexis_core::config::LexisConfig;
use lexis_core::errors::{ClusterError, ExpansionError, LexisError, LexisErrorCode};
use lexis_core::models::{AlignedWordVectorTable, ClusterLabel, Vocabulary, Word};
use lexis_core::traits::{IClusterer, IVectorSource};
use lexis_core::LexisResult;
use lexis_embeddings::load_model;
use lexis_pipeline::stages::{expand, label, project};
use lexis_pipeline::{ClusterReport, HdbscanClusterer, PipelineEngine};
use test_fixtures::{
    axis_space, blob, theme_of, themed_pairs, themed_space, word_of, write_text_model,
    THEMED_SEEDS,
};

fn vocab(words: &[&str]) -> Vocabulary {
    words.iter().map(|w| word_of(w)).collect()
}

fn themed_config() -> LexisConfig {
    let mut config = LexisConfig::default();
    config.expansion.seeds = THEMED_SEEDS.iter().map(|s| s.to_string()).collect();
    config.expansion.top_n = 60;
    config.reduction.n_components = 3;
    config.clustering.min_cluster_size = 5;
    config
}

// --- Seed expansion ---

#[test]
fn default_seeds_expand_to_at_most_top_n_without_seeds() {
    let space = themed_space();
    let expanded = expand(&vocab(THEMED_SEEDS), 60, &space).unwrap();

    assert!(expanded.len() <= 60);
    assert_eq!(expanded.len(), 60, "themes do not overlap, so nothing collapses");
    for seed in THEMED_SEEDS {
        assert!(!expanded.contains(seed));
    }
    let unique: HashSet<&str> = expanded.iter().map(Word::as_str).collect();
    assert_eq!(unique.len(), expanded.len());
}

#[test]
fn absent_seeds_are_skipped_and_shrink_the_total() {
    let space = themed_space();
    let expanded = expand(&vocab(&["language", "klingon"]), 40, &space).unwrap();
    // 40 / 2 seeds = 20 per seed; only "language" contributes.
    assert_eq!(expanded.len(), 20);
    assert!(expanded.iter().all(|w| theme_of(w.as_str()) == Some(0)));
}

#[test]
fn truncating_split_can_return_fewer_than_top_n() {
    let space = themed_space();
    let expanded = expand(&vocab(THEMED_SEEDS), 10, &space).unwrap();
    // 10 / 3 = 3 per seed.
    assert_eq!(expanded.len(), 9);
}

#[test]
fn overlapping_neighbour_sets_collapse() {
    let space = themed_space();
    // Both seeds come from the language theme: 20 neighbours each, all from
    // the same 21-word theme.
    let expanded = expand(&vocab(&["language", "grammar"]), 40, &space).unwrap();
    assert_eq!(expanded.len(), 19);
    assert!(!expanded.contains("language"));
    assert!(!expanded.contains("grammar"));
}

#[test]
fn expansion_fails_only_when_no_seed_is_present() {
    let space = themed_space();
    let err = expand(&vocab(&["klingon", "quenya"]), 60, &space).unwrap_err();
    assert!(matches!(
        err,
        LexisError::ExpansionError(ExpansionError::NoSeedPresent { .. })
    ));
    assert!(expand(&Vocabulary::new(), 60, &space).is_err());
}

// --- Projection ---

#[test]
fn projection_keeps_order_and_pairs_vectors() {
    let space = themed_space();
    let words = vocab(&["syntax", "klingon", "teacher", "grammar", "xyzzy"]);
    let table = project(&words, &space).unwrap();

    let kept: Vec<&str> = table.words().map(Word::as_str).collect();
    assert_eq!(kept, vec!["syntax", "teacher", "grammar"]);
    for row in table.rows() {
        assert_eq!(row.vector.as_slice(), space.vector_of(row.word.as_str()).unwrap());
    }
}

#[test]
fn projection_is_idempotent() {
    let space = themed_space();
    let expanded = expand(&vocab(THEMED_SEEDS), 60, &space).unwrap();
    let once = project(&expanded, &space).unwrap();
    let again: Vocabulary = once.words().cloned().collect();
    assert_eq!(project(&again, &space).unwrap(), once);
}

#[test]
fn empty_projection_is_rejected_by_clustering() {
    let space = themed_space();
    let table = project(&vocab(&["klingon", "quenya"]), &space).unwrap();
    assert!(table.is_empty());

    let err = HdbscanClusterer::default()
        .cluster(&table.to_matrix(), 5)
        .unwrap_err();
    assert!(matches!(err, LexisError::ClusterError(ClusterError::EmptyInput)));
    assert_eq!(err.error_code(), "CLUSTER_ERROR");
}

// --- Clustering ---

#[test]
fn forty_words_with_min_size_twenty() {
    let mut points = blob(&[0.0, 0.0, 0.0], 25, 0.05, 11);
    points.extend(blob(&[0.0, 0.0, 0.0], 15, 4.0, 12));
    let labels = HdbscanClusterer::default().cluster(&points, 20).unwrap();

    assert_eq!(labels.len(), 40);
    let mut counts: HashMap<i32, usize> = HashMap::new();
    for id in labels.iter().filter_map(|l| l.cluster_id()) {
        *counts.entry(id).or_default() += 1;
    }
    assert!(counts.values().all(|&c| c >= 20), "{counts:?}");
}

#[test]
fn too_few_dense_points_means_all_noise() {
    let points = blob(&[1.0, 1.0], 15, 0.05, 3);
    let labels = HdbscanClusterer::default().cluster(&points, 20).unwrap();
    assert!(labels.iter().all(|l| l.is_noise()));
}

// --- Labeling ---

#[test]
fn two_synthetic_clusters_get_their_axis_words() {
    let space = axis_space();
    let mut table = AlignedWordVectorTable::new();
    let mut labels = Vec::new();
    for (i, v) in blob(&[1.0, 0.0, 0.0, 0.0], 5, 0.05, 21).into_iter().enumerate() {
        table.push(word_of(&format!("a{i}")), v).unwrap();
        labels.push(ClusterLabel::cluster(4));
    }
    for (i, v) in blob(&[0.0, 1.0, 0.0, 0.0], 5, 0.05, 22).into_iter().enumerate() {
        table.push(word_of(&format!("b{i}")), v).unwrap();
        labels.push(ClusterLabel::cluster(9));
    }
    table.push(word_of("stray"), vec![0.0, 0.0, 0.0, 1.0]).unwrap();
    labels.push(ClusterLabel::NOISE);

    let map = label(&table, &labels, &space).unwrap();
    assert_eq!(map.len(), 2);
    assert_eq!(map.get(4).unwrap().as_str(), "east");
    assert_eq!(map.get(9).unwrap().as_str(), "north");
    assert!(map.get(-1).is_none());
}

#[test]
fn labeling_rejects_misaligned_input() {
    let space = axis_space();
    let mut table = AlignedWordVectorTable::new();
    table.push(word_of("a"), vec![1.0, 0.0, 0.0, 0.0]).unwrap();
    let err = label(&table, &[ClusterLabel::cluster(0), ClusterLabel::NOISE], &space).unwrap_err();
    assert_eq!(err.error_code(), "ALIGNMENT_ERROR");
}

#[test]
fn labeling_reduced_vectors_against_the_full_space_fails() {
    let space = axis_space();
    let mut table = AlignedWordVectorTable::new();
    table.push(word_of("a"), vec![1.0, 0.0]).unwrap();
    table.push(word_of("b"), vec![0.9, 0.1]).unwrap();
    let err = label(&table, &[ClusterLabel::cluster(0); 2], &space).unwrap_err();
    assert_eq!(err.error_code(), "DIMENSION_MISMATCH");
}

// --- Full pipeline ---

#[test]
fn themed_run_produces_pure_labeled_clusters() {
    let engine = PipelineEngine::new(Arc::new(themed_space()), themed_config());
    let out = engine.run(None).unwrap();

    assert_eq!(out.stats.expanded, 60);
    assert_eq!(out.stats.projected, 60);
    assert_eq!(out.stats.reduced_dims, 3);
    assert_eq!(out.labels.len(), out.table.len());
    assert_eq!(out.reduced.len(), out.table.len());
    assert!(!out.label_map.is_empty());

    let distinct: HashSet<i32> = out.labels.iter().filter_map(|l| l.cluster_id()).collect();
    let keys: HashSet<i32> = out.label_map.cluster_ids().collect();
    assert_eq!(distinct, keys);

    for (id, label_word) in out.label_map.iter() {
        let members = out.members(id);
        assert!(members.len() >= 5);
        let theme = theme_of(members[0].as_str());
        assert!(members.iter().all(|w| theme_of(w.as_str()) == theme));
        assert_eq!(theme_of(label_word.as_str()), theme, "label {label_word}");
    }
}

#[test]
fn dictionary_that_excludes_everything_surfaces_cluster_error() {
    let engine = PipelineEngine::new(Arc::new(themed_space()), themed_config());
    let err = engine.run(Some(&vocab(&["football", "tennis"]))).unwrap_err();
    assert!(matches!(err, LexisError::ClusterError(ClusterError::EmptyInput)));
}

#[test]
fn too_many_components_for_the_vocabulary_is_a_dimension_error() {
    let mut config = themed_config();
    config.expansion.top_n = 6;
    config.reduction.n_components = 10;
    let engine = PipelineEngine::new(Arc::new(themed_space()), config);
    let err = engine.run(None).unwrap_err();
    assert_eq!(err.error_code(), "DIMENSION_MISMATCH");
}

struct AllNoise;

impl IClusterer for AllNoise {
    fn cluster(&self, vectors: &[Vec<f32>], _min: usize) -> LexisResult<Vec<ClusterLabel>> {
        Ok(vec![ClusterLabel::NOISE; vectors.len()])
    }

    fn name(&self) -> &str {
        "all-noise"
    }
}

#[test]
fn pluggable_clusterer_all_noise_gives_empty_label_map() {
    let engine = PipelineEngine::new(Arc::new(themed_space()), themed_config())
        .with_clusterer(Box::new(AllNoise));
    let out = engine.run(None).unwrap();
    assert!(out.label_map.is_empty());
    assert_eq!(out.noise().len(), 60);
    assert_eq!(out.stats.clusters, 0);
}

#[test]
fn model_file_and_dictionary_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let model_path = dir.path().join("themed.txt");
    write_text_model(&themed_pairs(), &model_path);

    let mut config = themed_config();
    config.clustering.min_cluster_size = 2;
    let store = load_model(&model_path, &config.embedding).unwrap();
    let dictionary =
        lexis_ingest::load_dictionary(&test_fixtures::fixture_path("dictionary.json")).unwrap();

    let engine = PipelineEngine::new(Arc::new(store), config.clone());
    let out = engine.run(Some(&dictionary)).unwrap();
    assert_eq!(out.stats.dictionary_filtered, Some(9));
    assert_eq!(out.table.len(), 9);
    assert_eq!(out.labels.len(), 9);

    let report = ClusterReport::build(&out, &config, engine.source().name()).unwrap();
    assert_eq!(report.assignments.len(), 9);
    assert_eq!(report.scatter.len(), 9);
    let clustered: usize = report.clusters.iter().map(|c| c.size).sum();
    assert_eq!(clustered + report.noise.len(), 9);

    let json_path = dir.path().join("report.json");
    let csv_path = dir.path().join("scatter.csv");
    report.write_json(&json_path).unwrap();
    report.write_scatter_csv(&csv_path).unwrap();

    let parsed: ClusterReport =
        serde_json::from_str(&std::fs::read_to_string(&json_path).unwrap()).unwrap();
    assert_eq!(parsed.run_id, report.run_id);
    assert_eq!(parsed.vocabulary_digest, report.vocabulary_digest);
    let csv = std::fs::read_to_string(&csv_path).unwrap();
    assert_eq!(csv.lines().count(), 10);
    assert!(csv.starts_with("word,x,y,cluster\n"));
}
