//! Shared fixtures for lexis tests and benches.
//!
//! Deterministic embedding spaces built in code, plus the small files under
//! `data/`.

use std::io::Write;
use std::path::{Path, PathBuf};

use lexis_core::models::Word;
use lexis_embeddings::EmbeddingStore;
use serde::de::DeserializeOwned;

/// Dimensionality of the themed space.
pub const THEMED_DIMS: usize = 16;

/// Words clustered around axis 0. The first entry is the seed.
pub const LANGUAGE_THEME: &[&str] = &[
    "language", "grammar", "syntax", "vocabulary", "dialect", "idiom", "phrase", "accent",
    "lexicon", "pronunciation", "sentence", "verb", "noun", "adjective", "translation",
    "bilingual", "fluency", "spelling", "alphabet", "rhetoric", "etymology",
];

/// Words clustered around axis 1. The first entry is the seed.
pub const LEARNING_THEME: &[&str] = &[
    "learning", "study", "practice", "skill", "training", "memory", "knowledge", "curiosity",
    "insight", "tutorial", "lesson", "exercise", "revision", "homework", "mastery",
    "understanding", "experiment", "reading", "thinking", "research", "discovery",
];

/// Words clustered around axis 2. The first entry is the seed.
pub const EDUCATION_THEME: &[&str] = &[
    "education", "school", "teacher", "student", "classroom", "curriculum", "university",
    "college", "academy", "lecture", "diploma", "degree", "professor", "campus", "semester",
    "syllabus", "tuition", "exam", "grade", "faculty", "seminar",
];

/// Unrelated words around axis 3.
pub const SPORT_THEME: &[&str] = &[
    "football", "tennis", "hockey", "cricket", "rugby", "golf", "rowing", "archery", "boxing",
    "cycling",
];

/// The three seed words of the themed space.
pub const THEMED_SEEDS: &[&str] = &["language", "learning", "education"];

/// Deterministic uniform values in `[-1, 1)` from a 64-bit LCG.
pub struct Jitter {
    state: u64,
}

impl Jitter {
    pub fn new(seed: u64) -> Self {
        Self {
            state: seed ^ 0x9E37_79B9_7F4A_7C15,
        }
    }

    pub fn next_f32(&mut self) -> f32 {
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        ((self.state >> 40) as f32 / (1u64 << 24) as f32) * 2.0 - 1.0
    }
}

/// Unit vector along `axis` scaled by `scale`.
pub fn axis_vector(dims: usize, axis: usize, scale: f32) -> Vec<f32> {
    let mut v = vec![0.0; dims];
    v[axis] = scale;
    v
}

/// `count` points around `center`, each component offset by at most `spread`.
pub fn blob(center: &[f32], count: usize, spread: f32, seed: u64) -> Vec<Vec<f32>> {
    let mut jitter = Jitter::new(seed);
    (0..count)
        .map(|_| center.iter().map(|c| c + jitter.next_f32() * spread).collect())
        .collect()
}

/// Which theme a word belongs to in the themed space.
pub fn theme_of(word: &str) -> Option<usize> {
    [LANGUAGE_THEME, LEARNING_THEME, EDUCATION_THEME, SPORT_THEME]
        .iter()
        .position(|theme| theme.contains(&word))
}

/// `(word, vector)` pairs of the themed space.
///
/// Seeds sit exactly on their axis; every other word is jittered around it.
pub fn themed_pairs() -> Vec<(Word, Vec<f32>)> {
    let themes = [LANGUAGE_THEME, LEARNING_THEME, EDUCATION_THEME, SPORT_THEME];
    let mut pairs = Vec::new();
    for (axis, theme) in themes.iter().enumerate() {
        let center = axis_vector(THEMED_DIMS, axis, 1.0);
        let points = blob(&center, theme.len(), 0.08, axis as u64 + 1);
        for (i, (word, vector)) in theme.iter().zip(points).enumerate() {
            let vector = if i == 0 && axis < THEMED_SEEDS.len() {
                center.clone()
            } else {
                vector
            };
            pairs.push((word_of(word), vector));
        }
    }
    pairs
}

/// The themed space as a store.
pub fn themed_space() -> EmbeddingStore {
    store_of("themed", themed_pairs())
}

/// A four-dimensional space with one word per axis direction.
pub fn axis_space() -> EmbeddingStore {
    let pairs = [("east", 0), ("north", 1), ("up", 2), ("inward", 3)]
        .into_iter()
        .map(|(w, axis)| (word_of(w), axis_vector(4, axis, 1.0)))
        .chain([
            (word_of("northeast"), vec![0.7, 0.7, 0.0, 0.0]),
            (word_of("skyward"), vec![0.0, 0.3, 0.9, 0.0]),
        ])
        .collect::<Vec<_>>();
    store_of("axes", pairs)
}

/// Build a store, panicking on invalid fixture data.
pub fn store_of(name: &str, pairs: Vec<(Word, Vec<f32>)>) -> EmbeddingStore {
    EmbeddingStore::from_pairs(name, pairs, 1_000)
        .unwrap_or_else(|e| panic!("invalid fixture space {name}: {e}"))
}

pub fn word_of(text: &str) -> Word {
    Word::new(text).unwrap_or_else(|e| panic!("invalid fixture word {text:?}: {e}"))
}

/// Write pairs as a word2vec text model with a header line.
pub fn write_text_model(pairs: &[(Word, Vec<f32>)], path: &Path) {
    let mut file = std::fs::File::create(path)
        .unwrap_or_else(|e| panic!("Failed to create {}: {}", path.display(), e));
    let dims = pairs.first().map_or(0, |(_, v)| v.len());
    writeln!(file, "{} {}", pairs.len(), dims).unwrap_or_else(|e| panic!("write failed: {e}"));
    for (word, vector) in pairs {
        let components: Vec<String> = vector.iter().map(|c| c.to_string()).collect();
        writeln!(file, "{} {}", word, components.join(" "))
            .unwrap_or_else(|e| panic!("write failed: {e}"));
    }
}

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data")
}

/// Get the absolute path to a fixture file.
pub fn fixture_path(relative_path: &str) -> PathBuf {
    fixtures_root().join(relative_path)
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixture_path(relative_path).exists()
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixture_path(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}
