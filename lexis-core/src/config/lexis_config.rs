//! Top-level lexis configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{
    ClusteringConfig, EmbeddingConfig, ExpansionConfig, IngestConfig, ObservabilityConfig,
    OutputConfig, ReductionConfig,
};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. CLI flags (applied via `apply_cli_overrides`)
/// 2. Environment variables (`LEXIS_*`)
/// 3. TOML config file
/// 4. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LexisConfig {
    pub embedding: EmbeddingConfig,
    pub ingest: IngestConfig,
    pub expansion: ExpansionConfig,
    pub reduction: ReductionConfig,
    pub clustering: ClusteringConfig,
    pub output: OutputConfig,
    pub observability: ObservabilityConfig,
}

/// CLI override arguments that can be applied to a config.
#[derive(Debug, Clone, Default)]
pub struct CliOverrides {
    pub model_path: Option<String>,
    pub dictionary_path: Option<String>,
    pub seeds: Option<Vec<String>>,
    pub top_n: Option<usize>,
    pub n_components: Option<usize>,
    pub min_cluster_size: Option<usize>,
    pub min_samples: Option<usize>,
    pub report_path: Option<String>,
    pub scatter_csv_path: Option<String>,
    pub log_level: Option<String>,
}

impl LexisConfig {
    /// Load configuration with layered resolution.
    ///
    /// A `config_path` that is given but missing is an error; without one the
    /// file layer is skipped.
    pub fn load(
        config_path: Option<&Path>,
        cli_overrides: Option<&CliOverrides>,
    ) -> Result<Self, ConfigError> {
        let mut config = match config_path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        Self::apply_env_overrides(&mut config);

        if let Some(cli) = cli_overrides {
            Self::apply_cli_overrides(&mut config, cli);
        }

        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML file without env or CLI layers.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &LexisConfig) -> Result<(), ConfigError> {
        if config.expansion.seeds.is_empty() {
            return Err(invalid("expansion.seeds", "at least one seed word is required"));
        }
        if config.expansion.seeds.iter().any(|s| s.trim().is_empty()) {
            return Err(invalid("expansion.seeds", "seed words must be non-empty"));
        }
        if config.expansion.top_n == 0 {
            return Err(invalid("expansion.top_n", "must be at least 1"));
        }
        if config.reduction.n_components == 0 {
            return Err(invalid("reduction.n_components", "must be at least 1"));
        }
        if config.reduction.max_iterations == 0 {
            return Err(invalid("reduction.max_iterations", "must be at least 1"));
        }
        if config.reduction.tolerance.is_nan() || config.reduction.tolerance <= 0.0 {
            return Err(invalid("reduction.tolerance", "must be greater than 0"));
        }
        if config.clustering.min_cluster_size < 2 {
            return Err(invalid("clustering.min_cluster_size", "must be at least 2"));
        }
        if config.clustering.min_samples == Some(0) {
            return Err(invalid("clustering.min_samples", "must be at least 1"));
        }
        if config.ingest.min_word_length == 0 {
            return Err(invalid("ingest.min_word_length", "must be at least 1"));
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `LEXIS_TOP_N`, `LEXIS_MIN_CLUSTER_SIZE`, etc.
    fn apply_env_overrides(config: &mut LexisConfig) {
        if let Ok(val) = std::env::var("LEXIS_MODEL_PATH") {
            config.embedding.model_path = Some(val);
        }
        if let Ok(val) = std::env::var("LEXIS_DICTIONARY_PATH") {
            config.ingest.dictionary_path = Some(val);
        }
        if let Ok(val) = std::env::var("LEXIS_SEEDS") {
            let seeds: Vec<String> = val
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            if !seeds.is_empty() {
                config.expansion.seeds = seeds;
            }
        }
        if let Ok(val) = std::env::var("LEXIS_TOP_N") {
            if let Ok(v) = val.parse::<usize>() {
                config.expansion.top_n = v;
            }
        }
        if let Ok(val) = std::env::var("LEXIS_N_COMPONENTS") {
            if let Ok(v) = val.parse::<usize>() {
                config.reduction.n_components = v;
            }
        }
        if let Ok(val) = std::env::var("LEXIS_MIN_CLUSTER_SIZE") {
            if let Ok(v) = val.parse::<usize>() {
                config.clustering.min_cluster_size = v;
            }
        }
        if let Ok(val) = std::env::var("LEXIS_LOG_LEVEL") {
            config.observability.log_level = val;
        }
    }

    /// Apply CLI overrides (highest priority).
    fn apply_cli_overrides(config: &mut LexisConfig, cli: &CliOverrides) {
        if let Some(ref v) = cli.model_path {
            config.embedding.model_path = Some(v.clone());
        }
        if let Some(ref v) = cli.dictionary_path {
            config.ingest.dictionary_path = Some(v.clone());
        }
        if let Some(ref v) = cli.seeds {
            if !v.is_empty() {
                config.expansion.seeds = v.clone();
            }
        }
        if let Some(v) = cli.top_n {
            config.expansion.top_n = v;
        }
        if let Some(v) = cli.n_components {
            config.reduction.n_components = v;
        }
        if let Some(v) = cli.min_cluster_size {
            config.clustering.min_cluster_size = v;
        }
        if let Some(v) = cli.min_samples {
            config.clustering.min_samples = Some(v);
        }
        if let Some(ref v) = cli.report_path {
            config.output.report_path = Some(v.clone());
        }
        if let Some(ref v) = cli.scatter_csv_path {
            config.output.scatter_csv_path = Some(v.clone());
        }
        if let Some(ref v) = cli.log_level {
            config.observability.log_level = v.clone();
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

fn invalid(field: &str, message: &str) -> ConfigError {
    ConfigError::ValidationFailed {
        field: field.to_string(),
        message: message.to_string(),
    }
}
