//! ClusterReport: the serialisable summary of a run, plus the 2-D scatter
//! points handed to plotting tools.

use std::fmt::Write as _;
use std::path::Path;

use chrono::{DateTime, Utc};
use lexis_core::config::LexisConfig;
use lexis_core::constants::SCATTER_DIMENSIONS;
use lexis_core::errors::LexisResult;
use lexis_core::models::{ClusterLabel, Word};
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::engine::{PipelineOutput, PipelineStats};
use crate::stages::reduction::Pca;

/// Run parameters as resolved from configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunParameters {
    pub seeds: Vec<String>,
    pub top_n: usize,
    pub n_components: usize,
    pub min_cluster_size: usize,
    pub min_samples: Option<usize>,
}

impl RunParameters {
    pub fn from_config(config: &LexisConfig) -> Self {
        Self {
            seeds: config.expansion.seeds.clone(),
            top_n: config.expansion.top_n,
            n_components: config.reduction.n_components,
            min_cluster_size: config.clustering.min_cluster_size,
            min_samples: config.clustering.min_samples,
        }
    }
}

/// One row of the word → cluster mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assignment {
    pub word: Word,
    pub cluster: ClusterLabel,
    /// Label of the word's cluster, `None` for noise.
    pub label: Option<Word>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClusterSummary {
    pub id: i32,
    pub label: Word,
    pub size: usize,
    pub members: Vec<Word>,
}

/// A word placed on the 2-D plot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScatterPoint {
    pub word: Word,
    pub x: f32,
    pub y: f32,
    pub cluster: ClusterLabel,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClusterReport {
    pub run_id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Name of the embedding space the run used.
    pub source: String,
    pub parameters: RunParameters,
    pub stats: PipelineStats,
    /// blake3 of the clustered words in row order; equal digests mean the
    /// same input reached the reducer.
    pub vocabulary_digest: String,
    pub assignments: Vec<Assignment>,
    /// Largest cluster first, ties by id.
    pub clusters: Vec<ClusterSummary>,
    pub noise: Vec<Word>,
    pub scatter: Vec<ScatterPoint>,
}

impl ClusterReport {
    /// Summarise `output`. With `include_scatter`, the full-dimensional table
    /// is projected to two dimensions for plotting; tables too small for that
    /// get no scatter points.
    pub fn build(
        output: &PipelineOutput,
        config: &LexisConfig,
        source_name: &str,
    ) -> LexisResult<Self> {
        let assignments = output
            .assignments()
            .map(|(word, cluster, label)| Assignment {
                word: word.clone(),
                cluster,
                label: label.cloned(),
            })
            .collect();

        let mut clusters: Vec<ClusterSummary> = output
            .label_map
            .iter()
            .map(|(id, label)| {
                let members: Vec<Word> = output.members(id).into_iter().cloned().collect();
                ClusterSummary {
                    id,
                    label: label.clone(),
                    size: members.len(),
                    members,
                }
            })
            .collect();
        clusters.sort_by(|a, b| b.size.cmp(&a.size).then(a.id.cmp(&b.id)));

        let scatter = if config.output.include_scatter {
            scatter_points(output, config)?
        } else {
            Vec::new()
        };

        Ok(Self {
            run_id: Uuid::new_v4(),
            generated_at: Utc::now(),
            source: source_name.to_string(),
            parameters: RunParameters::from_config(config),
            stats: output.stats.clone(),
            vocabulary_digest: vocabulary_digest(output.table.words()),
            assignments,
            clusters,
            noise: output.noise().into_iter().cloned().collect(),
            scatter,
        })
    }

    pub fn to_json(&self) -> LexisResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn write_json(&self, path: &Path) -> LexisResult<()> {
        std::fs::write(path, self.to_json()?)?;
        info!(path = %path.display(), "report written");
        Ok(())
    }

    /// Scatter points as CSV with a `word,x,y,cluster` header. Noise rows
    /// carry cluster `-1`.
    pub fn scatter_csv(&self) -> String {
        let mut out = String::from("word,x,y,cluster\n");
        for p in &self.scatter {
            // Writing into a String cannot fail.
            let _ = writeln!(out, "{},{},{},{}", csv_field(p.word.as_str()), p.x, p.y, p.cluster.raw());
        }
        out
    }

    pub fn write_scatter_csv(&self, path: &Path) -> LexisResult<()> {
        std::fs::write(path, self.scatter_csv())?;
        info!(path = %path.display(), points = self.scatter.len(), "scatter CSV written");
        Ok(())
    }

    /// Human-readable cluster listing for terminal output.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(
            out,
            "{} words, {} clusters, {} noise",
            self.assignments.len(),
            self.clusters.len(),
            self.noise.len()
        );
        for c in &self.clusters {
            let members: Vec<&str> = c.members.iter().map(Word::as_str).collect();
            let _ = writeln!(out, "[{}] {} ({}): {}", c.id, c.label, c.size, members.join(", "));
        }
        if !self.noise.is_empty() {
            let noise: Vec<&str> = self.noise.iter().map(Word::as_str).collect();
            let _ = writeln!(out, "[noise] {}", noise.join(", "));
        }
        out
    }
}

fn scatter_points(output: &PipelineOutput, config: &LexisConfig) -> LexisResult<Vec<ScatterPoint>> {
    let table = &output.table;
    let dims = table.dimensions().unwrap_or(0);
    if table.len() < SCATTER_DIMENSIONS || dims < SCATTER_DIMENSIONS {
        debug!(rows = table.len(), dims, "table too small for a 2-D scatter");
        return Ok(Vec::new());
    }

    let matrix = table.to_matrix();
    let pca = Pca::fit(
        &matrix,
        SCATTER_DIMENSIONS,
        config.reduction.max_iterations,
        config.reduction.tolerance,
    )?;
    let points = pca.transform(&matrix)?;

    Ok(table
        .words()
        .zip(points)
        .zip(&output.labels)
        .map(|((word, xy), &cluster)| ScatterPoint {
            word: word.clone(),
            x: xy[0],
            y: xy[1],
            cluster,
        })
        .collect())
}

fn vocabulary_digest<'a>(words: impl Iterator<Item = &'a Word>) -> String {
    let mut hasher = blake3::Hasher::new();
    for w in words {
        hasher.update(w.as_str().as_bytes());
        hasher.update(b"\n");
    }
    hasher.finalize().to_hex().to_string()
}

/// Quote a CSV field when it holds a separator, quote or newline.
fn csv_field(value: &str) -> String {
    if value.contains([',', '"', '\n', '\r']) {
        format!("\"{}\"", value.replace('"', "\"\""))
    } else {
        value.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn csv_fields_are_quoted_when_needed() {
        assert_eq!(csv_field("plain"), "plain");
        assert_eq!(csv_field("a,b"), "\"a,b\"");
        assert_eq!(csv_field("say\"hi\""), "\"say\"\"hi\"\"\"");
    }

    #[test]
    fn digest_depends_on_order() {
        let a = Word::new("a").unwrap();
        let b = Word::new("b").unwrap();
        assert_ne!(
            vocabulary_digest([&a, &b].into_iter()),
            vocabulary_digest([&b, &a].into_iter())
        );
        assert_eq!(
            vocabulary_digest([&a, &b].into_iter()),
            vocabulary_digest([&a, &b].into_iter())
        );
    }
}
