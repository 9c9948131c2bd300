//! lexis CLI
//!
//! Batch runner: expand seed words through an embedding space, cluster the
//! result and label each cluster.

use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use lexis_core::config::{CliOverrides, LexisConfig};
use lexis_core::errors::{LexisError, LexisErrorCode};
use lexis_core::traits::IVectorSource;
use lexis_embeddings::{load_model, EmbeddingStore};
use lexis_pipeline::{ClusterReport, PipelineEngine};
use tracing::info;

#[derive(Parser)]
#[command(name = "lexis")]
#[command(version)]
#[command(about = "Discover themed word groups by seed expansion and density clustering", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// TOML configuration file
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level or filter directive (LEXIS_LOG takes precedence)
    #[arg(long, global = true)]
    log_level: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the full expansion and clustering pipeline
    Run(RunArgs),

    /// Print the nearest neighbours of a word
    Neighbors {
        /// Embedding model file (word2vec text or binary)
        #[arg(short, long)]
        model: Option<PathBuf>,

        /// Word to look up
        word: String,

        /// Number of results
        #[arg(short = 'k', long, default_value = "10")]
        count: usize,
    },

    /// Print the resolved configuration as TOML
    Config,
}

#[derive(Args, Default)]
struct RunArgs {
    /// Embedding model file (word2vec text or binary)
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// JSON dictionary whose keys restrict the candidate words
    #[arg(short, long)]
    dictionary: Option<PathBuf>,

    /// Seed word, repeatable
    #[arg(short, long = "seed")]
    seeds: Vec<String>,

    /// Total neighbour budget across all seeds
    #[arg(long)]
    top_n: Option<usize>,

    /// Dimensionality the clusterer works in
    #[arg(long)]
    n_components: Option<usize>,

    /// Smallest group reported as a cluster
    #[arg(long)]
    min_cluster_size: Option<usize>,

    /// HDBSCAN core-distance neighbourhood
    #[arg(long)]
    min_samples: Option<usize>,

    /// Write the JSON report here
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Write 2-D scatter points as CSV here
    #[arg(long)]
    scatter_csv: Option<PathBuf>,
}

impl RunArgs {
    fn overrides(&self, log_level: Option<String>) -> CliOverrides {
        CliOverrides {
            model_path: self.model.as_deref().map(path_string),
            dictionary_path: self.dictionary.as_deref().map(path_string),
            seeds: (!self.seeds.is_empty()).then(|| self.seeds.clone()),
            top_n: self.top_n,
            n_components: self.n_components,
            min_cluster_size: self.min_cluster_size,
            min_samples: self.min_samples,
            report_path: self.output.as_deref().map(path_string),
            scatter_csv_path: self.scatter_csv.as_deref().map(path_string),
            log_level,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match err.downcast_ref::<LexisError>() {
                Some(lexis) => eprintln!("error: {}", lexis.coded_string()),
                None => eprintln!("error: {err:#}"),
            }
            ExitCode::FAILURE
        }
    }
}

fn dispatch(cli: Cli) -> Result<()> {
    let overrides = match &cli.command {
        Commands::Run(args) => args.overrides(cli.log_level.clone()),
        Commands::Neighbors { model, .. } => CliOverrides {
            model_path: model.as_deref().map(path_string),
            log_level: cli.log_level.clone(),
            ..CliOverrides::default()
        },
        Commands::Config => CliOverrides {
            log_level: cli.log_level.clone(),
            ..CliOverrides::default()
        },
    };
    let config = LexisConfig::load(cli.config.as_deref(), Some(&overrides))
        .map_err(LexisError::from)?;
    lexis_observability::init_tracing(&config.observability);

    match cli.command {
        Commands::Run(_) => run_pipeline(&config),
        Commands::Neighbors { word, count, .. } => show_neighbors(&config, &word, count),
        Commands::Config => {
            print!("{}", config.to_toml().map_err(LexisError::from)?);
            Ok(())
        }
    }
}

fn run_pipeline(config: &LexisConfig) -> Result<()> {
    let store = open_model(config)?;
    let dictionary = match config.ingest.dictionary_path.as_deref() {
        Some(path) => Some(lexis_ingest::load_dictionary(Path::new(path))?),
        None => None,
    };

    let source_name = store.name().to_string();
    let engine = PipelineEngine::new(Arc::new(store), config.clone());
    let output = engine.run(dictionary.as_ref())?;
    let report = ClusterReport::build(&output, config, &source_name)?;

    if let Some(path) = config.output.report_path.as_deref() {
        report.write_json(Path::new(path))?;
    }
    if let Some(path) = config.output.scatter_csv_path.as_deref() {
        report.write_scatter_csv(Path::new(path))?;
    }
    print!("{}", report.summary());
    info!(run_id = %report.run_id, "run finished");
    Ok(())
}

fn show_neighbors(config: &LexisConfig, word: &str, count: usize) -> Result<()> {
    let store = open_model(config)?;
    for neighbor in store.nearest_by_word(word, count)? {
        println!("{}\t{:.4}", neighbor.word, neighbor.score);
    }
    Ok(())
}

fn open_model(config: &LexisConfig) -> Result<EmbeddingStore> {
    let path = config
        .embedding
        .model_path
        .as_deref()
        .context("no embedding model: pass --model or set embedding.model_path")?;
    Ok(load_model(Path::new(path), &config.embedding)?)
}

fn path_string(path: &Path) -> String {
    path.display().to_string()
}
