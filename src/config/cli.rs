//! Command-line types - Cli, Command, and argument structs

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use super::pipeline::{load_config, PipelineConfig, DEFAULT_DATA_DIR};
use crate::error::Result;

/// Clasificador: tabular binary classification
#[derive(Parser, Debug, Clone, PartialEq)]
#[command(name = "clasificador")]
#[command(version)]
#[command(
    about = "Fit a logistic classifier on a labeled CSV, report holdout accuracy, and predict an unlabeled CSV"
)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Command,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Command {
    /// Train, evaluate on the holdout, and write predictions for the test file
    Run(RunArgs),

    /// Show shape, columns, statistics and first rows of the training file
    Inspect(InspectArgs),
}

/// Arguments for the run command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct RunArgs {
    /// Directory holding train.csv and test.csv; predictions.csv is written there
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// YAML pipeline configuration (paths in it win over --data-dir)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Override the training file
    #[arg(long)]
    pub train: Option<PathBuf>,

    /// Override the inference file
    #[arg(long)]
    pub test: Option<PathBuf>,

    /// Override the prediction output file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

/// Arguments for the inspect command
#[derive(Parser, Debug, Clone, PartialEq)]
pub struct InspectArgs {
    /// Directory holding train.csv
    #[arg(short, long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// Inspect this file instead of <data-dir>/train.csv
    #[arg(long)]
    pub train: Option<PathBuf>,

    /// Number of rows to preview
    #[arg(short = 'n', long, default_value_t = 5)]
    pub rows: usize,
}

/// Parse arguments from an iterator (for testing)
pub fn parse_args<I, T>(args: I) -> std::result::Result<Cli, clap::Error>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
{
    Cli::try_parse_from(args)
}

/// Apply command-line path overrides to a PipelineConfig
pub fn apply_overrides(config: &mut PipelineConfig, args: &RunArgs) {
    if let Some(train) = &args.train {
        config.training_path = train.clone();
    }
    if let Some(test) = &args.test {
        config.inference_path = test.clone();
    }
    if let Some(output) = &args.output {
        config.output_path = output.clone();
    }
}

/// Build the run configuration: file or data directory, then overrides
pub fn resolve_run_config(args: &RunArgs) -> Result<PipelineConfig> {
    let mut config = match &args.config {
        Some(path) => load_config(path)?,
        None => PipelineConfig::from_data_dir(&args.data_dir),
    };
    apply_overrides(&mut config, args);
    config.validate()?;
    Ok(config)
}

impl InspectArgs {
    pub fn training_path(&self) -> PathBuf {
        self.train
            .clone()
            .unwrap_or_else(|| PipelineConfig::from_data_dir(&self.data_dir).training_path)
    }
}
