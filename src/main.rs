//! Clasificador CLI
//!
//! Batch entry point: train on `train.csv`, predict `test.csv`.
//!
//! # Usage
//!
//! ```bash
//! # Fixed data layout: data/train.csv, data/test.csv → data/predictions.csv
//! clasificador run
//!
//! # Another directory, verbose
//! clasificador -v run --data-dir ./titanic
//!
//! # YAML configuration with an output override
//! clasificador run --config pipeline.yaml --output preds.csv
//!
//! # Column statistics and first rows of the training file
//! clasificador inspect -n 10
//! ```

use clap::Parser;
use clasificador::cli::{run_command, Cli};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run_command(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}
