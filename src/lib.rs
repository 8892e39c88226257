//! Clasificador: tabular binary classification.
//!
//! Fits a logistic classifier on a labeled CSV, reports holdout accuracy, and
//! writes one prediction per row of an unlabeled CSV.
//!
//! ## Architecture
//!
//! - `table`: CSV loading into string/numeric cells, prediction output, column statistics
//! - `features`: imputation, derived features, one-hot encoding, canonical schema alignment
//! - `train`: stratified split, scaler, logistic regression
//! - `eval`: accuracy and confusion matrix
//! - `pipeline`: fit → evaluate → predict orchestration
//! - `config` / `cli`: YAML configuration and the command-line front end
//!
//! ## Example
//!
//! ```ignore
//! use clasificador::config::PipelineConfig;
//!
//! let summary = clasificador::pipeline::run(&PipelineConfig::from_data_dir("data"))?;
//! println!("Validation accuracy: {:.4}", summary.training.validation_accuracy);
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod eval;
pub mod features;
pub mod pipeline;
pub mod table;
pub mod train;

pub use error::{Error, Result};
