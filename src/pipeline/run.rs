//! End-to-end batch run: load → transform → split → fit → evaluate →
//! transform test → align → predict → save

use std::path::PathBuf;

use tracing::{debug, info};

use super::fit::{fit_features, FittedPipeline, TrainingReport};
use super::labels::take_labels;
use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::features::{FeatureTransform, TransformMode};
use crate::table::{read_table, write_predictions, RecordTable};

/// Outcome of a completed run
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub training: TrainingReport,
    /// Number of predictions written
    pub predictions: usize,
    pub output_path: PathBuf,
}

/// Fit/predict orchestration over a [`PipelineConfig`]
#[derive(Debug, Clone)]
pub struct Pipeline {
    config: PipelineConfig,
    transform: FeatureTransform,
}

impl Pipeline {
    pub fn new(config: PipelineConfig) -> Self {
        let transform = FeatureTransform::new(config.features.clone());
        Self { config, transform }
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn transform(&self) -> &FeatureTransform {
        &self.transform
    }

    /// Fit on a labeled table.
    ///
    /// The label column is removed before the transform; a table without it
    /// is a [`Error::Schema`]. An invalid configuration is rejected before
    /// fitting.
    pub fn fit(&self, mut table: RecordTable) -> Result<(FittedPipeline, TrainingReport)> {
        let labels = take_labels(&mut table, &self.config.label_column, &self.config.training_path)?;
        let features = self.transform.transform(&mut table, TransformMode::Training);
        fit_features(&self.config, &features, &labels)
    }

    /// Execute the whole batch job; nothing is written unless every stage succeeds
    pub fn run(&self) -> Result<RunSummary> {
        self.config.validate()?;
        for path in [&self.config.training_path, &self.config.inference_path] {
            if !path.is_file() {
                return Err(Error::SourceNotFound { path: path.clone() });
            }
        }

        info!(path = %self.config.training_path.display(), "loading training table");
        let train = read_table(&self.config.training_path)?;
        log_loaded("training", &train);
        let (fitted, training) = self.fit(train)?;

        info!(path = %self.config.inference_path.display(), "loading inference table");
        let test = read_table(&self.config.inference_path)?;
        log_loaded("inference", &test);
        let predictions = fitted.predict(&self.transform, test)?;

        write_predictions(
            &self.config.output_path,
            &self.config.prediction_column,
            &predictions,
        )?;
        info!(
            path = %self.config.output_path.display(),
            rows = predictions.len(),
            "saved predictions"
        );
        debug!(head = ?&predictions[..predictions.len().min(5)], "predictions head");

        Ok(RunSummary {
            training,
            predictions: predictions.len(),
            output_path: self.config.output_path.clone(),
        })
    }
}

fn log_loaded(role: &str, table: &RecordTable) {
    let (rows, cols) = table.shape();
    info!(role, rows, cols, "loaded table");
    debug!("{role} head:\n{}", table.preview(3));
}

/// Run the pipeline described by `config`
pub fn run(config: &PipelineConfig) -> Result<RunSummary> {
    Pipeline::new(config.clone()).run()
}
