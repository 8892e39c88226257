//! Pipeline configuration
//!
//! An explicit value handed to the pipeline entry point. Build one from a data
//! directory, or load it from YAML and override individual paths.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::features::FeatureConfig;

/// Default data directory, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// Everything a run needs; nothing is read from globals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PipelineConfig {
    /// Labeled training CSV
    pub training_path: PathBuf,
    /// Unlabeled inference CSV
    pub inference_path: PathBuf,
    /// Prediction CSV written at the end of a run
    pub output_path: PathBuf,

    /// Binary label column of the training table
    #[serde(default = "default_label_column")]
    pub label_column: String,
    /// Header of the single prediction column
    #[serde(default = "default_prediction_column")]
    pub prediction_column: String,

    #[serde(default)]
    pub split: SplitConfig,
    #[serde(default)]
    pub model: ModelConfig,
    #[serde(default)]
    pub features: FeatureConfig,
}

/// Holdout split settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SplitConfig {
    pub validation_fraction: f64,
    pub seed: u64,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            validation_fraction: 0.2,
            seed: 42,
        }
    }
}

/// Logistic regression settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ModelConfig {
    pub max_iter: usize,
    pub tolerance: f64,
    /// Inverse L2 regularisation strength
    pub c: f64,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            max_iter: 1000,
            tolerance: 1e-4,
            c: 1.0,
        }
    }
}

fn default_label_column() -> String {
    "Survived".to_string()
}

fn default_prediction_column() -> String {
    "Survived_pred".to_string()
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self::from_data_dir(DEFAULT_DATA_DIR)
    }
}

impl PipelineConfig {
    /// `train.csv`, `test.csv` and `predictions.csv` under `dir`
    pub fn from_data_dir(dir: impl AsRef<Path>) -> Self {
        let dir = dir.as_ref();
        Self {
            training_path: dir.join("train.csv"),
            inference_path: dir.join("test.csv"),
            output_path: dir.join("predictions.csv"),
            label_column: default_label_column(),
            prediction_column: default_prediction_column(),
            split: SplitConfig::default(),
            model: ModelConfig::default(),
            features: FeatureConfig::default(),
        }
    }

    /// Reject values the pipeline cannot run with
    pub fn validate(&self) -> Result<()> {
        let fraction = self.split.validation_fraction;
        if !(fraction > 0.0 && fraction < 1.0) {
            return Err(Error::ConfigValue {
                field: "split.validation_fraction".to_string(),
                message: format!("{fraction} is outside (0, 1)"),
                suggestion: "Use a value like 0.2".to_string(),
            });
        }
        if self.model.max_iter == 0 {
            return Err(Error::ConfigValue {
                field: "model.max_iter".to_string(),
                message: "must be > 0".to_string(),
                suggestion: "Use a value like 1000".to_string(),
            });
        }
        if !(self.model.tolerance > 0.0) {
            return Err(Error::ConfigValue {
                field: "model.tolerance".to_string(),
                message: format!("{} must be > 0", self.model.tolerance),
                suggestion: "Use a value like 1e-4".to_string(),
            });
        }
        if !(self.model.c > 0.0) {
            return Err(Error::ConfigValue {
                field: "model.c".to_string(),
                message: format!("{} must be > 0", self.model.c),
                suggestion: "Use 1.0 for the usual regularisation strength".to_string(),
            });
        }
        for (field, value) in [
            ("label_column", &self.label_column),
            ("prediction_column", &self.prediction_column),
        ] {
            if value.trim().is_empty() {
                return Err(Error::ConfigValue {
                    field: field.to_string(),
                    message: "cannot be empty".to_string(),
                    suggestion: "Name the column explicitly".to_string(),
                });
            }
        }
        Ok(())
    }
}

/// Load and validate a YAML pipeline configuration
pub fn load_config(path: impl AsRef<Path>) -> Result<PipelineConfig> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("reading config {}", path.display()), e))?;
    let config: PipelineConfig =
        serde_yaml::from_str(&content).map_err(|e| Error::ConfigParsing {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
    config.validate()?;
    Ok(config)
}
