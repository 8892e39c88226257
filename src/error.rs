//! Error types with actionable diagnostics.
//!
//! Every fatal condition of a run surfaces here. Degenerate but valid inputs
//! (absent optional feature columns, empty feature sets) are never errors.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for clasificador operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that abort a pipeline run.
#[derive(Error, Debug)]
pub enum Error {
    /// An expected input file is absent.
    #[error("Source file not found: {path}\n  → Check --data-dir or the configured path")]
    SourceNotFound { path: PathBuf },

    /// The training table lacks the label column.
    #[error("Column '{column}' not found in {path}\n  → The training file must carry the label column")]
    Schema { column: String, path: PathBuf },

    /// A label cell cannot be cast to an integer class.
    #[error("Invalid label at row {row}: '{value}'\n  → Labels must be integers with no blanks")]
    InvalidLabel { row: usize, value: String },

    /// The label column holds more than two classes.
    #[error("Binary classifier needs at most two classes, found {classes:?}")]
    TooManyClasses { classes: Vec<i64> },

    /// A numeric feature is still missing after imputation.
    #[error("Feature '{column}' is missing at row {row}\n  → Only Age, Fare and Embarked are imputed; fill other columns upstream")]
    MissingFeatureValue { column: String, row: usize },

    /// A numeric feature holds an infinity.
    #[error("Feature '{column}' is {value} at row {row}\n  → Replace infinite values in the source file")]
    NonFiniteFeature { column: String, row: usize, value: f64 },

    /// Feature matrix width differs from the fitted width.
    #[error("Feature shape mismatch: expected {expected} columns, got {actual}")]
    ShapeMismatch { expected: usize, actual: usize },

    /// The classifier's solver failed.
    #[error("Logistic regression solver failed: {message}")]
    Solver { message: String },

    /// Configuration file has invalid syntax.
    #[error("Invalid configuration syntax in {path}:\n  {message}")]
    ConfigParsing { path: PathBuf, message: String },

    /// Configuration value is invalid.
    #[error("Invalid configuration value for '{field}': {message}\n  → {suggestion}")]
    ConfigValue {
        field: String,
        message: String,
        suggestion: String,
    },

    /// Malformed CSV content.
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },
}

impl Error {
    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io {
            context: context.into(),
            source,
        }
    }

    /// Create a CSV error for the given file.
    pub fn csv(path: impl Into<PathBuf>, source: csv::Error) -> Self {
        Self::Csv {
            path: path.into(),
            source,
        }
    }

    /// Check if this error is caused by user input rather than a defect.
    pub fn is_user_error(&self) -> bool {
        !matches!(
            self,
            Self::ShapeMismatch { .. } | Self::Solver { .. } | Self::Io { .. }
        )
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::SourceNotFound { .. } => "E001",
            Self::Schema { .. } => "E002",
            Self::InvalidLabel { .. } => "E003",
            Self::TooManyClasses { .. } => "E004",
            Self::MissingFeatureValue { .. } => "E010",
            Self::ShapeMismatch { .. } => "E011",
            Self::Solver { .. } => "E012",
            Self::NonFiniteFeature { .. } => "E013",
            Self::ConfigParsing { .. } => "E020",
            Self::ConfigValue { .. } => "E021",
            Self::Csv { .. } => "E030",
            Self::Io { .. } => "E050",
        }
    }
}
