//! Fit stage and the fitted pipeline it produces

use ndarray::{Array2, Axis};
use tracing::{debug, info};

use crate::config::PipelineConfig;
use crate::error::{Error, Result};
use crate::eval::ConfusionMatrix;
use crate::features::{FeatureSchema, FeatureTable, FeatureTransform, TransformMode};
use crate::table::RecordTable;
use crate::train::{
    FittedLogistic, FittedScaler, LogisticRegression, StandardScaler, StratifiedSplit,
};

/// Holdout results of a fit
#[derive(Debug, Clone, PartialEq)]
pub struct TrainingReport {
    /// Rows in the training table
    pub rows: usize,
    /// Width of the canonical schema
    pub features: usize,
    pub train_rows: usize,
    pub validation_rows: usize,
    /// Informational only; never gates prediction
    pub validation_accuracy: f64,
    pub confusion: ConfusionMatrix,
}

/// Canonical schema, scaler and model, fixed at fit time and read-only after.
#[derive(Debug, Clone)]
pub struct FittedPipeline {
    schema: FeatureSchema,
    scaler: FittedScaler,
    model: FittedLogistic,
}

/// Fail on the first NaN or infinite cell; the classifier needs finite input
pub(crate) fn ensure_complete(features: &FeatureTable) -> Result<()> {
    match features.first_non_finite() {
        Some((column, row, value)) if value.is_nan() => Err(Error::MissingFeatureValue {
            column: column.to_string(),
            row,
        }),
        Some((column, row, value)) => Err(Error::NonFiniteFeature {
            column: column.to_string(),
            row,
            value,
        }),
        None => Ok(()),
    }
}

fn take_rows(x: &Array2<f64>, rows: &[usize]) -> Array2<f64> {
    x.select(Axis(0), rows)
}

fn take_labels(y: &[i64], rows: &[usize]) -> Vec<i64> {
    rows.iter().map(|&i| y[i]).collect()
}

/// Fit the scaler on all training features, split, then fit the model on the
/// train subset only and score the validation subset.
pub fn fit_features(
    config: &PipelineConfig,
    features: &FeatureTable,
    labels: &[i64],
) -> Result<(FittedPipeline, TrainingReport)> {
    config.validate()?;
    if labels.len() != features.n_rows() {
        return Err(Error::ShapeMismatch {
            expected: features.n_rows(),
            actual: labels.len(),
        });
    }
    ensure_complete(features)?;
    let schema = FeatureSchema::capture(features);
    info!(count = schema.len(), columns = ?schema.columns(), "canonical feature schema saved");

    let (scaler, scaled) = StandardScaler::without_mean().fit_transform(features.values())?;
    info!(rows = scaled.nrows(), cols = scaled.ncols(), "scaled training features");

    let split = StratifiedSplit::new(config.split.validation_fraction)
        .with_seed(config.split.seed)
        .split(labels);
    let x_train = take_rows(&scaled, &split.train);
    let x_val = take_rows(&scaled, &split.validation);
    let y_train = take_labels(labels, &split.train);
    let y_val = take_labels(labels, &split.validation);
    info!(
        train = ?x_train.dim(),
        validation = ?x_val.dim(),
        "stratified split"
    );

    info!(max_iter = config.model.max_iter, "training logistic regression");
    let model = LogisticRegression::new()
        .with_max_iter(config.model.max_iter)
        .with_tolerance(config.model.tolerance)
        .with_c(config.model.c)
        .fit(x_train.view(), &y_train)?;
    debug!(
        converged = model.converged(),
        intercept = model.intercept(),
        "training complete"
    );

    let predicted = model.predict(x_val.view())?;
    let confusion = ConfusionMatrix::from_labels(&y_val, &predicted);
    let validation_accuracy = confusion.accuracy();
    info!(
        accuracy = validation_accuracy,
        "training holdout accuracy: {validation_accuracy:.4}"
    );
    debug!("\n{confusion}");

    let report = TrainingReport {
        rows: features.n_rows(),
        features: schema.len(),
        train_rows: split.train.len(),
        validation_rows: split.validation.len(),
        validation_accuracy,
        confusion,
    };
    Ok((
        FittedPipeline {
            schema,
            scaler,
            model,
        },
        report,
    ))
}

impl FittedPipeline {
    pub fn schema(&self) -> &FeatureSchema {
        &self.schema
    }

    pub fn scaler(&self) -> &FittedScaler {
        &self.scaler
    }

    pub fn model(&self) -> &FittedLogistic {
        &self.model
    }

    /// Align, scale (transform only) and score an already-encoded table
    pub fn predict_features(&self, features: &FeatureTable) -> Result<Vec<i64>> {
        let (aligned, report) = self.schema.align(features);
        if !report.added.is_empty() {
            debug!(columns = ?report.added, "zero-filled absent schema columns");
        }
        if !report.dropped.is_empty() {
            debug!(columns = ?report.dropped, "dropped columns outside schema");
        }
        info!(rows = aligned.n_rows(), cols = aligned.n_cols(), "aligned inference features");
        ensure_complete(&aligned)?;

        let scaled = self.scaler.transform(aligned.values())?;
        info!(rows = scaled.nrows(), cols = scaled.ncols(), "scaled inference features");
        self.model.predict(scaled.view())
    }

    /// Run the inference-mode transform on `table`, then predict
    pub fn predict(
        &self,
        transform: &FeatureTransform,
        mut table: RecordTable,
    ) -> Result<Vec<i64>> {
        let features = transform.transform(&mut table, TransformMode::Inference);
        self.predict_features(&features)
    }
}
