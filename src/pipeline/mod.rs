//! Fit/Predict pipeline
//!
//! Fits the scaler and classifier once on the training table, reports holdout
//! accuracy, then scores the inference table through the same transform,
//! aligned to the canonical schema captured at fit time. The fitted state is
//! an explicit [`FittedPipeline`] value rather than anything captured globally.

mod fit;
mod labels;
mod run;


pub use fit::{fit_features, FittedPipeline, TrainingReport};
pub use labels::take_labels;
pub use run::{run, Pipeline, RunSummary};
