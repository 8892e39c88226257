//! Run command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::{resolve_run_config, RunArgs};
use crate::pipeline::Pipeline;

pub fn run_pipeline(args: RunArgs, level: LogLevel) -> Result<(), String> {
    let config = resolve_run_config(&args).map_err(|e| format!("[{}] {e}", e.code()))?;

    log(
        level,
        LogLevel::Normal,
        &format!("Clasificador: training on {}", config.training_path.display()),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  Split: {:.0}% validation (seed {})",
            config.split.validation_fraction * 100.0,
            config.split.seed
        ),
    );
    log(
        level,
        LogLevel::Verbose,
        &format!(
            "  Model: logistic regression (max_iter={}, C={})",
            config.model.max_iter, config.model.c
        ),
    );

    let summary = Pipeline::new(config)
        .run()
        .map_err(|e| format!("[{}] {e}", e.code()))?;
    let training = &summary.training;

    log(
        level,
        LogLevel::Normal,
        &format!(
            "Validation accuracy: {:.4} ({} train / {} validation rows, {} features)",
            training.validation_accuracy,
            training.train_rows,
            training.validation_rows,
            training.features
        ),
    );
    log(level, LogLevel::Verbose, &training.confusion.to_string());
    log(
        level,
        LogLevel::Normal,
        &format!(
            "Saved {} predictions to {}",
            summary.predictions,
            summary.output_path.display()
        ),
    );
    Ok(())
}
