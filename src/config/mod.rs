//! Configuration: command-line types and the pipeline configuration value

mod cli;
mod pipeline;

#[cfg(test)]
mod tests;

pub use cli::{
    apply_overrides, parse_args, resolve_run_config, Cli, Command, InspectArgs, RunArgs,
};
pub use pipeline::{load_config, ModelConfig, PipelineConfig, SplitConfig, DEFAULT_DATA_DIR};
