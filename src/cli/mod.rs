//! CLI module for clasificador
//!
//! This module contains the CLI command handlers and output utilities.

mod commands;
mod logging;

pub use commands::run_command;
pub use logging::{init_tracing, log, LogLevel};

// Re-export Cli from config for convenience
pub use crate::config::Cli;
