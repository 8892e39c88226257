//! CLI command implementations

mod inspect;
mod run;

#[cfg(test)]
mod tests;

use crate::cli::LogLevel;
use crate::config::{Cli, Command};

/// Resolve the output level from the verbose/quiet flags
pub(crate) fn log_level(cli: &Cli) -> LogLevel {
    if cli.quiet {
        LogLevel::Quiet
    } else if cli.verbose {
        LogLevel::Verbose
    } else {
        LogLevel::Normal
    }
}

/// Execute a CLI command based on the parsed arguments
pub fn run_command(cli: Cli) -> Result<(), String> {
    let log_level = log_level(&cli);
    crate::cli::init_tracing(log_level);

    match cli.command {
        Command::Run(args) => run::run_pipeline(args, log_level),
        Command::Inspect(args) => inspect::run_inspect(args, log_level),
    }
}
