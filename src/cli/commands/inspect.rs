//! Inspect command implementation

use crate::cli::logging::log;
use crate::cli::LogLevel;
use crate::config::InspectArgs;
use crate::table::{describe, read_table, ColumnStats};

/// Show shape, column statistics and the first rows of the training table
pub fn run_inspect(args: InspectArgs, level: LogLevel) -> Result<(), String> {
    let path = args.training_path();
    log(
        level,
        LogLevel::Normal,
        &format!("Inspecting: {}", path.display()),
    );

    let table = read_table(&path).map_err(|e| format!("[{}] {e}", e.code()))?;
    let (rows, cols) = table.shape();

    log(level, LogLevel::Normal, "Table Information:");
    log(level, LogLevel::Normal, &format!("  Rows: {rows}"));
    log(level, LogLevel::Normal, &format!("  Columns: {cols}"));

    log(level, LogLevel::Normal, "\nColumn Statistics:");
    for stats in describe(&table) {
        log(level, LogLevel::Normal, &format_stats(&stats));
    }

    if args.rows > 0 {
        log(
            level,
            LogLevel::Normal,
            &format!("\nFirst {} rows:", args.rows.min(rows)),
        );
        log(level, LogLevel::Normal, &table.preview(args.rows));
    }

    Ok(())
}

fn format_stats(stats: &ColumnStats) -> String {
    let mut line = format!(
        "  {:<14} {:<12} nulls={} ({:.1}%) unique={}",
        stats.name,
        stats.kind.to_string(),
        stats.null_count,
        stats.null_ratio() * 100.0,
        stats.unique_count
    );
    if let Some(median) = stats.median {
        line.push_str(&format!(" median={median}"));
    }
    line
}
