//! Per-column summary statistics for data inspection

use std::collections::HashSet;

use super::column::{Column, ColumnKind};
use super::frame::RecordTable;
use super::value::Value;

/// Statistics about a column
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnStats {
    /// Column name
    pub name: String,
    /// Numeric or categorical
    pub kind: ColumnKind,
    /// Number of rows
    pub count: usize,
    /// Number of distinct present values
    pub unique_count: usize,
    /// Number of missing values
    pub null_count: usize,
    /// Whether all present values are integers
    pub all_integers: bool,
    /// Median of numeric values
    pub median: Option<f64>,
}

impl ColumnStats {
    pub fn from_column(column: &Column) -> Self {
        let mut unique: HashSet<String> = HashSet::new();
        let mut all_integers = true;
        let mut present = 0usize;

        for v in column.values() {
            match v {
                Value::Missing => continue,
                Value::Int(_) => {}
                Value::Float(_) | Value::Str(_) => all_integers = false,
            }
            present += 1;
            unique.insert(v.to_string());
        }

        Self {
            name: column.name().to_string(),
            kind: column.kind(),
            count: column.len(),
            unique_count: unique.len(),
            null_count: column.missing_count(),
            all_integers: all_integers && present > 0,
            median: column.median(),
        }
    }

    /// Null ratio: null_count / count
    pub fn null_ratio(&self) -> f32 {
        if self.count == 0 {
            0.0
        } else {
            self.null_count as f32 / self.count as f32
        }
    }
}

/// Statistics for every column, in table order
pub fn describe(table: &RecordTable) -> Vec<ColumnStats> {
    table.columns().iter().map(ColumnStats::from_column).collect()
}
