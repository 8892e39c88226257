//! Label extraction from the training table

use std::path::Path;

use crate::error::{Error, Result};
use crate::table::{RecordTable, Value};

/// Remove `column` from `table` and cast its cells to integer classes.
///
/// Integral cells pass through, floats truncate toward zero, numeric text is
/// parsed. A blank or non-numeric cell is an [`Error::InvalidLabel`].
pub fn take_labels(table: &mut RecordTable, column: &str, source: &Path) -> Result<Vec<i64>> {
    let labels = table.drop_column(column).ok_or_else(|| Error::Schema {
        column: column.to_string(),
        path: source.to_path_buf(),
    })?;

    labels
        .values()
        .iter()
        .enumerate()
        .map(|(row, value)| cast_label(value).ok_or_else(|| invalid(row, value)))
        .collect()
}

fn cast_label(value: &Value) -> Option<i64> {
    match value {
        Value::Int(i) => Some(*i),
        Value::Float(f) if f.is_finite() => Some(f.trunc() as i64),
        Value::Str(s) => s.trim().parse::<i64>().ok(),
        Value::Float(_) | Value::Missing => None,
    }
}

fn invalid(row: usize, value: &Value) -> Error {
    Error::InvalidLabel {
        row,
        value: value.to_string(),
    }
}
