//! One-hot expansion of categorical columns

use crate::table::{Column, ColumnKind, RecordTable};

use super::table::FeatureTable;

/// Indicator columns for one categorical column.
///
/// Levels sort byte-lexicographically; with `drop_first` the first level gets
/// no indicator. A missing cell is zero in every indicator.
pub fn one_hot(column: &Column, drop_first: bool) -> Vec<(String, Vec<f64>)> {
    let levels = column.levels();
    let skip = usize::from(drop_first && !levels.is_empty());

    levels
        .iter()
        .skip(skip)
        .map(|level| {
            let indicator = column
                .values()
                .iter()
                .map(|v| {
                    if !v.is_missing() && v.to_string() == *level {
                        1.0
                    } else {
                        0.0
                    }
                })
                .collect();
            (format!("{}_{}", column.name(), level), indicator)
        })
        .collect()
}

/// Encode every column of `table`: numeric columns pass through first, in
/// table order, followed by each categorical column's indicators.
pub fn encode(table: &RecordTable, drop_first: bool) -> FeatureTable {
    let n_rows = table.n_rows();
    let mut features: Vec<(String, Vec<f64>)> = Vec::new();
    let mut indicators: Vec<(String, Vec<f64>)> = Vec::new();

    for column in table.columns() {
        match column.kind() {
            ColumnKind::Numeric => {
                let values = column
                    .values()
                    .iter()
                    .map(|v| v.as_f64().unwrap_or(f64::NAN))
                    .collect();
                features.push((column.name().to_string(), values));
            }
            ColumnKind::Categorical => indicators.extend(one_hot(column, drop_first)),
        }
    }
    features.extend(indicators);

    if features.is_empty() {
        return FeatureTable::empty(n_rows);
    }
    FeatureTable::from_columns(n_rows, features)
}
