//! Derived features

use super::config::FamilySizeConfig;
use crate::table::{Column, RecordTable, Value};

/// Add `output = siblings_spouses + parents_children + 1`.
///
/// Returns false (table untouched) unless both inputs exist. A row with either
/// input missing or non-numeric gets a missing family size.
pub fn add_family_size(table: &mut RecordTable, config: &FamilySizeConfig) -> bool {
    let (Some(sib), Some(par)) = (
        table.column(&config.siblings_spouses),
        table.column(&config.parents_children),
    ) else {
        return false;
    };

    let values = sib
        .values()
        .iter()
        .zip(par.values())
        .map(|(s, p)| match (s, p) {
            (Value::Int(s), Value::Int(p)) => Value::Int(s + p + 1),
            _ => match (s.as_f64(), p.as_f64()) {
                (Some(s), Some(p)) => Value::float(s + p + 1.0),
                _ => Value::Missing,
            },
        })
        .collect();

    table.insert_column(Column::new(config.output.clone(), values));
    true
}
