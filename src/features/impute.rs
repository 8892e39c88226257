//! Missing-value imputation

use crate::table::{RecordTable, Value};

/// How a column's gaps are filled
#[derive(Debug, Clone, PartialEq)]
pub enum ImputeStrategy {
    /// Median of the column in the table being transformed
    Median,
    /// A fixed literal
    Constant(Value),
}

impl std::fmt::Display for ImputeStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Median => write!(f, "median"),
            Self::Constant(v) => write!(f, "constant({v})"),
        }
    }
}

/// Fill rule for one column
#[derive(Debug, Clone, PartialEq)]
pub struct ImputeRule {
    pub column: String,
    pub strategy: ImputeStrategy,
}

/// What a rule did to a table
#[derive(Debug, Clone, PartialEq)]
pub struct ImputeOutcome {
    pub column: String,
    pub strategy: ImputeStrategy,
    /// The value written into the gaps (`Missing` when no median exists)
    pub fill: Value,
    /// Number of cells filled
    pub filled: usize,
}

impl ImputeRule {
    pub fn median(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            strategy: ImputeStrategy::Median,
        }
    }

    pub fn constant(column: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            column: column.into(),
            strategy: ImputeStrategy::Constant(value.into()),
        }
    }

    /// Apply to `table`; `None` when the column is absent.
    ///
    /// Medians come from `table` itself on every call.
    pub fn apply(&self, table: &mut RecordTable) -> Option<ImputeOutcome> {
        let column = table.column_mut(&self.column)?;
        let fill = match &self.strategy {
            ImputeStrategy::Median => column.median().map_or(Value::Missing, Value::Float),
            ImputeStrategy::Constant(v) => v.clone(),
        };
        let filled = if fill.is_missing() {
            0
        } else {
            column.fill_missing(&fill)
        };
        Some(ImputeOutcome {
            column: self.column.clone(),
            strategy: self.strategy.clone(),
            fill,
            filled,
        })
    }
}
