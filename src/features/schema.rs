//! Canonical feature schema and inference-time alignment

use ndarray::Array2;
use serde::{Deserialize, Serialize};

use super::table::FeatureTable;

/// Ordered feature columns fixed by the training-time transform
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeatureSchema {
    columns: Vec<String>,
}

/// Columns touched by an alignment
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlignReport {
    /// Canonical columns absent from the input, zero-filled
    pub added: Vec<String>,
    /// Input columns outside the schema, discarded
    pub dropped: Vec<String>,
}

impl FeatureSchema {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }

    /// Capture the schema of a training feature table
    pub fn capture(table: &FeatureTable) -> Self {
        Self::new(table.columns().to_vec())
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Whether `table` already exposes exactly this schema, in order
    pub fn matches(&self, table: &FeatureTable) -> bool {
        self.columns == table.columns()
    }

    /// Reshape `table` to exactly the canonical columns in canonical order.
    ///
    /// Absent columns are inserted as zeros; extra columns are dropped.
    pub fn align(&self, table: &FeatureTable) -> (FeatureTable, AlignReport) {
        let sources: Vec<Option<usize>> =
            self.columns.iter().map(|c| table.position(c)).collect();

        let report = AlignReport {
            added: self
                .columns
                .iter()
                .zip(&sources)
                .filter(|(_, src)| src.is_none())
                .map(|(c, _)| c.clone())
                .collect(),
            dropped: table
                .columns()
                .iter()
                .filter(|c| !self.columns.contains(c))
                .cloned()
                .collect(),
        };

        let input = table.values();
        let values = Array2::from_shape_fn((table.n_rows(), self.columns.len()), |(i, j)| {
            sources[j].map_or(0.0, |src| input[[i, src]])
        });

        (FeatureTable::new(self.columns.clone(), values), report)
    }
}
