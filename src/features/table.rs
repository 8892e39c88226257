//! Fixed-width numeric feature table

use ndarray::{Array2, ArrayView1, Axis};

use crate::table::{Column, RecordTable, Value};

/// Named numeric columns over an `Array2<f64>` (rows × features).
///
/// Missing numeric cells are carried as NaN.
#[derive(Debug, Clone, PartialEq)]
pub struct FeatureTable {
    columns: Vec<String>,
    values: Array2<f64>,
}

impl FeatureTable {
    /// # Panics
    ///
    /// Panics if the name count differs from the matrix width.
    pub fn new(columns: Vec<String>, values: Array2<f64>) -> Self {
        assert_eq!(
            columns.len(),
            values.ncols(),
            "feature names and matrix width must agree"
        );
        Self { columns, values }
    }

    /// Table with `n_rows` rows and no features
    pub fn empty(n_rows: usize) -> Self {
        Self {
            columns: Vec::new(),
            values: Array2::zeros((n_rows, 0)),
        }
    }

    /// Assemble from per-feature columns of equal length
    pub fn from_columns(n_rows: usize, columns: Vec<(String, Vec<f64>)>) -> Self {
        let (names, data): (Vec<String>, Vec<Vec<f64>>) = columns.into_iter().unzip();
        let values = Array2::from_shape_fn((n_rows, names.len()), |(i, j)| data[j][i]);
        Self::new(names, values)
    }

    pub fn shape(&self) -> (usize, usize) {
        self.values.dim()
    }

    pub fn n_rows(&self) -> usize {
        self.values.nrows()
    }

    pub fn n_cols(&self) -> usize {
        self.values.ncols()
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn column(&self, name: &str) -> Option<ArrayView1<'_, f64>> {
        self.position(name).map(|j| self.values.column(j))
    }

    /// First (column, row, value) holding NaN or an infinity, scanning rows in order
    pub fn first_non_finite(&self) -> Option<(&str, usize, f64)> {
        self.values
            .axis_iter(Axis(0))
            .enumerate()
            .find_map(|(i, row)| {
                row.iter()
                    .position(|v| !v.is_finite())
                    .map(|j| (self.columns[j].as_str(), i, row[j]))
            })
    }

    /// Convert back into a record table of float cells
    pub fn to_record_table(&self) -> RecordTable {
        let columns = self
            .columns
            .iter()
            .zip(self.values.axis_iter(Axis(1)))
            .map(|(name, col)| Column::new(name.clone(), col.iter().map(|&v| Value::float(v)).collect()))
            .collect();
        RecordTable::from_columns(columns)
    }
}
