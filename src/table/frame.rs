//! Column-major record table

use std::fmt::Write as _;

use super::column::Column;

/// Ordered collection of equal-length named columns
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordTable {
    columns: Vec<Column>,
    n_rows: usize,
}

impl RecordTable {
    /// Build a table from columns.
    ///
    /// # Panics
    ///
    /// Panics if the columns differ in length or a name repeats.
    pub fn from_columns(columns: Vec<Column>) -> Self {
        let mut table = Self::default();
        for column in columns {
            assert!(
                !table.contains(column.name()),
                "duplicate column '{}'",
                column.name()
            );
            table.insert_column(column);
        }
        table
    }

    /// (rows, columns)
    pub fn shape(&self) -> (usize, usize) {
        (self.n_rows, self.columns.len())
    }

    pub fn n_rows(&self) -> usize {
        self.n_rows
    }

    pub fn n_cols(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(Column::name).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.position(name).is_some()
    }

    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name() == name)
    }

    pub fn column_mut(&mut self, name: &str) -> Option<&mut Column> {
        self.columns.iter_mut().find(|c| c.name() == name)
    }

    fn position(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c.name() == name)
    }

    /// Insert a column, replacing a same-named one in place or appending.
    ///
    /// A table without columns adopts the column's length; dropping the last
    /// column keeps the row count.
    ///
    /// # Panics
    ///
    /// Panics if the column length differs from the table's row count.
    pub fn insert_column(&mut self, column: Column) {
        if self.columns.is_empty() {
            self.n_rows = column.len();
        }
        assert_eq!(
            column.len(),
            self.n_rows,
            "column '{}' has {} rows, table has {}",
            column.name(),
            column.len(),
            self.n_rows
        );
        match self.position(column.name()) {
            Some(idx) => self.columns[idx] = column,
            None => self.columns.push(column),
        }
    }

    pub fn drop_column(&mut self, name: &str) -> Option<Column> {
        let idx = self.position(name)?;
        Some(self.columns.remove(idx))
    }

    /// Render the first `n` rows as an aligned text table
    pub fn preview(&self, n: usize) -> String {
        let shown = n.min(self.n_rows);
        let mut cells: Vec<Vec<String>> = Vec::with_capacity(shown + 1);
        cells.push(self.columns.iter().map(|c| c.name().to_string()).collect());
        for r in 0..shown {
            cells.push(
                self.columns
                    .iter()
                    .map(|c| c.values()[r].to_string())
                    .collect(),
            );
        }

        let widths: Vec<usize> = (0..self.columns.len())
            .map(|j| cells.iter().map(|row| row[j].len()).max().unwrap_or(0))
            .collect();

        let mut out = String::new();
        for row in &cells {
            let line: Vec<String> = row
                .iter()
                .zip(&widths)
                .map(|(cell, w)| format!("{cell:>w$}"))
                .collect();
            let _ = writeln!(out, "{}", line.join(" "));
        }
        out
    }
}
