//! CSV source and sink

use std::path::Path;

use tracing::debug;

use super::column::Column;
use super::frame::RecordTable;
use super::value::Value;
use crate::error::{Error, Result};

/// Read a comma-delimited UTF-8 file with a header row.
///
/// An absent file is reported as [`Error::SourceNotFound`] before any read.
pub fn read_table(path: impl AsRef<Path>) -> Result<RecordTable> {
    let path = path.as_ref();
    if !path.is_file() {
        return Err(Error::SourceNotFound {
            path: path.to_path_buf(),
        });
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|e| Error::csv(path, e))?;

    let headers = dedupe_headers(
        reader
            .headers()
            .map_err(|e| Error::csv(path, e))?
            .iter(),
    );

    let mut cells: Vec<Vec<Value>> = vec![Vec::new(); headers.len()];
    for record in reader.records() {
        let record = record.map_err(|e| Error::csv(path, e))?;
        for (j, raw) in record.iter().enumerate() {
            cells[j].push(Value::parse(raw));
        }
    }

    let columns = headers
        .into_iter()
        .zip(cells)
        .map(|(name, values)| Column::new(name, values))
        .collect();
    let table = RecordTable::from_columns(columns);
    debug!(path = %path.display(), rows = table.n_rows(), cols = table.n_cols(), "read csv");
    Ok(table)
}

/// Repeated header names get `.1`, `.2`, ... suffixes so every column stays addressable.
fn dedupe_headers<'a>(raw: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for name in raw {
        let mut candidate = name.to_string();
        let mut n = 1;
        while names.contains(&candidate) {
            candidate = format!("{name}.{n}");
            n += 1;
        }
        names.push(candidate);
    }
    names
}

/// Write one integer label per row under a single header.
pub fn write_predictions(path: impl AsRef<Path>, column: &str, labels: &[i64]) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path).map_err(|e| Error::csv(path, e))?;
    writer
        .write_record([column])
        .map_err(|e| Error::csv(path, e))?;
    for label in labels {
        writer
            .write_record([label.to_string()])
            .map_err(|e| Error::csv(path, e))?;
    }
    writer
        .flush()
        .map_err(|e| Error::io(format!("flushing {}", path.display()), e))?;
    Ok(())
}
