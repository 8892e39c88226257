//! Record tables: the raw, row-ordered input the feature transform consumes
//!
//! - `value`: cell values and NA-token parsing
//! - `column`: named columns, kind detection, median and fill
//! - `frame`: the column-major `RecordTable`
//! - `stats`: per-column summaries used by `inspect`
//! - `csv_io`: CSV source and prediction sink

mod column;
mod csv_io;
mod frame;
mod stats;
mod value;


pub use column::{Column, ColumnKind};
pub use csv_io::{read_table, write_predictions};
pub use frame::RecordTable;
pub use stats::{describe, ColumnStats};
pub use value::{Value, NA_TOKENS};
