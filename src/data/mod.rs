//! Dataset ingestion and column selection

pub mod parser;
pub mod table;

pub use parser::{read_csv, read_csv_from_reader};
pub use table::{DataError, Series, Table};
