//! CSV ingestion
//!
//! Reads a user-supplied CSV file with a header row into a [`Table`]. No
//! schema is enforced beyond standard CSV: any column names are accepted and
//! cells stay as strings until a column is selected for analysis.

use std::io::Read;
use std::path::Path;

use super::table::{DataError, Table};

/// Read a CSV file with a header row and convert it to a [`Table`]
///
/// Headers are trimmed of surrounding whitespace. Rows whose field count
/// disagrees with the header are a parse error (the csv crate's strict
/// default), surfaced as [`DataError::Csv`].
///
/// # Example
///
/// ```rust,no_run
/// use ncaview::data::read_csv;
///
/// let table = read_csv("pk_data.csv").unwrap();
/// println!("{} rows, columns: {:?}", table.n_rows(), table.headers());
/// ```
pub fn read_csv(path: impl AsRef<Path>) -> Result<Table, DataError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path.as_ref())
        .map_err(|e| DataError::Csv(e.to_string()))?;
    read_table(reader)
}

/// Read CSV text from any reader (used by tests and in-memory sources)
pub fn read_csv_from_reader(source: impl Read) -> Result<Table, DataError> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_reader(source);
    read_table(reader)
}

fn read_table<R: Read>(mut reader: csv::Reader<R>) -> Result<Table, DataError> {
    let headers = reader
        .headers()
        .map_err(|e| DataError::Csv(e.to_string()))?
        .iter()
        .map(|h| h.trim().to_string())
        .collect::<Vec<_>>();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| DataError::Csv(e.to_string()))?;
        rows.push(record.iter().map(|c| c.trim().to_string()).collect());
    }

    Table::new(headers, rows)
}
