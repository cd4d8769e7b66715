//! In-memory tabular dataset and column selection
//!
//! A [`Table`] holds the parsed CSV as strings; numeric coercion happens only
//! when a column is selected for analysis, so a text column elsewhere in the
//! file never blocks analysis of the numeric ones.

use thiserror::Error;

/// Errors from CSV ingestion and column selection
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DataError {
    /// Error encountered while reading CSV data
    #[error("CSV error: {0}")]
    Csv(String),

    /// The file parsed but contains no header or no data rows
    #[error("CSV file contains no data")]
    EmptyTable,

    /// A selected column name does not exist in the header row
    #[error("Unknown column '{name}'; available columns: {available}")]
    UnknownColumn { name: String, available: String },

    /// A cell in a selected column could not be parsed as a number
    #[error("Non-numeric value '{value}' in column '{column}' at data row {row}")]
    NonNumericCell {
        column: String,
        row: usize,
        value: String,
    },
}

/// A parsed CSV dataset: ordered header names plus rows of string cells
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<String>>,
}

/// Two parallel numeric sequences selected from a [`Table`]
///
/// This is the hand-off type the chart layer consumes unchanged: the same
/// sequences the NCA core receives are the ones that get plotted.
#[derive(Debug, Clone, PartialEq)]
pub struct Series {
    /// Time values, in file row order
    pub time: Vec<f64>,
    /// Concentration values, parallel to `time`
    pub concentration: Vec<f64>,
    /// Header name the time values came from
    pub time_label: String,
    /// Header name the concentration values came from
    pub concentration_label: String,
}

impl Series {
    /// The series as `(time, concentration)` points, for plotting
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.time
            .iter()
            .copied()
            .zip(self.concentration.iter().copied())
            .collect()
    }

    /// Number of observations
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True when the series holds no observations
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }
}

impl Table {
    /// Build a table from a header row and data rows
    ///
    /// Short rows are padded with empty cells so every row has one cell per
    /// header; the strict length check happens at parse time.
    pub(crate) fn new(headers: Vec<String>, rows: Vec<Vec<String>>) -> Result<Self, DataError> {
        if headers.is_empty() || rows.is_empty() {
            return Err(DataError::EmptyTable);
        }
        Ok(Self { headers, rows })
    }

    /// Column names, in file order
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    /// Number of data rows (header excluded)
    pub fn n_rows(&self) -> usize {
        self.rows.len()
    }

    /// Index of a named column; duplicates resolve to the first occurrence
    fn column_index(&self, name: &str) -> Result<usize, DataError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::UnknownColumn {
                name: name.to_string(),
                available: self.headers.join(", "),
            })
    }

    /// Parse every cell of a named column as `f64`
    ///
    /// # Errors
    ///
    /// [`DataError::NonNumericCell`] names the offending cell (1-based data
    /// row) so the failure is visible rather than a silent wrong answer.
    pub fn numeric_column(&self, name: &str) -> Result<Vec<f64>, DataError> {
        let idx = self.column_index(name)?;
        self.rows
            .iter()
            .enumerate()
            .map(|(row, cells)| {
                let cell = cells.get(idx).map(String::as_str).unwrap_or("");
                cell.trim()
                    .parse::<f64>()
                    .map_err(|_| DataError::NonNumericCell {
                        column: name.to_string(),
                        row: row + 1,
                        value: cell.to_string(),
                    })
            })
            .collect()
    }

    /// Select a time column and a concentration column as a [`Series`]
    pub fn series(&self, time_column: &str, concentration_column: &str) -> Result<Series, DataError> {
        let time = self.numeric_column(time_column)?;
        let concentration = self.numeric_column(concentration_column)?;
        Ok(Series {
            time,
            concentration,
            time_label: time_column.to_string(),
            concentration_label: concentration_column.to_string(),
        })
    }

    /// Render the first `n` rows as aligned text columns, header included
    pub fn preview(&self, n: usize) -> String {
        let shown = &self.rows[..self.rows.len().min(n)];

        // Column widths over header + shown cells
        let widths: Vec<usize> = self
            .headers
            .iter()
            .enumerate()
            .map(|(i, h)| {
                shown
                    .iter()
                    .map(|r| r.get(i).map(String::len).unwrap_or(0))
                    .chain(std::iter::once(h.len()))
                    .max()
                    .unwrap_or(0)
            })
            .collect();

        let format_row = |cells: &[String]| -> String {
            widths
                .iter()
                .enumerate()
                .map(|(i, &w)| {
                    let cell = cells.get(i).map(String::as_str).unwrap_or("");
                    format!("{cell:>w$}")
                })
                .collect::<Vec<_>>()
                .join("  ")
        };

        let mut out = format_row(&self.headers);
        for row in shown {
            out.push('\n');
            out.push_str(&format_row(row));
        }
        out
    }
}
