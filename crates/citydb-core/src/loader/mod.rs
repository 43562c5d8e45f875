// crates/citydb-core/src/loader/mod.rs

//! # Data Loader
//!
//! Handles the physical layer (files, formats) and hands the repository a
//! format-neutral [`Table`]: a header row plus data rows of JSON values.
//! Empty cells are `null`.

use crate::error::{CityError, Result};
use crate::model::{CityMapping, REQUIRED_COLUMNS};
use serde_json::Value;
use std::path::Path;

#[cfg(feature = "csv")]
mod delimited;
#[cfg(feature = "xlsx")]
mod spreadsheet;

#[cfg(feature = "csv")]
pub use delimited::read_csv;

/// Extensions handed to the spreadsheet reader.
pub const SPREADSHEET_EXTENSIONS: [&str; 5] = ["xlsx", "xlsm", "xlsb", "xls", "ods"];

/// A rectangular import source. Rows may be shorter than the header; absent
/// trailing cells read as `null`.
///
/// Readers that skip rows record where each kept row came from, so errors
/// still point at the row the user sees in the source file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Table {
    headers: Vec<String>,
    rows: Vec<Vec<Value>>,
    row_numbers: Vec<usize>,
}

impl Table {
    pub fn new(headers: Vec<String>, rows: Vec<Vec<Value>>) -> Self {
        Table {
            headers,
            rows,
            row_numbers: Vec::new(),
        }
    }

    /// Sets the 1-based source row of each data row.
    pub fn with_row_numbers(mut self, row_numbers: Vec<usize>) -> Self {
        debug_assert_eq!(row_numbers.len(), self.rows.len());
        self.row_numbers = row_numbers;
        self
    }

    /// 1-based source row (header excluded) of the data row at `index`.
    pub fn row_number(&self, index: usize) -> usize {
        self.row_numbers.get(index).copied().unwrap_or(index + 1)
    }

    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Number of data rows (the header is not counted).
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Positions of `nome`, `dimensao`, `populacao` in the header.
    ///
    /// Column names are matched exactly (case-sensitive). When a name
    /// appears twice the first column wins.
    pub fn require_columns(&self) -> Result<[usize; 3]> {
        let mut found = [None; 3];
        let mut missing = Vec::new();
        for (slot, wanted) in found.iter_mut().zip(REQUIRED_COLUMNS) {
            *slot = self.headers.iter().position(|h| h == wanted);
            if slot.is_none() {
                missing.push(wanted.to_string());
            }
        }
        match found {
            [Some(name), Some(area), Some(population)] => Ok([name, area, population]),
            _ => Err(CityError::Schema { missing }),
        }
    }

    /// One `{nome, dimensao, populacao}` mapping per data row; other columns
    /// are dropped.
    pub fn records(&self) -> Result<Vec<CityMapping>> {
        let columns = self.require_columns()?;
        Ok(self
            .rows
            .iter()
            .map(|row| {
                REQUIRED_COLUMNS
                    .iter()
                    .zip(columns)
                    .map(|(key, idx)| (key.to_string(), row.get(idx).cloned().unwrap_or(Value::Null)))
                    .collect()
            })
            .collect())
    }
}

/// Reads an import source, choosing the reader from the file extension.
pub fn open_table(path: impl AsRef<Path>) -> Result<Table> {
    let path = path.as_ref();
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    tracing::debug!(path = %path.display(), format = %ext, "opening import source");

    match ext.as_str() {
        #[cfg(feature = "xlsx")]
        e if SPREADSHEET_EXTENSIONS.contains(&e) => spreadsheet::read_table(path),
        #[cfg(feature = "csv")]
        "csv" => delimited::read_table(path),
        _ => Err(CityError::UnsupportedFormat(path.display().to_string())),
    }
}
