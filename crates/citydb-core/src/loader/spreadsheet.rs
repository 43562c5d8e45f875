// crates/citydb-core/src/loader/spreadsheet.rs
use super::Table;
use crate::error::Result;
use calamine::{open_workbook_auto, Data, Reader};
use serde_json::Value;
use std::path::Path;

/// Reads the first worksheet; its first used row is the header.
///
/// Rows with no content are skipped, but the rows after them keep their
/// position in the sheet for error reporting.
pub(super) fn read_table(path: &Path) -> Result<Table> {
    let mut workbook = open_workbook_auto(path)?;

    let range = match workbook.worksheet_range_at(0) {
        Some(range) => range?,
        None => return Ok(Table::default()),
    };

    let mut rows = range.rows();
    let headers = rows
        .next()
        .map(|header| header.iter().map(header_text).collect())
        .unwrap_or_default();
    let (row_numbers, rows): (Vec<usize>, Vec<Vec<Value>>) = rows
        .enumerate()
        .filter(|(_, row)| !row.iter().all(is_blank))
        .map(|(i, row)| (i + 1, row.iter().map(cell_value).collect()))
        .unzip();

    Ok(Table::new(headers, rows).with_row_numbers(row_numbers))
}

fn is_blank(cell: &Data) -> bool {
    match cell {
        Data::Empty => true,
        Data::String(s) => s.trim().is_empty(),
        _ => false,
    }
}

fn header_text(cell: &Data) -> String {
    match cell {
        Data::String(s) => s.clone(),
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

fn cell_value(cell: &Data) -> Value {
    match cell {
        Data::Empty => Value::Null,
        Data::String(s) => Value::String(s.clone()),
        Data::Float(f) => Value::from(*f),
        Data::Int(i) => Value::from(*i),
        Data::Bool(b) => Value::Bool(*b),
        // Dates, durations and error cells are passed on as text and fail
        // numeric conversion later.
        other => Value::String(other.to_string()),
    }
}
