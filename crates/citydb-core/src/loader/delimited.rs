// crates/citydb-core/src/loader/delimited.rs
use super::Table;
use crate::error::Result;
use serde_json::Value;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

pub(super) fn read_table(path: &Path) -> Result<Table> {
    let file = File::open(path)?;
    read_csv(BufReader::new(file))
}

/// Reads comma-separated text with a header row.
///
/// Every field stays text; blank fields become `null`. Rows may have fewer
/// fields than the header.
pub fn read_csv<R: Read>(reader: R) -> Result<Table> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.trim().is_empty() {
                        Value::Null
                    } else {
                        Value::String(field.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(Table::new(headers, rows))
}
