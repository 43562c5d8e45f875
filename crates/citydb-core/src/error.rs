// crates/citydb-core/src/error.rs
use thiserror::Error;

/// Everything that can go wrong while building, querying or importing cities.
///
/// `NotFound` is an ordinary negative answer rather than a failure; callers
/// are expected to match on it explicitly.
#[derive(Error, Debug)]
pub enum CityError {
    #[error("invalid {field} {value:?}{}: {reason}", row_suffix(.row))]
    TypeConversion {
        field: &'static str,
        value: String,
        /// 1-based data row when the value came from an import.
        row: Option<usize>,
        reason: String,
    },

    #[error("the source needs the columns nome, dimensao, populacao; missing: {}", .missing.join(", "))]
    Schema { missing: Vec<String> },

    #[error("city not found: {0}")]
    NotFound(String),

    #[error("{field}: {reason}")]
    Validation { field: &'static str, reason: String },

    #[error("theme {0} not found")]
    ThemeNotFound(String),

    #[error("unsupported import format: {0}")]
    UnsupportedFormat(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[cfg(feature = "csv")]
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[cfg(feature = "xlsx")]
    #[error("spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
}

impl CityError {
    pub(crate) fn conversion(
        field: &'static str,
        value: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        CityError::TypeConversion {
            field,
            value: value.into(),
            row: None,
            reason: reason.into(),
        }
    }

    /// Attaches the data row a conversion failure came from.
    pub(crate) fn at_row(self, line: usize) -> Self {
        match self {
            CityError::TypeConversion {
                field,
                value,
                reason,
                ..
            } => CityError::TypeConversion {
                field,
                value,
                row: Some(line),
                reason,
            },
            other => other,
        }
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, CityError::NotFound(_))
    }
}

fn row_suffix(row: &Option<usize>) -> String {
    match row {
        Some(r) => format!(" in row {r}"),
        None => String::new(),
    }
}

pub type Result<T> = std::result::Result<T, CityError>;
