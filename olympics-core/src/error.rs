//! Error type shared by the parsing and filter layers.

use thiserror::Error;

/// Errors raised while reading the source tables or translating filter values.
#[derive(Debug, Error)]
pub enum OlympicsError {
    /// A required column is absent from a table header.
    #[error("schema error: table '{table}' is missing required column '{column}'")]
    Schema {
        table: &'static str,
        column: &'static str,
    },

    /// A required field could not be parsed.
    #[error("invalid value in table '{table}' at line {line}, column '{column}': {value:?}")]
    InvalidValue {
        table: &'static str,
        line: u64,
        column: &'static str,
        value: String,
    },

    /// A filter value is neither the "Overall" sentinel nor a valid selection.
    #[error("invalid selection: {value:?}")]
    InvalidSelection { value: String },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, OlympicsError>;
