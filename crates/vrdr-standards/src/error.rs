//! Error types for reference data loading.

use thiserror::Error;

/// Errors that can occur when loading reference data.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum StandardsError {
    /// Failed to read or parse a CSV file.
    #[error("Failed to read CSV {file}: {source}")]
    CsvRead {
        file: String,
        #[source]
        source: csv::Error,
    },

    /// Invalid value in a CSV field.
    #[error("Invalid {field} value '{value}' in {file}")]
    InvalidValue {
        field: &'static str,
        value: String,
        file: String,
    },
}

/// Result type for reference data loading.
pub type Result<T> = std::result::Result<T, StandardsError>;
