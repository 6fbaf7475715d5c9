//! Error types for transaction data ingestion.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading the input file.
#[derive(Debug, Error)]
pub enum IngestError {
    /// Input path does not resolve to a readable file.
    #[error("input file not found: {path}")]
    InputNotFound { path: PathBuf },

    /// Failed to read the header row.
    #[error("failed to read header of {path}: {source}")]
    HeaderRead {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    /// File has no header row at all.
    #[error("CSV file is empty: {path}")]
    EmptyCsv { path: PathBuf },

    /// A column the pipeline relies on is absent from the header.
    #[error("required column '{column}' not found in {path}")]
    MissingColumn { column: String, path: PathBuf },

    /// Failed to parse CSV with Polars.
    #[error("failed to parse CSV {path}: {message}")]
    CsvParse { path: PathBuf, message: String },
}

impl IngestError {
    /// True for the one recoverable condition: the input file is absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, IngestError::InputNotFound { .. })
    }
}

pub type Result<T> = std::result::Result<T, IngestError>;
