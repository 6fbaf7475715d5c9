//! Error types for the transformation stages.

use polars::prelude::PolarsError;
use thiserror::Error;
use txprep_model::ModelError;

#[derive(Debug, Error)]
pub enum TransformError {
    #[error("column '{column}' not found")]
    ColumnNotFound { column: String },

    #[error("column '{column}' is not numeric: {message}")]
    NonNumericColumn { column: String, message: String },

    #[error("column '{column}' already exists")]
    DuplicateColumn { column: String },

    #[error("missing value in categorical column '{column}' at row {row}")]
    MissingCategory { column: String, row: usize },

    #[error("value '{value}' in column '{column}' was not seen when the encoder was fitted")]
    UnknownCategory { column: String, value: String },

    #[error("invalid pipeline options: {0}")]
    Options(#[from] ModelError),

    #[error("DataFrame operation failed: {0}")]
    Polars(#[from] PolarsError),
}

pub type Result<T> = std::result::Result<T, TransformError>;
