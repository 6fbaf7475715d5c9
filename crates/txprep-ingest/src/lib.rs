//! Loader stage: reads the delimited transaction file into a Polars `DataFrame`.
//!
//! A path that does not resolve to a file is reported as
//! [`IngestError::InputNotFound`], which callers treat as a clean halt.
//! Every other failure is fatal.

pub mod error;
pub mod reader;

pub use error::{IngestError, Result};
pub use reader::{MISSING_VALUE_TOKENS, load_table, read_csv_schema, read_table};
