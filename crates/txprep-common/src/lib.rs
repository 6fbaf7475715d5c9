//! Shared utilities for the transaction preprocessing crates.
//!
//! This crate provides the Polars value helpers used by every pipeline
//! stage to render cells as text and to spot missing values.

pub mod polars;

pub use polars::{any_to_category, any_to_string, format_numeric, is_missing};
