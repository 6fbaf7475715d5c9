//! Transformation stages for the transaction table.
//!
//! Each stage borrows a `DataFrame` and returns a new one, so the caller
//! owns exactly one table between stages:
//!
//! - **clean**: drop incomplete rows, then rows above the amount threshold
//! - **encode**: replace nominal columns with one-hot indicator columns
//! - **bucket**: derive the ordinal buying frequency label
//! - **pipeline**: run the three stages in order

pub mod bucket;
pub mod clean;
pub mod encode;
pub mod error;
pub mod frame;
pub mod pipeline;

pub use bucket::bucketize;
pub use clean::{clean, drop_incomplete_rows, filter_amount};
pub use encode::{
    EncoderMapping, FittedOneHotEncoder, IndicatorColumn, OneHotEncoder, indicator_name,
    one_hot_encode,
};
pub use error::{Result, TransformError};
pub use pipeline::{Preprocessed, preprocess};
