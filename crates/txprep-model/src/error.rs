use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum ModelError {
    #[error("amount threshold must be finite, got {0}")]
    InvalidThreshold(f64),
    #[error("bucket bounds must be finite and satisfy 0 <= low ({low}) < medium ({medium})")]
    InvalidBucketBounds { low: f64, medium: f64 },
    #[error("unknown buying frequency label: {0}")]
    UnknownLabel(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
