//! Configuration options for the preprocessing pipeline.
//!
//! Every stage receives its thresholds and column names through
//! [`PipelineOptions`] rather than reading literals, so stages can be run
//! and tested in isolation with other settings.

use serde::{Deserialize, Serialize};

use crate::error::{ModelError, Result};

/// Input file read when no path is given.
pub const DEFAULT_INPUT_PATH: &str = "supermarket_dataset.csv";

/// Output file written when no path is given.
pub const DEFAULT_OUTPUT_PATH: &str = "preprocessed_supermarket_dataset.csv";

/// Rows with an amount above this value are dropped by the cleaner.
pub const DEFAULT_MAX_AMOUNT: f64 = 1000.0;

/// Numeric column that is filtered and bucketed.
pub const AMOUNT_COLUMN: &str = "Transaction_Amount";

/// Nominal columns replaced by one-hot indicator columns.
pub const CATEGORICAL_COLUMNS: [&str; 2] = ["Product_Category", "Customer_Segment"];

/// Derived ordinal label column.
pub const FREQUENCY_COLUMN: &str = "Buying_Frequency";

/// Upper edges of the right-closed `Low` and `Medium` bins.
///
/// `(0, low_upper]` is `Low`, `(low_upper, medium_upper]` is `Medium` and
/// anything above `medium_upper` is `High`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BucketBounds {
    pub low_upper: f64,
    pub medium_upper: f64,
}

impl Default for BucketBounds {
    fn default() -> Self {
        Self {
            low_upper: 5.0,
            medium_upper: 10.0,
        }
    }
}

impl BucketBounds {
    pub fn new(low_upper: f64, medium_upper: f64) -> Result<Self> {
        let bounds = Self {
            low_upper,
            medium_upper,
        };
        bounds.validate()?;
        Ok(bounds)
    }

    pub fn validate(&self) -> Result<()> {
        let ok = self.low_upper.is_finite()
            && self.medium_upper.is_finite()
            && self.low_upper >= 0.0
            && self.low_upper < self.medium_upper;
        if ok {
            Ok(())
        } else {
            Err(ModelError::InvalidBucketBounds {
                low: self.low_upper,
                medium: self.medium_upper,
            })
        }
    }
}

/// Options controlling the preprocessing pipeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOptions {
    /// Largest amount kept by the cleaner (inclusive).
    pub max_amount: f64,
    /// Bin edges for the buying frequency label.
    pub bucket_bounds: BucketBounds,
    /// Numeric amount column.
    pub amount_column: String,
    /// Columns to one-hot encode, in output order.
    pub categorical_columns: Vec<String>,
    /// Name of the derived label column.
    pub frequency_column: String,
}

impl Default for PipelineOptions {
    fn default() -> Self {
        Self {
            max_amount: DEFAULT_MAX_AMOUNT,
            bucket_bounds: BucketBounds::default(),
            amount_column: AMOUNT_COLUMN.to_string(),
            categorical_columns: CATEGORICAL_COLUMNS.iter().map(ToString::to_string).collect(),
            frequency_column: FREQUENCY_COLUMN.to_string(),
        }
    }
}

impl PipelineOptions {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_amount(mut self, max_amount: f64) -> Self {
        self.max_amount = max_amount;
        self
    }

    #[must_use]
    pub fn with_bucket_bounds(mut self, bounds: BucketBounds) -> Self {
        self.bucket_bounds = bounds;
        self
    }

    /// Columns the input file must provide.
    pub fn required_columns(&self) -> Vec<String> {
        let mut columns = Vec::with_capacity(self.categorical_columns.len() + 1);
        columns.push(self.amount_column.clone());
        columns.extend(self.categorical_columns.iter().cloned());
        columns
    }

    pub fn validate(&self) -> Result<()> {
        if !self.max_amount.is_finite() {
            return Err(ModelError::InvalidThreshold(self.max_amount));
        }
        self.bucket_bounds.validate()
    }
}
