pub mod error;
pub mod frequency;
pub mod options;
pub mod report;

pub use error::{ModelError, Result};
pub use frequency::BuyingFrequency;
pub use options::{
    AMOUNT_COLUMN, BucketBounds, CATEGORICAL_COLUMNS, DEFAULT_INPUT_PATH, DEFAULT_MAX_AMOUNT,
    DEFAULT_OUTPUT_PATH, FREQUENCY_COLUMN, PipelineOptions,
};
pub use report::{BucketCounts, CleanStats, EncodeStats, PipelineReport};
