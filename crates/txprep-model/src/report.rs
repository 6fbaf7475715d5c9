//! Per-stage statistics and the serialisable run report.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::frequency::BuyingFrequency;
use crate::options::PipelineOptions;

/// Row accounting for the cleaning stage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CleanStats {
    pub rows_in: usize,
    pub dropped_incomplete: usize,
    pub dropped_over_threshold: usize,
    pub rows_out: usize,
}

/// Columns consumed and produced by the one-hot encoder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct EncodeStats {
    pub source_columns: Vec<String>,
    pub indicator_columns: Vec<String>,
}

/// Number of rows per buying frequency label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BucketCounts {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
    pub unclassified: usize,
}

impl BucketCounts {
    pub fn record(&mut self, label: BuyingFrequency) {
        match label {
            BuyingFrequency::Low => self.low += 1,
            BuyingFrequency::Medium => self.medium += 1,
            BuyingFrequency::High => self.high += 1,
            BuyingFrequency::Unclassified => self.unclassified += 1,
        }
    }

    pub fn get(&self, label: BuyingFrequency) -> usize {
        match label {
            BuyingFrequency::Low => self.low,
            BuyingFrequency::Medium => self.medium,
            BuyingFrequency::High => self.high,
            BuyingFrequency::Unclassified => self.unclassified,
        }
    }

    pub fn total(&self) -> usize {
        self.low + self.medium + self.high + self.unclassified
    }
}

/// Summary of one pipeline run, written as JSON on request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineReport {
    pub input_path: PathBuf,
    /// `None` for dry runs.
    pub output_path: Option<PathBuf>,
    pub options: PipelineOptions,
    pub clean: CleanStats,
    pub encode: EncodeStats,
    pub buckets: BucketCounts,
    /// Hex SHA-256 of the written CSV bytes.
    pub output_sha256: Option<String>,
}
