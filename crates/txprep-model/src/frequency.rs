//! Ordinal buying frequency labels derived from the transaction amount.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ModelError;
use crate::options::BucketBounds;

/// Label assigned to a row by the bucketizer.
///
/// Amounts at or below zero, NaN or null fall outside every bin and get
/// [`BuyingFrequency::Unclassified`] instead of an empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum BuyingFrequency {
    Low,
    Medium,
    High,
    Unclassified,
}

impl BuyingFrequency {
    pub const ALL: [BuyingFrequency; 4] = [
        BuyingFrequency::Low,
        BuyingFrequency::Medium,
        BuyingFrequency::High,
        BuyingFrequency::Unclassified,
    ];

    /// Classify an amount against right-closed bins.
    pub fn classify(amount: Option<f64>, bounds: &BucketBounds) -> Self {
        match amount {
            Some(v) if v.is_nan() => BuyingFrequency::Unclassified,
            Some(v) if v <= 0.0 => BuyingFrequency::Unclassified,
            Some(v) if v <= bounds.low_upper => BuyingFrequency::Low,
            Some(v) if v <= bounds.medium_upper => BuyingFrequency::Medium,
            Some(_) => BuyingFrequency::High,
            None => BuyingFrequency::Unclassified,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            BuyingFrequency::Low => "Low",
            BuyingFrequency::Medium => "Medium",
            BuyingFrequency::High => "High",
            BuyingFrequency::Unclassified => "Unclassified",
        }
    }
}

impl fmt::Display for BuyingFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for BuyingFrequency {
    type Err = ModelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "LOW" => Ok(BuyingFrequency::Low),
            "MEDIUM" => Ok(BuyingFrequency::Medium),
            "HIGH" => Ok(BuyingFrequency::High),
            "UNCLASSIFIED" => Ok(BuyingFrequency::Unclassified),
            _ => Err(ModelError::UnknownLabel(s.to_string())),
        }
    }
}
