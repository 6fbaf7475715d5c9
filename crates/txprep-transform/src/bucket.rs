//! Bucketing stage: derive the ordinal buying frequency label.

use polars::prelude::{DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use txprep_model::{BucketBounds, BucketCounts, BuyingFrequency};

use crate::error::{Result, TransformError};
use crate::frame::numeric_values;

/// Labels every row from its amount and appends the label column.
///
/// Returns the new table together with the number of rows per label.
pub fn bucketize(
    df: &DataFrame,
    amount_column: &str,
    bounds: &BucketBounds,
    output_column: &str,
) -> Result<(DataFrame, BucketCounts)> {
    bounds.validate()?;
    if df.column(output_column).is_ok() {
        return Err(TransformError::DuplicateColumn {
            column: output_column.to_string(),
        });
    }
    let amounts = numeric_values(df, amount_column)?;
    let mut counts = BucketCounts::default();
    let labels: Vec<&str> = amounts
        .into_iter()
        .map(|amount| {
            let label = BuyingFrequency::classify(amount, bounds);
            counts.record(label);
            label.as_str()
        })
        .collect();
    let mut out = df.clone();
    out.with_column(Series::new(output_column.into(), labels).into_column())?;
    debug!(
        low = counts.low,
        medium = counts.medium,
        high = counts.high,
        unclassified = counts.unclassified,
        "bucketed amounts"
    );
    Ok((out, counts))
}
