//! Cleaning stage: incomplete rows, then rows above the amount threshold.
//!
//! Rows are judged independently and survivors keep their input order.

use polars::prelude::{AnyValue, BooleanChunked, DataFrame, NewChunkedArray};
use tracing::debug;

use txprep_common::is_missing;
use txprep_model::{CleanStats, PipelineOptions};

use crate::error::Result;
use crate::frame::numeric_values;

fn filter_rows(df: &DataFrame, keep: &[bool]) -> Result<DataFrame> {
    let mask = BooleanChunked::from_slice("keep".into(), keep);
    Ok(df.filter(&mask)?)
}

/// Removes every row holding a null, or a NaN float, in any column.
pub fn drop_incomplete_rows(df: &DataFrame) -> Result<DataFrame> {
    let mut keep = vec![true; df.height()];
    for col in df.get_columns() {
        if col.null_count() == 0 && !col.dtype().is_float() {
            continue;
        }
        for (idx, flag) in keep.iter_mut().enumerate() {
            if *flag && is_missing(&col.get(idx).unwrap_or(AnyValue::Null)) {
                *flag = false;
            }
        }
    }
    filter_rows(df, &keep)
}

/// Keeps rows whose amount is at most `max_amount`.
///
/// The amount column must be numeric; a null or NaN amount never passes.
pub fn filter_amount(df: &DataFrame, amount_column: &str, max_amount: f64) -> Result<DataFrame> {
    let amounts = numeric_values(df, amount_column)?;
    let keep: Vec<bool> = amounts
        .iter()
        .map(|amount| amount.is_some_and(|v| v <= max_amount))
        .collect();
    filter_rows(df, &keep)
}

/// Runs both filters in order and reports how many rows each removed.
pub fn clean(df: &DataFrame, options: &PipelineOptions) -> Result<(DataFrame, CleanStats)> {
    let rows_in = df.height();
    let complete = drop_incomplete_rows(df)?;
    let dropped_incomplete = rows_in - complete.height();
    let kept = filter_amount(&complete, &options.amount_column, options.max_amount)?;
    let dropped_over_threshold = complete.height() - kept.height();
    let stats = CleanStats {
        rows_in,
        dropped_incomplete,
        dropped_over_threshold,
        rows_out: kept.height(),
    };
    debug!(
        rows_in,
        dropped_incomplete,
        dropped_over_threshold,
        max_amount = options.max_amount,
        "cleaned table"
    );
    Ok((kept, stats))
}
