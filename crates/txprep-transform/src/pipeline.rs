//! Cleaner, encoder and bucketizer chained in their fixed order.
//!
//! Each stage runs inside its own `info` span and logs its row counts and
//! `duration_ms` when it finishes.

use std::time::Instant;

use polars::prelude::DataFrame;
use tracing::{info, info_span};

use txprep_model::{BucketCounts, CleanStats, EncodeStats, PipelineOptions};

use crate::bucket::bucketize;
use crate::clean::clean;
use crate::encode::one_hot_encode;
use crate::error::Result;

/// Final table plus what each stage did to it.
#[derive(Debug, Clone)]
pub struct Preprocessed {
    pub data: DataFrame,
    pub clean: CleanStats,
    pub encode: EncodeStats,
    pub buckets: BucketCounts,
}

fn clean_stage(df: &DataFrame, options: &PipelineOptions) -> Result<(DataFrame, CleanStats)> {
    let span = info_span!("clean", max_amount = options.max_amount);
    let _guard = span.enter();
    let start = Instant::now();
    let (cleaned, stats) = clean(df, options)?;
    info!(
        rows_in = stats.rows_in,
        dropped_incomplete = stats.dropped_incomplete,
        dropped_over_threshold = stats.dropped_over_threshold,
        rows_out = stats.rows_out,
        duration_ms = start.elapsed().as_millis(),
        "clean complete"
    );
    Ok((cleaned, stats))
}

fn encode_stage(df: &DataFrame, options: &PipelineOptions) -> Result<(DataFrame, EncodeStats)> {
    let span = info_span!("encode");
    let _guard = span.enter();
    let start = Instant::now();
    let (encoded, stats) = one_hot_encode(df, &options.categorical_columns)?;
    info!(
        indicators = stats.indicator_columns.len(),
        columns = encoded.width(),
        duration_ms = start.elapsed().as_millis(),
        "encode complete"
    );
    Ok((encoded, stats))
}

fn bucket_stage(df: &DataFrame, options: &PipelineOptions) -> Result<(DataFrame, BucketCounts)> {
    let span = info_span!("bucket");
    let _guard = span.enter();
    let start = Instant::now();
    let (bucketed, counts) = bucketize(
        df,
        &options.amount_column,
        &options.bucket_bounds,
        &options.frequency_column,
    )?;
    info!(
        low = counts.low,
        medium = counts.medium,
        high = counts.high,
        unclassified = counts.unclassified,
        duration_ms = start.elapsed().as_millis(),
        "bucket complete"
    );
    Ok((bucketed, counts))
}

/// Runs clean → encode → bucket over `df`.
pub fn preprocess(df: &DataFrame, options: &PipelineOptions) -> Result<Preprocessed> {
    options.validate()?;
    let (cleaned, clean_stats) = clean_stage(df, options)?;
    let (encoded, encode_stats) = encode_stage(&cleaned, options)?;
    let (data, buckets) = bucket_stage(&encoded, options)?;
    Ok(Preprocessed {
        data,
        clean: clean_stats,
        encode: encode_stats,
        buckets,
    })
}
