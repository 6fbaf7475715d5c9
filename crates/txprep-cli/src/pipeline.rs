//! Transaction preprocessing with explicit stages.
//!
//! The stages run in a fixed order:
//! 1. **Load**: read the input CSV and check the required columns
//! 2. **Clean**: drop incomplete rows, then rows above the amount threshold
//! 3. **Encode**: replace the categorical columns with indicator columns
//! 4. **Bucket**: append the buying frequency label
//! 5. **Write**: save the table as CSV, then the optional JSON report
//!
//! Nothing is written unless every earlier stage succeeded.

use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use polars::prelude::DataFrame;
use tracing::{info, info_span, warn};

use txprep_ingest::load_table;
use txprep_model::{DEFAULT_INPUT_PATH, DEFAULT_OUTPUT_PATH, PipelineOptions, PipelineReport};
use txprep_output::{WrittenOutput, write_report_json, write_table_csv};
use txprep_transform::frame::column_names;
use txprep_transform::{Preprocessed, preprocess};

use crate::types::{RunOutcome, RunSummary};

/// Everything one run needs.
#[derive(Debug, Clone)]
pub struct RunConfig {
    pub input: PathBuf,
    pub output: PathBuf,
    pub options: PipelineOptions,
    /// Optional JSON report path.
    pub report: Option<PathBuf>,
    /// Run every stage but skip the write stage.
    pub dry_run: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            input: PathBuf::from(DEFAULT_INPUT_PATH),
            output: PathBuf::from(DEFAULT_OUTPUT_PATH),
            options: PipelineOptions::default(),
            report: None,
            dry_run: false,
        }
    }
}

// ============================================================================
// Stage 1: Load
// ============================================================================

/// Outcome of the load stage. A missing input is not an error here: the
/// caller reports it and exits without producing output.
enum Loaded {
    Table(DataFrame),
    NotFound(PathBuf),
}

fn load_stage(input: &Path, options: &PipelineOptions) -> Result<Loaded> {
    let span = info_span!("load", path = %input.display());
    let _guard = span.enter();
    let start = Instant::now();
    match load_table(input, &options.required_columns()) {
        Ok(df) => {
            info!(
                rows = df.height(),
                columns = df.width(),
                duration_ms = start.elapsed().as_millis(),
                "load complete"
            );
            Ok(Loaded::Table(df))
        }
        Err(error) if error.is_not_found() => {
            warn!(path = %input.display(), "input file not found");
            Ok(Loaded::NotFound(input.to_path_buf()))
        }
        Err(error) => Err(error).context("load input table"),
    }
}

// ============================================================================
// Stages 2-4: Clean, Encode, Bucket
// ============================================================================

fn transform_stage(df: &DataFrame, options: &PipelineOptions) -> Result<Preprocessed> {
    preprocess(df, options).context("preprocess table")
}

// ============================================================================
// Stage 5: Write
// ============================================================================

fn write_stage(df: &DataFrame, output: &Path) -> Result<WrittenOutput> {
    let span = info_span!("write", path = %output.display());
    let _guard = span.enter();
    let start = Instant::now();
    let written = write_table_csv(df, output)
        .with_context(|| format!("write {}", output.display()))?;
    info!(
        rows = written.rows,
        bytes = written.bytes,
        duration_ms = start.elapsed().as_millis(),
        "write complete"
    );
    Ok(written)
}

/// Runs every stage for `config`.
///
/// # Errors
///
/// Returns an error for invalid options, malformed input, and failures while
/// writing. A missing input file is reported as [`RunOutcome::InputNotFound`].
pub fn run_pipeline(config: &RunConfig) -> Result<RunOutcome> {
    config.options.validate().context("invalid options")?;
    let span = info_span!("run", input = %config.input.display(), dry_run = config.dry_run);
    let _guard = span.enter();

    let df = match load_stage(&config.input, &config.options)? {
        Loaded::Table(df) => df,
        Loaded::NotFound(path) => return Ok(RunOutcome::InputNotFound { path }),
    };
    let transformed = transform_stage(&df, &config.options)?;

    let written = if config.dry_run {
        info!("dry run, skipping write");
        None
    } else {
        Some(write_stage(&transformed.data, &config.output)?)
    };

    let report = PipelineReport {
        input_path: config.input.clone(),
        output_path: written.as_ref().map(|w| w.path.clone()),
        options: config.options.clone(),
        clean: transformed.clean,
        encode: transformed.encode,
        buckets: transformed.buckets,
        output_sha256: written.as_ref().map(|w| w.sha256.clone()),
    };
    if let Some(path) = &config.report
        && !config.dry_run
    {
        write_report_json(&report, path)
            .with_context(|| format!("write report {}", path.display()))?;
        info!(path = %path.display(), "report written");
    }

    let columns = column_names(&transformed.data);
    Ok(RunOutcome::Completed(RunSummary {
        report,
        columns,
        rows: transformed.data.height(),
        written,
    }))
}
