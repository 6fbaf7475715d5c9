use anyhow::{Context, Result};
use tracing::debug;

use txprep_cli::pipeline::{RunConfig, run_pipeline};
use txprep_cli::types::RunOutcome;
use txprep_model::{BucketBounds, PipelineOptions};

use crate::cli::RunArgs;

pub fn run(args: &RunArgs) -> Result<RunOutcome> {
    let config = run_config(args)?;
    debug!(?config, "resolved run configuration");
    run_pipeline(&config)
}

fn run_config(args: &RunArgs) -> Result<RunConfig> {
    let bounds = BucketBounds::new(args.low_upper, args.medium_upper)
        .context("invalid bucket bounds")?;
    let options = PipelineOptions::new()
        .with_max_amount(args.max_amount)
        .with_bucket_bounds(bounds);
    Ok(RunConfig {
        input: args.input.clone(),
        output: args.output.clone(),
        options,
        report: args.report.clone(),
        dry_run: args.dry_run,
    })
}
