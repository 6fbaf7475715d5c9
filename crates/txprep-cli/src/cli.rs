//! CLI argument definitions for the transaction preprocessor.

use std::path::PathBuf;

use clap::{Args, Parser, ValueEnum};
use clap_verbosity_flag::{Verbosity, WarnLevel};
use colorchoice_clap::Color;

use txprep_model::{DEFAULT_INPUT_PATH, DEFAULT_MAX_AMOUNT, DEFAULT_OUTPUT_PATH};

#[derive(Parser)]
#[command(
    name = "txprep",
    version,
    about = "Clean, one-hot encode and bucket a supermarket transaction CSV",
    long_about = "Clean, one-hot encode and bucket a supermarket transaction CSV.\n\n\
                  Drops incomplete rows and rows above the amount threshold, replaces\n\
                  Product_Category and Customer_Segment with indicator columns and adds\n\
                  a Buying_Frequency label derived from Transaction_Amount."
)]
pub struct Cli {
    #[command(flatten)]
    pub run: RunArgs,

    /// Adjust log verbosity (-v for info, -vv for debug, -q for errors only).
    #[command(flatten)]
    pub verbosity: Verbosity<WarnLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Explicit log level (overrides -v/-q flags).
    #[arg(long = "log-level", value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(long = "log-format", value_enum, default_value = "pretty")]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Args)]
pub struct RunArgs {
    /// Transaction CSV to read.
    #[arg(value_name = "INPUT", default_value = DEFAULT_INPUT_PATH)]
    pub input: PathBuf,

    /// Where to write the preprocessed CSV.
    #[arg(short = 'o', long = "output", value_name = "PATH", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Drop rows whose Transaction_Amount is above this value.
    #[arg(long = "max-amount", value_name = "AMOUNT", default_value_t = DEFAULT_MAX_AMOUNT)]
    pub max_amount: f64,

    /// Upper edge of the Low bucket, (0, LOW].
    #[arg(long = "low-upper", value_name = "AMOUNT", default_value_t = 5.0)]
    pub low_upper: f64,

    /// Upper edge of the Medium bucket, (LOW, MEDIUM].
    #[arg(long = "medium-upper", value_name = "AMOUNT", default_value_t = 10.0)]
    pub medium_upper: f64,

    /// Also write a JSON run report to this path.
    #[arg(long = "report", value_name = "PATH")]
    pub report: Option<PathBuf>,

    /// Run every stage but write no output files.
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

/// CLI log level choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogLevelArg {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

/// CLI log format choices.
#[derive(Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
