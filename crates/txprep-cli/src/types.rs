use std::path::PathBuf;

use txprep_model::PipelineReport;
use txprep_output::WrittenOutput;

/// Result of a run that got past loading.
#[derive(Debug)]
pub struct RunSummary {
    pub report: PipelineReport,
    /// Final column order, which depends on the categories present.
    pub columns: Vec<String>,
    pub rows: usize,
    /// `None` for dry runs.
    pub written: Option<WrittenOutput>,
}

#[derive(Debug)]
pub enum RunOutcome {
    Completed(RunSummary),
    /// The input path did not resolve; nothing was written.
    InputNotFound { path: PathBuf },
}
