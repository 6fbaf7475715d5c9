//! JSON run report.

use std::fs;
use std::path::Path;

use tracing::info;
use txprep_model::PipelineReport;

use crate::error::{OutputError, Result};

/// Writes the report as pretty-printed JSON.
pub fn write_report_json(report: &PipelineReport, path: &Path) -> Result<()> {
    let mut json = serde_json::to_string_pretty(report)?;
    json.push('\n');
    fs::write(path, json).map_err(|e| OutputError::Io {
        operation: "write",
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), "wrote run report");
    Ok(())
}
