//! Process exit convention.
//!
//! - `0`: the run completed (including dry runs)
//! - `2`: the input file was not found; nothing was written
//! - `1`: any other failure

use anyhow::Result;

use crate::types::RunOutcome;

pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FAILURE: i32 = 1;
pub const EXIT_INPUT_NOT_FOUND: i32 = 2;

pub const INPUT_NOT_FOUND_MESSAGE: &str = "File not found. Please check the file path.";

/// Exit code plus the text to print on stderr, if any.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExitStatus {
    pub code: i32,
    pub message: Option<String>,
}

/// Maps the result of a run onto the exit convention.
pub fn exit_status(result: &Result<RunOutcome>) -> ExitStatus {
    match result {
        Ok(RunOutcome::Completed(_)) => ExitStatus {
            code: EXIT_SUCCESS,
            message: None,
        },
        Ok(RunOutcome::InputNotFound { path }) => ExitStatus {
            code: EXIT_INPUT_NOT_FOUND,
            message: Some(format!(
                "{INPUT_NOT_FOUND_MESSAGE}\n  path: {}",
                path.display()
            )),
        },
        Err(error) => ExitStatus {
            code: EXIT_FAILURE,
            message: Some(format!("error: {error:#}")),
        },
    }
}
