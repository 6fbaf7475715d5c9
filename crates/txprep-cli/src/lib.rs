//! Library side of the `txprep` binary: logging setup, the staged
//! pipeline, the console summary and the exit convention.

pub mod exit;
pub mod logging;
pub mod pipeline;
pub mod summary;
pub mod types;
