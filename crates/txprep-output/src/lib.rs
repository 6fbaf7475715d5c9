//! Writer stage: serialises the final table and the optional run report.

pub mod csv;
pub mod error;
pub mod hash;
pub mod report;

pub use csv::{WrittenOutput, render_csv, write_table_csv};
pub use error::{OutputError, Result};
pub use hash::sha256_hex;
pub use report::write_report_json;
