//! CSV output for the preprocessed table.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use polars::prelude::{CsvWriter, DataFrame, SerWriter};
use tracing::info;

use crate::error::{OutputError, Result};
use crate::hash::sha256_hex;

/// What was written and a digest to compare runs by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenOutput {
    pub path: PathBuf,
    pub rows: usize,
    pub bytes: usize,
    pub sha256: String,
}

/// Serialises the table as comma-separated text: one header row, then one
/// line per row, no index column.
pub fn render_csv(df: &DataFrame) -> Result<Vec<u8>> {
    let mut buffer = Vec::new();
    let mut frame = df.clone();
    CsvWriter::new(&mut buffer)
        .include_header(true)
        .finish(&mut frame)?;
    Ok(buffer)
}

fn write_atomic(path: &Path, bytes: &[u8]) -> Result<()> {
    let temp_path = path.with_extension("csv.tmp");

    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|e| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let mut file = File::create(&temp_path).map_err(|e| OutputError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;
    file.write_all(bytes).map_err(|e| OutputError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;
    file.sync_all().map_err(|e| OutputError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| {
        let _ = fs::remove_file(&temp_path);
        OutputError::AtomicWriteFailed {
            temp_path: temp_path.clone(),
            target_path: path.to_path_buf(),
            source: e,
        }
    })
}

/// Writes the table to `path`.
///
/// Bytes go to a sibling temp file first and are renamed into place, so
/// the target is either the complete new output or untouched.
pub fn write_table_csv(df: &DataFrame, path: &Path) -> Result<WrittenOutput> {
    let bytes = render_csv(df)?;
    write_atomic(path, &bytes)?;
    let written = WrittenOutput {
        path: path.to_path_buf(),
        rows: df.height(),
        bytes: bytes.len(),
        sha256: sha256_hex(&bytes),
    };
    info!(
        path = %path.display(),
        rows = written.rows,
        bytes = written.bytes,
        sha256 = %written.sha256,
        "wrote output table"
    );
    Ok(written)
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    fn table() -> DataFrame {
        let cols: Vec<Column> = vec![
            Series::new("Transaction_Amount".into(), vec![7i64, 2]).into_column(),
            Series::new("Product_Category_Food".into(), vec![1i32, 0]).into_column(),
            Series::new("Buying_Frequency".into(), vec!["Medium", "Low"]).into_column(),
        ];
        DataFrame::new(cols).unwrap()
    }

    #[test]
    fn renders_header_and_rows() {
        let bytes = render_csv(&table()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert_eq!(
            text,
            "Transaction_Amount,Product_Category_Food,Buying_Frequency\n7,1,Medium\n2,0,Low\n"
        );
    }

    #[test]
    fn write_leaves_no_temp_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.csv");
        let written = write_table_csv(&table(), &path).unwrap();
        assert!(path.exists());
        assert!(!dir.path().join("out.csv.tmp").exists());
        assert_eq!(written.rows, 2);
        assert_eq!(written.bytes, fs::read(&path).unwrap().len());
    }

    #[test]
    fn digest_is_stable_across_writes() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_table_csv(&table(), &dir.path().join("a.csv")).unwrap();
        let second = write_table_csv(&table(), &dir.path().join("b.csv")).unwrap();
        assert_eq!(first.sha256, second.sha256);
        assert_eq!(first.sha256.len(), 64);
    }

    #[test]
    fn missing_parent_directory_is_created() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("out.csv");
        write_table_csv(&table(), &path).unwrap();
        assert!(path.exists());
    }
}
