//! CSV reading for the transaction dataset.

use std::io::ErrorKind;
use std::path::Path;

use polars::prelude::{CsvReadOptions, DataFrame, NullValues, SerReader};
use tracing::{debug, info};

use crate::error::{IngestError, Result};

/// Cell contents read as missing in addition to empty fields. This is the
/// default missing-value list of the common dataframe libraries.
pub const MISSING_VALUE_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn normalize_header(raw: &str) -> String {
    raw.trim().trim_matches('\u{feff}').to_string()
}

fn ensure_file(path: &Path) -> Result<()> {
    if path.is_file() {
        Ok(())
    } else {
        Err(IngestError::InputNotFound {
            path: path.to_path_buf(),
        })
    }
}

/// Reads only the header row and returns the column names in file order.
pub fn read_csv_schema(path: &Path) -> Result<Vec<String>> {
    ensure_file(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(path)
        .map_err(|source| header_error(path, source))?;
    let headers = reader
        .headers()
        .map_err(|source| header_error(path, source))?;
    let columns: Vec<String> = headers.iter().map(normalize_header).collect();
    if columns.is_empty() || columns.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }
    Ok(columns)
}

fn header_error(path: &Path, source: csv::Error) -> IngestError {
    if let csv::ErrorKind::Io(io) = source.kind()
        && io.kind() == ErrorKind::NotFound
    {
        return IngestError::InputNotFound {
            path: path.to_path_buf(),
        };
    }
    IngestError::HeaderRead {
        path: path.to_path_buf(),
        source,
    }
}

/// Reads the whole file into a DataFrame.
///
/// Types are inferred over every row so a numeric column with a late
/// decimal value is still read as numeric. Column names are normalized the
/// same way [`read_csv_schema`] normalizes them.
pub fn read_table(path: &Path) -> Result<DataFrame> {
    ensure_file(path)?;
    let null_values =
        NullValues::AllColumns(MISSING_VALUE_TOKENS.iter().map(|t| (*t).into()).collect());
    let parse_error = |e: polars::error::PolarsError| IngestError::CsvParse {
        path: path.to_path_buf(),
        message: e.to_string(),
    };
    let mut df = CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(|opts| opts.with_null_values(Some(null_values.clone())))
        .try_into_reader_with_file_path(Some(path.to_path_buf()))
        .map_err(parse_error)?
        .finish()
        .map_err(parse_error)?;
    let names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| normalize_header(name))
        .collect();
    df.set_column_names(names).map_err(parse_error)?;
    Ok(df)
}

/// Loads the input table after checking that every required column is present.
pub fn load_table(path: &Path, required: &[String]) -> Result<DataFrame> {
    let headers = read_csv_schema(path)?;
    debug!(path = %path.display(), columns = headers.len(), "read header");
    for column in required {
        if !headers.iter().any(|h| h == column) {
            return Err(IngestError::MissingColumn {
                column: column.clone(),
                path: path.to_path_buf(),
            });
        }
    }
    let df = read_table(path)?;
    info!(
        path = %path.display(),
        rows = df.height(),
        columns = df.width(),
        "loaded input table"
    );
    Ok(df)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn create_temp_csv(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        write!(file, "{}", content).unwrap();
        file
    }

    #[test]
    fn test_read_csv_schema_strips_bom_and_whitespace() {
        let file = create_temp_csv("\u{feff}A, B ,C\n1,2,3\n");
        let headers = read_csv_schema(file.path()).unwrap();
        assert_eq!(headers, vec!["A", "B", "C"]);
    }

    #[test]
    fn test_read_csv_schema_empty_file() {
        let file = create_temp_csv("");
        let err = read_csv_schema(file.path()).unwrap_err();
        assert!(matches!(err, IngestError::EmptyCsv { .. }));
    }

    #[test]
    fn test_missing_path_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_csv_schema(&dir.path().join("absent.csv")).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_read_table_normalizes_column_names() {
        let file = create_temp_csv("Transaction_Amount, Product_Category\n7,Food\n");
        let df = read_table(file.path()).unwrap();
        assert!(df.column("Product_Category").is_ok());
    }

    #[test]
    fn test_directory_is_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_table(dir.path()).unwrap_err();
        assert!(err.is_not_found());
    }
}
