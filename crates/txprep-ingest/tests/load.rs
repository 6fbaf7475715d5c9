//! Tests for loading the transaction file.

use std::fs;
use std::path::PathBuf;

use polars::prelude::DataType;
use tempfile::TempDir;
use txprep_ingest::{IngestError, load_table};

fn write_csv(dir: &TempDir, contents: &str) -> PathBuf {
    let path = dir.path().join("supermarket_dataset.csv");
    fs::write(&path, contents).expect("write file");
    path
}

fn required() -> Vec<String> {
    vec![
        "Transaction_Amount".to_string(),
        "Product_Category".to_string(),
        "Customer_Segment".to_string(),
    ]
}

#[test]
fn loads_rows_in_file_order() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "Customer_ID,Transaction_Amount,Product_Category,Customer_Segment\n\
         C1,7,Food,Retail\n\
         C2,1500,Electronics,Wholesale\n",
    );

    let df = load_table(&path, &required()).expect("load");

    assert_eq!(df.height(), 2);
    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(
        names,
        vec![
            "Customer_ID",
            "Transaction_Amount",
            "Product_Category",
            "Customer_Segment"
        ]
    );
    assert_eq!(
        df.column("Transaction_Amount").unwrap().dtype(),
        &DataType::Int64
    );
}

#[test]
fn empty_fields_and_tokens_are_null() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "Transaction_Amount,Product_Category,Customer_Segment\n\
         7,Food,\n\
         NA,Food,Retail\n\
         3,Food,Retail\n",
    );

    let df = load_table(&path, &required()).expect("load");

    assert_eq!(df.column("Customer_Segment").unwrap().null_count(), 1);
    assert_eq!(df.column("Transaction_Amount").unwrap().null_count(), 1);
}

#[test]
fn missing_required_column_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(&dir, "Transaction_Amount,Product_Category\n7,Food\n");

    let err = load_table(&path, &required()).unwrap_err();

    match err {
        IngestError::MissingColumn { column, .. } => assert_eq!(column, "Customer_Segment"),
        other => panic!("unexpected error: {other}"),
    }
}

#[test]
fn absent_file_is_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_table(&dir.path().join("supermarket_dataset.csv"), &required()).unwrap_err();
    assert!(err.is_not_found());
    assert!(err.to_string().contains("supermarket_dataset.csv"));
}

#[test]
fn default_missing_tokens_are_null() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "Transaction_Amount,Product_Category,Customer_Segment\n\
         7,Food,n/a\n\
         8,Food,#N/A\n\
         9,Food,<NA>\n\
         -nan,Food,Retail\n\
         4,#NA,Retail\n\
         3,Food,Retail\n",
    );

    let df = load_table(&path, &required()).expect("load");

    assert_eq!(df.height(), 6);
    assert_eq!(df.column("Customer_Segment").unwrap().null_count(), 3);
    assert_eq!(df.column("Product_Category").unwrap().null_count(), 1);
    assert_eq!(df.column("Transaction_Amount").unwrap().null_count(), 1);
}

#[test]
fn padded_header_names_match_required_columns() {
    let dir = tempfile::tempdir().unwrap();
    let path = write_csv(
        &dir,
        "Transaction_Amount, Product_Category ,Customer_Segment\n7,Food,Retail\n",
    );

    let df = load_table(&path, &required()).expect("load");

    let names: Vec<String> = df
        .get_column_names()
        .iter()
        .map(|n| n.to_string())
        .collect();
    assert_eq!(names, required());
}
