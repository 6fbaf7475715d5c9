//! Tests for the chained preprocessing stages.

use polars::prelude::{Column, DataFrame, IntoColumn, NamedFrom, Series};
use txprep_model::{BucketBounds, PipelineOptions};
use txprep_transform::{TransformError, preprocess};

fn transactions(
    amounts: Vec<Option<f64>>,
    products: Vec<Option<&str>>,
    segments: Vec<Option<&str>>,
) -> DataFrame {
    let ids: Vec<String> = (1..=amounts.len()).map(|i| format!("C{i}")).collect();
    let cols: Vec<Column> = vec![
        Series::new("Customer_ID".into(), ids).into_column(),
        Series::new("Transaction_Amount".into(), amounts).into_column(),
        Series::new("Product_Category".into(), products).into_column(),
        Series::new("Customer_Segment".into(), segments).into_column(),
    ];
    DataFrame::new(cols).unwrap()
}

fn names(df: &DataFrame) -> Vec<String> {
    df.get_column_names().iter().map(|n| n.to_string()).collect()
}

fn int_at(df: &DataFrame, column: &str, row: usize) -> i32 {
    df.column(column).unwrap().i32().unwrap().get(row).unwrap()
}

fn str_at(df: &DataFrame, column: &str, row: usize) -> String {
    df.column(column)
        .unwrap()
        .str()
        .unwrap()
        .get(row)
        .unwrap()
        .to_string()
}

#[test]
fn single_medium_row_is_encoded_and_labelled() {
    let df = transactions(vec![Some(7.0)], vec![Some("Food")], vec![Some("Retail")]);

    let result = preprocess(&df, &PipelineOptions::default()).unwrap();

    assert_eq!(
        names(&result.data),
        vec![
            "Customer_ID",
            "Transaction_Amount",
            "Product_Category_Food",
            "Customer_Segment_Retail",
            "Buying_Frequency",
        ]
    );
    assert_eq!(int_at(&result.data, "Product_Category_Food", 0), 1);
    assert_eq!(int_at(&result.data, "Customer_Segment_Retail", 0), 1);
    assert_eq!(str_at(&result.data, "Buying_Frequency", 0), "Medium");
}

#[test]
fn over_threshold_row_leaves_empty_table() {
    let df = transactions(vec![Some(1500.0)], vec![Some("Food")], vec![Some("Retail")]);

    let result = preprocess(&df, &PipelineOptions::default()).unwrap();

    assert_eq!(result.data.height(), 0);
    assert_eq!(result.clean.dropped_over_threshold, 1);
    assert_eq!(
        names(&result.data),
        vec!["Customer_ID", "Transaction_Amount", "Buying_Frequency"]
    );
}

#[test]
fn row_missing_segment_never_reaches_encoder() {
    let df = transactions(
        vec![Some(3.0), Some(12.0)],
        vec![Some("Food"), Some("Toys")],
        vec![None, Some("Wholesale")],
    );

    let result = preprocess(&df, &PipelineOptions::default()).unwrap();

    assert_eq!(result.data.height(), 1);
    assert_eq!(str_at(&result.data, "Customer_ID", 0), "C2");
    assert!(result.data.column("Product_Category_Food").is_err());
    assert_eq!(str_at(&result.data, "Buying_Frequency", 0), "High");
}

#[test]
fn survivors_keep_input_order() {
    let df = transactions(
        vec![Some(9.0), Some(2000.0), Some(1.0), Some(50.0)],
        vec![Some("Toys"), Some("Food"), Some("Food"), Some("Home")],
        vec![Some("Retail"), Some("Retail"), Some("Retail"), Some("Retail")],
    );

    let result = preprocess(&df, &PipelineOptions::default()).unwrap();

    let ids: Vec<String> = (0..result.data.height())
        .map(|row| str_at(&result.data, "Customer_ID", row))
        .collect();
    assert_eq!(ids, vec!["C1", "C3", "C4"]);
    assert_eq!(
        result.encode.indicator_columns,
        vec![
            "Product_Category_Food",
            "Product_Category_Home",
            "Product_Category_Toys",
            "Customer_Segment_Retail",
        ]
    );
}

#[test]
fn custom_options_flow_into_every_stage() {
    let df = transactions(
        vec![Some(40.0), Some(150.0), Some(90.0)],
        vec![Some("Food"), Some("Food"), Some("Food")],
        vec![Some("Retail"), Some("Retail"), Some("Retail")],
    );
    let options = PipelineOptions::default()
        .with_max_amount(100.0)
        .with_bucket_bounds(BucketBounds::new(50.0, 80.0).unwrap());

    let result = preprocess(&df, &options).unwrap();

    assert_eq!(result.data.height(), 2);
    assert_eq!(str_at(&result.data, "Buying_Frequency", 0), "Low");
    assert_eq!(str_at(&result.data, "Buying_Frequency", 1), "High");
}

#[test]
fn text_amount_column_is_rejected() {
    let cols: Vec<Column> = vec![
        Series::new("Transaction_Amount".into(), vec!["cheap"]).into_column(),
        Series::new("Product_Category".into(), vec!["Food"]).into_column(),
        Series::new("Customer_Segment".into(), vec!["Retail"]).into_column(),
    ];
    let df = DataFrame::new(cols).unwrap();

    let err = preprocess(&df, &PipelineOptions::default()).unwrap_err();

    assert!(matches!(err, TransformError::NonNumericColumn { .. }));
}

#[test]
fn missing_categorical_column_is_rejected() {
    let cols: Vec<Column> = vec![
        Series::new("Transaction_Amount".into(), vec![1.0]).into_column(),
        Series::new("Product_Category".into(), vec!["Food"]).into_column(),
    ];
    let df = DataFrame::new(cols).unwrap();

    let err = preprocess(&df, &PipelineOptions::default()).unwrap_err();

    match err {
        TransformError::ColumnNotFound { column } => assert_eq!(column, "Customer_Segment"),
        other => panic!("unexpected error: {other}"),
    }
}
