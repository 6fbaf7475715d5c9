//! Column access helpers shared by the stages.

use polars::prelude::{Column, DataFrame, DataType};

use crate::error::{Result, TransformError};

/// Looks up a column, mapping absence to [`TransformError::ColumnNotFound`].
pub fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name).map_err(|_| TransformError::ColumnNotFound {
        column: name.to_string(),
    })
}

/// Reads a column as `f64` values, failing if any present value is not numeric.
pub fn numeric_values(df: &DataFrame, name: &str) -> Result<Vec<Option<f64>>> {
    let col = column(df, name)?;
    let as_float = col
        .strict_cast(&DataType::Float64)
        .map_err(|e| TransformError::NonNumericColumn {
            column: name.to_string(),
            message: e.to_string(),
        })?;
    let values = as_float.f64()?.into_iter().collect();
    Ok(values)
}

/// Column names in frame order.
pub fn column_names(df: &DataFrame) -> Vec<String> {
    df.get_column_names()
        .into_iter()
        .map(ToString::to_string)
        .collect()
}
