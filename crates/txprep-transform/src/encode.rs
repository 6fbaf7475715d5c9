//! One-hot encoding for nominal columns.
//!
//! The encoder is fitted on the table it will transform: every distinct
//! value observed in a source column becomes one integer indicator column
//! named `<column>_<value>`. The output schema therefore depends on the
//! data, and consumers must not assume a stable column set across inputs.

use std::collections::{BTreeSet, HashMap, HashSet};

use polars::prelude::{AnyValue, Column, DataFrame, IntoColumn, NamedFrom, Series};
use tracing::debug;

use txprep_common::{any_to_category, is_missing};
use txprep_model::EncodeStats;

use crate::error::{Result, TransformError};
use crate::frame::{column, column_names};

/// One generated indicator column.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndicatorColumn {
    pub source: String,
    pub value: String,
    pub name: String,
}

/// Ordered `(column, value) -> indicator` mapping discovered at fit time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EncoderMapping {
    pub entries: Vec<IndicatorColumn>,
}

impl EncoderMapping {
    /// Distinct values of one source column, in indicator order.
    pub fn categories(&self, source: &str) -> Vec<&str> {
        self.entries
            .iter()
            .filter(|entry| entry.source == source)
            .map(|entry| entry.value.as_str())
            .collect()
    }

    pub fn indicator_names(&self) -> Vec<String> {
        self.entries.iter().map(|entry| entry.name.clone()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Builds the indicator name for a source column and value.
pub fn indicator_name(source: &str, value: &str) -> String {
    format!("{source}_{value}")
}

fn category_values(col: &Column, source: &str) -> Result<Vec<String>> {
    let mut values = Vec::with_capacity(col.len());
    for row in 0..col.len() {
        let value = col.get(row).unwrap_or(AnyValue::Null);
        if is_missing(&value) {
            return Err(TransformError::MissingCategory {
                column: source.to_string(),
                row,
            });
        }
        values.push(any_to_category(value));
    }
    Ok(values)
}

/// Distinct values of a source column in indicator order: numeric columns
/// sort by value, everything else sorts lexicographically.
fn distinct_categories(col: &Column, source: &str) -> Result<Vec<String>> {
    let distinct: BTreeSet<String> = category_values(col, source)?.into_iter().collect();
    let mut ordered: Vec<String> = distinct.into_iter().collect();
    if col.dtype().is_integer() || col.dtype().is_float() {
        ordered.sort_by(|a, b| numeric_key(a).total_cmp(&numeric_key(b)));
    }
    Ok(ordered)
}

fn numeric_key(rendered: &str) -> f64 {
    rendered.parse().unwrap_or(f64::NAN)
}

/// Unfitted one-hot encoder over a list of source columns.
#[derive(Debug, Clone)]
pub struct OneHotEncoder {
    columns: Vec<String>,
}

impl OneHotEncoder {
    pub fn new<I, S>(columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
        }
    }

    /// Learns the ordered distinct values of every source column.
    pub fn fit(&self, df: &DataFrame) -> Result<FittedOneHotEncoder> {
        let mut entries = Vec::new();
        for source in &self.columns {
            let col = column(df, source)?;
            for value in distinct_categories(col, source)? {
                entries.push(IndicatorColumn {
                    name: indicator_name(source, &value),
                    source: source.clone(),
                    value,
                });
            }
        }
        let mapping = EncoderMapping { entries };
        check_collisions(df, &self.columns, &mapping)?;
        debug!(indicators = mapping.len(), "fitted one-hot encoder");
        Ok(FittedOneHotEncoder {
            columns: self.columns.clone(),
            mapping,
        })
    }
}

fn check_collisions(df: &DataFrame, sources: &[String], mapping: &EncoderMapping) -> Result<()> {
    let mut taken: HashSet<String> = column_names(df)
        .into_iter()
        .filter(|name| !sources.contains(name))
        .collect();
    for entry in &mapping.entries {
        if !taken.insert(entry.name.clone()) {
            return Err(TransformError::DuplicateColumn {
                column: entry.name.clone(),
            });
        }
    }
    Ok(())
}

/// Encoder with a fixed mapping, ready to transform tables.
#[derive(Debug, Clone)]
pub struct FittedOneHotEncoder {
    columns: Vec<String>,
    mapping: EncoderMapping,
}

impl FittedOneHotEncoder {
    pub fn mapping(&self) -> &EncoderMapping {
        &self.mapping
    }

    pub fn stats(&self) -> EncodeStats {
        EncodeStats {
            source_columns: self.columns.clone(),
            indicator_columns: self.mapping.indicator_names(),
        }
    }

    /// Drops the source columns and appends the indicator columns after
    /// the passthrough columns. Row order is unchanged.
    pub fn transform(&self, df: &DataFrame) -> Result<DataFrame> {
        let mut indicators: Vec<Column> = Vec::with_capacity(self.mapping.len());
        for source in &self.columns {
            let values = category_values(column(df, source)?, source)?;
            let slots: HashMap<&str, usize> = self
                .mapping
                .categories(source)
                .into_iter()
                .enumerate()
                .map(|(slot, value)| (value, slot))
                .collect();
            let names: Vec<&IndicatorColumn> = self
                .mapping
                .entries
                .iter()
                .filter(|entry| &entry.source == source)
                .collect();
            let mut flags = vec![vec![0i32; values.len()]; names.len()];
            for (row, value) in values.iter().enumerate() {
                let slot = slots.get(value.as_str()).copied().ok_or_else(|| {
                    TransformError::UnknownCategory {
                        column: source.clone(),
                        value: value.clone(),
                    }
                })?;
                flags[slot][row] = 1;
            }
            for (entry, flag) in names.into_iter().zip(flags) {
                indicators.push(Series::new(entry.name.as_str().into(), flag).into_column());
            }
        }

        let mut out = df.clone();
        for source in &self.columns {
            out = out.drop(source)?;
        }
        for indicator in indicators {
            if out.column(indicator.name().as_str()).is_ok() {
                return Err(TransformError::DuplicateColumn {
                    column: indicator.name().to_string(),
                });
            }
            out.with_column(indicator)?;
        }
        Ok(out)
    }
}

/// Fits on `df` and transforms it in one step.
pub fn one_hot_encode(df: &DataFrame, columns: &[String]) -> Result<(DataFrame, EncodeStats)> {
    let encoder = OneHotEncoder::new(columns.iter().cloned()).fit(df)?;
    let out = encoder.transform(df)?;
    Ok((out, encoder.stats()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use polars::prelude::{Column, IntoColumn, NamedFrom, Series};

    fn frame(columns: Vec<(&str, Vec<&str>)>) -> DataFrame {
        let cols: Vec<Column> = columns
            .into_iter()
            .map(|(name, values)| Series::new(name.into(), values).into_column())
            .collect();
        DataFrame::new(cols).unwrap()
    }

    #[test]
    fn categories_are_sorted_per_column() {
        let df = frame(vec![
            ("Product_Category", vec!["Food", "Clothing", "Food"]),
            ("Customer_Segment", vec!["Retail", "Retail", "Premium"]),
        ]);
        let encoder = OneHotEncoder::new(["Product_Category", "Customer_Segment"])
            .fit(&df)
            .unwrap();
        assert_eq!(
            encoder.mapping().categories("Product_Category"),
            vec!["Clothing", "Food"]
        );
        assert_eq!(
            encoder.mapping().indicator_names(),
            vec![
                "Product_Category_Clothing",
                "Product_Category_Food",
                "Customer_Segment_Premium",
                "Customer_Segment_Retail",
            ]
        );
    }

    #[test]
    fn numeric_categories_sort_by_value() {
        let cols: Vec<Column> = vec![
            Series::new("Product_Category".into(), vec![10i64, 2, 2, -1]).into_column(),
            Series::new("Customer_Segment".into(), vec![2.0f64, 0.5, 2.0, 10.0]).into_column(),
        ];
        let df = DataFrame::new(cols).unwrap();
        let encoder = OneHotEncoder::new(["Product_Category", "Customer_Segment"])
            .fit(&df)
            .unwrap();
        assert_eq!(
            encoder.mapping().indicator_names(),
            vec![
                "Product_Category_-1",
                "Product_Category_2",
                "Product_Category_10",
                "Customer_Segment_0.5",
                "Customer_Segment_2.0",
                "Customer_Segment_10.0",
            ]
        );
        let out = encoder.transform(&df).unwrap();
        let flags: Vec<Option<i32>> = out
            .column("Customer_Segment_2.0")
            .unwrap()
            .i32()
            .unwrap()
            .into_iter()
            .collect();
        assert_eq!(flags, vec![Some(1), Some(0), Some(1), Some(0)]);
    }

    #[test]
    fn unknown_value_is_rejected() {
        let train = frame(vec![("Product_Category", vec!["Food"])]);
        let other = frame(vec![("Product_Category", vec!["Toys"])]);
        let encoder = OneHotEncoder::new(["Product_Category"]).fit(&train).unwrap();
        let err = encoder.transform(&other).unwrap_err();
        assert!(matches!(err, TransformError::UnknownCategory { .. }));
    }

    #[test]
    fn collision_with_passthrough_column_is_rejected() {
        let df = frame(vec![
            ("Product_Category_Food", vec!["x"]),
            ("Product_Category", vec!["Food"]),
        ]);
        let err = OneHotEncoder::new(["Product_Category"]).fit(&df).unwrap_err();
        assert!(matches!(err, TransformError::DuplicateColumn { .. }));
    }

    #[test]
    fn missing_category_is_rejected() {
        let cols: Vec<Column> =
            vec![Series::new("Product_Category".into(), vec![Some("Food"), None]).into_column()];
        let df = DataFrame::new(cols).unwrap();
        let err = OneHotEncoder::new(["Product_Category"]).fit(&df).unwrap_err();
        assert!(matches!(
            err,
            TransformError::MissingCategory { row: 1, .. }
        ));
    }
}
