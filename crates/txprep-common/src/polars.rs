//! Polars `AnyValue` utility functions.
//!
//! Categorical values are compared and named by their rendered text, and
//! numbers are shown without noise digits in the console summary.

use polars::prelude::AnyValue;

/// Converts a Polars `AnyValue` to a `String` representation.
///
/// Returns an empty string for `Null` and formats floats without
/// unnecessary trailing zeros, so `2.0` renders as `"2"`.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use txprep_common::any_to_string;
///
/// assert_eq!(any_to_string(AnyValue::Null), "");
/// assert_eq!(any_to_string(AnyValue::Int64(42)), "42");
/// assert_eq!(any_to_string(AnyValue::String("Food")), "Food");
/// ```
pub fn any_to_string(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Null => String::new(),
        AnyValue::Int32(v) => v.to_string(),
        AnyValue::Int64(v) => v.to_string(),
        AnyValue::UInt32(v) => v.to_string(),
        AnyValue::UInt64(v) => v.to_string(),
        AnyValue::Float32(v) => format_numeric(f64::from(v)),
        AnyValue::Float64(v) => format_numeric(v),
        AnyValue::String(s) => s.to_string(),
        AnyValue::StringOwned(s) => s.to_string(),
        AnyValue::Boolean(b) => b.to_string(),
        other => other.to_string(),
    }
}

/// Formats a floating-point number as a string without trailing zeros.
///
/// Non-finite values keep their standard spelling.
///
/// # Examples
///
/// ```
/// use txprep_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(7.25), "7.25");
/// assert_eq!(format_numeric(0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if !v.is_finite() {
        return v.to_string();
    }
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    if !s.contains('.') {
        return s;
    }
    let trimmed = s.trim_end_matches('0').trim_end_matches('.');
    trimmed.to_string()
}

/// Renders a categorical cell for use in an indicator column name.
///
/// Floats keep their decimal point (`2.0` stays `"2.0"`) so that a float
/// category never shares a name with the integer of the same value.
/// Everything else renders as [`any_to_string`] does.
///
/// # Examples
///
/// ```
/// use polars::prelude::AnyValue;
/// use txprep_common::any_to_category;
///
/// assert_eq!(any_to_category(AnyValue::Float64(2.0)), "2.0");
/// assert_eq!(any_to_category(AnyValue::Int64(2)), "2");
/// ```
pub fn any_to_category(value: AnyValue<'_>) -> String {
    match value {
        AnyValue::Float32(v) => format!("{v:?}"),
        AnyValue::Float64(v) => format!("{v:?}"),
        other => any_to_string(other),
    }
}

/// Returns true when a cell counts as missing: null, or a float NaN.
pub fn is_missing(value: &AnyValue<'_>) -> bool {
    match value {
        AnyValue::Null => true,
        AnyValue::Float32(v) => v.is_nan(),
        AnyValue::Float64(v) => v.is_nan(),
        _ => false,
    }
}
