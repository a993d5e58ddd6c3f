//! Column classification and extraction helpers.

use std::collections::HashSet;

use polars::prelude::*;

use crate::{Error, Result};

/// Primitive numeric dtypes; every other column is treated as categorical.
pub(crate) fn is_numeric_dtype(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Float64
            | DataType::Float32
            | DataType::Int64
            | DataType::Int32
            | DataType::Int16
            | DataType::Int8
            | DataType::UInt64
            | DataType::UInt32
            | DataType::UInt16
            | DataType::UInt8
    )
}

/// Look up a column, mapping the miss to [`Error::InvalidColumn`].
pub(crate) fn column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column> {
    df.column(name)
        .map_err(|_| Error::InvalidColumn(name.to_string()))
}

/// Require a numeric dtype on a column.
pub(crate) fn require_numeric(column: &Column) -> Result<()> {
    if is_numeric_dtype(column.dtype()) {
        Ok(())
    } else {
        Err(Error::TypeMismatch {
            expected: "numeric".to_string(),
            got: format!("{:?}", column.dtype()),
        })
    }
}

/// Non-null values of a numeric column, cast to f64.
pub(crate) fn numeric_values(column: &Column) -> Result<Vec<f64>> {
    let casted = column.cast(&DataType::Float64)?;
    Ok(casted.f64()?.into_iter().flatten().collect())
}

/// Row-aligned values of any column in canonical string form; `None`
/// marks a null.
pub(crate) fn string_values(column: &Column) -> Result<Vec<Option<String>>> {
    let casted = column.cast(&DataType::String)?;
    Ok(casted
        .str()?
        .into_iter()
        .map(|v| v.map(str::to_string))
        .collect())
}

/// Distinct non-null values in first-encounter order.
pub(crate) fn distinct_in_order(values: &[Option<String>]) -> Vec<String> {
    let mut seen = HashSet::new();
    let mut distinct = Vec::new();
    for value in values.iter().flatten() {
        if seen.insert(value.as_str()) {
            distinct.push(value.clone());
        }
    }
    distinct
}
