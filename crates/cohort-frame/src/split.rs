//! Threshold-based row partitioning.

use polars::prelude::*;

use crate::columns::{column, require_numeric};
use crate::Result;

/// Split rows into (strictly below, at or above) a threshold on one
/// numeric column, preserving original relative order within each half.
/// Rows with a missing value in the column land in neither frame.
pub(crate) fn split_at_threshold_impl(
    df: &DataFrame,
    column_name: &str,
    threshold: f64,
) -> Result<(DataFrame, DataFrame)> {
    let col = column(df, column_name)?;
    require_numeric(col)?;

    let casted = col.cast(&DataType::Float64)?;
    let values = casted.f64()?;

    let below: BooleanChunked = values
        .into_iter()
        .map(|v| v.map(|x| x < threshold))
        .collect();
    let at_or_above: BooleanChunked = values
        .into_iter()
        .map(|v| v.map(|x| x >= threshold))
        .collect();

    Ok((df.filter(&below)?, df.filter(&at_or_above)?))
}
