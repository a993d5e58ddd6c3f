//! The cohort comparison engine.
//!
//! Partitions a dataframe by each grouping column's distinct non-null
//! values and summarizes every resulting cohort: the requested numeric
//! statistics for every numeric column, and category value counts for
//! every other column.

use std::collections::BTreeMap;

use polars::prelude::*;
use tracing::debug;

use crate::columns::{column, distinct_in_order, is_numeric_dtype, numeric_values, string_values};
use crate::{CohortSummary, Result, Statistic};

pub(crate) fn cohort_compare_impl(
    df: &DataFrame,
    grouping: &[&str],
    statistics: &[Statistic],
) -> Result<BTreeMap<String, CohortSummary>> {
    for name in grouping {
        column(df, name)?;
    }

    // Classified once over the whole table; the split does not change
    // per-cohort.
    let mut numeric_cols = Vec::new();
    let mut categorical_cols = Vec::new();
    for col in df.get_columns() {
        if is_numeric_dtype(col.dtype()) {
            numeric_cols.push(col.name().to_string());
        } else {
            categorical_cols.push(col.name().to_string());
        }
    }
    debug!(
        "classified {} numeric and {} categorical columns",
        numeric_cols.len(),
        categorical_cols.len()
    );

    let mut results = BTreeMap::new();
    for group_col in grouping {
        let keys = string_values(column(df, group_col)?)?;
        for value in distinct_in_order(&keys) {
            let mask: BooleanChunked = keys
                .iter()
                .map(|v| v.as_deref().map(|s| s == value.as_str()))
                .collect();
            let cohort = df.filter(&mask)?;
            let label = format!("{group_col}={value}");
            debug!("cohort {label}: {} of {} rows", cohort.height(), df.height());
            let summary =
                summarize(&cohort, &label, statistics, &numeric_cols, &categorical_cols)?;
            // A label produced by two grouping columns resolves to the
            // later-processed column's cohort.
            results.insert(label, summary);
        }
    }

    Ok(results)
}

fn summarize(
    cohort: &DataFrame,
    label: &str,
    statistics: &[Statistic],
    numeric_cols: &[String],
    categorical_cols: &[String],
) -> Result<CohortSummary> {
    let mut numeric_stats = BTreeMap::new();
    for name in numeric_cols {
        let values = numeric_values(cohort.column(name)?)?;
        let mut per_column = BTreeMap::new();
        for stat in statistics {
            per_column.insert(*stat, stat.apply(&values));
        }
        numeric_stats.insert(name.clone(), per_column);
    }

    let mut counts = BTreeMap::new();
    for name in categorical_cols {
        let mut per_column: BTreeMap<String, u64> = BTreeMap::new();
        for value in string_values(cohort.column(name)?)?.into_iter().flatten() {
            *per_column.entry(value).or_insert(0) += 1;
        }
        counts.insert(name.clone(), per_column);
    }

    Ok(CohortSummary::new(
        label.to_string(),
        numeric_stats,
        counts,
    ))
}
