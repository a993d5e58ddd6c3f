//! Binary-categorical effect size over a dataframe.

use cohort_core::descriptive::{mean, sample_std};
use cohort_effect::EffectSize;
use polars::prelude::*;

use crate::columns::{column, distinct_in_order, require_numeric, string_values};
use crate::{Error, Result};

/// Cohen's d between the two groups defined by a binary categorical
/// column.
///
/// Category values are trimmed of surrounding whitespace before grouping,
/// so `" treated"` and `"treated "` are one group. A zero or undefined
/// pooled standard deviation yields a magnitude of exactly 0.0.
pub(crate) fn binary_effect_size_impl(
    df: &DataFrame,
    numeric_column: &str,
    categorical_column: &str,
) -> Result<EffectSize> {
    let value_col = column(df, numeric_column)?;
    require_numeric(value_col)?;

    let labels: Vec<Option<String>> = string_values(column(df, categorical_column)?)?
        .into_iter()
        .map(|v| v.map(|s| s.trim().to_string()))
        .collect();

    let distinct = distinct_in_order(&labels);
    if distinct.len() != 2 {
        return Err(Error::NotBinary {
            column: categorical_column.to_string(),
            found: distinct,
        });
    }

    let casted = value_col.cast(&DataType::Float64)?;
    let values = casted.f64()?;

    let mut group1 = Vec::new();
    let mut group2 = Vec::new();
    for (label, value) in labels.iter().zip(values) {
        let (Some(label), Some(value)) = (label, value) else {
            continue;
        };
        if *label == distinct[0] {
            group1.push(value);
        } else if *label == distinct[1] {
            group2.push(value);
        }
    }

    let magnitude = match (
        mean(&group1),
        mean(&group2),
        sample_std(&group1),
        sample_std(&group2),
    ) {
        (Some(m1), Some(m2), Some(s1), Some(s2)) => {
            let pooled = ((s1 * s1 + s2 * s2) / 2.0).sqrt();
            if pooled == 0.0 || pooled.is_nan() {
                0.0
            } else {
                (m1 - m2) / pooled
            }
        }
        _ => 0.0,
    };

    Ok(EffectSize::new(magnitude, Some((group1.len(), group2.len()))))
}
