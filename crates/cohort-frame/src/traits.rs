//! Extension trait wiring cohort statistics onto Polars DataFrames.

use std::collections::BTreeMap;

use cohort_effect::EffectSize;
use polars::prelude::*;

use crate::{CohortSummary, Result, Statistic};

/// Cohort statistics over a dataframe.
pub trait CohortStatsExt {
    /// Partition by each grouping column's distinct non-null values and
    /// summarize every cohort.
    ///
    /// # Arguments
    /// * `grouping` - Columns whose distinct values define the cohorts,
    ///   processed in order (a label collision resolves to the later
    ///   column)
    /// * `statistics` - Numeric statistics to compute; pass
    ///   [`Statistic::ALL`] for the full set
    ///
    /// # Returns
    /// Mapping from `"<column>=<value>"` label to the cohort's summary.
    fn cohort_compare(
        &self,
        grouping: &[&str],
        statistics: &[Statistic],
    ) -> Result<BTreeMap<String, CohortSummary>>;

    /// Split rows by a threshold on one numeric column: strictly-below
    /// first, at-or-above second. Rows missing the value land in neither
    /// frame.
    fn split_at_threshold(&self, column: &str, threshold: f64) -> Result<(DataFrame, DataFrame)>;

    /// Cohen's d between the two groups defined by a binary categorical
    /// column. Fails unless the column has exactly two distinct non-null
    /// values after whitespace normalization.
    fn binary_effect_size(
        &self,
        numeric_column: &str,
        categorical_column: &str,
    ) -> Result<EffectSize>;
}

impl CohortStatsExt for DataFrame {
    fn cohort_compare(
        &self,
        grouping: &[&str],
        statistics: &[Statistic],
    ) -> Result<BTreeMap<String, CohortSummary>> {
        crate::compare::cohort_compare_impl(self, grouping, statistics)
    }

    fn split_at_threshold(&self, column: &str, threshold: f64) -> Result<(DataFrame, DataFrame)> {
        crate::split::split_at_threshold_impl(self, column, threshold)
    }

    fn binary_effect_size(
        &self,
        numeric_column: &str,
        categorical_column: &str,
    ) -> Result<EffectSize> {
        crate::effect::binary_effect_size_impl(self, numeric_column, categorical_column)
    }
}
