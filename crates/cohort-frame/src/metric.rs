//! Per-cohort result records.
//!
//! Two distinct record shapes exist on purpose. [`CohortSummary`] is the
//! nested payload the batch comparison engine produces (per-column numeric
//! statistics plus per-column category counts). [`CohortMetric`] is a flat
//! five-slot record for a single cohort built by hand outside the batch
//! path. Keeping them as separate types makes cross-shape comparison a
//! type error instead of a silent question mark.
//!
//! Equality on both records is NaN-aware: `NaN == NaN` holds, so two runs
//! over identical data always compare equal.

use std::collections::BTreeMap;
use std::fmt;

use cohort_core::float::option_nan_eq;
use serde::{Deserialize, Serialize};

use crate::Statistic;

/// Nested per-cohort statistics produced by the batch comparison engine.
///
/// `numeric_stats` maps numeric column name to the requested statistics
/// (`None` marks an undefined value, e.g. the sample standard deviation of
/// a single observation); `counts` maps categorical column name to the
/// occurrence count of each category value observed within the cohort.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortSummary {
    label: String,
    numeric_stats: BTreeMap<String, BTreeMap<Statistic, Option<f64>>>,
    counts: BTreeMap<String, BTreeMap<String, u64>>,
}

impl CohortSummary {
    pub(crate) fn new(
        label: String,
        numeric_stats: BTreeMap<String, BTreeMap<Statistic, Option<f64>>>,
        counts: BTreeMap<String, BTreeMap<String, u64>>,
    ) -> Self {
        Self {
            label,
            numeric_stats,
            counts,
        }
    }

    /// Cohort label, formatted as `"<column>=<value>"`.
    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn numeric_stats(&self) -> &BTreeMap<String, BTreeMap<Statistic, Option<f64>>> {
        &self.numeric_stats
    }

    pub fn counts(&self) -> &BTreeMap<String, BTreeMap<String, u64>> {
        &self.counts
    }

    /// Value of one statistic for one numeric column, if it was requested
    /// and came out defined.
    pub fn stat(&self, column: &str, statistic: Statistic) -> Option<f64> {
        self.numeric_stats.get(column)?.get(&statistic).copied().flatten()
    }

    /// Occurrence count of one category value within one categorical
    /// column.
    pub fn count(&self, column: &str, value: &str) -> Option<u64> {
        self.counts.get(column)?.get(value).copied()
    }
}

impl PartialEq for CohortSummary {
    fn eq(&self, other: &Self) -> bool {
        if self.label != other.label || self.counts != other.counts {
            return false;
        }
        if self.numeric_stats.len() != other.numeric_stats.len() {
            return false;
        }
        self.numeric_stats
            .iter()
            .zip(&other.numeric_stats)
            .all(|((col_a, stats_a), (col_b, stats_b))| {
                col_a == col_b
                    && stats_a.len() == stats_b.len()
                    && stats_a
                        .iter()
                        .zip(stats_b)
                        .all(|((k_a, v_a), (k_b, v_b))| k_a == k_b && option_nan_eq(*v_a, *v_b))
            })
    }
}

impl fmt::Display for CohortSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cohort: {}", self.label)?;
        for (column, stats) in &self.numeric_stats {
            write!(f, "  {column}:")?;
            for (stat, value) in stats {
                match value {
                    Some(v) => write!(f, " {stat}={v:.4}")?,
                    None => write!(f, " {stat}=-")?,
                }
            }
            writeln!(f)?;
        }
        for (column, counts) in &self.counts {
            write!(f, "  {column}:")?;
            for (value, n) in counts {
                write!(f, " {value}={n}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Flat five-slot record for a single cohort, built outside the batch
/// path. All slots start absent; each has an explicit setter.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CohortMetric {
    name: String,
    mean: Option<f64>,
    median: Option<f64>,
    std: Option<f64>,
    min: Option<f64>,
    max: Option<f64>,
}

impl CohortMetric {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            mean: None,
            median: None,
            std: None,
            min: None,
            max: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn mean(&self) -> Option<f64> {
        self.mean
    }

    pub fn median(&self) -> Option<f64> {
        self.median
    }

    pub fn std(&self) -> Option<f64> {
        self.std
    }

    pub fn min(&self) -> Option<f64> {
        self.min
    }

    pub fn max(&self) -> Option<f64> {
        self.max
    }

    pub fn set_mean(&mut self, mean: f64) {
        self.mean = Some(mean);
    }

    pub fn set_median(&mut self, median: f64) {
        self.median = Some(median);
    }

    pub fn set_std(&mut self, std: f64) {
        self.std = Some(std);
    }

    pub fn set_min(&mut self, min: f64) {
        self.min = Some(min);
    }

    pub fn set_max(&mut self, max: f64) {
        self.max = Some(max);
    }

    fn slots(&self) -> [(&'static str, Option<f64>); 5] {
        [
            ("mean", self.mean),
            ("median", self.median),
            ("std", self.std),
            ("min", self.min),
            ("max", self.max),
        ]
    }
}

impl PartialEq for CohortMetric {
    /// Slot-by-slot, NaN-aware. A slot absent on one side but set on the
    /// other compares unequal; the label is identity, not a statistic,
    /// and does not participate.
    fn eq(&self, other: &Self) -> bool {
        self.slots()
            .iter()
            .zip(other.slots().iter())
            .all(|((_, a), (_, b))| option_nan_eq(*a, *b))
    }
}

impl fmt::Display for CohortMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Cohort: {}", self.name)?;
        for (name, value) in self.slots() {
            match value {
                Some(v) => writeln!(f, "  {name}: {v}")?,
                None => writeln!(f, "  {name}: -")?,
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(name: &str) -> CohortMetric {
        let mut metric = CohortMetric::new(name);
        metric.set_mean(2.0);
        metric.set_median(2.0);
        metric.set_std(1.0);
        metric.set_min(1.0);
        metric.set_max(3.0);
        metric
    }

    #[test]
    fn test_identical_slots_compare_equal() {
        assert_eq!(filled("group=x"), filled("group=x"));
        // the label is identity, not a statistic
        assert_eq!(filled("group=x"), filled("group=y"));
    }

    #[test]
    fn test_any_differing_slot_compares_unequal() {
        let mut other = filled("group=x");
        other.set_max(99.0);
        assert_ne!(filled("group=x"), other);
    }

    #[test]
    fn test_absent_versus_present_compares_unequal() {
        let mut sparse = CohortMetric::new("group=x");
        sparse.set_mean(2.0);
        assert_ne!(filled("group=x"), sparse);
        // but two all-absent records are equal
        assert_eq!(CohortMetric::new("a"), CohortMetric::new("b"));
    }

    #[test]
    fn test_nan_slots_compare_equal() {
        let mut a = CohortMetric::new("g");
        let mut b = CohortMetric::new("g");
        a.set_std(f64::NAN);
        b.set_std(f64::NAN);
        assert_eq!(a, b);
    }

    #[test]
    fn test_display_lists_every_slot() {
        let mut metric = CohortMetric::new("group=x");
        metric.set_mean(2.5);
        let rendered = format!("{}", metric);
        assert!(rendered.starts_with("Cohort: group=x"));
        assert!(rendered.contains("mean: 2.5"));
        assert!(rendered.contains("median: -"));
    }
}
