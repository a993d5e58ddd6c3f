//! Two-sample Cohen's d.
//!
//! The effect size is calculated as:
//!
//! d = (mean₁ − mean₂) / sqrt((s₁² + s₂²) / 2)
//!
//! with sample standard deviations. A zero or undefined pooled deviation
//! (a group with fewer than two observations) yields a magnitude of
//! exactly 0.0; a group that is empty once missing values are dropped
//! makes the whole result undefined.

use cohort_core::descriptive::{mean, sample_std};

use crate::EffectSize;

/// Cohen's d estimator over two raw numeric samples.
///
/// NaN entries are the missing-value marker for raw samples and are
/// dropped per group before any arithmetic.
#[derive(Debug, Clone, Copy, Default)]
pub struct CohenD;

impl CohenD {
    pub fn new() -> Self {
        Self
    }

    /// Compute the effect size between two samples.
    ///
    /// Returns `None` when either group has no observations left after
    /// dropping missing values — undefined, as opposed to the zero
    /// magnitude produced by a degenerate pooled deviation.
    pub fn compute(&self, group1: &[f64], group2: &[f64]) -> Option<EffectSize> {
        let g1: Vec<f64> = group1.iter().copied().filter(|x| !x.is_nan()).collect();
        let g2: Vec<f64> = group2.iter().copied().filter(|x| !x.is_nan()).collect();
        if g1.is_empty() || g2.is_empty() {
            return None;
        }

        let mean_diff = mean(&g1)? - mean(&g2)?;
        let magnitude = match (sample_std(&g1), sample_std(&g2)) {
            (Some(s1), Some(s2)) => {
                let pooled = ((s1 * s1 + s2 * s2) / 2.0).sqrt();
                if pooled == 0.0 || pooled.is_nan() {
                    0.0
                } else {
                    mean_diff / pooled
                }
            }
            _ => 0.0,
        };

        Some(EffectSize::new(magnitude, Some((g1.len(), g2.len()))))
    }
}
