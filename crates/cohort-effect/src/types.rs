//! Types for effect size representation.

use std::fmt;

/// A standardized mean difference measurement between two groups.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectSize {
    /// Cohen's d magnitude
    pub magnitude: f64,
    /// Interpretation of the magnitude per Cohen's conventions
    pub interpretation: EffectSizeInterpretation,
    /// Sample sizes (group1, group2)
    pub sample_sizes: Option<(usize, usize)>,
}

impl EffectSize {
    /// Create a new effect size; the interpretation is derived from the
    /// magnitude.
    pub fn new(magnitude: f64, sample_sizes: Option<(usize, usize)>) -> Self {
        Self {
            magnitude,
            interpretation: EffectSizeInterpretation::from_magnitude(magnitude),
            sample_sizes,
        }
    }

    /// Absolute magnitude.
    pub fn abs_magnitude(&self) -> f64 {
        self.magnitude.abs()
    }

    /// Whether the effect clears Cohen's "medium" threshold.
    pub fn is_practically_significant(&self) -> bool {
        matches!(
            self.interpretation,
            EffectSizeInterpretation::Medium | EffectSizeInterpretation::Large
        )
    }
}

impl fmt::Display for EffectSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cohen's d: {:.3} ({})", self.magnitude, self.interpretation)
    }
}

/// Interpretation of a standardized mean difference following Cohen's
/// conventions (0.2 / 0.5 / 0.8).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EffectSizeInterpretation {
    Negligible,
    Small,
    Medium,
    Large,
}

impl EffectSizeInterpretation {
    pub fn from_magnitude(magnitude: f64) -> Self {
        let abs = magnitude.abs();
        if abs < 0.2 {
            Self::Negligible
        } else if abs < 0.5 {
            Self::Small
        } else if abs < 0.8 {
            Self::Medium
        } else {
            Self::Large
        }
    }
}

impl fmt::Display for EffectSizeInterpretation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Negligible => "negligible",
            Self::Small => "small",
            Self::Medium => "medium",
            Self::Large => "large",
        };
        write!(f, "{}", s)
    }
}
