//! Statistic selection for the comparison engine.

use std::fmt;

use cohort_core::descriptive;
use serde::{Deserialize, Serialize};

/// A per-column numeric summary statistic.
///
/// The engine computes exactly the statistics it is handed; anything not
/// selected is absent from the result rather than null-filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Statistic {
    Mean,
    Median,
    Std,
    Min,
    Max,
}

impl Statistic {
    /// The default selection: every supported statistic.
    pub const ALL: [Statistic; 5] = [
        Statistic::Mean,
        Statistic::Median,
        Statistic::Std,
        Statistic::Min,
        Statistic::Max,
    ];

    /// Get the name of this statistic.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Mean => "mean",
            Self::Median => "median",
            Self::Std => "std",
            Self::Min => "min",
            Self::Max => "max",
        }
    }

    /// Apply this statistic to a sample with missing values already
    /// removed. `None` marks an undefined result.
    pub fn apply(&self, values: &[f64]) -> Option<f64> {
        match self {
            Self::Mean => descriptive::mean(values),
            Self::Median => descriptive::median(values),
            Self::Std => descriptive::sample_std(values),
            Self::Min => descriptive::min(values),
            Self::Max => descriptive::max(values),
        }
    }
}

impl fmt::Display for Statistic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}
