//! Cohort comparison and effect-size analysis for tabular data.
//!
//! This crate re-exports the workspace members:
//!
//! - `cohort-core`: descriptive statistic kernels and float comparison
//!   helpers
//! - `cohort-effect`: Cohen's d over raw numeric samples
//! - `cohort-frame`: the Polars-facing cohort comparison engine
//!
//! # Example
//!
//! ```
//! use cohort_stats::CohenD;
//!
//! let effect = CohenD::new()
//!     .compute(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0])
//!     .unwrap();
//! assert!(effect.magnitude < 0.0);
//! ```

pub use cohort_core::{descriptive, float};
pub use cohort_effect::{cohen_d, CohenD, EffectSize, EffectSizeInterpretation};
pub use cohort_frame::{
    CohortMetric, CohortStatsExt, CohortSummary, Error, Result, Statistic,
};
