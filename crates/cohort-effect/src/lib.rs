//! Effect size measurement between cohorts.
//!
//! Effect sizes quantify the magnitude of a difference between two groups,
//! independent of sample size. This crate implements the standardized mean
//! difference (Cohen's d) over raw numeric samples; dataframe-level
//! variants live in `cohort-frame`.
//!
//! # Example
//!
//! ```
//! use cohort_effect::CohenD;
//!
//! let effect = CohenD::new()
//!     .compute(&[1.0, 2.0, 3.0], &[4.0, 5.0, 6.0])
//!     .unwrap();
//! assert!(effect.magnitude < 0.0);
//! ```

mod cohen_d;
mod types;

pub use cohen_d::CohenD;
pub use types::{EffectSize, EffectSizeInterpretation};

/// Convenience constructor for the default Cohen's d estimator.
pub fn cohen_d() -> CohenD {
    CohenD::new()
}
