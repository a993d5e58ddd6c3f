//! Polars integration for cohort comparison statistics.
//!
//! This crate provides an extension trait on Polars DataFrames for
//! partitioning a table into cohorts, summarizing each cohort's numeric
//! and categorical columns, and measuring effect sizes between binary
//! groups.
//!
//! # Example
//!
//! ```
//! use polars::prelude::*;
//! use cohort_frame::{CohortStatsExt, Statistic};
//!
//! let df = df![
//!     "group" => &["x", "x", "y"],
//!     "val" => &[1.0, 2.0, 10.0],
//! ]
//! .unwrap();
//!
//! let cohorts = df.cohort_compare(&["group"], &Statistic::ALL).unwrap();
//! assert_eq!(cohorts["group=x"].stat("val", Statistic::Mean), Some(1.5));
//! ```

mod columns;
mod compare;
mod config;
mod effect;
mod error;
mod metric;
mod split;
mod traits;

pub use config::Statistic;
pub use error::{Error, Result};
pub use metric::{CohortMetric, CohortSummary};
pub use traits::CohortStatsExt;

// Re-export the effect-size types alongside the trait methods that return
// them.
pub use cohort_effect::{CohenD, EffectSize, EffectSizeInterpretation};
