//! Descriptive statistic kernels over `f64` slices.
//!
//! Every kernel returns `Option<f64>`, where `None` marks an undefined
//! result: an empty sample, or fewer than two observations for the sample
//! standard deviation. Undefined is a value here, never an error; callers
//! decide what to do with it.
//!
//! Missing values are expected to be removed before a kernel is called.
//! NaN entries propagate through `mean`, `median` and `sample_std`; `min`
//! and `max` skip them.

/// Arithmetic mean. `None` for an empty sample.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let sum: f64 = values.iter().sum();
    Some(sum / values.len() as f64)
}

/// Median over a sorted copy, averaging the two middle elements for even
/// lengths. `None` for an empty sample.
pub fn median(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    let mut sorted = values.to_vec();
    sorted.sort_by(f64::total_cmp);
    let n = sorted.len();
    if n % 2 == 0 {
        Some((sorted[n / 2 - 1] + sorted[n / 2]) / 2.0)
    } else {
        Some(sorted[n / 2])
    }
}

/// Sample standard deviation with divisor n − 1. `None` for fewer than two
/// observations.
pub fn sample_std(values: &[f64]) -> Option<f64> {
    if values.len() < 2 {
        return None;
    }
    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / (n - 1.0);
    Some(variance.sqrt())
}

/// Smallest comparable value. `None` when no comparable value exists.
pub fn min(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .reduce(f64::min)
}

/// Largest comparable value. `None` when no comparable value exists.
pub fn max(values: &[f64]) -> Option<f64> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .reduce(f64::max)
}
