//! Descriptive statistics over recorded trial thresholds.
//!
//! Only the two quantities the experiment consumes: arithmetic mean and
//! sample standard deviation. Callers guarantee non-empty input (trial
//! counts are validated at construction), so the functions are
//! infallible over `f64`.

/// Arithmetic mean of `data`.
pub fn mean(data: &[f64]) -> f64 {
    data.iter().sum::<f64>() / data.len() as f64
}

/// Sample standard deviation of `data` (N−1 denominator).
///
/// For a single observation the sample variance is 0/0, so the result
/// is NaN. That boundary is deliberate: a one-trial experiment has no
/// defined spread, and callers decide whether to guard.
pub fn stddev(data: &[f64]) -> f64 {
    let m = mean(data);
    let sum_sq: f64 = data.iter().map(|x| (x - m) * (x - m)).sum();
    (sum_sq / (data.len() as f64 - 1.0)).sqrt()
}
