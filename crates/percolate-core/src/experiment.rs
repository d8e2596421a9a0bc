//! Monte Carlo estimation of the percolation threshold.
//!
//! Runs T independent trials, each opening uniformly random sites on a
//! fresh grid until it percolates, and aggregates the open-site
//! fractions into a mean, a sample standard deviation, and a 95%
//! confidence interval under the normal approximation.
//!
//! The random source is injected rather than ambient: callers pass any
//! [`rand::Rng`], so a seeded `StdRng` makes a whole experiment
//! reproducible.

use rand::Rng;
use serde::Serialize;

use crate::error::PercolationError;
use crate::grid::PercolationGrid;
use crate::stats;

/// z-value for a two-sided 95% confidence interval.
const CONFIDENCE_95: f64 = 1.96;

/// The recorded outcome of T independent percolation trials on an n×n
/// grid.
///
/// Thresholds are populated once by [`PercolationExperiment::run`] and
/// read-only afterward; the derived statistics are pure functions of
/// them, computed at construction.
#[derive(Debug, Clone)]
pub struct PercolationExperiment {
    side: usize,
    thresholds: Vec<f64>,
    mean: f64,
    stddev: f64,
}

impl PercolationExperiment {
    /// Runs `trials` independent trials on fresh `side`×`side` grids.
    ///
    /// Each trial draws `row` and `col` independently and uniformly
    /// from `[1, side]` and opens that site, repeating until the grid
    /// percolates. Draws are not checked against already-open sites;
    /// `open` is idempotent, so a repeated site costs a wasted draw and
    /// nothing else. This mirrors the reference sampling procedure,
    /// which the estimate's distribution depends on.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::InvalidArgument`] when `side` or
    /// `trials` is zero.
    pub fn run<R: Rng + ?Sized>(
        side: usize,
        trials: usize,
        rng: &mut R,
    ) -> Result<Self, PercolationError> {
        if trials == 0 {
            return Err(PercolationError::InvalidArgument {
                name: "trials",
                value: trials,
            });
        }

        let mut thresholds = Vec::with_capacity(trials);
        for _ in 0..trials {
            // Rejects side == 0 on the first iteration.
            let mut grid = PercolationGrid::new(side)?;
            while !grid.percolates() {
                let row = rng.gen_range(0..side) + 1;
                let col = rng.gen_range(0..side) + 1;
                grid.open(row, col)?;
            }
            thresholds.push(grid.open_site_count() as f64 / (side * side) as f64);
        }

        let mean = stats::mean(&thresholds);
        let stddev = stats::stddev(&thresholds);
        Ok(Self {
            side,
            thresholds,
            mean,
            stddev,
        })
    }

    /// Sample mean of the recorded thresholds.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    /// Sample standard deviation of the recorded thresholds (N−1
    /// denominator). NaN for a single trial; see [`stats::stddev`].
    pub fn stddev(&self) -> f64 {
        self.stddev
    }

    /// Low endpoint of the 95% confidence interval for the threshold.
    pub fn confidence_lo(&self) -> f64 {
        self.mean - CONFIDENCE_95 * self.stddev / (self.trials() as f64).sqrt()
    }

    /// High endpoint of the 95% confidence interval for the threshold.
    pub fn confidence_hi(&self) -> f64 {
        self.mean + CONFIDENCE_95 * self.stddev / (self.trials() as f64).sqrt()
    }

    /// One open-site fraction per trial, in trial order.
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }

    /// Number of trials run.
    pub fn trials(&self) -> usize {
        self.thresholds.len()
    }

    /// Grid side length the trials ran on.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Builds the serializable summary consumed by reporting layers.
    pub fn report(&self) -> ExperimentReport {
        ExperimentReport {
            side: self.side,
            trials: self.trials(),
            mean: self.mean(),
            stddev: self.stddev(),
            confidence_lo: self.confidence_lo(),
            confidence_hi: self.confidence_hi(),
        }
    }
}

/// Summary statistics of a completed experiment.
#[derive(Debug, Clone, Serialize)]
pub struct ExperimentReport {
    /// Grid side length n.
    pub side: usize,
    /// Number of trials run.
    pub trials: usize,
    /// Sample mean of the per-trial thresholds.
    pub mean: f64,
    /// Sample standard deviation of the per-trial thresholds.
    pub stddev: f64,
    /// Low endpoint of the 95% confidence interval.
    pub confidence_lo: f64,
    /// High endpoint of the 95% confidence interval.
    pub confidence_hi: f64,
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    #[test]
    fn run_rejects_zero_side() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            PercolationExperiment::run(0, 10, &mut rng).expect_err("zero side"),
            PercolationError::InvalidArgument {
                name: "side",
                value: 0,
            }
        );
    }

    #[test]
    fn run_rejects_zero_trials() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(
            PercolationExperiment::run(5, 0, &mut rng).expect_err("zero trials"),
            PercolationError::InvalidArgument {
                name: "trials",
                value: 0,
            }
        );
    }

    #[test]
    fn single_site_grid_has_exact_statistics() {
        let mut rng = StdRng::seed_from_u64(7);
        let exp = PercolationExperiment::run(1, 20, &mut rng).expect("valid arguments");
        assert_eq!(exp.mean(), 1.0);
        assert_eq!(exp.stddev(), 0.0);
        assert_eq!(exp.confidence_lo(), 1.0);
        assert_eq!(exp.confidence_hi(), 1.0);
        assert!(exp.thresholds().iter().all(|&t| t == 1.0));
    }

    #[test]
    fn records_one_threshold_per_trial() {
        let mut rng = StdRng::seed_from_u64(3);
        let exp = PercolationExperiment::run(4, 15, &mut rng).expect("valid arguments");
        assert_eq!(exp.trials(), 15);
        assert_eq!(exp.thresholds().len(), 15);
        assert_eq!(exp.side(), 4);
    }

    #[test]
    fn thresholds_are_fractions_of_the_grid() {
        let mut rng = StdRng::seed_from_u64(11);
        let exp = PercolationExperiment::run(5, 10, &mut rng).expect("valid arguments");
        for &t in exp.thresholds() {
            assert!(t > 0.0 && t <= 1.0, "threshold out of range: {t}");
        }
    }

    #[test]
    fn confidence_interval_brackets_the_mean() {
        let mut rng = StdRng::seed_from_u64(5);
        let exp = PercolationExperiment::run(8, 30, &mut rng).expect("valid arguments");
        assert!(exp.confidence_lo() <= exp.mean());
        assert!(exp.mean() <= exp.confidence_hi());
    }

    #[test]
    fn same_seed_reproduces_the_experiment() {
        let mut rng_a = StdRng::seed_from_u64(42);
        let mut rng_b = StdRng::seed_from_u64(42);
        let a = PercolationExperiment::run(6, 12, &mut rng_a).expect("valid arguments");
        let b = PercolationExperiment::run(6, 12, &mut rng_b).expect("valid arguments");
        assert_eq!(a.thresholds(), b.thresholds());
        assert_eq!(a.mean(), b.mean());
    }

    #[test]
    fn single_trial_stddev_is_nan() {
        let mut rng = StdRng::seed_from_u64(9);
        let exp = PercolationExperiment::run(3, 1, &mut rng).expect("valid arguments");
        assert!(exp.stddev().is_nan(), "one trial has no defined spread");
    }

    #[test]
    fn report_matches_accessors() {
        let mut rng = StdRng::seed_from_u64(13);
        let exp = PercolationExperiment::run(4, 8, &mut rng).expect("valid arguments");
        let report = exp.report();
        assert_eq!(report.side, 4);
        assert_eq!(report.trials, 8);
        assert_eq!(report.mean, exp.mean());
        assert_eq!(report.stddev, exp.stddev());
        assert_eq!(report.confidence_lo, exp.confidence_lo());
        assert_eq!(report.confidence_hi, exp.confidence_hi());
    }

    #[test]
    fn report_serializes_to_json() {
        let mut rng = StdRng::seed_from_u64(2);
        let exp = PercolationExperiment::run(1, 3, &mut rng).expect("valid arguments");
        let json = serde_json::to_string(&exp.report()).expect("serializable report");
        assert!(json.contains("\"mean\":1.0"), "json: {json}");
        assert!(json.contains("\"trials\":3"), "json: {json}");
    }
}
