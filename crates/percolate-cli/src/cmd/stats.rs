//! Implementation of `percolate stats <N> <TRIALS>`.
//!
//! Runs the Monte Carlo experiment and prints the threshold estimate:
//! sample mean, sample standard deviation, and the 95% confidence
//! interval. With `--seed` the run is reproducible; without it the RNG
//! is seeded from OS entropy.
//!
//! Exit codes: 0 = success, 2 = invalid argument.

use percolate_core::PercolationExperiment;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::render_report;

/// Runs the `stats` command.
///
/// # Errors
///
/// Returns [`CliError::InvalidArgument`] (exit code 2) when `side` or
/// `trials` is zero.
pub fn run(
    side: usize,
    trials: usize,
    seed: Option<u64>,
    format: &OutputFormat,
) -> Result<(), CliError> {
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let experiment =
        PercolationExperiment::run(side, trials, &mut rng).map_err(CliError::from_core)?;

    println!("{}", render_report(&experiment.report(), format)?);
    Ok(())
}
