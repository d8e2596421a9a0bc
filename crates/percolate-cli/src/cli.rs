//! Clap CLI definition: root struct, subcommands, and shared argument types.
use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// A CLI argument that is either a filesystem path or the stdin sentinel `"-"`.
///
/// Parsing `"-"` yields [`PathOrStdin::Stdin`]; anything else yields
/// [`PathOrStdin::Path`].  This avoids stringly-typed handling of the stdin
/// sentinel throughout the codebase.
#[derive(Clone, Debug)]
pub enum PathOrStdin {
    /// Read from standard input.
    Stdin,
    /// Read from the given filesystem path.
    Path(PathBuf),
}

impl std::str::FromStr for PathOrStdin {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s == "-" {
            Ok(PathOrStdin::Stdin)
        } else {
            Ok(PathOrStdin::Path(PathBuf::from(s)))
        }
    }
}

/// Output format for the `stats` subcommand.
#[derive(Clone, Debug, ValueEnum)]
pub enum OutputFormat {
    /// Aligned key/value lines (default).
    Human,
    /// A single pretty-printed JSON object.
    Json,
}

/// All top-level subcommands exposed by the `percolate` binary.
#[derive(Subcommand)]
pub enum Command {
    /// Estimate the percolation threshold via Monte Carlo trials.
    ///
    /// Runs TRIALS independent trials on fresh N×N grids, opening
    /// uniformly random sites until each percolates, and prints the
    /// sample mean, sample standard deviation, and 95% confidence
    /// interval of the open-site fraction.
    Stats {
        /// Grid side length (must be positive).
        #[arg(value_name = "N")]
        side: usize,
        /// Number of independent trials (must be positive).
        #[arg(value_name = "TRIALS")]
        trials: usize,
        /// Seed for the random number generator; omit for an
        /// entropy-seeded, non-reproducible run.
        #[arg(long)]
        seed: Option<u64>,
        /// Output format: human (default) or json.
        #[arg(long, default_value = "human")]
        format: OutputFormat,
    },

    /// Replay a recorded site stream and report the grid's final state.
    ///
    /// The input is whitespace/newline-delimited integers: the grid
    /// side first, then (row, col) pairs opened in order until the
    /// input is exhausted or the grid percolates. Exits 1 if the grid
    /// never percolates.
    Run {
        /// Path to the integer stream, or `-` for stdin.
        #[arg(value_name = "FILE", default_value = "-")]
        input: PathOrStdin,
    },

    /// Print the percolate-core library version.
    Version,
}

/// Root CLI parser for the `percolate` binary.
#[derive(Parser)]
#[command(
    name = "percolate",
    about = "Site percolation simulation and threshold estimation"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}
