//! Entry point for the `percolate` binary: parse, dispatch, report.
//!
//! Errors are printed to stderr via [`CliError::message`] and mapped to
//! their stable exit code (2 = input failure, 1 = logical failure).

mod cli;
mod cmd;
mod error;
mod format;
mod io;

use clap::Parser;

use crate::cli::{Cli, Command};
use crate::error::CliError;

fn main() {
    let cli = Cli::parse();

    let result: Result<(), CliError> = match cli.command {
        Command::Stats {
            side,
            trials,
            seed,
            format,
        } => cmd::stats::run(side, trials, seed, &format),
        Command::Run { input } => cmd::run::run(&input),
        Command::Version => {
            println!("{}", percolate_core::version());
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("{}", e.message());
        std::process::exit(e.exit_code());
    }
}
