#![deny(clippy::print_stdout, clippy::print_stderr)]

//! Site percolation on an n×n grid, with Monte Carlo estimation of the
//! percolation threshold.
//!
//! The model keeps two weighted quick-union structures per grid — one
//! wired to both virtual sites for the percolation query, one without
//! the bottom virtual shortcut for a backwash-free fullness query. See
//! the [`grid`] module docs for the full rationale.

pub mod error;
pub mod experiment;
pub mod grid;
pub mod stats;
pub mod union_find;

pub use error::PercolationError;
pub use experiment::{ExperimentReport, PercolationExperiment};
pub use grid::PercolationGrid;
pub use union_find::UnionFind;

/// Returns the current version of the percolate-core library.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
