//! Implementation of `percolate run [FILE|-]`.
//!
//! Replays a recorded site stream against a fresh grid. The stream is
//! whitespace/newline-delimited integers: the grid side first, then
//! (row, col) pairs, opened in order. Reading stops as soon as the grid
//! percolates; remaining pairs are ignored.
//!
//! On exit the final state is printed as aligned key/value lines:
//! side, open site count, and whether the grid percolates.
//!
//! Exit codes: 0 = percolated, 1 = stream exhausted without
//! percolation, 2 = unreadable or malformed input.

use percolate_core::PercolationGrid;

use crate::cli::PathOrStdin;
use crate::error::CliError;
use crate::io::read_input;

/// Runs the `run` command.
///
/// # Errors
///
/// Returns [`CliError`] with exit code 2 when the input cannot be read
/// or parsed, and [`CliError::DidNotPercolate`] (exit code 1) when the
/// stream ends before the grid percolates.
pub fn run(input: &PathOrStdin) -> Result<(), CliError> {
    let content = read_input(input)?;
    let grid = replay(&content)?;

    println!("side:       {}", grid.side());
    println!("open sites: {}", grid.open_site_count());
    println!("percolates: {}", grid.percolates());

    if grid.percolates() {
        Ok(())
    } else {
        Err(CliError::DidNotPercolate {
            open_sites: grid.open_site_count(),
        })
    }
}

/// Parses and replays `content`, returning the final grid.
fn replay(content: &str) -> Result<PercolationGrid, CliError> {
    let mut tokens = content.split_whitespace();

    let side = match tokens.next() {
        Some(tok) => parse_int(tok, "grid side")?,
        None => {
            return Err(CliError::MalformedInput {
                detail: "empty input; expected the grid side first".to_owned(),
            });
        }
    };

    let mut grid = PercolationGrid::new(side).map_err(CliError::from_core)?;

    while !grid.percolates() {
        let Some(row_tok) = tokens.next() else {
            break;
        };
        let Some(col_tok) = tokens.next() else {
            return Err(CliError::MalformedInput {
                detail: format!("row {row_tok} has no matching column"),
            });
        };

        let row = parse_int(row_tok, "row")?;
        let col = parse_int(col_tok, "col")?;
        grid.open(row, col).map_err(CliError::from_core)?;
    }

    Ok(grid)
}

/// Parses a single non-negative integer token.
fn parse_int(token: &str, what: &str) -> Result<usize, CliError> {
    token.parse().map_err(|_| CliError::MalformedInput {
        detail: format!("expected an integer for {what}, got {token:?}"),
    })
}

#[cfg(test)]
mod tests {
    #![allow(clippy::expect_used)]

    use super::*;

    #[test]
    fn replays_a_percolating_stream() {
        let grid = replay("3\n1 1\n2 1\n3 1\n").expect("valid stream");
        assert!(grid.percolates());
        assert_eq!(grid.open_site_count(), 3);
    }

    #[test]
    fn stops_reading_once_percolated() {
        // The pair after percolation must not be opened.
        let grid = replay("2\n1 1\n2 1\n2 2\n").expect("valid stream");
        assert!(grid.percolates());
        assert_eq!(grid.open_site_count(), 2);
    }

    #[test]
    fn exhausted_stream_leaves_a_non_percolating_grid() {
        let grid = replay("3\n2 2\n").expect("valid stream");
        assert!(!grid.percolates());
        assert_eq!(grid.open_site_count(), 1);
    }

    #[test]
    fn empty_input_is_malformed() {
        let e = replay("").expect_err("empty input");
        assert!(matches!(e, CliError::MalformedInput { .. }));
    }

    #[test]
    fn non_integer_token_is_malformed() {
        let e = replay("3\nx y\n").expect_err("non-integer row");
        assert!(matches!(e, CliError::MalformedInput { .. }));
    }

    #[test]
    fn negative_token_is_malformed() {
        let e = replay("3\n-1 2\n").expect_err("negative row");
        assert!(matches!(e, CliError::MalformedInput { .. }));
    }

    #[test]
    fn dangling_row_is_malformed() {
        let e = replay("3\n1 1\n2\n").expect_err("dangling row");
        assert!(matches!(e, CliError::MalformedInput { .. }));
    }

    #[test]
    fn zero_side_is_invalid_argument() {
        let e = replay("0\n").expect_err("zero side");
        assert!(matches!(
            e,
            CliError::InvalidArgument { name: "side", .. }
        ));
    }

    #[test]
    fn out_of_range_coordinate_is_malformed() {
        let e = replay("3\n4 1\n").expect_err("row outside the grid");
        assert!(matches!(e, CliError::MalformedInput { .. }));
    }
}
