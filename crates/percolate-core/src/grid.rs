//! The n×n percolation grid.
//!
//! Connectivity is tracked by two [`UnionFind`] structures over the
//! same universe of n² sites plus two virtual sites (one above the top
//! row, one below the bottom row). The `full` structure wires open
//! top-row sites to the top virtual site and open bottom-row sites to
//! the bottom virtual site, turning "does the system percolate?" into
//! a single connectivity query between the two virtual sites.
//!
//! A single structure cannot also answer "is this site full?": once the
//! system percolates, every open bottom-row site is connected to the
//! top *through the bottom virtual site*, so sites with no open path to
//! the top row would test as full (backwash). The `backwash` structure
//! carries identical wiring except the bottom virtual site is never
//! connected, and answers the fullness query correctly at the cost of
//! doubling the union-find memory and per-open work.

use crate::error::PercolationError;
use crate::union_find::UnionFind;

/// Number of virtual sites appended to the site universe.
const VIRTUAL_SITES: usize = 2;

/// An n×n grid of sites, each open or blocked, with amortized
/// near-constant-time percolation and fullness queries.
///
/// Rows and columns are 1-indexed, matching the conventional
/// presentation of the model; internal storage is 0-indexed in
/// row-major order.
///
/// Opening a site is monotonic: a site never closes, and the grid
/// remains queryable after it percolates.
#[derive(Debug, Clone)]
pub struct PercolationGrid {
    /// Grid side length n.
    side: usize,
    /// Total number of grid sites, n².
    site_count: usize,
    /// Row-major open/blocked flags.
    open_sites: Vec<bool>,
    /// Running count of open sites.
    open_count: usize,
    /// Wired to both virtual sites; answers [`PercolationGrid::percolates`].
    full: UnionFind,
    /// Wired to the top virtual site only; answers [`PercolationGrid::is_full`].
    backwash: UnionFind,
    /// Ordinal of the top virtual site (`side²`).
    top: usize,
    /// Ordinal of the bottom virtual site (`side² + 1`).
    bottom: usize,
}

impl PercolationGrid {
    /// Creates an n×n grid with every site blocked.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::InvalidArgument`] when `side` is
    /// zero.
    pub fn new(side: usize) -> Result<Self, PercolationError> {
        if side == 0 {
            return Err(PercolationError::InvalidArgument {
                name: "side",
                value: side,
            });
        }
        let site_count = side * side;
        Ok(Self {
            side,
            site_count,
            open_sites: vec![false; site_count],
            open_count: 0,
            full: UnionFind::new(site_count + VIRTUAL_SITES)?,
            backwash: UnionFind::new(site_count + VIRTUAL_SITES)?,
            top: site_count,
            bottom: site_count + 1,
        })
    }

    /// Opens the site at (`row`, `col`) if it is not open already.
    ///
    /// A newly opened site is unioned, in both structures, with each
    /// orthogonal neighbor that exists and is already open; top-row
    /// sites are unioned with the top virtual site, and bottom-row
    /// sites with the bottom virtual site in `full` only. Opening an
    /// already-open site is a no-op.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::IndexOutOfRange`] when either
    /// coordinate is outside `[1, side]`; the grid is left untouched.
    pub fn open(&mut self, row: usize, col: usize) -> Result<(), PercolationError> {
        let index = self.index_of(row, col)?;

        if self.open_sites[index] {
            return Ok(());
        }

        self.open_sites[index] = true;
        self.open_count += 1;

        if row == 1 {
            self.full.union(index, self.top)?;
            self.backwash.union(index, self.top)?;
        } else if self.open_sites[index - self.side] {
            self.full.union(index, index - self.side)?;
            self.backwash.union(index, index - self.side)?;
        }

        if row == self.side {
            // Bottom virtual wiring stays out of `backwash`; see the
            // module docs.
            self.full.union(index, self.bottom)?;
        }
        if row < self.side && self.open_sites[index + self.side] {
            self.full.union(index, index + self.side)?;
            self.backwash.union(index, index + self.side)?;
        }

        if col > 1 && self.open_sites[index - 1] {
            self.full.union(index, index - 1)?;
            self.backwash.union(index, index - 1)?;
        }
        if col < self.side && self.open_sites[index + 1] {
            self.full.union(index, index + 1)?;
            self.backwash.union(index, index + 1)?;
        }

        Ok(())
    }

    /// Returns `true` when the site at (`row`, `col`) is open.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::IndexOutOfRange`] when either
    /// coordinate is outside `[1, side]`.
    pub fn is_open(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        Ok(self.open_sites[self.index_of(row, col)?])
    }

    /// Returns `true` when the site at (`row`, `col`) is full: open and
    /// connected to the top row through a chain of open neighbors.
    ///
    /// The query runs against `backwash`, which lacks the bottom
    /// virtual shortcut, so a site that is merely on the same
    /// percolating cluster as the bottom row does not test as full.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::IndexOutOfRange`] when either
    /// coordinate is outside `[1, side]`.
    pub fn is_full(&self, row: usize, col: usize) -> Result<bool, PercolationError> {
        let index = self.index_of(row, col)?;
        if !self.open_sites[index] {
            return Ok(false);
        }
        self.backwash.connected(index, self.top)
    }

    /// Returns the number of open sites, O(1).
    pub fn open_site_count(&self) -> usize {
        self.open_count
    }

    /// Returns `true` when an open path connects the top row to the
    /// bottom row.
    ///
    /// For `side == 1`, opening the single site unions it with both
    /// virtual sites directly, so the degenerate case needs no special
    /// handling.
    pub fn percolates(&self) -> bool {
        // `top` and `bottom` are valid ordinals by construction.
        matches!(self.full.connected(self.top, self.bottom), Ok(true))
    }

    /// Returns the grid side length n.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Maps a 1-indexed (`row`, `col`) pair to its row-major storage
    /// index. The single place the off-by-one arithmetic lives.
    fn index_of(&self, row: usize, col: usize) -> Result<usize, PercolationError> {
        if row < 1 || row > self.side {
            return Err(PercolationError::IndexOutOfRange {
                name: "row",
                value: row,
                min: 1,
                max: self.side,
            });
        }
        if col < 1 || col > self.side {
            return Err(PercolationError::IndexOutOfRange {
                name: "col",
                value: col,
                min: 1,
                max: self.side,
            });
        }
        Ok((row - 1) * self.side + (col - 1))
    }
}
