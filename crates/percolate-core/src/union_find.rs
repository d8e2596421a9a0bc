//! Union-Find (disjoint set) data structure for connectivity queries.
//!
//! This is the weighted quick-union variant: `union` re-points the root
//! of the smaller tree at the root of the larger one, which bounds tree
//! height at log₂(n) without path compression. Skipping compression
//! keeps [`UnionFind::find`] a `&self` method, so the two structures a
//! grid carries can answer read-only queries without interior
//! mutability.

use crate::error::PercolationError;

/// A disjoint-set structure over a fixed universe of `usize` ordinals.
///
/// Each element is identified by an ordinal in `[0, universe)` supplied
/// at construction time. The universe never grows or shrinks.
///
/// # Determinism
///
/// When two trees of equal size are merged, `q`'s root is attached
/// under `p`'s root, so a given call sequence always produces the same
/// representatives.
#[derive(Debug, Clone)]
pub struct UnionFind {
    /// `parent[i]` points toward `i`'s representative; a root points at
    /// itself.
    parent: Vec<usize>,
    /// Subtree sizes, meaningful only at roots.
    size: Vec<usize>,
}

impl UnionFind {
    /// Creates `universe` singleton sets, each of size 1.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::InvalidArgument`] when `universe` is
    /// zero.
    pub fn new(universe: usize) -> Result<Self, PercolationError> {
        if universe == 0 {
            return Err(PercolationError::InvalidArgument {
                name: "universe",
                value: universe,
            });
        }
        Ok(Self {
            parent: (0..universe).collect(),
            size: vec![1; universe],
        })
    }

    /// Returns the representative of the set containing `x`.
    ///
    /// Follows parent pointers until it reaches a self-pointing root.
    /// Weighted union keeps the chain at most log₂(universe) long.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::IndexOutOfRange`] when
    /// `x >= self.len()`.
    pub fn find(&self, mut x: usize) -> Result<usize, PercolationError> {
        self.check_bounds(x)?;
        while self.parent[x] != x {
            x = self.parent[x];
        }
        Ok(x)
    }

    /// Merges the sets containing `p` and `q`.
    ///
    /// No-op when the two are already in the same set. Otherwise the
    /// smaller tree's root is re-pointed at the larger tree's root and
    /// the surviving root accumulates both sizes. On a size tie, `q`'s
    /// root goes under `p`'s root.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::IndexOutOfRange`] when either
    /// ordinal is outside the universe.
    pub fn union(&mut self, p: usize, q: usize) -> Result<(), PercolationError> {
        let rp = self.find(p)?;
        let rq = self.find(q)?;

        if rp == rq {
            return Ok(());
        }

        let (child, root) = if self.size[rp] < self.size[rq] {
            (rp, rq)
        } else {
            (rq, rp)
        };
        self.parent[child] = root;
        self.size[root] += self.size[child];
        Ok(())
    }

    /// Returns `true` when `p` and `q` share a representative.
    ///
    /// # Errors
    ///
    /// Returns [`PercolationError::IndexOutOfRange`] when either
    /// ordinal is outside the universe.
    pub fn connected(&self, p: usize, q: usize) -> Result<bool, PercolationError> {
        Ok(self.find(p)? == self.find(q)?)
    }

    /// Returns the number of elements in the universe.
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    /// Returns `true` if the universe is empty.
    ///
    /// Unreachable through [`UnionFind::new`], which rejects an empty
    /// universe, but kept for API completeness.
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    fn check_bounds(&self, x: usize) -> Result<(), PercolationError> {
        if x >= self.parent.len() {
            return Err(PercolationError::IndexOutOfRange {
                name: "element",
                value: x,
                min: 0,
                max: self.parent.len() - 1,
            });
        }
        Ok(())
    }
}
