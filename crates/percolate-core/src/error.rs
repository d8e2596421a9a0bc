//! Error types shared across the percolation core.
//!
//! Two failure categories exist, both local and non-recoverable:
//! a constructor was given a non-positive size/count, or a query named
//! an element outside its structure. Every method validates before
//! touching mutable state, so a failed call never leaves a grid or
//! union-find partially updated.

/// All error conditions the percolation core can produce.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PercolationError {
    /// A size or count argument was zero where a positive value is required.
    InvalidArgument {
        /// The argument's name (e.g. `"side"`, `"trials"`, `"universe"`).
        name: &'static str,
        /// The rejected value.
        value: usize,
    },
    /// An index fell outside its valid range.
    ///
    /// Covers both 1-indexed grid coordinates (`min == 1`) and raw
    /// union-find element ordinals (`min == 0`).
    IndexOutOfRange {
        /// The index's name (e.g. `"row"`, `"col"`, `"element"`).
        name: &'static str,
        /// The rejected value.
        value: usize,
        /// The smallest valid value.
        min: usize,
        /// The largest valid value.
        max: usize,
    },
}

impl std::fmt::Display for PercolationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PercolationError::InvalidArgument { name, value } => {
                write!(f, "{name} must be positive, got {value}")
            }
            PercolationError::IndexOutOfRange {
                name,
                value,
                min,
                max,
            } => {
                write!(f, "{name} {value} is outside the valid range {min}..={max}")
            }
        }
    }
}

impl std::error::Error for PercolationError {}
