//! Crate-wide error type.

use thiserror::Error;

/// Errors surfaced by model constructors and solver runners.
///
/// Budget exhaustion is deliberately *not* an error: a runner that burns
/// through its restart or step budget returns its result struct with
/// `solved == false` and the best permutation it saw.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueensError {
    /// Board size must be at least 1. A zero-sized board has no rows to
    /// place on and would make the diagonal counter arrays empty.
    #[error("board size must be at least 1, got {0}")]
    InvalidSize(usize),

    /// A permutation handed to the model has the wrong shape.
    #[error("permutation value {col} at row {row} is outside [0, {size})")]
    ColumnOutOfRange {
        /// Row holding the offending value.
        row: usize,
        /// The out-of-range column value.
        col: usize,
        /// Board size the value was checked against.
        size: usize,
    },

    /// A configuration field is out of its valid range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}
