//! Errors raised while building a grid.

/// Reasons a board cannot be constructed.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GridError {
    /// The board has no rows or no columns.
    #[error("grid must have at least one row and one column")]
    Empty,

    /// A row's length differs from the first row's.
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// A plain-text board contained a character that is neither alive nor dead.
    #[error("unexpected character {ch:?} at line {line}, column {column}")]
    InvalidChar { line: usize, column: usize, ch: char },

    /// Random fill probability outside [0, 1].
    #[error("density {0} is outside 0.0..=1.0")]
    InvalidDensity(f64),
}
