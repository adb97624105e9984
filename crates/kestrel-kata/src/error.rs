//! Errors returned by the fallible exercises.

use thiserror::Error;

/// Failure of a kata function.
#[derive(Debug, Error)]
pub enum KataError {
    /// The result does not fit in a 64-bit integer.
    #[error("{operation} overflowed")]
    Overflow {
        /// Operation that overflowed.
        operation: &'static str,
    },

    /// A matrix row has a different length from the first row.
    #[error("{operand} matrix row {row} has {found} columns, expected {expected}")]
    Ragged {
        /// Which operand was ragged (`left` or `right`).
        operand: &'static str,
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// The left matrix's column count differs from the right matrix's row count.
    #[error("cannot multiply: left has {left_columns} columns but right has {right_rows} rows")]
    DimensionMismatch {
        /// Columns in the left operand.
        left_columns: usize,
        /// Rows in the right operand.
        right_rows: usize,
    },

    /// A board cell holds something other than a mark or a blank.
    #[error("invalid tic-tac-toe cell {found:?} at row {row}, column {column}")]
    InvalidCell {
        /// Row of the cell.
        row: usize,
        /// Column of the cell.
        column: usize,
        /// The unexpected character.
        found: char,
    },

    /// A board row is not exactly three cells wide.
    #[error("tic-tac-toe row {row} has {found} cells, expected 3")]
    InvalidRowLength {
        /// Index of the offending row.
        row: usize,
        /// Number of cells found.
        found: usize,
    },

    /// JSON could not be produced or parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
