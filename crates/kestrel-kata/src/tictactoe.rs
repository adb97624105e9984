//! Tic-tac-toe position evaluation.

use strum_macros::{Display, EnumString};

use crate::error::KataError;

/// A player's mark. The second player is written as a zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
pub enum Mark {
    /// First player.
    #[strum(to_string = "X", serialize = "x")]
    X,
    /// Second player.
    #[strum(to_string = "0", serialize = "O", serialize = "o")]
    O,
}

/// A 3×3 board; `None` is an empty cell.
pub type Board = [[Option<Mark>; 3]; 3];

/// Every row, column and diagonal, as `(row, column)` cells.
const LINES: [[(usize, usize); 3]; 8] = [
    [(0, 0), (0, 1), (0, 2)],
    [(1, 0), (1, 1), (1, 2)],
    [(2, 0), (2, 1), (2, 2)],
    [(0, 0), (1, 0), (2, 0)],
    [(0, 1), (1, 1), (2, 1)],
    [(0, 2), (1, 2), (2, 2)],
    [(0, 0), (1, 1), (2, 2)],
    [(0, 2), (1, 1), (2, 0)],
];

/// The mark that fills a complete row, column or diagonal, if any.
///
/// Boards are not checked for reachability; on an impossible board with
/// two winners, the first line found (rows, then columns, then diagonals)
/// decides.
#[must_use]
pub fn evaluate(board: &Board) -> Option<Mark> {
    LINES.into_iter().find_map(|line| {
        let [a, b, c] = line.map(|(row, column)| board[row][column]);
        match (a, b, c) {
            (Some(first), Some(second), Some(third)) if first == second && second == third => {
                Some(first)
            }
            _ => None,
        }
    })
}

/// Parse a board from three rows of three characters.
///
/// `X` and `0` (or `O`) are marks; a space or `.` is an empty cell.
///
/// # Errors
///
/// Returns [`KataError::InvalidRowLength`] if a row is not three characters
/// long, and [`KataError::InvalidCell`] for any other character.
pub fn parse_board(rows: [&str; 3]) -> Result<Board, KataError> {
    let mut board = Board::default();
    for (row, (cells, text)) in board.iter_mut().zip(rows).enumerate() {
        let found = text.chars().count();
        if found != 3 {
            return Err(KataError::InvalidRowLength { row, found });
        }
        for (column, (cell, c)) in cells.iter_mut().zip(text.chars()).enumerate() {
            *cell = match c {
                ' ' | '.' => None,
                other => Some(
                    other
                        .encode_utf8(&mut [0; 4])
                        .parse::<Mark>()
                        .map_err(|_| KataError::InvalidCell {
                            row,
                            column,
                            found: other,
                        })?,
                ),
            };
        }
    }
    Ok(board)
}
