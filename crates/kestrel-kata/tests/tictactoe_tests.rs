//! Tests for tic-tac-toe evaluation.

use kestrel_kata::KataError;
use kestrel_kata::tictactoe::{Board, Mark, evaluate, parse_board};

fn board(rows: [&str; 3]) -> Board {
    parse_board(rows).unwrap()
}

#[test]
fn test_row_winner() {
    assert_eq!(evaluate(&board(["XXX", " 0 ", "0  "])), Some(Mark::X));
    assert_eq!(evaluate(&board(["X X", "000", "X  "])), Some(Mark::O));
}

#[test]
fn test_column_winner() {
    assert_eq!(evaluate(&board(["X0 ", "X0 ", " 0X"])), Some(Mark::O));
    assert_eq!(evaluate(&board(["0 X", "0 X", "  X"])), Some(Mark::X));
}

#[test]
fn test_diagonal_winner() {
    assert_eq!(evaluate(&board(["X0 ", "0X ", "  X"])), Some(Mark::X));
    assert_eq!(evaluate(&board(["X 0", " 0 ", "0 X"])), Some(Mark::O));
}

#[test]
fn test_no_winner() {
    assert_eq!(evaluate(&board(["X0X", "X0X", "0X0"])), None);
    assert_eq!(evaluate(&board(["   ", "   ", "   "])), None);
    assert_eq!(evaluate(&board(["X. ", ".0.", " .X"])), None);
}

#[test]
fn test_board_literal() {
    let board: Board = [
        [Some(Mark::X), None, Some(Mark::O)],
        [None, Some(Mark::X), Some(Mark::O)],
        [None, None, Some(Mark::O)],
    ];
    assert_eq!(evaluate(&board), Some(Mark::O));
}

#[test]
fn test_mark_display() {
    assert_eq!(Mark::X.to_string(), "X");
    assert_eq!(Mark::O.to_string(), "0");
}

#[test]
fn test_parse_accepts_letter_o() {
    assert_eq!(evaluate(&board(["OOO", "XX ", "X  "])), Some(Mark::O));
}

#[test]
fn test_parse_accepts_lowercase_marks() {
    assert_eq!(evaluate(&board(["xxx", "oo ", "   "])), Some(Mark::X));
    assert_eq!(
        parse_board(["x o", "   ", "   "]).unwrap()[0],
        [Some(Mark::X), None, Some(Mark::O)]
    );
}

#[test]
fn test_parse_invalid_cell() {
    assert!(matches!(
        parse_board(["XXX", "0?0", "   "]),
        Err(KataError::InvalidCell {
            row: 1,
            column: 1,
            found: '?'
        })
    ));
}

#[test]
fn test_parse_invalid_row_length() {
    assert!(matches!(
        parse_board(["XXX", "00", "   "]),
        Err(KataError::InvalidRowLength { row: 1, found: 2 })
    ));
}
