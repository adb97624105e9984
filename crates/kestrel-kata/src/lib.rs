//! Standalone exercises that share nothing but a workspace.
//!
//! Every function here is pure. None of them depend on each other.
//!
//! - [`numbers`] - `FizzBuzz`, factorial, digit sums, Luhn checksum
//! - [`text`] - interval formatting, bracket balancing, common directory
//! - [`geometry`] - rectangle overlap, point in circle
//! - [`matrix`] - integer matrix product
//! - [`tictactoe`] - winner of a 3×3 board
//! - [`json`] - typed JSON round trips

/// Error type shared by the fallible exercises.
pub mod error;
/// Axis-aligned rectangles and circles.
pub mod geometry;
/// JSON serialization onto a target type.
pub mod json;
/// Dense integer matrices.
pub mod matrix;
/// Integer exercises.
pub mod numbers;
/// String exercises.
pub mod text;
/// Tic-tac-toe board evaluation.
pub mod tictactoe;

pub use error::KataError;
