//! Dense integer matrices stored as rows.

use crate::error::KataError;

/// A row-major matrix.
pub type Matrix = Vec<Vec<i64>>;

/// Number of columns, checking that every row has the same length.
fn columns(matrix: &[Vec<i64>], operand: &'static str) -> Result<usize, KataError> {
    let expected = matrix.first().map_or(0, Vec::len);
    match matrix.iter().position(|row| row.len() != expected) {
        Some(row) => Err(KataError::Ragged {
            operand,
            row,
            expected,
            found: matrix[row].len(),
        }),
        None => Ok(expected),
    }
}

/// Matrix product `left × right`.
///
/// An `n × m` matrix times an `m × p` matrix gives an `n × p` matrix. An
/// empty left operand gives an empty product.
///
/// # Errors
///
/// - [`KataError::Ragged`] if either operand has rows of differing length
/// - [`KataError::DimensionMismatch`] if `left` has a different number of
///   columns than `right` has rows
/// - [`KataError::Overflow`] if any intermediate value overflows `i64`
pub fn multiply(left: &[Vec<i64>], right: &[Vec<i64>]) -> Result<Matrix, KataError> {
    let inner = columns(left, "left")?;
    let width = columns(right, "right")?;

    if !left.is_empty() && inner != right.len() {
        return Err(KataError::DimensionMismatch {
            left_columns: inner,
            right_rows: right.len(),
        });
    }

    left.iter()
        .map(|row| {
            (0..width)
                .map(|column| dot(row, right, column))
                .collect::<Result<Vec<_>, _>>()
        })
        .collect()
}

/// Dot product of `row` with column `column` of `right`.
fn dot(row: &[i64], right: &[Vec<i64>], column: usize) -> Result<i64, KataError> {
    row.iter()
        .zip(right)
        .try_fold(0_i64, |acc, (value, right_row)| {
            value
                .checked_mul(right_row[column])
                .and_then(|product| acc.checked_add(product))
        })
        .ok_or(KataError::Overflow {
            operation: "matrix product",
        })
}
