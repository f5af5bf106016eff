//! Dense integer matrix multiplication.
//!
//! Operands are row-major `Vec<Vec<Cost>>`, the same shape [`CostMatrix::to_dense`] produces.
//!
//! [`CostMatrix::to_dense`]: crate::CostMatrix::to_dense

use nalgebra::DMatrix;

use crate::error::{Error, Result};
use crate::graph::Cost;

/// Returns `a · b`, or [`Error::Overflow`] naming the first product cell that does not fit
/// in a [`Cost`].
///
/// ```
/// let a = vec![vec![1, 2, 3], vec![4, 5, 6]];
/// let b = vec![vec![7, 8], vec![9, 10], vec![11, 12]];
/// assert_eq!(
///     adjmat::matrix::multiply(&a, &b)?,
///     vec![vec![58, 64], vec![139, 154]]
/// );
/// # Ok::<(), adjmat::Error>(())
/// ```
pub fn multiply(a: &[Vec<Cost>], b: &[Vec<Cost>]) -> Result<Vec<Vec<Cost>>> {
    let lhs = to_dmatrix(a)?;
    let rhs = to_dmatrix(b)?;
    if lhs.nrows() == 0 {
        return Ok(Vec::new());
    }
    if lhs.ncols() != rhs.nrows() {
        return Err(Error::DimensionMismatch {
            left_cols: lhs.ncols(),
            right_rows: rhs.nrows(),
        });
    }

    (0..lhs.nrows())
        .map(|row| {
            (0..rhs.ncols())
                .map(|col| checked_dot(&lhs, &rhs, row, col).ok_or(Error::Overflow { row, col }))
                .collect::<Result<Vec<_>>>()
        })
        .collect()
}

fn checked_dot(lhs: &DMatrix<Cost>, rhs: &DMatrix<Cost>, row: usize, col: usize) -> Option<Cost> {
    lhs.row(row)
        .iter()
        .zip(rhs.column(col).iter())
        .try_fold(0 as Cost, |acc, (&x, &y)| acc.checked_add(x.checked_mul(y)?))
}

fn to_dmatrix(rows: &[Vec<Cost>]) -> Result<DMatrix<Cost>> {
    let ncols = rows.first().map_or(0, Vec::len);
    for (row, values) in rows.iter().enumerate() {
        if values.len() != ncols {
            return Err(Error::RaggedMatrix {
                row,
                expected: ncols,
                found: values.len(),
            });
        }
    }
    Ok(DMatrix::from_fn(rows.len(), ncols, |r, c| rows[r][c]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dot_stops_at_overflow() {
        let lhs = DMatrix::from_row_slice(1, 2, &[Cost::MAX, 1]);
        let rhs = DMatrix::from_row_slice(2, 1, &[1, 1]);
        assert_eq!(checked_dot(&lhs, &rhs, 0, 0), None);
        let rhs = DMatrix::from_row_slice(2, 1, &[1, -1]);
        assert_eq!(checked_dot(&lhs, &rhs, 0, 0), Some(Cost::MAX - 1));
    }

    #[test]
    fn ragged_rows_are_reported() {
        let err = to_dmatrix(&[vec![1, 2], vec![3]]).unwrap_err();
        assert_eq!(
            err,
            Error::RaggedMatrix {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }
}
