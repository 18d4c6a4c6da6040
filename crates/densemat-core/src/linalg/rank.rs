//! Numerical rank by Gaussian elimination to row-echelon form.
//!
//! Runs its own elimination pass instead of reusing LU so that rectangular
//! and rank-deficient input is accepted.

use crate::Scalar;
use crate::matrix::Matrix;
use crate::tolerance::RANK_ZERO;

/// Number of linearly independent rows of `m`.
///
/// Walks the columns left to right. In each column the row with the largest
/// magnitude at or below the current pivot row is chosen; if that magnitude
/// is below [`RANK_ZERO`] the column contributes no pivot. Otherwise the
/// column is eliminated from the rows beneath and the rank grows by one.
/// Empty and all-zero matrices have rank 0.
///
/// ```
/// # use densemat_core::{Matrix, linalg::rank};
/// let a = Matrix::from_rows(vec![vec![1, 2, 3], vec![2, 4, 6], vec![3, 6, 9]]).unwrap();
/// assert_eq!(rank(&a), 1);
/// ```
pub fn rank<T: Scalar>(m: &Matrix<T>) -> usize {
    let (rows, cols) = m.shape();
    let mut a: Vec<f64> = m.as_slice().iter().map(|&x| x.to_f64()).collect();

    let mut pivot_row = 0;
    for col in 0..cols {
        if pivot_row == rows {
            break;
        }

        let mut best = pivot_row;
        let mut best_val = a[pivot_row * cols + col].abs();
        for r in (pivot_row + 1)..rows {
            let v = a[r * cols + col].abs();
            if v > best_val {
                best_val = v;
                best = r;
            }
        }
        if best_val < RANK_ZERO {
            continue;
        }

        if best != pivot_row {
            for j in 0..cols {
                a.swap(pivot_row * cols + j, best * cols + j);
            }
        }

        let pivot = a[pivot_row * cols + col];
        for r in (pivot_row + 1)..rows {
            let factor = a[r * cols + col] / pivot;
            for j in col..cols {
                let pj = a[pivot_row * cols + j];
                a[r * cols + j] -= factor * pj;
            }
        }
        pivot_row += 1;
    }

    pivot_row
}

impl<T: Scalar> Matrix<T> {
    /// Numerical rank. See [`rank`].
    pub fn rank(&self) -> usize {
        rank(self)
    }
}
