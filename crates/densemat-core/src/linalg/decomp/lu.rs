//! LU decomposition with partial pivoting.
//!
//! Decomposes a square matrix `A` into `PA = LU` where:
//! - `P` is a permutation matrix (stored as a pivot vector)
//! - `L` is lower triangular with unit diagonal
//! - `U` is upper triangular
//!
//! Rows of `U` are formed with the Doolittle recurrence
//! `U[i][k] = A[i][k] - sum_{j<i} L[i][j] * U[j][k]`, choosing at each step
//! the remaining row with the strictly largest `|A[r][i]|` (ties keep the
//! earlier row).

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;
use crate::tolerance::LU_PIVOT;

/// Result of an LU decomposition with partial pivoting.
#[derive(Debug, Clone)]
pub struct LuDecomposition {
    /// Unit lower triangular factor.
    l: Vec<f64>,
    /// Upper triangular factor.
    u: Vec<f64>,
    /// `pivots[i]` is the original row that ended up at position `i`.
    pivots: Vec<usize>,
    /// Number of row swaps performed while pivoting.
    swaps: usize,
    /// Matrix dimension (n x n).
    n: usize,
}

impl LuDecomposition {
    /// Perform LU decomposition with partial pivoting on a square matrix.
    ///
    /// Fails with [`CoreError::Empty`], [`CoreError::NonSquare`], or
    /// [`CoreError::Singular`] when a pivot `|U[i][i]|` is below
    /// [`LU_PIVOT`]. No partial factors are returned on failure.
    ///
    /// ```
    /// # use densemat_core::Matrix;
    /// # use densemat_core::linalg::decomp::LuDecomposition;
    /// let a = Matrix::from_rows(vec![vec![3, 8], vec![4, 6]]).unwrap();
    /// let lu = LuDecomposition::decompose(&a).unwrap();
    /// assert_eq!(lu.swaps(), 1);
    /// assert!((lu.det() - (-14.0)).abs() < 1e-10);
    /// ```
    pub fn decompose<T: Scalar>(m: &Matrix<T>) -> Result<Self> {
        let n = m.require_square("lu")?;

        // Working copy in f64; rows are swapped in place while pivoting.
        let mut a: Vec<f64> = m.as_slice().iter().map(|&x| x.to_f64()).collect();
        let mut l = vec![0.0_f64; n * n];
        let mut u = vec![0.0_f64; n * n];
        let mut pivots: Vec<usize> = (0..n).collect();
        let mut swaps = 0;

        for i in 0..n {
            // Find pivot: row with largest |a[r, i]| for r >= i
            let mut max_val = a[i * n + i].abs();
            let mut max_row = i;
            for r in (i + 1)..n {
                let val = a[r * n + i].abs();
                if val > max_val {
                    max_val = val;
                    max_row = r;
                }
            }

            if max_row != i {
                log::trace!("lu: step {i} swaps rows {i} and {max_row}");
                for j in 0..n {
                    a.swap(i * n + j, max_row * n + j);
                }
                // Only the already computed part of L moves with the row.
                for j in 0..i {
                    l.swap(i * n + j, max_row * n + j);
                }
                pivots.swap(i, max_row);
                swaps += 1;
            }

            // Row i of U
            for k in i..n {
                let mut sum = 0.0;
                for j in 0..i {
                    sum += l[i * n + j] * u[j * n + k];
                }
                u[i * n + k] = a[i * n + k] - sum;
            }

            let pivot = u[i * n + i];
            if pivot.abs() < LU_PIVOT {
                log::debug!("lu: pivot {pivot:e} at step {i} is below {LU_PIVOT:e}");
                return Err(CoreError::Singular {
                    operation: "lu",
                    step: i,
                    value: pivot,
                });
            }

            // Column i of L
            l[i * n + i] = 1.0;
            for k in (i + 1)..n {
                let mut sum = 0.0;
                for j in 0..i {
                    sum += l[k * n + j] * u[j * n + i];
                }
                l[k * n + i] = (a[k * n + i] - sum) / pivot;
            }
        }

        Ok(Self {
            l,
            u,
            pivots,
            swaps,
            n,
        })
    }

    /// The lower triangular matrix `L` (unit diagonal).
    pub fn l(&self) -> Matrix<f64> {
        square(self.l.clone(), self.n)
    }

    /// The upper triangular matrix `U`.
    pub fn u(&self) -> Matrix<f64> {
        square(self.u.clone(), self.n)
    }

    /// The permutation matrix `P` such that `P * A = L * U`.
    pub fn p(&self) -> Matrix<f64> {
        let n = self.n;
        let mut data = vec![0.0; n * n];
        for (i, &pi) in self.pivots.iter().enumerate() {
            data[i * n + pi] = 1.0;
        }
        square(data, n)
    }

    /// The permutation pivot vector.
    pub fn pivots(&self) -> &[usize] {
        &self.pivots
    }

    /// Number of row swaps performed during pivoting.
    pub fn swaps(&self) -> usize {
        self.swaps
    }

    /// Compute the determinant from the LU factorization.
    ///
    /// `det(A) = (-1)^swaps * product(diag(U))`
    pub fn det(&self) -> f64 {
        let n = self.n;
        let product: f64 = (0..n).map(|i| self.u[i * n + i]).product();
        if self.swaps % 2 == 1 { -product } else { product }
    }

    /// Solve the linear system `Ax = b` using the precomputed factorization.
    pub fn solve<T: Scalar>(&self, b: &[T]) -> Result<Vec<f64>> {
        let n = self.n;
        if b.len() != n {
            return Err(CoreError::DimensionMismatch {
                expected: (n, 1),
                got: (b.len(), 1),
            });
        }

        // Apply permutation: Pb
        let mut x: Vec<f64> = self.pivots.iter().map(|&pi| b[pi].to_f64()).collect();

        // Forward substitution: Ly = Pb
        #[allow(clippy::needless_range_loop)]
        for i in 1..n {
            for j in 0..i {
                let lij_xj = self.l[i * n + j] * x[j];
                x[i] -= lij_xj;
            }
        }

        // Back substitution: Ux = y
        #[allow(clippy::needless_range_loop)]
        for i in (0..n).rev() {
            for j in (i + 1)..n {
                let uij_xj = self.u[i * n + j] * x[j];
                x[i] -= uij_xj;
            }
            x[i] /= self.u[i * n + i];
        }

        Ok(x)
    }

    /// Consume the decomposition, returning `(L, U, swaps)`.
    pub fn into_parts(self) -> (Matrix<f64>, Matrix<f64>, usize) {
        let n = self.n;
        (square(self.l, n), square(self.u, n), self.swaps)
    }
}

fn square(data: Vec<f64>, n: usize) -> Matrix<f64> {
    Matrix::from_fn(n, n, |i, j| data[i * n + j])
}
