//! Linear algebra operations.
//!
//! All routines are implemented from scratch and compute in `f64`,
//! whatever the input element type.
//!
//! | Operation     | Routine                                   | Method                   |
//! |---------------|-------------------------------------------|--------------------------|
//! | Product       | [`matmul`], [`matvec`], [`vecmat`]        | row-by-column sums       |
//! | LU            | [`LuDecomposition`]                       | Doolittle, partial pivot |
//! | QR            | [`QrDecomposition`]                       | classical Gram-Schmidt   |
//! | Inverse       | [`inverse`]                               | Gauss-Jordan on `[A|I]`  |
//! | Determinant   | [`det`]                                   | LU diagonal and swaps    |
//! | Rank          | [`rank`]                                  | row-echelon elimination  |
//! | Eigenvalues   | [`eigenvalues_qr`], [`QrEigenvalues`]     | unshifted QR iteration   |
//! | Power         | [`pow`]                                   | binary exponentiation    |

pub mod blas;
pub mod decomp;
pub mod inverse;
pub mod pow;
pub mod rank;

pub use blas::{matmul, matvec, vecmat};
pub use decomp::LuDecomposition;
pub use decomp::QrDecomposition;
pub use decomp::{EigenConfig, QrEigenvalues, eigenvalues_qr};
pub use inverse::inverse;
pub use pow::pow;
pub use rank::rank;

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Solve the linear system `Ax = b` for a square matrix `A`.
///
/// Uses LU decomposition with partial pivoting internally.
///
/// ```
/// # use densemat_core::{Matrix, linalg};
/// let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 4.0]]).unwrap();
/// let x = linalg::solve(&a, &[5.0, 6.0]).unwrap();
/// assert!((x[0] - 2.0).abs() < 1e-10);
/// assert!((x[1] - 1.0).abs() < 1e-10);
/// ```
pub fn solve<A: Scalar, B: Scalar>(a: &Matrix<A>, b: &[B]) -> Result<Vec<f64>> {
    LuDecomposition::decompose(a)?.solve(b)
}

/// Compute the determinant of a square matrix.
///
/// Uses LU decomposition with partial pivoting. A singular matrix has
/// determinant exactly `0.0`; singularity is never reported as an error.
/// Empty and non-square input still fail.
///
/// ```
/// # use densemat_core::{Matrix, linalg};
/// let a = Matrix::from_rows(vec![vec![3, 8], vec![4, 6]]).unwrap();
/// assert!((linalg::det(&a).unwrap() - (-14.0)).abs() < 1e-10);
///
/// let singular = Matrix::from_rows(vec![vec![2, 4], vec![1, 2]]).unwrap();
/// assert_eq!(linalg::det(&singular).unwrap(), 0.0);
/// ```
pub fn det<T: Scalar>(a: &Matrix<T>) -> Result<f64> {
    match LuDecomposition::decompose(a) {
        Ok(lu) => Ok(lu.det()),
        Err(CoreError::Singular { .. }) => Ok(0.0),
        Err(e) => Err(e),
    }
}

impl<T: Scalar> Matrix<T> {
    /// Determinant. See [`det`].
    pub fn det(&self) -> Result<f64> {
        det(self)
    }
}
