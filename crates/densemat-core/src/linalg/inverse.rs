//! Matrix inversion by Gauss-Jordan elimination on `[A | I]`.

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;
use crate::tolerance::INVERSE_PIVOT;

/// Compute the inverse of a square matrix.
///
/// Builds the `n x 2n` augmented matrix `[A | I]`, and for each column picks
/// the row with the largest `|a[r][i]|` at or below the diagonal (ties keep
/// the earlier row), normalizes it, and clears column `i` from every other
/// row. The right half is then `A^-1`.
///
/// Fails with [`CoreError::Empty`], [`CoreError::NonSquare`], or
/// [`CoreError::Singular`] if the best pivot candidate is below
/// [`INVERSE_PIVOT`].
///
/// ```
/// # use densemat_core::{Matrix, linalg::inverse};
/// let a = Matrix::from_rows(vec![vec![4, 7], vec![2, 6]]).unwrap();
/// let inv = inverse(&a).unwrap();
/// assert!((inv.get(0, 0).unwrap() - 0.6).abs() < 1e-12);
/// ```
pub fn inverse<T: Scalar>(m: &Matrix<T>) -> Result<Matrix<f64>> {
    let n = m.require_square("inverse")?;
    let w = 2 * n;

    let src = m.as_slice();
    let mut aug = vec![0.0_f64; n * w];
    for i in 0..n {
        for j in 0..n {
            aug[i * w + j] = src[i * n + j].to_f64();
        }
        aug[i * w + n + i] = 1.0;
    }

    for i in 0..n {
        // Partial pivoting
        let mut max_row = i;
        let mut max_val = aug[i * w + i].abs();
        for r in (i + 1)..n {
            let v = aug[r * w + i].abs();
            if v > max_val {
                max_val = v;
                max_row = r;
            }
        }

        if max_val < INVERSE_PIVOT {
            log::debug!("inverse: best pivot {max_val:e} in column {i} is below {INVERSE_PIVOT:e}");
            return Err(CoreError::Singular {
                operation: "inverse",
                step: i,
                value: max_val,
            });
        }

        if max_row != i {
            for j in 0..w {
                aug.swap(i * w + j, max_row * w + j);
            }
        }

        // Scale pivot row
        let pivot = aug[i * w + i];
        for j in 0..w {
            aug[i * w + j] /= pivot;
        }

        // Eliminate column i in all other rows
        for r in 0..n {
            if r == i {
                continue;
            }
            let factor = aug[r * w + i];
            for j in 0..w {
                let pij = aug[i * w + j];
                aug[r * w + j] -= factor * pij;
            }
        }
    }

    Ok(Matrix::from_fn(n, n, |i, j| aug[i * w + n + j]))
}

impl<T: Scalar> Matrix<T> {
    /// Inverse via Gauss-Jordan elimination. See [`inverse`].
    pub fn inverse(&self) -> Result<Matrix<f64>> {
        inverse(self)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::linalg::matmul;

    fn approx_eq(a: &[f64], b: &[f64], tol: f64) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| (x - y).abs() < tol)
    }

    #[test]
    fn test_inverse_2x2() {
        let a = Matrix::from_rows(vec![vec![2.0, 1.0], vec![1.0, 4.0]]).unwrap();
        let inv = a.inverse().unwrap();
        let expected = [4.0 / 7.0, -1.0 / 7.0, -1.0 / 7.0, 2.0 / 7.0];
        assert!(approx_eq(inv.as_slice(), &expected, 1e-12));
    }

    #[test]
    fn test_inverse_3x3_product_is_identity() {
        let a = Matrix::from_rows(vec![
            vec![1.0, 2.0, 3.0],
            vec![4.0, 5.0, 6.0],
            vec![7.0, 8.0, 10.0],
        ])
        .unwrap();
        let inv = inverse(&a).unwrap();
        let eye = matmul(&a, &inv).unwrap();
        assert!(approx_eq(eye.as_slice(), Matrix::identity(3).as_slice(), 1e-10));
    }

    #[test]
    fn test_inverse_needs_pivoting() {
        // Zero in the leading position.
        let a = Matrix::from_rows(vec![vec![0, 1], vec![1, 0]]).unwrap();
        let inv = inverse(&a).unwrap();
        assert!(approx_eq(inv.as_slice(), &[0.0, 1.0, 1.0, 0.0], 1e-15));
    }

    #[test]
    fn test_inverse_1x1() {
        let a = Matrix::from_rows(vec![vec![5]]).unwrap();
        let inv = inverse(&a).unwrap();
        assert!(approx_eq(inv.as_slice(), &[0.2], 1e-15));
    }

    #[test]
    fn test_inverse_roundtrip() {
        let a = Matrix::from_rows(vec![
            vec![4.0, -2.0, 1.0],
            vec![3.0, 6.0, -4.0],
            vec![2.0, 1.0, 8.0],
        ])
        .unwrap();
        let back = inverse(&inverse(&a).unwrap()).unwrap();
        assert!(approx_eq(back.as_slice(), a.as_slice(), 1e-10));
    }

    #[test]
    fn test_inverse_singular() {
        let a = Matrix::from_rows(vec![vec![2.0, 4.0], vec![1.0, 2.0]]).unwrap();
        assert!(matches!(
            inverse(&a),
            Err(CoreError::Singular { operation: "inverse", step: 1, .. })
        ));
    }

    #[test]
    fn test_inverse_not_square() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0, 3.0]]).unwrap();
        assert!(matches!(inverse(&a), Err(CoreError::NonSquare { .. })));
    }

    #[test]
    fn test_inverse_empty() {
        assert!(matches!(
            inverse(&Matrix::<f64>::empty()),
            Err(CoreError::Empty { .. })
        ));
    }
}
