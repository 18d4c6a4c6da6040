//! Matrix products.
//!
//! | Routine  | Operation          | Result shape | Complexity |
//! |----------|--------------------|--------------|------------|
//! | `matvec` | `M * v`            | `m x 1`      | O(mn)      |
//! | `vecmat` | `v * M`            | `1 x n`      | O(mn)      |
//! | `matmul` | `A * B`            | `m x n`      | O(mkn)     |
//!
//! Operands may have different element types; results are always `f64`.

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;

/// Matrix-matrix product `A * B`.
///
/// Fails with [`CoreError::Empty`] if either operand has zero rows and with
/// [`CoreError::DimensionMismatch`] if `a.cols() != b.rows()`.
///
/// ```
/// # use densemat_core::{Matrix, linalg::matmul};
/// let a = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![5.0, 6.0], vec![7.0, 8.0]]).unwrap();
/// let c = matmul(&a, &b).unwrap();
/// assert_eq!(c.as_slice(), &[19.0, 22.0, 43.0, 50.0]);
/// ```
#[allow(clippy::many_single_char_names)]
pub fn matmul<A: Scalar, B: Scalar>(a: &Matrix<A>, b: &Matrix<B>) -> Result<Matrix<f64>> {
    a.require_non_empty("matmul")?;
    b.require_non_empty("matmul")?;

    let (m, k) = a.shape();
    let n = b.cols();
    if b.rows() != k {
        return Err(CoreError::DimensionMismatch {
            expected: (k, n),
            got: b.shape(),
        });
    }

    let a_data = a.as_slice();
    let b_data = b.as_slice();
    let mut c = vec![0.0_f64; m * n];

    // ijk loop order (row-major friendly for A and C)
    for i in 0..m {
        let a_row = i * k;
        for j in 0..n {
            let mut sum = 0.0;
            for p in 0..k {
                sum += a_data[a_row + p].to_f64() * b_data[p * n + j].to_f64();
            }
            c[i * n + j] = sum;
        }
    }

    Matrix::from_vec(c, m, n)
}

/// Matrix-vector product `M * v`, returned as an `m x 1` column matrix.
///
/// ```
/// # use densemat_core::{Matrix, linalg::matvec};
/// let m = Matrix::from_rows(vec![vec![1, 2], vec![3, 4]]).unwrap();
/// let y = matvec(&m, &[5, 6]).unwrap();
/// assert_eq!(y.as_slice(), &[17.0, 39.0]);
/// assert_eq!(y.shape(), (2, 1));
/// ```
pub fn matvec<A: Scalar, B: Scalar>(m: &Matrix<A>, v: &[B]) -> Result<Matrix<f64>> {
    m.require_non_empty("matvec")?;
    if v.is_empty() {
        return Err(CoreError::Empty { operation: "matvec" });
    }
    let (rows, cols) = m.shape();
    if v.len() != cols {
        return Err(CoreError::DimensionMismatch {
            expected: (cols, 1),
            got: (v.len(), 1),
        });
    }

    let data = m.as_slice();
    let y: Vec<f64> = (0..rows)
        .map(|i| {
            data[i * cols..(i + 1) * cols]
                .iter()
                .zip(v)
                .fold(0.0, |acc, (&a, &x)| acc + a.to_f64() * x.to_f64())
        })
        .collect();

    Matrix::from_vec(y, rows, 1)
}

/// Vector-matrix product `v * M`, returned as a `1 x n` row matrix.
///
/// ```
/// # use densemat_core::{Matrix, linalg::vecmat};
/// let m = Matrix::from_rows(vec![vec![3, 4], vec![5, 6]]).unwrap();
/// let y = vecmat(&[1, 2], &m).unwrap();
/// assert_eq!(y.as_slice(), &[13.0, 16.0]);
/// ```
pub fn vecmat<A: Scalar, B: Scalar>(v: &[A], m: &Matrix<B>) -> Result<Matrix<f64>> {
    if v.is_empty() {
        return Err(CoreError::Empty { operation: "vecmat" });
    }
    m.require_non_empty("vecmat")?;
    let (rows, cols) = m.shape();
    if v.len() != rows {
        return Err(CoreError::DimensionMismatch {
            expected: (1, rows),
            got: (1, v.len()),
        });
    }

    let data = m.as_slice();
    let mut y = vec![0.0_f64; cols];
    for (i, &vi) in v.iter().enumerate() {
        let vi = vi.to_f64();
        for (yj, &mij) in y.iter_mut().zip(&data[i * cols..(i + 1) * cols]) {
            *yj += vi * mij.to_f64();
        }
    }

    Matrix::from_vec(y, 1, cols)
}

impl<T: Scalar> Matrix<T> {
    /// Matrix-matrix multiply: returns `self * other`.
    pub fn matmul<U: Scalar>(&self, other: &Matrix<U>) -> Result<Matrix<f64>> {
        matmul(self, other)
    }

    /// Matrix-vector multiply: returns `self * v` as a column matrix.
    pub fn matvec<U: Scalar>(&self, v: &[U]) -> Result<Matrix<f64>> {
        matvec(self, v)
    }
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;

    fn m<T: Scalar>(rows: Vec<Vec<T>>) -> Matrix<T> {
        Matrix::from_rows(rows).unwrap()
    }

    #[test]
    fn test_matmul_2x2() {
        let a = m(vec![vec![1.0, 2.0], vec![3.0, 4.0]]);
        let b = m(vec![vec![5.0, 6.0], vec![7.0, 8.0]]);
        assert_eq!(matmul(&a, &b).unwrap().as_slice(), &[19.0, 22.0, 43.0, 50.0]);
    }

    #[test]
    fn test_matmul_rectangular() {
        // (2x3) * (3x1)
        let a = m(vec![vec![1, 2, 3], vec![4, 5, 6]]);
        let b = m(vec![vec![1], vec![0], vec![-1]]);
        let c = a.matmul(&b).unwrap();
        assert_eq!(c.shape(), (2, 1));
        assert_eq!(c.as_slice(), &[-2.0, -2.0]);
    }

    #[test]
    fn test_matmul_identity() {
        let a = m(vec![vec![2.0, -1.0], vec![0.5, 3.0]]);
        let eye = Matrix::identity(2);
        assert_eq!(matmul(&a, &eye).unwrap(), a);
        assert_eq!(matmul(&eye, &a).unwrap(), a);
    }

    #[test]
    fn test_matmul_dimension_mismatch() {
        let a = m(vec![vec![1.0, 2.0]]);
        let b = m(vec![vec![1.0, 2.0]]);
        assert!(matches!(
            matmul(&a, &b),
            Err(CoreError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn test_matmul_empty() {
        let a = Matrix::<f64>::empty();
        let b = m(vec![vec![1.0]]);
        assert!(matches!(matmul(&a, &b), Err(CoreError::Empty { .. })));
        assert!(matches!(matmul(&b, &a), Err(CoreError::Empty { .. })));
    }

    #[test]
    fn test_matvec() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        let y = a.matvec(&[5.0, 6.0]).unwrap();
        assert_eq!(y.shape(), (2, 1));
        assert_eq!(y.as_slice(), &[17.0, 39.0]);
    }

    #[test]
    fn test_matvec_errors() {
        let a = m(vec![vec![1, 2], vec![3, 4]]);
        assert!(matches!(
            matvec(&a, &[1, 2, 3]),
            Err(CoreError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            matvec::<i32, i32>(&a, &[]),
            Err(CoreError::Empty { .. })
        ));
    }

    #[test]
    fn test_vecmat() {
        let a = m(vec![vec![3, 4], vec![5, 6]]);
        let y = vecmat(&[1, 2], &a).unwrap();
        assert_eq!(y.shape(), (1, 2));
        assert_eq!(y.as_slice(), &[13.0, 16.0]);
    }

    #[test]
    fn test_vecmat_dimension_mismatch() {
        let a = m(vec![vec![3, 4], vec![5, 6]]);
        assert!(matches!(
            vecmat(&[1.0], &a),
            Err(CoreError::DimensionMismatch { .. })
        ));
    }
}
