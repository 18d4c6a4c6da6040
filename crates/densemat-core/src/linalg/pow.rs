//! Integer matrix powers by binary exponentiation.

use crate::Scalar;
use crate::error::Result;
use crate::linalg::blas::matmul;
use crate::linalg::inverse::inverse;
use crate::matrix::Matrix;

/// Raise a square matrix to an integer power.
///
/// - `n == 0` gives the identity
/// - `n < 0` gives `inverse(m)^|n|`, failing with
///   [`CoreError::Singular`](crate::CoreError::Singular) if `m` is not
///   invertible
///
/// ```
/// # use densemat_core::{Matrix, linalg::pow};
/// let fib = Matrix::from_rows(vec![vec![1, 1], vec![1, 0]]).unwrap();
/// let f10 = pow(&fib, 10).unwrap();
/// assert_eq!(f10.get(0, 1).unwrap(), 55.0);
/// ```
pub fn pow<T: Scalar>(m: &Matrix<T>, n: i32) -> Result<Matrix<f64>> {
    let size = m.require_square("pow")?;

    if n == 0 {
        return Ok(Matrix::identity(size));
    }
    let base = if n < 0 { inverse(m)? } else { m.to_f64() };
    power_by_squaring(base, n.unsigned_abs())
}

fn power_by_squaring(mut base: Matrix<f64>, mut exp: u32) -> Result<Matrix<f64>> {
    if exp == 1 {
        return Ok(base);
    }
    let mut result = Matrix::identity(base.rows());
    while exp > 0 {
        if exp & 1 == 1 {
            result = matmul(&result, &base)?;
        }
        exp >>= 1;
        if exp > 0 {
            base = matmul(&base, &base)?;
        }
    }
    Ok(result)
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    fn approx_eq(a: &[f64], b: &[f64], tol: f64) -> bool {
        a.len() == b.len() && a.iter().zip(b).all(|(&x, &y)| (x - y).abs() < tol)
    }

    #[test]
    fn test_pow_zero_is_identity() {
        let a = Matrix::from_rows(vec![vec![3, 1], vec![2, 2]]).unwrap();
        assert_eq!(pow(&a, 0).unwrap(), Matrix::identity(2));
    }

    #[test]
    fn test_pow_one_is_copy() {
        let a = Matrix::from_rows(vec![vec![3, 1], vec![2, 2]]).unwrap();
        assert_eq!(pow(&a, 1).unwrap(), a.to_f64());
    }

    #[test]
    fn test_pow_matches_repeated_multiply() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
        let mut expected = a.clone();
        for _ in 1..5 {
            expected = matmul(&expected, &a).unwrap();
        }
        assert_eq!(pow(&a, 5).unwrap(), expected);
    }

    #[test]
    fn test_pow_negative() {
        let a = Matrix::from_rows(vec![vec![2.0, 0.0], vec![0.0, 4.0]]).unwrap();
        let p = pow(&a, -2).unwrap();
        assert!(approx_eq(p.as_slice(), &[0.25, 0.0, 0.0, 0.0625], 1e-15));
    }

    #[test]
    fn test_pow_negative_singular() {
        let a = Matrix::from_rows(vec![vec![1.0, 2.0], vec![2.0, 4.0]]).unwrap();
        assert!(matches!(pow(&a, -1), Err(CoreError::Singular { .. })));
    }

    #[test]
    fn test_pow_errors() {
        let wide = Matrix::from_rows(vec![vec![1.0, 2.0]]).unwrap();
        assert!(matches!(pow(&wide, 2), Err(CoreError::NonSquare { .. })));
        assert!(matches!(
            pow(&Matrix::<f64>::empty(), 0),
            Err(CoreError::Empty { .. })
        ));
    }

    #[test]
    fn test_pow_i32_min_does_not_overflow() {
        let a = Matrix::from_rows(vec![vec![1.0]]).unwrap();
        assert_eq!(pow(&a, i32::MIN).unwrap().as_slice(), &[1.0]);
    }
}
