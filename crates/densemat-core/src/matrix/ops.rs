//! Element-wise arithmetic, transpose and trace.
//!
//! Binary operations accept operands with different element types and
//! return `f64` matrices. Shape violations always fail with an error.

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::Matrix;

fn zip_promoted<A, B, F>(
    a: &Matrix<A>,
    b: &Matrix<B>,
    operation: &'static str,
    f: F,
) -> Result<Matrix<f64>>
where
    A: Scalar,
    B: Scalar,
    F: Fn(f64, f64) -> f64,
{
    a.require_non_empty(operation)?;
    b.require_non_empty(operation)?;
    if a.shape() != b.shape() {
        return Err(CoreError::DimensionMismatch {
            expected: a.shape(),
            got: b.shape(),
        });
    }
    let data = a
        .data
        .iter()
        .zip(b.data.iter())
        .map(|(&x, &y)| f(x.to_f64(), y.to_f64()))
        .collect();
    Ok(Matrix {
        data,
        rows: a.rows,
        cols: a.cols,
    })
}

/// Element-wise `a + b`.
///
/// ```
/// # use densemat_core::{Matrix, matrix::add};
/// let a = Matrix::from_rows(vec![vec![1, 2]]).unwrap();
/// let b = Matrix::from_rows(vec![vec![0.5, 0.5]]).unwrap();
/// assert_eq!(add(&a, &b).unwrap().as_slice(), &[1.5, 2.5]);
/// ```
pub fn add<A: Scalar, B: Scalar>(a: &Matrix<A>, b: &Matrix<B>) -> Result<Matrix<f64>> {
    zip_promoted(a, b, "add", |x, y| x + y)
}

/// Element-wise `a - b`.
pub fn subtract<A: Scalar, B: Scalar>(a: &Matrix<A>, b: &Matrix<B>) -> Result<Matrix<f64>> {
    zip_promoted(a, b, "subtract", |x, y| x - y)
}

/// Multiply every element by `s`. The empty matrix scales to itself.
pub fn scale<S: Scalar, T: Scalar>(s: S, m: &Matrix<T>) -> Matrix<f64> {
    let s = s.to_f64();
    Matrix {
        data: m.data.iter().map(|&x| s * x.to_f64()).collect(),
        rows: m.rows,
        cols: m.cols,
    }
}

/// The transpose of `m`, keeping its element type.
pub fn transpose<T: Scalar>(m: &Matrix<T>) -> Matrix<T> {
    m.transpose()
}

/// Sum of the main diagonal, in the element type.
///
/// Integer matrices whose diagonal sum leaves the range of `T` fail with
/// [`CoreError::Overflow`].
pub fn trace<T: Scalar>(m: &Matrix<T>) -> Result<T> {
    let n = m.require_square("trace")?;
    (0..n).try_fold(T::zero(), |sum, i| {
        sum.checked_add(m.data[i * n + i])
            .ok_or(CoreError::Overflow { operation: "trace" })
    })
}

impl<T: Scalar> Matrix<T> {
    /// Transpose, returning a new `cols x rows` matrix.
    pub fn transpose(&self) -> Matrix<T> {
        let (rows, cols) = (self.rows, self.cols);
        let mut data = vec![T::zero(); self.data.len()];
        for r in 0..rows {
            for c in 0..cols {
                data[c * rows + r] = self.data[r * cols + c];
            }
        }
        // A zero-row result carries no column count.
        let (new_rows, new_cols) = if rows == 0 || cols == 0 {
            (0, 0)
        } else {
            (cols, rows)
        };
        Matrix {
            data,
            rows: new_rows,
            cols: new_cols,
        }
    }
}
