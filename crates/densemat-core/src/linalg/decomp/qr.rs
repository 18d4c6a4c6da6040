//! QR decomposition via classical Gram-Schmidt.
//!
//! Decomposes a square matrix `A` (n x n) into `A = QR` where:
//! - `Q` is orthogonal (`Q^T Q = I`)
//! - `R` is upper triangular with a positive diagonal
//!
//! Column `j` of `Q` is column `j` of `A` with its projections onto the
//! previous `Q` columns removed, then normalized. Projections are taken
//! against the raw column (classical, not modified, Gram-Schmidt).

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::matrix::Matrix;
use crate::tolerance::QR_NORM;

/// Result of a Gram-Schmidt QR decomposition.
#[derive(Debug, Clone)]
pub struct QrDecomposition {
    q: Matrix<f64>,
    r: Matrix<f64>,
}

impl QrDecomposition {
    /// Perform QR decomposition on a square matrix.
    ///
    /// Fails with [`CoreError::Empty`], [`CoreError::NonSquare`], or
    /// [`CoreError::Singular`] when an orthogonalized column has norm below
    /// [`QR_NORM`] (linearly dependent columns).
    ///
    /// ```
    /// # use densemat_core::Matrix;
    /// # use densemat_core::linalg::decomp::QrDecomposition;
    /// let a = Matrix::from_rows(vec![vec![3.0, 0.0], vec![4.0, 5.0]]).unwrap();
    /// let qr = QrDecomposition::decompose(&a).unwrap();
    /// assert!((qr.r().get(0, 0).unwrap() - 5.0).abs() < 1e-12);
    /// ```
    #[allow(clippy::many_single_char_names)]
    pub fn decompose<T: Scalar>(m: &Matrix<T>) -> Result<Self> {
        let n = m.require_square("qr")?;
        let a: Vec<f64> = m.as_slice().iter().map(|&x| x.to_f64()).collect();

        let mut q = vec![0.0_f64; n * n];
        let mut r = vec![0.0_f64; n * n];
        let mut v = vec![0.0_f64; n];

        for j in 0..n {
            for i in 0..n {
                v[i] = a[i * n + j];
            }

            for k in 0..j {
                // r[k][j] = <q_k, a_j>
                let mut dot = 0.0;
                for i in 0..n {
                    dot += q[i * n + k] * a[i * n + j];
                }
                r[k * n + j] = dot;

                for i in 0..n {
                    v[i] -= dot * q[i * n + k];
                }
            }

            let norm = v.iter().map(|x| x * x).sum::<f64>().sqrt();
            if norm < QR_NORM {
                log::debug!("qr: column {j} norm {norm:e} is below {QR_NORM:e}");
                return Err(CoreError::Singular {
                    operation: "qr",
                    step: j,
                    value: norm,
                });
            }
            r[j * n + j] = norm;

            for i in 0..n {
                q[i * n + j] = v[i] / norm;
            }
        }

        Ok(Self {
            q: Matrix::from_vec(q, n, n)?,
            r: Matrix::from_vec(r, n, n)?,
        })
    }

    /// The orthogonal factor `Q`.
    pub fn q(&self) -> &Matrix<f64> {
        &self.q
    }

    /// The upper triangular factor `R`.
    pub fn r(&self) -> &Matrix<f64> {
        &self.r
    }

    /// Consume the decomposition, returning `(Q, R)`.
    pub fn into_parts(self) -> (Matrix<f64>, Matrix<f64>) {
        (self.q, self.r)
    }
}
