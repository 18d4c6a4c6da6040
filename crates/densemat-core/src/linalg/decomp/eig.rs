//! Eigenvalues by unshifted QR iteration.
//!
//! Starting from `M_0 = A`, each step factors `M_t = Q_t R_t` and recombines
//! `M_{t+1} = R_t Q_t`. The iterates are similar to `A`, and for matrices
//! with real eigenvalues of distinct magnitude the diagonal converges to
//! the spectrum. Complex eigenvalues are neither detected nor reported: the
//! diagonal at termination is returned as-is.

use crate::Scalar;
use crate::error::Result;
use crate::linalg::blas::matmul;
use crate::linalg::decomp::QrDecomposition;
use crate::matrix::Matrix;

/// Iteration parameters for [`QrEigenvalues`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EigenConfig {
    /// Upper bound on QR steps. Zero skips iteration entirely.
    pub max_iterations: usize,

    /// Stop once every diagonal entry moves by at most this much in one
    /// step (checked from the second step onward).
    pub tolerance: f64,
}

impl EigenConfig {
    /// Config with an explicit iteration cap and tolerance.
    pub fn new(max_iterations: usize, tolerance: f64) -> Self {
        Self {
            max_iterations,
            tolerance,
        }
    }

    /// Replace the iteration cap.
    ///
    /// ```
    /// # use densemat_core::Matrix;
    /// # use densemat_core::linalg::decomp::{EigenConfig, QrEigenvalues};
    /// let a = Matrix::from_rows(vec![vec![4, 1], vec![2, 3]]).unwrap();
    /// let config = EigenConfig::default().with_max_iterations(0);
    /// let eig = QrEigenvalues::compute(&a, &config).unwrap();
    /// assert_eq!(eig.iterations(), 0);
    /// assert!(!eig.converged());
    /// assert_eq!(eig.into_eigenvalues(), vec![4.0, 3.0]);
    /// ```
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = max_iterations;
        self
    }

    /// Replace the convergence tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = tolerance;
        self
    }
}

impl Default for EigenConfig {
    /// 200 iterations at 1e-14: tighter settings give no measurable
    /// improvement in `f64`.
    fn default() -> Self {
        Self {
            max_iterations: 200,
            tolerance: 1e-14,
        }
    }
}

/// Outcome of a QR-iteration eigenvalue computation.
#[derive(Debug, Clone)]
pub struct QrEigenvalues {
    eigenvalues: Vec<f64>,
    iterations: usize,
    converged: bool,
}

impl QrEigenvalues {
    /// Run unshifted QR iteration on a square matrix.
    ///
    /// Fails on empty or non-square input. A QR failure on any iterate
    /// (dependent columns) aborts the whole computation.
    ///
    /// ```
    /// # use densemat_core::Matrix;
    /// # use densemat_core::linalg::decomp::{EigenConfig, QrEigenvalues};
    /// let a = Matrix::from_rows(vec![vec![2, 1], vec![1, 2]]).unwrap();
    /// let eig = QrEigenvalues::compute(&a, &EigenConfig::default()).unwrap();
    /// let vals = eig.eigenvalues();
    /// assert!((vals[0] - 3.0).abs() < 1e-6);
    /// assert!((vals[1] - 1.0).abs() < 1e-6);
    /// ```
    pub fn compute<T: Scalar>(a: &Matrix<T>, config: &EigenConfig) -> Result<Self> {
        let n = a.require_square("eigenvalues")?;
        let mut current = a.to_f64();

        if config.max_iterations == 0 {
            return Ok(Self {
                eigenvalues: current.diagonal(),
                iterations: 0,
                converged: false,
            });
        }

        let mut prev_diag = vec![0.0_f64; n];
        let mut iterations = 0;
        let mut converged = false;

        for iter in 0..config.max_iterations {
            prev_diag.copy_from_slice(&current.diagonal());

            let (q, r) = QrDecomposition::decompose(&current)?.into_parts();
            current = matmul(&r, &q)?;
            iterations = iter + 1;

            if iter > 0 {
                let delta = current
                    .diagonal()
                    .iter()
                    .zip(&prev_diag)
                    .map(|(x, p)| (x - p).abs())
                    .fold(0.0_f64, f64::max);
                log::trace!("eigenvalues: iteration {iterations}, max diagonal change {delta:e}");
                if delta <= config.tolerance {
                    converged = true;
                    break;
                }
            }
        }

        if converged {
            log::debug!("eigenvalues: converged after {iterations} iterations");
        } else {
            log::debug!(
                "eigenvalues: stopped at the {} iteration cap without meeting tolerance {:e}",
                config.max_iterations,
                config.tolerance
            );
        }

        Ok(Self {
            eigenvalues: current.diagonal(),
            iterations,
            converged,
        })
    }

    /// Diagonal of the final iterate, in diagonal order.
    pub fn eigenvalues(&self) -> &[f64] {
        &self.eigenvalues
    }

    /// Number of QR steps performed.
    pub fn iterations(&self) -> usize {
        self.iterations
    }

    /// Whether the tolerance test stopped the iteration before the cap.
    pub fn converged(&self) -> bool {
        self.converged
    }

    /// Consume the report, returning the eigenvalue estimates.
    pub fn into_eigenvalues(self) -> Vec<f64> {
        self.eigenvalues
    }
}

/// Approximate real eigenvalues of a square matrix by QR iteration.
///
/// Shorthand for [`QrEigenvalues::compute`] with an explicit iteration cap
/// and tolerance.
pub fn eigenvalues_qr<T: Scalar>(
    a: &Matrix<T>,
    max_iterations: usize,
    tolerance: f64,
) -> Result<Vec<f64>> {
    let config = EigenConfig::new(max_iterations, tolerance);
    Ok(QrEigenvalues::compute(a, &config)?.into_eigenvalues())
}
