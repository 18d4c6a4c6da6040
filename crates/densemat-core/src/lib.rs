//! `densemat-core`: dense matrix kernels over `f64`.
//!
//! Provides a row-major [`Matrix`] container, elementwise arithmetic,
//! products, LU and QR decompositions, inversion, determinant, rank,
//! integer powers, and QR-iteration eigenvalues, along with slice-based
//! vector algebra.
//!
//! # Design
//!
//! - Matrices of any [`Scalar`] element type are accepted; every computed
//!   result is a `Matrix<f64>`.
//! - Inputs are never mutated. Engines work on their own `f64` copies.
//! - Numerical failures (singular pivots, dependent columns) are reported
//!   through [`CoreError`] and never panic.

pub mod dtype;
pub mod error;
pub mod linalg;
pub mod matrix;
pub mod tolerance;
pub mod vector;

// Re-export key types at crate root for convenience.
pub use dtype::Scalar;
pub use error::{CoreError, Result};
pub use matrix::Matrix;

/// Items intended for glob-import: `use densemat_core::prelude::*;`
pub mod prelude {
    pub use crate::dtype::Scalar;
    pub use crate::error::{CoreError, Result};
    pub use crate::linalg::{
        EigenConfig, LuDecomposition, QrDecomposition, QrEigenvalues, det, eigenvalues_qr,
        inverse, matmul, matvec, pow, rank, solve, vecmat,
    };
    pub use crate::matrix::{Matrix, add, scale, subtract, trace, transpose};
    pub use crate::vector::{
        self, Cylindrical, Polar, Spherical, cross, dot, magnitude, normalize,
    };
}
