//! Matrix decompositions.
//!
//! | Decomposition | Module  | Factorization           |
//! |---------------|---------|-------------------------|
//! | LU            | [`lu`]  | `PA = LU`               |
//! | QR            | [`qr`]  | `A = QR`                |
//! | Eigenvalues   | [`eig`] | `A_{t+1} = R_t Q_t`     |

pub mod eig;
pub mod lu;
pub mod qr;

pub use eig::{EigenConfig, QrEigenvalues, eigenvalues_qr};
pub use lu::LuDecomposition;
pub use qr::QrDecomposition;
