//! # Densemat
//!
//! Small dense linear algebra for row-major matrices.
//!
//! One `use densemat::prelude::*;` gives you the [`Matrix`](core::Matrix)
//! type together with products, decompositions, inversion, determinant,
//! rank, powers, eigenvalues, and vector algebra.
//!
//! ## Feature Flags
//!
//! | Feature | Enables |
//! |---------|---------|
//! | `core` *(default)* | Matrix type, linear algebra kernels, vector algebra |

#[cfg(feature = "core")]
pub use densemat_core as core;

/// Glob-import convenience: `use densemat::prelude::*;`
pub mod prelude {
    #[cfg(feature = "core")]
    pub use densemat_core::prelude::*;
}
