//! Vector algebra over plain slices.
//!
//! Vectors are `&[T]` for any [`Scalar`] and results are `Vec<f64>`, the
//! same convention [`matvec`](crate::linalg::matvec) uses for its operand.
//! Binary operations accept different element types on each side.
//!
//! | Group        | Routines                                                          |
//! |--------------|-------------------------------------------------------------------|
//! | Arithmetic   | [`add`], [`subtract`], [`scale`], [`negate`], [`dot`]             |
//! | Norms        | [`magnitude`], [`normalize`]                                      |
//! | Predicates   | [`is_zero`], [`is_unit`], [`is_orthogonal`], [`is_parallel`]      |
//! | Products     | [`cross`], [`scalar_triple`], [`vector_triple`]                   |
//! | Geometry     | [`angle`], [`angle_deg`], [`project`], [`reflect`], [`rotate_2d`], [`rotate_3d`], [`direction_cosines`] |
//! | Distances    | [`euclidean`], [`manhattan`], [`chebyshev`]                       |
//! | Coordinates  | [`Polar`], [`Spherical`], [`Cylindrical`]                         |

mod coords;
mod distance;
mod geometry;
mod products;

pub use coords::{Cylindrical, Polar, Spherical};
pub use distance::{chebyshev, euclidean, manhattan};
pub use geometry::{angle, angle_deg, direction_cosines, project, reflect, rotate_2d, rotate_3d};
pub use products::{cross, scalar_triple, vector_triple};

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::tolerance::{ORTHOGONAL_DOT, PARALLEL_COS, UNIT_NORM};

// ----------------------------------------------------------------------
// Basis vectors
// ----------------------------------------------------------------------

/// Unit vector along the x axis in 3D.
pub const UNIT_X: [f64; 3] = [1.0, 0.0, 0.0];
/// Unit vector along the y axis in 3D.
pub const UNIT_Y: [f64; 3] = [0.0, 1.0, 0.0];
/// Unit vector along the z axis in 3D.
pub const UNIT_Z: [f64; 3] = [0.0, 0.0, 1.0];
/// The 2D origin.
pub const ORIGIN_2D: [f64; 2] = [0.0, 0.0];
/// The 3D origin.
pub const ORIGIN_3D: [f64; 3] = [0.0, 0.0, 0.0];

/// The `axis`-th standard basis vector of dimension `dim`.
///
/// ```
/// # use densemat_core::vector::basis;
/// assert_eq!(basis(4, 2).unwrap(), vec![0.0, 0.0, 1.0, 0.0]);
/// ```
pub fn basis(dim: usize, axis: usize) -> Result<Vec<f64>> {
    if axis >= dim {
        return Err(CoreError::IndexOutOfBounds {
            axis: "basis",
            index: axis,
            len: dim,
        });
    }
    let mut e = vec![0.0; dim];
    e[axis] = 1.0;
    Ok(e)
}

/// The zero vector of dimension `dim`.
pub fn origin(dim: usize) -> Vec<f64> {
    vec![0.0; dim]
}

// ----------------------------------------------------------------------
// Shared checks
// ----------------------------------------------------------------------

pub(crate) fn require_same_len<A, B>(a: &[A], b: &[B]) -> Result<()> {
    if a.len() != b.len() {
        return Err(CoreError::DimensionMismatch {
            expected: (a.len(), 1),
            got: (b.len(), 1),
        });
    }
    Ok(())
}

/// Same length, then non-empty.
pub(crate) fn require_pair<A, B>(a: &[A], b: &[B], operation: &'static str) -> Result<()> {
    require_same_len(a, b)?;
    if a.is_empty() {
        return Err(CoreError::Empty { operation });
    }
    Ok(())
}

pub(crate) fn require_dim<T>(v: &[T], dim: usize, operation: &'static str) -> Result<()> {
    if v.len() != dim {
        return Err(CoreError::WrongDimension {
            operation,
            expected: dim,
            got: v.len(),
        });
    }
    Ok(())
}

fn zip_promoted<A: Scalar, B: Scalar>(
    a: &[A],
    b: &[B],
    operation: &'static str,
    f: impl Fn(f64, f64) -> f64,
) -> Result<Vec<f64>> {
    require_pair(a, b, operation)?;
    Ok(a.iter()
        .zip(b)
        .map(|(&x, &y)| f(x.to_f64(), y.to_f64()))
        .collect())
}

// ----------------------------------------------------------------------
// Arithmetic
// ----------------------------------------------------------------------

/// Element-wise `a + b`.
pub fn add<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<Vec<f64>> {
    zip_promoted(a, b, "add", |x, y| x + y)
}

/// Element-wise `a - b`.
pub fn subtract<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<Vec<f64>> {
    zip_promoted(a, b, "subtract", |x, y| x - y)
}

/// Multiply every component by `s`.
pub fn scale<S: Scalar, T: Scalar>(s: S, v: &[T]) -> Vec<f64> {
    let s = s.to_f64();
    v.iter().map(|&x| s * x.to_f64()).collect()
}

/// The additive inverse `-v`.
pub fn negate<T: Scalar>(v: &[T]) -> Vec<f64> {
    scale(-1.0, v)
}

/// Inner product `a . b`.
///
/// Fails with [`CoreError::DimensionMismatch`] for different lengths and
/// [`CoreError::Empty`] for empty operands.
///
/// ```
/// # use densemat_core::vector::dot;
/// assert_eq!(dot(&[1, 2, 3], &[4.0, 5.0, 6.0]).unwrap(), 32.0);
/// ```
pub fn dot<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<f64> {
    require_pair(a, b, "dot")?;
    Ok(a.iter()
        .zip(b)
        .fold(0.0, |acc, (&x, &y)| acc + x.to_f64() * y.to_f64()))
}

// ----------------------------------------------------------------------
// Norms
// ----------------------------------------------------------------------

/// Euclidean length. The empty vector has length 0.
pub fn magnitude<T: Scalar>(v: &[T]) -> f64 {
    v.iter()
        .map(|&x| {
            let x = x.to_f64();
            x * x
        })
        .sum::<f64>()
        .sqrt()
}

/// `v / |v|`.
///
/// Fails with [`CoreError::Empty`] for the empty vector and
/// [`CoreError::ZeroVector`] when every component is zero.
pub fn normalize<T: Scalar>(v: &[T]) -> Result<Vec<f64>> {
    if v.is_empty() {
        return Err(CoreError::Empty {
            operation: "normalize",
        });
    }
    if is_zero(v) {
        return Err(CoreError::ZeroVector {
            operation: "normalize",
        });
    }
    let mag = magnitude(v);
    Ok(v.iter().map(|&x| x.to_f64() / mag).collect())
}

// ----------------------------------------------------------------------
// Predicates
// ----------------------------------------------------------------------

/// Whether every component is exactly zero. Vacuously true when empty.
pub fn is_zero<T: Scalar>(v: &[T]) -> bool {
    v.iter().all(|&x| x == T::zero())
}

/// Whether `|v|` is within [`UNIT_NORM`] of 1.
pub fn is_unit<T: Scalar>(v: &[T]) -> bool {
    (magnitude(v) - 1.0).abs() < UNIT_NORM
}

/// Whether `|a . b|` is below [`ORTHOGONAL_DOT`]. Errors as [`dot`].
pub fn is_orthogonal<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<bool> {
    Ok(dot(a, b)?.abs() < ORTHOGONAL_DOT)
}

/// Whether `a` and `b` point along the same line, in either direction.
///
/// Compares the cosine of the normalized vectors against 1 within
/// [`PARALLEL_COS`]. Zero vectors have no direction and fail with
/// [`CoreError::ZeroVector`]; that check runs before the length check.
pub fn is_parallel<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<bool> {
    if is_zero(a) || is_zero(b) {
        return Err(CoreError::ZeroVector {
            operation: "is_parallel",
        });
    }
    require_same_len(a, b)?;
    let cos = dot(&normalize(a)?, &normalize(b)?)?;
    Ok((cos.abs() - 1.0).abs() < PARALLEL_COS)
}
