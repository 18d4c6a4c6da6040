//! Cross and triple products of 3D vectors.

use crate::Scalar;
use crate::error::Result;

use super::{dot, require_dim, scale, subtract};

/// Cross product `a x b` of two 3D vectors (right-hand rule).
///
/// ```
/// # use densemat_core::vector::{cross, UNIT_X, UNIT_Y, UNIT_Z};
/// assert_eq!(cross(&UNIT_X, &UNIT_Y).unwrap(), UNIT_Z.to_vec());
/// ```
pub fn cross<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<Vec<f64>> {
    require_dim(a, 3, "cross")?;
    require_dim(b, 3, "cross")?;
    let [a0, a1, a2] = [a[0].to_f64(), a[1].to_f64(), a[2].to_f64()];
    let [b0, b1, b2] = [b[0].to_f64(), b[1].to_f64(), b[2].to_f64()];
    Ok(vec![a1 * b2 - a2 * b1, a2 * b0 - a0 * b2, a0 * b1 - a1 * b0])
}

/// Scalar triple product `a . (b x c)`: the signed volume of the
/// parallelepiped spanned by the three vectors.
pub fn scalar_triple<A: Scalar, B: Scalar, C: Scalar>(a: &[A], b: &[B], c: &[C]) -> Result<f64> {
    require_dim(a, 3, "scalar_triple")?;
    dot(a, &cross(b, c)?)
}

/// Vector triple product `a x (b x c)`, computed as `(a . c) b - (a . b) c`.
pub fn vector_triple<A: Scalar, B: Scalar, C: Scalar>(
    a: &[A],
    b: &[B],
    c: &[C],
) -> Result<Vec<f64>> {
    require_dim(a, 3, "vector_triple")?;
    require_dim(b, 3, "vector_triple")?;
    require_dim(c, 3, "vector_triple")?;
    let ac = dot(a, c)?;
    let ab = dot(a, b)?;
    subtract(&scale(ac, b), &scale(ab, c))
}
