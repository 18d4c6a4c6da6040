//! Angles, projection, reflection and rotation.

use crate::Scalar;
use crate::error::{CoreError, Result};

use super::{
    add, cross, dot, is_unit, is_zero, magnitude, normalize, require_dim, require_pair, scale,
    subtract,
};

fn angle_cosine<A: Scalar, B: Scalar>(a: &[A], b: &[B], operation: &'static str) -> Result<f64> {
    require_pair(a, b, operation)?;
    if is_zero(a) || is_zero(b) {
        return Err(CoreError::ZeroVector { operation });
    }
    let cos = dot(a, b)? / (magnitude(a) * magnitude(b));
    // Rounding can push |cos| just past 1 for (anti)parallel input.
    Ok(cos.clamp(-1.0, 1.0))
}

/// Angle between `a` and `b` in radians, in `[0, pi]`.
///
/// Fails with [`CoreError::DimensionMismatch`], [`CoreError::Empty`], or
/// [`CoreError::ZeroVector`] if either operand is the zero vector.
///
/// ```
/// # use densemat_core::vector::angle;
/// let theta = angle(&[1, 0], &[0, 3]).unwrap();
/// assert!((theta - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
/// ```
pub fn angle<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<f64> {
    Ok(angle_cosine(a, b, "angle")?.acos())
}

/// Angle between `a` and `b` in degrees, in `[0, 180]`.
pub fn angle_deg<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<f64> {
    Ok(angle_cosine(a, b, "angle_deg")?.acos().to_degrees())
}

/// Orthogonal projection of `a` onto the line spanned by `onto`.
pub fn project<A: Scalar, B: Scalar>(a: &[A], onto: &[B]) -> Result<Vec<f64>> {
    require_pair(a, onto, "project")?;
    if is_zero(onto) {
        return Err(CoreError::ZeroVector {
            operation: "project",
        });
    }
    let onto_sq = onto
        .iter()
        .map(|&x| {
            let x = x.to_f64();
            x * x
        })
        .sum::<f64>();
    Ok(scale(dot(a, onto)? / onto_sq, onto))
}

/// Reflect `v` across the hyperplane with normal `n`: `v - 2 (v . n) n`.
///
/// `n` is used as given; pass a unit normal for a true mirror image.
pub fn reflect<A: Scalar, B: Scalar>(v: &[A], n: &[B]) -> Result<Vec<f64>> {
    let d = dot(v, n)?;
    subtract(v, &scale(2.0 * d, n))
}

/// Rotate a 2D vector counterclockwise by `angle` radians.
pub fn rotate_2d<T: Scalar>(v: &[T], angle: f64) -> Result<Vec<f64>> {
    require_dim(v, 2, "rotate_2d")?;
    let (sin, cos) = angle.sin_cos();
    let (x, y) = (v[0].to_f64(), v[1].to_f64());
    Ok(vec![cos * x - sin * y, sin * x + cos * y])
}

/// Rotate a 3D vector by `angle` radians about a unit `axis`, following
/// the right-hand rule (Rodrigues' formula).
///
/// Fails with [`CoreError::WrongDimension`] unless both operands are 3D and
/// with [`CoreError::NotUnit`] if `|axis|` is not within
/// [`UNIT_NORM`](crate::tolerance::UNIT_NORM) of 1.
pub fn rotate_3d<A: Scalar, B: Scalar>(v: &[A], axis: &[B], angle: f64) -> Result<Vec<f64>> {
    require_dim(v, 3, "rotate_3d")?;
    require_dim(axis, 3, "rotate_3d")?;
    if !is_unit(axis) {
        return Err(CoreError::NotUnit {
            operation: "rotate_3d",
            magnitude: magnitude(axis),
        });
    }
    let (sin, cos) = angle.sin_cos();
    let parallel = scale(dot(axis, v)? * (1.0 - cos), axis);
    let turned = add(&scale(cos, v), &scale(sin, &cross(axis, v)?))?;
    add(&turned, &parallel)
}

/// Cosines of the angles between a 3D vector and the x, y and z axes.
///
/// These are the components of the normalized vector.
pub fn direction_cosines<T: Scalar>(v: &[T]) -> Result<[f64; 3]> {
    require_dim(v, 3, "direction_cosines")?;
    if is_zero(v) {
        return Err(CoreError::ZeroVector {
            operation: "direction_cosines",
        });
    }
    let u = normalize(v)?;
    Ok([u[0], u[1], u[2]])
}
