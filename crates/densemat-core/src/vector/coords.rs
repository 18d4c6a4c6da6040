//! Polar, spherical and cylindrical coordinates.
//!
//! Angles are in radians. Azimuths come from `atan2` and lie in
//! `[-pi, pi]`; the spherical polar angle `phi` is measured from the
//! positive z axis and lies in `[0, pi]`.

use crate::Scalar;
use crate::error::{CoreError, Result};
use crate::tolerance::SPHERICAL_ORIGIN;

use super::require_dim;

fn require_radius(value: f64, operation: &'static str) -> Result<()> {
    if value < 0.0 {
        return Err(CoreError::NegativeRadius { operation, value });
    }
    Ok(())
}

/// A 2D point as radius and azimuth.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Polar {
    /// Distance from the origin.
    pub r: f64,
    /// Azimuth from the positive x axis.
    pub theta: f64,
}

impl Polar {
    /// Convert a 2D Cartesian vector. The origin maps to `r = 0, theta = 0`.
    ///
    /// ```
    /// # use densemat_core::vector::Polar;
    /// let p = Polar::from_cartesian(&[0, 2]).unwrap();
    /// assert_eq!(p.r, 2.0);
    /// assert!((p.theta - std::f64::consts::FRAC_PI_2).abs() < 1e-15);
    /// ```
    pub fn from_cartesian<T: Scalar>(v: &[T]) -> Result<Self> {
        require_dim(v, 2, "polar")?;
        let (x, y) = (v[0].to_f64(), v[1].to_f64());
        Ok(Self {
            r: x.hypot(y),
            theta: y.atan2(x),
        })
    }

    /// Back to `[x, y]`. Fails with [`CoreError::NegativeRadius`] if `r < 0`.
    pub fn to_cartesian(&self) -> Result<Vec<f64>> {
        require_radius(self.r, "polar")?;
        let (sin, cos) = self.theta.sin_cos();
        Ok(vec![self.r * cos, self.r * sin])
    }
}

/// A 3D point as distance `rho`, azimuth `theta` and polar angle `phi`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Spherical {
    /// Distance from the origin.
    pub rho: f64,
    /// Azimuth in the xy plane.
    pub theta: f64,
    /// Angle from the positive z axis.
    pub phi: f64,
}

impl Spherical {
    /// Convert a 3D Cartesian vector.
    ///
    /// Points within [`SPHERICAL_ORIGIN`] of the origin have no defined
    /// angles and map to all zeros.
    pub fn from_cartesian<T: Scalar>(v: &[T]) -> Result<Self> {
        require_dim(v, 3, "spherical")?;
        let (x, y, z) = (v[0].to_f64(), v[1].to_f64(), v[2].to_f64());
        let rho = (x * x + y * y + z * z).sqrt();
        if rho < SPHERICAL_ORIGIN {
            return Ok(Self {
                rho: 0.0,
                theta: 0.0,
                phi: 0.0,
            });
        }
        Ok(Self {
            rho,
            theta: y.atan2(x),
            phi: (z / rho).acos(),
        })
    }

    /// Back to `[x, y, z]`. Fails with [`CoreError::NegativeRadius`] if
    /// `rho < 0`.
    pub fn to_cartesian(&self) -> Result<Vec<f64>> {
        require_radius(self.rho, "spherical")?;
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (sin_theta, cos_theta) = self.theta.sin_cos();
        Ok(vec![
            self.rho * sin_phi * cos_theta,
            self.rho * sin_phi * sin_theta,
            self.rho * cos_phi,
        ])
    }
}

/// A 3D point as radial distance from the z axis, azimuth and height.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Cylindrical {
    /// Distance from the z axis.
    pub r: f64,
    /// Azimuth in the xy plane.
    pub theta: f64,
    /// Height.
    pub z: f64,
}

impl Cylindrical {
    /// Convert a 3D Cartesian vector.
    pub fn from_cartesian<T: Scalar>(v: &[T]) -> Result<Self> {
        require_dim(v, 3, "cylindrical")?;
        let (x, y) = (v[0].to_f64(), v[1].to_f64());
        Ok(Self {
            r: x.hypot(y),
            theta: y.atan2(x),
            z: v[2].to_f64(),
        })
    }

    /// Back to `[x, y, z]`. Fails with [`CoreError::NegativeRadius`] if
    /// `r < 0`.
    pub fn to_cartesian(&self) -> Result<Vec<f64>> {
        require_radius(self.r, "cylindrical")?;
        let (sin, cos) = self.theta.sin_cos();
        Ok(vec![self.r * cos, self.r * sin, self.z])
    }
}
