//! Numerical thresholds used by the factorization engines.
//!
//! The values are fixed absolute thresholds; they are not scaled by the
//! magnitude of the input.

/// LU: a pivot `|U[i][i]|` below this declares the matrix singular.
pub const LU_PIVOT: f64 = 1e-12;

/// Gauss-Jordan: the best pivot candidate below this declares the matrix
/// singular.
pub const INVERSE_PIVOT: f64 = 1e-10;

/// Gram-Schmidt: an orthogonalized column norm below this means the columns
/// are linearly dependent.
pub const QR_NORM: f64 = 1e-10;

/// Rank: a pivot candidate below this counts as numerically zero.
pub const RANK_ZERO: f64 = 1e-10;

/// Vectors: `|v|` within this of 1 counts as unit length.
pub const UNIT_NORM: f64 = 1e-10;

/// Vectors: `|a . b|` below this counts as orthogonal.
pub const ORTHOGONAL_DOT: f64 = 1e-10;

/// Vectors: normalized `|a . b|` within this of 1 counts as parallel.
pub const PARALLEL_COS: f64 = 1e-10;

/// Spherical coordinates: a radius below this is treated as the origin.
pub const SPHERICAL_ORIGIN: f64 = 1e-10;
