//! Distances between points given as vectors.

use crate::Scalar;
use crate::error::Result;

use super::require_pair;

fn abs_diffs<'a, A: Scalar, B: Scalar>(
    a: &'a [A],
    b: &'a [B],
) -> impl Iterator<Item = f64> + 'a {
    a.iter().zip(b).map(|(&x, &y)| (x.to_f64() - y.to_f64()).abs())
}

/// Straight-line (L2) distance.
///
/// All three metrics fail with
/// [`CoreError::DimensionMismatch`](crate::CoreError::DimensionMismatch) for
/// different lengths and [`CoreError::Empty`](crate::CoreError::Empty) for
/// empty operands.
///
/// ```
/// # use densemat_core::vector::euclidean;
/// assert_eq!(euclidean(&[0, 0], &[3, 4]).unwrap(), 5.0);
/// ```
pub fn euclidean<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<f64> {
    require_pair(a, b, "euclidean")?;
    Ok(abs_diffs(a, b).map(|d| d * d).sum::<f64>().sqrt())
}

/// Taxicab (L1) distance.
pub fn manhattan<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<f64> {
    require_pair(a, b, "manhattan")?;
    Ok(abs_diffs(a, b).sum())
}

/// Largest per-axis difference (L-infinity).
pub fn chebyshev<A: Scalar, B: Scalar>(a: &[A], b: &[B]) -> Result<f64> {
    require_pair(a, b, "chebyshev")?;
    Ok(abs_diffs(a, b).fold(0.0, f64::max))
}

#[cfg(test)]
#[allow(clippy::float_cmp)]
mod tests {
    use super::*;
    use crate::error::CoreError;

    #[test]
    fn test_metrics() {
        let a = [1, -2, 3];
        let b = [4.0, 2.0, 3.0];
        assert_eq!(euclidean(&a, &b).unwrap(), 5.0);
        assert_eq!(manhattan(&a, &b).unwrap(), 7.0);
        assert_eq!(chebyshev(&a, &b).unwrap(), 4.0);
    }

    #[test]
    fn test_same_point() {
        let p = [0.5, 1.5];
        assert_eq!(euclidean(&p, &p).unwrap(), 0.0);
        assert_eq!(manhattan(&p, &p).unwrap(), 0.0);
        assert_eq!(chebyshev(&p, &p).unwrap(), 0.0);
    }

    #[test]
    fn test_ordering_of_metrics() {
        let a = [1.0, 7.0, -2.0, 0.5];
        let b = [3.0, 1.0, 2.0, 0.0];
        let (l1, l2, linf) = (
            manhattan(&a, &b).unwrap(),
            euclidean(&a, &b).unwrap(),
            chebyshev(&a, &b).unwrap(),
        );
        assert!(linf <= l2 && l2 <= l1);
    }

    #[test]
    fn test_errors() {
        assert!(matches!(
            euclidean(&[1, 2], &[1]),
            Err(CoreError::DimensionMismatch { .. })
        ));
        assert!(matches!(
            manhattan::<f64, f64>(&[], &[]),
            Err(CoreError::Empty { operation: "manhattan" })
        ));
        assert!(chebyshev(&[1], &[1, 2]).is_err());
    }
}
