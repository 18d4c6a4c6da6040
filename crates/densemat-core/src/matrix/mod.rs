//! Dense rectangular matrix with contiguous row-major storage.
//!
//! [`Matrix`] is generic over any [`Scalar`] (integer or float). A value of
//! this type is always rectangular: the row-slice constructor rejects ragged
//! input with [`CoreError::Shape`], so the algorithms only need to check
//! emptiness and squareness.

mod create;
mod display;
mod ops;

pub use ops::{add, scale, subtract, trace, transpose};

use crate::Scalar;
use crate::error::{CoreError, Result};

/// A dense matrix stored in row-major order.
///
/// `data[i * cols + j]` holds element `(i, j)`. A matrix with zero rows is
/// the *empty* matrix; most operations reject it with [`CoreError::Empty`].
/// Cloning performs a deep copy.
#[derive(Debug, Clone)]
pub struct Matrix<T: Scalar = f64> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

/// Check that every row in `rows` has the same length as the first.
///
/// Returns the first offending row index with the expected and actual
/// lengths. Zero rows is valid.
///
/// ```
/// # use densemat_core::matrix::validate_rows;
/// assert!(validate_rows(&[vec![1, 2], vec![3, 4]]).is_ok());
/// assert!(validate_rows(&[vec![1, 2], vec![3]]).is_err());
/// ```
pub fn validate_rows<T>(rows: &[Vec<T>]) -> Result<()> {
    let Some(first) = rows.first() else {
        return Ok(());
    };
    let expected = first.len();
    for (row, r) in rows.iter().enumerate() {
        if r.len() != expected {
            return Err(CoreError::Shape {
                row,
                expected,
                got: r.len(),
            });
        }
    }
    Ok(())
}

impl<T: Scalar> Matrix<T> {
    // ------------------------------------------------------------------
    // Construction from raw parts
    // ------------------------------------------------------------------

    /// Build a matrix from row data, validating that all rows have equal
    /// length.
    ///
    /// ```
    /// # use densemat_core::Matrix;
    /// let m = Matrix::from_rows(vec![vec![1, 2, 3], vec![4, 5, 6]]).unwrap();
    /// assert_eq!(m.shape(), (2, 3));
    /// ```
    pub fn from_rows(rows: Vec<Vec<T>>) -> Result<Self> {
        validate_rows(&rows)?;
        let n_rows = rows.len();
        let n_cols = rows.first().map_or(0, Vec::len);
        let data: Vec<T> = rows.into_iter().flatten().collect();
        Ok(Self {
            data,
            rows: n_rows,
            cols: n_cols,
        })
    }

    /// Build a matrix from a flat row-major vector.
    ///
    /// Returns [`CoreError::InvalidData`] if `data.len() != rows * cols`,
    /// including when `rows * cols` does not fit in `usize`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if rows.checked_mul(cols) != Some(data.len()) {
            return Err(CoreError::InvalidData {
                rows,
                cols,
                got: data.len(),
            });
        }
        // A zero-row matrix carries no column count.
        let cols = if rows == 0 { 0 } else { cols };
        Ok(Self { data, rows, cols })
    }

    /// The empty (zero-row) matrix.
    pub fn empty() -> Self {
        Self {
            data: Vec::new(),
            rows: 0,
            cols: 0,
        }
    }

    // ------------------------------------------------------------------
    // Shape queries
    // ------------------------------------------------------------------

    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`.
    #[inline]
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Whether the matrix has zero rows.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0
    }

    /// Whether `rows == cols`. The empty matrix is not square.
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows != 0 && self.rows == self.cols
    }

    /// A flat slice of all elements in row-major order.
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Consume the matrix and return its row-major storage.
    #[inline]
    pub fn into_vec(self) -> Vec<T> {
        self.data
    }

    // ------------------------------------------------------------------
    // Element access
    // ------------------------------------------------------------------

    fn flat_index(&self, i: usize, j: usize) -> Result<usize> {
        if i >= self.rows {
            return Err(CoreError::IndexOutOfBounds {
                axis: "row",
                index: i,
                len: self.rows,
            });
        }
        if j >= self.cols {
            return Err(CoreError::IndexOutOfBounds {
                axis: "column",
                index: j,
                len: self.cols,
            });
        }
        Ok(i * self.cols + j)
    }

    /// Bounds-checked read of element `(i, j)`.
    pub fn get(&self, i: usize, j: usize) -> Result<T> {
        let flat = self.flat_index(i, j)?;
        Ok(self.data[flat])
    }

    /// Bounds-checked write of element `(i, j)`.
    pub fn set(&mut self, i: usize, j: usize, value: T) -> Result<()> {
        let flat = self.flat_index(i, j)?;
        self.data[flat] = value;
        Ok(())
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> Result<&[T]> {
        if i >= self.rows {
            return Err(CoreError::IndexOutOfBounds {
                axis: "row",
                index: i,
                len: self.rows,
            });
        }
        Ok(&self.data[i * self.cols..(i + 1) * self.cols])
    }

    /// Elements `(i, i)` for `i < min(rows, cols)`.
    pub fn diagonal(&self) -> Vec<T> {
        (0..self.rows.min(self.cols))
            .map(|i| self.data[i * self.cols + i])
            .collect()
    }

    /// Copy out as nested rows.
    pub fn to_rows(&self) -> Vec<Vec<T>> {
        (0..self.rows)
            .map(|i| self.data[i * self.cols..(i + 1) * self.cols].to_vec())
            .collect()
    }

    // ------------------------------------------------------------------
    // Promotion
    // ------------------------------------------------------------------

    /// Promote every element to `f64`. Always allocates.
    pub fn to_f64(&self) -> Matrix<f64> {
        Matrix {
            data: self.data.iter().map(|&x| x.to_f64()).collect(),
            rows: self.rows,
            cols: self.cols,
        }
    }

    // ------------------------------------------------------------------
    // Precondition checks shared by the engines
    // ------------------------------------------------------------------

    pub(crate) fn require_non_empty(&self, operation: &'static str) -> Result<()> {
        if self.is_empty() {
            return Err(CoreError::Empty { operation });
        }
        Ok(())
    }

    /// Fails with `Empty` for zero rows, then `NonSquare`.
    pub(crate) fn require_square(&self, operation: &'static str) -> Result<usize> {
        self.require_non_empty(operation)?;
        if !self.is_square() {
            return Err(CoreError::NonSquare {
                operation,
                rows: self.rows,
                cols: self.cols,
            });
        }
        Ok(self.rows)
    }
}

impl<T: Scalar> PartialEq for Matrix<T> {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.data == other.data
    }
}
