//! Matrix constructors: zeros, identity, closures.

use crate::Scalar;

use super::Matrix;

/// `rows * cols`, panicking on overflow in every build profile the way
/// `Vec::with_capacity` does.
fn element_count(rows: usize, cols: usize) -> usize {
    match rows.checked_mul(cols) {
        Some(len) => len,
        None => panic!("matrix of {rows}x{cols} elements overflows usize"),
    }
}

impl<T: Scalar> Matrix<T> {
    /// A `rows x cols` matrix of zeros.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    ///
    /// ```
    /// # use densemat_core::Matrix;
    /// let z = Matrix::<f64>::zeros(2, 3);
    /// assert_eq!(z.shape(), (2, 3));
    /// assert!(z.as_slice().iter().all(|&x| x == 0.0));
    /// ```
    pub fn zeros(rows: usize, cols: usize) -> Self {
        let cols = if rows == 0 { 0 } else { cols };
        Self {
            data: vec![T::zero(); element_count(rows, cols)],
            rows,
            cols,
        }
    }

    /// Build a matrix by evaluating `f(i, j)` for every element.
    ///
    /// # Panics
    ///
    /// Panics if `rows * cols` overflows `usize`.
    pub fn from_fn<F>(rows: usize, cols: usize, mut f: F) -> Self
    where
        F: FnMut(usize, usize) -> T,
    {
        let cols = if rows == 0 { 0 } else { cols };
        let mut data = Vec::with_capacity(element_count(rows, cols));
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }
}

impl Matrix<f64> {
    /// The `n x n` identity matrix.
    ///
    /// # Panics
    ///
    /// Panics if `n * n` overflows `usize`.
    ///
    /// ```
    /// # use densemat_core::Matrix;
    /// let eye = Matrix::identity(3);
    /// assert_eq!(eye.get(1, 1).unwrap(), 1.0);
    /// assert_eq!(eye.get(0, 1).unwrap(), 0.0);
    /// ```
    pub fn identity(n: usize) -> Self {
        let mut data = vec![0.0; element_count(n, n)];
        for i in 0..n {
            data[i * n + i] = 1.0;
        }
        Self {
            data,
            rows: n,
            cols: n,
        }
    }
}
