//! `Display` formatting for [`Matrix`].
//!
//! ```text
//! {
//!   [ 1, 20],
//!   [30,  4]
//! }
//! ```
//!
//! Each column is right-aligned to its widest entry. A precision flag
//! (`{:.2}`) fixes the number of decimals for float matrices and is ignored
//! for integer matrices.

use core::fmt;

use crate::Scalar;

use super::Matrix;

impl<T: Scalar> fmt::Display for Matrix<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "[]");
        }

        let precision = f.precision().filter(|_| T::is_float());
        let cells: Vec<String> = self
            .data
            .iter()
            .map(|v| match precision {
                Some(p) => format!("{v:.p$}"),
                None => format!("{v}"),
            })
            .collect();

        let mut widths = vec![0usize; self.cols];
        for (idx, cell) in cells.iter().enumerate() {
            let c = idx % self.cols;
            widths[c] = widths[c].max(cell.len());
        }

        writeln!(f, "{{")?;
        for r in 0..self.rows {
            write!(f, "  [")?;
            for c in 0..self.cols {
                if c > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{:>w$}", cells[r * self.cols + c], w = widths[c])?;
            }
            write!(f, "]")?;
            if r < self.rows - 1 {
                write!(f, ",")?;
            }
            writeln!(f)?;
        }
        write!(f, "}}")
    }
}
