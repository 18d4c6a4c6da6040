use thiserror::Error;

/// All errors returned by `densemat-core`.
///
/// Variants are kinds, not messages: callers distinguish them with
/// `matches!` rather than by inspecting the rendered text.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Row data is not rectangular.
    #[error("inconsistent row length at row {row}: expected {expected}, got {got}")]
    Shape {
        row: usize,
        expected: usize,
        got: usize,
    },

    /// Flat data length does not match the requested dimensions.
    #[error("data length {got} does not match a {rows}x{cols} matrix")]
    InvalidData { rows: usize, cols: usize, got: usize },

    /// A zero-row matrix (or empty vector) was given where at least one
    /// element is required.
    #[error("{operation}: empty input")]
    Empty { operation: &'static str },

    /// The operation requires a square matrix.
    #[error("{operation}: matrix is not square ({rows}x{cols})")]
    NonSquare {
        operation: &'static str,
        rows: usize,
        cols: usize,
    },

    /// A pivot or column norm fell below its numerical threshold.
    #[error("{operation}: matrix is singular (|{value:e}| below threshold at step {step})")]
    Singular {
        operation: &'static str,
        step: usize,
        value: f64,
    },

    /// Operand shapes are incompatible.
    #[error("dimension mismatch: expected {expected:?}, got {got:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        got: (usize, usize),
    },

    /// Integer accumulation exceeded the range of the element type.
    #[error("{operation}: integer overflow")]
    Overflow { operation: &'static str },

    /// The zero vector was given where a direction is required.
    #[error("{operation}: zero vector has no direction")]
    ZeroVector { operation: &'static str },

    /// The operation is only defined for vectors of one fixed length.
    #[error("{operation}: expected a {expected}-dimensional vector, got {got}")]
    WrongDimension {
        operation: &'static str,
        expected: usize,
        got: usize,
    },

    /// A radial coordinate was negative.
    #[error("{operation}: radius must be non-negative, got {value}")]
    NegativeRadius { operation: &'static str, value: f64 },

    /// A rotation axis was not of unit length.
    #[error("{operation}: axis must be a unit vector, magnitude is {magnitude}")]
    NotUnit {
        operation: &'static str,
        magnitude: f64,
    },

    /// An element index is out of bounds along `axis`.
    #[error("{axis} index {index} out of bounds for length {len}")]
    IndexOutOfBounds {
        axis: &'static str,
        index: usize,
        len: usize,
    },
}

/// Convenience alias used throughout `densemat-core`.
pub type Result<T> = std::result::Result<T, CoreError>;
