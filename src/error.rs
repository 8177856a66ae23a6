//! Error types for densela

use crate::matrix::Shape;
use thiserror::Error;

/// Result type alias using densela's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur in densela operations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Operand shapes are incompatible for the requested operation
    #[error("cannot perform {op} between shapes {lhs} and {rhs}")]
    ShapeMismatch {
        /// The operation name
        op: &'static str,
        /// Left-hand side shape
        lhs: Shape,
        /// Right-hand side shape
        rhs: Shape,
    },

    /// Logical index outside `[-size, size)` on an axis
    #[error("index {index} out of range for axis {axis} of length {size}")]
    IndexOutOfBounds {
        /// The invalid index, as given by the caller
        index: isize,
        /// Axis the index was applied to (0 = rows, 1 = cols)
        axis: usize,
        /// Length of that axis
        size: usize,
    },

    /// Nested input rows have different lengths
    #[error("row {row} has length {len}, expected {expected} (length of row 0)")]
    RaggedInput {
        /// Index of the first offending row
        row: usize,
        /// Its length
        len: usize,
        /// Length of the first row
        expected: usize,
    },

    /// Flat buffer length does not match the requested shape
    #[error("data length {got} does not match shape with {expected} elements")]
    LengthMismatch {
        /// rows * cols of the requested shape
        expected: usize,
        /// Actual buffer length
        got: usize,
    },

    /// Operation requires a square matrix
    #[error("{op} requires a square matrix, got shape {shape}")]
    NotSquare {
        /// The operation name
        op: &'static str,
        /// Shape of the offending matrix
        shape: Shape,
    },

    /// Operation requires a non-singular decomposition
    #[error("matrix is singular, cannot compute {op}")]
    SingularMatrix {
        /// The operation name
        op: &'static str,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(op: &'static str, lhs: Shape, rhs: Shape) -> Self {
        Self::ShapeMismatch { op, lhs, rhs }
    }

    /// Create a not-square error
    pub fn not_square(op: &'static str, shape: Shape) -> Self {
        Self::NotSquare { op, shape }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}
