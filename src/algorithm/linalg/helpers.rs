//! Validation helpers shared by the linear algebra operations

use crate::error::{Error, Result};
use crate::matrix::Shape;

/// Validate matrix is square, returning its order
pub fn validate_square_matrix(op: &'static str, shape: Shape) -> Result<usize> {
    if !shape.is_square() {
        return Err(Error::not_square(op, shape));
    }
    Ok(shape.rows())
}

/// Validate `lhs` and `rhs` have identical shapes (elementwise operations)
pub fn validate_same_shape(op: &'static str, lhs: Shape, rhs: Shape) -> Result<()> {
    if lhs != rhs {
        return Err(Error::shape_mismatch(op, lhs, rhs));
    }
    Ok(())
}

/// Validate `lhs.cols == rhs.rows` (matrix product), returning `(m, k, n)`
pub fn validate_matmul_shapes(op: &'static str, lhs: Shape, rhs: Shape) -> Result<(usize, usize, usize)> {
    if lhs.cols() != rhs.rows() {
        return Err(Error::shape_mismatch(op, lhs, rhs));
    }
    Ok((lhs.rows(), lhs.cols(), rhs.cols()))
}
