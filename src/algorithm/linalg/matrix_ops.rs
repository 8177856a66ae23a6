//! Basic matrix properties (determinant, trace)

use super::helpers::validate_square_matrix;
use crate::error::Result;
use crate::matrix::{MatrixRead, Shape};

/// Determinant
///
/// 2×2 inputs use `a·d - b·c` directly. Everything else goes through the
/// LUP decomposition: `(-1)^swaps · Π diag(U)`, or exactly 0 when the
/// decomposition is singular.
pub fn det_impl<M: MatrixRead + ?Sized>(a: &M) -> Result<f64> {
    validate_square_matrix("determinant", a.shape())?;

    if a.shape() == Shape::square(2) {
        let layout = a.layout();
        let data = a.storage().read();
        let at = |i, j| data[layout.offset_of(i, j)];
        return Ok(at(0, 0) * at(1, 1) - at(0, 1) * at(1, 0));
    }

    a.decompose().det()
}

/// Trace: sum of diagonal elements
pub fn trace_impl<M: MatrixRead + ?Sized>(a: &M) -> Result<f64> {
    let n = validate_square_matrix("trace", a.shape())?;
    let layout = a.layout();
    let data = a.storage().read();
    Ok((0..n).map(|i| data[layout.offset_of(i, i)]).sum())
}
