//! Linear algebra operations trait
//!
//! Determinant, inverse, linear solve, RREF, rank and pivot positions,
//! all derived from the LUP decomposition engine.

use crate::algorithm::linalg::{
    LupDecomposition, Pivot, det_impl, inverse_impl, solve_impl, trace_impl,
};
use crate::error::Result;
use crate::matrix::{Matrix, MatrixRead};
use std::sync::Arc;

/// Linear algebra operations trait
///
/// Implemented for everything that implements [`MatrixRead`]. On an owned
/// [`Matrix`] the decomposition and echelon form are cached until the
/// buffer is next written; on a [`MatrixView`](crate::matrix::MatrixView)
/// they are computed per call.
pub trait LinalgOps: MatrixRead {
    /// LUP decomposition `P·A = L·U`
    ///
    /// Never fails; check [`LupDecomposition::is_singular`] before relying on
    /// it for solving.
    fn lup(&self) -> Arc<LupDecomposition> {
        self.decompose()
    }

    /// Determinant
    ///
    /// Singular matrices yield exactly `0.0` rather than an error.
    ///
    /// # Errors
    ///
    /// - `NotSquare` if the matrix is not square
    fn det(&self) -> Result<f64> {
        det_impl(self)
    }

    /// Matrix inverse
    ///
    /// # Errors
    ///
    /// - `NotSquare` if the matrix is not square
    /// - `SingularMatrix` if the decomposition is singular
    fn inverse(&self) -> Result<Matrix> {
        inverse_impl(self)
    }

    /// Solve `self · X = b`
    ///
    /// # Algorithm
    ///
    /// ```text
    /// 1. Compute (or reuse) PA = LU
    /// 2. Solve Ly = Pb (forward substitution)
    /// 3. Solve Ux = y (backward substitution)
    /// ```
    ///
    /// # Errors
    ///
    /// - `SingularMatrix` if the matrix is singular or not square
    /// - `ShapeMismatch` if `b.rows != self.rows`
    fn solve<B: MatrixRead + ?Sized>(&self, b: &B) -> Result<Matrix> {
        solve_impl(self, b)
    }

    /// Trace: sum of diagonal elements
    ///
    /// # Errors
    ///
    /// - `NotSquare` if the matrix is not square
    fn trace(&self) -> Result<f64> {
        trace_impl(self)
    }

    /// Reduced row-echelon form
    fn rref(&self) -> Matrix {
        self.echelon().rref()
    }

    /// Number of pivots in the reduced row-echelon form
    fn rank(&self) -> usize {
        self.echelon().rank()
    }

    /// Pivot positions of the reduced row-echelon form, in order found
    fn pivot_positions(&self) -> Vec<Pivot> {
        self.echelon().pivots().to_vec()
    }
}

impl<T: MatrixRead + ?Sized> LinalgOps for T {}
