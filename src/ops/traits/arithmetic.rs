//! Elementwise and matrix-product operations trait

use crate::algorithm::linalg::{validate_matmul_shapes, validate_same_shape};
use crate::error::Result;
use crate::matrix::{Matrix, MatrixRead};
use crate::ops::matmul::matmul_kernel;

/// Arithmetic on matrices and views
///
/// Every method returns a new owned [`Matrix`]; operands are never written.
/// Implemented for everything that implements [`MatrixRead`].
pub trait ArithmeticOps: MatrixRead {
    /// Elementwise `self + rhs`
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` unless the shapes are equal
    fn add<M: MatrixRead + ?Sized>(&self, rhs: &M) -> Result<Matrix> {
        validate_same_shape("matrix addition", self.shape(), rhs.shape())?;
        let data = self
            .to_vec()
            .into_iter()
            .zip(rhs.to_vec())
            .map(|(a, b)| a + b)
            .collect();
        Ok(Matrix::from_contiguous(data, self.shape()))
    }

    /// Elementwise `self - rhs`
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` unless the shapes are equal
    fn subtract<M: MatrixRead + ?Sized>(&self, rhs: &M) -> Result<Matrix> {
        validate_same_shape("matrix subtraction", self.shape(), rhs.shape())?;
        let data = self
            .to_vec()
            .into_iter()
            .zip(rhs.to_vec())
            .map(|(a, b)| a - b)
            .collect();
        Ok(Matrix::from_contiguous(data, self.shape()))
    }

    /// Matrix product `self @ rhs`
    ///
    /// # Errors
    ///
    /// - `ShapeMismatch` if `self.cols != rhs.rows`
    ///
    /// # Example
    ///
    /// ```
    /// use densela::prelude::*;
    ///
    /// let d = Matrix::from([[7.0, 2.0], [-4.0, -1.0]]);
    /// let c = Matrix::from([[-1.0, 9.0, -6.0], [7.0, 5.0, 0.0]]);
    /// let a = Matrix::from([[4.0, 1.0, -3.0], [0.0, 2.0, 8.0]]);
    /// let r = d.mul(&c)?.subtract(&a)?;
    /// assert_eq!(r, Matrix::from([[-3.0, 53.0, 36.0], [-39.0, -41.0, 24.0]]));
    /// # Ok::<(), densela::error::Error>(())
    /// ```
    fn mul<M: MatrixRead + ?Sized>(&self, rhs: &M) -> Result<Matrix> {
        let (m, k, n) =
            validate_matmul_shapes("matrix multiplication", self.shape(), rhs.shape())?;
        let a = self.to_vec();
        let b = rhs.to_vec();
        let mut out = vec![0.0; m * n];
        matmul_kernel(&a, &b, &mut out, m, k, n);
        Ok(Matrix::from_contiguous(out, (m, n).into()))
    }

    /// Multiply every element by `factor`
    fn scale(&self, factor: f64) -> Matrix {
        let data = self.to_vec().into_iter().map(|v| v * factor).collect();
        Matrix::from_contiguous(data, self.shape())
    }
}

impl<T: MatrixRead + ?Sized> ArithmeticOps for T {}
