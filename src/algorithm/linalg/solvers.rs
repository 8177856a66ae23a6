//! Linear system solvers built on the LUP decomposition

use super::decompositions::LupDecomposition;
use super::helpers::validate_square_matrix;
use crate::error::{Error, Result};
use crate::matrix::{Matrix, MatrixRead, Shape};
use log::debug;

impl LupDecomposition {
    /// Solve `A·X = B` for `X`, where `A` is the decomposed matrix
    ///
    /// # Algorithm
    ///
    /// ```text
    /// 1. X = rows of B permuted by perm
    /// 2. Forward substitution with the unit-lower multipliers
    /// 3. Back substitution with U: divide by the diagonal, eliminate upward
    /// ```
    ///
    /// Returns a `cols × B.cols` matrix.
    ///
    /// # Errors
    ///
    /// - `SingularMatrix` if the decomposition is flagged singular
    /// - `ShapeMismatch` if `B.rows != rows`
    pub fn solve<B: MatrixRead + ?Sized>(&self, b: &B) -> Result<Matrix> {
        if self.is_singular() {
            debug!("refusing to solve against singular {} decomposition", self.shape());
            return Err(Error::SingularMatrix { op: "solve" });
        }
        if self.rows() != b.rows() {
            return Err(Error::shape_mismatch("solve", self.shape(), b.shape()));
        }

        let n = self.rows();
        let k = b.cols();
        let lu = self.factors();
        let rhs = b.to_vec();

        let mut x = vec![0.0; self.cols() * k];
        for (i, &src) in self.perm().iter().enumerate() {
            x[i * k..(i + 1) * k].copy_from_slice(&rhs[src * k..(src + 1) * k]);
        }

        for j in 0..n {
            for i in (j + 1)..n {
                let factor = lu[i * n + j];
                for c in 0..k {
                    x[i * k + c] -= x[j * k + c] * factor;
                }
            }
        }

        for j in (0..n).rev() {
            let diag = lu[j * n + j];
            for c in 0..k {
                x[j * k + c] /= diag;
            }
            for i in 0..j {
                let factor = lu[i * n + j];
                for c in 0..k {
                    x[i * k + c] -= x[j * k + c] * factor;
                }
            }
        }

        Ok(Matrix::from_contiguous(x, Shape::new(self.cols(), k)))
    }

    /// Inverse of the decomposed matrix: solves `A·X = I`
    pub fn inverse(&self) -> Result<Matrix> {
        if !self.shape().is_square() {
            return Err(Error::not_square("inverse", self.shape()));
        }
        if self.is_singular() {
            return Err(Error::SingularMatrix { op: "inverse" });
        }
        self.solve(&Matrix::eye_like(self.shape()))
    }
}

/// Solve `A·X = B` through `a`'s (possibly cached) decomposition
pub fn solve_impl<A, B>(a: &A, b: &B) -> Result<Matrix>
where
    A: MatrixRead + ?Sized,
    B: MatrixRead + ?Sized,
{
    a.decompose().solve(b)
}

/// Matrix inverse via LU decomposition
pub fn inverse_impl<M: MatrixRead + ?Sized>(a: &M) -> Result<Matrix> {
    validate_square_matrix("inverse", a.shape())?;
    a.decompose().inverse()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algorithm::linalg::lup_decompose_impl;

    #[test]
    fn test_solve_simple() {
        // [2 1] [x]   [5]    x=2, y=1
        // [1 3] [y] = [5]
        let a = Matrix::from([[2.0, 1.0], [1.0, 3.0]]);
        let b = Matrix::column_vector(&[5.0, 5.0]);
        let x = solve_impl(&a, &b).unwrap();
        assert_eq!(x.shape(), Shape::new(2, 1));
        assert!((x.get(0, 0).unwrap() - 2.0).abs() < 1e-10);
        assert!((x.get(1, 0).unwrap() - 1.0).abs() < 1e-10);
    }

    #[test]
    fn test_solve_rejects_row_mismatch() {
        let d = lup_decompose_impl(&Matrix::identity(3));
        let err = d.solve(&Matrix::zeros((2, 1))).unwrap_err();
        assert_eq!(
            err,
            Error::shape_mismatch("solve", Shape::new(3, 3), Shape::new(2, 1))
        );
    }

    #[test]
    fn test_singular_inverse_fails() {
        let a = Matrix::from([[1.0, 2.0], [2.0, 4.0]]);
        assert_eq!(
            inverse_impl(&a).unwrap_err(),
            Error::SingularMatrix { op: "inverse" }
        );
    }

    #[test]
    fn test_inverse_requires_square() {
        let a = Matrix::zeros((2, 3));
        assert!(matches!(
            inverse_impl(&a),
            Err(Error::NotSquare { op: "inverse", .. })
        ));
    }
}
