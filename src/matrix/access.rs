//! Read and write access shared by owned matrices and views

use super::{Layout, Matrix, Shape, Storage};
use crate::algorithm::linalg::{EchelonForm, LupDecomposition, lup_decompose_impl, rref_impl};
use crate::error::{Error, Result};
use crate::ops::row;
use std::sync::Arc;

/// Read access to a strided matrix
///
/// Implemented by [`Matrix`] (owns its buffer and caches derived state) and
/// [`MatrixView`](super::MatrixView) (shares another matrix's buffer).
/// Every operation in [`ArithmeticOps`](crate::ops::ArithmeticOps) and
/// [`LinalgOps`](crate::ops::LinalgOps) is available on anything that
/// implements this trait.
pub trait MatrixRead {
    /// Underlying buffer handle
    fn storage(&self) -> &Storage;

    /// Shape, strides, and offset into [`storage`](Self::storage)
    fn layout(&self) -> &Layout;

    /// Shape of the matrix
    #[inline]
    fn shape(&self) -> Shape {
        self.layout().shape()
    }

    /// Number of rows
    #[inline]
    fn rows(&self) -> usize {
        self.layout().rows()
    }

    /// Number of columns
    #[inline]
    fn cols(&self) -> usize {
        self.layout().cols()
    }

    /// Whether rows == cols
    #[inline]
    fn is_square(&self) -> bool {
        self.shape().is_square()
    }

    /// Element at `(row, col)`; negative indices count from the end
    fn get(&self, row: isize, col: isize) -> Result<f64> {
        let idx = self.layout().index(row, col)?;
        Ok(self.storage().read()[idx])
    }

    /// Elements in logical row-major order
    fn to_vec(&self) -> Vec<f64> {
        let layout = self.layout();
        let data = self.storage().read();
        if layout.is_contiguous() {
            return data[..layout.shape().elem_count()].to_vec();
        }
        let mut out = Vec::with_capacity(layout.shape().elem_count());
        for i in 0..layout.rows() {
            for j in 0..layout.cols() {
                out.push(data[layout.offset_of(i, j)]);
            }
        }
        out
    }

    /// Copy into a fresh owned, contiguous matrix
    fn to_matrix(&self) -> Matrix {
        Matrix::from_contiguous(self.to_vec(), self.shape())
    }

    /// Whether `other` reads from the same buffer
    fn shares_buffer<M: MatrixRead + ?Sized>(&self, other: &M) -> bool {
        self.storage().ptr_eq(other.storage())
    }

    /// Elementwise comparison within an absolute tolerance; shapes must match
    fn allclose<M: MatrixRead + ?Sized>(&self, other: &M, tol: f64) -> bool {
        self.shape() == other.shape()
            && self
                .to_vec()
                .iter()
                .zip(other.to_vec())
                .all(|(a, b)| (a - b).abs() <= tol)
    }

    /// LUP decomposition of this matrix.
    ///
    /// Computed fresh on every call unless the implementor caches it.
    fn decompose(&self) -> Arc<LupDecomposition> {
        Arc::new(lup_decompose_impl(self))
    }

    /// Reduced row-echelon form and pivot positions of this matrix.
    ///
    /// Computed fresh on every call unless the implementor caches it.
    fn echelon(&self) -> Arc<EchelonForm> {
        Arc::new(rref_impl(self))
    }
}

/// Mutation entry points
///
/// Every method writes through [`Storage::write`], which advances the
/// buffer's version, and then calls [`invalidate`](Self::invalidate).
pub trait MatrixWrite: MatrixRead {
    /// Drop derived state held by this handle. Called after every write.
    fn invalidate(&mut self) {}

    /// Overwrite the element at `(row, col)`
    fn set(&mut self, row: isize, col: isize, value: f64) -> Result<()> {
        let idx = self.layout().index(row, col)?;
        self.storage().write()[idx] = value;
        self.invalidate();
        Ok(())
    }

    /// Exchange two rows
    fn swap_rows(&mut self, a: isize, b: isize) -> Result<()> {
        let layout = *self.layout();
        let a = layout.normalize_index(a, 0)?;
        let b = layout.normalize_index(b, 0)?;
        row::swap_rows(&mut self.storage().write(), &layout, a, b);
        self.invalidate();
        Ok(())
    }

    /// Multiply a row by `factor`
    fn scale_row(&mut self, row: isize, factor: f64) -> Result<()> {
        let layout = *self.layout();
        let row = layout.normalize_index(row, 0)?;
        row::scale_row(&mut self.storage().write(), &layout, row, factor, 0);
        self.invalidate();
        Ok(())
    }

    /// `row[target] += factor * row[source]`
    fn combine_rows(&mut self, target: isize, source: isize, factor: f64) -> Result<()> {
        let layout = *self.layout();
        let target = layout.normalize_index(target, 0)?;
        let source = layout.normalize_index(source, 0)?;
        row::combine_rows(&mut self.storage().write(), &layout, target, source, factor, 0);
        self.invalidate();
        Ok(())
    }

    /// Elementwise `self += other`
    fn add_in_place<M: MatrixRead + ?Sized>(&mut self, other: &M) -> Result<()> {
        self.zip_in_place(other, "matrix addition", |a, b| a + b)
    }

    /// Elementwise `self -= other`
    fn sub_in_place<M: MatrixRead + ?Sized>(&mut self, other: &M) -> Result<()> {
        self.zip_in_place(other, "matrix subtraction", |a, b| a - b)
    }

    #[doc(hidden)]
    fn zip_in_place<M, F>(&mut self, other: &M, op: &'static str, f: F) -> Result<()>
    where
        M: MatrixRead + ?Sized,
        F: Fn(f64, f64) -> f64,
    {
        if self.shape() != other.shape() {
            return Err(Error::shape_mismatch(op, self.shape(), other.shape()));
        }
        // other may alias self's buffer: gather before taking the write lock
        let rhs = other.to_vec();
        let layout = *self.layout();
        {
            let mut data = self.storage().write();
            let cols = layout.cols();
            for (k, b) in rhs.into_iter().enumerate() {
                let idx = layout.offset_of(k / cols, k % cols);
                data[idx] = f(data[idx], b);
            }
        }
        self.invalidate();
        Ok(())
    }
}
