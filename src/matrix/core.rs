//! Core Matrix type

use super::cache::DecompCache;
use super::{Layout, MatrixRead, MatrixView, MatrixWrite, Shape, Storage};
use crate::algorithm::linalg::{EchelonForm, LupDecomposition, lup_decompose_impl, rref_impl};
use crate::error::{Error, Result};
use log::trace;
use parking_lot::Mutex;
use std::fmt;
use std::sync::Arc;

/// Dense `f64` matrix that owns its buffer
///
/// A `Matrix` consists of:
/// - **Storage**: reference-counted buffer, shared with any views
/// - **Layout**: always contiguous row-major for an owned matrix
/// - **Cache**: the most recent LUP decomposition and echelon form
///
/// # Zero-Copy Views
///
/// [`transpose`](Self::transpose) returns a [`MatrixView`] over the same
/// buffer with its strides swapped. Writes through either handle are visible
/// through the other. The view carries no cache of its own; this matrix's
/// cache is keyed to the buffer version, so writes through the view make it
/// stale and it is recomputed on the next request.
///
/// # Example
///
/// ```
/// use densela::prelude::*;
///
/// let a = Matrix::from([[4.0, 3.0], [6.0, 3.0]]);
/// assert!((a.det().unwrap() - (-6.0)).abs() < 1e-12);
/// let at = a.transpose(); // shares storage with a
/// assert_eq!(at.get(0, 1).unwrap(), 6.0);
/// ```
pub struct Matrix {
    storage: Storage,
    layout: Layout,
    cache: Mutex<DecompCache>,
}

impl Matrix {
    /// Wrap a row-major buffer whose length is already known to match
    pub(crate) fn from_contiguous(data: Vec<f64>, shape: Shape) -> Self {
        debug_assert_eq!(data.len(), shape.elem_count());
        Self {
            storage: Storage::from_vec(data),
            layout: Layout::contiguous(shape),
            cache: Mutex::new(DecompCache::default()),
        }
    }

    /// Create a matrix filled with zeros
    pub fn zeros(shape: impl Into<Shape>) -> Self {
        let shape = shape.into();
        Self::from_contiguous(vec![0.0; shape.elem_count()], shape)
    }

    /// Create a matrix with every element set to `value`
    pub fn filled(shape: impl Into<Shape>, value: f64) -> Self {
        let shape = shape.into();
        Self::from_contiguous(vec![value; shape.elem_count()], shape)
    }

    /// Create a matrix from a flat row-major buffer
    ///
    /// Returns `LengthMismatch` if `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<f64>, shape: impl Into<Shape>) -> Result<Self> {
        let shape = shape.into();
        if data.len() != shape.elem_count() {
            return Err(Error::LengthMismatch {
                expected: shape.elem_count(),
                got: data.len(),
            });
        }
        Ok(Self::from_contiguous(data, shape))
    }

    /// Create a matrix from nested rows
    ///
    /// Returns `RaggedInput` if the rows have different lengths.
    ///
    /// # Example
    ///
    /// ```
    /// use densela::prelude::*;
    ///
    /// let m = Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0, 4.0]]).unwrap();
    /// assert_eq!(m.shape(), Shape::new(2, 2));
    /// assert!(Matrix::from_rows(&[vec![1.0, 2.0], vec![3.0]]).is_err());
    /// ```
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let expected = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * expected);
        for (i, r) in rows.iter().enumerate() {
            let r = r.as_ref();
            if r.len() != expected {
                return Err(Error::RaggedInput {
                    row: i,
                    len: r.len(),
                    expected,
                });
            }
            data.extend_from_slice(r);
        }
        Ok(Self::from_contiguous(data, Shape::new(rows.len(), expected)))
    }

    /// Create a matrix by evaluating `f(row, col)` for every element
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> f64) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self::from_contiguous(data, Shape::new(rows, cols))
    }

    /// `1 × n` matrix
    pub fn row_vector(values: &[f64]) -> Self {
        Self::from_contiguous(values.to_vec(), Shape::new(1, values.len()))
    }

    /// `n × 1` matrix
    pub fn column_vector(values: &[f64]) -> Self {
        Self::from_contiguous(values.to_vec(), Shape::new(values.len(), 1))
    }

    /// `rows × cols` matrix with ones on the main diagonal
    pub fn eye(rows: usize, cols: usize) -> Self {
        Self::eye_offset(rows, cols, 0)
    }

    /// `rows × cols` matrix with ones on the `k`-th diagonal.
    ///
    /// `k > 0` is above the main diagonal, `k < 0` below it.
    pub fn eye_offset(rows: usize, cols: usize, k: isize) -> Self {
        Self::from_fn(rows, cols, |i, j| {
            if j as isize - i as isize == k { 1.0 } else { 0.0 }
        })
    }

    /// Square identity matrix
    pub fn identity(n: usize) -> Self {
        Self::eye(n, n)
    }

    /// Identity of the given shape
    pub fn eye_like(shape: impl Into<Shape>) -> Self {
        let shape = shape.into();
        Self::eye(shape.rows(), shape.cols())
    }

    /// The single value of a `1 × 1` matrix
    pub fn item(&self) -> Result<f64> {
        if self.shape() != Shape::new(1, 1) {
            return Err(Error::shape_mismatch("item", self.shape(), Shape::new(1, 1)));
        }
        Ok(self.storage.read()[0])
    }

    /// Zero-copy transpose: a view over this buffer with strides swapped
    pub fn transpose(&self) -> MatrixView {
        MatrixView::new(self.storage.clone(), self.layout.transpose())
    }

    /// Whether a decomposition or echelon form is currently cached and
    /// still matches the buffer contents
    pub fn has_cached_decomposition(&self) -> bool {
        let version = self.storage.version();
        let mut cache = self.cache.lock();
        cache.lup(version).is_some() || cache.echelon(version).is_some()
    }
}

impl MatrixRead for Matrix {
    #[inline]
    fn storage(&self) -> &Storage {
        &self.storage
    }

    #[inline]
    fn layout(&self) -> &Layout {
        &self.layout
    }

    fn decompose(&self) -> Arc<LupDecomposition> {
        let version = self.storage.version();
        let mut cache = self.cache.lock();
        if let Some(lup) = cache.lup(version) {
            trace!("decomposition cache hit for {} matrix", self.shape());
            return lup;
        }
        trace!("decomposition cache miss for {} matrix", self.shape());
        let lup = Arc::new(lup_decompose_impl(self));
        cache.store_lup(version, Arc::clone(&lup));
        lup
    }

    fn echelon(&self) -> Arc<EchelonForm> {
        let version = self.storage.version();
        let mut cache = self.cache.lock();
        if let Some(echelon) = cache.echelon(version) {
            trace!("echelon cache hit for {} matrix", self.shape());
            return echelon;
        }
        let echelon = Arc::new(rref_impl(self));
        cache.store_echelon(version, Arc::clone(&echelon));
        echelon
    }
}

impl MatrixWrite for Matrix {
    fn invalidate(&mut self) {
        self.cache.get_mut().clear();
    }
}

impl Clone for Matrix {
    /// Deep copy: the clone gets its own buffer and a copy of the cache.
    fn clone(&self) -> Self {
        Self {
            storage: self.storage.deep_copy(),
            layout: self.layout,
            cache: Mutex::new(self.cache.lock().clone()),
        }
    }
}

impl<const R: usize, const C: usize> From<[[f64; C]; R]> for Matrix {
    fn from(rows: [[f64; C]; R]) -> Self {
        Self::from_contiguous(rows.concat(), Shape::new(R, C))
    }
}

impl PartialEq for Matrix {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.to_vec() == other.to_vec()
    }
}

impl PartialEq<MatrixView> for Matrix {
    fn eq(&self, other: &MatrixView) -> bool {
        self.shape() == other.shape() && self.to_vec() == other.to_vec()
    }
}

impl fmt::Debug for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Matrix")
            .field("shape", &self.shape())
            .field("data", &self.to_vec())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::LinalgOps;

    #[test]
    fn test_eye_offset() {
        let m = Matrix::eye_offset(3, 4, 1);
        assert_eq!(
            m.to_vec(),
            vec![0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 0.0, 1.0]
        );
        let m = Matrix::eye_offset(3, 2, -1);
        assert_eq!(m.to_vec(), vec![0.0, 0.0, 1.0, 0.0, 0.0, 1.0]);
    }

    #[test]
    fn test_from_vec_length_checked() {
        assert_eq!(
            Matrix::from_vec(vec![1.0; 5], (2, 3)).unwrap_err(),
            Error::LengthMismatch {
                expected: 6,
                got: 5
            }
        );
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Matrix::from_rows(&[vec![1.0, 2.0, 3.0], vec![4.0, 5.0], vec![6.0]]).unwrap_err();
        assert_eq!(
            err,
            Error::RaggedInput {
                row: 1,
                len: 2,
                expected: 3
            }
        );
    }

    #[test]
    fn test_set_invalidates_cache() {
        let mut m = Matrix::from([[2.0, 1.0], [1.0, 3.0]]);
        let first = m.decompose();
        assert!(Arc::ptr_eq(&first, &m.decompose()));
        m.set(0, 0, 4.0).unwrap();
        assert!(!m.has_cached_decomposition());
        let second = m.decompose();
        assert!(!Arc::ptr_eq(&first, &second));
        assert!((m.det().unwrap() - 11.0).abs() < 1e-12);
    }

    #[test]
    fn test_write_through_view_makes_cache_stale() {
        let m = Matrix::from([[2.0, 0.0, 0.0], [0.0, 3.0, 0.0], [0.0, 0.0, 4.0]]);
        assert!((m.det().unwrap() - 24.0).abs() < 1e-12);
        let mut view = m.transpose();
        view.set(1, 1, 5.0).unwrap();
        assert!(!m.has_cached_decomposition());
        assert!((m.det().unwrap() - 40.0).abs() < 1e-12);
    }

    #[test]
    fn test_clone_is_deep() {
        let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
        let mut b = a.clone();
        assert!(!a.shares_buffer(&b));
        b.set(0, 0, 10.0).unwrap();
        assert_eq!(a.get(0, 0).unwrap(), 1.0);
        assert_ne!(a, b);
    }

    #[test]
    fn test_item() {
        assert_eq!(Matrix::from([[5.0]]).item().unwrap(), 5.0);
        assert!(matches!(
            Matrix::zeros((1, 2)).item(),
            Err(Error::ShapeMismatch { op: "item", .. })
        ));
    }
}
