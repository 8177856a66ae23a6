//! Strided views over another matrix's buffer

use super::{Layout, Matrix, MatrixRead, MatrixWrite, Storage};
use std::fmt;

/// Non-owning, re-strided view of a matrix buffer
///
/// Produced by [`Matrix::transpose`] and [`MatrixView::transpose`] in O(1)
/// without copying. Reads and writes go to the shared buffer. A view holds no
/// decomposition cache: the decomposition of `Aᵗ` is a different object from
/// that of `A`, so every decomposition requested through a view is computed
/// fresh.
///
/// Cloning a view yields another view of the same buffer.
#[derive(Clone)]
pub struct MatrixView {
    storage: Storage,
    layout: Layout,
}

impl MatrixView {
    pub(crate) fn new(storage: Storage, layout: Layout) -> Self {
        Self { storage, layout }
    }

    /// Transpose of this view, still over the same buffer
    pub fn transpose(&self) -> MatrixView {
        Self::new(self.storage.clone(), self.layout.transpose())
    }
}

impl MatrixRead for MatrixView {
    #[inline]
    fn storage(&self) -> &Storage {
        &self.storage
    }

    #[inline]
    fn layout(&self) -> &Layout {
        &self.layout
    }
}

impl MatrixWrite for MatrixView {}

impl PartialEq for MatrixView {
    fn eq(&self, other: &Self) -> bool {
        self.shape() == other.shape() && self.to_vec() == other.to_vec()
    }
}

impl PartialEq<Matrix> for MatrixView {
    fn eq(&self, other: &Matrix) -> bool {
        other == self
    }
}

impl fmt::Debug for MatrixView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MatrixView")
            .field("layout", &self.layout)
            .field("data", &self.to_vec())
            .finish()
    }
}
