//! Layout: shape, strides, and offset for matrix memory layout

use super::Shape;
use crate::error::{Error, Result};
use std::fmt;

/// Layout describes how a matrix's logical indices map into its buffer
///
/// Address of element `(row, col)`:
///   offset + row * row_stride + col * col_stride
///
/// Owned matrices are always contiguous row-major (`row_stride = cols`,
/// `col_stride = 1`, `offset = 0`). A transposed view keeps the buffer and
/// swaps the strides instead of recomputing them.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Layout {
    shape: Shape,
    row_stride: isize,
    col_stride: isize,
    offset: usize,
}

impl Layout {
    /// Create a contiguous (row-major) layout for a shape
    ///
    /// # Example
    /// ```
    /// use densela::matrix::{Layout, Shape};
    /// let layout = Layout::contiguous(Shape::new(2, 3));
    /// assert_eq!(layout.strides(), (3, 1));
    /// ```
    pub fn contiguous(shape: Shape) -> Self {
        Self {
            shape,
            row_stride: shape.cols() as isize,
            col_stride: 1,
            offset: 0,
        }
    }

    /// Create a layout with explicit strides and offset
    pub fn new(shape: Shape, row_stride: isize, col_stride: isize, offset: usize) -> Self {
        Self {
            shape,
            row_stride,
            col_stride,
            offset,
        }
    }

    /// Get the shape
    #[inline]
    pub fn shape(&self) -> Shape {
        self.shape
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.shape.rows()
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.shape.cols()
    }

    /// Get the `(row_stride, col_stride)` pair
    #[inline]
    pub fn strides(&self) -> (isize, isize) {
        (self.row_stride, self.col_stride)
    }

    /// Get the offset
    #[inline]
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Check if memory is contiguous (row-major order)
    pub fn is_contiguous(&self) -> bool {
        self.offset == 0
            && self.col_stride == 1
            && (self.rows() <= 1 || self.row_stride == self.cols() as isize)
    }

    /// Normalize a possibly negative index along `axis`.
    ///
    /// Accepts `index ∈ [-dim, dim)`; negative indices count from the end.
    pub fn normalize_index(&self, index: isize, axis: usize) -> Result<usize> {
        let dim = self.shape.axis(axis) as isize;
        if index < -dim || index >= dim {
            return Err(Error::IndexOutOfBounds {
                index,
                axis,
                size: dim as usize,
            });
        }
        let index = if index < 0 { index + dim } else { index };
        Ok(index as usize)
    }

    /// Compute the buffer offset for logical `(row, col)`, with negative
    /// index support and bounds checking
    pub fn index(&self, row: isize, col: isize) -> Result<usize> {
        let row = self.normalize_index(row, 0)?;
        let col = self.normalize_index(col, 1)?;
        Ok(self.offset_of(row, col))
    }

    /// Buffer offset for already-normalized, in-bounds `(row, col)`
    #[inline]
    pub fn offset_of(&self, row: usize, col: usize) -> usize {
        (self.offset as isize + row as isize * self.row_stride + col as isize * self.col_stride)
            as usize
    }

    /// Create a transposed layout: shape and strides swapped, same buffer
    pub fn transpose(&self) -> Self {
        Self {
            shape: self.shape.transposed(),
            row_stride: self.col_stride,
            col_stride: self.row_stride,
            offset: self.offset,
        }
    }
}

impl fmt::Debug for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Layout")
            .field("shape", &self.shape)
            .field("strides", &(self.row_stride, self.col_stride))
            .field("offset", &self.offset)
            .finish()
    }
}
