//! Shape type: row and column extents of a matrix

use std::fmt;

/// Shape type: `(rows, cols)` of a matrix
///
/// Immutable and compared by value. A shape with a zero extent is a
/// degenerate, scalar-compatible shape; its [`size`](Self::size) is 1.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    rows: usize,
    cols: usize,
}

impl Shape {
    /// Create a shape.
    #[inline]
    pub const fn new(rows: usize, cols: usize) -> Self {
        Self { rows, cols }
    }

    /// Create a square `n × n` shape.
    #[inline]
    pub const fn square(n: usize) -> Self {
        Self { rows: n, cols: n }
    }

    /// Number of rows.
    #[inline]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns.
    #[inline]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Extent along `axis` (0 = rows, 1 = cols).
    #[inline]
    pub fn axis(&self, axis: usize) -> usize {
        if axis == 0 { self.rows } else { self.cols }
    }

    /// Logical size: `max(rows * cols, 1)`.
    #[inline]
    pub const fn size(&self) -> usize {
        let n = self.rows * self.cols;
        if n == 0 { 1 } else { n }
    }

    /// Number of stored elements: `rows * cols`.
    #[inline]
    pub const fn elem_count(&self) -> usize {
        self.rows * self.cols
    }

    /// Whether rows == cols.
    #[inline]
    pub const fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Shape with rows and cols swapped.
    #[inline]
    pub const fn transposed(&self) -> Self {
        Self {
            rows: self.cols,
            cols: self.rows,
        }
    }

    /// Smaller of the two extents.
    #[inline]
    pub fn min_dim(&self) -> usize {
        self.rows.min(self.cols)
    }
}

impl fmt::Debug for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Shape({}, {})", self.rows, self.cols)
    }
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.rows, self.cols)
    }
}

impl From<(usize, usize)> for Shape {
    fn from((rows, cols): (usize, usize)) -> Self {
        Self::new(rows, cols)
    }
}

impl From<[usize; 2]> for Shape {
    fn from([rows, cols]: [usize; 2]) -> Self {
        Self::new(rows, cols)
    }
}
