//! LUP decomposition with partial pivoting
//!
//! Left-looking Doolittle elimination, column by column:
//!
//! ```text
//! for j in 0..cols:
//!     for i < j:        lu[i][j] -= Σ_{k<i} lu[i][k] * lu[k][j]      (U above diagonal)
//!     for i in j..rows: lu[i][j] -= Σ_{k<j} lu[i][k] * lu[k][j]      (pivot candidates)
//!     max = argmax |lu[i][j]| over i >= j
//!     if |lu[max][j]| < EPS: mark singular
//!     if max != j or column degenerate: swap rows max, j; count the swap
//!     lu[i][j] /= lu[j][j] for i > j                                   (L multipliers)
//! ```
//!
//! A degenerate column does not stop the loop: later columns are still
//! processed, so rank-deficient and rectangular inputs yield a complete
//! (if unusable for solving) factorization.

use crate::config::EPS;
use crate::error::{Error, Result};
use crate::matrix::{Layout, Matrix, MatrixRead, Shape};
use crate::ops::row;
use log::{debug, trace};
use std::fmt;
use std::sync::OnceLock;

/// LUP decomposition result: `P·A = L·U`
///
/// Built once by [`lup_decompose_impl`] and immutable afterwards. `L`, `U`
/// and `P` are derived from the combined storage the first time they are
/// requested and kept; every accessor hands out a fresh copy.
pub struct LupDecomposition {
    /// Strictly-lower part: multipliers of L. Upper part with diagonal: U.
    lu: Vec<f64>,
    layout: Layout,
    /// Decomposition row -> original row
    perm: Vec<usize>,
    /// Row swaps performed (determinant sign is `(-1)^num_permutations`)
    num_permutations: usize,
    singular: bool,
    /// Columns whose diagonal was non-zero during elimination
    pivot_columns: Vec<usize>,
    lower: OnceLock<Matrix>,
    upper: OnceLock<Matrix>,
    permutation: OnceLock<Matrix>,
}

/// Compute the LUP decomposition of `a`.
///
/// Works on a private copy; `a` is never written. Never fails: a
/// non-square input or a column without a usable pivot only sets the
/// singular flag.
pub fn lup_decompose_impl<M: MatrixRead + ?Sized>(a: &M) -> LupDecomposition {
    let shape = a.shape();
    let (m, n) = (shape.rows(), shape.cols());
    let layout = Layout::contiguous(shape);

    let mut lu = a.to_vec();
    let mut perm: Vec<usize> = (0..m).collect();
    let mut pivot_columns = Vec::with_capacity(shape.min_dim());
    let mut num_permutations = 0usize;
    let mut singular = !shape.is_square();

    for j in 0..n {
        for i in 0..j.min(m) {
            backward_solve(&mut lu, n, i, j);
        }

        let mut max = j;
        let mut largest = f64::NEG_INFINITY;
        for i in j..m {
            let sum = backward_solve(&mut lu, n, i, j).abs();
            if sum > largest {
                largest = sum;
                max = i;
            }
        }

        if j >= m {
            continue;
        }

        let degenerate = lu[max * n + j].abs() < EPS;
        if degenerate {
            debug!("column {j} of {shape} matrix has no usable pivot, marking singular");
            singular = true;
        }
        if max != j || degenerate {
            trace!("swapping rows {max} and {j}");
            row::swap_rows(&mut lu, &layout, max, j);
            perm.swap(max, j);
            num_permutations += 1;
        }

        let diag = lu[j * n + j];
        if diag != 0.0 {
            pivot_columns.push(j);
            for i in (j + 1)..m {
                lu[i * n + j] /= diag;
            }
        }
    }

    LupDecomposition {
        lu,
        layout,
        perm,
        num_permutations,
        singular,
        pivot_columns,
        lower: OnceLock::new(),
        upper: OnceLock::new(),
        permutation: OnceLock::new(),
    }
}

/// `lu[i][j] -= Σ_{k < min(i, j)} lu[i][k] * lu[k][j]`, stored in place and returned.
#[inline]
fn backward_solve(lu: &mut [f64], n: usize, i: usize, j: usize) -> f64 {
    let mut sum = lu[i * n + j];
    for k in 0..i.min(j) {
        sum -= lu[i * n + k] * lu[k * n + j];
    }
    lu[i * n + j] = sum;
    sum
}

impl LupDecomposition {
    /// Combined factors, row-major
    #[inline]
    pub(crate) fn factors(&self) -> &[f64] {
        &self.lu
    }

    #[inline]
    fn at(&self, row: usize, col: usize) -> f64 {
        self.lu[self.layout.offset_of(row, col)]
    }

    /// Shape of the decomposed matrix
    #[inline]
    pub fn shape(&self) -> Shape {
        self.layout.shape()
    }

    /// Number of rows of the decomposed matrix
    #[inline]
    pub fn rows(&self) -> usize {
        self.layout.rows()
    }

    /// Number of columns of the decomposed matrix
    #[inline]
    pub fn cols(&self) -> usize {
        self.layout.cols()
    }

    /// Permutation: row `i` of `L·U` is row `perm()[i]` of the input
    #[inline]
    pub fn perm(&self) -> &[usize] {
        &self.perm
    }

    /// Number of row swaps performed
    #[inline]
    pub fn num_permutations(&self) -> usize {
        self.num_permutations
    }

    /// Whether the input was non-square or had a column with no pivot
    /// above [`EPS`]
    #[inline]
    pub fn is_singular(&self) -> bool {
        self.singular
    }

    /// Columns whose diagonal entry was non-zero during elimination
    #[inline]
    pub fn pivot_columns(&self) -> &[usize] {
        &self.pivot_columns
    }

    /// The combined factor matrix (multipliers below, U on and above the
    /// diagonal)
    pub fn combined(&self) -> Matrix {
        Matrix::from_contiguous(self.lu.clone(), self.shape())
    }

    /// Unit lower-triangular factor, `rows × rows`
    pub fn l(&self) -> Matrix {
        self.lower
            .get_or_init(|| {
                let (m, n) = (self.rows(), self.cols());
                Matrix::from_fn(m, m, |i, j| match i.cmp(&j) {
                    std::cmp::Ordering::Equal => 1.0,
                    std::cmp::Ordering::Greater if j < n => self.at(i, j),
                    _ => 0.0,
                })
            })
            .clone()
    }

    /// Upper-triangular factor, `rows × cols`
    pub fn u(&self) -> Matrix {
        self.upper
            .get_or_init(|| {
                Matrix::from_fn(self.rows(), self.cols(), |i, j| {
                    if i <= j { self.at(i, j) } else { 0.0 }
                })
            })
            .clone()
    }

    /// Permutation matrix, `rows × rows`, with `P[i][perm[i]] = 1`
    pub fn p(&self) -> Matrix {
        self.permutation
            .get_or_init(|| {
                let m = self.rows();
                Matrix::from_fn(m, m, |i, j| if self.perm[i] == j { 1.0 } else { 0.0 })
            })
            .clone()
    }

    /// Determinant: `(-1)^num_permutations · Π diag(U)`, or exactly 0 when
    /// singular
    ///
    /// Returns `NotSquare` for a non-square decomposition.
    pub fn det(&self) -> Result<f64> {
        if !self.shape().is_square() {
            return Err(Error::not_square("determinant", self.shape()));
        }
        if self.singular {
            return Ok(0.0);
        }
        let sign = if self.num_permutations % 2 == 0 { 1.0 } else { -1.0 };
        Ok((0..self.rows()).fold(sign, |acc, i| acc * self.at(i, i)))
    }
}

impl fmt::Debug for LupDecomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LupDecomposition")
            .field("shape", &self.shape())
            .field("lu", &self.lu)
            .field("perm", &self.perm)
            .field("num_permutations", &self.num_permutations)
            .field("singular", &self.singular)
            .finish()
    }
}

impl fmt::Display for LupDecomposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "L: {}\nU: {}\nP: {}", self.l(), self.u(), self.p())
    }
}
