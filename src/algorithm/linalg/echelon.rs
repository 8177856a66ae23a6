//! Reduced row-echelon form, rank, and pivot positions

use crate::config::EPS;
use crate::matrix::{Layout, Matrix, MatrixRead, Shape};
use crate::ops::row;

/// Position of a pivot in the reduced row-echelon form
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Pivot {
    /// Row holding the leading 1
    pub row: usize,
    /// Column of the leading 1
    pub col: usize,
}

/// Result of Gauss-Jordan elimination
#[derive(Clone, Debug)]
pub struct EchelonForm {
    rref: Vec<f64>,
    shape: Shape,
    pivots: Vec<Pivot>,
}

impl EchelonForm {
    /// The reduced row-echelon form as a fresh matrix
    pub fn rref(&self) -> Matrix {
        Matrix::from_contiguous(self.rref.clone(), self.shape)
    }

    /// Pivots in the order they were found (ascending row and column)
    pub fn pivots(&self) -> &[Pivot] {
        &self.pivots
    }

    /// Number of pivots
    pub fn rank(&self) -> usize {
        self.pivots.len()
    }
}

/// Gauss-Jordan elimination on a private copy of `a`
///
/// For each column, the rows not yet holding a pivot are scanned
/// bottom-up for the entry of largest magnitude that is at least [`EPS`].
/// That row is moved up to become the next pivot row and normalized so its
/// leading entry is 1, and the column is cleared in every other row, above
/// and below. Entries smaller than [`EPS`] left over at the end are set to
/// exactly 0, which makes the result a fixed point: `rref(rref(A)) == rref(A)`.
pub fn rref_impl<M: MatrixRead + ?Sized>(a: &M) -> EchelonForm {
    let shape = a.shape();
    let (m, n) = (shape.rows(), shape.cols());
    let layout = Layout::contiguous(shape);
    let mut work = a.to_vec();
    let mut pivots = Vec::with_capacity(shape.min_dim());

    let mut next_row = 0;
    for j in 0..n {
        if next_row == m {
            break;
        }

        let mut best: Option<(usize, f64)> = None;
        for i in (next_row..m).rev() {
            let mag = work[i * n + j].abs();
            if mag >= EPS && best.is_none_or(|(_, b)| mag > b) {
                best = Some((i, mag));
            }
        }
        let Some((src, _)) = best else {
            continue;
        };

        row::swap_rows(&mut work, &layout, src, next_row);
        let lead = work[next_row * n + j];
        row::scale_row(&mut work, &layout, next_row, lead.recip(), j);
        work[next_row * n + j] = 1.0;

        for i in 0..m {
            if i == next_row {
                continue;
            }
            let factor = work[i * n + j];
            if factor != 0.0 {
                row::combine_rows(&mut work, &layout, i, next_row, -factor, j);
                work[i * n + j] = 0.0;
            }
        }

        pivots.push(Pivot { row: next_row, col: j });
        next_row += 1;
    }

    for v in work.iter_mut() {
        if v.abs() < EPS {
            *v = 0.0;
        }
    }

    EchelonForm {
        rref: work,
        shape,
        pivots,
    }
}
