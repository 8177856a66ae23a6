//! Elementary row operations
//!
//! These kernels work directly on a buffer through a [`Layout`], so they
//! apply equally to the private working copies used by the elimination
//! engines and to the shared buffer behind a matrix or a transposed view.
//! Indices are already normalized and in bounds.

use crate::matrix::Layout;

/// Exchange rows `a` and `b`.
pub fn swap_rows(data: &mut [f64], layout: &Layout, a: usize, b: usize) {
    if a == b {
        return;
    }
    for col in 0..layout.cols() {
        data.swap(layout.offset_of(a, col), layout.offset_of(b, col));
    }
}

/// Multiply row `row` by `factor`, from column `start_col` onward.
pub fn scale_row(data: &mut [f64], layout: &Layout, row: usize, factor: f64, start_col: usize) {
    for col in start_col..layout.cols() {
        let idx = layout.offset_of(row, col);
        data[idx] *= factor;
    }
}

/// Elimination step: `row[target] += factor * row[source]`, from column
/// `start_col` onward.
pub fn combine_rows(
    data: &mut [f64],
    layout: &Layout,
    target: usize,
    source: usize,
    factor: f64,
    start_col: usize,
) {
    for col in start_col..layout.cols() {
        let src = data[layout.offset_of(source, col)];
        data[layout.offset_of(target, col)] += factor * src;
    }
}
