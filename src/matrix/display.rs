//! Fixed-precision text rendering

use super::{Matrix, MatrixRead, MatrixView};
use crate::config;
use std::fmt;

/// Bracketed row-major rendering, one line per row:
///
/// ```text
/// [ 1.000  2.000 
///  3.000  4.000 ]
/// ```
///
/// Uses the formatter precision when given (`{:.5}`), otherwise
/// [`config::print_precision`]. Meant for debugging and fixtures, not as a
/// machine-readable format.
fn render<M: MatrixRead + ?Sized>(m: &M, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    let precision = f.precision().unwrap_or_else(config::print_precision);
    let (rows, cols) = (m.rows(), m.cols());
    let data = m.to_vec();
    f.write_str("[")?;
    for i in 0..rows {
        if i > 0 {
            f.write_str("\n")?;
        }
        for value in &data[i * cols..(i + 1) * cols] {
            write!(f, " {value:.precision$} ")?;
        }
    }
    f.write_str("]")
}

impl fmt::Display for Matrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

impl fmt::Display for MatrixView {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        render(self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_precision() {
        let m = Matrix::from([[1.0, -2.5], [3.26, 4.0]]);
        assert_eq!(format!("{m:.1}"), "[ 1.0  -2.5 \n 3.3  4.0 ]");
        assert_eq!(format!("{:.2}", m.transpose()), "[ 1.00  3.26 \n -2.50  4.00 ]");
    }

    #[test]
    fn test_empty_matrix() {
        assert_eq!(format!("{}", Matrix::zeros((0, 0))), "[]");
    }
}
