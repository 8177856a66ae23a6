//! Matrix operations
//!
//! Operations are defined as traits with a blanket implementation for every
//! [`MatrixRead`](crate::matrix::MatrixRead) type, so owned matrices and
//! transposed views share one API:
//!
//! ```text
//! MatrixRead
//!   ├── ArithmeticOps: add, subtract, mul (matmul), scale
//!   └── LinalgOps:     lup, det, inverse, solve, trace, rref, rank, pivot_positions
//! ```
//!
//! The elementary row operations in [`row`] are the in-place kernels shared
//! by the elimination engines and by [`MatrixWrite`](crate::matrix::MatrixWrite).

pub mod matmul;
pub mod row;
mod traits;

pub use traits::{ArithmeticOps, LinalgOps};
