//! # densela
//!
//! **Dense `f64` matrices with zero-copy transposition and an LU engine with
//! partial pivoting.**
//!
//! densela provides a strided matrix storage model and, built on a single
//! LUP decomposition engine, the determinant, inverse, linear solve,
//! reduced row-echelon form, rank, and pivot positions of a matrix.
//!
//! ## Features
//!
//! - **Matrices**: row-major owned storage, negative indexing, fixed-precision
//!   rendering
//! - **Views**: `transpose()` shares the buffer and swaps strides, O(1)
//! - **Decomposition**: `P·A = L·U` with partial pivoting; singular and
//!   rectangular inputs are flagged, not rejected
//! - **Caching**: owned matrices keep their last decomposition until the
//!   buffer is written through any handle
//!
//! ## Quick Start
//!
//! ```rust
//! use densela::prelude::*;
//!
//! let a = Matrix::from([[6.0, 0.0, -3.0], [4.0, 13.0, 6.0], [-1.0, 0.0, 7.0]]);
//! let inv = a.inverse()?;
//! assert!(a.mul(&inv)?.allclose(&Matrix::identity(3), 1e-10));
//! assert_eq!(a.rank(), 3);
//! # Ok::<(), densela::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): Multi-threaded matrix multiplication

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod algorithm;
pub mod config;
pub mod error;
pub mod matrix;
pub mod ops;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::linalg::{EchelonForm, LupDecomposition, Pivot};
    pub use crate::error::{Error, Result};
    pub use crate::matrix::{Matrix, MatrixRead, MatrixView, MatrixWrite, Shape};
    pub use crate::ops::{ArithmeticOps, LinalgOps};
}
