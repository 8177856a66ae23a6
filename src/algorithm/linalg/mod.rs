//! Dense linear algebra on top of the LUP decomposition
//!
//! - [`lup_decompose_impl`]: the elimination engine (`P·A = L·U`)
//! - [`det_impl`], [`trace_impl`]: matrix properties
//! - [`solve_impl`], [`inverse_impl`]: linear systems
//! - [`rref_impl`]: reduced row-echelon form, rank, pivot positions
//!
//! Users normally reach these through [`LinalgOps`](crate::ops::LinalgOps).

mod decompositions;
mod echelon;
mod helpers;
mod matrix_ops;
mod solvers;

pub use decompositions::{LupDecomposition, lup_decompose_impl};
pub use echelon::{EchelonForm, Pivot, rref_impl};
pub use helpers::{validate_matmul_shapes, validate_same_shape, validate_square_matrix};
pub use matrix_ops::{det_impl, trace_impl};
pub use solvers::{inverse_impl, solve_impl};
