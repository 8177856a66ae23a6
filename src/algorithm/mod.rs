//! Numerical algorithms
//!
//! - [`linalg`]: LUP decomposition and everything derived from it

pub mod linalg;
