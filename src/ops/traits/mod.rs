//! Operation traits

mod arithmetic;
mod linalg;

pub use arithmetic::ArithmeticOps;
pub use linalg::LinalgOps;
