//! Matrix types and storage
//!
//! This module provides the owned [`Matrix`] type, the zero-copy
//! [`MatrixView`] produced by transposition, and the shape/layout/storage
//! pieces both are built from.

mod access;
mod cache;
mod core;
mod display;
mod layout;
mod shape;
mod storage;
mod view;

pub use access::{MatrixRead, MatrixWrite};
pub use self::core::Matrix;
pub use layout::Layout;
pub use shape::Shape;
pub use storage::Storage;
pub use view::MatrixView;
