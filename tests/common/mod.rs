//! Common test utilities
#![allow(dead_code)]

use densela::prelude::*;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Route `log` output through the test harness; safe to call repeatedly
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Assert two f64 slices are close within tolerance
///
/// Uses the formula: |a - b| <= atol + rtol * |b|
pub fn assert_allclose_f64(a: &[f64], b: &[f64], rtol: f64, atol: f64, msg: &str) {
    assert_eq!(a.len(), b.len(), "{}: length mismatch", msg);
    for (i, (x, y)) in a.iter().zip(b.iter()).enumerate() {
        let diff = (x - y).abs();
        let tol = atol + rtol * y.abs();
        assert!(
            diff <= tol,
            "{}: element {} differs: {} vs {} (diff={}, tol={})",
            msg,
            i,
            x,
            y,
            diff,
            tol
        );
    }
}

/// Assert two matrices have the same shape and close elements
pub fn assert_matrix_close<A, B>(a: &A, b: &B, tol: f64, msg: &str)
where
    A: MatrixRead + ?Sized,
    B: MatrixRead + ?Sized,
{
    assert_eq!(a.shape(), b.shape(), "{}: shape mismatch", msg);
    assert_allclose_f64(&a.to_vec(), &b.to_vec(), tol, tol, msg);
}

/// Assert `m` is within `tol` of the identity of its shape
pub fn assert_near_identity<M: MatrixRead + ?Sized>(m: &M, tol: f64, msg: &str) {
    assert!(m.is_square(), "{}: expected square, got {}", msg, m.shape());
    assert_matrix_close(m, &Matrix::eye_like(m.shape()), tol, msg);
}

/// Deterministic random matrix with entries in `[-10, 10)`
pub fn random_matrix(rng: &mut StdRng, rows: usize, cols: usize) -> Matrix {
    Matrix::from_fn(rows, cols, |_, _| rng.random_range(-10.0..10.0))
}

/// Seeded generator so failures are reproducible
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}
