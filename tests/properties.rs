//! Algebraic identities checked on seeded random matrices

mod common;

use common::{assert_matrix_close, random_matrix, seeded_rng};
use densela::prelude::*;

#[test]
fn test_transpose_of_product() {
    let mut rng = seeded_rng(2024);
    for (m, k, n) in [(1, 1, 1), (2, 3, 4), (5, 2, 3), (6, 6, 6)] {
        let a = random_matrix(&mut rng, m, k);
        let b = random_matrix(&mut rng, k, n);
        let lhs = a.mul(&b).unwrap().transpose().to_matrix();
        let rhs = b.transpose().mul(&a.transpose()).unwrap();
        assert_matrix_close(&lhs, &rhs, 1e-10, &format!("(AB)ᵗ = BᵗAᵗ for {m}x{k}x{n}"));
    }
}

#[test]
fn test_det_is_multiplicative() {
    let mut rng = seeded_rng(31);
    for n in [2, 3, 4] {
        let a = random_matrix(&mut rng, n, n);
        let b = random_matrix(&mut rng, n, n);
        let dab = a.mul(&b).unwrap().det().unwrap();
        let prod = a.det().unwrap() * b.det().unwrap();
        assert!(
            (dab - prod).abs() <= 1e-8 * prod.abs().max(1.0),
            "n={n}: det(AB)={dab} det(A)det(B)={prod}"
        );
    }
}

#[test]
fn test_inverse_of_inverse() {
    let mut rng = seeded_rng(8);
    let a = random_matrix(&mut rng, 4, 4);
    let back = a.inverse().unwrap().inverse().unwrap();
    assert_matrix_close(&back, &a, 1e-8, "(A⁻¹)⁻¹ = A");
}

#[test]
fn test_add_commutes_and_scale_distributes() {
    let mut rng = seeded_rng(3);
    let a = random_matrix(&mut rng, 3, 4);
    let b = random_matrix(&mut rng, 3, 4);
    assert_matrix_close(&a.add(&b).unwrap(), &b.add(&a).unwrap(), 0.0, "A+B = B+A");
    assert_matrix_close(
        &a.add(&b).unwrap().scale(2.0),
        &a.scale(2.0).add(&b.scale(2.0)).unwrap(),
        1e-12,
        "2(A+B) = 2A+2B",
    );
    assert_matrix_close(&a.subtract(&a).unwrap(), &Matrix::zeros((3, 4)), 0.0, "A-A = 0");
}
