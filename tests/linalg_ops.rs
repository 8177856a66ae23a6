//! Integration tests for arithmetic, determinant, inverse and solve

mod common;

use common::{
    assert_allclose_f64, assert_matrix_close, assert_near_identity, init_logging, random_matrix,
    seeded_rng,
};
use densela::prelude::*;

#[test]
fn test_product_minus_matrix() {
    init_logging();
    let a = Matrix::from([[4.0, 1.0, -3.0], [0.0, 2.0, 8.0]]);
    let d = Matrix::from([[7.0, 2.0], [-4.0, -1.0]]);
    let c = Matrix::from([[-1.0, 9.0, -6.0], [7.0, 5.0, 0.0]]);
    let r = d.mul(&c).unwrap().subtract(&a).unwrap();
    assert_eq!(
        r,
        Matrix::from([[-3.0, 53.0, 36.0], [-39.0, -41.0, 24.0]])
    );
    assert_eq!(r.add(&a).unwrap(), d.mul(&c).unwrap());
}

#[test]
fn test_mul_shape_mismatch() {
    let a = Matrix::zeros((2, 3));
    assert_eq!(
        a.mul(&Matrix::zeros((2, 3))).unwrap_err(),
        Error::ShapeMismatch {
            op: "matrix multiplication",
            lhs: Shape::new(2, 3),
            rhs: Shape::new(2, 3),
        }
    );
    assert!(a.add(&Matrix::zeros((3, 2))).is_err());
}

#[test]
fn test_det_4x4() {
    let a = Matrix::from([
        [6.0, 0.0, -3.0, 5.0],
        [4.0, 13.0, 6.0, -8.0],
        [-1.0, 0.0, 7.0, 4.0],
        [8.0, 6.0, 0.0, 2.0],
    ]);
    let det = a.det().unwrap();
    assert!((det - 170.0).abs() < 1e-6, "det = {det}");
}

#[test]
fn test_singular_2x2() {
    let a = Matrix::from([[1.0, 2.0], [2.0, 4.0]]);
    assert_eq!(a.det().unwrap(), 0.0);
    assert!(a.lup().is_singular());
    assert_eq!(
        a.inverse().unwrap_err(),
        Error::SingularMatrix { op: "inverse" }
    );
    assert!(matches!(
        a.solve(&Matrix::column_vector(&[1.0, 2.0])),
        Err(Error::SingularMatrix { .. })
    ));
}

#[test]
fn test_one_by_one() {
    let a = Matrix::from([[5.0]]);
    assert_eq!(a.det().unwrap(), 5.0);
    let inv = a.inverse().unwrap();
    assert!((inv.item().unwrap() - 0.2).abs() < 1e-15);
    assert_eq!(a.rank(), 1);
}

#[test]
fn test_det_of_identity() {
    for n in 1..6 {
        assert!((Matrix::identity(n).det().unwrap() - 1.0).abs() < 1e-15);
    }
}

#[test]
fn test_det_of_empty_matrix() {
    assert_eq!(Matrix::zeros((0, 0)).det().unwrap(), 1.0);
}

#[test]
fn test_det_requires_square() {
    let a = Matrix::zeros((2, 3));
    assert!(matches!(
        a.det(),
        Err(Error::NotSquare {
            op: "determinant",
            ..
        })
    ));
    assert!(matches!(a.inverse(), Err(Error::NotSquare { .. })));
}

#[test]
fn test_det_matches_transpose() {
    let mut rng = seeded_rng(7);
    for n in 2..7 {
        let a = random_matrix(&mut rng, n, n);
        let d = a.det().unwrap();
        let dt = a.transpose().det().unwrap();
        assert!(
            (d - dt).abs() <= 1e-9 * d.abs().max(1.0),
            "n={n}: det(A)={d} det(Aᵗ)={dt}"
        );
    }
}

#[test]
fn test_det_sign_flips_on_row_swap() {
    let mut a = Matrix::from([[2.0, 1.0, 0.0], [1.0, 3.0, 1.0], [0.0, 1.0, 4.0]]);
    let before = a.det().unwrap();
    a.swap_rows(0, 2).unwrap();
    assert!((a.det().unwrap() + before).abs() < 1e-10);
}

#[test]
fn test_inverse_round_trip() {
    let mut rng = seeded_rng(1234);
    for n in [2, 3, 4, 6] {
        let a = random_matrix(&mut rng, n, n);
        let inv = a.inverse().unwrap();
        assert_near_identity(&a.mul(&inv).unwrap(), 1e-8, &format!("A·A⁻¹, n={n}"));
        assert_near_identity(&inv.mul(&a).unwrap(), 1e-8, &format!("A⁻¹·A, n={n}"));
    }
}

#[test]
fn test_inverse_of_view() {
    let a = Matrix::from([[4.0, 7.0], [2.0, 6.0]]);
    let inv_t = a.transpose().inverse().unwrap();
    let expected = a.inverse().unwrap().transpose().to_matrix();
    assert_matrix_close(&inv_t, &expected, 1e-12, "(Aᵗ)⁻¹ = (A⁻¹)ᵗ");
}

#[test]
fn test_solve_multiple_rhs() {
    let a = Matrix::from([[3.0, 2.0, -1.0], [2.0, -2.0, 4.0], [-1.0, 0.5, -1.0]]);
    let b = Matrix::from([[1.0, 0.0], [-2.0, 1.0], [0.0, 0.0]]);
    let x = a.solve(&b).unwrap();
    assert_eq!(x.shape(), Shape::new(3, 2));
    assert_matrix_close(&a.mul(&x).unwrap(), &b, 1e-10, "A·X = B");
    assert_allclose_f64(
        &[x.get(0, 0).unwrap(), x.get(1, 0).unwrap(), x.get(2, 0).unwrap()],
        &[1.0, -2.0, -2.0],
        1e-10,
        1e-10,
        "first column",
    );
}

#[test]
fn test_solve_rhs_row_mismatch() {
    let a = Matrix::identity(3);
    assert!(matches!(
        a.solve(&Matrix::zeros((2, 1))),
        Err(Error::ShapeMismatch { op: "solve", .. })
    ));
}

#[test]
fn test_trace() {
    let a = Matrix::from([[1.0, 2.0], [3.0, 4.0]]);
    assert_eq!(a.trace().unwrap(), 5.0);
    assert!(Matrix::zeros((1, 2)).trace().is_err());
}
