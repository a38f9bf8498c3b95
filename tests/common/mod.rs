//! Common test utilities
#![allow(dead_code)]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rand_distr::StandardNormal;
use realschur::prelude::*;

/// Square matrix with independent standard normal entries
pub fn random_matrix(n: usize, seed: u64) -> Matrix<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    Matrix::from_fn(n, n, |_, _| rng.sample(StandardNormal))
}

/// Single-precision variant of [`random_matrix`]
pub fn random_matrix_f32(n: usize, seed: u64) -> Matrix<f32> {
    let mut rng = StdRng::seed_from_u64(seed);
    Matrix::from_fn(n, n, |_, _| rng.sample(StandardNormal))
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

/// Assert the similarity and orthogonality invariants of a decomposition.
///
/// Bounds scale as `||A|| eps n` and `eps n`; the factor 20 leaves headroom
/// for rounding in forming `Qᵀ A Q` itself.
pub fn assert_schur_invariants<T: LinalgElement>(
    a: &Matrix<T>,
    schur: &SchurDecomposition<T>,
    msg: &str,
) {
    let n = a.rows().max(1) as f64;
    let eps = T::epsilon_val();

    let forward = schur.forward_error(a).unwrap();
    let forward_tol = 20.0 * a.frobenius_norm().max(1.0) * eps * n;
    assert!(
        forward <= forward_tol,
        "{}: ||QᵀAQ - T|| = {:.3e} exceeds {:.3e}",
        msg,
        forward,
        forward_tol
    );

    let loss = schur.orthogonality_loss().unwrap();
    let loss_tol = 20.0 * eps * n;
    assert!(
        loss <= loss_tol,
        "{}: ||QᵀQ - I|| = {:.3e} exceeds {:.3e}",
        msg,
        loss,
        loss_tol
    );
}

/// Sum of the diagonal
pub fn trace<T: LinalgElement>(m: &Matrix<T>) -> f64 {
    (0..m.rows()).map(|i| m[(i, i)].to_f64()).sum()
}
