//! Accuracy checks for a computed decomposition

use crate::dtype::LinalgElement;
use crate::error::Result;
use crate::matrix::Matrix;

/// Forward error `||Qᵀ A Q - T||_F`
pub fn forward_error<T: LinalgElement>(a: &Matrix<T>, q: &Matrix<T>, t: &Matrix<T>) -> Result<f64> {
    let qtaq = q.transpose().matmul(a)?.matmul(q)?;
    qtaq.frobenius_distance(t)
}

/// Orthogonality loss `||Qᵀ Q - I||_F`
pub fn orthogonality_loss<T: LinalgElement>(q: &Matrix<T>) -> Result<f64> {
    let qtq = q.transpose().matmul(q)?;
    qtq.frobenius_distance(&Matrix::identity(q.cols()))
}

/// Returns true if `t` is in real Schur form.
///
/// Everything below the first subdiagonal is exactly zero, and nonzero
/// subdiagonal entries are isolated: two consecutive ones would form a block
/// larger than 2×2.
pub fn is_quasi_triangular<T: LinalgElement>(t: &Matrix<T>) -> bool {
    if !t.is_square() {
        return false;
    }
    let n = t.rows();
    for i in 2..n {
        if t.row(i)[..i - 1].iter().any(|&x| x != T::zero()) {
            return false;
        }
    }
    (2..n).all(|i| t[(i, i - 1)] == T::zero() || t[(i - 1, i - 2)] == T::zero())
}
