//! Reduction to upper Hessenberg form using Householder similarity transforms

use super::helpers::validate_square_matrix;
use super::householder::Reflector;
use crate::dtype::LinalgElement;
use crate::error::Result;
use crate::matrix::Matrix;

/// Reduce `a` to upper Hessenberg form and return the orthogonal factor.
///
/// On return `a` holds `H = Qᵀ A Q` with zeros below the first subdiagonal.
pub fn hessenberg<T: LinalgElement>(a: &mut Matrix<T>) -> Result<Matrix<T>> {
    let n = validate_square_matrix(a.shape())?;
    let mut q = Matrix::identity(n);
    hessenberg_reduction(a, &mut q);
    Ok(q)
}

/// Reduce a square matrix to upper Hessenberg form in place.
///
/// Every reflector applied to `h` is accumulated into `q` from the right, so
/// if `q` starts as the identity it ends as the orthogonal factor.
///
/// # Algorithm
/// ```text
/// for i in 0..n-1:
///     P = reflector(H[i+1:, i])          skip when already zero below i+1
///     H[i+1:, i:] = P H[i+1:, i:];  H[i+2:, i] = 0
///     H[:, i+1:]  = H[:, i+1:] P
///     Q[:, i+1:]  = Q[:, i+1:] P
/// ```
pub fn hessenberg_reduction<T: LinalgElement>(h: &mut Matrix<T>, q: &mut Matrix<T>) {
    let n = h.rows();
    debug_assert!(h.is_square());
    debug_assert_eq!(q.shape(), [n, n]);

    for i in 0..n.saturating_sub(1) {
        let column = h.column(i, i + 1..n);
        let Reflector::Active(house) = Reflector::from_vector(&column) else {
            continue;
        };

        house.apply_left(h.view_mut(i + 1..n, i..n));
        for r in (i + 2)..n {
            h[(r, i)] = T::zero();
        }
        house.apply_right(h.view_mut(0..n, i + 1..n));
        house.apply_right(q.view_mut(0..n, i + 1..n));
    }
}
