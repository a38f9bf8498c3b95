//! Real Schur decomposition using the Francis implicit double-shift QR algorithm
//!
//! # Algorithm
//!
//! ```text
//! Q = I;  H = hessenberg(A)                       (accumulating into Q)
//! window = [0, n)
//! repeat up to max_iterations while window.end > 2:
//!     francis_double_shift(H, Q, window)          introduce the bulge
//!     chase_bulge(H, Q, window)                   restore Hessenberg form
//!     window = deflate(H, window, eps)            shrink / relocate window
//! ```
//!
//! Every stage works in place on `H` and `Q` through views of the active
//! window, its trailing columns and its leading rows, so `Qᵀ A Q = H` holds
//! after every cycle, including when the budget runs out.

mod bulge;
mod deflation;
pub mod diagnostics;
mod frame;
mod shift;
mod types;

pub use bulge::chase_bulge;
pub use deflation::{ActiveWindow, deflate};
pub use shift::francis_double_shift;
pub use types::{
    ConvergenceReason, CycleReport, InPlaceSchur, SchurDecomposition, SchurOptions,
};

use super::helpers::{validate_square_matrix, validate_tolerance};
use super::hessenberg::hessenberg_reduction;
use crate::dtype::LinalgElement;
use crate::error::Result;
use crate::matrix::Matrix;

/// Compute the real Schur decomposition of `a`, leaving `a` untouched.
///
/// Returns Q, T with `Qᵀ A Q = T`. Running out of iterations is reported via
/// [`SchurDecomposition::converged`], not as an error.
///
/// # Errors
///
/// [`Error::ShapeMismatch`](crate::error::Error::ShapeMismatch) for a
/// non-square matrix, [`Error::InvalidArgument`](crate::error::Error::InvalidArgument)
/// for a negative or non-finite tolerance.
pub fn decompose<T: LinalgElement>(
    a: &Matrix<T>,
    options: &SchurOptions,
) -> Result<SchurDecomposition<T>> {
    decompose_with_progress(a, options, |_| {})
}

/// [`decompose`] with a callback invoked after every cycle.
pub fn decompose_with_progress<T, F>(
    a: &Matrix<T>,
    options: &SchurOptions,
    progress: F,
) -> Result<SchurDecomposition<T>>
where
    T: LinalgElement,
    F: FnMut(&CycleReport),
{
    let mut t = a.clone();
    decompose_in_place_with_progress(&mut t, options, progress)?.with_schur_form(t)
}

/// Compute the real Schur decomposition, overwriting `a` with T.
///
/// Avoids the working copy made by [`decompose`]; on return `a` holds the
/// (possibly partially reduced, see [`InPlaceSchur::converged`]) Schur form.
pub fn decompose_in_place<T: LinalgElement>(
    a: &mut Matrix<T>,
    options: &SchurOptions,
) -> Result<InPlaceSchur<T>> {
    decompose_in_place_with_progress(a, options, |_| {})
}

/// [`decompose_in_place`] with a callback invoked after every cycle.
pub fn decompose_in_place_with_progress<T, F>(
    a: &mut Matrix<T>,
    options: &SchurOptions,
    mut progress: F,
) -> Result<InPlaceSchur<T>>
where
    T: LinalgElement,
    F: FnMut(&CycleReport),
{
    let n = validate_square_matrix(a.shape())?;
    let eps = match options.tolerance {
        Some(tol) => {
            validate_tolerance(tol)?;
            T::from_f64(tol)
        }
        None => T::from_f64(T::epsilon_val()),
    };
    let budget = options.iteration_budget(n);

    let mut q = Matrix::identity(n);
    hessenberg_reduction(a, &mut q);

    let mut window = ActiveWindow::full(n);
    let mut iterations = 0;
    while !window.is_converged() && iterations < budget {
        francis_double_shift(a, &mut q, window);
        chase_bulge(a, &mut q, window);
        let next = deflate(a, window, eps);

        let report = CycleReport {
            iteration: iterations,
            window: next,
            deflated: window.end - next.end,
        };
        log::trace!(
            "schur cycle {}: window [{}, {}) -> [{}, {})",
            iterations,
            window.start,
            window.end,
            next.start,
            next.end
        );
        if report.deflated > 0 {
            log::debug!(
                "schur cycle {}: {} row(s) converged, {} remaining",
                iterations,
                report.deflated,
                next.end
            );
        }
        progress(&report);

        window = next;
        iterations += 1;
    }

    let reason = if window.is_converged() {
        ConvergenceReason::Deflated
    } else {
        log::warn!(
            "schur decomposition of {n}x{n} {} matrix did not converge after {iterations} iterations \
             (window [{}, {}) unreduced): {}",
            T::DTYPE,
            window.start,
            window.end,
            ConvergenceReason::MaxIterationsReached.hint()
        );
        ConvergenceReason::MaxIterationsReached
    };

    Ok(InPlaceSchur {
        q,
        iterations,
        converged: reason.is_converged(),
        reason,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_one_by_one() {
        let a = Matrix::from_rows(&[[5.0]]).unwrap();
        let r = decompose(&a, &SchurOptions::default()).unwrap();
        assert_eq!(r.q, Matrix::identity(1));
        assert_eq!(r.t, a);
        assert!(r.converged);
        assert_eq!(r.iterations, 0);
    }

    #[test]
    fn test_empty() {
        let a = Matrix::<f64>::zeros(0, 0);
        let r = decompose(&a, &SchurOptions::default()).unwrap();
        assert_eq!(r.t.shape(), [0, 0]);
        assert!(r.converged);
    }

    #[test]
    fn test_rotation_generator_keeps_complex_block() {
        let a = Matrix::from_rows(&[[0.0, -1.0], [1.0, 0.0]]).unwrap();
        let r = decompose(&a, &SchurOptions::default()).unwrap();
        assert!(r.converged);
        assert_eq!(r.t, a);
        assert_ne!(r.t[(1, 0)], 0.0);
        assert_eq!(r.q, Matrix::identity(2));
    }

    #[test]
    fn test_diagonal_input() {
        let a = Matrix::from_diag(&[3.0, 1.0, 2.0]);
        let r = decompose(&a, &SchurOptions::default()).unwrap();
        assert!(r.converged);
        assert_eq!(r.t, a);
        assert_eq!(r.q, Matrix::identity(3));
    }

    #[test]
    fn test_non_square_rejected() {
        let a = Matrix::<f64>::zeros(3, 2);
        assert!(decompose(&a, &SchurOptions::default()).is_err());
    }

    #[test]
    fn test_invalid_tolerance_rejected() {
        let a = Matrix::<f64>::identity(3);
        let opts = SchurOptions::default().with_tolerance(f64::NAN);
        assert!(decompose(&a, &opts).is_err());
    }

    #[test]
    fn test_zero_budget_on_large_matrix() {
        let a = Matrix::from_fn(4, 4, |i, j| (1 + i * 4 + j) as f64);
        let opts = SchurOptions::default().with_max_iterations(0);
        let r = decompose(&a, &opts).unwrap();
        assert!(!r.converged);
        assert_eq!(r.reason, ConvergenceReason::MaxIterationsReached);
        assert_eq!(r.iterations, 0);
        assert!(r.forward_error(&a).unwrap() < 1e-12 * a.frobenius_norm());
    }

    #[test]
    fn test_in_place_overwrites_input() {
        let a0 = Matrix::from_rows(&[
            [1.0, 2.0, 0.5],
            [-1.0, 3.0, 1.0],
            [2.0, 0.0, -1.0],
        ])
        .unwrap();
        let mut a = a0.clone();
        let r = decompose_in_place(&mut a, &SchurOptions::default()).unwrap();
        assert!(r.converged);
        assert_ne!(a, a0);
        let full = r.with_schur_form(a).unwrap();
        assert!(full.is_quasi_triangular());
        assert!(full.forward_error(&a0).unwrap() < 1e-12 * a0.frobenius_norm());
    }
}
