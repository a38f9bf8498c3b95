//! Options and result types for the real Schur decomposition

use super::deflation::ActiveWindow;
use super::diagnostics;
use crate::dtype::LinalgElement;
use crate::error::{Error, Result};
use crate::matrix::Matrix;

/// Configuration options for the Schur decomposition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SchurOptions {
    /// Maximum number of shift/chase/deflate cycles (default: `3n + 60`)
    pub max_iterations: Option<usize>,
    /// Relative tolerance for declaring a subdiagonal entry negligible
    /// (default: machine epsilon of the element type)
    pub tolerance: Option<f64>,
}

impl SchurOptions {
    /// Set the iteration budget
    pub fn with_max_iterations(mut self, max_iterations: usize) -> Self {
        self.max_iterations = Some(max_iterations);
        self
    }

    /// Set the deflation tolerance
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.tolerance = Some(tolerance);
        self
    }

    /// Iteration budget for an `n × n` matrix
    #[inline]
    pub fn iteration_budget(&self, n: usize) -> usize {
        self.max_iterations.unwrap_or(3 * n + 60)
    }
}

/// Reason the decomposition stopped iterating
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConvergenceReason {
    /// Every eigenvalue block deflated: T is quasi-upper-triangular
    Deflated,

    /// Did not converge: the iteration budget ran out with rows left in the
    /// active window. Q and T are still a valid similarity pair.
    ///
    /// **Hint**: Increase `max_iterations`
    MaxIterationsReached,
}

impl ConvergenceReason {
    /// Returns true if this reason indicates successful convergence
    #[inline]
    pub fn is_converged(&self) -> bool {
        matches!(self, ConvergenceReason::Deflated)
    }

    /// Returns a human-readable hint for non-converged cases
    pub fn hint(&self) -> &'static str {
        match self {
            ConvergenceReason::Deflated => "Converged successfully",
            ConvergenceReason::MaxIterationsReached => {
                "Increase max_iterations or accept the partially reduced T"
            }
        }
    }
}

/// State after one shift/chase/deflate cycle, passed to progress callbacks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    /// Zero-based cycle index
    pub iteration: usize,
    /// Active window after deflation
    pub window: ActiveWindow,
    /// Rows that converged at the bottom of the window during this cycle
    pub deflated: usize,
}

/// Real Schur decomposition result: Qᵀ A Q = T
///
/// - Q: orthogonal matrix (Qᵀ Q = I)
/// - T: upper quasi-triangular (real Schur form), with 1×1 blocks for real
///   eigenvalues and 2×2 blocks for complex-conjugate pairs
///
/// When `converged` is false, T may still have unreduced rows but Q and T
/// remain an exact similarity pair up to rounding.
#[derive(Debug, Clone, PartialEq)]
pub struct SchurDecomposition<T: LinalgElement> {
    /// Orthogonal factor Q
    pub q: Matrix<T>,
    /// Quasi-upper-triangular factor T
    pub t: Matrix<T>,
    /// Number of shift/chase/deflate cycles performed
    pub iterations: usize,
    /// Whether every eigenvalue block deflated within the budget
    pub converged: bool,
    /// Reason for termination
    pub reason: ConvergenceReason,
}

/// Result of [`decompose_in_place`](super::decompose_in_place); T is left
/// in the caller's matrix.
#[derive(Debug, Clone, PartialEq)]
pub struct InPlaceSchur<T: LinalgElement> {
    /// Orthogonal factor Q
    pub q: Matrix<T>,
    /// Number of shift/chase/deflate cycles performed
    pub iterations: usize,
    /// Whether every eigenvalue block deflated within the budget
    pub converged: bool,
    /// Reason for termination
    pub reason: ConvergenceReason,
}

impl<T: LinalgElement> InPlaceSchur<T> {
    /// Attach the Schur form to build a full decomposition
    pub fn with_schur_form(self, t: Matrix<T>) -> Result<SchurDecomposition<T>> {
        if t.shape() != self.q.shape() {
            return Err(Error::shape_mismatch(&self.q.shape(), &t.shape()));
        }
        Ok(SchurDecomposition {
            q: self.q,
            t,
            iterations: self.iterations,
            converged: self.converged,
            reason: self.reason,
        })
    }
}

impl<T: LinalgElement> SchurDecomposition<T> {
    /// `||Qᵀ A Q - T||_F` against the original matrix `a`
    pub fn forward_error(&self, a: &Matrix<T>) -> Result<f64> {
        diagnostics::forward_error(a, &self.q, &self.t)
    }

    /// `||Qᵀ Q - I||_F`
    pub fn orthogonality_loss(&self) -> Result<f64> {
        diagnostics::orthogonality_loss(&self.q)
    }

    /// Returns true if T is in real Schur form
    pub fn is_quasi_triangular(&self) -> bool {
        diagnostics::is_quasi_triangular(&self.t)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_budget() {
        let opts = SchurOptions::default();
        assert_eq!(opts.iteration_budget(10), 90);
        assert_eq!(opts.with_max_iterations(5).iteration_budget(10), 5);
    }

    #[test]
    fn test_reason_hint() {
        assert!(ConvergenceReason::Deflated.is_converged());
        assert!(!ConvergenceReason::MaxIterationsReached.is_converged());
        assert!(ConvergenceReason::MaxIterationsReached
            .hint()
            .contains("max_iterations"));
    }

    #[test]
    fn test_with_schur_form_shape_check() {
        let partial = InPlaceSchur::<f64> {
            q: Matrix::identity(2),
            iterations: 0,
            converged: true,
            reason: ConvergenceReason::Deflated,
        };
        assert!(partial.clone().with_schur_form(Matrix::zeros(3, 3)).is_err());
        let full = partial.with_schur_form(Matrix::zeros(2, 2)).unwrap();
        assert_eq!(full.t.shape(), [2, 2]);
    }
}
