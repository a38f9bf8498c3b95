//! # realschur
//!
//! **Real Schur decomposition of dense square matrices.**
//!
//! Given a real `n × n` matrix A, [`decompose`] computes an orthogonal Q and
//! an upper quasi-triangular T with `Qᵀ A Q = T`. T carries 1×1 diagonal
//! blocks for real eigenvalues and 2×2 blocks for complex-conjugate pairs.
//!
//! The implementation is the classic Francis implicit double-shift QR
//! algorithm: Householder reduction to Hessenberg form, then repeated
//! double-shift sweeps with bulge chasing and deflation over a shrinking
//! active window.
//!
//! ## Quick Start
//!
//! ```rust
//! use realschur::prelude::*;
//!
//! let a = Matrix::from_rows(&[
//!     [4.0, 1.0, -2.0],
//!     [1.0, 2.0, 0.0],
//!     [3.0, -1.0, 1.0],
//! ])?;
//! let schur = decompose(&a, &SchurOptions::default())?;
//!
//! assert!(schur.converged);
//! assert!(schur.is_quasi_triangular());
//! assert!(schur.forward_error(&a)? < 1e-12);
//! # Ok::<(), realschur::error::Error>(())
//! ```
//!
//! ## Feature Flags
//!
//! - `rayon` (default): parallel reflector application on large matrices

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod algorithm;
pub mod dtype;
pub mod error;
pub mod matrix;

pub use algorithm::linalg::{decompose, decompose_in_place};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::algorithm::linalg::{
        ConvergenceReason, CycleReport, InPlaceSchur, SchurDecomposition, SchurOptions, decompose,
        decompose_in_place, decompose_in_place_with_progress, decompose_with_progress,
    };
    pub use crate::dtype::{DType, Element, LinalgElement};
    pub use crate::error::{Error, Result};
    pub use crate::matrix::{MatMut, Matrix};
}
