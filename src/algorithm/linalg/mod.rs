//! Dense linear algebra kernels
//!
//! Building blocks of the real Schur decomposition, leaves first:
//!
//! - [`householder`] - reflector construction and left/right application
//! - [`hessenberg`] - reduction to upper Hessenberg form
//! - [`schur`] - double shift, bulge chasing, deflation and the driver

pub mod helpers;
pub mod hessenberg;
pub mod householder;
pub mod schur;

pub use helpers::{validate_square_matrix, validate_tolerance};
pub use hessenberg::{hessenberg, hessenberg_reduction};
pub use householder::{Householder, Reflector};
pub use schur::{
    ActiveWindow, ConvergenceReason, CycleReport, InPlaceSchur, SchurDecomposition, SchurOptions,
    chase_bulge, decompose, decompose_in_place, decompose_in_place_with_progress,
    decompose_with_progress, deflate, francis_double_shift,
};
