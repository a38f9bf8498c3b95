//! Helper functions for linear algebra operations
//!
//! Validation utilities shared by the decomposition entry points.

use crate::error::{Error, Result};

/// Validate matrix is square, returning its order
pub fn validate_square_matrix(shape: [usize; 2]) -> Result<usize> {
    let [m, n] = shape;
    if m != n {
        return Err(Error::ShapeMismatch {
            expected: vec![m, m],
            got: vec![m, n],
        });
    }
    Ok(n)
}

/// Validate a deflation tolerance: finite and non-negative
pub fn validate_tolerance(tolerance: f64) -> Result<()> {
    if !tolerance.is_finite() || tolerance < 0.0 {
        return Err(Error::invalid_argument(
            "tolerance",
            format!("must be finite and non-negative, got {tolerance}"),
        ));
    }
    Ok(())
}
