//! Error types for realschur

use thiserror::Error;

/// Result type alias using realschur's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur when building matrices or decomposing them
///
/// Running out of iterations is not an error: it is reported through
/// [`ConvergenceReason`](crate::algorithm::linalg::ConvergenceReason) on the
/// decomposition result.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum Error {
    /// Shape mismatch in an operation
    #[error("Shape mismatch: expected {expected:?}, got {got:?}")]
    ShapeMismatch {
        /// Expected shape
        expected: Vec<usize>,
        /// Actual shape
        got: Vec<usize>,
    },

    /// Invalid argument provided to an operation
    #[error("Invalid argument '{arg}': {reason}")]
    InvalidArgument {
        /// The argument name
        arg: &'static str,
        /// Reason for invalidity
        reason: String,
    },
}

impl Error {
    /// Create a shape mismatch error
    pub fn shape_mismatch(expected: &[usize], got: &[usize]) -> Self {
        Self::ShapeMismatch {
            expected: expected.to_vec(),
            got: got.to_vec(),
        }
    }

    /// Create an invalid argument error
    pub fn invalid_argument(arg: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            arg,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = Error::shape_mismatch(&[3, 3], &[3, 4]);
        assert_eq!(err.to_string(), "Shape mismatch: expected [3, 3], got [3, 4]");

        let err = Error::invalid_argument("tolerance", "must be finite");
        assert_eq!(
            err.to_string(),
            "Invalid argument 'tolerance': must be finite"
        );
    }
}
