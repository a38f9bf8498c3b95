//! Element types supported by the decomposition
//!
//! The algorithms are generic over [`LinalgElement`], implemented for `f32`
//! and `f64`. [`DType`] names the runtime type for diagnostics.

mod element;

pub use element::{Element, LinalgElement};

use std::fmt;

/// Runtime tag for the floating-point element type of a matrix
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DType {
    /// 32-bit IEEE-754 float
    F32,
    /// 64-bit IEEE-754 float
    F64,
}

impl DType {
    /// Machine epsilon for this dtype
    #[inline]
    pub fn epsilon(self) -> f64 {
        match self {
            DType::F32 => f32::EPSILON as f64,
            DType::F64 => f64::EPSILON,
        }
    }
}

impl fmt::Display for DType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DType::F32 => write!(f, "f32"),
            DType::F64 => write!(f, "f64"),
        }
    }
}
