//! Numerical algorithms
//!
//! Every algorithm operates on [`Matrix`](crate::matrix::Matrix) buffers in
//! place and is generic over [`LinalgElement`](crate::dtype::LinalgElement)
//! (`f32` and `f64`).

pub mod linalg;
