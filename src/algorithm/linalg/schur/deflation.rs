//! Deflation: zero negligible subdiagonal entries and locate the next
//! irreducible block to iterate on.

use crate::dtype::LinalgElement;
use crate::matrix::Matrix;

/// Half-open row/column range `[start, end)` of the unconverged block.
///
/// Rows at or beyond `end` have converged. `start` marks the top of the
/// trailing irreducible Hessenberg block and may move in either direction
/// between cycles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActiveWindow {
    /// First row of the block
    pub start: usize,
    /// One past the last unconverged row
    pub end: usize,
}

impl ActiveWindow {
    /// Window covering the whole `n × n` matrix
    #[inline]
    pub fn full(n: usize) -> Self {
        Self { start: 0, end: n }
    }

    /// Number of rows in the window
    #[inline]
    pub fn width(&self) -> usize {
        self.end - self.start
    }

    /// True once at most a single 1×1 or 2×2 block remains at the top
    #[inline]
    pub fn is_converged(&self) -> bool {
        self.end <= 2
    }
}

/// Update the active window after a QR sweep.
///
/// # Algorithm
/// ```text
/// for i in start+1..end:
///     if H[i,i-1] != 0 and |H[i,i-1]| < eps (|H[i,i]| + |H[i-1,i-1]|):
///         H[i,i-1] = 0
/// for i in end-1 down to 1:
///     if H[i,i-1] == 0:
///         if end - i <= 2: end = i          1×1 or 2×2 block converged
///         else: start = i; stop             top of the trailing block
/// if no split was found: start = 0
/// ```
/// Zeroed entries are never restored. Running it twice in a row returns the
/// same window.
pub fn deflate<T: LinalgElement>(h: &mut Matrix<T>, window: ActiveWindow, eps: T) -> ActiveWindow {
    let ActiveWindow { start, mut end } = window;
    debug_assert!(end <= h.rows());

    for i in (start + 1)..end {
        let sub = h[(i, i - 1)];
        if sub != T::zero()
            && sub.abs_val() < eps * (h[(i, i)].abs_val() + h[(i - 1, i - 1)].abs_val())
        {
            h[(i, i - 1)] = T::zero();
        }
    }

    let mut split = None;
    for i in (1..end).rev() {
        if h[(i, i - 1)] != T::zero() {
            continue;
        }
        if end - i <= 2 {
            end = i;
        } else {
            split = Some(i);
            break;
        }
    }

    ActiveWindow {
        start: split.unwrap_or(0),
        end,
    }
}
