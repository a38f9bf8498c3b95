//! Bulge chasing after a Francis step

use super::deflation::ActiveWindow;
use super::frame::WindowFrame;
use crate::algorithm::linalg::householder::Reflector;
use crate::dtype::LinalgElement;
use crate::matrix::Matrix;

/// Restore Hessenberg form in the active window after a double shift.
///
/// For each `i` in `1..w-1` a reflector built from the bulge column
/// `H[i..min(i+3, w), i-1]` zeroes the entries below the subdiagonal and
/// pushes the bulge one row down, until it leaves the bottom of the window.
/// Every reflector is applied across the trailing columns, the leading rows
/// and Q as well, keeping `Qᵀ A Q = H` for the full matrix.
pub fn chase_bulge<T: LinalgElement>(h: &mut Matrix<T>, q: &mut Matrix<T>, window: ActiveWindow) {
    let mut frame = WindowFrame::new(h, q, window);
    let w = frame.width();

    for i in 1..w.saturating_sub(1) {
        let j = (i + 3).min(w);
        let column = frame.column(i - 1, i..j);
        let Reflector::Active(house) = Reflector::from_vector(&column) else {
            continue;
        };

        frame.reflect_rows(&house, i..j);
        frame.zero_column(i - 1, i + 1..j);
        frame.reflect_cols(&house, i..j, (j + 1).min(w));
    }
}
