//! Francis implicit double-shift step

use super::deflation::ActiveWindow;
use super::frame::WindowFrame;
use crate::algorithm::linalg::householder::Reflector;
use crate::dtype::LinalgElement;
use crate::matrix::Matrix;

/// Apply one implicit double shift to the active window of `h`.
///
/// The shifts are the two eigenvalues of the trailing 2×2 block of the
/// window, used only through their sum `s` and product `t` so a complex pair
/// never leaves real arithmetic. The first column of `(H - σ₁)(H - σ₂) =
/// H² - sH + tI` has only three nonzero entries in a Hessenberg matrix:
///
/// ```text
/// x = h00 (h00 - s) + h01 h10 + t
/// y = h10 (h00 + h11 - s)
/// z = h10 h21
/// ```
///
/// The reflector mapping `[x, y, z]` to the first axis is applied to rows and
/// columns 0..3 of the window, which leaves a bulge below the subdiagonal for
/// [`chase_bulge`](super::chase_bulge) to remove. Requires a window of at
/// least three rows.
pub fn francis_double_shift<T: LinalgElement>(
    h: &mut Matrix<T>,
    q: &mut Matrix<T>,
    window: ActiveWindow,
) {
    let mut frame = WindowFrame::new(h, q, window);
    let w = frame.width();
    debug_assert!(w >= 3, "double shift needs a 3×3 window, got {w}");

    let (p, r) = (w - 2, w - 1);
    let s = frame.get(r, r) + frame.get(p, p);
    let t = frame.get(r, r) * frame.get(p, p) - frame.get(r, p) * frame.get(p, r);

    let (h00, h01, h10, h11, h21) = (
        frame.get(0, 0),
        frame.get(0, 1),
        frame.get(1, 0),
        frame.get(1, 1),
        frame.get(2, 1),
    );
    let seed = [
        h00 * (h00 - s) + h01 * h10 + t,
        h10 * (h00 + h11 - s),
        h10 * h21,
    ];

    let Reflector::Active(house) = Reflector::from_vector(&seed) else {
        return;
    };
    frame.reflect_rows(&house, 0..3);
    frame.reflect_cols(&house, 0..3, w.min(4));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shift_preserves_similarity_and_creates_bulge() {
        let a0: Matrix<f64> = Matrix::from_rows(&[
            [4.0, 1.0, -2.0, 2.0],
            [1.0, 2.0, 0.0, 1.0],
            [0.0, 3.0, 1.0, -1.0],
            [0.0, 0.0, 2.0, 3.0],
        ])
        .unwrap();
        let mut h = a0.clone();
        let mut q = Matrix::identity(4);
        francis_double_shift(&mut h, &mut q, ActiveWindow::full(4));

        let qtaq = q.transpose().matmul(&a0).unwrap().matmul(&q).unwrap();
        assert!(qtaq.frobenius_distance(&h).unwrap() < 1e-12);
        // The 3×3 reflector fills in below the subdiagonal.
        assert!(h[(2, 0)].abs() > 1e-8);
        assert!(h[(3, 0)].abs() > 1e-8);
    }

    #[test]
    fn test_shift_on_diagonal_is_noop() {
        let mut h = Matrix::from_diag(&[3.0, 1.0, 2.0]);
        let mut q = Matrix::identity(3);
        francis_double_shift(&mut h, &mut q, ActiveWindow::full(3));
        assert_eq!(h, Matrix::from_diag(&[3.0, 1.0, 2.0]));
        assert_eq!(q, Matrix::identity(3));
    }

    #[test]
    fn test_shift_updates_regions_outside_window() {
        let n = 6;
        let a0 = Matrix::from_fn(n, n, |i, j| {
            if i > j + 1 || (i == 2 && j == 1) {
                0.0
            } else {
                1.0 + ((3 * i + 5 * j) % 7) as f64
            }
        });
        let mut h = a0.clone();
        let mut q = Matrix::identity(n);
        let window = ActiveWindow { start: 2, end: 6 };
        francis_double_shift(&mut h, &mut q, window);

        let qtaq = q.transpose().matmul(&a0).unwrap().matmul(&q).unwrap();
        assert!(qtaq.frobenius_distance(&h).unwrap() < 1e-11);
        // Columns left of the window are untouched.
        for i in 0..n {
            for j in 0..2 {
                assert_eq!(h[(i, j)], a0[(i, j)]);
            }
        }
    }
}
