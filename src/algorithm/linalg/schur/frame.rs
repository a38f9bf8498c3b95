//! Window-relative access to the working matrix and accumulator.
//!
//! A QR sweep on the active window `[s, e)` of an `n × n` matrix must keep the
//! whole similarity transform consistent:
//!
//! ```text
//!            0      s        e      n
//!          ┌──────┬──────────┬──────┐
//!        0 │      │ leading  │      │
//!        s │      │  window  │ trail│
//!        e │      │          │      │
//!          └──────┴──────────┴──────┘
//! ```
//!
//! A left reflector on window rows also updates the trailing columns, and a
//! right reflector on window columns also updates the leading rows and the
//! matching columns of Q. Window + trailing columns are contiguous within a
//! row (`s..n`), and leading rows + window rows are contiguous within a
//! column (`0..e`), so each update is a single view.

use super::deflation::ActiveWindow;
use crate::algorithm::linalg::householder::Householder;
use crate::dtype::LinalgElement;
use crate::matrix::Matrix;
use std::ops::Range;

pub(crate) struct WindowFrame<'a, T: LinalgElement> {
    a: &'a mut Matrix<T>,
    q: &'a mut Matrix<T>,
    start: usize,
    width: usize,
}

impl<'a, T: LinalgElement> WindowFrame<'a, T> {
    pub(crate) fn new(a: &'a mut Matrix<T>, q: &'a mut Matrix<T>, window: ActiveWindow) -> Self {
        debug_assert!(window.start <= window.end && window.end <= a.rows());
        debug_assert_eq!(a.shape(), q.shape());
        Self {
            a,
            q,
            start: window.start,
            width: window.width(),
        }
    }

    #[inline]
    pub(crate) fn width(&self) -> usize {
        self.width
    }

    /// Window entry `(i, j)`
    #[inline]
    pub(crate) fn get(&self, i: usize, j: usize) -> T {
        self.a[(self.start + i, self.start + j)]
    }

    /// Window column `j` restricted to window rows `rows`
    pub(crate) fn column(&self, j: usize, rows: Range<usize>) -> Vec<T> {
        self.a
            .column(self.start + j, self.start + rows.start..self.start + rows.end)
    }

    /// Set window column `j` to exact zero over window rows `rows`
    pub(crate) fn zero_column(&mut self, j: usize, rows: Range<usize>) {
        for i in rows {
            self.a[(self.start + i, self.start + j)] = T::zero();
        }
    }

    /// Left-apply to window rows `rows`, across the window and its trailing
    /// columns.
    pub(crate) fn reflect_rows(&mut self, house: &Householder<T>, rows: Range<usize>) {
        let n = self.a.cols();
        let rows = self.start + rows.start..self.start + rows.end;
        house.apply_left(self.a.view_mut(rows, self.start..n));
    }

    /// Right-apply to window columns `cols`, across the leading rows and
    /// window rows `0..row_end`, and to the matching columns of Q.
    pub(crate) fn reflect_cols(&mut self, house: &Householder<T>, cols: Range<usize>, row_end: usize) {
        let cols = self.start + cols.start..self.start + cols.end;
        house.apply_right(self.a.view_mut(0..self.start + row_end, cols.clone()));
        let n = self.q.rows();
        house.apply_right(self.q.view_mut(0..n, cols));
    }
}
