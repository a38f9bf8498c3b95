//! Mutable strided sub-block views

use crate::dtype::Element;

#[cfg(feature = "rayon")]
use rayon::prelude::*;

/// Minimum number of elements in a view before row updates are split across
/// rayon workers.
#[cfg(feature = "rayon")]
const PARALLEL_MIN_ELEMENTS: usize = 1 << 15;

/// Minimum rows handed to one rayon task.
#[cfg(feature = "rayon")]
const PARALLEL_MIN_ROWS: usize = 16;

/// Mutable view of a rectangular sub-block of a [`Matrix`](super::Matrix)
///
/// The view borrows the rows it covers from the parent buffer. Row `i` of the
/// view starts at `i * row_stride` in `data` and spans `cols` elements.
#[derive(Debug)]
pub struct MatMut<'a, T: Element> {
    data: &'a mut [T],
    rows: usize,
    cols: usize,
    row_stride: usize,
}

impl<'a, T: Element> MatMut<'a, T> {
    pub(super) fn new(data: &'a mut [T], rows: usize, cols: usize, row_stride: usize) -> Self {
        debug_assert!(rows == 0 || cols == 0 || data.len() == (rows - 1) * row_stride + cols);
        Self {
            data,
            rows,
            cols,
            row_stride,
        }
    }

    /// Number of rows in the view
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns in the view
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Returns true if the view covers no elements
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows == 0 || self.cols == 0
    }

    /// Row `i` of the view
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        assert!(i < self.rows, "row {i} out of bounds for view with {} rows", self.rows);
        if self.cols == 0 {
            return &[];
        }
        let begin = i * self.row_stride;
        &self.data[begin..begin + self.cols]
    }

    /// Mutable row `i` of the view
    #[inline]
    pub fn row_mut(&mut self, i: usize) -> &mut [T] {
        assert!(i < self.rows, "row {i} out of bounds for view with {} rows", self.rows);
        if self.cols == 0 {
            return &mut [];
        }
        let begin = i * self.row_stride;
        &mut self.data[begin..begin + self.cols]
    }

    /// Apply `f(i, row_i)` to every row of the view.
    ///
    /// Rows are disjoint, so with the `rayon` feature large views are updated
    /// in parallel; each row sees exactly the same operations either way.
    pub fn for_each_row_mut<F>(&mut self, f: F)
    where
        F: Fn(usize, &mut [T]) + Send + Sync,
    {
        if self.is_empty() {
            return;
        }
        let (cols, stride) = (self.cols, self.row_stride);

        #[cfg(feature = "rayon")]
        {
            if self.rows * cols >= PARALLEL_MIN_ELEMENTS {
                self.data
                    .par_chunks_mut(stride)
                    .with_min_len(PARALLEL_MIN_ROWS)
                    .enumerate()
                    .for_each(|(i, chunk)| f(i, &mut chunk[..cols]));
                return;
            }
        }

        for (i, chunk) in self.data.chunks_mut(stride).enumerate() {
            f(i, &mut chunk[..cols]);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::matrix::Matrix;

    #[test]
    fn test_for_each_row_mut_visits_view_rows_only() {
        let mut m = Matrix::<f64>::zeros(5, 6);
        m.view_mut(1..4, 2..5)
            .for_each_row_mut(|i, row| row.iter_mut().for_each(|x| *x = (i + 1) as f64));
        for i in 0..5 {
            for j in 0..6 {
                let expected = if (1..4).contains(&i) && (2..5).contains(&j) {
                    i as f64
                } else {
                    0.0
                };
                assert_eq!(m[(i, j)], expected, "entry ({i}, {j})");
            }
        }
    }

    #[test]
    fn test_for_each_row_mut_large_view() {
        // Large enough to take the parallel path when rayon is enabled.
        let n = 200;
        let mut m = Matrix::<f64>::zeros(n, n);
        m.view_mut(0..n, 1..n)
            .for_each_row_mut(|i, row| row.iter_mut().for_each(|x| *x = i as f64));
        assert_eq!(m[(0, 0)], 0.0);
        assert_eq!(m[(137, 0)], 0.0);
        assert_eq!(m[(137, 5)], 137.0);
        assert_eq!(m[(n - 1, n - 1)], (n - 1) as f64);
    }
}
