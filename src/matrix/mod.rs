//! Dense row-major matrix storage
//!
//! [`Matrix`] owns a single contiguous buffer. Every transformation in the
//! decomposition works through [`MatMut`] views into that buffer, addressed by
//! row and column ranges, so the working matrix is never duplicated while the
//! active window, its trailing columns and its leading rows are updated.

mod view;

pub use view::MatMut;

use crate::dtype::Element;
use crate::error::{Error, Result};
use std::ops::{Index, IndexMut, Range};

/// Owned dense matrix in row-major order
#[derive(Debug, Clone, PartialEq)]
pub struct Matrix<T: Element> {
    data: Vec<T>,
    rows: usize,
    cols: usize,
}

impl<T: Element> Matrix<T> {
    /// Create a `rows × cols` matrix of zeros
    pub fn zeros(rows: usize, cols: usize) -> Self {
        Self {
            data: vec![T::zero(); rows * cols],
            rows,
            cols,
        }
    }

    /// Create the `n × n` identity matrix
    pub fn identity(n: usize) -> Self {
        let mut m = Self::zeros(n, n);
        for i in 0..n {
            m.data[i * n + i] = T::one();
        }
        m
    }

    /// Create a square matrix with `diag` on the diagonal
    pub fn from_diag(diag: &[T]) -> Self {
        let n = diag.len();
        let mut m = Self::zeros(n, n);
        for (i, &d) in diag.iter().enumerate() {
            m.data[i * n + i] = d;
        }
        m
    }

    /// Create a matrix by evaluating `f(i, j)` for every entry
    pub fn from_fn(rows: usize, cols: usize, mut f: impl FnMut(usize, usize) -> T) -> Self {
        let mut data = Vec::with_capacity(rows * cols);
        for i in 0..rows {
            for j in 0..cols {
                data.push(f(i, j));
            }
        }
        Self { data, rows, cols }
    }

    /// Create a matrix from row-major data
    ///
    /// Returns [`Error::ShapeMismatch`] if `data.len() != rows * cols`.
    pub fn from_vec(data: Vec<T>, rows: usize, cols: usize) -> Result<Self> {
        if data.len() != rows * cols {
            return Err(Error::shape_mismatch(&[rows * cols], &[data.len()]));
        }
        Ok(Self { data, rows, cols })
    }

    /// Create a matrix by copying row-major data
    pub fn from_slice(data: &[T], rows: usize, cols: usize) -> Result<Self> {
        Self::from_vec(data.to_vec(), rows, cols)
    }

    /// Create a matrix from a list of rows, which must all have equal length
    pub fn from_rows<R: AsRef<[T]>>(rows: &[R]) -> Result<Self> {
        let cols = rows.first().map_or(0, |r| r.as_ref().len());
        let mut data = Vec::with_capacity(rows.len() * cols);
        for row in rows {
            let row = row.as_ref();
            if row.len() != cols {
                return Err(Error::shape_mismatch(&[cols], &[row.len()]));
            }
            data.extend_from_slice(row);
        }
        Ok(Self {
            data,
            rows: rows.len(),
            cols,
        })
    }

    /// Number of rows
    #[inline]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Number of columns
    #[inline]
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Shape as `[rows, cols]`
    #[inline]
    pub fn shape(&self) -> [usize; 2] {
        [self.rows, self.cols]
    }

    /// Returns true if the matrix is square
    #[inline]
    pub fn is_square(&self) -> bool {
        self.rows == self.cols
    }

    /// Row-major backing buffer
    #[inline]
    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Row `i` as a slice
    #[inline]
    pub fn row(&self, i: usize) -> &[T] {
        &self.data[i * self.cols..(i + 1) * self.cols]
    }

    /// Copy of column `j` restricted to `rows`
    ///
    /// # Panics
    ///
    /// Panics if `j` or `rows` exceeds the matrix bounds.
    pub fn column(&self, j: usize, rows: Range<usize>) -> Vec<T> {
        assert!(j < self.cols, "column {j} out of bounds for {} columns", self.cols);
        assert!(
            rows.start <= rows.end && rows.end <= self.rows,
            "row range {rows:?} out of bounds for {} rows",
            self.rows
        );
        rows.map(|i| self.data[i * self.cols + j]).collect()
    }

    /// Mutable view of the sub-block `rows × cols`
    ///
    /// # Panics
    ///
    /// Panics if either range is reversed or exceeds the matrix bounds.
    pub fn view_mut(&mut self, rows: Range<usize>, cols: Range<usize>) -> MatMut<'_, T> {
        assert!(
            rows.start <= rows.end && rows.end <= self.rows,
            "row range {rows:?} out of bounds for {} rows",
            self.rows
        );
        assert!(
            cols.start <= cols.end && cols.end <= self.cols,
            "column range {cols:?} out of bounds for {} columns",
            self.cols
        );
        let height = rows.end - rows.start;
        let width = cols.end - cols.start;
        if height == 0 || width == 0 {
            return MatMut::new(&mut [], height, width, self.cols);
        }
        let begin = rows.start * self.cols + cols.start;
        let end = (rows.end - 1) * self.cols + cols.end;
        MatMut::new(&mut self.data[begin..end], height, width, self.cols)
    }

    /// Mutable view of the whole matrix
    pub fn as_mut(&mut self) -> MatMut<'_, T> {
        let (rows, cols) = (self.rows, self.cols);
        self.view_mut(0..rows, 0..cols)
    }

    /// Transposed copy
    pub fn transpose(&self) -> Self {
        Self::from_fn(self.cols, self.rows, |i, j| self[(j, i)])
    }

    /// Matrix product `self @ rhs`
    pub fn matmul(&self, rhs: &Self) -> Result<Self> {
        if self.cols != rhs.rows {
            return Err(Error::shape_mismatch(
                &[self.cols, rhs.cols],
                &[rhs.rows, rhs.cols],
            ));
        }
        let mut out = Self::zeros(self.rows, rhs.cols);
        for i in 0..self.rows {
            let out_row = &mut out.data[i * rhs.cols..(i + 1) * rhs.cols];
            for (k, &a_ik) in self.row(i).iter().enumerate() {
                for (o, &b_kj) in out_row.iter_mut().zip(rhs.row(k)) {
                    *o = *o + a_ik * b_kj;
                }
            }
        }
        Ok(out)
    }

    /// Frobenius norm, accumulated in f64
    pub fn frobenius_norm(&self) -> f64 {
        self.data
            .iter()
            .map(|&x| {
                let x = x.to_f64();
                x * x
            })
            .sum::<f64>()
            .sqrt()
    }

    /// Frobenius norm of `self - other`
    pub fn frobenius_distance(&self, other: &Self) -> Result<f64> {
        if self.shape() != other.shape() {
            return Err(Error::shape_mismatch(&self.shape(), &other.shape()));
        }
        Ok(self
            .data
            .iter()
            .zip(&other.data)
            .map(|(&a, &b)| {
                let d = a.to_f64() - b.to_f64();
                d * d
            })
            .sum::<f64>()
            .sqrt())
    }
}

impl<T: Element> Index<(usize, usize)> for Matrix<T> {
    type Output = T;

    #[inline]
    fn index(&self, (i, j): (usize, usize)) -> &T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &self.data[i * self.cols + j]
    }
}

impl<T: Element> IndexMut<(usize, usize)> for Matrix<T> {
    #[inline]
    fn index_mut(&mut self, (i, j): (usize, usize)) -> &mut T {
        assert!(
            i < self.rows && j < self.cols,
            "index ({i}, {j}) out of bounds for {}x{} matrix",
            self.rows,
            self.cols
        );
        &mut self.data[i * self.cols + j]
    }
}
