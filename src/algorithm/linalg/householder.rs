//! Householder reflectors
//!
//! A reflector is stored as its normal vector `v` scaled to `||v|| = √2`, so
//! the orthogonal transform is simply `I - v vᵀ` with no separate `tau`.

use crate::dtype::LinalgElement;
use crate::matrix::MatMut;

/// Result of building a reflector from a vector.
///
/// `NoOp` means every entry below the first is already exactly zero: the
/// transform would be the identity and must not be applied.
#[derive(Debug, Clone, PartialEq)]
pub enum Reflector<T: LinalgElement> {
    /// A reflector that maps the source vector onto the first axis
    Active(Householder<T>),
    /// The source vector is already aligned with the first axis
    NoOp,
}

/// Householder transform `I - v vᵀ` with `||v|| = √2`
#[derive(Debug, Clone, PartialEq)]
pub struct Householder<T: LinalgElement> {
    normal: Vec<T>,
}

impl<T: LinalgElement> Reflector<T> {
    /// Build the reflector that zeroes `x[1..]`.
    ///
    /// # Algorithm
    /// ```text
    /// σ = ||x[1..]||²            (σ == 0 → NoOp)
    /// α = sign(x₀) · sqrt(σ + x₀²),   sign(0) = +1
    /// v = x;  v₀ += α
    /// v *= sqrt(2 / ||v||²)
    /// ```
    /// Choosing the sign of `α` to match `x₀` avoids cancellation in `v₀`.
    /// Applying the result to `x` yields `-α e₀`.
    pub fn from_vector(x: &[T]) -> Self {
        let Some((&head, tail)) = x.split_first() else {
            return Reflector::NoOp;
        };
        let tail_norm_sq = tail.iter().fold(T::zero(), |acc, &v| acc + v * v);
        if tail_norm_sq == T::zero() {
            return Reflector::NoOp;
        }

        let alpha = (tail_norm_sq + head * head).sqrt_val();
        let alpha = if head >= T::zero() {
            alpha
        } else {
            alpha.neg_val()
        };

        let mut normal = x.to_vec();
        normal[0] = head + alpha;
        let two = T::one() + T::one();
        let scale = (two / (tail_norm_sq + normal[0] * normal[0])).sqrt_val();
        for v in &mut normal {
            *v = *v * scale;
        }
        Reflector::Active(Householder { normal })
    }

    /// Returns true for the identity case
    #[inline]
    pub fn is_noop(&self) -> bool {
        matches!(self, Reflector::NoOp)
    }
}

impl<T: LinalgElement> Householder<T> {
    /// The normal vector `v`, with `||v|| = √2`
    #[inline]
    pub fn normal(&self) -> &[T] {
        &self.normal
    }

    /// Length of the vectors this reflector acts on
    #[inline]
    pub fn len(&self) -> usize {
        self.normal.len()
    }

    /// Returns true if the reflector acts on empty vectors
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.normal.is_empty()
    }

    /// `R ← R - v (vᵀ R)`; `v` spans the rows of `region`.
    pub fn apply_left(&self, mut region: MatMut<'_, T>) {
        debug_assert_eq!(self.normal.len(), region.rows());
        if region.is_empty() {
            return;
        }

        // tmp = vᵀ R, accumulated row by row
        let mut tmp = vec![T::zero(); region.cols()];
        for (i, &v) in self.normal.iter().enumerate() {
            for (t, &r) in tmp.iter_mut().zip(region.row(i)) {
                *t = *t + v * r;
            }
        }

        let normal = &self.normal;
        let tmp = &tmp;
        region.for_each_row_mut(|i, row| {
            let v = normal[i];
            for (r, &t) in row.iter_mut().zip(tmp) {
                *r = *r - v * t;
            }
        });
    }

    /// `R ← R - (R v) vᵀ`; `v` spans the columns of `region`.
    pub fn apply_right(&self, mut region: MatMut<'_, T>) {
        debug_assert_eq!(self.normal.len(), region.cols());
        let normal = &self.normal;
        region.for_each_row_mut(|_, row| {
            let dot = row
                .iter()
                .zip(normal)
                .fold(T::zero(), |acc, (&r, &v)| acc + r * v);
            for (r, &v) in row.iter_mut().zip(normal) {
                *r = *r - dot * v;
            }
        });
    }
}
