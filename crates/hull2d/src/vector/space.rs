//! Small capability traits shared by point/vector types.
//!
//! `Vector2D` is the only implementor today; the traits keep hull-level code
//! (`ConvexHull`, generators) written against the algebra rather than the
//! concrete 2D type.

use super::Vector2D;
use crate::error::Result;

/// Free-vector algebra.
pub trait Vector: Copy + PartialEq {
    fn zero() -> Self;
    fn add(self, v: Self) -> Self;
    fn subtract(self, v: Self) -> Self;
    fn scalar_multiply(self, a: f64) -> Self;
    fn negate(self) -> Self;
    fn norm(&self) -> f64;
    fn norm1(&self) -> f64;
    fn norm_inf(&self) -> f64;
    fn norm_sq(&self) -> f64;
    fn normalize(self) -> Result<Self>;
    fn dot_product(self, v: Self) -> f64;
}

/// Position in a space with a metric.
pub trait Point: Copy + PartialEq {
    fn distance(self, p: Self) -> f64;
    /// True when any coordinate is NaN.
    fn is_nan(&self) -> bool;
}

impl Vector for Vector2D {
    #[inline]
    fn zero() -> Self {
        Vector2D::ZERO
    }
    #[inline]
    fn add(self, v: Self) -> Self {
        Vector2D::add(self, v)
    }
    #[inline]
    fn subtract(self, v: Self) -> Self {
        Vector2D::subtract(self, v)
    }
    #[inline]
    fn scalar_multiply(self, a: f64) -> Self {
        Vector2D::scalar_multiply(self, a)
    }
    #[inline]
    fn negate(self) -> Self {
        Vector2D::negate(self)
    }
    #[inline]
    fn norm(&self) -> f64 {
        Vector2D::norm(self)
    }
    #[inline]
    fn norm1(&self) -> f64 {
        Vector2D::norm1(self)
    }
    #[inline]
    fn norm_inf(&self) -> f64 {
        Vector2D::norm_inf(self)
    }
    #[inline]
    fn norm_sq(&self) -> f64 {
        Vector2D::norm_sq(self)
    }
    #[inline]
    fn normalize(self) -> Result<Self> {
        Vector2D::normalize(self)
    }
    #[inline]
    fn dot_product(self, v: Self) -> f64 {
        Vector2D::dot_product(self, v)
    }
}

impl Point for Vector2D {
    #[inline]
    fn distance(self, p: Self) -> f64 {
        Vector2D::distance(self, p)
    }
    #[inline]
    fn is_nan(&self) -> bool {
        Vector2D::is_nan(self)
    }
}

/// Arithmetic mean of a point set; `None` when empty.
pub fn mean<V: Vector>(points: &[V]) -> Option<V> {
    if points.is_empty() {
        return None;
    }
    let sum = points.iter().fold(V::zero(), |acc, p| acc.add(*p));
    Some(sum.scalar_multiply(1.0 / points.len() as f64))
}
