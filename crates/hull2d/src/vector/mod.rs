//! Immutable 2D Cartesian vector/point (`Vector2D`) and its algebra.
//!
//! Purpose
//! - Numeric foundation for hull validation, boundary lines and regions.
//! - One type plays both roles: a free vector and a position from the origin.
//!
//! Why this design
//! - `Copy` value type; every operation returns a new instance.
//! - Dot and cross products go through `numeric::linear_combination` so the
//!   signs used by convexity checks are trustworthy near zero.
//! - Equality and hashing first classify a value as the canonical NaN, then
//!   compare coordinate bits. This keeps `Eq`/`Hash` lawful without relying
//!   on IEEE `==` semantics.
//!
//! References
//! - Code cross-refs: `space::{Vector, Point}`, `numeric::linear_combination`,
//!   `hull::ConvexHull2D`

mod space;

pub use space::{mean, Point, Vector};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul, Neg, Sub};

use nalgebra::Vector2;

use crate::error::{GeomError, Result};
use crate::numeric::linear_combination;

/// Hash written for every NaN-classified vector.
const NAN_HASH: u64 = 542;

/// `|dot|` above this fraction of `|v1||v2|` switches `angle` to the sine formula.
const ALIGNED_THRESHOLD: f64 = 0.9999;

/// 2D vector or point with `f64` coordinates.
#[derive(Clone, Copy, Debug, Default)]
pub struct Vector2D {
    x: f64,
    y: f64,
}

impl Vector2D {
    /// Origin.
    pub const ZERO: Vector2D = Vector2D::new(0.0, 0.0);
    /// Canonical NaN; every vector with a NaN coordinate equals it.
    pub const NAN: Vector2D = Vector2D::new(f64::NAN, f64::NAN);
    pub const POSITIVE_INFINITY: Vector2D = Vector2D::new(f64::INFINITY, f64::INFINITY);
    pub const NEGATIVE_INFINITY: Vector2D = Vector2D::new(f64::NEG_INFINITY, f64::NEG_INFINITY);

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Build from a coordinate slice; fails unless it has exactly two entries.
    pub fn from_slice(v: &[f64]) -> Result<Self> {
        match v {
            [x, y] => Ok(Self::new(*x, *y)),
            _ => Err(GeomError::DimensionMismatch { got: v.len() }),
        }
    }

    /// `a * u`.
    #[inline]
    pub fn scaled(a: f64, u: Vector2D) -> Self {
        Self::new(a * u.x, a * u.y)
    }

    /// `a1 * u1 + a2 * u2`.
    #[inline]
    pub fn linear2(a1: f64, u1: Vector2D, a2: f64, u2: Vector2D) -> Self {
        Self::new(a1 * u1.x + a2 * u2.x, a1 * u1.y + a2 * u2.y)
    }

    /// `a1 * u1 + a2 * u2 + a3 * u3`.
    #[inline]
    pub fn linear3(a1: f64, u1: Vector2D, a2: f64, u2: Vector2D, a3: f64, u3: Vector2D) -> Self {
        Self::new(
            a1 * u1.x + a2 * u2.x + a3 * u3.x,
            a1 * u1.y + a2 * u2.y + a3 * u3.y,
        )
    }

    /// `a1 * u1 + a2 * u2 + a3 * u3 + a4 * u4`.
    #[allow(clippy::too_many_arguments)]
    #[inline]
    pub fn linear4(
        a1: f64,
        u1: Vector2D,
        a2: f64,
        u2: Vector2D,
        a3: f64,
        u3: Vector2D,
        a4: f64,
        u4: Vector2D,
    ) -> Self {
        Self::new(
            a1 * u1.x + a2 * u2.x + a3 * u3.x + a4 * u4.x,
            a1 * u1.y + a2 * u2.y + a3 * u3.y + a4 * u4.y,
        )
    }

    #[inline]
    pub const fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub const fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub const fn to_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    #[inline]
    pub fn norm1(&self) -> f64 {
        self.x.abs() + self.y.abs()
    }

    #[inline]
    pub fn norm(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Squared Euclidean norm; no square root, for comparisons.
    #[inline]
    pub fn norm_sq(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn norm_inf(&self) -> f64 {
        self.x.abs().max(self.y.abs())
    }

    #[inline]
    pub fn add(self, v: Vector2D) -> Vector2D {
        Vector2D::new(self.x + v.x, self.y + v.y)
    }

    /// `self + factor * v` without building the scaled vector.
    #[inline]
    pub fn add_scaled(self, factor: f64, v: Vector2D) -> Vector2D {
        Vector2D::new(self.x + factor * v.x, self.y + factor * v.y)
    }

    #[inline]
    pub fn subtract(self, v: Vector2D) -> Vector2D {
        Vector2D::new(self.x - v.x, self.y - v.y)
    }

    /// `self - factor * v` without building the scaled vector.
    #[inline]
    pub fn subtract_scaled(self, factor: f64, v: Vector2D) -> Vector2D {
        Vector2D::new(self.x - factor * v.x, self.y - factor * v.y)
    }

    #[inline]
    pub fn scalar_multiply(self, a: f64) -> Vector2D {
        Vector2D::new(a * self.x, a * self.y)
    }

    #[inline]
    pub fn negate(self) -> Vector2D {
        Vector2D::new(-self.x, -self.y)
    }

    /// Unit vector in the same direction; fails for an exactly zero norm.
    pub fn normalize(self) -> Result<Vector2D> {
        let s = self.norm();
        if s == 0.0 {
            return Err(GeomError::ZeroNorm);
        }
        Ok(self.scalar_multiply(1.0 / s))
    }

    /// Compensated `x1*x2 + y1*y2`.
    #[inline]
    pub fn dot_product(self, v: Vector2D) -> f64 {
        linear_combination(self.x, v.x, self.y, v.y)
    }

    /// Location of `self` relative to the directed line `p1 → p2`.
    ///
    /// Returns `(x2-x1)(y3-y1) - (y2-y1)(x3-x1)` with `self = (x3, y3)`:
    /// positive on the left, zero when collinear, negative on the right.
    pub fn cross_product(self, p1: Vector2D, p2: Vector2D) -> f64 {
        let x1 = p2.x - p1.x;
        let y1 = self.y - p1.y;
        let x2 = self.x - p1.x;
        let y2 = p2.y - p1.y;
        linear_combination(x1, y1, -x2, y2)
    }

    /// Angular separation of `v1` and `v2` in `[0, π]`.
    ///
    /// Uses `acos` for well separated vectors and the cross-product sine for
    /// nearly (anti)parallel ones, where the cosine is badly conditioned.
    pub fn angle(v1: Vector2D, v2: Vector2D) -> Result<f64> {
        let norm_product = v1.norm() * v2.norm();
        if norm_product == 0.0 {
            return Err(GeomError::ZeroNorm);
        }
        let dot = v1.dot_product(v2);
        let threshold = norm_product * ALIGNED_THRESHOLD;
        if dot < -threshold || dot > threshold {
            let n = linear_combination(v1.x, v2.y, -v1.y, v2.x).abs();
            let s = (n / norm_product).min(1.0).asin();
            if dot >= 0.0 {
                return Ok(s);
            }
            return Ok(std::f64::consts::PI - s);
        }
        Ok((dot / norm_product).acos())
    }

    #[inline]
    pub fn is_nan(&self) -> bool {
        self.x.is_nan() || self.y.is_nan()
    }

    /// Infinite only when not NaN; NaN dominates the classification.
    #[inline]
    pub fn is_infinite(&self) -> bool {
        !self.is_nan() && (self.x.is_infinite() || self.y.is_infinite())
    }

    #[inline]
    pub fn distance1(self, p: Vector2D) -> f64 {
        let dx = (p.x - self.x).abs();
        let dy = (p.y - self.y).abs();
        dx + dy
    }

    #[inline]
    pub fn distance(self, p: Vector2D) -> f64 {
        let dx = p.x - self.x;
        let dy = p.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    #[inline]
    pub fn distance_inf(self, p: Vector2D) -> f64 {
        let dx = (p.x - self.x).abs();
        let dy = (p.y - self.y).abs();
        dx.max(dy)
    }

    #[inline]
    pub fn distance_sq(self, p: Vector2D) -> f64 {
        let dx = p.x - self.x;
        let dy = p.y - self.y;
        dx * dx + dy * dy
    }

    /// L2 distance between two points; identical to `p1.distance(p2)`.
    #[inline]
    pub fn distance_between(p1: Vector2D, p2: Vector2D) -> f64 {
        p1.distance(p2)
    }

    #[inline]
    pub fn distance1_between(p1: Vector2D, p2: Vector2D) -> f64 {
        p1.distance1(p2)
    }

    #[inline]
    pub fn distance_inf_between(p1: Vector2D, p2: Vector2D) -> f64 {
        p1.distance_inf(p2)
    }

    #[inline]
    pub fn distance_sq_between(p1: Vector2D, p2: Vector2D) -> f64 {
        p1.distance_sq(p2)
    }
}

impl PartialEq for Vector2D {
    fn eq(&self, other: &Self) -> bool {
        if self.is_nan() || other.is_nan() {
            return self.is_nan() && other.is_nan();
        }
        self.x.to_bits() == other.x.to_bits() && self.y.to_bits() == other.y.to_bits()
    }
}

impl Eq for Vector2D {}

impl Hash for Vector2D {
    fn hash<H: Hasher>(&self, state: &mut H) {
        if self.is_nan() {
            NAN_HASH.hash(state);
        } else {
            self.x.to_bits().hash(state);
            self.y.to_bits().hash(state);
        }
    }
}

impl fmt::Display for Vector2D {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}; {}}}", self.x, self.y)
    }
}

impl TryFrom<&[f64]> for Vector2D {
    type Error = GeomError;

    fn try_from(v: &[f64]) -> Result<Self> {
        Vector2D::from_slice(v)
    }
}

impl From<[f64; 2]> for Vector2D {
    #[inline]
    fn from(v: [f64; 2]) -> Self {
        Vector2D::new(v[0], v[1])
    }
}

impl From<(f64, f64)> for Vector2D {
    #[inline]
    fn from((x, y): (f64, f64)) -> Self {
        Vector2D::new(x, y)
    }
}

impl From<Vector2<f64>> for Vector2D {
    #[inline]
    fn from(v: Vector2<f64>) -> Self {
        Vector2D::new(v.x, v.y)
    }
}

impl From<Vector2D> for Vector2<f64> {
    #[inline]
    fn from(v: Vector2D) -> Self {
        Vector2::new(v.x, v.y)
    }
}

impl Add for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn add(self, rhs: Vector2D) -> Vector2D {
        Vector2D::add(self, rhs)
    }
}

impl Sub for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn sub(self, rhs: Vector2D) -> Vector2D {
        self.subtract(rhs)
    }
}

impl Neg for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn neg(self) -> Vector2D {
        self.negate()
    }
}

impl Mul<f64> for Vector2D {
    type Output = Vector2D;
    #[inline]
    fn mul(self, a: f64) -> Vector2D {
        self.scalar_multiply(a)
    }
}

impl Mul<Vector2D> for f64 {
    type Output = Vector2D;
    #[inline]
    fn mul(self, v: Vector2D) -> Vector2D {
        v.scalar_multiply(self)
    }
}

#[cfg(test)]
mod tests;
