//! Directed lines and bounded segments.
//!
//! Purpose
//! - `Line`: infinite directed line through two points, carrying the tolerance
//!   it was built with. The closed half-plane on its left is its "inside".
//! - `Segment`: two consecutive hull vertices plus their supporting line.
//!
//! Conventions
//! - `offset(p) > 0` means `p` lies left of the line (same sign as
//!   `Vector2D::cross_product`).
//! - As a half-plane, a line reads `n·x <= c` with the outward normal
//!   `n = (d.y, -d.x)` (90° clockwise of the unit direction `d`).
//!
//! References
//! - Code cross-refs: `region::{HalfPlane, ConvexRegion}`, `hull::ConvexHull2D`

use crate::error::{GeomError, Result};
use crate::numeric::linear_combination;
use crate::region::{halfplane_intersection_point, HalfPlane};
use crate::vector::Vector2D;

/// Directed infinite line.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Line {
    origin: Vector2D,
    direction: Vector2D,
    tolerance: f64,
}

impl Line {
    /// Line from `a` towards `b`; fails when the points coincide within `tolerance`.
    pub fn new(a: Vector2D, b: Vector2D, tolerance: f64) -> Result<Self> {
        let d = b.subtract(a);
        let len = d.norm();
        // Also rejects NaN lengths.
        if !(len > tolerance) || len == 0.0 {
            return Err(GeomError::DegenerateLine);
        }
        Ok(Self {
            origin: a,
            direction: d.scalar_multiply(1.0 / len),
            tolerance,
        })
    }

    #[inline]
    pub fn origin(&self) -> Vector2D {
        self.origin
    }

    /// Unit direction.
    #[inline]
    pub fn direction(&self) -> Vector2D {
        self.direction
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Polar angle of the direction in `(-π, π]`.
    #[inline]
    pub fn angle(&self) -> f64 {
        self.direction.y().atan2(self.direction.x())
    }

    /// Signed distance of `p` from the line; positive on the left.
    #[inline]
    pub fn offset(&self, p: Vector2D) -> f64 {
        let dp = p.subtract(self.origin);
        linear_combination(self.direction.x(), dp.y(), -self.direction.y(), dp.x())
    }

    /// True when `p` lies on the line within tolerance.
    #[inline]
    pub fn contains(&self, p: Vector2D) -> bool {
        self.offset(p).abs() <= self.tolerance
    }

    /// Orthogonal projection of `p` onto the line.
    #[inline]
    pub fn project(&self, p: Vector2D) -> Vector2D {
        let t = p.subtract(self.origin).dot_product(self.direction);
        self.origin.add_scaled(t, self.direction)
    }

    /// Same line, opposite orientation (inside and outside swap).
    #[inline]
    pub fn reverse(&self) -> Line {
        Line {
            origin: self.origin,
            direction: self.direction.negate(),
            tolerance: self.tolerance,
        }
    }

    /// Closed left half-plane as `n·x <= c` with a unit outward normal.
    #[inline]
    pub fn to_halfplane(&self) -> HalfPlane {
        let n = Vector2D::new(self.direction.y(), -self.direction.x());
        HalfPlane::new(n, n.dot_product(self.origin))
    }

    /// Crossing point with `other`; `None` for (near) parallel lines.
    pub fn intersection(&self, other: &Line) -> Option<Vector2D> {
        halfplane_intersection_point(&self.to_halfplane(), &other.to_halfplane())
    }
}

/// Boundary piece between two hull vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Segment {
    start: Vector2D,
    end: Vector2D,
    line: Line,
}

impl Segment {
    /// Segment `start → end` on its own line built with `tolerance`.
    pub fn between(start: Vector2D, end: Vector2D, tolerance: f64) -> Result<Self> {
        let line = Line::new(start, end, tolerance)?;
        Ok(Self { start, end, line })
    }

    /// Piece of an existing `line`; the endpoints are taken to lie on it.
    #[inline]
    pub fn new(start: Vector2D, end: Vector2D, line: Line) -> Self {
        Self { start, end, line }
    }

    #[inline]
    pub fn start(&self) -> Vector2D {
        self.start
    }

    #[inline]
    pub fn end(&self) -> Vector2D {
        self.end
    }

    #[inline]
    pub fn line(&self) -> &Line {
        &self.line
    }

    #[inline]
    pub fn length(&self) -> f64 {
        self.start.distance(self.end)
    }

    #[inline]
    pub fn midpoint(&self) -> Vector2D {
        Vector2D::linear2(0.5, self.start, 0.5, self.end)
    }

    /// Euclidean distance from `p` to the closest point of the segment.
    pub fn distance(&self, p: Vector2D) -> f64 {
        let d = self.end.subtract(self.start);
        let len_sq = d.norm_sq();
        if len_sq == 0.0 {
            return self.start.distance(p);
        }
        let t = (p.subtract(self.start).dot_product(d) / len_sq).clamp(0.0, 1.0);
        self.start.add_scaled(t, d).distance(p)
    }
}
