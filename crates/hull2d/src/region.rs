//! Bounded convex regions from half-plane intersection.
//!
//! Purpose
//! - Turn a set of directed boundary lines into the convex polygon lying on
//!   the left of all of them, with containment and measure queries.
//!
//! Why this design
//! - Half-planes are kept as an angle-sorted, coalesced H-representation
//!   (unit outward normals, `n·x <= c`), which makes the intersection a single
//!   deque sweep and keeps region-region intersection a sorted merge.
//! - Failure is explicit: an empty or unbounded intersection is an error, so a
//!   live `ConvexRegion` always has at least three vertices.
//!
//! Assumptions and conventions
//! - Boundedness is decided from the normal directions alone: every cyclic gap
//!   between consecutive normal angles must be below π.
//! - `eps` enlarges every half-plane during the sweep (`c → c + eps`).
//!
//! References
//! - Code cross-refs: `line::Line::to_halfplane`, `hull::ConvexHull2D::create_region`

use std::collections::VecDeque;
use std::f64::consts::PI;

use nalgebra::{matrix, Vector2};

use crate::error::{GeomError, Result};
use crate::line::Line;
use crate::vector::Vector2D;

/// Normals closer than this are treated as the same direction.
const PARALLEL_EPS: f64 = 1e-9;
/// Determinant below which two boundary lines do not cross.
const DET_EPS: f64 = 1e-12;
/// Slack on the π gap test for boundedness.
const GAP_EPS: f64 = 1e-12;
/// Rounding allowance of `n·p - c`, in `f64::EPSILON` units of the operand magnitude.
const ROUNDING_ULPS: f64 = 64.0;

/// Closed half-plane `n · x <= c`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HalfPlane {
    pub n: Vector2D,
    pub c: f64,
}

impl HalfPlane {
    #[inline]
    pub fn new(n: Vector2D, c: f64) -> Self {
        Self { n, c }
    }

    #[inline]
    pub fn satisfies_eps(&self, p: Vector2D, eps: f64) -> bool {
        self.n.dot_product(p) <= self.c + eps
    }

    /// `n·p - c`: negative inside, positive outside.
    #[inline]
    pub fn excess(&self, p: Vector2D) -> f64 {
        self.n.dot_product(p) - self.c
    }

    /// Absolute rounding error to expect from `excess(p)`.
    #[inline]
    fn rounding_band(&self, p: Vector2D) -> f64 {
        ROUNDING_ULPS * f64::EPSILON * (1.0 + p.norm_inf() + self.c.abs())
    }

    #[inline]
    fn angle(&self) -> f64 {
        self.n.y().atan2(self.n.x())
    }

    /// Rescale to a unit normal; `None` for zero or non-finite normals.
    fn canonical(&self) -> Option<HalfPlane> {
        let norm = self.n.norm();
        if !norm.is_finite() || norm <= 0.0 {
            return None;
        }
        Some(HalfPlane::new(self.n.scalar_multiply(1.0 / norm), self.c / norm))
    }
}

/// Position of a point relative to a region.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Location {
    Inside,
    Boundary,
    Outside,
}

/// Bounded convex polygon owned by the caller.
///
/// Invariants:
/// - `halfplanes` have unit normals, are angle-sorted and parallel-coalesced.
/// - `vertices` has at least three entries in counter-clockwise order.
#[derive(Clone, Debug)]
pub struct ConvexRegion {
    halfplanes: Vec<HalfPlane>,
    vertices: Vec<Vector2D>,
    tolerance: f64,
}

impl ConvexRegion {
    /// Intersect the left half-planes of `lines`.
    ///
    /// The region's containment tolerance is the largest line tolerance.
    pub fn from_lines(lines: &[Line], eps: f64) -> Result<Self> {
        let tolerance = lines.iter().map(Line::tolerance).fold(0.0, f64::max);
        let hs: Vec<HalfPlane> = lines.iter().map(Line::to_halfplane).collect();
        Self::from_halfplanes(&hs, eps, tolerance)
    }

    /// Intersect arbitrary half-planes `n·x <= c` (normals need not be unit).
    pub fn from_halfplanes(hs: &[HalfPlane], eps: f64, tolerance: f64) -> Result<Self> {
        let ordered = order_and_coalesce(hs.iter().filter_map(HalfPlane::canonical).collect());
        let vertices = intersect_ordered(&ordered, eps, tolerance)?;
        tracing::trace!(
            halfplanes = ordered.len(),
            vertices = vertices.len(),
            "region assembled"
        );
        Ok(Self {
            halfplanes: ordered,
            vertices,
            tolerance,
        })
    }

    /// Intersection with another region (sorted merge, then a fresh sweep).
    pub fn intersection(&self, other: &ConvexRegion, eps: f64) -> Result<ConvexRegion> {
        let mut merged = Vec::with_capacity(self.halfplanes.len() + other.halfplanes.len());
        merged.extend_from_slice(&self.halfplanes);
        merged.extend_from_slice(&other.halfplanes);
        let ordered = order_and_coalesce(merged);
        let tolerance = self.tolerance.max(other.tolerance);
        let vertices = intersect_ordered(&ordered, eps, tolerance)?;
        Ok(Self {
            halfplanes: ordered,
            vertices,
            tolerance,
        })
    }

    #[inline]
    pub fn halfplanes(&self) -> &[HalfPlane] {
        &self.halfplanes
    }

    /// Counter-clockwise vertices.
    #[inline]
    pub fn vertices(&self) -> &[Vector2D] {
        &self.vertices
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    /// Enclosed area (shoelace).
    pub fn area(&self) -> f64 {
        0.5 * signed_area2(&self.vertices)
    }

    /// Boundary length.
    pub fn perimeter(&self) -> f64 {
        let m = self.vertices.len();
        (0..m)
            .map(|k| self.vertices[k].distance(self.vertices[(k + 1) % m]))
            .sum()
    }

    /// Area centroid.
    pub fn barycenter(&self) -> Vector2D {
        let o = self.vertices.first().copied().unwrap_or(Vector2D::ZERO);
        let m = self.vertices.len();
        let mut a = 0.0;
        let mut cx = 0.0;
        let mut cy = 0.0;
        for k in 0..m {
            let p = self.vertices[k].subtract(o);
            let q = self.vertices[(k + 1) % m].subtract(o);
            let cross = p.x() * q.y() - q.x() * p.y();
            a += cross;
            cx += (p.x() + q.x()) * cross;
            cy += (p.y() + q.y()) * cross;
        }
        if a == 0.0 {
            return crate::vector::mean(&self.vertices).unwrap_or(Vector2D::NAN);
        }
        o.add(Vector2D::new(cx / (3.0 * a), cy / (3.0 * a)))
    }

    /// Classify `p` using the region tolerance as boundary thickness.
    ///
    /// The band is widened by the rounding error of `n·p - c`, which grows
    /// with the distance from the origin.
    pub fn check_point(&self, p: Vector2D) -> Location {
        let mut on_boundary = false;
        for h in &self.halfplanes {
            let e = h.excess(p);
            let band = self.tolerance + h.rounding_band(p);
            if e > band {
                return Location::Outside;
            }
            if e >= -band {
                on_boundary = true;
            }
        }
        if on_boundary {
            Location::Boundary
        } else {
            Location::Inside
        }
    }

    /// Inside or on the boundary.
    #[inline]
    pub fn contains(&self, p: Vector2D) -> bool {
        self.check_point(p) != Location::Outside
    }
}

/// Twice the signed area of a closed polygon.
///
/// Coordinates are taken relative to the first vertex, so polygons far from
/// the origin do not lose their area to cancellation.
pub(crate) fn signed_area2(verts: &[Vector2D]) -> f64 {
    let Some(&o) = verts.first() else {
        return 0.0;
    };
    let m = verts.len();
    (0..m)
        .map(|k| {
            let p = verts[k].subtract(o);
            let q = verts[(k + 1) % m].subtract(o);
            p.x() * q.y() - q.x() * p.y()
        })
        .sum()
}

/// Crossing point of two boundary lines; `None` when (near) parallel.
pub(crate) fn halfplane_intersection_point(h1: &HalfPlane, h2: &HalfPlane) -> Option<Vector2D> {
    let a = matrix![h1.n.x(), h1.n.y(); h2.n.x(), h2.n.y()];
    if a.determinant().abs() < DET_EPS {
        return None;
    }
    let inv = a.try_inverse()?;
    let p = inv * Vector2::new(h1.c, h2.c);
    Some(Vector2D::from(p))
}

fn order_and_coalesce(mut hs: Vec<HalfPlane>) -> Vec<HalfPlane> {
    hs.sort_by(|a, b| a.angle().total_cmp(&b.angle()));
    let mut out: Vec<HalfPlane> = Vec::with_capacity(hs.len());
    for h in hs {
        if let Some(last) = out.last_mut() {
            if last.n.distance(h.n) < PARALLEL_EPS {
                if h.c < last.c {
                    last.c = h.c;
                }
                continue;
            }
        }
        out.push(h);
    }
    // The first and last entries can still share a direction across the ±π seam.
    if out.len() >= 2 && out[0].n.distance(out[out.len() - 1].n) < PARALLEL_EPS {
        if let Some(last) = out.pop() {
            out[0].c = out[0].c.min(last.c);
        }
    }
    out
}

/// Every cyclic gap between normal angles is strictly below π.
fn is_bounded(hs: &[HalfPlane]) -> bool {
    if hs.len() < 3 {
        return false;
    }
    let angles: Vec<f64> = hs.iter().map(HalfPlane::angle).collect();
    let wrap = 2.0 * PI - (angles[angles.len() - 1] - angles[0]);
    angles
        .windows(2)
        .map(|w| w[1] - w[0])
        .chain(std::iter::once(wrap))
        .all(|gap| gap < PI - GAP_EPS)
}

/// Deque sweep over angle-sorted, coalesced half-planes.
fn intersect_ordered(hs: &[HalfPlane], eps: f64, tolerance: f64) -> Result<Vec<Vector2D>> {
    if !is_bounded(hs) {
        return Err(GeomError::UnboundedRegion);
    }
    // Opposite parallel pairs: s = n·x must lie in [-c2, c1].
    for (i, hi) in hs.iter().enumerate() {
        for hj in &hs[i + 1..] {
            if hi.n.distance(hj.n.negate()) < PARALLEL_EPS && hi.c + hj.c < -2.0 * eps {
                return Err(GeomError::EmptyRegion);
            }
        }
    }

    let inter = |i1: usize, i2: usize| halfplane_intersection_point(&hs[i1], &hs[i2]);
    let mut dq: VecDeque<usize> = VecDeque::new();
    for (i, h) in hs.iter().enumerate() {
        while dq.len() >= 2 {
            let l1 = dq[dq.len() - 2];
            let l2 = dq[dq.len() - 1];
            if let Some(p) = inter(l1, l2) {
                if h.satisfies_eps(p, eps) {
                    break;
                }
            }
            dq.pop_back();
        }
        while dq.len() >= 2 {
            if let Some(p) = inter(dq[0], dq[1]) {
                if h.satisfies_eps(p, eps) {
                    break;
                }
            }
            dq.pop_front();
        }
        dq.push_back(i);
    }
    while dq.len() >= 3 {
        if let Some(p) = inter(dq[dq.len() - 2], dq[dq.len() - 1]) {
            if hs[dq[0]].satisfies_eps(p, eps) {
                break;
            }
        }
        dq.pop_back();
    }
    while dq.len() >= 3 {
        if let Some(p) = inter(dq[0], dq[1]) {
            if hs[dq[dq.len() - 1]].satisfies_eps(p, eps) {
                break;
            }
        }
        dq.pop_front();
    }
    if dq.len() < 3 {
        return Err(GeomError::EmptyRegion);
    }

    let m = dq.len();
    let mut verts = Vec::with_capacity(m);
    for k in 0..m {
        match inter(dq[k], dq[(k + 1) % m]) {
            Some(p) => verts.push(p),
            None => return Err(GeomError::EmptyRegion),
        }
    }
    // A sweep over an infeasible system can leave a ring of lines whose
    // crossings violate the dropped constraints. The slack is relative: the
    // crossing points carry rounding error proportional to their magnitude.
    let slack = eps.max(0.0) + tolerance.max(0.0);
    let feasible = verts.iter().all(|p| {
        let scale = 1.0 + p.norm_inf();
        hs.iter()
            .all(|h| h.excess(*p) <= slack * scale + h.rounding_band(*p))
    });
    if !feasible || signed_area2(&verts) <= 0.0 {
        return Err(GeomError::EmptyRegion);
    }
    Ok(verts)
}
