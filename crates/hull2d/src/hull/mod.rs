//! Validated 2D convex hulls (`ConvexHull2D`) and the generator seam.
//!
//! Purpose
//! - Certify a candidate vertex ordering as a convex, counter-clockwise loop.
//! - Derive the closed boundary segment loop lazily and memoize it.
//! - Assemble a bounded `ConvexRegion` from the boundary lines.
//!
//! Why this design
//! - Construction is the single validation point: a live `ConvexHull2D` is
//!   always valid. Degenerate hulls (0–2 vertices) are legal hulls but cannot
//!   produce a region; the two checks stay separate on purpose.
//! - The segment cache is a `OnceLock` holding a fully built `Arc<[Segment]>`
//!   (or the line error), so concurrent readers never observe a partial array.
//!
//! References
//! - Code cross-refs: `line::{Line, Segment}`, `region::ConvexRegion`,
//!   `generator::ConvexHullGenerator2D`

mod generator;

pub use generator::ConvexHullGenerator2D;

use std::cmp::Ordering;
use std::sync::{Arc, OnceLock};

use crate::cfg::GeomCfg;
use crate::error::{GeomError, Result};
use crate::line::{Line, Segment};
use crate::numeric::{compare_with_tolerance, linear_combination};
use crate::region::ConvexRegion;
use crate::vector::{Point, Vector2D};

/// Common hull surface, independent of dimension.
pub trait ConvexHull {
    type Vertex: Point;
    type Region;

    /// Hull vertices in boundary order (independent copy).
    fn vertices(&self) -> Vec<Self::Vertex>;

    /// Region enclosed by the hull.
    fn create_region(&self) -> Result<Self::Region>;
}

/// Convex hull of a 2D point set: ordered CCW vertices plus a tolerance.
#[derive(Clone, Debug)]
pub struct ConvexHull2D {
    vertices: Vec<Vector2D>,
    tolerance: f64,
    region_eps: f64,
    segments: OnceLock<Result<Arc<[Segment]>>>,
}

impl ConvexHull2D {
    /// Validate `vertices` (already ordered) and build the hull.
    ///
    /// Fails with `NotConvex` when the turning direction changes beyond
    /// `tolerance` or the loop winds clockwise.
    ///
    /// Clockwise loops are rejected on purpose: region assembly keeps the left
    /// side of every boundary line, which encloses the hull only for CCW order.
    pub fn new(vertices: Vec<Vector2D>, tolerance: f64) -> Result<Self> {
        Self::with_cfg(vertices, GeomCfg::with_tolerance(tolerance))
    }

    /// As [`ConvexHull2D::new`], taking tolerances from `cfg`.
    pub fn with_cfg(vertices: Vec<Vector2D>, cfg: GeomCfg) -> Result<Self> {
        check_convex(&vertices, cfg.tolerance)?;
        Ok(Self {
            vertices,
            tolerance: cfg.tolerance,
            region_eps: cfg.region_eps,
            segments: OnceLock::new(),
        })
    }

    /// Copy of the vertices; mutating it does not affect the hull.
    #[inline]
    pub fn vertices(&self) -> Vec<Vector2D> {
        self.vertices.clone()
    }

    #[inline]
    pub fn tolerance(&self) -> f64 {
        self.tolerance
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Ordered closed boundary: 0 segments for ≤1 vertex, 1 for 2, `n` for `n ≥ 3`.
    ///
    /// Computed once per instance; each call returns an independent copy.
    pub fn line_segments(&self) -> Result<Vec<Segment>> {
        self.cached_segments().map(|s| s.to_vec())
    }

    /// Intersect the left half-planes of all boundary lines.
    ///
    /// Needs at least three vertices; the region shares nothing with `self`.
    pub fn create_region(&self) -> Result<ConvexRegion> {
        if self.vertices.len() < 3 {
            return Err(GeomError::InsufficientVertices {
                found: self.vertices.len(),
            });
        }
        let segments = self.cached_segments()?;
        let lines: Vec<Line> = segments.iter().map(|s| *s.line()).collect();
        let region = ConvexRegion::from_lines(&lines, self.region_eps);
        match &region {
            Ok(r) => tracing::debug!(
                vertices = self.vertices.len(),
                region_vertices = r.vertices().len(),
                "hull region created"
            ),
            Err(e) => tracing::debug!(vertices = self.vertices.len(), error = %e, "hull region failed"),
        }
        region
    }

    fn cached_segments(&self) -> Result<&Arc<[Segment]>> {
        self.segments
            .get_or_init(|| build_segments(&self.vertices, self.tolerance))
            .as_ref()
            .map_err(Clone::clone)
    }
}

impl ConvexHull for ConvexHull2D {
    type Vertex = Vector2D;
    type Region = ConvexRegion;

    fn vertices(&self) -> Vec<Vector2D> {
        ConvexHull2D::vertices(self)
    }

    fn create_region(&self) -> Result<ConvexRegion> {
        ConvexHull2D::create_region(self)
    }
}

/// Single pass over consecutive turns; collinear turns never conflict.
fn check_convex(vertices: &[Vector2D], tolerance: f64) -> Result<()> {
    let n = vertices.len();
    if n < 3 {
        return Ok(());
    }
    let mut sign = Ordering::Equal;
    for i in 0..n {
        let p1 = vertices[if i == 0 { n - 1 } else { i - 1 }];
        let p2 = vertices[i];
        let p3 = vertices[if i == n - 1 { 0 } else { i + 1 }];
        let d1 = p2.subtract(p1);
        let d2 = p3.subtract(p2);
        let turn = linear_combination(d1.x(), d2.y(), -d1.y(), d2.x());
        let cmp = compare_with_tolerance(turn, 0.0, tolerance);
        if cmp != Ordering::Equal {
            if sign != Ordering::Equal && cmp != sign {
                tracing::debug!(vertex = i, turn, "turning direction changes");
                return Err(GeomError::NotConvex);
            }
            sign = cmp;
        }
    }
    if sign == Ordering::Less {
        tracing::debug!(vertices = n, "vertex loop winds clockwise");
        return Err(GeomError::NotConvex);
    }
    Ok(())
}

fn build_segments(vertices: &[Vector2D], tolerance: f64) -> Result<Arc<[Segment]>> {
    let segments: Vec<Segment> = match vertices.len() {
        0 | 1 => Vec::new(),
        2 => vec![Segment::between(vertices[0], vertices[1], tolerance)?],
        n => {
            let mut out = Vec::with_capacity(n);
            for pair in vertices.windows(2) {
                out.push(Segment::between(pair[0], pair[1], tolerance)?);
            }
            out.push(Segment::between(vertices[n - 1], vertices[0], tolerance)?);
            out
        }
    };
    tracing::trace!(segments = segments.len(), "boundary segments built");
    Ok(segments.into())
}
