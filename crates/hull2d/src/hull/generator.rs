//! Hull generation seam: point set → `ConvexHull2D`.
//!
//! Concrete strategies (gift wrapping, monotone chain, Akl–Toussaint
//! pre-filtering, …) live with their callers. `ConvexHull2D` only certifies
//! the ordering a strategy produces, so validation, segments and regions stay
//! strategy-agnostic.

use super::ConvexHull2D;
use crate::error::Result;
use crate::vector::Vector2D;

/// Build a convex hull from an unordered point collection.
///
/// Contract
/// - Input may be unordered and contain duplicates.
/// - Output vertices are a CCW ordering of a subset of the input, without
///   duplicates or strictly interior points.
/// - Fails with `GeomError::HullGeneration` when no hull can be produced; no
///   partial hull is returned.
pub trait ConvexHullGenerator2D {
    fn generate(&self, points: &[Vector2D]) -> Result<ConvexHull2D>;
}

impl<F> ConvexHullGenerator2D for F
where
    F: Fn(&[Vector2D]) -> Result<ConvexHull2D>,
{
    #[inline]
    fn generate(&self, points: &[Vector2D]) -> Result<ConvexHull2D> {
        self(points)
    }
}
