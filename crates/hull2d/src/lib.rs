//! 2D convex hull kernel: vectors, validated hulls, boundary lines, regions.
//!
//! Layout
//! - `vector`: `Vector2D` value type and the `Vector`/`Point` abstractions.
//! - `numeric`: compensated two-term products and tolerant comparisons.
//! - `line`: directed `Line` and `Segment` used for hull boundaries.
//! - `region`: `ConvexRegion` from half-plane intersection.
//! - `hull`: `ConvexHull2D` (validation, lazy segments, region) and the
//!   `ConvexHullGenerator2D` seam.
//! - `rand`: seeded convex polygons and point clouds (replay tokens).
//!
//! API Policy
//! - Failures are values (`GeomError`); nothing in the library panics on bad input.
//! - Logging goes through `tracing`; the caller installs a subscriber.

pub mod cfg;
pub mod error;
pub mod hull;
pub mod line;
pub mod numeric;
pub mod rand;
pub mod region;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::GeomCfg;
pub use error::{GeomError, Result};
pub use hull::{ConvexHull, ConvexHull2D, ConvexHullGenerator2D};
pub use vector::Vector2D;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::{GeomCfg, DEFAULT_REGION_EPS, DEFAULT_TOLERANCE};
    pub use crate::error::{GeomError, Result};
    pub use crate::hull::{ConvexHull, ConvexHull2D, ConvexHullGenerator2D};
    pub use crate::line::{Line, Segment};
    pub use crate::rand::{
        draw_convex_polygon, draw_point_cloud, PolygonCfg, ReplayToken, VertexCount,
    };
    pub use crate::region::{ConvexRegion, HalfPlane, Location};
    pub use crate::vector::{mean, Point, Vector, Vector2D};
}
