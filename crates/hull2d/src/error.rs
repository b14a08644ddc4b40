//! Error type shared by the vector kernel, hull validation and region assembly.
//!
//! Every failure is synchronous and reported to the immediate caller; nothing
//! is retried internally.

/// All errors returned by `hull2d`.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum GeomError {
    /// A coordinate array did not have exactly two entries.
    #[error("Dimension mismatch: {got} != 2")]
    DimensionMismatch { got: usize },

    /// `normalize` or `angle` was called with a zero-length vector.
    #[error("Norm is zero")]
    ZeroNorm,

    /// The vertex sequence changes turning direction (or winds clockwise).
    #[error("Vertices do not form a convex hull in CCW winding")]
    NotConvex,

    /// A region needs at least three hull vertices.
    #[error("Region generation requires at least 3 vertices but found only {found}")]
    InsufficientVertices { found: usize },

    /// The two points defining a line coincide within tolerance.
    #[error("Cannot build a line through two points closer than the tolerance")]
    DegenerateLine,

    /// The half-plane intersection is empty.
    #[error("Half-plane intersection is empty")]
    EmptyRegion,

    /// The half-plane intersection is not bounded.
    #[error("Half-plane intersection is unbounded")]
    UnboundedRegion,

    /// A hull generator could not produce any hull for its input.
    #[error("Convex hull generation failed: {reason}")]
    HullGeneration { reason: String },
}

impl GeomError {
    /// Shorthand used by generator implementations.
    pub fn hull_generation(reason: impl Into<String>) -> Self {
        Self::HullGeneration {
            reason: reason.into(),
        }
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GeomError>;
