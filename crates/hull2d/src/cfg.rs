//! Tolerance defaults.
//!
//! Policy
//! - `tolerance` is the hull's collinearity band and the line degeneracy
//!   threshold; it travels with each `ConvexHull2D` instance.
//! - `region_eps` is the slack used by the half-plane sweep when testing
//!   candidate vertices; it only affects region assembly.

/// Default collinearity tolerance for hull validation and boundary lines.
pub const DEFAULT_TOLERANCE: f64 = 1e-10;
/// Default slack for half-plane intersection membership tests.
pub const DEFAULT_REGION_EPS: f64 = 1e-9;

/// Geometry configuration (tolerances).
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GeomCfg {
    pub tolerance: f64,
    pub region_eps: f64,
}

impl Default for GeomCfg {
    fn default() -> Self {
        Self {
            tolerance: DEFAULT_TOLERANCE,
            region_eps: DEFAULT_REGION_EPS,
        }
    }
}

impl GeomCfg {
    /// Default config with a custom hull tolerance.
    #[inline]
    pub fn with_tolerance(tolerance: f64) -> Self {
        Self {
            tolerance,
            ..Self::default()
        }
    }
}
