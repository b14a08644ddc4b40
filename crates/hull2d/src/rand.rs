//! Random convex polygons and point clouds in 2D (replay tokens).
//!
//! Purpose
//! - Deterministic inputs for tests, benches and the CLI `sample` command.
//!
//! Model
//! - Convex polygons: `n` equally spaced angles on [0, 2π) with bounded
//!   angular jitter, placed on a circle of fixed radius. Sorted angles on a
//!   circle give a strictly convex CCW vertex loop without any hull step.
//! - Point clouds: uniform in a disk (unordered; no convexity).
//! - Determinism uses a replay token `(seed, index)` mixed into a single RNG.

use std::f64::consts::TAU;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::vector::Vector2D;

/// How many vertices a drawn polygon gets; anything below a triangle is raised to 3.
#[derive(Clone, Copy, Debug)]
pub enum VertexCount {
    Fixed(usize),
    /// Inclusive range.
    Uniform { min: usize, max: usize },
}

impl VertexCount {
    /// Inclusive `(lo, hi)` after clamping to at least three vertices.
    fn bounds(self) -> (usize, usize) {
        let (lo, hi) = match self {
            VertexCount::Fixed(n) => (n, n),
            VertexCount::Uniform { min, max } => (min, max),
        };
        let lo = lo.max(3);
        (lo, hi.max(lo))
    }

    fn draw(self, rng: &mut StdRng) -> usize {
        match self.bounds() {
            (lo, hi) if lo == hi => lo,
            (lo, hi) => rng.gen_range(lo..=hi),
        }
    }
}

/// Circle sampler configuration.
#[derive(Clone, Copy, Debug)]
pub struct PolygonCfg {
    pub vertex_count: VertexCount,
    /// Maximum angular offset of a vertex from its slot, relative to the slot
    /// width `2π/n`; values outside `[0, 0.49]` are clamped.
    pub angle_jitter_frac: f64,
    pub radius: f64,
    pub center: Vector2D,
    /// Rotate the whole polygon by a random angle.
    pub random_phase: bool,
}

impl Default for PolygonCfg {
    fn default() -> Self {
        Self {
            vertex_count: VertexCount::Fixed(12),
            angle_jitter_frac: 0.3,
            radius: 1.0,
            center: Vector2D::ZERO,
            random_phase: true,
        }
    }
}

/// Names one draw: the same `(seed, index)` always yields the same polygon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReplayToken {
    pub seed: u64,
    pub index: u64,
}

impl ReplayToken {
    #[inline]
    pub fn new(seed: u64, index: u64) -> Self {
        Self { seed, index }
    }

    /// Token for the following draw under the same seed.
    #[inline]
    pub fn next(self) -> Self {
        Self::new(self.seed, self.index.wrapping_add(1))
    }

    /// Independent RNG per token: the index is hashed before it meets the
    /// seed, so neighbouring indices do not give correlated streams.
    fn rng(self) -> StdRng {
        let index_key = finalize(self.index.wrapping_add(GOLDEN_GAMMA));
        StdRng::seed_from_u64(finalize(self.seed ^ index_key))
    }
}

/// Weyl increment of the SplitMix64 generator.
const GOLDEN_GAMMA: u64 = 0x9e37_79b9_7f4a_7c15;

/// SplitMix64 output function (Stafford variant 13).
fn finalize(z: u64) -> u64 {
    let z = (z ^ (z >> 30)).wrapping_mul(0xbf58_476d_1ce4_e5b9);
    let z = (z ^ (z >> 27)).wrapping_mul(0x94d0_49bb_1331_11eb);
    z ^ (z >> 31)
}

/// Strictly convex CCW vertex loop on a circle.
pub fn draw_convex_polygon(cfg: PolygonCfg, tok: ReplayToken) -> Vec<Vector2D> {
    let mut rng = tok.rng();
    let n = cfg.vertex_count.draw(&mut rng);
    let aj = cfg.angle_jitter_frac.clamp(0.0, 0.49);
    let r = cfg.radius.max(1e-9);
    let delta = TAU / (n as f64);
    let phase = if cfg.random_phase {
        rng.gen::<f64>() * TAU
    } else {
        0.0
    };
    // Jitter stays below Δ/2, so the offsets from the phase remain increasing
    // and inside [0, 2π).
    (0..n)
        .map(|k| {
            let jitter = (rng.gen::<f64>() * 2.0 - 1.0) * aj * delta;
            let th = phase + (k as f64 + 0.5) * delta + jitter;
            cfg.center.add(Vector2D::new(th.cos() * r, th.sin() * r))
        })
        .collect()
}

/// `n` points uniform in the disk of radius `radius` around `center`.
pub fn draw_point_cloud(n: usize, center: Vector2D, radius: f64, tok: ReplayToken) -> Vec<Vector2D> {
    let mut rng = tok.rng();
    (0..n)
        .map(|_| {
            let th = rng.gen::<f64>() * TAU;
            let rho = radius * rng.gen::<f64>().sqrt();
            center.add(Vector2D::new(th.cos() * rho, th.sin() * rho))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::ConvexHull2D;

    #[test]
    fn reproducible_draw() {
        let cfg = PolygonCfg {
            vertex_count: VertexCount::Fixed(10),
            ..PolygonCfg::default()
        };
        let tok = ReplayToken::new(42, 7);
        let p1 = draw_convex_polygon(cfg, tok);
        let p2 = draw_convex_polygon(cfg, tok);
        assert_eq!(p1, p2);
        assert_eq!(p1.len(), 10);
        assert_ne!(p1, draw_convex_polygon(cfg, tok.next()));
    }

    #[test]
    fn polygons_validate_as_hulls() {
        let cfg = PolygonCfg {
            vertex_count: VertexCount::Uniform { min: 3, max: 40 },
            angle_jitter_frac: 0.45,
            radius: 3.0,
            center: Vector2D::new(10.0, -4.0),
            random_phase: true,
        };
        let mut tok = ReplayToken::new(1, 0);
        for _ in 0..200 {
            let verts = draw_convex_polygon(cfg, tok);
            assert!(verts
                .iter()
                .all(|p| (p.distance(cfg.center) - 3.0).abs() < 1e-9));
            ConvexHull2D::new(verts, 1e-10).expect("sampled polygon must be convex");
            tok = tok.next();
        }
    }

    #[test]
    fn point_cloud_stays_in_disk() {
        let c = Vector2D::new(1.0, 2.0);
        let pts = draw_point_cloud(500, c, 2.0, ReplayToken::new(3, 0));
        assert_eq!(pts.len(), 500);
        assert!(pts.iter().all(|p| p.distance(c) <= 2.0 + 1e-12));
        assert_eq!(pts, draw_point_cloud(500, c, 2.0, ReplayToken::new(3, 0)));
    }

    #[test]
    fn vertex_count_is_at_least_three() {
        let mut rng = ReplayToken::new(0, 0).rng();
        assert_eq!(VertexCount::Fixed(1).draw(&mut rng), 3);
        assert_eq!(VertexCount::Uniform { min: 0, max: 2 }.draw(&mut rng), 3);
        assert_eq!(VertexCount::Uniform { min: 9, max: 4 }.bounds(), (9, 9));
        for _ in 0..20 {
            let n = VertexCount::Uniform { min: 5, max: 8 }.draw(&mut rng);
            assert!((5..=8).contains(&n));
        }
    }
}
