//! JSON reports for hulls and their regions.

use hull2d::region::ConvexRegion;
use hull2d::{ConvexHull2D, GeomCfg, Result, Vector2D};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RegionSummary {
    pub vertices: Vec<[f64; 2]>,
    pub area: f64,
    pub perimeter: f64,
    pub barycenter: [f64; 2],
}

impl From<&ConvexRegion> for RegionSummary {
    fn from(r: &ConvexRegion) -> Self {
        Self {
            vertices: r.vertices().iter().map(Vector2D::to_array).collect(),
            area: r.area(),
            perimeter: r.perimeter(),
            barycenter: r.barycenter().to_array(),
        }
    }
}

/// Counts plus the region, or the reason there is none.
#[derive(Debug, Serialize)]
pub struct HullSummary {
    pub vertices: usize,
    pub segments: usize,
    pub tolerance: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<RegionSummary>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region_error: Option<String>,
}

/// Validate `points` as an ordered hull and summarize it.
///
/// Only validation and segment failures are errors; a hull without a region
/// is reported through `region_error`.
pub fn summarize(points: Vec<Vector2D>, cfg: GeomCfg) -> Result<HullSummary> {
    let hull = ConvexHull2D::with_cfg(points, cfg)?;
    let segments = hull.line_segments()?.len();
    let (region, region_error) = match hull.create_region() {
        Ok(r) => (Some(RegionSummary::from(&r)), None),
        Err(e) => (None, Some(e.to_string())),
    };
    Ok(HullSummary {
        vertices: hull.len(),
        segments,
        tolerance: hull.tolerance(),
        region,
        region_error,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull2d::GeomError;

    fn v(x: f64, y: f64) -> Vector2D {
        Vector2D::new(x, y)
    }

    #[test]
    fn square_summary_has_region() {
        let s = summarize(
            vec![v(0.0, 0.0), v(2.0, 0.0), v(2.0, 2.0), v(0.0, 2.0)],
            GeomCfg::default(),
        )
        .unwrap();
        assert_eq!((s.vertices, s.segments), (4, 4));
        let r = s.region.unwrap();
        assert!((r.area - 4.0).abs() < 1e-12);
        assert!((r.perimeter - 8.0).abs() < 1e-12);
        assert!(s.region_error.is_none());
    }

    #[test]
    fn short_hull_reports_region_error() {
        let s = summarize(vec![v(0.0, 0.0), v(1.0, 0.0)], GeomCfg::default()).unwrap();
        assert_eq!(s.segments, 1);
        assert!(s.region.is_none());
        assert_eq!(
            s.region_error.as_deref(),
            Some("Region generation requires at least 3 vertices but found only 2")
        );
        let json = serde_json::to_value(&s).unwrap();
        assert!(json.get("region").is_none());
    }

    #[test]
    fn invalid_hull_is_an_error() {
        let err = summarize(
            vec![v(0.0, 0.0), v(0.0, 1.0), v(1.0, 1.0), v(1.0, 0.0)],
            GeomCfg::default(),
        )
        .unwrap_err();
        assert_eq!(err, GeomError::NotConvex);
    }
}
