//! Region shapes: drawable edges, hit areas and fill sampling

use geo::{BoundingRect, Contains};
use geo_types::{LineString, MultiPolygon, Point as GeoPoint, Polygon};

use super::path::{parse_path, SubPath};
use crate::core::error::Result;
use crate::core::types::Point;

/// Default spacing of fill samples, in canvas units
pub const FILL_STEP: f64 = 4.0;

/// Upper bound on grid cells scanned for one shape. The whole canvas at the
/// finest step stays below it.
const MAX_FILL_CELLS: f64 = 4_000_000.0;

/// A parsed drawable shape
#[derive(Debug, Clone)]
pub struct RegionShape {
    subpaths: Vec<SubPath>,
    area: MultiPolygon<f64>,
    fill: Vec<(f64, f64)>,
}

impl RegionShape {
    /// Parse path data. Only closed subpaths contribute to the hit area.
    pub fn parse(path: &str) -> Result<Self> {
        Ok(Self::from_subpaths(parse_path(path)?))
    }

    pub fn from_subpaths(subpaths: Vec<SubPath>) -> Self {
        let polygons: Vec<Polygon<f64>> = subpaths
            .iter()
            .filter(|s| s.closed && s.points.len() >= 3)
            .map(|s| {
                let ring: Vec<(f64, f64)> = s.points.iter().map(|p| (p.x, p.y)).collect();
                Polygon::new(LineString::from(ring), vec![])
            })
            .collect();

        Self {
            subpaths,
            area: MultiPolygon::new(polygons),
            fill: Vec::new(),
        }
    }

    /// Precompute interior sample points on a grid of `step` units
    pub fn with_fill(mut self, step: f64) -> Self {
        self.fill.clear();
        let Some(bounds) = self.area.bounding_rect() else {
            return self;
        };
        let step = step.max(0.5);
        let cells = (bounds.width() / step) * (bounds.height() / step);
        if !cells.is_finite() || cells > MAX_FILL_CELLS {
            tracing::warn!(cells, "region.fill_skipped");
            return self;
        }
        let mut y = bounds.min().y + step / 2.0;
        while y < bounds.max().y {
            let mut x = bounds.min().x + step / 2.0;
            while x < bounds.max().x {
                if self.area.contains(&GeoPoint::new(x, y)) {
                    self.fill.push((x, y));
                }
                x += step;
            }
            y += step;
        }
        self
    }

    /// Whether `point` lies strictly inside a closed subpath
    pub fn contains(&self, point: Point) -> bool {
        self.area.contains(&GeoPoint::new(point.x, point.y))
    }

    /// Every drawable edge, in path order
    pub fn edges(&self) -> impl Iterator<Item = (Point, Point)> + '_ {
        self.subpaths.iter().flat_map(|s| s.edges())
    }

    pub fn fill_points(&self) -> &[(f64, f64)] {
        &self.fill
    }

    pub fn subpaths(&self) -> &[SubPath] {
        &self.subpaths
    }

    /// Whether the shape has any closed (hit-testable) area
    pub fn has_area(&self) -> bool {
        !self.area.0.is_empty()
    }
}
