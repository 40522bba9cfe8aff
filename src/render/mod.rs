//! Map rendering model
//!
//! Turns the store into per-frame snapshots the terminal views draw from.
//! This module is READ-ONLY - it never modifies timeline state.

pub mod colors;

use crate::catalog::Catalog;
use crate::catalog::builtin::OUTLINE_PATH;
use crate::core::error::Result;
use crate::core::types::{Point, Year};
use crate::geometry::{RegionShape, FILL_STEP};
use crate::store::TimelineStore;

use colors::Color;

/// Parsed shapes for the outline and every catalog record, index-aligned
/// with the catalog
#[derive(Debug, Clone)]
pub struct MapGeometry {
    outline: RegionShape,
    regions: Vec<RegionShape>,
}

impl MapGeometry {
    pub fn build(catalog: &Catalog) -> Result<Self> {
        let outline = RegionShape::parse(OUTLINE_PATH)?;
        let regions = catalog
            .iter()
            .map(|t| RegionShape::parse(&t.path).map(|shape| shape.with_fill(FILL_STEP)))
            .collect::<Result<Vec<_>>>()?;
        tracing::debug!(regions = regions.len(), "map.geometry_built");
        Ok(Self { outline, regions })
    }

    pub fn outline(&self) -> &RegionShape {
        &self.outline
    }

    pub fn region(&self, index: usize) -> Option<&RegionShape> {
        self.regions.get(index)
    }

    /// Catalog index of the active region under `point`. Later records are
    /// drawn on top, so they win where shapes overlap.
    pub fn hit_test(&self, catalog: &Catalog, year: Year, point: Point) -> Option<usize> {
        catalog
            .iter()
            .enumerate()
            .rev()
            .filter(|(_, t)| t.is_active(year))
            .find(|(idx, _)| self.regions.get(*idx).is_some_and(|r| r.contains(point)))
            .map(|(idx, _)| idx)
    }
}

/// Lightweight snapshot of an active region for drawing
#[derive(Debug, Clone)]
pub struct RenderRegion {
    /// Position in the catalog (and in `MapGeometry`)
    pub index: usize,
    pub color: Color,
    pub label: Point,
    pub year: Year,
    pub selected: bool,
    pub hovered: bool,
}

/// Collects every active region into a reusable buffer, in draw order.
/// Call this once per frame, passing the same buffer to avoid allocations.
pub fn collect_render_regions(
    store: &TimelineStore,
    hovered: Option<usize>,
    buffer: &mut Vec<RenderRegion>,
) {
    buffer.clear();
    let year = store.current_year();
    for (index, territory) in store.catalog().iter().enumerate() {
        if !territory.is_active(year) {
            continue;
        }
        let base = Color::from_hex(&territory.color).unwrap_or(colors::FALLBACK);
        let selected = store.selection().is_selected(&territory.id);
        let hovered = hovered == Some(index);
        buffer.push(RenderRegion {
            index,
            color: colors::region_tint(base, selected, hovered),
            label: territory.label,
            year: territory.year,
            selected,
            hovered,
        });
    }
}
