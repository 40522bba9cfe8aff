//! Aggregate statistics over the active part of the catalog
//!
//! Pure functions of (catalog, year). Nothing here holds timeline state.

pub mod format;

use serde::Serialize;

use crate::catalog::Catalog;
use crate::core::types::{Year, TOTAL_REFERENCE_AREA};

/// Totals over every record active at a year
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct AggregateStats {
    pub total_area: f64,
    /// Sum of inflation-adjusted costs; records without a cost add nothing
    pub total_adjusted_cost: u64,
    /// Share of `TOTAL_REFERENCE_AREA`, capped at 100
    pub percent_complete: f64,
    pub active_count: usize,
}

impl AggregateStats {
    pub fn compute(catalog: &Catalog, year: Year) -> Self {
        let mut total_area = 0.0;
        let mut total_adjusted_cost = 0u64;
        let mut active_count = 0;

        for territory in catalog.active(year) {
            total_area += territory.area_sq_miles;
            total_adjusted_cost = total_adjusted_cost.saturating_add(territory.adjusted_cost());
            active_count += 1;
        }

        Self {
            total_area,
            total_adjusted_cost,
            percent_complete: (total_area / TOTAL_REFERENCE_AREA * 100.0).min(100.0),
            active_count,
        }
    }

    /// Progress as a 0..=1 ratio, for gauges
    pub fn completion_ratio(&self) -> f64 {
        (self.percent_complete / 100.0).clamp(0.0, 1.0)
    }
}

/// One active record's slice of the active area
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AreaShare {
    pub name: String,
    pub color: String,
    pub area: f64,
    /// Fraction of the active total (0..=1)
    pub fraction: f64,
}

/// Per-record breakdown of the active area, in catalog order
pub fn area_shares(catalog: &Catalog, year: Year) -> Vec<AreaShare> {
    let total: f64 = catalog.active(year).map(|t| t.area_sq_miles).sum();
    catalog
        .active(year)
        .map(|t| AreaShare {
            name: t.name.clone(),
            color: t.color.clone(),
            area: t.area_sq_miles,
            fraction: if total > 0.0 { t.area_sq_miles / total } else { 0.0 },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{MAX_YEAR, MIN_YEAR};

    #[test]
    fn test_nothing_active_at_start() {
        let stats = AggregateStats::compute(&Catalog::builtin(), MIN_YEAR);
        assert_eq!(stats.active_count, 0);
        assert_eq!(stats.total_area, 0.0);
        assert_eq!(stats.total_adjusted_cost, 0);
        assert_eq!(stats.percent_complete, 0.0);
    }

    #[test]
    fn test_louisiana_era_totals() {
        let stats = AggregateStats::compute(&Catalog::builtin(), 1803);
        assert_eq!(stats.active_count, 2);
        assert_eq!(stats.total_area, 892_135.0 + 828_000.0);
        // The original territory has no cost
        assert_eq!(stats.total_adjusted_cost, 393_000_000);
        assert!((stats.percent_complete - 1_720_135.0 / 38_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_full_catalog_totals() {
        let catalog = Catalog::builtin();
        let stats = AggregateStats::compute(&catalog, MAX_YEAR);
        assert_eq!(stats.active_count, catalog.len());
        assert_eq!(stats.total_area, catalog.total_area());
        assert_eq!(
            stats.total_adjusted_cost,
            393_000_000 + 124_000_000 + 565_000_000 + 350_000_000 + 145_000_000
        );
        assert!(stats.percent_complete <= 100.0);
    }

    #[test]
    fn test_percent_is_capped() {
        let mut records = crate::catalog::builtin::territories();
        records[0].area_sq_miles = TOTAL_REFERENCE_AREA * 2.0;
        let stats = AggregateStats::compute(&Catalog::new(records), MAX_YEAR);
        assert_eq!(stats.percent_complete, 100.0);
        assert_eq!(stats.completion_ratio(), 1.0);
    }

    #[test]
    fn test_area_shares_sum_to_one() {
        let shares = area_shares(&Catalog::builtin(), 1848);
        assert_eq!(shares.len(), 6);
        let sum: f64 = shares.iter().map(|s| s.fraction).sum();
        assert!((sum - 1.0).abs() < 1e-9);
        assert_eq!(shares[0].name, "Original 13 Colonies + 1783");
    }

    #[test]
    fn test_area_shares_empty() {
        assert!(area_shares(&Catalog::builtin(), MIN_YEAR).is_empty());
    }
}
