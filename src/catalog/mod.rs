//! Territory catalog
//!
//! An immutable, ordered collection of territory records. Built once at
//! startup (bundled or from TOML) and only ever read afterwards.

pub mod builtin;
pub mod loader;
pub mod territory;

pub use territory::{AcquisitionMethod, Cost, Territory};

use ahash::AHashMap;

use crate::core::types::{TerritoryId, Year};

/// Ordered, read-only territory records
#[derive(Debug, Clone)]
pub struct Catalog {
    territories: Vec<Territory>,
    by_id: AHashMap<TerritoryId, usize>,
}

impl Catalog {
    /// Build a catalog preserving insertion order.
    ///
    /// Callers are expected to have validated the records (see `loader`);
    /// on duplicate ids the first record wins the id index.
    pub fn new(territories: Vec<Territory>) -> Self {
        let mut by_id = AHashMap::with_capacity(territories.len());
        for (idx, territory) in territories.iter().enumerate() {
            by_id.entry(territory.id.clone()).or_insert(idx);
        }
        Self { territories, by_id }
    }

    /// The catalog compiled into the binary
    pub fn builtin() -> Self {
        Self::new(builtin::territories())
    }

    pub fn len(&self) -> usize {
        self.territories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.territories.is_empty()
    }

    /// All records in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Territory> {
        self.territories.iter()
    }

    pub fn get(&self, id: &TerritoryId) -> Option<&Territory> {
        self.by_id.get(id).map(|&idx| &self.territories[idx])
    }

    /// Position of a record in catalog order
    pub fn index_of(&self, id: &TerritoryId) -> Option<usize> {
        self.by_id.get(id).copied()
    }

    pub fn at(&self, index: usize) -> Option<&Territory> {
        self.territories.get(index)
    }

    /// First record (in catalog order) acquired in exactly `year`
    pub fn first_in_year(&self, year: Year) -> Option<&Territory> {
        self.territories.iter().find(|t| t.year == year)
    }

    /// Records with `year <= current_year`, in catalog order
    pub fn active(&self, current_year: Year) -> impl Iterator<Item = &Territory> {
        self.territories
            .iter()
            .filter(move |t| t.is_active(current_year))
    }

    /// Years carried by more than one record
    pub fn shared_years(&self) -> Vec<Year> {
        let mut counts: AHashMap<Year, usize> = AHashMap::new();
        for territory in &self.territories {
            *counts.entry(territory.year).or_default() += 1;
        }
        let mut years: Vec<Year> = counts
            .into_iter()
            .filter(|&(_, n)| n > 1)
            .map(|(year, _)| year)
            .collect();
        years.sort_unstable();
        years
    }

    /// Total area of the whole catalog
    pub fn total_area(&self) -> f64 {
        self.territories.iter().map(|t| t.area_sq_miles).sum()
    }
}
