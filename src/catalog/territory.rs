//! Territory records
//!
//! A record is immutable once the catalog is built. Views hold records by
//! reference or by `TerritoryId`, never by copy.

use serde::{Deserialize, Serialize};

use crate::core::types::{Point, TerritoryId, Year};

/// How a territory was acquired
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AcquisitionMethod {
    Treaty,
    Purchase,
    Annexation,
    Cession,
    #[serde(rename = "War Settlement", alias = "War")]
    War,
    #[serde(rename = "Original Territory", alias = "Original")]
    Original,
}

impl AcquisitionMethod {
    /// Display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Treaty => "Treaty",
            Self::Purchase => "Purchase",
            Self::Annexation => "Annexation",
            Self::Cession => "Cession",
            Self::War => "War Settlement",
            Self::Original => "Original Territory",
        }
    }
}

impl std::fmt::Display for AcquisitionMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Acquisition cost in US dollars. Nominal and inflation-adjusted values
/// always travel together.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cost {
    /// Price paid at the time of acquisition
    pub nominal: u64,
    /// Same price expressed in 2024 dollars
    pub inflation_adjusted: u64,
}

impl Cost {
    pub const fn new(nominal: u64, inflation_adjusted: u64) -> Self {
        Self {
            nominal,
            inflation_adjusted,
        }
    }
}

/// A region of the map tagged with the year it was acquired
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Territory {
    pub id: TerritoryId,
    pub name: String,
    pub year: Year,
    pub area_sq_miles: f64,
    #[serde(default)]
    pub cost: Option<Cost>,
    pub method: AcquisitionMethod,
    pub from_entity: String,
    pub description: String,
    pub comparison: String,
    /// Drawable outline in absolute M/L/C/Z path syntax
    pub path: String,
    /// Display color as `#rrggbb`
    pub color: String,
    pub label: Point,
}

impl Territory {
    /// Active records are drawn and interactive
    pub fn is_active(&self, current_year: Year) -> bool {
        self.year <= current_year
    }

    /// Inflation-adjusted cost, absent counting as zero
    pub fn adjusted_cost(&self) -> u64 {
        self.cost.map(|c| c.inflation_adjusted).unwrap_or(0)
    }
}
