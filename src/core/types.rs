//! Core type definitions used throughout the codebase

use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Calendar year on the timeline
pub type Year = i32;

/// First year shown on the timeline
pub const MIN_YEAR: Year = 1776;

/// Last year shown on the timeline
pub const MAX_YEAR: Year = 1920;

/// Full target area (square miles) used to normalise the completion percentage.
/// A display constant, not derived from the catalog.
pub const TOTAL_REFERENCE_AREA: f64 = 3_800_000.0;

/// Width of the map canvas in path units
pub const MAP_WIDTH: f64 = 960.0;

/// Height of the map canvas in path units (y grows downward)
pub const MAP_HEIGHT: f64 = 600.0;

/// Clamp a year into [MIN_YEAR, MAX_YEAR]
pub fn clamp_year(year: Year) -> Year {
    year.clamp(MIN_YEAR, MAX_YEAR)
}

/// Unique identifier for a territory record
#[derive(Debug, Display, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TerritoryId(pub String);

impl TerritoryId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for TerritoryId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// 2D point in map canvas coordinates
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}
