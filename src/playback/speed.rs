//! Playback speed settings

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Time between year advancements at 1x
pub const BASE_YEAR_INTERVAL_MS: u64 = 500;

/// Playback speed multiplier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub enum Speed {
    /// One year per second
    Half,
    /// One year per 500ms
    Normal,
    /// One year per 250ms
    Double,
}

impl Speed {
    /// Every speed, slowest first
    pub const ALL: [Speed; 3] = [Speed::Half, Speed::Normal, Speed::Double];

    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Half => 0.5,
            Self::Normal => 1.0,
            Self::Double => 2.0,
        }
    }

    /// Elapsed time required before the next year advances
    pub fn year_interval(&self) -> Duration {
        match self {
            Self::Half => Duration::from_millis(BASE_YEAR_INTERVAL_MS * 2),
            Self::Normal => Duration::from_millis(BASE_YEAR_INTERVAL_MS),
            Self::Double => Duration::from_millis(BASE_YEAR_INTERVAL_MS / 2),
        }
    }

    pub fn from_multiplier(multiplier: f64) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|s| (s.multiplier() - multiplier).abs() < f64::EPSILON)
    }

    /// Display name
    pub fn label(&self) -> &'static str {
        match self {
            Self::Half => "0.5x",
            Self::Normal => "1x",
            Self::Double => "2x",
        }
    }
}

impl Default for Speed {
    fn default() -> Self {
        Self::Normal
    }
}

impl TryFrom<f64> for Speed {
    type Error = String;

    fn try_from(multiplier: f64) -> Result<Self, Self::Error> {
        Self::from_multiplier(multiplier)
            .ok_or_else(|| format!("unsupported speed {}, expected 0.5, 1 or 2", multiplier))
    }
}

impl From<Speed> for f64 {
    fn from(speed: Speed) -> Self {
        speed.multiplier()
    }
}

/// Accepts `0.5`, `1`, `2`, optionally suffixed with `x`
impl std::str::FromStr for Speed {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let number = trimmed.strip_suffix('x').unwrap_or(trimmed);
        let multiplier: f64 = number
            .parse()
            .map_err(|_| format!("invalid speed '{}'", s))?;
        Self::try_from(multiplier)
    }
}

impl std::fmt::Display for Speed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
