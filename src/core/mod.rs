pub mod config;
pub mod error;
pub mod types;

pub use config::AppConfig;
pub use error::{Result, TimelineError};
pub use types::{clamp_year, Point, TerritoryId, Year, MAX_YEAR, MIN_YEAR};
