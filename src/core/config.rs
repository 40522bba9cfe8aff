//! Application configuration
//!
//! Every knob the front end exposes lives here, with defaults matching the
//! bundled experience. Values come from an optional TOML file and may be
//! overridden by command-line flags.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::core::error::{Result, TimelineError};
use crate::playback::Speed;

/// Configuration for the timeline front end
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    /// Playback speed at startup (0.5, 1 or 2)
    pub initial_speed: Speed,

    /// Whether auto-pause is enabled at startup
    pub auto_pause: bool,

    /// Frame cadence of the host loop (milliseconds)
    ///
    /// This is how often a frame timestamp is delivered to the playback
    /// engine while playing. Year advancement is throttled by elapsed time,
    /// so this only affects smoothness, never the pace of the timeline.
    pub frame_interval_ms: u64,

    /// Optional TOML catalog replacing the bundled one
    pub catalog_path: Option<PathBuf>,

    /// Default tracing filter when RUST_LOG is unset
    pub log_filter: String,

    /// File receiving log output while the terminal UI owns the screen
    pub log_file: PathBuf,

    /// Whether the stats panel starts expanded
    pub stats_expanded: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            initial_speed: Speed::Normal,
            auto_pause: true,
            // ~60 frames per second
            frame_interval_ms: 16,
            catalog_path: None,
            log_filter: "territory_timeline=info".into(),
            log_file: PathBuf::from("territory_timeline.log"),
            stats_expanded: false,
        }
    }
}

impl AppConfig {
    /// Create a new config with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML text and validate it
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: AppConfig = toml::from_str(content)?;
        config.validate().map_err(TimelineError::InvalidConfig)?;
        Ok(config)
    }

    /// Load a config file; a missing path falls back to defaults
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => {
                let content = std::fs::read_to_string(path)?;
                tracing::debug!(path = %path.display(), "config.load");
                Self::from_toml_str(&content)
            }
            None => Ok(Self::default()),
        }
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> std::result::Result<(), String> {
        if self.frame_interval_ms == 0 || self.frame_interval_ms > 1000 {
            return Err(format!(
                "frame_interval_ms ({}) must be within 1..=1000",
                self.frame_interval_ms
            ));
        }

        if self.log_filter.trim().is_empty() {
            return Err("log_filter must not be empty".into());
        }

        if let Some(path) = &self.catalog_path {
            if path.as_os_str().is_empty() {
                return Err("catalog_path must not be empty when set".into());
            }
        }

        Ok(())
    }
}
