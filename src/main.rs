//! Territory Timeline - Entry Point
//!
//! Loads configuration and the catalog, then hands the terminal to the
//! interactive timeline.

use std::fs::File;
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::Duration;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use territory_timeline::catalog::{loader, Catalog};
use territory_timeline::core::config::AppConfig;
use territory_timeline::core::error::Result;
use territory_timeline::playback::{PlaybackEngine, Speed};
use territory_timeline::render::MapGeometry;
use territory_timeline::store::TimelineStore;
use territory_timeline::ui::{App, UiState};

/// Animated map of territorial expansion, 1776-1920
#[derive(Parser, Debug)]
#[command(name = "territory-timeline")]
#[command(about = "Play back territorial expansion on a terminal map")]
struct Args {
    /// TOML config file
    #[arg(long)]
    config: Option<PathBuf>,

    /// TOML catalog replacing the bundled records
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Playback speed: 0.5, 1 or 2
    #[arg(long)]
    speed: Option<Speed>,

    /// Start with auto-pause disabled
    #[arg(long)]
    no_auto_pause: bool,

    /// Log file (the terminal is owned by the UI)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Start with the stats panel expanded
    #[arg(long)]
    stats: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    let config = apply_overrides(AppConfig::load(args.config.as_deref())?, &args);

    let log_file = File::create(&config.log_file)?;
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();

    tracing::info!("Territory Timeline starting...");

    let catalog = match &config.catalog_path {
        Some(path) => loader::load_catalog(path)?,
        None => Catalog::builtin(),
    };
    let geometry = MapGeometry::build(&catalog)?;

    let playback = PlaybackEngine::new(config.initial_speed, config.auto_pause);
    let store = TimelineStore::with_playback(catalog, playback);
    let ui = UiState::new(config.stats_expanded);

    let app = App::new(
        store,
        geometry,
        ui,
        Duration::from_millis(config.frame_interval_ms),
    );
    let store = app.run()?;

    tracing::info!(year = store.current_year(), "Territory Timeline exiting");
    Ok(())
}

/// Command-line flags win over file values
fn apply_overrides(mut config: AppConfig, args: &Args) -> AppConfig {
    if let Some(path) = &args.catalog {
        config.catalog_path = Some(path.clone());
    }
    if let Some(speed) = args.speed {
        config.initial_speed = speed;
    }
    if args.no_auto_pause {
        config.auto_pause = false;
    }
    if let Some(path) = &args.log_file {
        config.log_file = path.clone();
    }
    if args.stats {
        config.stats_expanded = true;
    }
    config
}
