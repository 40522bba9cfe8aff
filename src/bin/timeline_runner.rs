//! Headless Timeline Runner
//!
//! Plays the timeline against a simulated frame clock and reports where
//! auto-pause stopped, plus the final aggregate stats.

use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use territory_timeline::catalog::{loader, Catalog};
use territory_timeline::core::error::Result;
use territory_timeline::core::types::{TerritoryId, Year, MIN_YEAR};
use territory_timeline::playback::{FrameClock, FrameOutcome, ManualClock, PlaybackEngine, Speed};
use territory_timeline::stats::AggregateStats;
use territory_timeline::store::TimelineStore;

/// Headless Timeline Runner - simulated playback for checking pacing and stops
#[derive(Parser, Debug)]
#[command(name = "timeline_runner")]
#[command(about = "Play the territory timeline headlessly and report auto-pause stops")]
struct Args {
    /// Playback speed: 0.5, 1 or 2
    #[arg(long, default_value = "1")]
    speed: Speed,

    /// Disable auto-pause (runs straight to the end)
    #[arg(long)]
    no_auto_pause: bool,

    /// Simulated frame interval in milliseconds
    #[arg(long, default_value_t = 16)]
    frame_ms: u64,

    /// Year to start from
    #[arg(long, default_value_t = MIN_YEAR)]
    from: Year,

    /// Resume after every auto-pause instead of stopping at the first
    #[arg(long)]
    resume: bool,

    /// TOML catalog replacing the bundled records
    #[arg(long)]
    catalog: Option<PathBuf>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Maximum frames before giving up
    #[arg(long, default_value_t = 1_000_000)]
    max_frames: u64,
}

/// One auto-pause stop
#[derive(Debug, Serialize)]
struct Stop {
    year: Year,
    territory: TerritoryId,
    elapsed_ms: u64,
}

/// JSON output structure
#[derive(Debug, Serialize)]
struct RunResult {
    speed: Speed,
    auto_pause: bool,
    start_year: Year,
    final_year: Year,
    frames: u64,
    elapsed_ms: u64,
    reached_end: bool,
    stops: Vec<Stop>,
    stats: AggregateStats,
}

fn main() -> ExitCode {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("territory_timeline=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    if args.frame_ms == 0 {
        eprintln!("Error: --frame-ms must be at least 1");
        return ExitCode::FAILURE;
    }

    match run(&args) {
        Ok(result) => {
            report(&result, &args.format);
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("Error: {}", err);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<RunResult> {
    let catalog = match &args.catalog {
        Some(path) => loader::load_catalog(path)?,
        None => Catalog::builtin(),
    };
    let mut store =
        TimelineStore::with_playback(catalog, PlaybackEngine::new(args.speed, !args.no_auto_pause));
    store.seek(args.from);
    let start_year = store.current_year();

    let mut clock = ManualClock::new();
    let frame = Duration::from_millis(args.frame_ms);
    let mut stops = Vec::new();
    let mut frames = 0u64;
    let mut reached_end = false;

    store.play();
    while frames < args.max_frames {
        clock.advance(frame);
        frames += 1;

        match store.tick(clock.now()) {
            Some(FrameOutcome::AutoPaused { year, territory }) => {
                tracing::info!(year, territory = %territory, "runner.stop");
                stops.push(Stop {
                    year,
                    territory,
                    elapsed_ms: clock.now().as_millis() as u64,
                });
                if !args.resume {
                    break;
                }
                store.play();
            }
            Some(FrameOutcome::ReachedEnd) => {
                reached_end = true;
                break;
            }
            Some(_) => {}
            None => break,
        }
    }

    if frames >= args.max_frames {
        tracing::warn!(frames, "runner.frame_limit");
    }
    store.shutdown();

    Ok(RunResult {
        speed: args.speed,
        auto_pause: !args.no_auto_pause,
        start_year,
        final_year: store.current_year(),
        frames,
        elapsed_ms: clock.now().as_millis() as u64,
        reached_end,
        stops,
        stats: store.stats(),
    })
}

fn report(result: &RunResult, format: &str) {
    match format {
        "json" => match serde_json::to_string_pretty(result) {
            Ok(json) => println!("{}", json),
            Err(err) => eprintln!("Error: failed to serialize result: {}", err),
        },
        _ => {
            println!("Timeline Run");
            println!("============");
            println!("Speed: {} (auto-pause {})", result.speed, if result.auto_pause { "on" } else { "off" });
            println!("Years: {} -> {}", result.start_year, result.final_year);
            println!("Frames: {} ({} ms simulated)", result.frames, result.elapsed_ms);
            println!("Reached end: {}", result.reached_end);
            if !result.stops.is_empty() {
                println!();
                println!("Stops:");
                for stop in &result.stops {
                    println!("  {} {:<24} at {} ms", stop.year, stop.territory.as_str(), stop.elapsed_ms);
                }
            }
            println!();
            println!("Active records: {}", result.stats.active_count);
            println!("Total area: {:.0} sq mi", result.stats.total_area);
            println!("Completion: {:.1}%", result.stats.percent_complete);
            println!("Adjusted cost: ${}", result.stats.total_adjusted_cost);
        }
    }
}
