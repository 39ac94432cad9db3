//! sweepsearch: aerial search-time estimator.
//!
//! Usage:
//!   sweepsearch --radius 1.5 --overlap 0.3
//!   sweepsearch --config mission.json --seed 0 --export run.json

mod report;

use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing::{error, info, Level};
use tracing_subscriber::FmtSubscriber;

use sweepsearch_core::config::SearchConfig;
use sweepsearch_core::units::{Feet, Miles, MilesPerHour};
use sweepsearch_core::Result;
use sweepsearch_playback::timeline;
use sweepsearch_sim::SearchMission;

/// Estimate how long an aerial sweep takes to find a lost hiker.
#[derive(Parser, Debug)]
#[command(name = "sweepsearch")]
#[command(about = "Simulate a boustrophedon aerial search over a circular area", long_about = None)]
struct Args {
    /// JSON config file (fields not given fall back to defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Master seed for determinism (0 = random from time)
    #[arg(short, long)]
    seed: Option<u64>,

    /// Search-area radius (miles)
    #[arg(short, long)]
    radius: Option<f64>,

    /// Search altitude above ground (feet)
    #[arg(long)]
    altitude: Option<f64>,

    /// Sensor field of view (degrees)
    #[arg(long)]
    fov: Option<f64>,

    /// Ground speed (mph)
    #[arg(long)]
    speed: Option<f64>,

    /// Track overlap fraction in [0, 1)
    #[arg(long)]
    overlap: Option<f64>,

    /// Number of randomized trials
    #[arg(short, long)]
    trials: Option<usize>,

    /// Verbose output
    #[arg(short, long)]
    verbose: bool,

    /// JSON output for scripting
    #[arg(long)]
    json: bool,

    /// Export report, path, and playback timeline to a JSON file
    #[arg(long)]
    export: Option<PathBuf>,
}

fn main() {
    let args = Args::parse();

    // Initialize logging
    let level = if args.verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .finish();
    if let Err(e) = tracing::subscriber::set_global_default(subscriber) {
        eprintln!("Failed to set tracing subscriber: {e}");
    }

    if let Err(e) = run(&args) {
        error!("{e}");
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<()> {
    let config = build_config(args)?;
    let mut mission = SearchMission::new(config)?;
    let outcome = mission.run()?;
    let report = &outcome.report;

    let playback = timeline(
        &outcome.path,
        &report.detection,
        report.config.ground_speed,
        report.config.playback_frames,
    );

    if args.json {
        println!("{}", serde_json::to_string_pretty(report)?);
    } else {
        report::print_summary(report);
        report::print_trials(report);
        report::print_simulation(report, &playback);
    }

    if let Some(path) = &args.export {
        let export = serde_json::json!({
            "report": report,
            "path": outcome.path,
            "playback": playback,
        });
        std::fs::write(path, serde_json::to_string_pretty(&export)?)?;
        info!("Exported {} playback frames to {}", playback.len(), path.display());
    }

    Ok(())
}

/// Defaults, then the config file, then command-line overrides.
fn build_config(args: &Args) -> Result<SearchConfig> {
    let mut config = match &args.config {
        Some(path) => SearchConfig::load(path)?,
        None => SearchConfig::default(),
    };

    if let Some(radius) = args.radius {
        config.radius = Miles(radius);
    }
    if let Some(altitude) = args.altitude {
        config.altitude = Feet(altitude);
    }
    if let Some(fov) = args.fov {
        config.fov_degrees = fov;
    }
    if let Some(speed) = args.speed {
        config.ground_speed = MilesPerHour(speed);
    }
    if let Some(overlap) = args.overlap {
        config.overlap_fraction = overlap;
    }
    if let Some(trials) = args.trials {
        config.trial_count = trials;
    }
    if let Some(seed) = args.seed {
        config.seed = if seed == 0 { seed_from_time() } else { seed };
    }

    config.validate()?;
    Ok(config)
}

fn seed_from_time() -> u64 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(1)
}
