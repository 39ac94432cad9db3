//! Search mission engine.
//!
//! `SearchMission` owns the validated config and two seeded RNG
//! streams, runs every stage in order, and produces a `MissionReport`.
//! Completely headless, enabling deterministic testing.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing::debug;

use sweepsearch_core::config::SearchConfig;
use sweepsearch_core::constants::TRIAL_SEED_MIX;
use sweepsearch_core::error::Result;
use sweepsearch_core::state::MissionReport;
use sweepsearch_core::types::SearchPath;

use crate::{coverage, detection, estimate, path, target, trials};

/// Output of one mission run: the report plus the flown path, which
/// playback consumers need but the report omits.
#[derive(Debug, Clone)]
pub struct MissionOutcome {
    pub report: MissionReport,
    pub path: SearchPath,
}

/// Seed for the trial stream. Offsetting by a nonzero constant keeps it
/// distinct from the placement seed for every input, zero included.
pub fn trial_seed(seed: u64) -> u64 {
    seed.wrapping_add(TRIAL_SEED_MIX)
}

/// The mission engine. Owns the config and all random state.
pub struct SearchMission {
    config: SearchConfig,
    placement_rng: ChaCha8Rng,
    trial_rng: ChaCha8Rng,
}

impl SearchMission {
    /// Validate `config` and seed the placement and trial streams.
    pub fn new(config: SearchConfig) -> Result<Self> {
        config.validate()?;
        let placement_rng = ChaCha8Rng::seed_from_u64(config.seed);
        let trial_rng = ChaCha8Rng::seed_from_u64(trial_seed(config.seed));
        Ok(Self {
            config,
            placement_rng,
            trial_rng,
        })
    }

    pub fn config(&self) -> &SearchConfig {
        &self.config
    }

    /// Run every stage once. Repeated calls continue both RNG streams,
    /// so each run places a new target and draws new trials.
    pub fn run(&mut self) -> Result<MissionOutcome> {
        let config = &self.config;

        let estimate = estimate::worst_case_estimate(config)?;
        debug!(
            flight_distance_ft = estimate.flight_distance.0,
            flight_time_hours = estimate.flight_time_hours,
            "worst-case estimate"
        );

        let coverage = coverage::from_config(config)?;
        debug!(
            spacing_mi = coverage.track_spacing.0,
            tracks = coverage.track_count,
            "coverage parameters"
        );

        let path = path::generate_path(coverage.radius, coverage.track_count, coverage.track_spacing);
        let target = target::place_target(config.radius, &mut self.placement_rng);
        debug!(x = target.x, y = target.y, "target placed");

        let detection = detection::simulate_detection(
            &path,
            target,
            coverage.sweep_width_area,
            config.ground_speed,
        )?;
        debug!(
            found_mi = detection.found_distance.0,
            total_mi = detection.total_path_distance.0,
            hours = detection.time_to_find_hours,
            "detection simulated"
        );

        let trial_set = trials::run_trials(
            config.trial_count,
            estimate.flight_distance,
            config.ground_speed,
            &mut self.trial_rng,
        )?;
        debug!(
            mean = trial_set.mean(),
            median = trial_set.median(),
            "trials complete"
        );

        let report = MissionReport {
            config: config.clone(),
            estimate,
            coverage,
            target,
            detection,
            trials: trial_set.summary(config.histogram_bins),
        };

        Ok(MissionOutcome { report, path })
    }
}
