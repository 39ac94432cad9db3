//! Search configuration.
//!
//! Every field has a default matching the reference scenario: a 1 mile
//! radius area flown at 470 ft AGL and 55 mph with a 120° sensor and
//! 50% track overlap. Missing JSON fields fall back to these defaults.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ensure_positive, Result, SearchError};
use crate::units::{Feet, Miles, MilesPerHour};

/// Environmental limits on how far the observer can spot the target.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SensorConditions {
    /// Detection distance under ideal conditions.
    pub max_detection_distance: Feet,
    /// Divisor applied to the ideal distance.
    pub factor_of_safety: f64,
    /// Visibility multiplier in (0, 1]; 1.0 is clear air.
    pub fog_factor: f64,
}

impl Default for SensorConditions {
    fn default() -> Self {
        Self {
            max_detection_distance: Feet(DEFAULT_MAX_DETECTION_FT),
            factor_of_safety: DEFAULT_FACTOR_OF_SAFETY,
            fog_factor: DEFAULT_FOG_FACTOR,
        }
    }
}

impl SensorConditions {
    /// Detection distance after safety factor and fog are applied.
    pub fn expected_detection_distance(&self) -> Feet {
        Feet(self.max_detection_distance.0 / self.factor_of_safety * self.fog_factor)
    }

    pub fn validate(&self) -> Result<()> {
        ensure_positive("max_detection_distance", self.max_detection_distance.0)?;
        ensure_positive("factor_of_safety", self.factor_of_safety)?;
        if !(self.fog_factor > 0.0 && self.fog_factor <= 1.0) {
            return Err(SearchError::invalid(
                "fog_factor",
                self.fog_factor,
                "must be in (0, 1]",
            ));
        }
        Ok(())
    }
}

/// Full input to a search mission.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Sensor field of view (degrees), in (0, 180).
    pub fov_degrees: f64,
    /// Search altitude above ground level.
    pub altitude: Feet,
    /// Vehicle ground speed.
    pub ground_speed: MilesPerHour,
    /// Radius of the circular search area.
    pub radius: Miles,
    /// Fraction of each sweep overlapping the adjacent track, in [0, 1).
    pub overlap_fraction: f64,
    pub sensor: SensorConditions,
    /// Worst-case time that still counts as a successful plan (hours).
    pub time_limit_hours: f64,
    /// Number of Monte Carlo trials.
    pub trial_count: usize,
    /// Histogram bins for the trial distribution.
    pub histogram_bins: usize,
    /// Frames in the playback timeline.
    pub playback_frames: u32,
    /// RNG seed for determinism. Same seed = same mission.
    pub seed: u64,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            fov_degrees: DEFAULT_FOV_DEGREES,
            altitude: Feet(DEFAULT_ALTITUDE_FT),
            ground_speed: MilesPerHour(DEFAULT_GROUND_SPEED_MPH),
            radius: Miles(DEFAULT_RADIUS_MILES),
            overlap_fraction: DEFAULT_OVERLAP_FRACTION,
            sensor: SensorConditions::default(),
            time_limit_hours: DEFAULT_TIME_LIMIT_HOURS,
            trial_count: DEFAULT_TRIAL_COUNT,
            histogram_bins: DEFAULT_HISTOGRAM_BINS,
            playback_frames: DEFAULT_PLAYBACK_FRAMES,
            seed: DEFAULT_SEED,
        }
    }
}

impl SearchConfig {
    /// Parse a config from JSON. Absent fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: SearchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read and validate a JSON config file. Parse failures are reported
    /// as `SearchError::Config` naming the file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let config: SearchConfig = serde_json::from_str(&text)
            .map_err(|err| SearchError::Config(format!("{}: {err}", path.display())))?;
        config.validate()?;
        Ok(config)
    }

    /// Field of view in radians.
    pub fn fov_radians(&self) -> f64 {
        self.fov_degrees.to_radians()
    }

    /// Check every field, returning the first violation.
    pub fn validate(&self) -> Result<()> {
        if !(self.fov_degrees > 0.0 && self.fov_degrees < 180.0) {
            return Err(SearchError::invalid(
                "fov_degrees",
                self.fov_degrees,
                "must be in (0, 180)",
            ));
        }
        ensure_positive("altitude", self.altitude.0)?;
        ensure_positive("ground_speed", self.ground_speed.0)?;
        ensure_positive("radius", self.radius.0)?;
        if !(0.0..1.0).contains(&self.overlap_fraction) {
            return Err(SearchError::invalid(
                "overlap_fraction",
                self.overlap_fraction,
                "must be in [0, 1)",
            ));
        }
        self.sensor.validate()?;
        ensure_positive("time_limit_hours", self.time_limit_hours)?;
        if self.trial_count == 0 {
            return Err(SearchError::invalid("trial_count", 0.0, "must be at least 1"));
        }
        if self.histogram_bins == 0 {
            return Err(SearchError::invalid(
                "histogram_bins",
                0.0,
                "must be at least 1",
            ));
        }
        if self.playback_frames == 0 {
            return Err(SearchError::invalid(
                "playback_frames",
                0.0,
                "must be at least 1",
            ));
        }
        Ok(())
    }
}
