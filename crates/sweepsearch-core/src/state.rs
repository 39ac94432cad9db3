//! Mission report and playback views: the complete output handed to
//! consumers (console summaries, plots, animation).

use serde::{Deserialize, Serialize};

use crate::config::SearchConfig;
use crate::enums::{PlaybackPhase, WorstCaseVerdict};
use crate::types::{CoverageParams, DetectionResult, Point};
use crate::units::Feet;

/// Closed-form worst-case search estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WorstCaseEstimate {
    /// Detection distance after safety factor and fog.
    pub expected_detection_distance: Feet,
    /// Area of the search disc (square miles).
    pub search_area_sq_miles: f64,
    /// Sensor ground footprint width at search altitude.
    pub sweep_width: Feet,
    /// Flight distance needed to sweep the whole area.
    pub flight_distance: Feet,
    /// `flight_distance` at ground speed (hours).
    pub flight_time_hours: f64,
    pub time_limit_hours: f64,
    pub verdict: WorstCaseVerdict,
}

/// One histogram bin over trial times (hours).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HistogramBin {
    pub lower: f64,
    pub upper: f64,
    pub count: usize,
}

/// Monte Carlo trial times and their statistics (all hours).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrialSummary {
    /// Trial times in generation order, rounded to two decimals.
    pub samples: Vec<f64>,
    pub mean_hours: f64,
    pub median_hours: f64,
    /// Population standard deviation.
    pub std_dev_hours: f64,
    pub histogram: Vec<HistogramBin>,
}

/// Playback output for a single frame.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaybackState {
    /// Normalized progress along the path, in [0, 1].
    pub progress: f64,
    /// Interpolated vehicle position (miles).
    pub position: Point,
    /// Elapsed search time (hours).
    pub elapsed_hours: f64,
    pub phase: PlaybackPhase,
}

impl PlaybackState {
    pub fn is_found(&self) -> bool {
        self.phase == PlaybackPhase::Found
    }
}

/// Everything a single mission run produced.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MissionReport {
    pub config: SearchConfig,
    pub estimate: WorstCaseEstimate,
    pub coverage: CoverageParams,
    pub target: Point,
    pub detection: DetectionResult,
    pub trials: TrialSummary,
}
