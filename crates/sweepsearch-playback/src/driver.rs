//! Stateful playback driver and frame timeline.

use sweepsearch_core::state::PlaybackState;
use sweepsearch_core::types::{DetectionResult, SearchPath};
use sweepsearch_core::units::MilesPerHour;

use crate::fsm::{self, playback_step, PlaybackContext, PlaybackUpdate};

/// Owns the playback state for one (path, detection) pair and advances
/// it as the external frame clock ticks.
///
/// `phase_changed` is reported exactly once, on the first update that
/// observes `Found`. Later updates return the same state unchanged.
pub struct PlaybackDriver<'a> {
    path: &'a SearchPath,
    detection: DetectionResult,
    ground_speed: MilesPerHour,
    state: PlaybackState,
    found_reported: bool,
}

impl<'a> PlaybackDriver<'a> {
    /// Start at progress 0. A degenerate path starts already `Found`.
    pub fn new(
        path: &'a SearchPath,
        detection: &DetectionResult,
        ground_speed: MilesPerHour,
    ) -> Self {
        Self {
            path,
            detection: *detection,
            ground_speed,
            state: playback_step(path, detection, 0.0, ground_speed),
            found_reported: false,
        }
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn is_found(&self) -> bool {
        self.state.is_found()
    }

    /// Advance to `progress`. Lower values than the current progress
    /// are ignored; nothing changes once `Found`.
    pub fn advance(&mut self, progress: f64) -> PlaybackUpdate {
        let mut update = fsm::evaluate(&PlaybackContext {
            path: self.path,
            detection: &self.detection,
            ground_speed: self.ground_speed,
            current: self.state,
            progress,
        });

        // Degenerate paths start in Found; announce it on the first frame.
        if update.state.is_found() && !self.found_reported {
            update.phase_changed = true;
            self.found_reported = true;
        }

        self.state = update.state;
        update
    }
}

/// Progress for frame `frame` of `frames`, in [0, 1].
pub fn frame_progress(frame: u32, frames: u32) -> f64 {
    if frames == 0 {
        1.0
    } else {
        (frame as f64 / frames as f64).min(1.0)
    }
}

/// Drive playback over `frames` ticks (`0..=frames`), stopping after the
/// first `Found` state.
pub fn timeline(
    path: &SearchPath,
    detection: &DetectionResult,
    ground_speed: MilesPerHour,
    frames: u32,
) -> Vec<PlaybackState> {
    let mut driver = PlaybackDriver::new(path, detection, ground_speed);
    let mut states = Vec::with_capacity(frames as usize + 1);

    for frame in 0..=frames {
        let update = driver.advance(frame_progress(frame, frames));
        states.push(update.state);
        if update.state.is_found() {
            break;
        }
    }
    states
}
