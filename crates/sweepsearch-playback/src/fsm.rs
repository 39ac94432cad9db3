//! Playback finite state machine.
//!
//! Pure functions that compute the vehicle's position, elapsed time,
//! and phase for a progress value. `Found` is terminal.

use sweepsearch_core::enums::PlaybackPhase;
use sweepsearch_core::state::PlaybackState;
use sweepsearch_core::types::{DetectionResult, Point, SearchPath};
use sweepsearch_core::units::{Miles, MilesPerHour};

/// Input to the playback FSM for one frame.
pub struct PlaybackContext<'a> {
    pub path: &'a SearchPath,
    pub detection: &'a DetectionResult,
    pub ground_speed: MilesPerHour,
    /// State produced by the previous frame.
    pub current: PlaybackState,
    /// Requested progress in [0, 1].
    pub progress: f64,
}

/// Output from the playback FSM.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackUpdate {
    pub state: PlaybackState,
    pub phase_changed: bool,
}

/// Evaluate the FSM for one frame. Progress never moves backwards.
pub fn evaluate(ctx: &PlaybackContext) -> PlaybackUpdate {
    match ctx.current.phase {
        // Terminal state, no transitions
        PlaybackPhase::Found => PlaybackUpdate {
            state: ctx.current,
            phase_changed: false,
        },
        PlaybackPhase::Searching => {
            let progress = if ctx.progress.is_nan() {
                ctx.current.progress
            } else {
                ctx.progress.max(ctx.current.progress)
            };
            let state = playback_step(ctx.path, ctx.detection, progress, ctx.ground_speed);
            PlaybackUpdate {
                state,
                phase_changed: state.phase != ctx.current.phase,
            }
        }
    }
}

/// Stateless playback for a single progress value.
///
/// Once the distance flown reaches the detection point, progress is
/// clamped there and the phase is `Found` with the detection time. A
/// path with fewer than two waypoints or zero length is reported as
/// `Found` at its start.
pub fn playback_step(
    path: &SearchPath,
    detection: &DetectionResult,
    progress: f64,
    ground_speed: MilesPerHour,
) -> PlaybackState {
    let waypoints = path.waypoints();
    let total = detection.total_path_distance.0;

    if waypoints.len() < 2 || !(total > 0.0) {
        return PlaybackState {
            progress: 0.0,
            position: path.first().unwrap_or_default(),
            elapsed_hours: detection.time_to_find_hours,
            phase: PlaybackPhase::Found,
        };
    }

    let progress = if progress.is_nan() {
        0.0
    } else {
        progress.clamp(0.0, 1.0)
    };
    let current_distance = progress * total;

    if current_distance >= detection.found_distance.0 {
        let found_progress = detection.found_progress();
        return PlaybackState {
            progress: found_progress,
            position: position_at(waypoints, found_progress),
            elapsed_hours: detection.time_to_find_hours,
            phase: PlaybackPhase::Found,
        };
    }

    PlaybackState {
        progress,
        position: position_at(waypoints, progress),
        elapsed_hours: ground_speed.hours_to_cover(Miles(current_distance)),
        phase: PlaybackPhase::Searching,
    }
}

/// Interpolate by waypoint index: progress selects a fractional index
/// into the waypoint list, not an arc-length position. Requires at
/// least two waypoints.
fn position_at(waypoints: &[Point], progress: f64) -> Point {
    let last = waypoints.len() - 1;
    let scaled = progress * last as f64;
    let index = (scaled.floor() as usize).min(last - 1);
    let t = scaled - index as f64;
    waypoints[index].lerp(&waypoints[index + 1], t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_at_endpoints() {
        let wp = [Point::new(0.0, 0.0), Point::new(1.0, 0.0), Point::new(1.0, 1.0)];
        assert_eq!(position_at(&wp, 0.0), Point::new(0.0, 0.0));
        assert_eq!(position_at(&wp, 0.5), Point::new(1.0, 0.0));
        assert_eq!(position_at(&wp, 1.0), Point::new(1.0, 1.0));
        assert_eq!(position_at(&wp, 0.75), Point::new(1.0, 0.5));
    }
}
