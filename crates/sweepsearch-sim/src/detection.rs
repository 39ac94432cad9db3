//! Detection simulator.
//!
//! Walks the path segment by segment, accumulating distance flown, and
//! stops the search at the first segment whose starting waypoint is
//! within half a sweep width of the target in y. The x-extent of the
//! segment is not considered, and connector segments between tracks are
//! checked exactly like sweep segments.

use tracing::{debug, trace};

use sweepsearch_core::error::{ensure_positive, Result};
use sweepsearch_core::types::{DetectionResult, Point, SearchPath, Segment};
use sweepsearch_core::units::{Miles, MilesPerHour};

/// Whether the target is visible from the start of `segment`.
pub fn in_sweep(segment: &Segment, target: &Point, sweep_width: Miles) -> bool {
    (segment.start.y - target.y).abs() <= sweep_width.0 / 2.0
}

/// Walk `path` against `target` and report where it was first seen.
///
/// The first matching segment in path order wins. The found distance is
/// the distance flown before that segment plus the x-offset from the
/// segment start to the target. A target that is never seen is reported
/// as found at the end of the path. An empty path yields zero distances.
pub fn simulate_detection(
    path: &SearchPath,
    target: Point,
    sweep_width: Miles,
    ground_speed: MilesPerHour,
) -> Result<DetectionResult> {
    ensure_positive("sweep_width", sweep_width.0)?;
    ensure_positive("ground_speed", ground_speed.0)?;

    let mut cumulative = 0.0;
    let mut found: Option<(f64, usize)> = None;

    for segment in path.segments() {
        if found.is_none() && in_sweep(&segment, &target, sweep_width) {
            let distance = cumulative + (segment.start.x - target.x).abs();
            trace!(segment = segment.index, distance, "target inside sweep");
            found = Some((distance, segment.index));
        }
        // Keep accumulating so the total reflects the whole path.
        cumulative += segment.length();
    }

    let total = cumulative;
    let (found_distance, found_segment) = match found {
        Some((distance, index)) => (distance.min(total), Some(index)),
        None => {
            debug!(total, "target never inside sweep, reporting end of path");
            (total, None)
        }
    };

    Ok(DetectionResult {
        found_distance: Miles(found_distance),
        total_path_distance: Miles(total),
        time_to_find_hours: ground_speed.hours_to_cover(Miles(found_distance)),
        found_segment,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::path::generate_path;
    use approx::assert_relative_eq;

    fn three_tracks() -> SearchPath {
        // Tracks at y = -1.0, -0.5, 0.0
        generate_path(Miles(1.0), 3, Miles(0.5))
    }

    #[test]
    fn test_target_on_last_track() {
        let result = simulate_detection(
            &three_tracks(),
            Point::new(0.0, 0.0),
            Miles(0.2),
            MilesPerHour(55.0),
        )
        .unwrap();
        // Segment 4 starts at (-1, 0): 2 + 0.5 + 2 + 0.5 flown, plus 1.0 in x.
        assert_eq!(result.found_segment, Some(4));
        assert_relative_eq!(result.found_distance.0, 6.0);
        assert_relative_eq!(result.total_path_distance.0, 7.0);
        assert!(result.found_distance.0 < result.total_path_distance.0);
    }

    #[test]
    fn test_first_match_wins_not_closest() {
        // Wide sweep covers both the first and second track.
        let result = simulate_detection(
            &three_tracks(),
            Point::new(0.5, -0.75),
            Miles(1.0),
            MilesPerHour(55.0),
        )
        .unwrap();
        assert_eq!(result.found_segment, Some(0));
        assert_relative_eq!(result.found_distance.0, 1.5);
    }

    #[test]
    fn test_track_start_matches_before_connector() {
        // Second track starts at (1, -0.5); the connector after it starts at (-1, -0.5).
        // With a tight sweep, the track segment itself matches first.
        let result = simulate_detection(
            &three_tracks(),
            Point::new(-0.9, -0.5),
            Miles(0.1),
            MilesPerHour(55.0),
        )
        .unwrap();
        assert_eq!(result.found_segment, Some(2));
        // 2.0 + 0.5 flown, start at x = 1.0, target at x = -0.9
        assert_relative_eq!(result.found_distance.0, 4.4, epsilon = 1e-12);
    }

    #[test]
    fn test_never_found_reports_end_of_path() {
        let result = simulate_detection(
            &three_tracks(),
            Point::new(0.0, 0.7),
            Miles(0.2),
            MilesPerHour(55.0),
        )
        .unwrap();
        assert!(!result.detected());
        assert_eq!(result.found_distance, result.total_path_distance);
        assert_relative_eq!(result.time_to_find_hours, 7.0 / 55.0, epsilon = 1e-12);
    }

    #[test]
    fn test_empty_path_never_found() {
        let result = simulate_detection(
            &SearchPath::default(),
            Point::new(0.0, 0.0),
            Miles(0.2),
            MilesPerHour(55.0),
        )
        .unwrap();
        assert!(!result.detected());
        assert_eq!(result.total_path_distance.0, 0.0);
        assert_eq!(result.time_to_find_hours, 0.0);
    }

    #[test]
    fn test_time_to_find_uses_ground_speed() {
        let result = simulate_detection(
            &three_tracks(),
            Point::new(0.0, 0.0),
            Miles(0.2),
            MilesPerHour(30.0),
        )
        .unwrap();
        assert_relative_eq!(result.time_to_find_hours, 6.0 / 30.0, epsilon = 1e-12);
    }

    #[test]
    fn test_rejects_nonpositive_speed_and_sweep() {
        let path = three_tracks();
        let target = Point::new(0.0, 0.0);
        assert!(simulate_detection(&path, target, Miles(0.2), MilesPerHour(0.0)).is_err());
        assert!(simulate_detection(&path, target, Miles(0.0), MilesPerHour(55.0)).is_err());
    }
}
