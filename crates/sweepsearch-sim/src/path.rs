//! Boustrophedon path generation over the search area's bounding square.

use sweepsearch_core::types::{Point, SearchPath};
use sweepsearch_core::units::Miles;

/// North coordinate of track `index`.
pub fn track_y(radius: Miles, spacing: Miles, index: usize) -> f64 {
    -radius.0 + index as f64 * spacing.0
}

/// Build the back-and-forth sweep: even tracks fly west to east, odd
/// tracks east to west, each spanning `[-r, r]`. Returns `2 * track_count`
/// waypoints; zero tracks yields an empty path.
pub fn generate_path(radius: Miles, track_count: usize, spacing: Miles) -> SearchPath {
    let r = radius.0;
    let mut waypoints = Vec::with_capacity(track_count * 2);

    for track in 0..track_count {
        let y = track_y(radius, spacing, track);
        if track % 2 == 0 {
            waypoints.push(Point::new(-r, y));
            waypoints.push(Point::new(r, y));
        } else {
            waypoints.push(Point::new(r, y));
            waypoints.push(Point::new(-r, y));
        }
    }

    SearchPath::new(waypoints)
}
