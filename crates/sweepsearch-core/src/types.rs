//! Fundamental geometric and search-result types.

use serde::{Deserialize, Serialize};

use crate::units::{Feet, Miles};

/// 2D position in the search plane (miles, Cartesian).
/// Origin is the center of the search area; x = East, y = North.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to another point (miles).
    pub fn distance_to(&self, other: &Point) -> f64 {
        let dx = other.x - self.x;
        let dy = other.y - self.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Linear interpolation toward `other`; `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(&self, other: &Point, t: f64) -> Point {
        Point::new(
            self.x + t * (other.x - self.x),
            self.y + t * (other.y - self.y),
        )
    }

    /// Distance from the origin (miles).
    pub fn radial_distance(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }
}

/// Derived sweep geometry for one search configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CoverageParams {
    /// Search-area radius.
    pub radius: Miles,
    /// Ground width seen by the sensor at search altitude.
    pub sweep_width: Feet,
    /// `sweep_width` in area units.
    pub sweep_width_area: Miles,
    /// Fraction of each sweep overlapping the next track, in [0, 1).
    pub overlap_fraction: f64,
    /// Distance between adjacent tracks, always > 0.
    pub track_spacing: Miles,
    /// Tracks needed to span the area's diameter, always >= 1.
    pub track_count: usize,
}

/// A straight piece of the search path between two consecutive waypoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    /// Index of the segment's starting waypoint.
    pub index: usize,
    pub start: Point,
    pub end: Point,
}

impl Segment {
    pub fn length(&self) -> f64 {
        self.start.distance_to(&self.end)
    }
}

/// Ordered boustrophedon waypoints, two per track.
///
/// Consecutive tracks are joined by the straight segment between the
/// end of one track and the start of the next; no turn geometry is
/// modeled.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchPath {
    waypoints: Vec<Point>,
}

impl SearchPath {
    pub fn new(waypoints: Vec<Point>) -> Self {
        Self { waypoints }
    }

    pub fn waypoints(&self) -> &[Point] {
        &self.waypoints
    }

    pub fn len(&self) -> usize {
        self.waypoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.waypoints.is_empty()
    }

    /// Number of tracks (waypoint pairs) on the path.
    pub fn track_count(&self) -> usize {
        self.waypoints.len() / 2
    }

    pub fn first(&self) -> Option<Point> {
        self.waypoints.first().copied()
    }

    /// Iterate the segments between consecutive waypoints, in path order.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.waypoints
            .windows(2)
            .enumerate()
            .map(|(index, pair)| Segment {
                index,
                start: pair[0],
                end: pair[1],
            })
    }

    /// Total polyline length (miles). Zero for empty or single-point paths.
    pub fn total_length(&self) -> f64 {
        self.segments().map(|s| s.length()).sum()
    }
}

/// Outcome of walking a path against one target placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DetectionResult {
    /// Path distance flown when the target was first seen, or the full
    /// path length if it never was.
    pub found_distance: Miles,
    /// Full path length, independent of where the target is.
    pub total_path_distance: Miles,
    /// `found_distance` divided by ground speed (hours).
    pub time_to_find_hours: f64,
    /// Index of the segment whose start satisfied the detection check.
    pub found_segment: Option<usize>,
}

impl DetectionResult {
    pub fn detected(&self) -> bool {
        self.found_segment.is_some()
    }

    /// Fraction of the path flown at detection, in [0, 1].
    /// A zero-length path reports 0.
    pub fn found_progress(&self) -> f64 {
        if self.total_path_distance.0 <= 0.0 {
            0.0
        } else {
            (self.found_distance.0 / self.total_path_distance.0).clamp(0.0, 1.0)
        }
    }
}
