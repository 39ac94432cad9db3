//! Random target placement inside the search disc.
//!
//! Polar sampling with the radial distance drawn uniformly in `[0, r)`.
//! This is not area-uniform: placements cluster toward the center,
//! which the estimates built on it assume.

use std::f64::consts::TAU;

use rand::Rng;

use sweepsearch_core::types::Point;
use sweepsearch_core::units::Miles;

/// Sample a target position. Deterministic for a given RNG state.
pub fn place_target<R: Rng + ?Sized>(radius: Miles, rng: &mut R) -> Point {
    let angle = rng.gen::<f64>() * TAU;
    let dist = rng.gen::<f64>() * radius.0.max(0.0);
    Point::new(dist * angle.cos(), dist * angle.sin())
}
