//! Closed-form worst-case estimate.
//!
//! Assumes the whole disc is swept once at the overlap-adjusted width,
//! so the flight distance is `area / effective_width`. This is the
//! "target at the very end of the path" case and feeds the Monte Carlo
//! sampler its upper bound.

use std::f64::consts::PI;

use sweepsearch_core::config::SearchConfig;
use sweepsearch_core::constants::FEET_PER_MILE;
use sweepsearch_core::enums::WorstCaseVerdict;
use sweepsearch_core::error::Result;
use sweepsearch_core::state::WorstCaseEstimate;
use sweepsearch_core::units::Feet;

use crate::coverage::sweep_width;

/// Compute the worst-case estimate for a config. Validates first.
pub fn worst_case_estimate(config: &SearchConfig) -> Result<WorstCaseEstimate> {
    config.validate()?;

    let radius = config.radius.0;
    let search_area_sq_miles = PI * radius * radius;
    let sweep = sweep_width(config.fov_radians(), config.altitude);
    let effective_width = sweep.0 * (1.0 - config.overlap_fraction);
    let flight_distance = Feet(search_area_sq_miles * FEET_PER_MILE * FEET_PER_MILE / effective_width);
    let flight_time_hours = config.ground_speed.hours_to_cover_feet(flight_distance);

    let verdict = if flight_time_hours <= config.time_limit_hours {
        WorstCaseVerdict::FoundInTime
    } else {
        WorstCaseVerdict::NotFoundInTime
    };

    Ok(WorstCaseEstimate {
        expected_detection_distance: config.sensor.expected_detection_distance(),
        search_area_sq_miles,
        sweep_width: sweep,
        flight_distance,
        flight_time_hours,
        time_limit_hours: config.time_limit_hours,
        verdict,
    })
}
