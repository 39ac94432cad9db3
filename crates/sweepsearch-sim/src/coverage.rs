//! Sweep width, track spacing, and track count.

use sweepsearch_core::config::SearchConfig;
use sweepsearch_core::constants::MAX_TRACK_COUNT;
use sweepsearch_core::error::{ensure_positive, Result, SearchError};
use sweepsearch_core::types::CoverageParams;
use sweepsearch_core::units::{Feet, Miles};

/// Ground width seen by a sensor with the given field of view.
///
/// `sweep = 2 * altitude * tan(fov / 2)`
pub fn sweep_width(fov_radians: f64, altitude: Feet) -> Feet {
    Feet(2.0 * altitude.0 * (fov_radians / 2.0).tan())
}

/// Derive coverage geometry for a circular area.
///
/// Fails with `InvalidParameter` for a field of view outside (0°, 180°),
/// a non-positive altitude or radius, or an overlap outside [0, 1).
/// Fails with `TooManyTracks` when the spacing is too small to be flown.
pub fn compute_coverage_params(
    fov_degrees: f64,
    altitude: Feet,
    overlap_fraction: f64,
    radius: Miles,
) -> Result<CoverageParams> {
    if !(fov_degrees > 0.0 && fov_degrees < 180.0) {
        return Err(SearchError::invalid(
            "fov_degrees",
            fov_degrees,
            "must be in (0, 180)",
        ));
    }
    ensure_positive("altitude", altitude.0)?;
    ensure_positive("radius", radius.0)?;
    if !(0.0..1.0).contains(&overlap_fraction) {
        return Err(SearchError::invalid(
            "overlap_fraction",
            overlap_fraction,
            "must be in [0, 1)",
        ));
    }

    let sweep = sweep_width(fov_degrees.to_radians(), altitude);
    let sweep_area = sweep.to_miles();
    let spacing = sweep_area * (1.0 - overlap_fraction);
    ensure_positive("track_spacing", spacing.0)?;

    let tracks = (2.0 * radius.0 / spacing.0).ceil();
    if tracks > MAX_TRACK_COUNT as f64 {
        return Err(SearchError::TooManyTracks {
            count: tracks,
            limit: MAX_TRACK_COUNT,
        });
    }

    Ok(CoverageParams {
        radius,
        sweep_width: sweep,
        sweep_width_area: sweep_area,
        overlap_fraction,
        track_spacing: spacing,
        // radius > 0 and spacing is finite, so at least one track
        track_count: (tracks as usize).max(1),
    })
}

/// Coverage geometry for a mission config.
pub fn from_config(config: &SearchConfig) -> Result<CoverageParams> {
    compute_coverage_params(
        config.fov_degrees,
        config.altitude,
        config.overlap_fraction,
        config.radius,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_sweep_width_reference_sensor() {
        // 120° at 470 ft: 2 * 470 * tan(60°)
        let sweep = sweep_width(120f64.to_radians(), Feet(470.0));
        assert_relative_eq!(sweep.0, 1628.1277, epsilon = 1e-3);
    }

    #[test]
    fn test_reference_coverage() {
        let params = compute_coverage_params(120.0, Feet(470.0), 0.5, Miles(1.0)).unwrap();
        assert_relative_eq!(params.sweep_width_area.0, 0.30836, epsilon = 1e-5);
        assert_relative_eq!(params.track_spacing.0, 0.15418, epsilon = 1e-5);
        assert_eq!(params.track_count, 13);
    }

    #[test]
    fn test_overlap_reduces_spacing() {
        let none = compute_coverage_params(90.0, Feet(500.0), 0.0, Miles(1.0)).unwrap();
        let half = compute_coverage_params(90.0, Feet(500.0), 0.5, Miles(1.0)).unwrap();
        assert_relative_eq!(half.track_spacing.0 * 2.0, none.track_spacing.0);
        assert!(half.track_count >= none.track_count);
    }

    #[test]
    fn test_wide_sweep_single_track() {
        // Sweep far wider than the area still needs one track.
        let params = compute_coverage_params(170.0, Feet(50_000.0), 0.0, Miles(0.01)).unwrap();
        assert_eq!(params.track_count, 1);
    }

    #[test]
    fn test_rejects_invalid_inputs() {
        assert!(compute_coverage_params(120.0, Feet(470.0), 1.0, Miles(1.0)).is_err());
        assert!(compute_coverage_params(120.0, Feet(470.0), -0.1, Miles(1.0)).is_err());
        assert!(compute_coverage_params(120.0, Feet(0.0), 0.5, Miles(1.0)).is_err());
        assert!(compute_coverage_params(120.0, Feet(470.0), 0.5, Miles(0.0)).is_err());
        assert!(compute_coverage_params(0.0, Feet(470.0), 0.5, Miles(1.0)).is_err());
        assert!(compute_coverage_params(180.0, Feet(470.0), 0.5, Miles(1.0)).is_err());
    }

    #[test]
    fn test_rejects_absurd_track_count() {
        let err = compute_coverage_params(1e-6, Feet(1.0), 0.5, Miles(1000.0)).unwrap_err();
        assert!(matches!(err, SearchError::TooManyTracks { .. }));
    }
}
