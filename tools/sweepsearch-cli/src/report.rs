//! Console rendering of a mission report.

use sweepsearch_core::enums::WorstCaseVerdict;
use sweepsearch_core::state::{MissionReport, PlaybackState};

/// Width of the longest histogram bar, in characters.
const HISTOGRAM_BAR_WIDTH: usize = 40;

/// Inputs and the closed-form worst-case estimate.
pub fn print_summary(report: &MissionReport) {
    let config = &report.config;
    let estimate = &report.estimate;

    println!("Max Detection Distance: {:.0}", config.sensor.max_detection_distance);
    println!("Factor of Safety: {}", config.sensor.factor_of_safety);
    println!("Fog Factor: {}", config.sensor.fog_factor);
    println!(
        "Expected Detection Distance Considering Conditions: {:.2}",
        estimate.expected_detection_distance
    );
    println!(
        "Field of View (FOV): {} degrees or {:.2} radians",
        config.fov_degrees,
        config.fov_radians()
    );
    println!("Search Height AGL: {}", config.altitude);
    println!("Search Velocity: {}", config.ground_speed);
    println!("Search Radius: {}", config.radius);
    println!("Hiker Search Area: {:.2} mile^2", estimate.search_area_sq_miles);
    println!("Overlap Factor: {}", config.overlap_fraction);
    println!("Effective Detection Sweep Width: {:.2}", estimate.sweep_width);
    println!("Search Flight Distance: {:.2}", estimate.flight_distance);
    println!("Flight Time: {:.2} hrs", estimate.flight_time_hours);

    match estimate.verdict {
        WorstCaseVerdict::FoundInTime => println!("Hiker Found, even in Worst Case!"),
        WorstCaseVerdict::NotFoundInTime => println!("Hiker not Found. :("),
    }
}

/// Trial statistics and a text histogram.
pub fn print_trials(report: &MissionReport) {
    let trials = &report.trials;

    println!("----------Randomized Hiker Search and Rescue Trials----------");
    println!("After {} trials:", trials.samples.len());
    println!("Average Search Time: {:.2} hrs", trials.mean_hours);
    println!("Median Search Time: {:.2} hrs", trials.median_hours);
    println!("Std. Deviation: {:.2} hrs", trials.std_dev_hours);

    let peak = trials.histogram.iter().map(|b| b.count).max().unwrap_or(0);
    if peak == 0 {
        return;
    }
    println!();
    for bin in &trials.histogram {
        let bar = bin.count * HISTOGRAM_BAR_WIDTH / peak;
        println!(
            "{:>5.2}-{:<5.2} | {:<width$} {}",
            bin.lower,
            bin.upper,
            "#".repeat(bar),
            bin.count,
            width = HISTOGRAM_BAR_WIDTH
        );
    }
}

/// Path-following simulation result.
pub fn print_simulation(report: &MissionReport, playback: &[PlaybackState]) {
    let coverage = &report.coverage;
    let detection = &report.detection;

    println!();
    println!("----------Drone Flight Simulation----------");
    println!(
        "Sweep width: {:.4} ({:.2})",
        coverage.sweep_width_area, coverage.sweep_width
    );
    println!(
        "Effective spacing (with {}% overlap): {:.4}",
        coverage.overlap_fraction * 100.0,
        coverage.track_spacing
    );
    println!("Number of tracks: {}", coverage.track_count);
    println!(
        "Hiker located at: ({:.2}, {:.2}) miles",
        report.target.x, report.target.y
    );
    if !detection.detected() {
        println!("Hiker never inside sweep; counted as found at end of path");
    }
    println!("Time to find hiker: {:.2} hours", detection.time_to_find_hours);

    if let Some(last) = playback.last() {
        println!(
            "Playback: {} frames, stopped at {:.0}% of path ({:.2} hrs): {}",
            playback.len(),
            last.progress * 100.0,
            last.elapsed_hours,
            last.phase.label()
        );
    }
}
