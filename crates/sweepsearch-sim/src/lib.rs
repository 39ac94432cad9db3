//! Search-pattern detection simulator.
//!
//! Derives sweep geometry, lays a boustrophedon path over the search
//! disc, places a target, walks the path until the target is seen, and
//! cross-checks the result with a closed-form estimate and randomized
//! trials. Every stage is a pure function of its inputs plus an
//! explicitly passed RNG; `SearchMission` wires them together from a
//! single seed.

pub mod coverage;
pub mod detection;
pub mod estimate;
pub mod mission;
pub mod path;
pub mod target;
pub mod trials;

pub use sweepsearch_core as core;
pub use coverage::compute_coverage_params;
pub use detection::simulate_detection;
pub use mission::{trial_seed, MissionOutcome, SearchMission};
pub use path::generate_path;
pub use target::place_target;
pub use trials::{run_trials, TrialSet};

#[cfg(test)]
mod tests;
