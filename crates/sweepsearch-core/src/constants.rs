//! Conversion factors and default search parameters.

// --- Units ---

/// Feet in one statute mile.
pub const FEET_PER_MILE: f64 = 5280.0;

// --- Sensor ---

/// Default sensor field of view (degrees).
pub const DEFAULT_FOV_DEGREES: f64 = 120.0;

/// Default search altitude above ground level (feet).
pub const DEFAULT_ALTITUDE_FT: f64 = 470.0;

/// Default maximum detection distance under ideal conditions (feet).
pub const DEFAULT_MAX_DETECTION_FT: f64 = 5000.0;

/// Default factor of safety applied to the detection distance.
pub const DEFAULT_FACTOR_OF_SAFETY: f64 = 1.5;

/// Default fog factor (1.0 = clear air).
pub const DEFAULT_FOG_FACTOR: f64 = 0.5;

// --- Vehicle ---

/// Default ground speed of the search vehicle (mph).
pub const DEFAULT_GROUND_SPEED_MPH: f64 = 55.0;

// --- Search area ---

/// Default search-area radius (miles).
pub const DEFAULT_RADIUS_MILES: f64 = 1.0;

/// Default fraction of each sweep that overlaps the adjacent track.
pub const DEFAULT_OVERLAP_FRACTION: f64 = 0.5;

/// Worst-case search time that still counts as a successful plan (hours).
pub const DEFAULT_TIME_LIMIT_HOURS: f64 = 0.5;

/// Upper bound on generated tracks. Spacings small enough to exceed
/// this are rejected instead of allocating the path.
pub const MAX_TRACK_COUNT: usize = 1_000_000;

// --- Monte Carlo ---

/// Default number of randomized trials.
pub const DEFAULT_TRIAL_COUNT: usize = 100;

/// Decimal places kept for each trial time.
pub const TRIAL_TIME_DECIMALS: i32 = 2;

/// Default number of histogram bins for the trial distribution.
pub const DEFAULT_HISTOGRAM_BINS: usize = 30;

// --- Playback ---

/// Default number of frames in a playback timeline.
pub const DEFAULT_PLAYBACK_FRAMES: u32 = 200;

// --- Seeding ---

/// Default RNG seed.
pub const DEFAULT_SEED: u64 = 42;

/// Multiplier used to derive the trial-sampler seed from the mission
/// seed, so the two random streams never share state.
pub const TRIAL_SEED_MIX: u64 = 0x9e37_79b9_7f4a_7c15;
