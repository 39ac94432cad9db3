//! Playback driver for sweepsearch.
//!
//! Maps a normalized progress signal onto the search path and reports
//! vehicle position, elapsed time, and whether the target has been
//! found. No rendering dependency: a frame clock polls it once per tick.

pub mod driver;
pub mod fsm;

pub use driver::{frame_progress, timeline, PlaybackDriver};
pub use fsm::{playback_step, PlaybackContext, PlaybackUpdate};

pub use sweepsearch_core as core;
