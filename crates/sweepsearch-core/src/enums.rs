//! Enumeration types used throughout the simulator.

use serde::{Deserialize, Serialize};

/// Phase of the playback state machine.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlaybackPhase {
    /// Vehicle still flying the path.
    #[default]
    Searching,
    /// Detection point reached. Terminal.
    Found,
}

impl PlaybackPhase {
    pub fn is_terminal(self) -> bool {
        matches!(self, PlaybackPhase::Found)
    }

    /// Short status label for display.
    pub fn label(self) -> &'static str {
        match self {
            PlaybackPhase::Searching => "Searching...",
            PlaybackPhase::Found => "HIKER FOUND!",
        }
    }
}

/// Whether the worst-case plan fits inside the allowed search time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorstCaseVerdict {
    /// Target found even if it sits at the very end of the path.
    FoundInTime,
    /// Worst-case flight exceeds the time limit.
    NotFoundInTime,
}
