//! Error types for the sweepsearch crates.

use thiserror::Error;

/// Errors raised while validating or running a search.
///
/// A degenerate (empty or zero-length) path is not an error; detection
/// and playback treat it as a defined edge case.
#[derive(Debug, Error)]
pub enum SearchError {
    /// A numeric input is outside its valid range.
    #[error("invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        name: &'static str,
        value: f64,
        reason: &'static str,
    },

    /// Track spacing is so small the path would be unreasonably long.
    #[error("coverage needs {count} tracks, limit is {limit}")]
    TooManyTracks { count: f64, limit: usize },

    /// Configuration could not be interpreted.
    #[error("config error: {0}")]
    Config(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SearchError {
    /// Creates an invalid-parameter error.
    pub fn invalid(name: &'static str, value: f64, reason: &'static str) -> Self {
        Self::InvalidParameter {
            name,
            value,
            reason,
        }
    }

    /// True for the parameter-validation family of errors.
    pub fn is_invalid_parameter(&self) -> bool {
        matches!(
            self,
            SearchError::InvalidParameter { .. } | SearchError::TooManyTracks { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, SearchError>;

/// Require `value > 0` and finite.
pub fn ensure_positive(name: &'static str, value: f64) -> Result<()> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SearchError::invalid(name, value, "must be positive and finite"))
    }
}
