//! Unit-typed lengths and speeds.
//!
//! Altitude and sweep width are measured in feet, the search area in
//! miles. Every conversion between the two goes through
//! [`FEET_PER_MILE`] so a mixed-unit expression cannot compile.

use std::fmt;
use std::ops::Mul;

use serde::{Deserialize, Serialize};

use crate::constants::FEET_PER_MILE;

/// Length in feet.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Feet(pub f64);

/// Length in statute miles.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Miles(pub f64);

/// Ground speed in miles per hour.
#[derive(Debug, Clone, Copy, Default, PartialEq, PartialOrd, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MilesPerHour(pub f64);

impl Feet {
    pub fn to_miles(self) -> Miles {
        Miles(self.0 / FEET_PER_MILE)
    }
}

impl Miles {
    pub fn to_feet(self) -> Feet {
        Feet(self.0 * FEET_PER_MILE)
    }
}

impl MilesPerHour {
    pub fn feet_per_hour(self) -> f64 {
        self.0 * FEET_PER_MILE
    }

    /// Hours needed to cover `distance` at this speed.
    pub fn hours_to_cover(self, distance: Miles) -> f64 {
        distance.to_feet().0 / self.feet_per_hour()
    }

    /// Hours needed to cover `distance` (in feet) at this speed.
    pub fn hours_to_cover_feet(self, distance: Feet) -> f64 {
        distance.0 / self.feet_per_hour()
    }
}

macro_rules! impl_length_ops {
    ($t:ident, $suffix:literal) => {
        impl Mul<f64> for $t {
            type Output = $t;
            fn mul(self, rhs: f64) -> $t {
                $t(self.0 * rhs)
            }
        }

        impl fmt::Display for $t {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                if let Some(precision) = f.precision() {
                    write!(f, "{:.*} {}", precision, self.0, $suffix)
                } else {
                    write!(f, "{} {}", self.0, $suffix)
                }
            }
        }
    };
}

impl_length_ops!(Feet, "ft");
impl_length_ops!(Miles, "mi");

impl fmt::Display for MilesPerHour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mph", self.0)
    }
}
