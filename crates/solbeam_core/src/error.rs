//! Error types for solar calculations.

use std::error::Error;
use std::fmt::{Display, Formatter};

use solbeam_time::TimeError;

/// Why the Sun has no rise/set crossing on a given day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PolarCondition {
    /// Sun stays above the horizon all day (midnight sun).
    PolarDay,
    /// Sun stays below the horizon all day.
    PolarNight,
}

impl PolarCondition {
    /// Classify an out-of-domain hour-angle cosine.
    ///
    /// Returns `None` when the cosine lies inside [-1, 1] (or is NaN).
    pub fn from_cos_hour_angle(cos_h: f64) -> Option<Self> {
        if cos_h > 1.0 {
            Some(Self::PolarNight)
        } else if cos_h < -1.0 {
            Some(Self::PolarDay)
        } else {
            None
        }
    }
}

impl Display for PolarCondition {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PolarDay => write!(f, "polar day (sun never sets)"),
            Self::PolarNight => write!(f, "polar night (sun never rises)"),
        }
    }
}

/// Errors from solar calculations.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolarError {
    /// Latitude/longitude missing, non-finite or out of range.
    InvalidLocation(&'static str),
    /// The sunrise hour angle is undefined on this day.
    NoRiseSet(PolarCondition),
    /// Error building the civil moment.
    Time(TimeError),
}

impl Display for SolarError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidLocation(msg) => write!(f, "invalid location: {msg}"),
            Self::NoRiseSet(cond) => write!(f, "no sunrise/sunset: {cond}"),
            Self::Time(e) => write!(f, "time error: {e}"),
        }
    }
}

impl Error for SolarError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            _ => None,
        }
    }
}

impl From<TimeError> for SolarError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}
