//! Error type for the convenience API.

use std::error::Error;
use std::fmt::{Display, Formatter};

use solbeam_core::{PolarCondition, SolarError};
use solbeam_time::TimeError;

/// Errors from the convenience functions.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum SolbeamError {
    /// Bad calendar fields, offset, or a local time that does not exist.
    Time(TimeError),
    /// Bad location or no sunrise/sunset on the requested day.
    Solar(SolarError),
}

impl SolbeamError {
    /// Polar condition when the error is a missing sunrise/sunset.
    pub fn polar_condition(&self) -> Option<PolarCondition> {
        match self {
            Self::Solar(SolarError::NoRiseSet(c)) => Some(*c),
            _ => None,
        }
    }
}

impl Display for SolbeamError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Time(e) => write!(f, "time error: {e}"),
            Self::Solar(e) => write!(f, "solar error: {e}"),
        }
    }
}

impl Error for SolbeamError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Time(e) => Some(e),
            Self::Solar(e) => Some(e),
        }
    }
}

impl From<TimeError> for SolbeamError {
    fn from(e: TimeError) -> Self {
        Self::Time(e)
    }
}

impl From<SolarError> for SolbeamError {
    fn from(e: SolarError) -> Self {
        match e {
            SolarError::Time(t) => Self::Time(t),
            other => Self::Solar(other),
        }
    }
}
