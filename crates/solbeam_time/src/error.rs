//! Error types for civil-time handling and Julian Date conversion.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Errors from building a civil moment or resolving a timezone offset.
#[derive(Debug, Clone, PartialEq)]
#[non_exhaustive]
pub enum TimeError {
    /// Year/month/day or hour/minute/second do not form a real calendar instant.
    InvalidCalendarDate(&'static str),
    /// Timezone offset magnitude exceeds 14 hours.
    InvalidOffset { minutes: i32 },
    /// The host zone skips this local time (DST gap).
    NonexistentLocalTime,
}

impl Display for TimeError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidCalendarDate(msg) => write!(f, "invalid calendar date: {msg}"),
            Self::InvalidOffset { minutes } => {
                write!(f, "timezone offset {minutes} min outside +/-840 min")
            }
            Self::NonexistentLocalTime => {
                write!(f, "local time does not exist in the host timezone")
            }
        }
    }
}

impl Error for TimeError {}
