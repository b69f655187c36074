//! Types for solar noon, sunrise and sunset.
//!
//! Event times are positions within the local civil day, stored as a
//! fraction of 86 400 seconds and convertible to seconds since local
//! midnight without further rounding.

use solbeam_time::{MINUTES_PER_DAY, SECONDS_PER_DAY};

use crate::angle::radians;

/// Standard zenith of the Sun's center at rise/set: 90° plus 34′ refraction
/// and 16′ solar semidiameter, rounded to 90.833°.
pub const STANDARD_ZENITH_DEG: f64 = 90.833;

/// Time within a local civil day as a fraction of 24 hours.
///
/// Usually in [0, 1); values below 0 or at/above 1 mean the event falls on
/// the previous or next civil date.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct DayFraction(f64);

impl DayFraction {
    pub fn new(fraction: f64) -> Self {
        Self(fraction)
    }

    pub fn fraction(self) -> f64 {
        self.0
    }

    /// Seconds since local midnight: exactly `fraction * 86400`.
    pub fn seconds(self) -> f64 {
        self.0 * SECONDS_PER_DAY
    }

    pub fn minutes(self) -> f64 {
        self.0 * MINUTES_PER_DAY
    }

    /// Whether the value lands on the civil date it was computed for.
    pub fn is_within_day(self) -> bool {
        (0.0..1.0).contains(&self.0)
    }
}

/// Horizon crossing kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RiseSetEvent {
    Sunrise,
    Sunset,
}

impl RiseSetEvent {
    pub fn is_rising(self) -> bool {
        matches!(self, Self::Sunrise)
    }
}

/// Configurable parameters for rise/set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RiseSetConfig {
    /// Zenith angle of the Sun's center at the crossing, in degrees.
    /// Default: 90.833.
    pub horizon_zenith_deg: f64,
}

impl Default for RiseSetConfig {
    fn default() -> Self {
        Self {
            horizon_zenith_deg: STANDARD_ZENITH_DEG,
        }
    }
}

impl RiseSetConfig {
    pub fn cos_zenith(&self) -> f64 {
        radians(self.horizon_zenith_deg).cos()
    }
}

/// Outcome of one rise or set computation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RiseSetResult {
    /// Event occurs at the given time of the local day.
    Event {
        time: DayFraction,
        event: RiseSetEvent,
    },
    /// Sun never rises on this day (polar night).
    NeverRises,
    /// Sun never sets on this day (midnight sun).
    NeverSets,
}

impl RiseSetResult {
    pub fn time(&self) -> Option<DayFraction> {
        match self {
            Self::Event { time, .. } => Some(*time),
            Self::NeverRises | Self::NeverSets => None,
        }
    }
}

/// Noon, sunrise and sunset for one civil day and place.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarEvents {
    pub solar_noon: DayFraction,
    pub sunrise: RiseSetResult,
    pub sunset: RiseSetResult,
    /// Sunrise hour angle in degrees; `None` on polar days and nights.
    pub hour_angle_deg: Option<f64>,
    /// Minutes between sunrise and sunset (0 or 1440 when none occur).
    pub sunlight_duration_min: f64,
    pub declination_deg: f64,
    pub equation_of_time_min: f64,
}
