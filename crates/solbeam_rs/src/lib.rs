//! Convenience API for the solbeam solar calculator.
//!
//! Accepts `chrono` dates directly, resolves the timezone offset argument
//! and returns event times as day fractions, seconds since local midnight
//! or zoned timestamps. The three forms come from one computed value, so
//! `fraction * 86400 == seconds` and `timestamp == midnight + seconds`.
//!
//! # Quick start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use solbeam_rs::*;
//!
//! let date = NaiveDate::from_ymd_opt(2020, 5, 9).unwrap();
//! // Jakarta, UTC+7 (offsets are minutes west of UTC)
//! let noon = solar_noon_timestamp(date, -6.2, 106.816666, TzOffset::Minutes(-420)).unwrap();
//! assert_eq!(noon.format("%H:%M").to_string(), "11:49");
//! ```

pub mod convenience;
pub mod error;

pub use convenience::{
    julian_date, solar_angles, solar_day, solar_day_with_config, solar_elevation_angle,
    solar_noon_fraction, solar_noon_seconds, solar_noon_timestamp, sunrise_fraction,
    sunrise_seconds, sunrise_timestamp, sunset_fraction, sunset_seconds, sunset_timestamp,
};
pub use error::SolbeamError;

// Re-export the value types so callers don't need the lower crates directly.
pub use solbeam_core::{
    DayFraction, PolarCondition, RiseSetConfig, RiseSetEvent, RiseSetResult, SolarAngles,
    SolarError, SolarEvents,
};
pub use solbeam_time::{TimeError, TzOffset, format_hms};
