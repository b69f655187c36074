//! Civil-time plumbing for the solbeam solar calculator.
//!
//! This crate provides:
//! - `CivilMoment`: a local date/time with its timezone offset
//! - `TzOffset`: explicit offsets or the host zone's offset for a date
//! - Julian Date and Julian century from a local civil moment
//! - Day-offset helpers: local midnight timestamps and `HH:MM:SS` rendering

pub mod civil;
pub mod error;
pub mod julian;

pub use civil::{
    CivilMoment, MAX_OFFSET_MINUTES, TzOffset, format_hms, fraction_to_seconds, seconds_to_delta,
};
pub use error::TimeError;
pub use julian::{
    DAYS_PER_JULIAN_CENTURY, J1900_APPROX_JD, J2000_JD, MINUTES_PER_DAY, SECONDS_PER_DAY,
    VALID_YEAR_MAX, VALID_YEAR_MIN, day_fraction, days_since_1900, julian_century, julian_date,
};
