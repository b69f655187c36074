//! Julian Date from a local civil date.
//!
//! Counts calendar days from 1900-01-01 and anchors them to the J1900
//! approximation used by the NOAA solar calculation sheets. The day count
//! is proleptic Gregorian with no Julian/Gregorian cutover handling, so
//! results are trustworthy for 1901–2099 only. Outside that window the value
//! is still returned; accuracy just degrades.

use chrono::NaiveDate;

use crate::civil::CivilMoment;

/// Approximate Julian Date of the 1900-01-01 reference day.
pub const J1900_APPROX_JD: f64 = 2_415_018.5;

/// Julian Date of J2000.0 (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Minutes per civil day.
pub const MINUTES_PER_DAY: f64 = 1_440.0;

/// Seconds per civil day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Integer correction applied on top of the calendar-day count.
///
/// One day for counting the reference day inclusively and one for the
/// spreadsheet serial-date convention the J1900 constant was fitted against.
const DAY_COUNT_CORRECTION: f64 = 2.0;

/// Earliest year of the documented validity window.
pub const VALID_YEAR_MIN: i32 = 1901;

/// Latest year of the documented validity window.
pub const VALID_YEAR_MAX: i32 = 2099;

/// Fraction of the civil day elapsed at `hour:minute`.
///
/// Minute resolution: `(minute / 60 + hour) / 24`. 06:00 gives 0.25.
pub fn day_fraction(hour: u32, minute: u32) -> f64 {
    (minute as f64 / 60.0 + hour as f64) / 24.0
}

/// Calendar days between 1900-01-01 and `date` (negative before it).
pub fn days_since_1900(date: NaiveDate) -> i64 {
    let reference = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap_or(NaiveDate::MIN);
    date.signed_duration_since(reference).num_days()
}

/// Julian Date for a local civil moment.
///
/// `JD = days_since_1900 + 2415018.5 + 2 + day_fraction - (-tz_offset) / 1440`
///
/// `tz_offset_minutes` is minutes west of UTC (UTC+7 is -420), so the last
/// term shifts the local reading onto the UTC-based Julian scale.
pub fn julian_date(moment: &CivilMoment) -> f64 {
    if !moment.in_validity_window() {
        log::debug!(
            "{} lies outside {VALID_YEAR_MIN}-{VALID_YEAR_MAX}; Julian Date accuracy degrades",
            moment.local()
        );
    }
    let tz_subtractor = -(moment.tz_offset_minutes() as f64) / MINUTES_PER_DAY;
    days_since_1900(moment.date()) as f64
        + J1900_APPROX_JD
        + DAY_COUNT_CORRECTION
        + moment.day_fraction()
        - tz_subtractor
}

/// Julian centuries elapsed since J2000.0.
pub fn julian_century(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
