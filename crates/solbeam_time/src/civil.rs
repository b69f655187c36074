//! Local civil date/time paired with a timezone offset.
//!
//! Offsets follow the "minutes west of UTC" convention: add the offset to the
//! local reading to get UTC. UTC+7 is `-420`, UTC-5 is `300`.

use chrono::{
    DateTime, Datelike, FixedOffset, Local, NaiveDate, NaiveDateTime, NaiveTime, Offset, TimeDelta,
    TimeZone, Timelike,
};

use crate::error::TimeError;
use crate::julian::{self, SECONDS_PER_DAY, VALID_YEAR_MAX, VALID_YEAR_MIN};

/// Largest accepted offset magnitude, in minutes (UTC+14 / UTC-14).
pub const MAX_OFFSET_MINUTES: i32 = 14 * 60;

/// Timezone offset argument: explicit minutes, or the host zone's offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TzOffset {
    /// Minutes west of UTC.
    Minutes(i32),
    /// Whatever offset the host's local zone applies on the given date.
    #[default]
    HostLocal,
}

impl TzOffset {
    /// Offset for a local reading, in minutes west of UTC.
    ///
    /// `HostLocal` consults `chrono::Local` for that particular local
    /// date/time, so DST is honoured. Ambiguous readings (the repeated hour
    /// when clocks fall back) take the earlier instant.
    pub fn resolve(self, local: NaiveDateTime) -> Result<i32, TimeError> {
        let minutes = match self {
            Self::Minutes(m) => m,
            Self::HostLocal => {
                let dt = Local
                    .from_local_datetime(&local)
                    .earliest()
                    .ok_or(TimeError::NonexistentLocalTime)?;
                let resolved = minutes_west(dt.offset().fix());
                log::trace!("host offset for {local}: {resolved} min west of UTC");
                resolved
            }
        };
        check_offset(minutes)?;
        Ok(minutes)
    }
}

impl From<i32> for TzOffset {
    fn from(minutes: i32) -> Self {
        Self::Minutes(minutes)
    }
}

/// A local calendar date and time of day with its timezone offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CivilMoment {
    local: NaiveDateTime,
    offset: FixedOffset,
}

impl CivilMoment {
    /// Build from calendar fields.
    pub fn new(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
        tz_offset_minutes: i32,
    ) -> Result<Self, TimeError> {
        let date = NaiveDate::from_ymd_opt(year, month, day)
            .ok_or(TimeError::InvalidCalendarDate("year/month/day out of range"))?;
        let time = NaiveTime::from_hms_opt(hour, minute, second)
            .ok_or(TimeError::InvalidCalendarDate("hour/minute/second out of range"))?;
        Self::from_naive(date.and_time(time), tz_offset_minutes)
    }

    /// Local midnight of `date`.
    pub fn from_date(date: NaiveDate, tz_offset_minutes: i32) -> Result<Self, TimeError> {
        Self::from_naive(date.and_time(NaiveTime::MIN), tz_offset_minutes)
    }

    pub fn from_naive(local: NaiveDateTime, tz_offset_minutes: i32) -> Result<Self, TimeError> {
        check_offset(tz_offset_minutes)?;
        let offset = FixedOffset::west_opt(tz_offset_minutes * 60).ok_or(TimeError::InvalidOffset {
            minutes: tz_offset_minutes,
        })?;
        Ok(Self { local, offset })
    }

    /// Build from a local reading, resolving the offset argument first.
    pub fn resolve(local: NaiveDateTime, tz: TzOffset) -> Result<Self, TimeError> {
        let minutes = tz.resolve(local)?;
        Self::from_naive(local, minutes)
    }

    /// Take the local reading and offset of a zoned timestamp.
    pub fn from_datetime<Tz: TimeZone>(dt: &DateTime<Tz>) -> Result<Self, TimeError> {
        Self::from_naive(dt.naive_local(), minutes_west(dt.offset().fix()))
    }

    pub fn local(&self) -> NaiveDateTime {
        self.local
    }

    pub fn date(&self) -> NaiveDate {
        self.local.date()
    }

    /// Minutes west of UTC.
    pub fn tz_offset_minutes(&self) -> i32 {
        minutes_west(self.offset)
    }

    /// The same moment moved to local midnight.
    pub fn at_midnight(&self) -> Self {
        Self {
            local: self.local.date().and_time(NaiveTime::MIN),
            offset: self.offset,
        }
    }

    /// Fraction of the local day elapsed, at minute resolution.
    pub fn day_fraction(&self) -> f64 {
        julian::day_fraction(self.local.hour(), self.local.minute())
    }

    /// Julian Date of this moment. See [`julian::julian_date`].
    pub fn to_julian_date(&self) -> f64 {
        julian::julian_date(self)
    }

    /// Whether the year falls inside the window the Julian Date formula is fitted for.
    pub fn in_validity_window(&self) -> bool {
        (VALID_YEAR_MIN..=VALID_YEAR_MAX).contains(&self.local.year())
    }

    /// The offset as a chrono zone.
    pub fn fixed_offset(&self) -> FixedOffset {
        self.offset
    }

    /// Local midnight of this moment's date as a zoned timestamp.
    pub fn start_of_day(&self) -> DateTime<FixedOffset> {
        let midnight = self.local.date().and_time(NaiveTime::MIN);
        let utc = midnight - TimeDelta::seconds(i64::from(self.offset.local_minus_utc()));
        DateTime::from_naive_utc_and_offset(utc, self.offset)
    }

    /// Local midnight plus `seconds`, at nanosecond resolution.
    ///
    /// Offsets below zero or beyond one day land on the neighbouring dates.
    pub fn timestamp_at(&self, seconds: f64) -> DateTime<FixedOffset> {
        self.start_of_day() + seconds_to_delta(seconds)
    }
}

/// Convert a day offset in seconds to a chrono duration, rounded to the nanosecond.
pub fn seconds_to_delta(seconds: f64) -> TimeDelta {
    TimeDelta::nanoseconds((seconds * 1e9).round() as i64)
}

/// Render a day offset as `HH:MM:SS`, rounded to the nearest second.
///
/// Hours are not wrapped, so offsets past midnight read `24:..` and above;
/// negative offsets get a leading `-`.
pub fn format_hms(seconds: f64) -> String {
    let total = seconds.round() as i64;
    let sign = if total < 0 { "-" } else { "" };
    let total = total.abs();
    format!(
        "{sign}{:02}:{:02}:{:02}",
        total / 3600,
        (total % 3600) / 60,
        total % 60
    )
}

/// Fraction of a day to seconds.
pub fn fraction_to_seconds(fraction: f64) -> f64 {
    fraction * SECONDS_PER_DAY
}

fn minutes_west(offset: FixedOffset) -> i32 {
    -offset.local_minus_utc() / 60
}

fn check_offset(minutes: i32) -> Result<(), TimeError> {
    if minutes.abs() > MAX_OFFSET_MINUTES {
        return Err(TimeError::InvalidOffset { minutes });
    }
    Ok(())
}
