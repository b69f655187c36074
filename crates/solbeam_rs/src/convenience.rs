use chrono::{DateTime, FixedOffset, NaiveDate, NaiveDateTime, NaiveTime};
use solbeam_core::{
    DayFraction, GeoCoordinate, RiseSetConfig, RiseSetEvent, SolarAngles, SolarEvents,
    rise_set_at, solar_events, solar_noon_at,
};
use solbeam_time::{CivilMoment, TzOffset};

use crate::error::SolbeamError;

/// Local midnight of `date` plus the validated location.
fn day_context(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
) -> Result<(CivilMoment, GeoCoordinate), SolbeamError> {
    let location = GeoCoordinate::new(latitude_deg, longitude_deg)?;
    let moment = CivilMoment::resolve(date.and_time(NaiveTime::MIN), tz)?;
    log::trace!(
        "{date} at ({latitude_deg}, {longitude_deg}): offset {} min west of UTC",
        moment.tz_offset_minutes()
    );
    Ok((moment, location))
}

fn rise_or_set(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
    event: RiseSetEvent,
) -> Result<(CivilMoment, DayFraction), SolbeamError> {
    let (moment, location) = day_context(date, latitude_deg, longitude_deg, tz)?;
    let time = rise_set_at(
        moment.to_julian_date(),
        &location,
        moment.tz_offset_minutes(),
        event,
        &RiseSetConfig::default(),
    )?;
    Ok((moment, time))
}

fn noon(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
) -> Result<(CivilMoment, DayFraction), SolbeamError> {
    let (moment, location) = day_context(date, latitude_deg, longitude_deg, tz)?;
    let time = solar_noon_at(moment.to_julian_date(), &location, moment.tz_offset_minutes());
    Ok((moment, time))
}

/// Julian Date of a local reading.
///
/// Seconds in `local` are ignored; the day fraction has minute resolution.
pub fn julian_date(local: NaiveDateTime, tz: TzOffset) -> Result<f64, SolbeamError> {
    Ok(CivilMoment::resolve(local, tz)?.to_julian_date())
}

/// Solar noon as a fraction of the local day.
pub fn solar_noon_fraction(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
) -> Result<f64, SolbeamError> {
    Ok(noon(date, latitude_deg, longitude_deg, tz)?.1.fraction())
}

/// Solar noon in seconds since local midnight.
pub fn solar_noon_seconds(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
) -> Result<f64, SolbeamError> {
    Ok(noon(date, latitude_deg, longitude_deg, tz)?.1.seconds())
}

/// Solar noon as a zoned timestamp.
pub fn solar_noon_timestamp(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
) -> Result<DateTime<FixedOffset>, SolbeamError> {
    let (moment, time) = noon(date, latitude_deg, longitude_deg, tz)?;
    Ok(moment.timestamp_at(time.seconds()))
}

/// Sunrise as a fraction of the local day.
///
/// Fails with [`SolbeamError::Solar`] wrapping `NoRiseSet` on polar days
/// and nights.
pub fn sunrise_fraction(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
) -> Result<f64, SolbeamError> {
    let (_, time) = rise_or_set(date, latitude_deg, longitude_deg, tz, RiseSetEvent::Sunrise)?;
    Ok(time.fraction())
}

pub fn sunrise_seconds(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
) -> Result<f64, SolbeamError> {
    let (_, time) = rise_or_set(date, latitude_deg, longitude_deg, tz, RiseSetEvent::Sunrise)?;
    Ok(time.seconds())
}

pub fn sunrise_timestamp(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
) -> Result<DateTime<FixedOffset>, SolbeamError> {
    let (moment, time) =
        rise_or_set(date, latitude_deg, longitude_deg, tz, RiseSetEvent::Sunrise)?;
    Ok(moment.timestamp_at(time.seconds()))
}

/// Sunset as a fraction of the local day. Polar days and nights fail as
/// for [`sunrise_fraction`].
pub fn sunset_fraction(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
) -> Result<f64, SolbeamError> {
    let (_, time) = rise_or_set(date, latitude_deg, longitude_deg, tz, RiseSetEvent::Sunset)?;
    Ok(time.fraction())
}

pub fn sunset_seconds(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
) -> Result<f64, SolbeamError> {
    let (_, time) = rise_or_set(date, latitude_deg, longitude_deg, tz, RiseSetEvent::Sunset)?;
    Ok(time.seconds())
}

pub fn sunset_timestamp(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
) -> Result<DateTime<FixedOffset>, SolbeamError> {
    let (moment, time) = rise_or_set(date, latitude_deg, longitude_deg, tz, RiseSetEvent::Sunset)?;
    Ok(moment.timestamp_at(time.seconds()))
}

/// Noon, sunrise, sunset and day length in one pass.
///
/// Unlike the single-event functions, polar days and nights are not errors
/// here; they show up as `NeverSets` / `NeverRises` in the result.
pub fn solar_day(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
) -> Result<SolarEvents, SolbeamError> {
    solar_day_with_config(date, latitude_deg, longitude_deg, tz, &RiseSetConfig::default())
}

/// [`solar_day`] with a custom horizon zenith.
pub fn solar_day_with_config(
    date: NaiveDate,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
    config: &RiseSetConfig,
) -> Result<SolarEvents, SolbeamError> {
    let (moment, location) = day_context(date, latitude_deg, longitude_deg, tz)?;
    Ok(solar_events(
        moment.to_julian_date(),
        &location,
        moment.tz_offset_minutes(),
        config,
    ))
}

/// Sun angles for a local reading.
pub fn solar_angles(
    local: NaiveDateTime,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
) -> Result<SolarAngles, SolbeamError> {
    let location = GeoCoordinate::new(latitude_deg, longitude_deg)?;
    let moment = CivilMoment::resolve(local, tz)?;
    Ok(solbeam_core::solar_angles(
        moment.to_julian_date(),
        moment.day_fraction(),
        &location,
        moment.tz_offset_minutes(),
    ))
}

/// Refraction-corrected solar elevation in degrees for a local reading.
pub fn solar_elevation_angle(
    local: NaiveDateTime,
    latitude_deg: f64,
    longitude_deg: f64,
    tz: TzOffset,
) -> Result<f64, SolbeamError> {
    Ok(solar_angles(local, latitude_deg, longitude_deg, tz)?.corrected_elevation_deg)
}
