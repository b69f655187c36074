//! Solar noon, sunrise and sunset within a local civil day.
//!
//! Closed form, no iteration: the Sun's declination and equation of time
//! are taken once at the Julian Date of the day's local midnight (or any
//! other instant the caller chooses) and held fixed for the whole day.
//!
//! `cos H0 = cos(z) / (cos φ · cos δ) − tan φ · tan δ`
//!
//! where z is the horizon zenith (90.833° by default). Noon comes from the
//! longitude, timezone and equation of time; rise and set sit symmetrically
//! `4·H0` minutes either side of it.

use solbeam_time::MINUTES_PER_DAY;

use crate::angle::{degrees, radians};
use crate::error::{PolarCondition, SolarError};
use crate::events_types::{
    DayFraction, RiseSetConfig, RiseSetEvent, RiseSetResult, SolarEvents,
};
use crate::geo::GeoCoordinate;
use crate::position::SolarPosition;

/// Minutes of time per degree of hour angle (1440 / 360).
const MINUTES_PER_DEGREE: f64 = 4.0;

/// Cosine of the sunrise hour angle; may fall outside [-1, 1].
pub fn cos_sunrise_hour_angle(latitude_deg: f64, declination_deg: f64, config: &RiseSetConfig) -> f64 {
    let phi = radians(latitude_deg);
    let dec = radians(declination_deg);
    config.cos_zenith() / (phi.cos() * dec.cos()) - phi.tan() * dec.tan()
}

/// Hour angle of sunrise in degrees, in [0, 180].
///
/// Returns [`SolarError::NoRiseSet`] when the Sun never reaches the horizon
/// zenith that day: a cosine above 1 is polar night, below -1 polar day.
pub fn sunrise_hour_angle_deg(
    latitude_deg: f64,
    declination_deg: f64,
    config: &RiseSetConfig,
) -> Result<f64, SolarError> {
    let cos_h = cos_sunrise_hour_angle(latitude_deg, declination_deg, config);
    if let Some(condition) = PolarCondition::from_cos_hour_angle(cos_h) {
        log::debug!(
            "no horizon crossing at lat {latitude_deg}, decl {declination_deg:.4}: cos H0 = {cos_h:.6} ({condition})"
        );
        return Err(SolarError::NoRiseSet(condition));
    }
    if cos_h.is_nan() {
        return Err(SolarError::InvalidLocation("sunrise hour angle undefined at this latitude"));
    }
    Ok(degrees(cos_h.acos()))
}

/// Local solar noon as a fraction of the civil day.
///
/// `(720 − 4·λ − EoT − tz_offset) / 1440` with λ east-positive longitude and
/// `tz_offset_minutes` west of UTC.
pub fn solar_noon_fraction(
    equation_of_time_min: f64,
    longitude_deg: f64,
    tz_offset_minutes: i32,
) -> DayFraction {
    let minutes = 720.0 - MINUTES_PER_DEGREE * longitude_deg - equation_of_time_min
        + tz_offset_minutes as f64 * -1.0;
    DayFraction::new(minutes / MINUTES_PER_DAY)
}

/// Sunrise: noon minus `4·H0` minutes.
pub fn sunrise_fraction(solar_noon: DayFraction, hour_angle_deg: f64) -> DayFraction {
    DayFraction::new(solar_noon.fraction() - hour_angle_offset(hour_angle_deg))
}

/// Sunset: noon plus `4·H0` minutes.
pub fn sunset_fraction(solar_noon: DayFraction, hour_angle_deg: f64) -> DayFraction {
    DayFraction::new(solar_noon.fraction() + hour_angle_offset(hour_angle_deg))
}

fn hour_angle_offset(hour_angle_deg: f64) -> f64 {
    hour_angle_deg * MINUTES_PER_DEGREE / MINUTES_PER_DAY
}

/// Solar noon for the day whose Julian Date is `jd`.
pub fn solar_noon_at(jd: f64, location: &GeoCoordinate, tz_offset_minutes: i32) -> DayFraction {
    let pos = SolarPosition::at(jd);
    solar_noon_fraction(pos.equation_of_time_min, location.longitude_deg(), tz_offset_minutes)
}

/// Time of one horizon crossing, or why it does not happen.
pub fn rise_set_at(
    jd: f64,
    location: &GeoCoordinate,
    tz_offset_minutes: i32,
    event: RiseSetEvent,
    config: &RiseSetConfig,
) -> Result<DayFraction, SolarError> {
    let pos = SolarPosition::at(jd);
    let noon =
        solar_noon_fraction(pos.equation_of_time_min, location.longitude_deg(), tz_offset_minutes);
    let ha = sunrise_hour_angle_deg(location.latitude_deg(), pos.declination_deg, config)?;
    Ok(if event.is_rising() {
        sunrise_fraction(noon, ha)
    } else {
        sunset_fraction(noon, ha)
    })
}

/// Noon, sunrise, sunset and day length for one civil day.
///
/// Polar days and nights are reported through [`RiseSetResult::NeverSets`]
/// and [`RiseSetResult::NeverRises`]; noon is always defined.
pub fn solar_events(
    jd: f64,
    location: &GeoCoordinate,
    tz_offset_minutes: i32,
    config: &RiseSetConfig,
) -> SolarEvents {
    let pos = SolarPosition::at(jd);
    let noon =
        solar_noon_fraction(pos.equation_of_time_min, location.longitude_deg(), tz_offset_minutes);

    let (sunrise, sunset, hour_angle_deg, duration) =
        match sunrise_hour_angle_deg(location.latitude_deg(), pos.declination_deg, config) {
            Ok(ha) => (
                RiseSetResult::Event {
                    time: sunrise_fraction(noon, ha),
                    event: RiseSetEvent::Sunrise,
                },
                RiseSetResult::Event {
                    time: sunset_fraction(noon, ha),
                    event: RiseSetEvent::Sunset,
                },
                Some(ha),
                2.0 * MINUTES_PER_DEGREE * ha,
            ),
            Err(SolarError::NoRiseSet(PolarCondition::PolarDay)) => (
                RiseSetResult::NeverSets,
                RiseSetResult::NeverSets,
                None,
                MINUTES_PER_DAY,
            ),
            Err(_) => (RiseSetResult::NeverRises, RiseSetResult::NeverRises, None, 0.0),
        };

    SolarEvents {
        solar_noon: noon,
        sunrise,
        sunset,
        hour_angle_deg,
        sunlight_duration_min: duration,
        declination_deg: pos.declination_deg,
        equation_of_time_min: pos.equation_of_time_min,
    }
}
