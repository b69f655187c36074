//! Solar elevation and azimuth at a local time of day.
//!
//! True solar time places the Sun relative to the local meridian; the hour
//! angle follows from it, and the zenith angle from the spherical triangle
//! pole–zenith–Sun. The final elevation includes the refraction correction
//! from [`crate::refraction`].

use solbeam_time::MINUTES_PER_DAY;

use crate::angle::{degrees, radians};
use crate::geo::GeoCoordinate;
use crate::position::SolarPosition;
use crate::refraction::refraction_correction_deg;

/// Below this the azimuth denominator `cos φ · sin z` is treated as zero
/// (observer at a pole or Sun at the zenith).
const AZIMUTH_DENOM_EPS: f64 = 0.001;

/// Sun angles as seen by one observer at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarAngles {
    /// True solar time in minutes; sign follows the remainder, so the value
    /// lies in (-1440, 1440).
    pub true_solar_time_min: f64,
    /// Hour angle in degrees; negative before local solar noon.
    pub hour_angle_deg: f64,
    pub zenith_deg: f64,
    /// Geometric elevation, `90 − zenith`.
    pub elevation_deg: f64,
    pub refraction_deg: f64,
    /// Apparent elevation: geometric plus refraction.
    pub corrected_elevation_deg: f64,
    /// Degrees clockwise from north, in [0, 360).
    pub azimuth_deg: f64,
    pub declination_deg: f64,
    pub equation_of_time_min: f64,
}

/// True solar time in minutes for a local day fraction.
pub fn true_solar_time_min(
    day_fraction: f64,
    equation_of_time_min: f64,
    longitude_deg: f64,
    tz_offset_minutes: i32,
) -> f64 {
    let tz_hours = -(tz_offset_minutes as f64) / 60.0;
    (day_fraction * MINUTES_PER_DAY + equation_of_time_min + 4.0 * longitude_deg - 60.0 * tz_hours)
        % MINUTES_PER_DAY
}

/// Hour angle in degrees from true solar time.
pub fn hour_angle_deg(true_solar_time_min: f64) -> f64 {
    let quarter = true_solar_time_min / 4.0;
    if quarter < 0.0 {
        quarter + 180.0
    } else {
        quarter - 180.0
    }
}

fn zenith_deg(latitude_deg: f64, declination_deg: f64, hour_angle_deg: f64) -> f64 {
    let phi = radians(latitude_deg);
    let dec = radians(declination_deg);
    let cos_z = phi.sin() * dec.sin() + phi.cos() * dec.cos() * radians(hour_angle_deg).cos();
    degrees(cos_z.clamp(-1.0, 1.0).acos())
}

fn azimuth_deg(latitude_deg: f64, declination_deg: f64, zenith_deg: f64, hour_angle_deg: f64) -> f64 {
    let phi = radians(latitude_deg);
    let z = radians(zenith_deg);
    let denom = phi.cos() * z.sin();
    if denom.abs() <= AZIMUTH_DENOM_EPS {
        return if latitude_deg > 0.0 { 180.0 } else { 0.0 };
    }
    let cos_az = ((phi.sin() * z.cos() - radians(declination_deg).sin()) / denom).clamp(-1.0, 1.0);
    let az = degrees(cos_az.acos());
    if hour_angle_deg > 0.0 {
        (az + 180.0) % 360.0
    } else {
        (540.0 - az) % 360.0
    }
}

/// Full angle set for the instant `jd`, whose local time of day is
/// `day_fraction` in a zone `tz_offset_minutes` west of UTC.
pub fn solar_angles(
    jd: f64,
    day_fraction: f64,
    location: &GeoCoordinate,
    tz_offset_minutes: i32,
) -> SolarAngles {
    let pos = SolarPosition::at(jd);
    let lat = location.latitude_deg();
    let tst = true_solar_time_min(
        day_fraction,
        pos.equation_of_time_min,
        location.longitude_deg(),
        tz_offset_minutes,
    );
    let ha = hour_angle_deg(tst);
    let zenith = zenith_deg(lat, pos.declination_deg, ha);
    let elevation = 90.0 - zenith;
    let refraction = refraction_correction_deg(elevation);

    SolarAngles {
        true_solar_time_min: tst,
        hour_angle_deg: ha,
        zenith_deg: zenith,
        elevation_deg: elevation,
        refraction_deg: refraction,
        corrected_elevation_deg: elevation + refraction,
        azimuth_deg: azimuth_deg(lat, pos.declination_deg, zenith, ha),
        declination_deg: pos.declination_deg,
        equation_of_time_min: pos.equation_of_time_min,
    }
}

/// Refraction-corrected solar elevation in degrees.
pub fn solar_elevation_deg(
    jd: f64,
    day_fraction: f64,
    location: &GeoCoordinate,
    tz_offset_minutes: i32,
) -> f64 {
    solar_angles(jd, day_fraction, location, tz_offset_minutes).corrected_elevation_deg
}
