//! C-facing adapter for the solbeam solar calculator.
//!
//! Every entry point takes plain values or pointers to `#[repr(C)]` structs,
//! writes its result through an out-pointer and returns a [`SolbeamStatus`].
//! Timezone offsets are always explicit here (minutes west of UTC); the
//! host-zone default of the Rust API is not exposed.

use solbeam_core::{
    GeoCoordinate, PolarCondition, RiseSetConfig, RiseSetEvent, RiseSetResult, SolarAngles,
    SolarError, SolarEvents, SolarPosition, rise_set_at, solar_angles, solar_events,
    solar_noon_at,
};
use solbeam_time::{CivilMoment, TimeError};

/// ABI version for downstream bindings.
pub const SOLBEAM_API_VERSION: u32 = 1;

/// `SolbeamSolarEvents` kind: the crossing happens; its fraction is valid.
pub const SOLBEAM_RISESET_EVENT: i32 = 0;
/// `SolbeamSolarEvents` kind: polar night, fraction is 0.
pub const SOLBEAM_RISESET_NEVER_RISES: i32 = 1;
/// `SolbeamSolarEvents` kind: midnight sun, fraction is 0.
pub const SOLBEAM_RISESET_NEVER_SETS: i32 = 2;

/// C-facing status codes.
#[repr(i32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolbeamStatus {
    Ok = 0,
    InvalidInput = 1,
    InvalidLocation = 2,
    NeverRises = 3,
    NeverSets = 4,
    NullPointer = 7,
    Internal = 255,
}

impl From<&TimeError> for SolbeamStatus {
    fn from(_: &TimeError) -> Self {
        Self::InvalidInput
    }
}

impl From<&SolarError> for SolbeamStatus {
    fn from(value: &SolarError) -> Self {
        match value {
            SolarError::InvalidLocation(_) => Self::InvalidLocation,
            SolarError::NoRiseSet(PolarCondition::PolarNight) => Self::NeverRises,
            SolarError::NoRiseSet(PolarCondition::PolarDay) => Self::NeverSets,
            SolarError::Time(e) => Self::from(e),
            _ => Self::Internal,
        }
    }
}

/// C-compatible local civil date/time.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolbeamCivilMoment {
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub hour: u32,
    pub minute: u32,
    pub second: u32,
    /// Minutes west of UTC (UTC+7 is -420).
    pub tz_offset_minutes: i32,
}

impl TryFrom<&SolbeamCivilMoment> for CivilMoment {
    type Error = TimeError;

    fn try_from(value: &SolbeamCivilMoment) -> Result<Self, Self::Error> {
        CivilMoment::new(
            value.year,
            value.month,
            value.day,
            value.hour,
            value.minute,
            value.second,
            value.tz_offset_minutes,
        )
    }
}

/// C-compatible solar position summary.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolbeamSolarPosition {
    pub julian_century: f64,
    pub apparent_longitude_deg: f64,
    pub right_ascension_deg: f64,
    pub declination_deg: f64,
    pub radius_vector_au: f64,
    pub equation_of_time_min: f64,
}

impl From<SolarPosition> for SolbeamSolarPosition {
    fn from(value: SolarPosition) -> Self {
        Self {
            julian_century: value.julian_century,
            apparent_longitude_deg: value.apparent_longitude_deg,
            right_ascension_deg: value.right_ascension_deg,
            declination_deg: value.declination_deg,
            radius_vector_au: value.radius_vector_au,
            equation_of_time_min: value.equation_of_time_min,
        }
    }
}

/// C-compatible day summary. `sunrise_kind` / `sunset_kind` hold one of the
/// `SOLBEAM_RISESET_*` constants.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolbeamSolarEvents {
    pub solar_noon_fraction: f64,
    pub sunrise_fraction: f64,
    pub sunset_fraction: f64,
    pub sunrise_kind: i32,
    pub sunset_kind: i32,
    /// Sunrise hour angle in degrees; 0 when there is no crossing.
    pub hour_angle_deg: f64,
    pub sunlight_duration_min: f64,
    pub declination_deg: f64,
    pub equation_of_time_min: f64,
}

fn encode_rise_set(result: RiseSetResult) -> (f64, i32) {
    match result {
        RiseSetResult::Event { time, .. } => (time.fraction(), SOLBEAM_RISESET_EVENT),
        RiseSetResult::NeverRises => (0.0, SOLBEAM_RISESET_NEVER_RISES),
        RiseSetResult::NeverSets => (0.0, SOLBEAM_RISESET_NEVER_SETS),
    }
}

impl From<SolarEvents> for SolbeamSolarEvents {
    fn from(value: SolarEvents) -> Self {
        let (sunrise_fraction, sunrise_kind) = encode_rise_set(value.sunrise);
        let (sunset_fraction, sunset_kind) = encode_rise_set(value.sunset);
        Self {
            solar_noon_fraction: value.solar_noon.fraction(),
            sunrise_fraction,
            sunset_fraction,
            sunrise_kind,
            sunset_kind,
            hour_angle_deg: value.hour_angle_deg.unwrap_or(0.0),
            sunlight_duration_min: value.sunlight_duration_min,
            declination_deg: value.declination_deg,
            equation_of_time_min: value.equation_of_time_min,
        }
    }
}

/// C-compatible sun angles.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolbeamSolarAngles {
    pub true_solar_time_min: f64,
    pub hour_angle_deg: f64,
    pub zenith_deg: f64,
    pub elevation_deg: f64,
    pub refraction_deg: f64,
    pub corrected_elevation_deg: f64,
    pub azimuth_deg: f64,
}

impl From<SolarAngles> for SolbeamSolarAngles {
    fn from(value: SolarAngles) -> Self {
        Self {
            true_solar_time_min: value.true_solar_time_min,
            hour_angle_deg: value.hour_angle_deg,
            zenith_deg: value.zenith_deg,
            elevation_deg: value.elevation_deg,
            refraction_deg: value.refraction_deg,
            corrected_elevation_deg: value.corrected_elevation_deg,
            azimuth_deg: value.azimuth_deg,
        }
    }
}

fn moment_and_location(
    moment: &SolbeamCivilMoment,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<(CivilMoment, GeoCoordinate), SolbeamStatus> {
    let civil = CivilMoment::try_from(moment).map_err(|e| SolbeamStatus::from(&e))?;
    let location =
        GeoCoordinate::new(latitude_deg, longitude_deg).map_err(|e| SolbeamStatus::from(&e))?;
    Ok((civil, location))
}

/// Julian Date of a civil moment.
pub fn solbeam_julian_date_internal(moment: &SolbeamCivilMoment) -> Result<f64, SolbeamStatus> {
    let civil = CivilMoment::try_from(moment).map_err(|e| SolbeamStatus::from(&e))?;
    Ok(civil.to_julian_date())
}

/// Solar position at a Julian Date.
pub fn solbeam_solar_position_internal(jd: f64) -> Result<SolbeamSolarPosition, SolbeamStatus> {
    if !jd.is_finite() {
        return Err(SolbeamStatus::InvalidInput);
    }
    Ok(SolbeamSolarPosition::from(SolarPosition::at(jd)))
}

/// Day summary for the date of `moment` (its time of day is ignored).
pub fn solbeam_solar_events_internal(
    moment: &SolbeamCivilMoment,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<SolbeamSolarEvents, SolbeamStatus> {
    let (civil, location) = moment_and_location(moment, latitude_deg, longitude_deg)?;
    let midnight = civil.at_midnight();
    let events = solar_events(
        midnight.to_julian_date(),
        &location,
        midnight.tz_offset_minutes(),
        &RiseSetConfig::default(),
    );
    Ok(SolbeamSolarEvents::from(events))
}

/// Seconds since local midnight of solar noon on the date of `moment`.
pub fn solbeam_solar_noon_seconds_internal(
    moment: &SolbeamCivilMoment,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<f64, SolbeamStatus> {
    let (civil, location) = moment_and_location(moment, latitude_deg, longitude_deg)?;
    let midnight = civil.at_midnight();
    Ok(solar_noon_at(midnight.to_julian_date(), &location, midnight.tz_offset_minutes()).seconds())
}

/// Seconds since local midnight of sunrise or sunset on the date of `moment`.
pub fn solbeam_rise_set_seconds_internal(
    moment: &SolbeamCivilMoment,
    latitude_deg: f64,
    longitude_deg: f64,
    event: RiseSetEvent,
) -> Result<f64, SolbeamStatus> {
    let (civil, location) = moment_and_location(moment, latitude_deg, longitude_deg)?;
    let midnight = civil.at_midnight();
    let time = rise_set_at(
        midnight.to_julian_date(),
        &location,
        midnight.tz_offset_minutes(),
        event,
        &RiseSetConfig::default(),
    )
    .map_err(|e| SolbeamStatus::from(&e))?;
    Ok(time.seconds())
}

/// Sun angles at `moment`.
pub fn solbeam_solar_angles_internal(
    moment: &SolbeamCivilMoment,
    latitude_deg: f64,
    longitude_deg: f64,
) -> Result<SolbeamSolarAngles, SolbeamStatus> {
    let (civil, location) = moment_and_location(moment, latitude_deg, longitude_deg)?;
    let angles = solar_angles(
        civil.to_julian_date(),
        civil.day_fraction(),
        &location,
        civil.tz_offset_minutes(),
    );
    Ok(SolbeamSolarAngles::from(angles))
}

/// Return ABI version of the exported C API.
#[unsafe(no_mangle)]
pub extern "C" fn solbeam_api_version() -> u32 {
    SOLBEAM_API_VERSION
}

/// Julian Date of a civil moment.
///
/// # Safety
/// `moment` and `out_jd` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn solbeam_julian_date(
    moment: *const SolbeamCivilMoment,
    out_jd: *mut f64,
) -> SolbeamStatus {
    ffi_boundary(|| {
        if moment.is_null() || out_jd.is_null() {
            return SolbeamStatus::NullPointer;
        }

        // SAFETY: Pointer is checked for null and only borrowed for this call.
        let moment_ref = unsafe { &*moment };
        match solbeam_julian_date_internal(moment_ref) {
            Ok(jd) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_jd = jd };
                SolbeamStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Solar position at a Julian Date.
///
/// # Safety
/// `out` must be a valid, non-null pointer.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn solbeam_solar_position(
    jd: f64,
    out: *mut SolbeamSolarPosition,
) -> SolbeamStatus {
    ffi_boundary(|| {
        if out.is_null() {
            return SolbeamStatus::NullPointer;
        }

        match solbeam_solar_position_internal(jd) {
            Ok(pos) => {
                // SAFETY: Pointer is checked for null above; write one struct.
                unsafe { *out = pos };
                SolbeamStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Noon, sunrise, sunset and day length for the date of `moment`.
///
/// Polar days and nights return `Ok` with the kind fields set.
///
/// # Safety
/// `moment` and `out` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn solbeam_solar_events(
    moment: *const SolbeamCivilMoment,
    latitude_deg: f64,
    longitude_deg: f64,
    out: *mut SolbeamSolarEvents,
) -> SolbeamStatus {
    ffi_boundary(|| {
        if moment.is_null() || out.is_null() {
            return SolbeamStatus::NullPointer;
        }

        // SAFETY: Pointer is checked for null and only borrowed for this call.
        let moment_ref = unsafe { &*moment };
        match solbeam_solar_events_internal(moment_ref, latitude_deg, longitude_deg) {
            Ok(events) => {
                // SAFETY: Pointer is checked for null above; write one struct.
                unsafe { *out = events };
                SolbeamStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Solar noon in seconds since local midnight.
///
/// # Safety
/// `moment` and `out_seconds` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn solbeam_solar_noon_seconds(
    moment: *const SolbeamCivilMoment,
    latitude_deg: f64,
    longitude_deg: f64,
    out_seconds: *mut f64,
) -> SolbeamStatus {
    ffi_boundary(|| {
        if moment.is_null() || out_seconds.is_null() {
            return SolbeamStatus::NullPointer;
        }

        // SAFETY: Pointer is checked for null and only borrowed for this call.
        let moment_ref = unsafe { &*moment };
        match solbeam_solar_noon_seconds_internal(moment_ref, latitude_deg, longitude_deg) {
            Ok(seconds) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_seconds = seconds };
                SolbeamStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Sunrise in seconds since local midnight.
///
/// Returns `NeverRises` or `NeverSets` (and leaves `out_seconds` untouched)
/// when there is no sunrise that day.
///
/// # Safety
/// `moment` and `out_seconds` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn solbeam_sunrise_seconds(
    moment: *const SolbeamCivilMoment,
    latitude_deg: f64,
    longitude_deg: f64,
    out_seconds: *mut f64,
) -> SolbeamStatus {
    // SAFETY: Caller upholds the pointer contract documented above.
    unsafe {
        rise_set_seconds(moment, latitude_deg, longitude_deg, RiseSetEvent::Sunrise, out_seconds)
    }
}

/// Sunset in seconds since local midnight. Polar days and nights are
/// reported as for [`solbeam_sunrise_seconds`].
///
/// # Safety
/// `moment` and `out_seconds` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn solbeam_sunset_seconds(
    moment: *const SolbeamCivilMoment,
    latitude_deg: f64,
    longitude_deg: f64,
    out_seconds: *mut f64,
) -> SolbeamStatus {
    // SAFETY: Caller upholds the pointer contract documented above.
    unsafe {
        rise_set_seconds(moment, latitude_deg, longitude_deg, RiseSetEvent::Sunset, out_seconds)
    }
}

/// Shared body of the sunrise/sunset entry points.
///
/// # Safety
/// `moment` and `out_seconds` must be valid pointers or null.
unsafe fn rise_set_seconds(
    moment: *const SolbeamCivilMoment,
    latitude_deg: f64,
    longitude_deg: f64,
    event: RiseSetEvent,
    out_seconds: *mut f64,
) -> SolbeamStatus {
    ffi_boundary(|| {
        if moment.is_null() || out_seconds.is_null() {
            return SolbeamStatus::NullPointer;
        }

        // SAFETY: Pointer is checked for null and only borrowed for this call.
        let moment_ref = unsafe { &*moment };
        match solbeam_rise_set_seconds_internal(moment_ref, latitude_deg, longitude_deg, event) {
            Ok(seconds) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_seconds = seconds };
                SolbeamStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Full sun angle set at `moment`.
///
/// # Safety
/// `moment` and `out` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn solbeam_solar_angles(
    moment: *const SolbeamCivilMoment,
    latitude_deg: f64,
    longitude_deg: f64,
    out: *mut SolbeamSolarAngles,
) -> SolbeamStatus {
    ffi_boundary(|| {
        if moment.is_null() || out.is_null() {
            return SolbeamStatus::NullPointer;
        }

        // SAFETY: Pointer is checked for null and only borrowed for this call.
        let moment_ref = unsafe { &*moment };
        match solbeam_solar_angles_internal(moment_ref, latitude_deg, longitude_deg) {
            Ok(angles) => {
                // SAFETY: Pointer is checked for null above; write one struct.
                unsafe { *out = angles };
                SolbeamStatus::Ok
            }
            Err(status) => status,
        }
    })
}

/// Refraction-corrected solar elevation in degrees at `moment`.
///
/// # Safety
/// `moment` and `out_deg` must be valid, non-null pointers.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn solbeam_solar_elevation(
    moment: *const SolbeamCivilMoment,
    latitude_deg: f64,
    longitude_deg: f64,
    out_deg: *mut f64,
) -> SolbeamStatus {
    ffi_boundary(|| {
        if moment.is_null() || out_deg.is_null() {
            return SolbeamStatus::NullPointer;
        }

        // SAFETY: Pointer is checked for null and only borrowed for this call.
        let moment_ref = unsafe { &*moment };
        match solbeam_solar_angles_internal(moment_ref, latitude_deg, longitude_deg) {
            Ok(angles) => {
                // SAFETY: Pointer is checked for null and written once.
                unsafe { *out_deg = angles.corrected_elevation_deg };
                SolbeamStatus::Ok
            }
            Err(status) => status,
        }
    })
}

fn ffi_boundary(f: impl FnOnce() -> SolbeamStatus) -> SolbeamStatus {
    match std::panic::catch_unwind(std::panic::AssertUnwindSafe(f)) {
        Ok(status) => status,
        Err(_) => SolbeamStatus::Internal,
    }
}
