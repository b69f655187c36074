//! Integration tests for the C FFI layer.

use std::ptr;

use solbeam_ffi_c::*;

fn moment(year: i32, month: u32, day: u32, hour: u32, minute: u32, tz: i32) -> SolbeamCivilMoment {
    SolbeamCivilMoment {
        year,
        month,
        day,
        hour,
        minute,
        second: 0,
        tz_offset_minutes: tz,
    }
}

fn empty_events() -> SolbeamSolarEvents {
    SolbeamSolarEvents {
        solar_noon_fraction: 0.0,
        sunrise_fraction: 0.0,
        sunset_fraction: 0.0,
        sunrise_kind: -1,
        sunset_kind: -1,
        hour_angle_deg: 0.0,
        sunlight_duration_min: 0.0,
        declination_deg: 0.0,
        equation_of_time_min: 0.0,
    }
}

#[test]
fn ffi_julian_date_jakarta() {
    let m = moment(2020, 5, 9, 0, 0, -420);
    let mut jd = 0.0;
    // SAFETY: Both pointers are valid stack references.
    let status = unsafe { solbeam_julian_date(&m, &mut jd) };
    assert_eq!(status, SolbeamStatus::Ok);
    assert!((jd - 2_458_978.208_333_333).abs() < 1e-6);
}

#[test]
fn ffi_solar_position_at_j2000() {
    let mut out = SolbeamSolarPosition {
        julian_century: 1.0,
        apparent_longitude_deg: 0.0,
        right_ascension_deg: 0.0,
        declination_deg: 0.0,
        radius_vector_au: 0.0,
        equation_of_time_min: 0.0,
    };
    // SAFETY: Output pointer is a valid stack reference.
    let status = unsafe { solbeam_solar_position(2_451_545.0, &mut out) };
    assert_eq!(status, SolbeamStatus::Ok);
    assert_eq!(out.julian_century, 0.0);
    assert!((out.declination_deg - (-23.0325)).abs() < 1e-3);
    assert!((out.radius_vector_au - 0.98331).abs() < 1e-4);
}

#[test]
fn ffi_solar_events_jakarta() {
    let m = moment(2020, 5, 9, 15, 30, -420);
    let mut out = empty_events();
    // SAFETY: Both pointers are valid stack references.
    let status = unsafe { solbeam_solar_events(&m, -6.2, 106.816666, &mut out) };
    assert_eq!(status, SolbeamStatus::Ok);
    // time of day is ignored: values are those of local midnight
    assert!((out.solar_noon_fraction - 0.492_499_885_1).abs() < 1e-7);
    assert!((out.sunrise_fraction - 0.245_461_791_4).abs() < 1e-7);
    assert!((out.sunset_fraction - 0.739_537_978_8).abs() < 1e-7);
    assert_eq!(out.sunrise_kind, SOLBEAM_RISESET_EVENT);
    assert_eq!(out.sunset_kind, SOLBEAM_RISESET_EVENT);
}

#[test]
fn ffi_solar_events_midnight_sun() {
    let m = moment(2024, 6, 21, 0, 0, -120);
    let mut out = empty_events();
    // SAFETY: Both pointers are valid stack references.
    let status = unsafe { solbeam_solar_events(&m, 69.65, 18.96, &mut out) };
    assert_eq!(status, SolbeamStatus::Ok);
    assert_eq!(out.sunrise_kind, SOLBEAM_RISESET_NEVER_SETS);
    assert_eq!(out.sunlight_duration_min, 1440.0);
}

#[test]
fn ffi_noon_rise_set_seconds_melbourne() {
    let m = moment(2021, 12, 30, 0, 0, -660);
    let (mut noon, mut rise, mut set) = (0.0, 0.0, 0.0);
    // SAFETY: All pointers are valid stack references.
    unsafe {
        assert_eq!(
            solbeam_solar_noon_seconds(&m, -37.8136, 144.9631, &mut noon),
            SolbeamStatus::Ok
        );
        assert_eq!(
            solbeam_sunrise_seconds(&m, -37.8136, 144.9631, &mut rise),
            SolbeamStatus::Ok
        );
        assert_eq!(
            solbeam_sunset_seconds(&m, -37.8136, 144.9631, &mut set),
            SolbeamStatus::Ok
        );
    }
    assert!((noon - 48_138.0).abs() < 1.0);
    assert!((rise - 21_583.58).abs() < 1.0);
    assert!((set - 74_692.43).abs() < 1.0);
}

#[test]
fn ffi_sunrise_polar_night_status() {
    let m = moment(2024, 12, 21, 0, 0, -60);
    let mut seconds = -1.0;
    // SAFETY: Both pointers are valid stack references.
    let status = unsafe { solbeam_sunrise_seconds(&m, 69.65, 18.96, &mut seconds) };
    assert_eq!(status, SolbeamStatus::NeverRises);
    assert_eq!(seconds, -1.0);
}

#[test]
fn ffi_sunset_polar_day_status() {
    let m = moment(2024, 6, 21, 0, 0, -120);
    let mut seconds = -1.0;
    // SAFETY: Both pointers are valid stack references.
    let status = unsafe { solbeam_sunset_seconds(&m, 69.65, 18.96, &mut seconds) };
    assert_eq!(status, SolbeamStatus::NeverSets);
}

#[test]
fn ffi_invalid_location() {
    let m = moment(2020, 5, 9, 12, 0, -420);
    let mut deg = 0.0;
    // SAFETY: Both pointers are valid stack references.
    let status = unsafe { solbeam_solar_elevation(&m, -95.0, 106.8, &mut deg) };
    assert_eq!(status, SolbeamStatus::InvalidLocation);
}

#[test]
fn ffi_invalid_offset() {
    let m = moment(2020, 5, 9, 12, 0, 2000);
    let mut jd = 0.0;
    // SAFETY: Both pointers are valid stack references.
    let status = unsafe { solbeam_julian_date(&m, &mut jd) };
    assert_eq!(status, SolbeamStatus::InvalidInput);
}

#[test]
fn ffi_elevation_and_angles_agree() {
    let m = moment(2020, 5, 9, 12, 0, -420);
    let mut deg = 0.0;
    let mut angles = SolbeamSolarAngles {
        true_solar_time_min: 0.0,
        hour_angle_deg: 0.0,
        zenith_deg: 0.0,
        elevation_deg: 0.0,
        refraction_deg: 0.0,
        corrected_elevation_deg: 0.0,
        azimuth_deg: 0.0,
    };
    // SAFETY: All pointers are valid stack references.
    unsafe {
        assert_eq!(
            solbeam_solar_elevation(&m, -6.2, 106.816666, &mut deg),
            SolbeamStatus::Ok
        );
        assert_eq!(
            solbeam_solar_angles(&m, -6.2, 106.816666, &mut angles),
            SolbeamStatus::Ok
        );
    }
    assert!((deg - 66.179_083).abs() < 1e-5);
    assert_eq!(deg, angles.corrected_elevation_deg);
    assert!((angles.azimuth_deg - 353.601_167).abs() < 1e-4);
}

#[test]
fn ffi_events_reject_null_moment() {
    let mut out = empty_events();
    // SAFETY: Null moment pointer is intentional for validation.
    let status = unsafe { solbeam_solar_events(ptr::null(), 0.0, 0.0, &mut out) };
    assert_eq!(status, SolbeamStatus::NullPointer);
}
