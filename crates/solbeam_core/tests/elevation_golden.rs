//! Golden values for solar elevation, refraction and azimuth.

use solbeam_core::{GeoCoordinate, solar_angles, solar_elevation_deg};
use solbeam_time::CivilMoment;

fn angles_at(
    lat: f64,
    lon: f64,
    (year, month, day): (i32, u32, u32),
    (hour, minute): (u32, u32),
    tz: i32,
) -> solbeam_core::SolarAngles {
    let moment = CivilMoment::new(year, month, day, hour, minute, 0, tz).unwrap();
    let loc = GeoCoordinate::new(lat, lon).unwrap();
    solar_angles(moment.to_julian_date(), moment.day_fraction(), &loc, tz)
}

#[test]
fn jakarta_near_noon() {
    let a = angles_at(-6.2, 106.816666, (2020, 5, 9), (12, 0), -420);
    assert!((a.true_solar_time_min - 730.822_314).abs() < 1e-4);
    assert!((a.hour_angle_deg - 2.705_579).abs() < 1e-5);
    assert!((a.elevation_deg - 66.171_957).abs() < 1e-5);
    assert!((a.refraction_deg - 0.007_125_86).abs() < 1e-7);
    assert!((a.corrected_elevation_deg - 66.179_083).abs() < 1e-5);
    // low-latitude southern observer in May: Sun to the north, slightly west
    assert!((a.azimuth_deg - 353.601_167).abs() < 1e-4);
}

#[test]
fn jakarta_just_after_sunrise() {
    let a = angles_at(-6.2, 106.816666, (2020, 5, 9), (6, 0), -420);
    assert!((a.elevation_deg - 0.711_406).abs() < 1e-5);
    assert!((a.refraction_deg - 0.392_849).abs() < 1e-5);
    assert!((a.corrected_elevation_deg - 1.104_255).abs() < 1e-5);
    assert!((a.azimuth_deg - 72.400_348).abs() < 1e-4);
}

#[test]
fn jakarta_local_midnight() {
    let a = angles_at(-6.2, 106.816666, (2020, 5, 9), (0, 0), -420);
    assert!((a.true_solar_time_min - 10.800_165).abs() < 1e-4);
    assert!((a.hour_angle_deg - (-177.299_959)).abs() < 1e-5);
    assert!((a.corrected_elevation_deg - (-78.545_847)).abs() < 1e-5);
}

#[test]
fn melbourne_at_solar_noon() {
    let a = angles_at(-37.8136, 144.9631, (2021, 12, 30), (13, 22), -660);
    assert!((a.hour_angle_deg - (-0.142_107)).abs() < 1e-5);
    assert!((a.corrected_elevation_deg - 75.349_063).abs() < 1e-5);
    assert!((a.azimuth_deg - 0.516_430).abs() < 1e-3);
}

#[test]
fn tromso_midnight_sun_negative_solar_time() {
    let a = angles_at(69.65, 18.96, (2024, 6, 21), (0, 30), -120);
    assert!(a.true_solar_time_min < 0.0);
    assert!((a.true_solar_time_min - (-15.962_625)).abs() < 1e-4);
    assert!((a.hour_angle_deg - 176.009_344).abs() < 1e-5);
    assert!((a.elevation_deg - 3.132_987).abs() < 1e-5);
    assert!((a.corrected_elevation_deg - 3.355_654).abs() < 1e-5);
    // Sun due north-ish at local midnight
    assert!((a.azimuth_deg - 356.333_607).abs() < 1e-3);
}

#[test]
fn elevation_helper_returns_corrected_value() {
    let moment = CivilMoment::new(2020, 5, 9, 12, 0, 0, -420).unwrap();
    let loc = GeoCoordinate::new(-6.2, 106.816666).unwrap();
    let jd = moment.to_julian_date();
    let full = solar_angles(jd, moment.day_fraction(), &loc, -420);
    assert_eq!(
        solar_elevation_deg(jd, moment.day_fraction(), &loc, -420),
        full.corrected_elevation_deg
    );
}
