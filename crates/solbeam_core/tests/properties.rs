//! Property tests over the 1901–2099 window.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use solbeam_core::{
    GeoCoordinate, RiseSetConfig, RiseSetResult, SolarPosition, solar_angles, solar_events,
};
use solbeam_time::{CivilMoment, J2000_JD};

fn date_from_offset(days: u64) -> NaiveDate {
    NaiveDate::from_ymd_opt(1901, 1, 1)
        .unwrap()
        .checked_add_days(Days::new(days))
        .unwrap()
}

/// Whole-hour zone nearest the longitude, minutes west of UTC.
fn nominal_zone(lon: f64) -> i32 {
    -((lon / 15.0).round() as i32) * 60
}

// 2021-03-20 12:00 UTC, a few hours from the March equinox
const EQUINOX_2021_JD: f64 = 2_459_294.0;

#[test]
fn equinox_reference_is_near_zero_declination() {
    let d = SolarPosition::at(EQUINOX_2021_JD).declination_deg;
    assert!(d.abs() < 0.2, "decl = {d}");
}

#[test]
fn j2000_reference_constant() {
    assert_eq!(SolarPosition::at(J2000_JD).julian_century, 0.0);
}

proptest! {
    #[test]
    fn declination_bounded(day in 0u64..72_683) {
        let jd = CivilMoment::from_date(date_from_offset(day), 0).unwrap().to_julian_date();
        let d = SolarPosition::at(jd).declination_deg;
        prop_assert!(d.abs() <= 23.46, "decl {d} on day {day}");
    }

    #[test]
    fn declination_antisymmetric_about_equinox(k in 1u32..=45) {
        let k = k as f64;
        let before = SolarPosition::at(EQUINOX_2021_JD - k).declination_deg;
        let after = SolarPosition::at(EQUINOX_2021_JD + k).declination_deg;
        prop_assert!(before < 0.0 && after > 0.0);
        prop_assert!((before + after).abs() < 0.5, "k={k}: {before} vs {after}");
    }

    #[test]
    fn rise_before_noon_before_set(
        day in 0u64..72_683,
        lat in -60.0f64..=60.0,
        lon in -180.0f64..=180.0,
    ) {
        let tz = nominal_zone(lon);
        let loc = GeoCoordinate::new(lat, lon).unwrap();
        let jd = CivilMoment::from_date(date_from_offset(day), tz).unwrap().to_julian_date();
        let ev = solar_events(jd, &loc, tz, &RiseSetConfig::default());

        let rise = ev.sunrise.time().unwrap();
        let set = ev.sunset.time().unwrap();
        prop_assert!(rise < ev.solar_noon && ev.solar_noon < set);
        prop_assert!(rise.is_within_day() && set.is_within_day());
        prop_assert!((0.0..86_400.0).contains(&rise.seconds()));
        prop_assert!((0.0..86_400.0).contains(&set.seconds()));
    }

    #[test]
    fn never_nan(
        day in 0u64..72_683,
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
        tz in -840i32..=840,
    ) {
        let loc = GeoCoordinate::new(lat, lon).unwrap();
        let jd = CivilMoment::from_date(date_from_offset(day), tz).unwrap().to_julian_date();
        let ev = solar_events(jd, &loc, tz, &RiseSetConfig::default());

        prop_assert!(ev.solar_noon.fraction().is_finite());
        prop_assert!((0.0..=1440.0).contains(&ev.sunlight_duration_min));
        match ev.sunrise {
            RiseSetResult::Event { time, .. } => prop_assert!(time.fraction().is_finite()),
            RiseSetResult::NeverRises => prop_assert_eq!(ev.sunlight_duration_min, 0.0),
            RiseSetResult::NeverSets => prop_assert_eq!(ev.sunlight_duration_min, 1440.0),
        }
    }

    #[test]
    fn mid_latitudes_always_have_events(
        day in 0u64..72_683,
        lat in -65.0f64..=65.0,
    ) {
        let loc = GeoCoordinate::new(lat, 0.0).unwrap();
        let jd = CivilMoment::from_date(date_from_offset(day), 0).unwrap().to_julian_date();
        let ev = solar_events(jd, &loc, 0, &RiseSetConfig::default());
        prop_assert!(ev.sunrise.time().is_some(), "lat {lat} day {day}: {:?}", ev.sunrise);
    }

    #[test]
    fn sunrise_sits_on_the_horizon(
        day in 0u64..72_683,
        lat in -50.0f64..=50.0,
        lon in -180.0f64..=180.0,
    ) {
        let tz = nominal_zone(lon);
        let loc = GeoCoordinate::new(lat, lon).unwrap();
        let jd = CivilMoment::from_date(date_from_offset(day), tz).unwrap().to_julian_date();
        let rise = solar_events(jd, &loc, tz, &RiseSetConfig::default())
            .sunrise
            .time()
            .unwrap()
            .fraction();
        let a = solar_angles(jd + rise, rise, &loc, tz);
        prop_assert!((a.elevation_deg - (90.0 - 90.833)).abs() < 0.5, "elevation {}", a.elevation_deg);
    }

    #[test]
    fn corrected_elevation_in_range(
        day in 0u64..72_683,
        minute in 0u32..1440,
        lat in -90.0f64..=90.0,
        lon in -180.0f64..=180.0,
    ) {
        let tz = nominal_zone(lon);
        let date = date_from_offset(day);
        let local = date.and_hms_opt(minute / 60, minute % 60, 0).unwrap();
        let moment = CivilMoment::from_naive(local, tz).unwrap();
        let loc = GeoCoordinate::new(lat, lon).unwrap();
        let a = solar_angles(moment.to_julian_date(), moment.day_fraction(), &loc, tz);
        prop_assert!((-90.0..=90.0).contains(&a.corrected_elevation_deg));
        prop_assert!((0.0..360.0).contains(&a.azimuth_deg));
        prop_assert!(a.refraction_deg >= 0.0);
    }
}
