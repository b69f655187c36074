//! Closed-form solar ephemeris built on local civil time.
//!
//! This crate provides:
//! - Low-precision solar position (declination, equation of time and the
//!   intermediate NOAA terms) at a Julian Date
//! - Solar noon, sunrise and sunset as fractions of the local day, with
//!   explicit polar day/night results
//! - Solar elevation and azimuth, with atmospheric refraction correction
//!
//! All functions are pure and allocation-free.

pub mod angle;
pub mod elevation;
pub mod error;
pub mod events;
pub mod events_types;
pub mod geo;
pub mod position;
pub mod refraction;

pub use elevation::{
    SolarAngles, hour_angle_deg, solar_angles, solar_elevation_deg, true_solar_time_min,
};
pub use error::{PolarCondition, SolarError};
pub use events::{
    cos_sunrise_hour_angle, rise_set_at, solar_events, solar_noon_at, solar_noon_fraction,
    sunrise_fraction, sunrise_hour_angle_deg, sunset_fraction,
};
pub use events_types::{
    DayFraction, RiseSetConfig, RiseSetEvent, RiseSetResult, STANDARD_ZENITH_DEG, SolarEvents,
};
pub use geo::GeoCoordinate;
pub use position::SolarPosition;
pub use refraction::refraction_correction_deg;
