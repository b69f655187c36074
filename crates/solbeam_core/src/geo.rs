//! Observer location on Earth's surface.

use crate::angle::radians;
use crate::error::SolarError;

/// Geographic coordinate in degrees.
///
/// Latitude is north positive in [-90, 90]; longitude east positive in
/// [-180, 180]. Only [`GeoCoordinate::new`] builds one, so every value
/// in circulation has been range-checked.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeoCoordinate {
    latitude_deg: f64,
    longitude_deg: f64,
}

impl GeoCoordinate {
    pub fn new(latitude_deg: f64, longitude_deg: f64) -> Result<Self, SolarError> {
        if !latitude_deg.is_finite() {
            return Err(SolarError::InvalidLocation("latitude must be finite"));
        }
        if !longitude_deg.is_finite() {
            return Err(SolarError::InvalidLocation("longitude must be finite"));
        }
        if !(-90.0..=90.0).contains(&latitude_deg) {
            return Err(SolarError::InvalidLocation("latitude outside [-90, 90]"));
        }
        if !(-180.0..=180.0).contains(&longitude_deg) {
            return Err(SolarError::InvalidLocation("longitude outside [-180, 180]"));
        }
        Ok(Self {
            latitude_deg,
            longitude_deg,
        })
    }

    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }

    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }

    pub fn latitude_rad(&self) -> f64 {
        radians(self.latitude_deg)
    }
}
