//! Atmospheric refraction correction.
//!
//! Piecewise empirical model in arcseconds, returned in degrees. Near the
//! horizon a quartic in elevation replaces the `1/tan(e)` series so the
//! correction stays finite through e = 0.

use crate::angle::radians;

const ARCSEC_PER_DEG: f64 = 3600.0;

/// Refraction correction in degrees for an uncorrected elevation in degrees.
///
/// Add the result to the geometric elevation to get the apparent one.
pub fn refraction_correction_deg(elevation_deg: f64) -> f64 {
    if elevation_deg > 85.0 {
        return 0.0;
    }
    let te = radians(elevation_deg).tan();
    let arcsec = if elevation_deg > 5.0 {
        58.1 / te - 0.07 / te.powi(3) + 0.000086 / te.powi(5)
    } else if elevation_deg > -0.575 {
        let e = elevation_deg;
        1735.0 + e * (-518.2 + e * (103.4 + e * (-12.79 + e * 0.711)))
    } else {
        -20.772 / te
    };
    arcsec / ARCSEC_PER_DEG
}
