//! Low-precision geocentric solar position.
//!
//! Closed-form NOAA solar calculator terms, all polynomials in Julian
//! centuries from J2000.0 (`t`). Angles are degrees unless the name says
//! otherwise; the equation of time is in minutes of time.
//!
//! Good to roughly one arcminute in declination and a few seconds in the
//! equation of time over 1901–2099.

use solbeam_time::julian_century;

use crate::angle::{degrees, radians};

/// Mean longitude of the Sun, reduced to [0, 360).
pub fn mean_longitude_deg(t: f64) -> f64 {
    (280.46646 + t * (36000.76983 + t * 0.0003032)).rem_euclid(360.0)
}

/// Mean anomaly of the Sun (not reduced).
pub fn mean_anomaly_deg(t: f64) -> f64 {
    357.52911 + t * (35999.05029 - 0.0001537 * t)
}

/// Eccentricity of Earth's orbit.
pub fn eccentricity(t: f64) -> f64 {
    0.016708634 - t * (0.000042037 + 0.0000001267 * t)
}

/// Longitude of the ascending node of the Moon's orbit, simplified.
///
/// Drives both the nutation term in the obliquity and the
/// aberration/nutation term in the apparent longitude.
pub fn lunar_node_omega_deg(t: f64) -> f64 {
    125.04 - 1934.136 * t
}

/// Mean obliquity of the ecliptic: 23°26′21.448″ minus a cubic in `t`.
pub fn mean_obliquity_deg(t: f64) -> f64 {
    23.0 + (26.0 + (21.448 - t * (46.815 + t * (0.00059 - t * 0.001813))) / 60.0) / 60.0
}

/// Obliquity corrected for the dominant nutation term.
pub fn obliquity_corrected_deg(t: f64) -> f64 {
    mean_obliquity_deg(t) + 0.00256 * radians(lunar_node_omega_deg(t)).cos()
}

/// Equation of center: three-term series in the mean anomaly.
pub fn equation_of_center_deg(t: f64, mean_anomaly_deg: f64) -> f64 {
    let m = radians(mean_anomaly_deg);
    m.sin() * (1.914602 - t * (0.004817 + 0.000014 * t))
        + (2.0 * m).sin() * (0.019993 - 0.000101 * t)
        + (3.0 * m).sin() * 0.000289
}

/// Apparent longitude: true longitude less aberration and nutation.
pub fn apparent_longitude_deg(t: f64, true_longitude_deg: f64) -> f64 {
    true_longitude_deg - 0.00569 - 0.00478 * radians(lunar_node_omega_deg(t)).sin()
}

/// Sun–Earth distance in AU from the true anomaly.
pub fn radius_vector_au(eccentricity: f64, true_anomaly_deg: f64) -> f64 {
    (1.000001018 * (1.0 - eccentricity * eccentricity))
        / (1.0 + eccentricity * radians(true_anomaly_deg).cos())
}

/// Solar declination from the corrected obliquity and apparent longitude.
pub fn declination_deg(obliquity_deg: f64, apparent_longitude_deg: f64) -> f64 {
    degrees((radians(obliquity_deg).sin() * radians(apparent_longitude_deg).sin()).asin())
}

/// Right ascension in (-180, 180].
pub fn right_ascension_deg(obliquity_deg: f64, apparent_longitude_deg: f64) -> f64 {
    let lambda = radians(apparent_longitude_deg);
    degrees((radians(obliquity_deg).cos() * lambda.sin()).atan2(lambda.cos()))
}

/// `tan²(ε/2)`, the "var y" coefficient of the equation of time.
pub fn var_y(obliquity_deg: f64) -> f64 {
    let half = radians(obliquity_deg / 2.0).tan();
    half * half
}

/// Equation of time in minutes (apparent minus mean solar time).
pub fn equation_of_time_min(
    var_y: f64,
    eccentricity: f64,
    mean_longitude_deg: f64,
    mean_anomaly_deg: f64,
) -> f64 {
    let y = var_y;
    let e = eccentricity;
    let l0 = radians(mean_longitude_deg);
    let m = radians(mean_anomaly_deg);
    4.0 * degrees(
        y * (2.0 * l0).sin() - 2.0 * e * m.sin() + 4.0 * e * y * m.sin() * (2.0 * l0).cos()
            - 0.5 * y * y * (4.0 * l0).sin()
            - 1.25 * e * e * (2.0 * m).sin(),
    )
}

/// Every term of the solar model at one instant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SolarPosition {
    /// Julian centuries since J2000.0.
    pub julian_century: f64,
    pub mean_longitude_deg: f64,
    pub mean_anomaly_deg: f64,
    pub eccentricity: f64,
    pub mean_obliquity_deg: f64,
    pub obliquity_corrected_deg: f64,
    pub equation_of_center_deg: f64,
    pub true_longitude_deg: f64,
    pub true_anomaly_deg: f64,
    /// Sun–Earth distance in AU.
    pub radius_vector_au: f64,
    pub apparent_longitude_deg: f64,
    pub right_ascension_deg: f64,
    /// Declination in degrees, north positive.
    pub declination_deg: f64,
    pub var_y: f64,
    /// Equation of time in minutes of time.
    pub equation_of_time_min: f64,
}

impl SolarPosition {
    /// Solar position at a Julian Date.
    pub fn at(jd: f64) -> Self {
        Self::from_julian_century(julian_century(jd))
    }

    pub fn from_julian_century(t: f64) -> Self {
        let l0 = mean_longitude_deg(t);
        let m = mean_anomaly_deg(t);
        let e = eccentricity(t);
        let eps0 = mean_obliquity_deg(t);
        let eps = obliquity_corrected_deg(t);
        let c = equation_of_center_deg(t, m);
        let true_lon = l0 + c;
        let true_anom = m + c;
        let lambda = apparent_longitude_deg(t, true_lon);
        let y = var_y(eps);

        let pos = Self {
            julian_century: t,
            mean_longitude_deg: l0,
            mean_anomaly_deg: m,
            eccentricity: e,
            mean_obliquity_deg: eps0,
            obliquity_corrected_deg: eps,
            equation_of_center_deg: c,
            true_longitude_deg: true_lon,
            true_anomaly_deg: true_anom,
            radius_vector_au: radius_vector_au(e, true_anom),
            apparent_longitude_deg: lambda,
            right_ascension_deg: right_ascension_deg(eps, lambda),
            declination_deg: declination_deg(eps, lambda),
            var_y: y,
            equation_of_time_min: equation_of_time_min(y, e, l0, m),
        };
        log::trace!(
            "solar position t={t:.9}: decl={:.6} eot={:.6} min",
            pos.declination_deg,
            pos.equation_of_time_min
        );
        pos
    }
}
