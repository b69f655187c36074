//! Degree/radian helpers.

use std::f64::consts::PI;

/// Degrees to radians.
pub fn radians(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Radians to degrees.
pub fn degrees(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg % 360.0;
    if r < 0.0 { r + 360.0 } else { r }
}
