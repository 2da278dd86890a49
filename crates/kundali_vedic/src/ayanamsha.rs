//! Ayanamsa: tropical-to-sidereal boundary.
//!
//! A single precession polynomial anchored at J2000.0 (23.8531 deg),
//! growing at 0.01396894 deg per Julian year with a small quadratic term.
//! It is applied identically to every body and to the ascendant.

use kundali_time::jd_to_centuries;

use crate::util::normalize_360;

/// Ayanamsa at J2000.0, degrees.
pub const AYANAMSA_J2000_DEG: f64 = 23.8531;

/// Linear rate, degrees per Julian year.
pub const AYANAMSA_RATE_DEG_PER_YEAR: f64 = 0.013_968_94;

const QUADRATIC_DEG_PER_CENTURY2: f64 = 0.000_126_6;

/// Ayanamsa in degrees for `t` Julian centuries since J2000.0.
pub fn ayanamsa_deg(t: f64) -> f64 {
    AYANAMSA_J2000_DEG
        + AYANAMSA_RATE_DEG_PER_YEAR * t * (36525.0 / 365.25)
        + QUADRATIC_DEG_PER_CENTURY2 * t * t
}

/// Ayanamsa in degrees at a Julian Date.
pub fn ayanamsa_at_jd(jd: f64) -> f64 {
    ayanamsa_deg(jd_to_centuries(jd))
}

/// Sidereal longitude in [0, 360) from tropical longitude and ayanamsa.
pub fn tropical_to_sidereal(tropical_deg: f64, ayanamsa_deg: f64) -> f64 {
    normalize_360(tropical_deg - ayanamsa_deg)
}
