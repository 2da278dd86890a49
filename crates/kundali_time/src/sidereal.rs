//! Earth Rotation Angle, Greenwich Mean Sidereal Time and local sidereal time.
//!
//! The engine evaluates these at JD(UTC), treating UTC as UT1.
//!
//! Sources:
//! - ERA: IERS Conventions 2010, Eq. 5.15.
//! - GMST polynomial: Capitaine et al. 2003, Table 2.

use crate::julian::{DAYS_PER_CENTURY, J2000_JD};

/// Earth Rotation Angle in degrees [0, 360).
///
/// θ = 360° × (0.7790572732640 + 1.00273781191135448 × Du), Du = JD − 2451545.0
pub fn earth_rotation_angle_deg(jd_ut: f64) -> f64 {
    let du = jd_ut - J2000_JD;
    // Split off whole days to keep the fraction precise.
    let turns = 0.779_057_273_264_0 + 0.002_737_811_911_354_48 * du + du.fract();
    (turns.rem_euclid(1.0)) * 360.0
}

/// Greenwich Mean Sidereal Time in degrees [0, 360).
///
/// GMST = ERA + (0.014506 + 4612.156534·T + 1.3915817·T² − 0.00000044·T³
///        − 0.000029956·T⁴ − 0.0000000368·T⁵) arcsec
pub fn gmst_deg(jd_ut: f64) -> f64 {
    let era = earth_rotation_angle_deg(jd_ut);
    let t = (jd_ut - J2000_JD) / DAYS_PER_CENTURY;
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;

    let poly_arcsec = 0.014506 + 4612.156534 * t + 1.3915817 * t2
        - 0.00000044 * t3
        - 0.000029956 * t4
        - 0.0000000368 * t5;

    (era + poly_arcsec / 3600.0).rem_euclid(360.0)
}

/// Local sidereal time in degrees [0, 360) from GMST and east longitude.
///
/// Equivalent to adding `longitude / 15` hours to GMST.
pub fn local_sidereal_time_deg(gmst_deg: f64, east_longitude_deg: f64) -> f64 {
    (gmst_deg + east_longitude_deg).rem_euclid(360.0)
}
