//! IAU 2006 general precession in ecliptic longitude.
//!
//! Source: Capitaine, Wallace & Chapront 2003, A&A 412, 567 (Table 1).

/// Accumulated precession in ecliptic longitude since J2000.0, in degrees.
///
/// `t` = Julian centuries since J2000.0. About 1.397 deg per century.
pub fn general_precession_longitude_deg(t: f64) -> f64 {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let t5 = t4 * t;
    let arcsec = 5028.796195 * t + 1.1054348 * t2 + 0.00007964 * t3
        - 0.000023857 * t4
        - 0.0000000383 * t5;
    arcsec / 3600.0
}
