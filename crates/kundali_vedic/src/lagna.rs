//! Lagna (ascendant): the ecliptic point rising on the eastern horizon.
//!
//! GMST from the Earth rotation angle, LST = GMST + east longitude, then
//!
//! ```text
//! asc = atan2(cos LST, -(sin LST * cos eps + tan phi * sin eps))
//! ```
//!
//! with a fixed obliquity eps = 23.4397 deg. `tan phi` diverges at the
//! poles, so latitudes beyond a configurable limit are rejected.

use kundali_time::{gmst_deg, local_sidereal_time_deg};
use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::util::normalize_360;

/// Fixed mean obliquity of the ecliptic, degrees.
pub const OBLIQUITY_DEG: f64 = 23.4397;

/// Default maximum |latitude| for which an ascendant is computed.
pub const DEFAULT_POLAR_LIMIT_DEG: f64 = 89.5;

/// Tropical ascendant from local sidereal time and geographic latitude.
pub fn tropical_ascendant_deg(lst_deg: f64, lat_deg: f64) -> f64 {
    let lst = lst_deg.to_radians();
    let phi = lat_deg.to_radians();
    let (sin_e, cos_e) = OBLIQUITY_DEG.to_radians().sin_cos();
    let y = lst.cos();
    let x = -(lst.sin() * cos_e + phi.tan() * sin_e);
    normalize_360(y.atan2(x).to_degrees())
}

/// Check that a polar limit lies in (0, 90).
pub fn validate_polar_limit(limit_deg: f64) -> Result<(), VedicError> {
    if limit_deg.is_finite() && limit_deg > 0.0 && limit_deg < 90.0 {
        Ok(())
    } else {
        Err(VedicError::InvalidPolarLimit(limit_deg))
    }
}

/// Rising point plus the sidereal time it was computed from.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LagnaPoint {
    pub lst_deg: f64,
    pub tropical_deg: f64,
}

/// Tropical ascendant at `jd_utc` for an observer at (`lat_deg`, `east_lon_deg`).
pub fn lagna(
    jd_utc: f64,
    lat_deg: f64,
    east_lon_deg: f64,
    polar_limit_deg: f64,
) -> Result<LagnaPoint, VedicError> {
    if !jd_utc.is_finite() {
        return Err(VedicError::NonFinite("julian date"));
    }
    if !lat_deg.is_finite() || !east_lon_deg.is_finite() {
        return Err(VedicError::NonFinite("geographic coordinate"));
    }
    if !(-90.0..=90.0).contains(&lat_deg) {
        return Err(VedicError::InvalidLatitude(lat_deg));
    }
    validate_polar_limit(polar_limit_deg)?;
    if lat_deg.abs() > polar_limit_deg {
        return Err(VedicError::PolarSingularity {
            lat_deg,
            limit_deg: polar_limit_deg,
        });
    }

    let lst_deg = local_sidereal_time_deg(gmst_deg(jd_utc), east_lon_deg);
    Ok(LagnaPoint {
        lst_deg,
        tropical_deg: tropical_ascendant_deg(lst_deg, lat_deg),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equator_cardinal_points() {
        assert!((tropical_ascendant_deg(0.0, 0.0) - 90.0).abs() < 1e-9);
        assert!((tropical_ascendant_deg(90.0, 0.0) - 180.0).abs() < 1e-9);
        assert!((tropical_ascendant_deg(180.0, 0.0) - 270.0).abs() < 1e-9);
        let asc = tropical_ascendant_deg(270.0, 0.0);
        assert!(asc.min(360.0 - asc) < 1e-9, "asc = {asc}");
    }

    #[test]
    fn northern_latitude_shifts_toward_cancer() {
        // RAMC 0 at 51.5 N: ascendant about 26 deg Cancer
        let asc = tropical_ascendant_deg(0.0, 51.5);
        assert!((asc - 116.57).abs() < 0.05, "asc = {asc}");
    }

    #[test]
    fn ascendant_advances_with_lst() {
        // Over one sidereal day the ascendant sweeps the full circle monotonically.
        let mut prev = tropical_ascendant_deg(0.0, 28.6);
        let mut total = 0.0;
        for i in 1..=360 {
            let cur = tropical_ascendant_deg(f64::from(i), 28.6);
            let step = normalize_360(cur - prev);
            assert!(step > 0.0 && step < 5.0, "step {step} at lst {i}");
            total += step;
            prev = cur;
        }
        assert!((total - 360.0).abs() < 1e-6);
    }

    #[test]
    fn polar_limit_rejected() {
        let err = lagna(2_451_545.0, 89.9, 0.0, DEFAULT_POLAR_LIMIT_DEG).unwrap_err();
        assert!(matches!(err, VedicError::PolarSingularity { .. }));
        assert!(lagna(2_451_545.0, -89.6, 0.0, DEFAULT_POLAR_LIMIT_DEG).is_err());
        assert!(lagna(2_451_545.0, 89.5, 0.0, DEFAULT_POLAR_LIMIT_DEG).is_ok());
    }

    #[test]
    fn invalid_inputs() {
        assert!(matches!(
            lagna(2_451_545.0, 91.0, 0.0, DEFAULT_POLAR_LIMIT_DEG),
            Err(VedicError::InvalidLatitude(_))
        ));
        assert!(matches!(
            lagna(f64::NAN, 10.0, 0.0, DEFAULT_POLAR_LIMIT_DEG),
            Err(VedicError::NonFinite(_))
        ));
        assert!(matches!(
            lagna(2_451_545.0, 10.0, 0.0, 90.0),
            Err(VedicError::InvalidPolarLimit(_))
        ));
    }

    #[test]
    fn lst_includes_longitude() {
        let a = lagna(2_451_545.0, 10.0, 0.0, DEFAULT_POLAR_LIMIT_DEG).unwrap();
        let b = lagna(2_451_545.0, 10.0, 15.0, DEFAULT_POLAR_LIMIT_DEG).unwrap();
        assert!((normalize_360(b.lst_deg - a.lst_deg) - 15.0).abs() < 1e-9);
    }
}
