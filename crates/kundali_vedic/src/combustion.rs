//! Combustion (asta): a graha too close to the Sun.
//!
//! Fixed orbs in degrees. The Sun and the lunar nodes are never combust.
//! A graha is combust when its shortest-arc separation from the Sun is
//! at most its orb.

use crate::graha::Graha;
use crate::util::angular_separation;

/// Combustion orb in degrees, `None` for grahas that cannot be combust.
pub const fn combustion_orb_deg(graha: Graha) -> Option<f64> {
    match graha {
        Graha::Chandra => Some(12.0),
        Graha::Mangal => Some(17.0),
        Graha::Buddh => Some(14.0),
        Graha::Guru => Some(11.0),
        Graha::Shukra => Some(10.0),
        Graha::Shani => Some(15.0),
        Graha::Surya | Graha::Rahu | Graha::Ketu => None,
    }
}

/// Whether `graha` at `graha_lon` is combust with the Sun at `sun_lon`.
pub fn is_combust(graha: Graha, graha_lon: f64, sun_lon: f64) -> bool {
    match combustion_orb_deg(graha) {
        Some(orb) => angular_separation(graha_lon, sun_lon) <= orb,
        None => false,
    }
}
