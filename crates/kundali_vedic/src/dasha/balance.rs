//! Birth balance: how much of the first lord's period remains at birth.

use serde::{Deserialize, Serialize};

use super::data::vimshottari_years;
use crate::graha::Graha;
use crate::nakshatra::{NAKSHATRA_SPAN_27, Nakshatra, nakshatra_from_longitude};

/// Moon's nakshatra at birth and the unexpired part of its lord's period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthBalance {
    pub nakshatra: Nakshatra,
    pub lord: Graha,
    /// Degrees the Moon has already traversed in the nakshatra.
    pub degrees_in_nakshatra: f64,
    /// Fraction of the nakshatra already traversed [0, 1).
    pub elapsed_fraction: f64,
    /// Years of the lord's period remaining at birth.
    pub balance_years: f64,
}

/// Compute the Vimshottari birth balance from the Moon's sidereal longitude.
pub fn nakshatra_birth_balance(moon_sidereal_lon: f64) -> BirthBalance {
    let info = nakshatra_from_longitude(moon_sidereal_lon);
    let lord = info.nakshatra.lord();
    let elapsed_fraction = info.degrees_in_nakshatra / NAKSHATRA_SPAN_27;
    BirthBalance {
        nakshatra: info.nakshatra,
        lord,
        degrees_in_nakshatra: info.degrees_in_nakshatra,
        elapsed_fraction,
        balance_years: vimshottari_years(lord) * (1.0 - elapsed_fraction),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_of_ashwini_is_full_ketu() {
        let b = nakshatra_birth_balance(0.0);
        assert_eq!(b.lord, Graha::Ketu);
        assert!((b.balance_years - 7.0).abs() < 1e-12);
        assert!(b.elapsed_fraction.abs() < 1e-12);
    }

    #[test]
    fn midpoint_halves_the_period() {
        let b = nakshatra_birth_balance(NAKSHATRA_SPAN_27 / 2.0);
        assert!((b.elapsed_fraction - 0.5).abs() < 1e-10);
        assert!((b.balance_years - 3.5).abs() < 1e-9);
    }

    #[test]
    fn rohini_is_moon() {
        let b = nakshatra_birth_balance(40.0);
        assert_eq!(b.nakshatra, Nakshatra::Rohini);
        assert_eq!(b.lord, Graha::Chandra);
        assert!((b.balance_years - 10.0).abs() < 1e-9);
    }

    #[test]
    fn near_end_leaves_little() {
        let b = nakshatra_birth_balance(NAKSHATRA_SPAN_27 - 0.001);
        assert!(b.balance_years < 0.001);
        assert!(b.balance_years > 0.0);
    }
}
