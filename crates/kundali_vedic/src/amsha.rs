//! Navamsa (D9) divisional chart.
//!
//! Each sign is split into nine parts of 3 deg 20'. The navamsa sign is
//! `(sign * 9 + part) mod 12`, which starts fire signs from Mesha, earth
//! signs from Makara, air signs from Tula and water signs from Karka.
//! The degree within the navamsa sign is the offset inside the part,
//! scaled by nine.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::VedicError;
use crate::rashi::{ALL_RASHIS, Rashi};
use crate::util::{normalize_360, quarter_index, quarter_start_deg};

/// Span of one navamsa part: 30/9 = 3.3333... degrees.
pub const NAVAMSA_SPAN: f64 = 30.0 / 9.0;

// Scaling by nine can round the last sliver of a part up to 30.0.
const MAX_DEG_IN_SIGN: f64 = 30.0 - 1e-12;

/// Rule used to pick the navamsa sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NavamsaConvention {
    /// `(sign * 9 + part) mod 12`.
    #[default]
    Standard,
    /// Legacy rule: Standard, then +8 signs when the 0-based sign index is odd.
    ParityOffset,
}

impl NavamsaConvention {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Standard => "standard",
            Self::ParityOffset => "parity-offset",
        }
    }
}

impl FromStr for NavamsaConvention {
    type Err = VedicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "standard" => Ok(Self::Standard),
            "parity-offset" | "parity_offset" | "parity" => Ok(Self::ParityOffset),
            _ => Err(VedicError::UnknownConvention(s.to_string())),
        }
    }
}

/// Navamsa placement of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NavamsaInfo {
    pub rashi: Rashi,
    pub rashi_index: u8,
    /// Which ninth of the D1 sign, 0..=8.
    pub part: u8,
    /// Degrees within the navamsa sign [0, 30).
    pub degrees_in_rashi: f64,
    /// Absolute navamsa longitude [0, 360).
    pub longitude_deg: f64,
}

/// Navamsa sign index for a D1 sign index and part.
pub const fn navamsa_rashi_index(sign_idx: u8, part: u8, convention: NavamsaConvention) -> u8 {
    let raw = (sign_idx as u16 * 9 + part as u16) % 12;
    let idx = match convention {
        NavamsaConvention::Standard => raw,
        NavamsaConvention::ParityOffset => {
            if sign_idx % 2 == 1 {
                (raw + 8) % 12
            } else {
                raw
            }
        }
    };
    idx as u8
}

/// Compute the navamsa placement of a sidereal longitude.
pub fn navamsa(sidereal_lon_deg: f64, convention: NavamsaConvention) -> NavamsaInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let q = quarter_index(lon);
    let sign_idx = q / 9;
    let part = q % 9;
    let within_part = (lon - quarter_start_deg(q)).max(0.0);
    let degrees_in_rashi = (within_part * 9.0).min(MAX_DEG_IN_SIGN);

    let rashi_index = navamsa_rashi_index(sign_idx, part, convention);
    NavamsaInfo {
        rashi: ALL_RASHIS[rashi_index as usize],
        rashi_index,
        part,
        degrees_in_rashi,
        longitude_deg: f64::from(rashi_index) * 30.0 + degrees_in_rashi,
    }
}

/// Vargottama: same sign in D1 and D9.
pub fn is_vargottama(d1: Rashi, d9: Rashi) -> bool {
    d1 == d9
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_known_values() {
        // 5 deg Mesha -> second part -> Vrishabha 15 deg
        let n = navamsa(5.0, NavamsaConvention::Standard);
        assert_eq!(n.rashi, Rashi::Vrishabha);
        assert!((n.longitude_deg - 45.0).abs() < 1e-9);

        // 15.5 deg Vrishabha -> fifth part -> Vrishabha 19.5 deg
        let n = navamsa(45.5, NavamsaConvention::Standard);
        assert_eq!(n.part, 4);
        assert_eq!(n.rashi, Rashi::Vrishabha);
        assert!((n.longitude_deg - 49.5).abs() < 1e-9);
    }

    #[test]
    fn element_starting_signs() {
        let starts = [
            (Rashi::Mesha, Rashi::Mesha),
            (Rashi::Vrishabha, Rashi::Makara),
            (Rashi::Mithuna, Rashi::Tula),
            (Rashi::Karka, Rashi::Karka),
            (Rashi::Simha, Rashi::Mesha),
            (Rashi::Vrischika, Rashi::Karka),
            (Rashi::Meena, Rashi::Karka),
        ];
        for (d1, first) in starts {
            let lon = f64::from(d1.index()) * 30.0 + 0.1;
            let n = navamsa(lon, NavamsaConvention::Standard);
            assert_eq!(n.rashi, first, "first navamsa of {d1:?}");
        }
    }

    #[test]
    fn parity_offset_only_shifts_odd_indices() {
        // Mesha (index 0) unaffected
        assert_eq!(
            navamsa(5.0, NavamsaConvention::ParityOffset).rashi,
            navamsa(5.0, NavamsaConvention::Standard).rashi
        );
        // Vrishabha (index 1): raw Vrishabha + 8 -> Makara
        let n = navamsa(45.5, NavamsaConvention::ParityOffset);
        assert_eq!(n.rashi, Rashi::Makara);
        assert!((n.degrees_in_rashi - 19.5).abs() < 1e-9);
    }

    #[test]
    fn vargottama_cases() {
        // First navamsa of a movable sign is the sign itself
        let n = navamsa(0.5, NavamsaConvention::Standard);
        assert!(is_vargottama(Rashi::Mesha, n.rashi));
        let n = navamsa(10.0, NavamsaConvention::Standard);
        assert!(!is_vargottama(Rashi::Mesha, n.rashi));
    }

    #[test]
    fn parts_and_degrees_in_range() {
        for i in 0..3600 {
            let lon = f64::from(i) * 0.1;
            let n = navamsa(lon, NavamsaConvention::Standard);
            assert!(n.part <= 8);
            assert!((0.0..30.0).contains(&n.degrees_in_rashi), "lon {lon}");
            assert!((0.0..360.0).contains(&n.longitude_deg));
        }
    }

    #[test]
    fn part_agrees_with_nakshatra_pada() {
        use crate::nakshatra::nakshatra_from_longitude;
        use crate::rashi::rashi_from_longitude;
        use crate::util::QUARTERS;

        for q in 0..QUARTERS {
            let lon = quarter_start_deg(q);
            let n = navamsa(lon, NavamsaConvention::Standard);
            let nak = nakshatra_from_longitude(lon);
            assert_eq!(n.part, q % 9, "{lon}");
            assert_eq!(rashi_from_longitude(lon).rashi_index, q / 9, "{lon}");
            assert_eq!((nak.nakshatra_index * 4 + nak.pada - 1) % 9, n.part, "{lon}");
            assert!(n.degrees_in_rashi.abs() < 1e-9, "{lon}");
        }
        // 0 deg Vrishabha: Krittika pada 2 and the first navamsa of Vrishabha.
        assert_eq!(navamsa(30.0, NavamsaConvention::Standard).rashi, Rashi::Makara);
    }

    #[test]
    fn convention_parsing() {
        assert_eq!(
            "standard".parse::<NavamsaConvention>().unwrap(),
            NavamsaConvention::Standard
        );
        assert_eq!(
            "Parity-Offset".parse::<NavamsaConvention>().unwrap(),
            NavamsaConvention::ParityOffset
        );
        assert!("kp".parse::<NavamsaConvention>().is_err());
    }
}
