//! Kalsarp Dosha: all seven classical grahas hemmed between Rahu and Ketu.
//!
//! The arc runs from Rahu to Ketu and is chosen by comparing the two
//! longitudes numerically: when Rahu < Ketu a planet must satisfy
//! `rahu < lon < ketu`, otherwise `lon > rahu || lon < ketu`. Both ends
//! are exclusive.

use super::types::{DoshaResult, Severity};
use crate::graha::Graha;

const REMEDIES: [&str; 3] = [
    "Perform Kalsarp Shanti puja at Trimbakeshwar",
    "Recite the Maha Mrityunjaya mantra",
    "Offer milk to a Shivalinga on Mondays",
];

fn within_node_arc(lon: f64, rahu: f64, ketu: f64) -> bool {
    if rahu < ketu {
        lon > rahu && lon < ketu
    } else {
        lon > rahu || lon < ketu
    }
}

/// Evaluate Kalsarp Dosha.
///
/// `planets` holds the seven non-node grahas and their longitudes; node
/// entries are ignored.
pub fn kalsarp_dosha(rahu_lon: f64, ketu_lon: f64, planets: &[(Graha, f64)]) -> DoshaResult {
    let classical: Vec<(Graha, f64)> = planets
        .iter()
        .copied()
        .filter(|(g, _)| !g.is_node())
        .collect();
    if classical.is_empty() {
        return DoshaResult::absent("No planet positions to test against the Rahu-Ketu axis.");
    }

    let outside: Vec<&str> = classical
        .iter()
        .filter(|(_, lon)| !within_node_arc(*lon, rahu_lon, ketu_lon))
        .map(|(g, _)| g.english_name())
        .collect();

    if outside.is_empty() {
        DoshaResult::present(
            "All seven planets lie between Rahu and Ketu, forming Kalsarp Dosha.",
            Severity::High,
            &REMEDIES,
        )
    } else {
        DoshaResult::absent(format!(
            "Not all planets lie between Rahu and Ketu ({} outside the axis).",
            outside.join(", ")
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::SAPTA_GRAHAS;

    fn planets_at(lons: [f64; 7]) -> Vec<(Graha, f64)> {
        SAPTA_GRAHAS.iter().copied().zip(lons).collect()
    }

    #[test]
    fn hemmed_between_nodes() {
        let p = planets_at([20.0, 40.0, 60.0, 80.0, 100.0, 150.0, 189.0]);
        let r = kalsarp_dosha(10.0, 190.0, &p);
        assert!(r.has_dosha);
        assert_eq!(r.severity, Some(Severity::High));
    }

    #[test]
    fn one_planet_escapes() {
        let p = planets_at([20.0, 40.0, 60.0, 80.0, 100.0, 150.0, 200.0]);
        let r = kalsarp_dosha(10.0, 190.0, &p);
        assert!(!r.has_dosha);
        assert!(r.description.contains("Saturn"));
    }

    #[test]
    fn arc_ends_exclusive() {
        let p = planets_at([10.0, 40.0, 60.0, 80.0, 100.0, 150.0, 180.0]);
        assert!(!kalsarp_dosha(10.0, 190.0, &p).has_dosha);
    }

    #[test]
    fn wrapping_arc_when_rahu_greater() {
        // Rahu 300, Ketu 120: arc covers (300, 360) and [0, 120)
        let p = planets_at([310.0, 350.0, 5.0, 30.0, 60.0, 90.0, 119.0]);
        assert!(kalsarp_dosha(300.0, 120.0, &p).has_dosha);
        let p = planets_at([310.0, 350.0, 5.0, 30.0, 60.0, 90.0, 200.0]);
        assert!(!kalsarp_dosha(300.0, 120.0, &p).has_dosha);
    }

    #[test]
    fn nodes_in_list_are_ignored() {
        let mut p = planets_at([20.0, 40.0, 60.0, 80.0, 100.0, 150.0, 189.0]);
        p.push((Graha::Rahu, 10.0));
        p.push((Graha::Ketu, 190.0));
        assert!(kalsarp_dosha(10.0, 190.0, &p).has_dosha);
    }

    #[test]
    fn no_classical_planets_has_own_message() {
        for p in [vec![], vec![(Graha::Rahu, 10.0), (Graha::Ketu, 190.0)]] {
            let r = kalsarp_dosha(10.0, 190.0, &p);
            assert!(!r.has_dosha);
            assert!(!r.description.contains("( outside"), "{}", r.description);
            assert!(r.description.contains("No planet positions"));
        }
    }
}
