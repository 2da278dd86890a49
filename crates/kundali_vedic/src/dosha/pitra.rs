//! Pitra Dosha: the Sun afflicted by Saturn, Rahu or Ketu.

use super::types::{DoshaResult, Severity};
use crate::util::angular_separation;

/// Separation below which an affliction counts, degrees (exclusive).
pub const PITRA_ORB_DEG: f64 = 10.0;

const REMEDIES: [&str; 3] = [
    "Perform Pitra Tarpan during Pitru Paksha",
    "Offer water to the Sun at sunrise",
    "Feed Brahmins and the needy on Amavasya",
];

/// Evaluate Pitra Dosha from sidereal longitudes.
pub fn pitra_dosha(sun_lon: f64, saturn_lon: f64, rahu_lon: f64, ketu_lon: f64) -> DoshaResult {
    let reasons: Vec<String> = [("Saturn", saturn_lon), ("Rahu", rahu_lon), ("Ketu", ketu_lon)]
        .into_iter()
        .filter_map(|(name, lon)| {
            let sep = angular_separation(sun_lon, lon);
            (sep < PITRA_ORB_DEG).then(|| format!("Sun conjunct {name} ({sep:.1}° apart)"))
        })
        .collect();

    match reasons.len() {
        0 => DoshaResult::absent("The Sun is free from Saturn, Rahu and Ketu."),
        n => DoshaResult::present(
            format!("Pitra Dosha present: {}.", reasons.join("; ")),
            if n >= 2 { Severity::High } else { Severity::Medium },
            &REMEDIES,
        ),
    }
}
