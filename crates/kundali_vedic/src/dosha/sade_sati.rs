//! Sade Sati: Saturn's 7.5-year transit over the 12th, 1st and 2nd signs
//! from the natal Moon.
//!
//! Saturn spends about 2.5 years in a sign, so the next onset is estimated
//! as 2.5 years per sign Saturn still has to travel to reach the 12th
//! from the Moon.

use super::types::{SadeSatiPhase, SadeSatiStatus, YearWindow};
use crate::rashi::Rashi;

/// Approximate years Saturn spends in one sign.
pub const YEARS_PER_SIGN: f64 = 2.5;

/// Length of a full Sade Sati.
pub const SADE_SATI_YEARS: f64 = 7.5;

/// Phase for Saturn transiting `saturn_rashi` over a natal Moon in `moon_rashi`.
pub const fn sade_sati_phase(moon_rashi: Rashi, saturn_rashi: Rashi) -> Option<SadeSatiPhase> {
    match (saturn_rashi.index() + 12 - moon_rashi.index()) % 12 {
        11 => Some(SadeSatiPhase::Rising),
        0 => Some(SadeSatiPhase::Peak),
        1 => Some(SadeSatiPhase::Setting),
        _ => None,
    }
}

/// Evaluate Sade Sati at `as_of_year` (fractional calendar year).
pub fn sade_sati(moon_rashi: Rashi, saturn_rashi: Rashi, as_of_year: f64) -> SadeSatiStatus {
    let offset = (saturn_rashi.index() + 12 - moon_rashi.index()) % 12;
    match sade_sati_phase(moon_rashi, saturn_rashi) {
        Some(phase) => {
            let signs_left = match phase {
                SadeSatiPhase::Rising => 3.0,
                SadeSatiPhase::Peak => 2.0,
                SadeSatiPhase::Setting => 1.0,
            };
            let end = as_of_year + YEARS_PER_SIGN * signs_left;
            SadeSatiStatus {
                is_active: true,
                phase: Some(phase),
                description: format!(
                    "Sade Sati is active ({} phase): Saturn transits {} over the natal Moon in {}; ends around {end:.1}.",
                    phase.name(),
                    saturn_rashi.name(),
                    moon_rashi.name()
                ),
                current_end_year: Some(end),
                next_window: None,
            }
        }
        None => {
            let steps = f64::from((11 + 12 - offset) % 12);
            let start_year = as_of_year + YEARS_PER_SIGN * steps;
            let end_year = start_year + SADE_SATI_YEARS;
            SadeSatiStatus {
                is_active: false,
                phase: None,
                description: format!(
                    "Sade Sati is not active. Next period expected around {start_year:.1} to {end_year:.1}."
                ),
                current_end_year: None,
                next_window: Some(YearWindow {
                    start_year,
                    end_year,
                }),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn leo_moon_saturn_in_cancer_is_rising() {
        let s = sade_sati(Rashi::Simha, Rashi::Karka, 2025.0);
        assert!(s.is_active);
        assert_eq!(s.phase, Some(SadeSatiPhase::Rising));
        assert!(s.next_window.is_none());
        assert!((s.current_end_year.unwrap() - 2032.5).abs() < 1e-9);
    }

    #[test]
    fn peak_and_setting() {
        assert_eq!(
            sade_sati_phase(Rashi::Simha, Rashi::Simha),
            Some(SadeSatiPhase::Peak)
        );
        assert_eq!(
            sade_sati_phase(Rashi::Simha, Rashi::Kanya),
            Some(SadeSatiPhase::Setting)
        );
        assert_eq!(
            sade_sati_phase(Rashi::Mesha, Rashi::Meena),
            Some(SadeSatiPhase::Rising)
        );
    }

    #[test]
    fn inactive_window() {
        // Saturn two signs after the Moon: 9 signs to go to the 12th
        let s = sade_sati(Rashi::Mesha, Rashi::Mithuna, 2020.0);
        assert!(!s.is_active);
        assert!(s.phase.is_none());
        let w = s.next_window.unwrap();
        assert!((w.start_year - 2042.5).abs() < 1e-9);
        assert!((w.end_year - 2050.0).abs() < 1e-9);
    }

    #[test]
    fn just_after_setting_waits_longest() {
        let s = sade_sati(Rashi::Mesha, Rashi::Mithuna, 0.0);
        let t = sade_sati(Rashi::Mesha, Rashi::Kumbha, 0.0);
        // Kumbha is the 11th from Mesha: one sign to go
        assert!((t.next_window.unwrap().start_year - 2.5).abs() < 1e-9);
        assert!(s.next_window.unwrap().start_year > t.next_window.unwrap().start_year);
    }
}
