//! Scenario tests for the dosha rules.

use kundali_vedic::dosha::{
    SadeSatiPhase, Severity, kalsarp_dosha, mangal_dosha, pitra_dosha, sade_sati,
};
use kundali_vedic::{Graha, Rashi, SAPTA_GRAHAS, whole_sign_house};

#[test]
fn mangal_from_house_assignment() {
    // Ascendant Mesha, Mars in Tula -> 7th house
    let house = whole_sign_house(Rashi::Tula, Rashi::Mesha);
    assert_eq!(house, 7);
    let r = mangal_dosha(house);
    assert!(r.has_dosha);
    assert_eq!(r.severity, Some(Severity::Medium));
}

#[test]
fn mangal_absent_in_third() {
    let r = mangal_dosha(3);
    assert!(!r.has_dosha);
    assert!(r.severity.is_none());
}

#[test]
fn kalsarp_scenario() {
    let inside: Vec<(Graha, f64)> = SAPTA_GRAHAS
        .iter()
        .copied()
        .zip([15.0, 35.0, 55.0, 95.0, 120.0, 160.0, 185.0])
        .collect();
    assert!(kalsarp_dosha(10.0, 190.0, &inside).has_dosha);

    let mut moved = inside.clone();
    moved[3].1 = 200.0;
    assert!(!kalsarp_dosha(10.0, 190.0, &moved).has_dosha);
}

#[test]
fn pitra_scenario() {
    assert!(pitra_dosha(100.0, 105.0, 300.0, 120.0).has_dosha);
    assert!(!pitra_dosha(100.0, 130.0, 300.0, 120.0).has_dosha);
}

#[test]
fn sade_sati_scenario() {
    let s = sade_sati(Rashi::Simha, Rashi::Karka, 2024.0);
    assert!(s.is_active);
    assert_eq!(s.phase, Some(SadeSatiPhase::Rising));
}

#[test]
fn results_serialize_with_severity_names() {
    let r = mangal_dosha(1);
    assert_eq!(r.severity.map(Severity::name), Some("High"));
}
