//! Dosha detectors.
//!
//! Four independent, stateless predicates over already-classified chart
//! data. Each returns a result with a human-readable description whether
//! or not the dosha is present.

pub mod kalsarp;
pub mod mangal;
pub mod pitra;
pub mod sade_sati;
pub mod types;

pub use kalsarp::kalsarp_dosha;
pub use mangal::{MANGAL_DOSHA_HOUSES, mangal_dosha, mangal_severity};
pub use pitra::{PITRA_ORB_DEG, pitra_dosha};
pub use sade_sati::{SADE_SATI_YEARS, YEARS_PER_SIGN, sade_sati, sade_sati_phase};
pub use types::{DoshaResult, SadeSatiPhase, SadeSatiStatus, Severity, YearWindow};

/// English ordinal suffix for a house number ("1st", "2nd", ...).
pub(crate) fn ordinal(n: u8) -> String {
    let suffix = match (n % 10, n % 100) {
        (_, 11..=13) => "th",
        (1, _) => "st",
        (2, _) => "nd",
        (3, _) => "rd",
        _ => "th",
    };
    format!("{n}{suffix}")
}
