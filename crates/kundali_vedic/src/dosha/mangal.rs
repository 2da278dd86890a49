//! Mangal (Kuja) Dosha: Mars in houses 1, 2, 4, 7, 8 or 12 from the ascendant.

use super::ordinal;
use super::types::{DoshaResult, Severity};

/// Houses (from the ascendant) in which Mars forms the dosha.
pub const MANGAL_DOSHA_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

const REMEDIES: [&str; 3] = [
    "Recite the Hanuman Chalisa on Tuesdays",
    "Perform Kumbh Vivah before marriage",
    "Match with a partner who also has Mangal Dosha",
];

/// Severity for Mars in `house`, `None` outside the dosha houses.
pub const fn mangal_severity(house: u8) -> Option<Severity> {
    match house {
        1 | 4 => Some(Severity::High),
        2 | 7 | 12 => Some(Severity::Medium),
        8 => Some(Severity::Low),
        _ => None,
    }
}

fn house_effect(house: u8) -> &'static str {
    match house {
        1 => "affects temperament and self-expression in partnerships",
        2 => "affects family harmony and speech",
        4 => "disturbs domestic peace and emotional stability",
        7 => "directly affects marriage and partnerships",
        8 => "affects the longevity of the marital bond",
        12 => "affects expenses, bed comforts and marital intimacy",
        _ => "",
    }
}

/// Evaluate Mangal Dosha from the Whole-Sign house of Mars.
pub fn mangal_dosha(mars_house: u8) -> DoshaResult {
    match mangal_severity(mars_house) {
        Some(severity) => DoshaResult::present(
            format!(
                "Mars in the {} house {}.",
                ordinal(mars_house),
                house_effect(mars_house)
            ),
            severity,
            &REMEDIES,
        ),
        None => DoshaResult::absent(format!(
            "Mars in the {} house does not form Mangal Dosha.",
            ordinal(mars_house)
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seventh_house_is_medium() {
        let r = mangal_dosha(7);
        assert!(r.has_dosha);
        assert_eq!(r.severity, Some(Severity::Medium));
        assert!(r.description.contains("7th"));
        assert!(r.remedies.is_some());
    }

    #[test]
    fn severity_table() {
        assert_eq!(mangal_severity(1), Some(Severity::High));
        assert_eq!(mangal_severity(4), Some(Severity::High));
        assert_eq!(mangal_severity(2), Some(Severity::Medium));
        assert_eq!(mangal_severity(12), Some(Severity::Medium));
        assert_eq!(mangal_severity(8), Some(Severity::Low));
    }

    #[test]
    fn other_houses_clear() {
        for h in 1..=12u8 {
            let r = mangal_dosha(h);
            assert_eq!(r.has_dosha, MANGAL_DOSHA_HOUSES.contains(&h), "house {h}");
            if !r.has_dosha {
                assert!(r.severity.is_none());
                assert!(r.remedies.is_none());
                assert!(!r.description.is_empty());
            }
        }
    }
}
