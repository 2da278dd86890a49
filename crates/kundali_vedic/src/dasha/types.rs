//! Core dasha data structures.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;

/// Year length used to convert dasha years to days.
pub const DAYS_PER_YEAR: f64 = 365.25;

/// Nesting depth of a period.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DashaLevel {
    Maha,
    Antar,
    Pratyantar,
}

impl DashaLevel {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Maha => "Mahadasha",
            Self::Antar => "Antardasha",
            Self::Pratyantar => "Pratyantardasha",
        }
    }

    /// Next deeper level, if any.
    pub const fn child_level(self) -> Option<Self> {
        match self {
            Self::Maha => Some(Self::Antar),
            Self::Antar => Some(Self::Pratyantar),
            Self::Pratyantar => None,
        }
    }
}

/// A single dasha period.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub lord: Graha,
    pub level: DashaLevel,
    /// JD UTC, inclusive.
    pub start_jd: f64,
    /// JD UTC, exclusive.
    pub end_jd: f64,
}

impl DashaPeriod {
    pub fn duration_days(&self) -> f64 {
        self.end_jd - self.start_jd
    }

    pub fn duration_years(&self) -> f64 {
        self.duration_days() / DAYS_PER_YEAR
    }

    /// `start <= jd < end`.
    pub fn contains(&self, jd: f64) -> bool {
        self.start_jd <= jd && jd < self.end_jd
    }
}

/// A period with its materialised sub-periods.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaNode {
    pub period: DashaPeriod,
    pub children: Vec<DashaNode>,
}

/// Active period chain at one instant, outermost first.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaSnapshot {
    pub query_jd: f64,
    pub periods: Vec<DashaPeriod>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn level_chain() {
        assert_eq!(DashaLevel::Maha.child_level(), Some(DashaLevel::Antar));
        assert_eq!(DashaLevel::Antar.child_level(), Some(DashaLevel::Pratyantar));
        assert_eq!(DashaLevel::Pratyantar.child_level(), None);
    }

    #[test]
    fn contains_is_half_open() {
        let p = DashaPeriod {
            lord: Graha::Ketu,
            level: DashaLevel::Maha,
            start_jd: 10.0,
            end_jd: 20.0,
        };
        assert!(p.contains(10.0));
        assert!(p.contains(19.999));
        assert!(!p.contains(20.0));
        assert!((p.duration_years() - 10.0 / DAYS_PER_YEAR).abs() < 1e-15);
    }
}
