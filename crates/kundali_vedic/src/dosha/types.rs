//! Dosha result types.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
}

impl Severity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// Outcome of one dosha rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DoshaResult {
    pub has_dosha: bool,
    pub description: String,
    pub severity: Option<Severity>,
    pub remedies: Option<Vec<String>>,
}

impl DoshaResult {
    pub(crate) fn absent(description: impl Into<String>) -> Self {
        Self {
            has_dosha: false,
            description: description.into(),
            severity: None,
            remedies: None,
        }
    }

    pub(crate) fn present(
        description: impl Into<String>,
        severity: Severity,
        remedies: &[&str],
    ) -> Self {
        Self {
            has_dosha: true,
            description: description.into(),
            severity: Some(severity),
            remedies: Some(remedies.iter().map(|r| (*r).to_string()).collect()),
        }
    }
}

/// Stage of the 7.5-year Saturn transit over the natal Moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SadeSatiPhase {
    /// Saturn in the 12th sign from the Moon.
    Rising,
    /// Saturn over the Moon's sign.
    Peak,
    /// Saturn in the 2nd sign from the Moon.
    Setting,
}

impl SadeSatiPhase {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Rising => "Rising",
            Self::Peak => "Peak",
            Self::Setting => "Setting",
        }
    }
}

/// Span of (fractional) calendar years.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct YearWindow {
    pub start_year: f64,
    pub end_year: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SadeSatiStatus {
    pub is_active: bool,
    pub phase: Option<SadeSatiPhase>,
    pub description: String,
    /// Approximate end of the running period, when active.
    pub current_end_year: Option<f64>,
    /// Approximate next period, when inactive.
    pub next_window: Option<YearWindow>,
}
