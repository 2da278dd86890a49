//! Serializable output contract of [`compute`](crate::compute).
//!
//! Field names are camelCase on the wire so that stored charts stay
//! readable by the display and persistence collaborators.

use chrono::{DateTime, Utc};
use kundali_vedic::dasha::DashaLevel;
use kundali_vedic::dosha::{DoshaResult, SadeSatiStatus};
use kundali_vedic::{Dms, Graha, Nakshatra, NavamsaConvention, Rashi};
use serde::{Deserialize, Serialize};

/// One of the twelve signs, as shown to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SignInfo {
    /// 1 = Mesha .. 12 = Meena.
    pub id: u8,
    pub rashi: Rashi,
    pub name: String,
    pub western_name: String,
    pub lord: Graha,
}

impl From<Rashi> for SignInfo {
    fn from(rashi: Rashi) -> Self {
        Self {
            id: rashi.number(),
            rashi,
            name: rashi.name().to_string(),
            western_name: rashi.western_name().to_string(),
            lord: rashi.lord(),
        }
    }
}

/// One of the 27 nakshatras, as shown to consumers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NakshatraRef {
    /// 1 = Ashwini .. 27 = Revati.
    pub id: u8,
    pub nakshatra: Nakshatra,
    pub name: String,
    pub lord: Graha,
    pub deity: String,
}

impl From<Nakshatra> for NakshatraRef {
    fn from(nakshatra: Nakshatra) -> Self {
        Self {
            id: nakshatra.number(),
            nakshatra,
            name: nakshatra.name().to_string(),
            lord: nakshatra.lord(),
            deity: nakshatra.deity().to_string(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanetPosition {
    pub graha: Graha,
    pub name: String,
    pub full_name: String,
    pub tropical_longitude: f64,
    /// [0, 360).
    pub sidereal_longitude: f64,
    pub latitude: f64,
    /// AU; zero for the lunar nodes.
    pub distance_au: f64,
    pub speed_deg_per_day: f64,
    pub is_retrograde: bool,
    pub sign: SignInfo,
    /// [0, 30).
    pub degree_in_sign: f64,
    pub dms: Dms,
    pub nakshatra: NakshatraRef,
    /// 1..=4.
    pub pada: u8,
    pub nakshatra_lord: Graha,
}

/// Base position plus its D9 and combustion attributes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnhancedPlanetPosition {
    #[serde(flatten)]
    pub position: PlanetPosition,
    pub navamsa_sign: SignInfo,
    pub navamsa_degree: f64,
    pub is_vargottama: bool,
    pub is_combust: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AscendantInfo {
    pub sign: SignInfo,
    pub degree_in_sign: f64,
    pub sidereal_longitude: f64,
    pub tropical_longitude: f64,
    pub nakshatra: NakshatraRef,
    pub pada: u8,
    pub dms: Dms,
}

/// Whole-Sign house with its occupants in planet order.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    pub number: u8,
    pub sign: SignInfo,
    pub planets: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DashaSpan {
    pub planet: Graha,
    pub level: DashaLevel,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub duration_years: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VimshottariDasha {
    pub birth_nakshatra: NakshatraRef,
    pub birth_lord: Graha,
    pub degree_in_nakshatra: f64,
    pub balance_years: f64,
    pub current_maha: DashaSpan,
    pub current_antar: DashaSpan,
    pub current_pratyantar: DashaSpan,
    /// Antar-dashas of the current maha-dasha.
    pub antar_dashas: Vec<DashaSpan>,
    pub all_maha_dashas: Vec<DashaSpan>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Doshas {
    pub mangal: DoshaResult,
    pub kalsarp: DoshaResult,
    pub pitra: DoshaResult,
    pub sade_sati: SadeSatiStatus,
}

/// Inputs and intermediate quantities, for auditing a stored chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartMeta {
    pub birth: DateTime<Utc>,
    pub as_of: DateTime<Utc>,
    pub latitude_deg: f64,
    pub longitude_deg: f64,
    pub jd_utc: f64,
    pub ayanamsa_deg: f64,
    pub lst_deg: f64,
    pub navamsa_convention: NavamsaConvention,
    pub ephemeris: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CompleteBirthChart {
    pub meta: ChartMeta,
    pub ascendant: AscendantInfo,
    /// Surya, Chandra, Mangal, Buddh, Guru, Shukra, Shani, Rahu, Ketu.
    pub planets: Vec<EnhancedPlanetPosition>,
    pub houses: Vec<House>,
    pub dasha: VimshottariDasha,
    pub doshas: Doshas,
}

impl CompleteBirthChart {
    pub fn planet(&self, graha: Graha) -> Option<&EnhancedPlanetPosition> {
        self.planets.iter().find(|p| p.position.graha == graha)
    }

    /// House (1..=12) occupied by `graha`.
    pub fn house_of(&self, graha: Graha) -> Option<u8> {
        let name = graha.name();
        self.houses
            .iter()
            .find(|h| h.planets.iter().any(|p| p == name))
            .map(|h| h.number)
    }
}
