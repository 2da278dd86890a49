//! Nakshatra (lunar mansion) classification.
//!
//! The ecliptic is divided into 27 equal nakshatras of 13 deg 20' each,
//! every one split into 4 padas of 3 deg 20'. Each nakshatra carries a
//! presiding deity and a Vimshottari lord; the lords repeat every nine
//! nakshatras (Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh).

use serde::{Deserialize, Serialize};

use crate::dasha::data::VIMSHOTTARI_LORDS;
use crate::graha::Graha;
use crate::util::{normalize_360, quarter_index, quarter_start_deg};

/// Span of one nakshatra: 360/27 = 13.3333... degrees.
pub const NAKSHATRA_SPAN_27: f64 = 360.0 / 27.0;

/// Span of one pada: 13.3333.../4 = 3.3333... degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN_27 / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    PurvaPhalguni,
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    PurvaAshadha,
    UttaraAshadha,
    Shravana,
    Dhanishtha,
    Shatabhisha,
    PurvaBhadrapada,
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishtha,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

const NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishtha",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

const DEITIES: [&str; 27] = [
    "Ashwini Kumaras",
    "Yama",
    "Agni",
    "Brahma",
    "Soma",
    "Rudra",
    "Aditi",
    "Brihaspati",
    "Sarpas",
    "Pitris",
    "Bhaga",
    "Aryaman",
    "Savitr",
    "Vishvakarma",
    "Vayu",
    "Indra-Agni",
    "Mitra",
    "Indra",
    "Nirriti",
    "Apas",
    "Vishvedevas",
    "Vishnu",
    "Vasus",
    "Varuna",
    "Aja Ekapada",
    "Ahir Budhnya",
    "Pushan",
];

impl Nakshatra {
    pub const fn name(self) -> &'static str {
        NAMES[self as usize]
    }

    /// 0-based index (Ashwini=0 .. Revati=26).
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based number (Ashwini=1 .. Revati=27).
    pub const fn number(self) -> u8 {
        self as u8 + 1
    }

    /// Presiding deity.
    pub const fn deity(self) -> &'static str {
        DEITIES[self as usize]
    }

    /// Vimshottari dasha lord.
    pub const fn lord(self) -> Graha {
        VIMSHOTTARI_LORDS[(self as usize) % 9]
    }

    /// Start longitude of this nakshatra.
    pub fn start_deg(self) -> f64 {
        quarter_start_deg(self.index() * 4)
    }
}

/// Nakshatra classification of a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// 0-based index (0 = Ashwini).
    pub nakshatra_index: u8,
    /// Pada 1..=4.
    pub pada: u8,
    /// Degrees elapsed within the nakshatra [0, 13.333...).
    pub degrees_in_nakshatra: f64,
    /// Degrees elapsed within the pada [0, 3.333...).
    pub degrees_in_pada: f64,
}

/// Determine nakshatra and pada from sidereal ecliptic longitude.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let q = quarter_index(lon);
    let nakshatra = ALL_NAKSHATRAS[usize::from(q / 4)];
    NakshatraInfo {
        nakshatra,
        nakshatra_index: q / 4,
        pada: q % 4 + 1,
        degrees_in_nakshatra: (lon - nakshatra.start_deg()).max(0.0),
        degrees_in_pada: (lon - quarter_start_deg(q)).max(0.0),
    }
}
