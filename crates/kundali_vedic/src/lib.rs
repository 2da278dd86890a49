//! Vedic classification and rule engine.
//!
//! Pure functions over sidereal longitudes:
//! - ayanamsa and the tropical/sidereal boundary
//! - rashi, nakshatra and pada classification
//! - lagna (ascendant) and Whole-Sign houses
//! - navamsa (D9) and vargottama
//! - combustion
//! - Vimshottari dasha
//! - Mangal, Kalsarp, Pitra and Sade Sati doshas

pub mod amsha;
pub mod ayanamsha;
pub mod bhava;
pub mod combustion;
pub mod dasha;
pub mod dosha;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod nakshatra;
pub mod rashi;
pub mod util;

pub use amsha::{NAVAMSA_SPAN, NavamsaConvention, NavamsaInfo, is_vargottama, navamsa};
pub use ayanamsha::{ayanamsa_at_jd, ayanamsa_deg, tropical_to_sidereal};
pub use bhava::{Bhava, house_rashi, whole_sign_house, whole_sign_houses};
pub use combustion::{combustion_orb_deg, is_combust};
pub use error::VedicError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use lagna::{
    DEFAULT_POLAR_LIMIT_DEG, LagnaPoint, OBLIQUITY_DEG, lagna, tropical_ascendant_deg,
    validate_polar_limit,
};
pub use nakshatra::{
    ALL_NAKSHATRAS, NAKSHATRA_SPAN_27, Nakshatra, NakshatraInfo, PADA_SPAN,
    nakshatra_from_longitude,
};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, deg_to_dms, dms_to_deg, rashi_from_longitude};
pub use util::{QUARTERS, angular_separation, normalize_360, quarter_index, quarter_start_deg};
