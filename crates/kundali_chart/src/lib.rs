//! Birth chart assembly.
//!
//! [`compute`] runs the whole pipeline for one birth instant and place:
//! ephemeris, ayanamsa, classification, ascendant, Whole-Sign houses,
//! navamsa, combustion, Vimshottari dasha and the four doshas. The result
//! is an immutable [`CompleteBirthChart`] that serializes with serde.
//!
//! ```no_run
//! use chrono::{TimeZone, Utc};
//! use kundali_chart::{BirthDetails, ChartOptions, compute};
//!
//! let birth = BirthDetails::new(
//!     Utc.with_ymd_and_hms(1990, 5, 15, 6, 30, 0).unwrap(),
//!     28.6139,
//!     77.2090,
//! );
//! let as_of = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
//! let chart = compute(&birth, as_of, &ChartOptions::default()).unwrap();
//! println!("{} lagna", chart.ascendant.sign.name);
//! ```

pub mod assemble;
pub mod error;
pub mod input;
pub mod types;

pub use assemble::{compute, compute_now, compute_with};
pub use error::{ChartError, ComputationError, ValidationError};
pub use input::{BirthDetails, ChartOptions};
pub use types::{
    AscendantInfo, ChartMeta, CompleteBirthChart, DashaSpan, Doshas, EnhancedPlanetPosition,
    House, NakshatraRef, PlanetPosition, SignInfo, VimshottariDasha,
};
