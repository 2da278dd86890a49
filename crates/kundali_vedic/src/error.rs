//! Error types for Vedic calculations.

use thiserror::Error;

/// Errors from Vedic calculations.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum VedicError {
    /// An input angle or date was NaN or infinite.
    #[error("non-finite input: {0}")]
    NonFinite(&'static str),
    /// Latitude outside [-90, 90].
    #[error("latitude {0} is outside [-90, 90]")]
    InvalidLatitude(f64),
    /// Ascendant is undefined this close to a pole.
    #[error("latitude {lat_deg} exceeds the polar limit of {limit_deg} degrees")]
    PolarSingularity { lat_deg: f64, limit_deg: f64 },
    /// Polar limit must lie in (0, 90).
    #[error("polar latitude limit {0} is outside (0, 90)")]
    InvalidPolarLimit(f64),
    /// Unrecognised navamsa convention name.
    #[error("unknown navamsa convention: {0}")]
    UnknownConvention(String),
    /// Dasha query instant precedes the birth instant.
    #[error("as-of instant precedes birth")]
    AsOfBeforeBirth,
    /// As-of instant is further from birth than the dasha engine will extend.
    #[error("as-of instant lies more than {max_cycles} Vimshottari cycles after birth")]
    DashaRangeExceeded { max_cycles: usize },
    /// No period at some level contains the query instant.
    #[error("no active {0} period")]
    NoActivePeriod(&'static str),
}
