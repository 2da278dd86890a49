//! Chart errors: caller mistakes vs. failures of the computation itself.

use kundali_ephem::EphemerisError;
use kundali_time::TimeError;
use kundali_vedic::VedicError;
use thiserror::Error;

/// Malformed or out-of-range input. Never retryable.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ValidationError {
    #[error("{0} is not a finite number")]
    NonFinite(&'static str),
    #[error("latitude {0} is outside [-90, 90]")]
    LatitudeOutOfRange(f64),
    #[error("longitude {0} is outside [-180, 180]")]
    LongitudeOutOfRange(f64),
    #[error("as-of instant precedes the birth instant")]
    AsOfBeforeBirth,
    #[error("invalid option: {0}")]
    InvalidOption(String),
}

/// The engine cannot produce a value for valid-looking input.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum ComputationError {
    #[error("ephemeris: {0}")]
    Ephemeris(#[from] EphemerisError),
    #[error("ascendant undefined at latitude {lat_deg} (polar limit {limit_deg})")]
    PolarSingularity { lat_deg: f64, limit_deg: f64 },
    #[error("no ephemeris state for {0}")]
    MissingBody(&'static str),
    #[error("vedic: {0}")]
    Vedic(VedicError),
    #[error("time: {0}")]
    Time(#[from] TimeError),
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ChartError {
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),
    #[error("computation error: {0}")]
    Computation(#[from] ComputationError),
}

impl From<EphemerisError> for ChartError {
    fn from(e: EphemerisError) -> Self {
        Self::Computation(ComputationError::Ephemeris(e))
    }
}

impl From<TimeError> for ChartError {
    fn from(e: TimeError) -> Self {
        Self::Computation(ComputationError::Time(e))
    }
}

impl From<VedicError> for ChartError {
    fn from(e: VedicError) -> Self {
        match e {
            VedicError::AsOfBeforeBirth => ValidationError::AsOfBeforeBirth.into(),
            VedicError::InvalidLatitude(lat) => ValidationError::LatitudeOutOfRange(lat).into(),
            VedicError::NonFinite(what) => ValidationError::NonFinite(what).into(),
            VedicError::InvalidPolarLimit(limit) => {
                ValidationError::InvalidOption(format!("polar latitude limit {limit}")).into()
            }
            VedicError::UnknownConvention(name) => {
                ValidationError::InvalidOption(format!("navamsa convention {name}")).into()
            }
            VedicError::PolarSingularity { lat_deg, limit_deg } => {
                ComputationError::PolarSingularity { lat_deg, limit_deg }.into()
            }
            other => ComputationError::Vedic(other).into(),
        }
    }
}

impl ChartError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
