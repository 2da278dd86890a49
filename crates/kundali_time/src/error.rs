//! Error types for time conversions.

use thiserror::Error;

/// Errors from calendar parsing or Julian Date conversion.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum TimeError {
    /// Timestamp text could not be parsed.
    #[error("invalid timestamp {0}")]
    Parse(String),
    /// Julian Date is NaN or infinite.
    #[error("julian date is not finite")]
    NonFinite,
    /// Julian Date cannot be represented as a calendar instant.
    #[error("julian date {jd} is outside the representable range")]
    OutOfRange { jd: f64 },
}
