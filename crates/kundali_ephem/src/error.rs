//! Ephemeris errors.

use thiserror::Error;

/// Failures of the ephemeris model.
#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum EphemerisError {
    /// Requested instant is outside the model's validity window.
    #[error("julian date {jd} is outside the ephemeris range [{from}, {until})")]
    EpochOutOfRange { jd: f64, from: f64, until: f64 },
    /// Iterative solver did not converge.
    #[error("no convergence: {0}")]
    NoConvergence(&'static str),
}
