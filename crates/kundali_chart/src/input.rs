//! Validated computation inputs.

use chrono::{DateTime, Utc};
use kundali_vedic::{DEFAULT_POLAR_LIMIT_DEG, NavamsaConvention};
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Birth instant (already converted to UTC by the caller) and place.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BirthDetails {
    pub datetime_utc: DateTime<Utc>,
    /// Geographic latitude, degrees, north positive.
    pub latitude_deg: f64,
    /// Geographic longitude, degrees, east positive.
    pub longitude_deg: f64,
}

impl BirthDetails {
    pub fn new(datetime_utc: DateTime<Utc>, latitude_deg: f64, longitude_deg: f64) -> Self {
        Self {
            datetime_utc,
            latitude_deg,
            longitude_deg,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if !self.latitude_deg.is_finite() {
            return Err(ValidationError::NonFinite("latitude"));
        }
        if !self.longitude_deg.is_finite() {
            return Err(ValidationError::NonFinite("longitude"));
        }
        if !(-90.0..=90.0).contains(&self.latitude_deg) {
            return Err(ValidationError::LatitudeOutOfRange(self.latitude_deg));
        }
        if !(-180.0..=180.0).contains(&self.longitude_deg) {
            return Err(ValidationError::LongitudeOutOfRange(self.longitude_deg));
        }
        Ok(())
    }
}

/// Tunables of the computation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChartOptions {
    pub navamsa: NavamsaConvention,
    /// Maximum |latitude| for which an ascendant is computed, in (0, 90).
    pub polar_limit_deg: f64,
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            navamsa: NavamsaConvention::default(),
            polar_limit_deg: DEFAULT_POLAR_LIMIT_DEG,
        }
    }
}

impl ChartOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        let l = self.polar_limit_deg;
        if l.is_finite() && l > 0.0 && l < 90.0 {
            Ok(())
        } else {
            Err(ValidationError::InvalidOption(format!(
                "polar latitude limit {l} must lie in (0, 90)"
            )))
        }
    }
}
