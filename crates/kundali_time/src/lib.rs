//! Time conversions for the chart engine.
//!
//! This crate provides:
//! - Julian Date <-> proleptic Gregorian calendar conversion (Meeus Ch. 7)
//! - `chrono::DateTime<Utc>` <-> Julian Date bridging
//! - Earth Rotation Angle, GMST and local sidereal time
//!
//! All instants are UTC. The engine uses JD(UTC) directly as its time
//! argument; there is no leap-second or delta-T handling.

pub mod error;
pub mod julian;
pub mod sidereal;

use chrono::{DateTime, NaiveDateTime, Utc};

pub use error::TimeError;
pub use julian::{
    DAYS_PER_CENTURY, J2000_JD, SECONDS_PER_DAY, UNIX_EPOCH_JD, calendar_to_jd, datetime_to_jd,
    jd_to_calendar, jd_to_centuries, jd_to_datetime, jd_to_julian_year,
};
pub use sidereal::{earth_rotation_angle_deg, gmst_deg, local_sidereal_time_deg};

/// Parse a UTC timestamp.
///
/// Accepts RFC 3339 (`1990-05-15T06:30:00Z`, offsets are converted to UTC)
/// and the bare form `1990-05-15T06:30:00`, which is taken as UTC.
pub fn parse_utc(s: &str) -> Result<DateTime<Utc>, TimeError> {
    let s = s.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S%.f")
        .or_else(|_| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M:%S%.f"))
        .map(|naive| naive.and_utc())
        .map_err(|e| TimeError::Parse(format!("'{s}': {e}")))
}
