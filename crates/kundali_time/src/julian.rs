//! Julian Date <-> calendar conversion.
//!
//! Meeus, "Astronomical Algorithms" (2nd ed), Chapter 7. The Gregorian
//! century correction is applied unconditionally, so every date is read
//! as proleptic Gregorian.

use chrono::{DateTime, Datelike, Timelike, Utc};

use crate::error::TimeError;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days in a Julian century.
pub const DAYS_PER_CENTURY: f64 = 36_525.0;

/// Seconds in a day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Date of 1970-01-01 00:00 UTC.
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

/// Convert a proleptic Gregorian date to a Julian Date.
///
/// `day` may carry a fractional part for the time of day
/// (e.g. `1.5` = noon on the first of the month).
pub fn calendar_to_jd(year: i32, month: u32, day: f64) -> f64 {
    let (y, m) = if month <= 2 {
        (year - 1, month + 12)
    } else {
        (year, month)
    };
    let y = y as f64;
    let m = m as f64;
    let a = (y / 100.0).floor();
    let b = 2.0 - a + (a / 4.0).floor();
    (365.25 * (y + 4716.0)).floor() + (30.6001 * (m + 1.0)).floor() + day + b - 1524.5
}

/// Convert a Julian Date to `(year, month, day_with_fraction)`.
pub fn jd_to_calendar(jd: f64) -> (i32, u32, f64) {
    let jd = jd + 0.5;
    let z = jd.floor();
    let f = jd - z;
    let alpha = ((z - 1_867_216.25) / 36_524.25).floor();
    let a = z + 1.0 + alpha - (alpha / 4.0).floor();
    let b = a + 1524.0;
    let c = ((b - 122.1) / 365.25).floor();
    let d = (365.25 * c).floor();
    let e = ((b - d) / 30.6001).floor();

    let day = b - d - (30.6001 * e).floor() + f;
    let month = if e < 14.0 { e - 1.0 } else { e - 13.0 };
    let year = if month > 2.0 { c - 4716.0 } else { c - 4715.0 };
    (year as i32, month as u32, day)
}

/// Julian centuries elapsed since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_CENTURY
}

/// Decimal Julian year (J2000.0 = 2000.0).
pub fn jd_to_julian_year(jd: f64) -> f64 {
    2000.0 + (jd - J2000_JD) / 365.25
}

/// Julian Date of a UTC instant.
pub fn datetime_to_jd(dt: &DateTime<Utc>) -> f64 {
    let seconds =
        dt.num_seconds_from_midnight() as f64 + dt.nanosecond() as f64 * 1e-9;
    calendar_to_jd(dt.year(), dt.month(), dt.day() as f64 + seconds / SECONDS_PER_DAY)
}

/// UTC instant of a Julian Date, rounded to the millisecond.
pub fn jd_to_datetime(jd: f64) -> Result<DateTime<Utc>, TimeError> {
    if !jd.is_finite() {
        return Err(TimeError::NonFinite);
    }
    let millis = ((jd - UNIX_EPOCH_JD) * SECONDS_PER_DAY * 1000.0).round();
    if millis.abs() >= i64::MAX as f64 {
        return Err(TimeError::OutOfRange { jd });
    }
    DateTime::from_timestamp_millis(millis as i64).ok_or(TimeError::OutOfRange { jd })
}
