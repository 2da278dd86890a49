//! Shared angle helpers.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs
    if r >= 360.0 { 0.0 } else { r }
}

/// Shortest-arc separation between two longitudes, in [0, 180].
pub fn angular_separation(a_deg: f64, b_deg: f64) -> f64 {
    let d = normalize_360(a_deg - b_deg);
    d.min(360.0 - d)
}

/// Number of 3 deg 20' quarters in the zodiac: 27 nakshatras of 4 padas,
/// which are also the 12 x 9 navamsa parts.
pub const QUARTERS: u8 = 108;

/// Start longitude of quarter `q`.
pub fn quarter_start_deg(q: u8) -> f64 {
    f64::from(q) * 360.0 / f64::from(QUARTERS)
}

/// Quarter 0..=107 holding a longitude in [0, 360).
///
/// A longitude equal to [`quarter_start_deg`]`(q)` belongs to quarter `q`.
pub fn quarter_index(lon: f64) -> u8 {
    let mut q = ((lon * f64::from(QUARTERS) / 360.0).floor().max(0.0) as u8).min(QUARTERS - 1);
    if q < QUARTERS - 1 && lon >= quarter_start_deg(q + 1) {
        q += 1;
    } else if q > 0 && lon < quarter_start_deg(q) {
        q -= 1;
    }
    q
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_basic() {
        assert!((normalize_360(0.0) - 0.0).abs() < 1e-15);
        assert!((normalize_360(360.0) - 0.0).abs() < 1e-15);
        assert!((normalize_360(-10.0) - 350.0).abs() < 1e-15);
        assert!((normalize_360(730.0) - 10.0).abs() < 1e-10);
    }

    #[test]
    fn normalize_tiny_negative_stays_in_range() {
        let r = normalize_360(-1e-18);
        assert!((0.0..360.0).contains(&r), "{r}");
    }

    #[test]
    fn quarter_starts_open_their_quarter() {
        for q in 0..QUARTERS {
            let start = quarter_start_deg(q);
            assert_eq!(quarter_index(start), q, "start of quarter {q} = {start}");
            if q > 0 {
                let before = start - 1e-9;
                assert_eq!(quarter_index(before), q - 1, "just before quarter {q}");
            }
        }
        assert_eq!(quarter_index(359.999_999_9), QUARTERS - 1);
    }

    #[test]
    fn separation_wraps() {
        assert!((angular_separation(355.0, 5.0) - 10.0).abs() < 1e-12);
        assert!((angular_separation(5.0, 355.0) - 10.0).abs() < 1e-12);
        assert!((angular_separation(100.0, 280.0) - 180.0).abs() < 1e-12);
        assert!(angular_separation(42.0, 42.0).abs() < 1e-12);
    }
}
