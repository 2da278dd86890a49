//! Vimshottari wheel: lord order and period lengths.

use crate::graha::Graha;

/// Lords in wheel order. Nakshatra `i` is ruled by `VIMSHOTTARI_LORDS[i % 9]`.
pub const VIMSHOTTARI_LORDS: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Full period of each lord in years, aligned with [`VIMSHOTTARI_LORDS`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Length of one complete cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Position of a graha in the wheel.
pub const fn wheel_index(graha: Graha) -> usize {
    match graha {
        Graha::Ketu => 0,
        Graha::Shukra => 1,
        Graha::Surya => 2,
        Graha::Chandra => 3,
        Graha::Mangal => 4,
        Graha::Rahu => 5,
        Graha::Guru => 6,
        Graha::Shani => 7,
        Graha::Buddh => 8,
    }
}

/// Full period of a lord in years.
pub const fn vimshottari_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[wheel_index(graha)]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn total_is_120() {
        let sum: f64 = VIMSHOTTARI_YEARS.iter().sum();
        assert!((sum - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn wheel_index_matches_order() {
        for (i, g) in VIMSHOTTARI_LORDS.iter().enumerate() {
            assert_eq!(wheel_index(*g), i);
        }
    }

    #[test]
    fn known_lengths() {
        assert_eq!(vimshottari_years(Graha::Shukra), 20.0);
        assert_eq!(vimshottari_years(Graha::Surya), 6.0);
        assert_eq!(vimshottari_years(Graha::Buddh), 17.0);
    }
}
