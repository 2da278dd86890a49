//! Whole-Sign houses.
//!
//! House 1 is the whole sign holding the ascendant; house N is the sign
//! N-1 places after it. Only a body's sign matters for its house.

use serde::{Deserialize, Serialize};

use crate::graha::Graha;
use crate::rashi::{ALL_RASHIS, Rashi};

/// House number 1..=12 of a sign counted from the ascendant sign.
pub const fn whole_sign_house(rashi: Rashi, asc_rashi: Rashi) -> u8 {
    (rashi.index() + 12 - asc_rashi.index()) % 12 + 1
}

/// Sign occupying `house` (1..=12, wrapping) for an ascendant sign.
pub const fn house_rashi(house: u8, asc_rashi: Rashi) -> Rashi {
    asc_rashi.offset((house + 11) % 12)
}

/// One Whole-Sign house and its occupants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bhava {
    /// 1..=12.
    pub number: u8,
    pub rashi: Rashi,
    /// Grahas in the house, in placement order.
    pub occupants: Vec<Graha>,
}

/// All twelve houses with their occupants.
///
/// Every placement lands in exactly one house.
pub fn whole_sign_houses(asc_rashi: Rashi, placements: &[(Graha, Rashi)]) -> Vec<Bhava> {
    let mut houses: Vec<Bhava> = (1..=12u8)
        .map(|number| Bhava {
            number,
            rashi: house_rashi(number, asc_rashi),
            occupants: Vec::new(),
        })
        .collect();
    for &(graha, rashi) in placements {
        let h = whole_sign_house(rashi, asc_rashi);
        houses[(h - 1) as usize].occupants.push(graha);
    }
    houses
}
