//! Vimshottari dasha: the 120-year nakshatra-based planetary period system.
//!
//! The Moon's birth nakshatra selects the first lord and how much of its
//! period remains; the remaining lords follow the fixed wheel. Every
//! period subdivides into nine children in the same proportions, starting
//! from its own lord (Maha -> Antar -> Pratyantar).

pub mod balance;
pub mod data;
pub mod subperiod;
pub mod types;
pub mod vimshottari;

pub use balance::{BirthBalance, nakshatra_birth_balance};
pub use data::{
    VIMSHOTTARI_LORDS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, vimshottari_years, wheel_index,
};
pub use subperiod::{cyclic_sequence, proportional_children, snap_last_child_end};
pub use types::{DAYS_PER_YEAR, DashaLevel, DashaNode, DashaPeriod, DashaSnapshot};
pub use vimshottari::{
    MAX_CYCLES, Vimshottari, find_active_period, maha_dashas, maha_dashas_covering, vimshottari,
    vimshottari_hierarchy, vimshottari_snapshot,
};
