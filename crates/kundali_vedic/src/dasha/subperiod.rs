//! Proportional sub-period generation.
//!
//! A parent of any length splits into nine children, starting from the
//! parent's own lord, each taking `lord_years / 120` of the parent.

use super::data::{VIMSHOTTARI_LORDS, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, wheel_index};
use super::types::DashaPeriod;
use crate::graha::Graha;

/// Snap the last child's end to the parent's end to absorb floating-point drift.
pub fn snap_last_child_end(children: &mut [DashaPeriod], parent_end_jd: f64) {
    if let Some(last) = children.last_mut() {
        last.end_jd = parent_end_jd;
    }
}

/// The nine (lord, years) pairs of the wheel, starting at `first`.
pub fn cyclic_sequence(first: Graha) -> [(Graha, f64); 9] {
    let start = wheel_index(first);
    std::array::from_fn(|i| {
        let idx = (start + i) % 9;
        (VIMSHOTTARI_LORDS[idx], VIMSHOTTARI_YEARS[idx])
    })
}

/// Children of `parent`, or an empty list at the deepest level.
///
/// Children are contiguous, start at the parent's start and end exactly
/// at the parent's end.
pub fn proportional_children(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let Some(level) = parent.level.child_level() else {
        return Vec::new();
    };
    let parent_days = parent.duration_days();
    let mut cursor = parent.start_jd;
    let mut children: Vec<DashaPeriod> = cyclic_sequence(parent.lord)
        .iter()
        .map(|&(lord, years)| {
            let end = cursor + parent_days * years / VIMSHOTTARI_TOTAL_YEARS;
            let child = DashaPeriod {
                lord,
                level,
                start_jd: cursor,
                end_jd: end,
            };
            cursor = end;
            child
        })
        .collect();
    snap_last_child_end(&mut children, parent.end_jd);
    children
}
