//! Mean lunar nodes (Rahu/Ketu).
//!
//! Mean longitude of the Moon's ascending node, Meeus "Astronomical
//! Algorithms" 2nd ed., eq. 47.7, truncated at T^2. The nodes regress at a
//! nearly uniform rate, so their daily motion is reported as a fixed
//! negative constant.

use serde::{Deserialize, Serialize};

/// Daily motion of the mean node, degrees/day (always retrograde).
pub const MEAN_NODE_SPEED_DEG_PER_DAY: f64 = -0.052_953_9;

/// Mean Rahu (ascending node) tropical longitude in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0.
pub fn mean_rahu_deg(t: f64) -> f64 {
    (125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t * t).rem_euclid(360.0)
}

/// Mean Ketu (descending node), always Rahu + 180 deg.
pub fn mean_ketu_deg(t: f64) -> f64 {
    (mean_rahu_deg(t) + 180.0).rem_euclid(360.0)
}

/// Both mean nodes at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NodePair {
    pub rahu_deg: f64,
    pub ketu_deg: f64,
    pub speed_deg_per_day: f64,
}

/// Mean node pair at `t` Julian centuries since J2000.0.
pub fn mean_nodes(t: f64) -> NodePair {
    NodePair {
        rahu_deg: mean_rahu_deg(t),
        ketu_deg: mean_ketu_deg(t),
        speed_deg_per_day: MEAN_NODE_SPEED_DEG_PER_DAY,
    }
}
