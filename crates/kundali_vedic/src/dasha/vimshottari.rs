//! Vimshottari timeline generation and queries.
//!
//! - Mahadasha timeline from birth (one or more 120-year cycles)
//! - Current Maha/Antar/Pratyantar at an as-of instant
//! - Full hierarchy of one cycle
//! - Snapshot that only materialises the active chain

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::balance::{BirthBalance, nakshatra_birth_balance};
use super::data::{VIMSHOTTARI_LORDS, VIMSHOTTARI_YEARS, wheel_index};
use super::subperiod::proportional_children;
use super::types::{DAYS_PER_YEAR, DashaLevel, DashaNode, DashaPeriod, DashaSnapshot};
use crate::error::VedicError;

/// Upper bound on appended 120-year cycles.
pub const MAX_CYCLES: usize = 100;

/// Index of the first period with `start <= jd < end`.
pub fn find_active_period(periods: &[DashaPeriod], jd: f64) -> Option<usize> {
    periods.iter().position(|p| p.contains(jd))
}

fn check_finite(birth_jd: f64, moon_sidereal_lon: f64) -> Result<(), VedicError> {
    if !birth_jd.is_finite() {
        return Err(VedicError::NonFinite("birth julian date"));
    }
    if !moon_sidereal_lon.is_finite() {
        return Err(VedicError::NonFinite("moon longitude"));
    }
    Ok(())
}

/// Append `count` full-length mahadashas continuing the wheel.
fn extend_wheel(periods: &mut Vec<DashaPeriod>, count: usize) {
    for _ in 0..count {
        let Some(last) = periods.last().copied() else {
            return;
        };
        let idx = (wheel_index(last.lord) + 1) % 9;
        periods.push(DashaPeriod {
            lord: VIMSHOTTARI_LORDS[idx],
            level: DashaLevel::Maha,
            start_jd: last.end_jd,
            end_jd: last.end_jd + VIMSHOTTARI_YEARS[idx] * DAYS_PER_YEAR,
        });
    }
}

/// One cycle of nine mahadashas from birth.
///
/// The first runs for the birth balance, the others for their full length.
pub fn maha_dashas(birth_jd: f64, moon_sidereal_lon: f64) -> Vec<DashaPeriod> {
    let balance = nakshatra_birth_balance(moon_sidereal_lon);
    let mut periods = Vec::with_capacity(9);
    periods.push(DashaPeriod {
        lord: balance.lord,
        level: DashaLevel::Maha,
        start_jd: birth_jd,
        end_jd: birth_jd + balance.balance_years * DAYS_PER_YEAR,
    });
    extend_wheel(&mut periods, 8);
    periods
}

/// Mahadashas from birth, extended by whole cycles until `as_of_jd` is covered.
///
/// Periods already in the first cycle are unchanged by the extension.
pub fn maha_dashas_covering(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    as_of_jd: f64,
) -> Result<Vec<DashaPeriod>, VedicError> {
    check_finite(birth_jd, moon_sidereal_lon)?;
    if !as_of_jd.is_finite() {
        return Err(VedicError::NonFinite("as-of julian date"));
    }
    if as_of_jd < birth_jd {
        return Err(VedicError::AsOfBeforeBirth);
    }

    let mut periods = maha_dashas(birth_jd, moon_sidereal_lon);
    let mut cycles = 1;
    while periods.last().is_some_and(|p| p.end_jd <= as_of_jd) {
        if cycles >= MAX_CYCLES {
            return Err(VedicError::DashaRangeExceeded {
                max_cycles: MAX_CYCLES,
            });
        }
        extend_wheel(&mut periods, 9);
        cycles += 1;
    }
    if cycles > 1 {
        debug!(cycles, periods = periods.len(), "extended mahadasha timeline");
    }
    Ok(periods)
}

/// Vimshottari state of a native at an as-of instant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Vimshottari {
    pub balance: BirthBalance,
    /// All mahadashas from birth, covering the as-of instant.
    pub maha_dashas: Vec<DashaPeriod>,
    /// Antardashas of the current mahadasha.
    pub antar_dashas: Vec<DashaPeriod>,
    pub current_maha: DashaPeriod,
    pub current_antar: DashaPeriod,
    pub current_pratyantar: DashaPeriod,
}

fn active_child(
    parent: &DashaPeriod,
    jd: f64,
) -> Result<(Vec<DashaPeriod>, DashaPeriod), VedicError> {
    let children = proportional_children(parent);
    let level_name = parent.level.child_level().map_or("sub", DashaLevel::name);
    let idx = find_active_period(&children, jd).ok_or(VedicError::NoActivePeriod(level_name))?;
    let active = children[idx];
    Ok((children, active))
}

/// Full Vimshottari evaluation: timeline plus the active three-level chain.
///
/// The levels are resolved in order, each from the period selected above it.
pub fn vimshottari(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    as_of_jd: f64,
) -> Result<Vimshottari, VedicError> {
    let maha_dashas = maha_dashas_covering(birth_jd, moon_sidereal_lon, as_of_jd)?;
    let maha_idx = find_active_period(&maha_dashas, as_of_jd)
        .ok_or(VedicError::NoActivePeriod(DashaLevel::Maha.name()))?;
    let current_maha = maha_dashas[maha_idx];
    let (antar_dashas, current_antar) = active_child(&current_maha, as_of_jd)?;
    let (_, current_pratyantar) = active_child(&current_antar, as_of_jd)?;

    debug!(
        maha = current_maha.lord.name(),
        antar = current_antar.lord.name(),
        pratyantar = current_pratyantar.lord.name(),
        "vimshottari resolved"
    );

    Ok(Vimshottari {
        balance: nakshatra_birth_balance(moon_sidereal_lon),
        maha_dashas,
        antar_dashas,
        current_maha,
        current_antar,
        current_pratyantar,
    })
}

fn build_node(period: DashaPeriod, depth: DashaLevel) -> DashaNode {
    let children = if period.level < depth {
        proportional_children(&period)
            .into_iter()
            .map(|c| build_node(c, depth))
            .collect()
    } else {
        Vec::new()
    };
    DashaNode { period, children }
}

/// One cycle of mahadashas with sub-periods down to `depth`.
pub fn vimshottari_hierarchy(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    depth: DashaLevel,
) -> Result<Vec<DashaNode>, VedicError> {
    check_finite(birth_jd, moon_sidereal_lon)?;
    Ok(maha_dashas(birth_jd, moon_sidereal_lon)
        .into_iter()
        .map(|p| build_node(p, depth))
        .collect())
}

/// Active periods at `query_jd`, Maha first, without building the hierarchy.
pub fn vimshottari_snapshot(
    birth_jd: f64,
    moon_sidereal_lon: f64,
    query_jd: f64,
) -> Result<DashaSnapshot, VedicError> {
    let mahas = maha_dashas_covering(birth_jd, moon_sidereal_lon, query_jd)?;
    let mut periods = Vec::with_capacity(3);
    let mut current = find_active_period(&mahas, query_jd).map(|i| mahas[i]);
    while let Some(p) = current {
        periods.push(p);
        let children = proportional_children(&p);
        current = find_active_period(&children, query_jd).map(|i| children[i]);
    }
    Ok(DashaSnapshot { query_jd, periods })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graha::Graha;
    use crate::nakshatra::NAKSHATRA_SPAN_27;

    const BIRTH: f64 = 2_451_545.0;

    #[test]
    fn ashwini_start_full_cycle() {
        let periods = maha_dashas(BIRTH, 0.0);
        assert_eq!(periods.len(), 9);
        assert_eq!(periods[0].lord, Graha::Ketu);
        assert!((periods[0].duration_years() - 7.0).abs() < 1e-9);
        let total: f64 = periods.iter().map(DashaPeriod::duration_years).sum();
        assert!((total - 120.0).abs() < 1e-6);
        let lords: Vec<Graha> = periods.iter().map(|p| p.lord).collect();
        assert_eq!(lords, VIMSHOTTARI_LORDS.to_vec());
    }

    #[test]
    fn first_period_is_balance() {
        // Halfway through Bharani (Venus)
        let lon = NAKSHATRA_SPAN_27 * 1.5;
        let periods = maha_dashas(BIRTH, lon);
        assert_eq!(periods[0].lord, Graha::Shukra);
        assert!((periods[0].duration_years() - 10.0).abs() < 1e-9);
        assert_eq!(periods[1].lord, Graha::Surya);
        assert!((periods[1].duration_years() - 6.0).abs() < 1e-9);
        assert_eq!(periods[8].lord, Graha::Ketu);
    }

    #[test]
    fn contiguous() {
        let periods = maha_dashas(BIRTH, 123.456);
        for w in periods.windows(2) {
            assert_eq!(w[0].end_jd, w[1].start_jd);
        }
    }

    #[test]
    fn extends_beyond_first_cycle() {
        let as_of = BIRTH + 130.0 * DAYS_PER_YEAR;
        let periods = maha_dashas_covering(BIRTH, 0.0, as_of).unwrap();
        assert_eq!(periods.len(), 18);
        let first = maha_dashas(BIRTH, 0.0);
        assert_eq!(&periods[..9], &first[..]);
        assert_eq!(periods[9].lord, Graha::Ketu);
        assert!((periods[9].duration_years() - 7.0).abs() < 1e-9);
        assert!(find_active_period(&periods, as_of).is_some());
    }

    #[test]
    fn as_of_before_birth_rejected() {
        assert_eq!(
            vimshottari(BIRTH, 10.0, BIRTH - 1.0).unwrap_err(),
            VedicError::AsOfBeforeBirth
        );
    }

    #[test]
    fn far_future_rejected() {
        let err = maha_dashas_covering(BIRTH, 0.0, BIRTH + 1e9).unwrap_err();
        assert!(matches!(err, VedicError::DashaRangeExceeded { .. }));
    }

    #[test]
    fn current_chain_nests() {
        let as_of = BIRTH + 23.7 * DAYS_PER_YEAR;
        let v = vimshottari(BIRTH, 200.0, as_of).unwrap();
        assert!(v.current_maha.contains(as_of));
        assert!(v.current_antar.contains(as_of));
        assert!(v.current_pratyantar.contains(as_of));
        assert!(v.current_antar.start_jd >= v.current_maha.start_jd);
        assert!(v.current_pratyantar.end_jd <= v.current_antar.end_jd);
        assert_eq!(v.antar_dashas.len(), 9);
        assert_eq!(v.antar_dashas[0].lord, v.current_maha.lord);
        assert_eq!(v.current_pratyantar.level, DashaLevel::Pratyantar);
    }

    #[test]
    fn as_of_at_birth_is_first_period() {
        let v = vimshottari(BIRTH, 50.0, BIRTH).unwrap();
        assert_eq!(v.current_maha, v.maha_dashas[0]);
        assert_eq!(v.current_antar.lord, v.current_maha.lord);
        assert_eq!(v.current_pratyantar.lord, v.current_maha.lord);
    }

    #[test]
    fn snapshot_matches_full() {
        let as_of = BIRTH + 61.2 * DAYS_PER_YEAR;
        let v = vimshottari(BIRTH, 300.0, as_of).unwrap();
        let s = vimshottari_snapshot(BIRTH, 300.0, as_of).unwrap();
        assert_eq!(
            s.periods,
            vec![v.current_maha, v.current_antar, v.current_pratyantar]
        );
    }

    #[test]
    fn hierarchy_shape() {
        let tree = vimshottari_hierarchy(BIRTH, 0.0, DashaLevel::Pratyantar).unwrap();
        assert_eq!(tree.len(), 9);
        for maha in &tree {
            assert_eq!(maha.children.len(), 9);
            for antar in &maha.children {
                assert_eq!(antar.children.len(), 9);
                assert!(antar.children.iter().all(|p| p.children.is_empty()));
            }
        }
        let shallow = vimshottari_hierarchy(BIRTH, 0.0, DashaLevel::Maha).unwrap();
        assert!(shallow.iter().all(|n| n.children.is_empty()));
    }
}
