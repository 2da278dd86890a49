//! Ephemeris provider seam and the built-in analytic implementation.

use kundali_time::jd_to_centuries;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::AU_KM;
use crate::body::{ALL_BODIES, Body};
use crate::error::EphemerisError;
use crate::kepler::{Orbit, geocentric_j2000, heliocentric_j2000};
use crate::moon::lunar_position;
use crate::nodes::{NodePair, mean_nodes};
use crate::precession::general_precession_longitude_deg;
use crate::spherical::cartesian_to_spherical;

/// First supported Julian Date (3000 BC January 1 0h, proleptic Gregorian), inclusive.
pub const VALID_FROM_JD: f64 = 625_697.5;

/// End of the supported range (3001-01-01 0h), exclusive.
pub const VALID_UNTIL_JD: f64 = 2_817_152.5;

/// Tropical ecliptic coordinates of date.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EclipticPosition {
    /// Longitude in degrees [0, 360).
    pub lon_deg: f64,
    /// Latitude in degrees.
    pub lat_deg: f64,
    /// Distance in AU. Planets: heliocentric; Sun and Moon: geocentric.
    pub distance_au: f64,
}

/// Position plus daily motion of one body.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyState {
    pub body: Body,
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub distance_au: f64,
    /// Signed longitude change over one day, in (-180, 180].
    pub speed_deg_per_day: f64,
}

impl BodyState {
    pub fn is_retrograde(&self) -> bool {
        self.speed_deg_per_day < 0.0
    }
}

/// Signed angular difference `to - from`, normalized into (-180, 180].
pub fn signed_delta_deg(from: f64, to: f64) -> f64 {
    let d = (to - from).rem_euclid(360.0);
    if d > 180.0 { d - 360.0 } else { d }
}

/// Source of tropical geocentric positions.
///
/// Implementors supply [`position`](Self::position) and a validity window;
/// speed estimation and the batch query come from the provided methods.
pub trait EphemerisProvider: Send + Sync {
    fn name(&self) -> &'static str;

    /// Supported Julian Date window `[from, until)`.
    fn valid_range(&self) -> (f64, f64);

    /// Tropical ecliptic position of `body` at `jd_utc`.
    fn position(&self, body: Body, jd_utc: f64) -> Result<EclipticPosition, EphemerisError>;

    /// Fail unless `jd_utc` lies inside [`valid_range`](Self::valid_range).
    fn check_epoch(&self, jd_utc: f64) -> Result<(), EphemerisError> {
        let (from, until) = self.valid_range();
        if jd_utc.is_finite() && jd_utc >= from && jd_utc < until {
            Ok(())
        } else {
            Err(EphemerisError::EpochOutOfRange {
                jd: jd_utc,
                from,
                until,
            })
        }
    }

    /// Position plus speed, the latter by forward difference over one day.
    fn body_state(&self, body: Body, jd_utc: f64) -> Result<BodyState, EphemerisError> {
        self.check_epoch(jd_utc)?;
        self.check_epoch(jd_utc + 1.0)?;
        let now = self.position(body, jd_utc)?;
        let next = self.position(body, jd_utc + 1.0)?;
        Ok(BodyState {
            body,
            lon_deg: now.lon_deg,
            lat_deg: now.lat_deg,
            distance_au: now.distance_au,
            speed_deg_per_day: signed_delta_deg(now.lon_deg, next.lon_deg),
        })
    }

    /// States of all seven bodies, in [`ALL_BODIES`] order.
    ///
    /// Bodies are evaluated in parallel; the result order is fixed.
    fn all_body_states(&self, jd_utc: f64) -> Result<Vec<BodyState>, EphemerisError> {
        let states = ALL_BODIES
            .par_iter()
            .map(|&body| self.body_state(body, jd_utc))
            .collect::<Result<Vec<_>, _>>()?;
        for s in &states {
            trace!(
                body = s.body.name(),
                lon = s.lon_deg,
                speed = s.speed_deg_per_day,
                "body state"
            );
        }
        Ok(states)
    }

    /// Mean lunar nodes at `jd_utc`.
    fn nodes(&self, jd_utc: f64) -> Result<NodePair, EphemerisError> {
        self.check_epoch(jd_utc)?;
        Ok(mean_nodes(jd_to_centuries(jd_utc)))
    }
}

/// Keplerian planets, Meeus Moon, general precession to the equinox of date.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalyticEphemeris;

impl AnalyticEphemeris {
    pub fn new() -> Self {
        Self
    }
}

fn planet_orbit(body: Body) -> Option<Orbit> {
    match body {
        Body::Mercury => Some(Orbit::Mercury),
        Body::Venus => Some(Orbit::Venus),
        Body::Mars => Some(Orbit::Mars),
        Body::Jupiter => Some(Orbit::Jupiter),
        Body::Saturn => Some(Orbit::Saturn),
        Body::Sun | Body::Moon => None,
    }
}

impl EphemerisProvider for AnalyticEphemeris {
    fn name(&self) -> &'static str {
        "analytic"
    }

    fn valid_range(&self) -> (f64, f64) {
        (VALID_FROM_JD, VALID_UNTIL_JD)
    }

    fn position(&self, body: Body, jd_utc: f64) -> Result<EclipticPosition, EphemerisError> {
        self.check_epoch(jd_utc)?;
        let t = jd_to_centuries(jd_utc);

        if body == Body::Moon {
            let m = lunar_position(t);
            return Ok(EclipticPosition {
                lon_deg: m.lon_deg,
                lat_deg: m.lat_deg,
                distance_au: m.distance_km / AU_KM,
            });
        }

        let (geo, distance_au) = match planet_orbit(body) {
            Some(orbit) => {
                let helio = heliocentric_j2000(orbit, t)?;
                let r = (helio[0] * helio[0] + helio[1] * helio[1] + helio[2] * helio[2]).sqrt();
                (geocentric_j2000(orbit, t)?, r)
            }
            None => {
                let earth = heliocentric_j2000(Orbit::EarthMoonBary, t)?;
                let sun = [-earth[0], -earth[1], -earth[2]];
                let r = (sun[0] * sun[0] + sun[1] * sun[1] + sun[2] * sun[2]).sqrt();
                (sun, r)
            }
        };

        let sph = cartesian_to_spherical(&geo);
        Ok(EclipticPosition {
            lon_deg: (sph.lon_deg + general_precession_longitude_deg(t)).rem_euclid(360.0),
            lat_deg: sph.lat_deg,
            distance_au,
        })
    }
}
