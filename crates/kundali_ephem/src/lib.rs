//! Analytic ephemeris provider.
//!
//! Computes tropical (equinox-of-date) ecliptic coordinates and daily motion
//! of the Sun, Moon, Mars, Mercury, Jupiter, Venus and Saturn at a UTC
//! instant, plus the mean lunar nodes.
//!
//! - Sun and planets: Keplerian elements with linear rates, carried from the
//!   J2000 ecliptic to the ecliptic of date by general precession.
//! - Moon: principal terms of the Meeus Ch. 47 lunar theory.
//! - Nodes: quadratic mean-node polynomial.
//!
//! [`EphemerisProvider`] is the seam consumed by the chart assembler;
//! [`AnalyticEphemeris`] is the built-in implementation.

pub mod body;
pub mod error;
pub mod kepler;
pub mod moon;
pub mod nodes;
pub mod precession;
pub mod provider;
pub mod spherical;

pub use body::{ALL_BODIES, Body};
pub use error::EphemerisError;
pub use nodes::{MEAN_NODE_SPEED_DEG_PER_DAY, NodePair, mean_ketu_deg, mean_nodes, mean_rahu_deg};
pub use precession::general_precession_longitude_deg;
pub use provider::{
    AnalyticEphemeris, BodyState, EclipticPosition, EphemerisProvider, VALID_FROM_JD,
    VALID_UNTIL_JD, signed_delta_deg,
};
pub use spherical::{SphericalCoords, cartesian_to_spherical};

/// Astronomical unit in km (IAU 2012).
pub const AU_KM: f64 = 149_597_870.7;
