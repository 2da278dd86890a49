//! Keplerian orbits for the planets and the Earth-Moon barycenter.
//!
//! Elements and linear rates from Standish, "Keplerian Elements for
//! Approximate Positions of the Major Planets" (JPL SSD, Tables 2a and 2b),
//! valid 3000 BC to 3000 AD. Positions are heliocentric, referred to the mean
//! ecliptic and equinox of J2000.

use crate::error::EphemerisError;

/// Orbits with a Keplerian element set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orbit {
    Mercury,
    Venus,
    EarthMoonBary,
    Mars,
    Jupiter,
    Saturn,
}

/// Element set at J2000 plus rate per Julian century.
///
/// Angles in degrees, semi-major axis in AU. `corr` holds the extra
/// mean-anomaly terms `[b, c, s, f]` of the outer planets.
#[derive(Debug, Clone, Copy)]
struct Elements {
    a: [f64; 2],
    e: [f64; 2],
    incl: [f64; 2],
    mean_lon: [f64; 2],
    lon_peri: [f64; 2],
    lon_node: [f64; 2],
    corr: [f64; 4],
}

const NO_CORR: [f64; 4] = [0.0; 4];

const MERCURY: Elements = Elements {
    a: [0.387_098_43, 0.0],
    e: [0.205_636_61, 0.000_021_23],
    incl: [7.005_594_32, -0.005_901_58],
    mean_lon: [252.251_667_24, 149_472.674_866_23],
    lon_peri: [77.457_718_95, 0.159_400_13],
    lon_node: [48.339_618_19, -0.122_141_82],
    corr: NO_CORR,
};

const VENUS: Elements = Elements {
    a: [0.723_321_02, -0.000_000_26],
    e: [0.006_763_99, -0.000_051_07],
    incl: [3.397_775_45, 0.000_434_94],
    mean_lon: [181.979_708_50, 58_517.815_602_60],
    lon_peri: [131.767_557_13, 0.056_796_48],
    lon_node: [76.672_614_96, -0.272_741_74],
    corr: NO_CORR,
};

const EM_BARY: Elements = Elements {
    a: [1.000_000_18, -0.000_000_03],
    e: [0.016_731_63, -0.000_036_61],
    incl: [-0.000_543_46, -0.013_371_78],
    mean_lon: [100.466_915_72, 35_999.373_063_29],
    lon_peri: [102.930_058_85, 0.317_952_60],
    lon_node: [-5.112_603_89, -0.241_238_56],
    corr: NO_CORR,
};

const MARS: Elements = Elements {
    a: [1.523_712_43, 0.000_000_97],
    e: [0.093_365_11, 0.000_091_49],
    incl: [1.851_818_69, -0.007_247_57],
    mean_lon: [-4.568_131_64, 19_140.299_342_43],
    lon_peri: [-23.917_447_84, 0.452_236_25],
    lon_node: [49.713_209_84, -0.268_524_31],
    corr: NO_CORR,
};

const JUPITER: Elements = Elements {
    a: [5.202_480_19, -0.000_028_64],
    e: [0.048_535_90, 0.000_180_26],
    incl: [1.298_614_16, -0.003_226_99],
    mean_lon: [34.334_791_52, 3_034.903_717_57],
    lon_peri: [14.274_952_44, 0.181_991_96],
    lon_node: [100.292_826_54, 0.130_246_19],
    corr: [-0.000_124_52, 0.060_640_60, -0.356_354_38, 38.351_250_00],
};

const SATURN: Elements = Elements {
    a: [9.541_498_83, -0.000_030_65],
    e: [0.055_508_25, -0.000_320_44],
    incl: [2.494_241_02, 0.004_519_69],
    mean_lon: [50.075_713_29, 1_222.114_947_24],
    lon_peri: [92.861_360_63, 0.541_794_78],
    lon_node: [113.639_987_02, -0.250_150_02],
    corr: [0.000_258_99, -0.134_344_69, 0.873_201_47, 38.351_250_00],
};

impl Orbit {
    const fn elements(self) -> &'static Elements {
        match self {
            Self::Mercury => &MERCURY,
            Self::Venus => &VENUS,
            Self::EarthMoonBary => &EM_BARY,
            Self::Mars => &MARS,
            Self::Jupiter => &JUPITER,
            Self::Saturn => &SATURN,
        }
    }
}

const KEPLER_TOL_RAD: f64 = 1e-12;
const KEPLER_MAX_ITER: usize = 50;

/// Solve Kepler's equation `M = E - e sin E` for the eccentric anomaly (radians).
pub fn solve_kepler(mean_anomaly_rad: f64, e: f64) -> Result<f64, EphemerisError> {
    let m = mean_anomaly_rad.rem_euclid(std::f64::consts::TAU);
    let mut ecc = if e < 0.8 { m } else { std::f64::consts::PI };
    for _ in 0..KEPLER_MAX_ITER {
        let f = ecc - e * ecc.sin() - m;
        let step = f / (1.0 - e * ecc.cos());
        ecc -= step;
        if step.abs() < KEPLER_TOL_RAD {
            return Ok(ecc);
        }
    }
    Err(EphemerisError::NoConvergence("kepler equation"))
}

/// Heliocentric ecliptic J2000 position `[x, y, z]` in AU.
///
/// `t` = Julian centuries since J2000.0.
pub fn heliocentric_j2000(orbit: Orbit, t: f64) -> Result<[f64; 3], EphemerisError> {
    let el = orbit.elements();
    let at = |p: [f64; 2]| p[0] + p[1] * t;

    let a = at(el.a);
    let e = at(el.e);
    let incl = at(el.incl).to_radians();
    let mean_lon = at(el.mean_lon);
    let lon_peri = at(el.lon_peri);
    let lon_node = at(el.lon_node);

    let [b, c, s, f] = el.corr;
    let ft = (f * t).to_radians();
    let arg_peri = (lon_peri - lon_node).to_radians();
    let mean_anomaly =
        (mean_lon - lon_peri + b * t * t + c * ft.cos() + s * ft.sin()).to_radians();
    let ecc_anom = solve_kepler(mean_anomaly, e)?;

    // Orbital-plane coordinates, x toward perihelion.
    let xp = a * (ecc_anom.cos() - e);
    let yp = a * (1.0 - e * e).sqrt() * ecc_anom.sin();

    let (sw, cw) = arg_peri.sin_cos();
    let (so, co) = lon_node.to_radians().sin_cos();
    let (si, ci) = incl.sin_cos();

    let x = (cw * co - sw * so * ci) * xp + (-sw * co - cw * so * ci) * yp;
    let y = (cw * so + sw * co * ci) * xp + (-sw * so + cw * co * ci) * yp;
    let z = (sw * si) * xp + (cw * si) * yp;
    Ok([x, y, z])
}

/// Geocentric ecliptic J2000 position `[x, y, z]` in AU.
///
/// The Earth is approximated by the Earth-Moon barycenter.
pub fn geocentric_j2000(orbit: Orbit, t: f64) -> Result<[f64; 3], EphemerisError> {
    let earth = heliocentric_j2000(Orbit::EarthMoonBary, t)?;
    let planet = heliocentric_j2000(orbit, t)?;
    Ok([
        planet[0] - earth[0],
        planet[1] - earth[1],
        planet[2] - earth[2],
    ])
}
