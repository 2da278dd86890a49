//! Geocentric Moon from the principal terms of the ELP-2000/82 series.
//!
//! Source: Meeus, "Astronomical Algorithms" 2nd ed., Ch. 47 (Tables 47.A, 47.B).
//! The tables are truncated to their dominant terms; longitude error is
//! a few hundredths of a degree over the supported range.
//!
//! Output is referred to the mean ecliptic and equinox of date.

/// One periodic term: multipliers of (D, M, M', F) and coefficients.
struct LonDistTerm {
    args: [i8; 4],
    /// Longitude coefficient, 1e-6 deg.
    sl: f64,
    /// Distance coefficient, 1e-3 km.
    sr: f64,
}

const fn ld(d: i8, m: i8, mp: i8, f: i8, sl: f64, sr: f64) -> LonDistTerm {
    LonDistTerm {
        args: [d, m, mp, f],
        sl,
        sr,
    }
}

#[rustfmt::skip]
const LON_DIST: [LonDistTerm; 46] = [
    ld(0, 0, 1, 0, 6_288_774.0, -20_905_355.0),
    ld(2, 0, -1, 0, 1_274_027.0, -3_699_111.0),
    ld(2, 0, 0, 0, 658_314.0, -2_955_968.0),
    ld(0, 0, 2, 0, 213_618.0, -569_925.0),
    ld(0, 1, 0, 0, -185_116.0, 48_888.0),
    ld(0, 0, 0, 2, -114_332.0, -3_149.0),
    ld(2, 0, -2, 0, 58_793.0, 246_158.0),
    ld(2, -1, -1, 0, 57_066.0, -152_138.0),
    ld(2, 0, 1, 0, 53_322.0, -170_733.0),
    ld(2, -1, 0, 0, 45_758.0, -204_586.0),
    ld(0, 1, -1, 0, -40_923.0, -129_620.0),
    ld(1, 0, 0, 0, -34_720.0, 108_743.0),
    ld(0, 1, 1, 0, -30_383.0, 104_755.0),
    ld(2, 0, 0, -2, 15_327.0, 10_321.0),
    ld(0, 0, 1, 2, -12_528.0, 0.0),
    ld(0, 0, 1, -2, 10_980.0, 79_661.0),
    ld(4, 0, -1, 0, 10_675.0, -34_782.0),
    ld(0, 0, 3, 0, 10_034.0, -23_210.0),
    ld(4, 0, -2, 0, 8_548.0, -21_636.0),
    ld(2, 1, -1, 0, -7_888.0, 24_208.0),
    ld(2, 1, 0, 0, -6_766.0, 30_824.0),
    ld(1, 0, -1, 0, -5_163.0, -8_379.0),
    ld(1, 1, 0, 0, 4_987.0, -16_675.0),
    ld(2, -1, 1, 0, 4_036.0, -12_831.0),
    ld(2, 0, 2, 0, 3_994.0, -10_445.0),
    ld(4, 0, 0, 0, 3_861.0, -11_650.0),
    ld(2, 0, -3, 0, 3_665.0, 14_403.0),
    ld(0, 1, -2, 0, -2_689.0, -7_003.0),
    ld(2, 0, -1, 2, -2_602.0, 0.0),
    ld(2, -1, -2, 0, 2_390.0, 10_056.0),
    ld(1, 0, 1, 0, -2_348.0, 6_322.0),
    ld(2, -2, 0, 0, 2_236.0, -9_884.0),
    ld(0, 1, 2, 0, -2_120.0, 5_751.0),
    ld(0, 2, 0, 0, -2_069.0, 0.0),
    ld(2, -2, -1, 0, 2_048.0, -4_950.0),
    ld(2, 0, 1, -2, -1_773.0, 4_130.0),
    ld(2, 0, 0, 2, -1_595.0, 0.0),
    ld(4, -1, -1, 0, 1_215.0, -3_958.0),
    ld(0, 0, 2, 2, -1_110.0, 0.0),
    ld(3, 0, -1, 0, -892.0, 3_258.0),
    ld(2, 1, 1, 0, -810.0, 2_616.0),
    ld(4, -1, -2, 0, 759.0, -1_897.0),
    ld(0, 2, -1, 0, -713.0, -2_117.0),
    ld(2, 2, -1, 0, -700.0, 2_354.0),
    ld(0, 0, 2, -2, -381.0, -4_421.0),
    ld(2, 0, -1, -2, 0.0, 8_752.0),
];

/// Latitude term: multipliers of (D, M, M', F) and coefficient in 1e-6 deg.
struct LatTerm {
    args: [i8; 4],
    sb: f64,
}

const fn lt(d: i8, m: i8, mp: i8, f: i8, sb: f64) -> LatTerm {
    LatTerm {
        args: [d, m, mp, f],
        sb,
    }
}

#[rustfmt::skip]
const LAT: [LatTerm; 30] = [
    lt(0, 0, 0, 1, 5_128_122.0),
    lt(0, 0, 1, 1, 280_602.0),
    lt(0, 0, 1, -1, 277_693.0),
    lt(2, 0, 0, -1, 173_237.0),
    lt(2, 0, -1, 1, 55_413.0),
    lt(2, 0, -1, -1, 46_271.0),
    lt(2, 0, 0, 1, 32_573.0),
    lt(0, 0, 2, 1, 17_198.0),
    lt(2, 0, 1, -1, 9_266.0),
    lt(0, 0, 2, -1, 8_822.0),
    lt(2, -1, 0, -1, 8_216.0),
    lt(2, 0, -2, -1, 4_324.0),
    lt(2, 0, 1, 1, 4_200.0),
    lt(2, 1, 0, -1, -3_359.0),
    lt(2, -1, -1, 1, 2_463.0),
    lt(2, -1, 0, 1, 2_211.0),
    lt(2, -1, -1, -1, 2_065.0),
    lt(0, 1, -1, -1, -1_870.0),
    lt(4, 0, -1, -1, 1_828.0),
    lt(0, 1, 0, 1, -1_794.0),
    lt(0, 0, 0, 3, -1_749.0),
    lt(0, 1, -1, 1, -1_565.0),
    lt(1, 0, 0, 1, -1_491.0),
    lt(0, 1, 1, 1, -1_475.0),
    lt(0, 1, 1, -1, -1_410.0),
    lt(0, 1, 0, -1, -1_344.0),
    lt(1, 0, 0, -1, -1_335.0),
    lt(0, 0, 3, 1, 1_107.0),
    lt(4, 0, 0, -1, 1_021.0),
    lt(4, 0, -1, 1, 833.0),
];

/// Geocentric lunar coordinates, mean ecliptic of date.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LunarPosition {
    pub lon_deg: f64,
    pub lat_deg: f64,
    pub distance_km: f64,
}

/// Fundamental arguments in degrees: (L', D, M, M', F).
fn fundamental_args(t: f64) -> (f64, f64, f64, f64, f64) {
    let t2 = t * t;
    let t3 = t2 * t;
    let t4 = t3 * t;
    let lp = 218.316_447_7 + 481_267.881_234_21 * t - 0.001_578_6 * t2 + t3 / 538_841.0
        - t4 / 65_194_000.0;
    let d = 297.850_192_1 + 445_267.111_403_4 * t - 0.001_881_9 * t2 + t3 / 545_868.0
        - t4 / 113_065_000.0;
    let m = 357.529_109_2 + 35_999.050_290_9 * t - 0.000_153_6 * t2 + t3 / 24_490_000.0;
    let mp = 134.963_396_4 + 477_198.867_505_5 * t + 0.008_741_4 * t2 + t3 / 69_699.0
        - t4 / 14_712_000.0;
    let f = 93.272_095_0 + 483_202.017_523_3 * t - 0.003_653_9 * t2 - t3 / 3_526_000.0
        + t4 / 863_310_000.0;
    (lp, d, m, mp, f)
}

/// Argument of a periodic term, in radians, plus its eccentricity factor.
fn term_arg(args: [i8; 4], d: f64, m: f64, mp: f64, f: f64, e: f64) -> (f64, f64) {
    let [kd, km, kmp, kf] = args;
    let arg = f64::from(kd) * d + f64::from(km) * m + f64::from(kmp) * mp + f64::from(kf) * f;
    let factor = match km.unsigned_abs() {
        0 => 1.0,
        1 => e,
        _ => e * e,
    };
    (arg.to_radians(), factor)
}

/// Geocentric Moon at `t` Julian centuries since J2000.0.
pub fn lunar_position(t: f64) -> LunarPosition {
    let (lp, d, m, mp, f) = fundamental_args(t);
    let e = 1.0 - 0.002_516 * t - 0.000_007_4 * t * t;

    let a1 = (119.75 + 131.849 * t).to_radians();
    let a2 = (53.09 + 479_264.290 * t).to_radians();
    let a3 = (313.45 + 481_266.484 * t).to_radians();

    let mut sl = 0.0;
    let mut sr = 0.0;
    for term in &LON_DIST {
        let (arg, factor) = term_arg(term.args, d, m, mp, f, e);
        sl += term.sl * factor * arg.sin();
        sr += term.sr * factor * arg.cos();
    }

    let mut sb = 0.0;
    for term in &LAT {
        let (arg, factor) = term_arg(term.args, d, m, mp, f, e);
        sb += term.sb * factor * arg.sin();
    }

    let lp_r = lp.to_radians();
    let f_r = f.to_radians();
    let mp_r = mp.to_radians();

    sl += 3958.0 * a1.sin() + 1962.0 * (lp_r - f_r).sin() + 318.0 * a2.sin();
    sb += -2235.0 * lp_r.sin()
        + 382.0 * a3.sin()
        + 175.0 * (a1 - f_r).sin()
        + 175.0 * (a1 + f_r).sin()
        + 127.0 * (lp_r - mp_r).sin()
        - 115.0 * (lp_r + mp_r).sin();

    LunarPosition {
        lon_deg: (lp + sl / 1e6).rem_euclid(360.0),
        lat_deg: sb / 1e6,
        distance_km: 385_000.56 + sr / 1000.0,
    }
}
