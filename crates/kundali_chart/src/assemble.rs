//! The chart pipeline: instant and place in, [`CompleteBirthChart`] out.

use chrono::{DateTime, Utc};
use kundali_ephem::{AnalyticEphemeris, Body, BodyState, EphemerisProvider};
use kundali_time::{datetime_to_jd, jd_to_datetime, jd_to_julian_year};
use kundali_vedic::dasha::{DashaPeriod, vimshottari};
use kundali_vedic::dosha::{kalsarp_dosha, mangal_dosha, pitra_dosha, sade_sati};
use kundali_vedic::{
    ALL_GRAHAS, Graha, Rashi, ayanamsa_at_jd, deg_to_dms, is_combust, is_vargottama, lagna,
    nakshatra_from_longitude, navamsa, rashi_from_longitude, tropical_to_sidereal,
    whole_sign_house, whole_sign_houses,
};
use tracing::{debug, trace};

use crate::error::{ChartError, ComputationError, ValidationError};
use crate::input::{BirthDetails, ChartOptions};
use crate::types::{
    AscendantInfo, ChartMeta, CompleteBirthChart, DashaSpan, Doshas, EnhancedPlanetPosition,
    House, NakshatraRef, PlanetPosition, SignInfo, VimshottariDasha,
};

/// Compute a chart with the built-in analytic ephemeris.
pub fn compute(
    birth: &BirthDetails,
    as_of: DateTime<Utc>,
    options: &ChartOptions,
) -> Result<CompleteBirthChart, ChartError> {
    compute_with(&AnalyticEphemeris, birth, as_of, options)
}

/// [`compute`] with the current instant as the as-of instant.
pub fn compute_now(
    birth: &BirthDetails,
    options: &ChartOptions,
) -> Result<CompleteBirthChart, ChartError> {
    compute(birth, Utc::now(), options)
}

/// Compute a chart against an arbitrary ephemeris provider.
///
/// `as_of` selects the current dasha periods and the Saturn position used
/// for Sade Sati; it must not precede the birth instant.
pub fn compute_with<E: EphemerisProvider + ?Sized>(
    eph: &E,
    birth: &BirthDetails,
    as_of: DateTime<Utc>,
    options: &ChartOptions,
) -> Result<CompleteBirthChart, ChartError> {
    birth.validate()?;
    options.validate()?;
    if as_of < birth.datetime_utc {
        return Err(ValidationError::AsOfBeforeBirth.into());
    }

    let jd = datetime_to_jd(&birth.datetime_utc);
    let as_of_jd = datetime_to_jd(&as_of);
    let ayanamsa = ayanamsa_at_jd(jd);
    debug!(jd, ayanamsa, ephemeris = eph.name(), "computing chart");

    let asc_point = lagna(
        jd,
        birth.latitude_deg,
        birth.longitude_deg,
        options.polar_limit_deg,
    )?;
    let states = eph.all_body_states(jd)?;
    let nodes = eph.nodes(jd)?;

    let mut raw = Vec::with_capacity(ALL_GRAHAS.len());
    for graha in ALL_GRAHAS {
        let state = match graha {
            Graha::Rahu => node_state(nodes.rahu_deg, nodes.speed_deg_per_day),
            Graha::Ketu => node_state(nodes.ketu_deg, nodes.speed_deg_per_day),
            _ => find_state(&states, graha)?,
        };
        raw.push((graha, classify(graha, &state, ayanamsa)));
    }

    let sun_lon = sidereal_of(&raw, Graha::Surya);
    let planets: Vec<EnhancedPlanetPosition> = raw
        .iter()
        .map(|(graha, position)| {
            let d9 = navamsa(position.sidereal_longitude, options.navamsa);
            let enhanced = EnhancedPlanetPosition {
                navamsa_sign: d9.rashi.into(),
                navamsa_degree: d9.degrees_in_rashi,
                is_vargottama: is_vargottama(position.sign.rashi, d9.rashi),
                is_combust: is_combust(*graha, position.sidereal_longitude, sun_lon),
                position: position.clone(),
            };
            trace!(
                graha = graha.name(),
                lon = enhanced.position.sidereal_longitude,
                sign = enhanced.position.sign.name.as_str(),
                navamsa = enhanced.navamsa_sign.name.as_str(),
                "planet classified"
            );
            enhanced
        })
        .collect();

    let asc_sidereal = tropical_to_sidereal(asc_point.tropical_deg, ayanamsa);
    let asc_rashi = rashi_from_longitude(asc_sidereal);
    let asc_nak = nakshatra_from_longitude(asc_sidereal);
    let ascendant = AscendantInfo {
        sign: asc_rashi.rashi.into(),
        degree_in_sign: asc_rashi.degrees_in_rashi,
        sidereal_longitude: asc_sidereal,
        tropical_longitude: asc_point.tropical_deg,
        nakshatra: asc_nak.nakshatra.into(),
        pada: asc_nak.pada,
        dms: asc_rashi.dms,
    };

    let placements: Vec<_> = planets
        .iter()
        .map(|p| (p.position.graha, p.position.sign.rashi))
        .collect();
    let houses: Vec<House> = whole_sign_houses(asc_rashi.rashi, &placements)
        .into_iter()
        .map(|b| House {
            number: b.number,
            sign: b.rashi.into(),
            planets: b.occupants.iter().map(|g| g.name().to_string()).collect(),
        })
        .collect();

    let moon_lon = sidereal_of(&raw, Graha::Chandra);
    let dasha = dasha_output(jd, moon_lon, as_of_jd)?;
    let doshas = evaluate_doshas(eph, &raw, asc_rashi.rashi, as_of_jd)?;

    debug!(
        ascendant = ascendant.sign.name.as_str(),
        maha = dasha.current_maha.planet.name(),
        "chart assembled"
    );

    Ok(CompleteBirthChart {
        meta: ChartMeta {
            birth: birth.datetime_utc,
            as_of,
            latitude_deg: birth.latitude_deg,
            longitude_deg: birth.longitude_deg,
            jd_utc: jd,
            ayanamsa_deg: ayanamsa,
            lst_deg: asc_point.lst_deg,
            navamsa_convention: options.navamsa,
            ephemeris: eph.name().to_string(),
        },
        ascendant,
        planets,
        houses,
        dasha,
        doshas,
    })
}

struct RawState {
    lon_deg: f64,
    lat_deg: f64,
    distance_au: f64,
    speed_deg_per_day: f64,
}

fn node_state(lon_deg: f64, speed_deg_per_day: f64) -> RawState {
    RawState {
        lon_deg,
        lat_deg: 0.0,
        distance_au: 0.0,
        speed_deg_per_day,
    }
}

fn find_state(states: &[BodyState], graha: Graha) -> Result<RawState, ComputationError> {
    graha
        .body()
        .and_then(|body| states.iter().find(|s| s.body == body))
        .map(|s| RawState {
            lon_deg: s.lon_deg,
            lat_deg: s.lat_deg,
            distance_au: s.distance_au,
            speed_deg_per_day: s.speed_deg_per_day,
        })
        .ok_or(ComputationError::MissingBody(graha.name()))
}

fn classify(graha: Graha, state: &RawState, ayanamsa: f64) -> PlanetPosition {
    let sidereal = tropical_to_sidereal(state.lon_deg, ayanamsa);
    let rashi = rashi_from_longitude(sidereal);
    let nak = nakshatra_from_longitude(sidereal);
    PlanetPosition {
        graha,
        name: graha.name().to_string(),
        full_name: graha.full_name(),
        tropical_longitude: state.lon_deg,
        sidereal_longitude: sidereal,
        latitude: state.lat_deg,
        distance_au: state.distance_au,
        speed_deg_per_day: state.speed_deg_per_day,
        is_retrograde: state.speed_deg_per_day < 0.0,
        sign: rashi.rashi.into(),
        degree_in_sign: rashi.degrees_in_rashi,
        dms: deg_to_dms(rashi.degrees_in_rashi),
        nakshatra: nak.nakshatra.into(),
        pada: nak.pada,
        nakshatra_lord: nak.nakshatra.lord(),
    }
}

fn sidereal_of(raw: &[(Graha, PlanetPosition)], graha: Graha) -> f64 {
    raw[graha.index() as usize].1.sidereal_longitude
}

fn span(p: &DashaPeriod) -> Result<DashaSpan, ChartError> {
    Ok(DashaSpan {
        planet: p.lord,
        level: p.level,
        start: jd_to_datetime(p.start_jd)?,
        end: jd_to_datetime(p.end_jd)?,
        duration_years: p.duration_years(),
    })
}

fn spans(periods: &[DashaPeriod]) -> Result<Vec<DashaSpan>, ChartError> {
    periods.iter().map(span).collect()
}

fn dasha_output(
    birth_jd: f64,
    moon_lon: f64,
    as_of_jd: f64,
) -> Result<VimshottariDasha, ChartError> {
    let v = vimshottari(birth_jd, moon_lon, as_of_jd)?;
    Ok(VimshottariDasha {
        birth_nakshatra: NakshatraRef::from(v.balance.nakshatra),
        birth_lord: v.balance.lord,
        degree_in_nakshatra: v.balance.degrees_in_nakshatra,
        balance_years: v.balance.balance_years,
        current_maha: span(&v.current_maha)?,
        current_antar: span(&v.current_antar)?,
        current_pratyantar: span(&v.current_pratyantar)?,
        antar_dashas: spans(&v.antar_dashas)?,
        all_maha_dashas: spans(&v.maha_dashas)?,
    })
}

fn evaluate_doshas<E: EphemerisProvider + ?Sized>(
    eph: &E,
    raw: &[(Graha, PlanetPosition)],
    asc_rashi: Rashi,
    as_of_jd: f64,
) -> Result<Doshas, ChartError> {
    let lon = |g: Graha| sidereal_of(raw, g);
    let rashi_of = |g: Graha| raw[g.index() as usize].1.sign.rashi;
    let mars_house = whole_sign_house(rashi_of(Graha::Mangal), asc_rashi);

    let longitudes: Vec<(Graha, f64)> = raw
        .iter()
        .map(|(g, p)| (*g, p.sidereal_longitude))
        .collect();

    let saturn_now = eph.position(Body::Saturn, as_of_jd)?;
    let saturn_now_sid = tropical_to_sidereal(saturn_now.lon_deg, ayanamsa_at_jd(as_of_jd));

    Ok(Doshas {
        mangal: mangal_dosha(mars_house),
        kalsarp: kalsarp_dosha(lon(Graha::Rahu), lon(Graha::Ketu), &longitudes),
        pitra: pitra_dosha(
            lon(Graha::Surya),
            lon(Graha::Shani),
            lon(Graha::Rahu),
            lon(Graha::Ketu),
        ),
        sade_sati: sade_sati(
            rashi_of(Graha::Chandra),
            rashi_from_longitude(saturn_now_sid).rashi,
            jd_to_julian_year(as_of_jd),
        ),
    })
}
