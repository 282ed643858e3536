//! Yoga detection helpers for Vedic astrology.
//!
//! Yogas are planetary combinations that indicate specific life outcomes.
//! Every detector is total: a body or lord that cannot be looked up simply
//! means the yoga does not fire.

use crate::ephemeris::normalize::angular_difference;
use crate::ephemeris::types::Body;
use crate::vedic::chart::ChartState;
use crate::vedic::house_score::BENEFICS;
use crate::vedic::rashi::{is_dusthana, is_kendra, is_trikona, nth_house_from, KENDRA_HOUSES, TRIKONA_HOUSES};
use crate::vedic::rules::Finding;
use crate::vedic::strength::Dignity;
use crate::vedic::vargas::DivisionalChart;

const CONJUNCTION_ORB: f64 = 10.0;

/// Same sign and within the conjunction orb.
fn conjunct_in_sign(chart: &ChartState, a: Body, b: Body) -> bool {
    match (chart.placement(a), chart.placement(b)) {
        (Some(pa), Some(pb)) => pa.sign == pb.sign && angular_difference(pa.longitude, pb.longitude) <= CONJUNCTION_ORB,
        _ => false,
    }
}

fn in_kendra(chart: &ChartState, body: Body) -> bool {
    chart.house(body).map_or(false, is_kendra)
}

pub fn gajakesari(chart: &ChartState) -> Option<Finding> {
    (in_kendra(chart, Body::Moon) && in_kendra(chart, Body::Jupiter))
        .then(|| Finding::yoga("Gajakesari Yoga", "Moon and Jupiter in kendras."))
}

pub fn budhaditya(chart: &ChartState) -> Option<Finding> {
    conjunct_in_sign(chart, Body::Sun, Body::Mercury)
        .then(|| Finding::yoga("Budhaditya Yoga", "Sun and Mercury conjunct."))
}

pub fn chandra_mangala(chart: &ChartState) -> Option<Finding> {
    conjunct_in_sign(chart, Body::Moon, Body::Mars)
        .then(|| Finding::yoga("Chandra-Mangala Yoga", "Moon and Mars conjunct."))
}

pub fn dhana(chart: &ChartState) -> Vec<Finding> {
    [Body::Jupiter, Body::Venus, Body::Mercury]
        .iter()
        .filter_map(|body| {
            let house = chart.house(*body)?;
            matches!(house, 2 | 11).then(|| Finding::yoga("Dhana Yoga", format!("{} in house {}.", body, house)))
        })
        .collect()
}

/// First body in a dusthana whose sign lord also sits in a dusthana.
pub fn vipareeta_raja(chart: &ChartState) -> Option<Finding> {
    chart.bodies.iter().find_map(|(body, placement)| {
        if !is_dusthana(placement.house) {
            return None;
        }
        let lord = placement.sign.lord();
        let lord_house = chart.house(lord)?;
        is_dusthana(lord_house).then(|| {
            Finding::yoga(
                "Vipareeta Raja Yoga",
                format!("{} and {} in dusthanas.", body, lord),
            )
        })
    })
}

pub fn kemadruma(chart: &ChartState) -> Option<Finding> {
    let moon_house = chart.house(Body::Moon)?;
    let second = nth_house_from(moon_house, 2);
    let twelfth = if moon_house == 1 { 12 } else { moon_house - 1 };
    (!chart.is_occupied(second) && !chart.is_occupied(twelfth))
        .then(|| Finding::yoga("Kemadruma Yoga", "No planets in 2nd and 12th from Moon."))
}

/// Debilitated Saturn sharing a house with Venus.
pub fn neecha_bhanga_raja(chart: &ChartState) -> Option<Finding> {
    let saturn = chart.placement(Body::Saturn)?;
    let venus_house = chart.house(Body::Venus)?;
    (saturn.dignity == Dignity::Debilitated && saturn.house == venus_house)
        .then(|| Finding::yoga("Neecha Bhanga Raja Yoga", "Saturn debilitation cancelled."))
}

fn unique_lords(lords: impl Iterator<Item = Body>) -> Vec<Body> {
    let mut out: Vec<Body> = Vec::new();
    for lord in lords {
        if !out.contains(&lord) {
            out.push(lord);
        }
    }
    out
}

/// Kendra lord and trikona lord occupying the same house.
///
/// A body ruling both a kendra and a trikona is not paired with itself.
pub fn raja(chart: &ChartState) -> Vec<Finding> {
    if chart.ascendant.degraded {
        return Vec::new();
    }
    let Some(lords) = chart.house_lords() else {
        return Vec::new();
    };
    let kendra_lords = unique_lords(KENDRA_HOUSES.iter().filter_map(|h| lords.get(h).copied()));
    let trikona_lords = unique_lords(TRIKONA_HOUSES.iter().filter_map(|h| lords.get(h).copied()));

    let mut seen: Vec<(Body, Body)> = Vec::new();
    let mut out = Vec::new();
    for k in &kendra_lords {
        for t in &trikona_lords {
            if k == t || seen.contains(&(*k, *t)) || seen.contains(&(*t, *k)) {
                continue;
            }
            let (Some(kh), Some(th)) = (chart.house(*k), chart.house(*t)) else {
                continue;
            };
            if kh == th {
                seen.push((*k, *t));
                out.push(Finding::yoga(
                    "Raja Yoga",
                    format!("{} (Kendra lord) with {} (Trikona lord) in house {}.", k, t, kh),
                ));
            }
        }
    }
    out
}

/// Mutual sign exchange, one finding per pair.
pub fn parivartana(chart: &ChartState) -> Vec<Finding> {
    let mut seen: Vec<(Body, Body)> = Vec::new();
    let mut out = Vec::new();
    for (body, placement) in &chart.bodies {
        let lord = placement.sign.lord();
        if lord == *body || seen.contains(&(lord, *body)) {
            continue;
        }
        let Some(lord_sign) = chart.sign(lord) else {
            continue;
        };
        if lord_sign.lord() == *body {
            seen.push((*body, lord));
            out.push(Finding::yoga(
                "Parivartana Yoga",
                format!("{} and {} exchange signs {} and {}.", body, lord, placement.sign, lord_sign),
            ));
        }
    }
    out
}

pub fn pancha_mahapurusha(chart: &ChartState) -> Vec<Finding> {
    const TARGETS: [(Body, &str); 5] = [
        (Body::Mars, "Ruchaka"),
        (Body::Mercury, "Bhadra"),
        (Body::Jupiter, "Hamsa"),
        (Body::Venus, "Malavya"),
        (Body::Saturn, "Shasha"),
    ];

    TARGETS
        .iter()
        .filter_map(|(body, name)| {
            let placement = chart.placement(*body)?;
            let strong = matches!(placement.dignity, Dignity::OwnSign | Dignity::Exalted);
            (strong && is_kendra(placement.house)).then(|| {
                Finding::yoga(
                    format!("{} Yoga", name),
                    format!("{} strong in kendra ({}) in {}.", body, placement.house, placement.sign),
                )
            })
        })
        .collect()
}

/// Benefics protecting the lagna or the Moon's house.
pub fn arishta_bhanga(chart: &ChartState) -> Vec<Finding> {
    let moon_house = chart.house(Body::Moon);
    BENEFICS
        .iter()
        .filter_map(|body| {
            let house = chart.house(*body)?;
            (house == 1 || Some(house) == moon_house)
                .then(|| Finding::yoga("Arishta Bhanga", format!("{} protects Lagna/Moon.", body)))
        })
        .collect()
}

pub fn lakshmi(chart: &ChartState) -> Option<Finding> {
    if chart.ascendant.degraded {
        return None;
    }
    let lagna_lord = chart.house_lord(1)?;
    let house = chart.house(lagna_lord)?;
    if !is_kendra(house) && !is_trikona(house) {
        return None;
    }
    BENEFICS
        .iter()
        .find(|benefic| chart.house(**benefic) == Some(house))
        .map(|benefic| {
            Finding::yoga(
                "Lakshmi Yoga",
                format!("Lagna lord {} strong with {} in house {}.", lagna_lord, benefic, house),
            )
        })
}

pub fn saraswati(chart: &ChartState) -> Option<Finding> {
    let all_placed = [Body::Jupiter, Body::Venus, Body::Mercury]
        .iter()
        .all(|body| chart.house(*body).map_or(false, |h| matches!(h, 2 | 5 | 9)));
    all_placed.then(|| Finding::yoga("Saraswati Yoga", "Jupiter, Venus and Mercury favor houses 2, 5 and 9."))
}

pub fn dhanya(chart: &ChartState) -> Option<Finding> {
    if chart.ascendant.degraded {
        return None;
    }
    let second_lord = chart.house_lord(2)?;
    let eleventh_lord = chart.house_lord(11)?;
    (chart.house(second_lord) == Some(11) && chart.house(eleventh_lord) == Some(2))
        .then(|| Finding::yoga("Dhanya Yoga", "2nd and 11th lords exchange houses."))
}

/// Bodies occupying the same sign in the rasi chart and the navamsa.
pub fn vargottama(chart: &ChartState, navamsa: &DivisionalChart) -> Vec<Finding> {
    chart
        .bodies
        .iter()
        .filter_map(|(body, placement)| {
            (navamsa.sign(*body) == Some(placement.sign)).then(|| {
                Finding::yoga(
                    "Vargottama",
                    format!("{} occupies {} in both rasi and navamsa.", body, placement.sign),
                )
            })
        })
        .collect()
}
