//! Dignity, combustion and simplified strength.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ephemeris::normalize::angular_difference;
use crate::ephemeris::types::Body;
use crate::vedic::chart::ChartState;
use crate::vedic::rashi::{degree_in_sign, Sign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Dignity {
    Exalted,
    Debilitated,
    #[serde(rename = "Own Sign")]
    OwnSign,
    Neutral,
}

/// Baladi avastha (age state) from the degree within a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Avastha {
    Bala,
    Kumara,
    Yuva,
    Vriddha,
    Mrita,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyStrength {
    pub dignity: Dignity,
    pub combust: bool,
    pub retrograde: bool,
    /// 0.0 ..= 1.0
    pub index: f64,
    pub avastha: Avastha,
}

pub fn exaltation_sign(body: Body) -> Option<Sign> {
    match body {
        Body::Sun => Some(Sign::Aries),
        Body::Moon => Some(Sign::Taurus),
        Body::Mars => Some(Sign::Capricorn),
        Body::Mercury => Some(Sign::Virgo),
        Body::Jupiter => Some(Sign::Cancer),
        Body::Venus => Some(Sign::Pisces),
        Body::Saturn => Some(Sign::Libra),
        Body::Rahu | Body::Ketu => None,
    }
}

/// Always the sign opposite exaltation.
pub fn debilitation_sign(body: Body) -> Option<Sign> {
    exaltation_sign(body).map(|sign| sign.offset(6))
}

pub fn dignity_of(body: Body, sign: Sign) -> Dignity {
    if body.is_node() {
        return Dignity::Neutral;
    }
    if exaltation_sign(body) == Some(sign) {
        Dignity::Exalted
    } else if debilitation_sign(body) == Some(sign) {
        Dignity::Debilitated
    } else if sign.lord() == body {
        Dignity::OwnSign
    } else {
        Dignity::Neutral
    }
}

/// Combustion orb in degrees; `None` for bodies that are never combust.
pub fn combustion_orb(body: Body) -> Option<f64> {
    match body {
        Body::Moon => Some(12.0),
        Body::Mars => Some(7.0),
        Body::Mercury => Some(14.0),
        Body::Jupiter => Some(11.0),
        Body::Venus => Some(10.0),
        Body::Saturn => Some(15.0),
        Body::Sun | Body::Rahu | Body::Ketu => None,
    }
}

pub fn is_combust(body: Body, longitude: f64, sun_longitude: f64) -> bool {
    combustion_orb(body).map_or(false, |orb| angular_difference(longitude, sun_longitude) <= orb)
}

pub fn strength_index(dignity: Dignity) -> f64 {
    let mut score: f64 = 0.5;
    match dignity {
        Dignity::Exalted => score += 0.25,
        Dignity::Debilitated => score -= 0.2,
        Dignity::OwnSign | Dignity::Neutral => {}
    }
    score.clamp(0.0, 1.0)
}

pub fn avastha_of(longitude: f64) -> Avastha {
    let degree = degree_in_sign(longitude);
    if degree < 6.0 {
        Avastha::Bala
    } else if degree < 12.0 {
        Avastha::Kumara
    } else if degree < 18.0 {
        Avastha::Yuva
    } else if degree < 24.0 {
        Avastha::Vriddha
    } else {
        Avastha::Mrita
    }
}

/// Per-body strength summary for a built chart.
pub fn evaluate_strengths(chart: &ChartState) -> BTreeMap<Body, BodyStrength> {
    chart
        .bodies
        .iter()
        .map(|(body, placement)| {
            let dignity = placement.dignity;
            (
                *body,
                BodyStrength {
                    dignity,
                    combust: placement.combust,
                    retrograde: placement.retrograde,
                    index: strength_index(dignity),
                    avastha: avastha_of(placement.longitude),
                },
            )
        })
        .collect()
}
