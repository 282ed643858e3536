//! Graha drishti (planetary aspects) and rashi drishti (sign aspects).

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ephemeris::types::Body;
use crate::vedic::chart::ChartState;
use crate::vedic::rashi::{Modality, Sign};

/// Aspect offsets measured from the body's own house.
pub fn aspect_offsets(body: Body) -> &'static [u8] {
    match body {
        Body::Mars => &[4, 7, 8],
        Body::Jupiter => &[5, 7, 9],
        Body::Saturn => &[3, 7, 10],
        _ => &[7],
    }
}

/// House reached from `house` by an aspect offset: `((house - 1 + offset) mod 12) + 1`.
pub fn aspected_house(house: u8, offset: u8) -> u8 {
    ((house as u16 - 1 + offset as u16) % 12) as u8 + 1
}

/// Houses aspected by a body sitting in `house`.
pub fn aspected_houses(body: Body, house: u8) -> Vec<u8> {
    aspect_offsets(body)
        .iter()
        .map(|offset| aspected_house(house, *offset))
        .collect()
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyAspects {
    pub house: u8,
    pub aspects: Vec<u8>,
}

/// Graha drishti for every body in the chart.
pub fn compute_aspects(chart: &ChartState) -> BTreeMap<Body, BodyAspects> {
    chart
        .bodies
        .iter()
        .map(|(body, placement)| {
            (
                *body,
                BodyAspects {
                    house: placement.house,
                    aspects: aspected_houses(*body, placement.house),
                },
            )
        })
        .collect()
}

/// Signs aspected by a sign under rashi drishti.
///
/// Movable signs aspect the fixed signs other than the one next to them,
/// fixed signs the movable signs other than the one before them, and dual
/// signs the other three duals. The relation is mutual, unlike the cyclic
/// movable to fixed to dual reading, which this deliberately does not follow.
pub fn sign_aspects(sign: Sign) -> Vec<Sign> {
    let target = match sign.modality() {
        Modality::Movable => Modality::Fixed,
        Modality::Fixed => Modality::Movable,
        Modality::Dual => Modality::Dual,
    };
    let neighbours = [sign.offset(1), sign.offset(-1)];

    Sign::ALL
        .iter()
        .copied()
        .filter(|other| *other != sign && other.modality() == target && !neighbours.contains(other))
        .collect()
}

/// Rashi drishti per body: the signs its own sign aspects.
pub fn compute_sign_aspects(chart: &ChartState) -> BTreeMap<Body, Vec<Sign>> {
    chart
        .bodies
        .iter()
        .map(|(body, placement)| (*body, sign_aspects(placement.sign)))
        .collect()
}
