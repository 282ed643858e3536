//! Benefic/malefic house scoring and house-level summaries.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ephemeris::types::Body;
use crate::vedic::chart::ChartState;
use crate::vedic::drishti::aspected_houses;
use crate::vedic::rashi::{is_kendra, is_trikona};

pub const BENEFICS: [Body; 3] = [Body::Jupiter, Body::Venus, Body::Mercury];
pub const MALEFICS: [Body; 4] = [Body::Saturn, Body::Mars, Body::Rahu, Body::Ketu];

pub fn is_benefic(body: Body) -> bool {
    BENEFICS.contains(&body)
}

pub fn is_malefic(body: Body) -> bool {
    MALEFICS.contains(&body)
}

/// +1 for benefics, -1 for malefics, 0 for the luminaries.
pub fn body_weight(body: Body) -> i32 {
    if is_benefic(body) {
        1
    } else if is_malefic(body) {
        -1
    } else {
        0
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HouseScores {
    pub scores: BTreeMap<u8, i32>,
    pub total: i32,
}

impl HouseScores {
    pub fn score(&self, house: u8) -> i32 {
        self.scores.get(&house).copied().unwrap_or(0)
    }

    /// Highest score; the lowest house number wins ties.
    pub fn strongest(&self) -> Option<(u8, i32)> {
        self.scores
            .iter()
            .fold(None, |best: Option<(u8, i32)>, (house, score)| match best {
                Some((_, best_score)) if best_score >= *score => best,
                _ => Some((*house, *score)),
            })
    }
}

pub fn compute_house_scores(chart: &ChartState) -> HouseScores {
    let mut scores: BTreeMap<u8, i32> = (1..=12u8).map(|h| (h, 0)).collect();

    for (body, placement) in &chart.bodies {
        let weight = body_weight(*body);
        if weight == 0 {
            continue;
        }
        *scores.entry(placement.house).or_insert(0) += weight;
        for house in aspected_houses(*body, placement.house) {
            *scores.entry(house).or_insert(0) += weight;
        }
    }

    let total = scores.values().sum();
    HouseScores { scores, total }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmptyHouse {
    pub house: u8,
    pub lord: Body,
    /// House the lord occupies
    pub lord_house: Option<u8>,
}

/// Unoccupied houses with their lord's placement. Empty when the lagna is unknown.
pub fn empty_houses(chart: &ChartState) -> Vec<EmptyHouse> {
    let Some(lords) = chart.house_lords() else {
        return Vec::new();
    };
    lords
        .into_iter()
        .filter(|(house, _)| !chart.is_occupied(*house))
        .map(|(house, lord)| EmptyHouse {
            house,
            lord,
            lord_house: chart.house(lord),
        })
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AngularOccupancy {
    pub kendra_benefics: Vec<Body>,
    pub kendra_malefics: Vec<Body>,
    pub trikona_benefics: Vec<Body>,
    pub trikona_malefics: Vec<Body>,
}

/// Benefics and malefics sitting in kendras and trikonas.
pub fn angular_occupancy(chart: &ChartState) -> AngularOccupancy {
    let mut occupancy = AngularOccupancy::default();
    for (body, placement) in &chart.bodies {
        let house = placement.house;
        if is_kendra(house) {
            if is_benefic(*body) {
                occupancy.kendra_benefics.push(*body);
            } else if is_malefic(*body) {
                occupancy.kendra_malefics.push(*body);
            }
        }
        if is_trikona(house) {
            if is_benefic(*body) {
                occupancy.trikona_benefics.push(*body);
            } else if is_malefic(*body) {
                occupancy.trikona_malefics.push(*body);
            }
        }
    }
    occupancy
}
