//! Chart structure: signs, houses, nakshatras and dignities per body.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ephemeris::types::{Body, Instant, Positions};
use crate::vedic::nakshatra::{nakshatra_of, NakshatraPlacement};
use crate::vedic::positions::Ascendant;
use crate::vedic::rashi::{house_lords, house_of, house_signs, sign_of, Sign};
use crate::vedic::strength::{dignity_of, is_combust, Dignity};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BodyPlacement {
    pub longitude: f64,
    pub speed: f64,
    pub retrograde: bool,
    pub sign: Sign,
    pub house: u8,
    pub nakshatra: NakshatraPlacement,
    pub dignity: Dignity,
    pub combust: bool,
}

/// Immutable structural view of a natal chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartState {
    pub instant: Instant,
    pub ascendant: Ascendant,
    pub bodies: BTreeMap<Body, BodyPlacement>,
    /// House (1..=12) -> occupants in canonical body order
    pub houses: BTreeMap<u8, Vec<Body>>,
}

impl ChartState {
    pub fn placement(&self, body: Body) -> Option<&BodyPlacement> {
        self.bodies.get(&body)
    }

    pub fn sign(&self, body: Body) -> Option<Sign> {
        self.bodies.get(&body).map(|p| p.sign)
    }

    pub fn house(&self, body: Body) -> Option<u8> {
        self.bodies.get(&body).map(|p| p.house)
    }

    pub fn longitude(&self, body: Body) -> Option<f64> {
        self.bodies.get(&body).map(|p| p.longitude)
    }

    pub fn occupants(&self, house: u8) -> &[Body] {
        self.houses.get(&house).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_occupied(&self, house: u8) -> bool {
        !self.occupants(house).is_empty()
    }

    /// Whole-sign house lords; `None` when the ascendant is unknown.
    pub fn house_lords(&self) -> Option<BTreeMap<u8, Body>> {
        self.ascendant.sign.map(house_lords)
    }

    pub fn house_signs(&self) -> Option<BTreeMap<u8, Sign>> {
        self.ascendant.sign.map(house_signs)
    }

    pub fn house_lord(&self, house: u8) -> Option<Body> {
        self.ascendant.sign.map(|sign| sign.offset(house as i32 - 1).lord())
    }
}

pub fn build_chart_state(positions: &Positions, ascendant: Ascendant) -> ChartState {
    let sun_longitude = positions.longitude(Body::Sun);
    let mut bodies = BTreeMap::new();
    let mut houses: BTreeMap<u8, Vec<Body>> = (1..=12u8).map(|h| (h, Vec::new())).collect();

    for (body, position) in &positions.bodies {
        let sign = sign_of(position.longitude);
        let house = house_of(position.longitude, ascendant.longitude);
        let combust = sun_longitude.map_or(false, |sun| is_combust(*body, position.longitude, sun));

        houses.entry(house).or_default().push(*body);
        bodies.insert(
            *body,
            BodyPlacement {
                longitude: position.longitude,
                speed: position.speed,
                retrograde: position.retrograde,
                sign,
                house,
                nakshatra: nakshatra_of(position.longitude),
                dignity: dignity_of(*body, sign),
                combust,
            },
        );
    }

    ChartState {
        instant: positions.instant,
        ascendant,
        bodies,
        houses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ephemeris::types::BodyPosition;
    use chrono::{TimeZone, Utc};

    fn positions(entries: &[(Body, f64)]) -> Positions {
        Positions {
            instant: Instant::from_utc(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()),
            bodies: entries
                .iter()
                .map(|(b, lon)| {
                    (
                        *b,
                        BodyPosition {
                            longitude: *lon,
                            speed: 1.0,
                            retrograde: false,
                        },
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn test_body_on_ascendant_is_house_one() {
        let chart = build_chart_state(&positions(&[(Body::Moon, 123.45)]), Ascendant::new(123.45));
        assert_eq!(chart.house(Body::Moon), Some(1));
        assert_eq!(chart.occupants(1), &[Body::Moon]);
        assert!(!chart.is_occupied(2));
    }

    #[test]
    fn test_houses_and_signs() {
        let chart = build_chart_state(
            &positions(&[(Body::Sun, 10.0), (Body::Mercury, 20.0), (Body::Saturn, 200.0)]),
            Ascendant::new(45.0),
        );
        assert_eq!(chart.sign(Body::Sun), Some(Sign::Aries));
        assert_eq!(chart.house(Body::Sun), Some(11));
        assert_eq!(chart.house(Body::Saturn), Some(6));
        assert!(chart.placement(Body::Mercury).unwrap().combust);
        assert_eq!(chart.placement(Body::Saturn).unwrap().dignity, Dignity::Exalted);
        assert_eq!(chart.houses.len(), 12);
    }

    #[test]
    fn test_house_lords_require_ascendant() {
        let chart = build_chart_state(&positions(&[(Body::Sun, 10.0)]), Ascendant::unknown());
        assert!(chart.house_lords().is_none());
        assert_eq!(chart.house(Body::Sun), Some(1));

        let known = build_chart_state(&positions(&[(Body::Sun, 10.0)]), Ascendant::new(45.0));
        assert_eq!(known.house_lord(1), Some(Body::Venus));
        assert_eq!(known.house_lord(12), Some(Body::Mars));
    }
}
