//! Divisional chart (varga) helpers for Vedic astrology.
//!
//! Vargas are derived charts that divide each sign into N equal parts and map
//! every part onto a sign. The starting sign depends on the modality of the
//! sign being divided.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::ephemeris::normalize::normalize_degrees;
use crate::ephemeris::types::Body;
use crate::vedic::chart::ChartState;
use crate::vedic::rashi::{sign_of, Modality, Sign, SIGN_SIZE};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum DivisionalScheme {
    D3,
    D4,
    D9,
    D10,
}

struct SchemeRule {
    label: &'static str,
    divisions: u32,
    /// Start offsets for movable, fixed and dual signs
    rotation: [usize; 3],
    /// Signs advanced per part
    stride: usize,
}

const fn rule(scheme: DivisionalScheme) -> SchemeRule {
    match scheme {
        DivisionalScheme::D3 => SchemeRule { label: "Drekkana", divisions: 3, rotation: [0, 0, 0], stride: 4 },
        DivisionalScheme::D4 => SchemeRule { label: "Chaturthamsa", divisions: 4, rotation: [0, 3, 6], stride: 1 },
        DivisionalScheme::D9 => SchemeRule { label: "Navamsa", divisions: 9, rotation: [0, 8, 4], stride: 1 },
        DivisionalScheme::D10 => SchemeRule { label: "Dasamsa", divisions: 10, rotation: [0, 8, 4], stride: 1 },
    }
}

impl DivisionalScheme {
    pub const ALL: [DivisionalScheme; 4] = [
        DivisionalScheme::D3,
        DivisionalScheme::D4,
        DivisionalScheme::D9,
        DivisionalScheme::D10,
    ];

    pub fn label(self) -> &'static str {
        rule(self).label
    }

    pub fn divisions(self) -> u32 {
        rule(self).divisions
    }

    pub fn from_id(id: &str) -> Option<DivisionalScheme> {
        match id.trim().to_lowercase().as_str() {
            "d3" => Some(DivisionalScheme::D3),
            "d4" => Some(DivisionalScheme::D4),
            "d9" => Some(DivisionalScheme::D9),
            "d10" => Some(DivisionalScheme::D10),
            _ => None,
        }
    }
}

impl fmt::Display for DivisionalScheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "D{}", self.divisions())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VargaPosition {
    pub sign: Sign,
    /// Position within the divisional chart, scaled by the division count
    pub longitude: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DivisionalChart {
    pub scheme: DivisionalScheme,
    pub label: String,
    pub bodies: BTreeMap<Body, VargaPosition>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub ascendant: Option<VargaPosition>,
}

impl DivisionalChart {
    pub fn sign(&self, body: Body) -> Option<Sign> {
        self.bodies.get(&body).map(|p| p.sign)
    }
}

fn modality_slot(modality: Modality) -> usize {
    match modality {
        Modality::Movable => 0,
        Modality::Fixed => 1,
        Modality::Dual => 2,
    }
}

/// Divisional placement of a longitude.
pub fn divisional_position(longitude: f64, scheme: DivisionalScheme) -> VargaPosition {
    let rule = rule(scheme);
    let lon = normalize_degrees(longitude);
    let sign = sign_of(lon);
    let within_sign = lon - sign.start_degree();
    let division = rule.divisions as f64;

    let part = ((within_sign * division / SIGN_SIZE).floor() as usize).min(rule.divisions as usize - 1);
    let start = sign.index() + rule.rotation[modality_slot(sign.modality())];
    let varga_sign = Sign::from_index(start + part * rule.stride);

    let segment_size = SIGN_SIZE / division;
    let remainder = (within_sign - part as f64 * segment_size).max(0.0);

    VargaPosition {
        sign: varga_sign,
        longitude: normalize_degrees(varga_sign.start_degree() + remainder * division),
    }
}

pub fn divisional_sign(longitude: f64, scheme: DivisionalScheme) -> Sign {
    divisional_position(longitude, scheme).sign
}

pub fn build_divisional_chart(chart: &ChartState, scheme: DivisionalScheme) -> DivisionalChart {
    let bodies = chart
        .bodies
        .iter()
        .map(|(body, placement)| (*body, divisional_position(placement.longitude, scheme)))
        .collect();
    let ascendant = if chart.ascendant.degraded {
        None
    } else {
        Some(divisional_position(chart.ascendant.longitude, scheme))
    };

    DivisionalChart {
        scheme,
        label: scheme.label().to_string(),
        bodies,
        ascendant,
    }
}

/// D3, D4, D9 and D10 for a chart.
pub fn build_divisional_charts(chart: &ChartState) -> BTreeMap<DivisionalScheme, DivisionalChart> {
    DivisionalScheme::ALL
        .iter()
        .map(|scheme| (*scheme, build_divisional_chart(chart, *scheme)))
        .collect()
}
