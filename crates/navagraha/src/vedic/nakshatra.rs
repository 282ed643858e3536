//! Nakshatra utilities for Vedic astrology.
//!
//! Nakshatras are 27 lunar mansions, each spanning 13°20' (360/27 degrees).
//! Each nakshatra is divided into 4 padas (quarters).

use serde::{Deserialize, Serialize};

use crate::ephemeris::normalize::normalize_degrees;
use crate::ephemeris::types::Body;

pub const NAKSHATRA_SEGMENT_SIZE: f64 = 360.0 / 27.0;
pub const PADA_SIZE: f64 = NAKSHATRA_SEGMENT_SIZE / 4.0;

/// Vimshottari lord sequence; nakshatra `i` is ruled by entry `i % 9`.
pub const NAKSHATRA_LORD_SEQUENCE: [Body; 9] = [
    Body::Ketu,
    Body::Venus,
    Body::Sun,
    Body::Moon,
    Body::Mars,
    Body::Rahu,
    Body::Jupiter,
    Body::Saturn,
    Body::Mercury,
];

pub const NAKSHATRA_NAMES: [&str; 27] = [
    "Ashwini",
    "Bharani",
    "Krittika",
    "Rohini",
    "Mrigashira",
    "Ardra",
    "Punarvasu",
    "Pushya",
    "Ashlesha",
    "Magha",
    "Purva Phalguni",
    "Uttara Phalguni",
    "Hasta",
    "Chitra",
    "Swati",
    "Vishakha",
    "Anuradha",
    "Jyeshtha",
    "Mula",
    "Purva Ashadha",
    "Uttara Ashadha",
    "Shravana",
    "Dhanishta",
    "Shatabhisha",
    "Purva Bhadrapada",
    "Uttara Bhadrapada",
    "Revati",
];

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NakshatraRecord {
    pub index: usize,
    pub name: &'static str,
    pub lord: Body,
    pub start: f64,
    pub end: f64,
}

/// Where a longitude falls among the nakshatras.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NakshatraPlacement {
    pub index: usize,
    pub name: String,
    pub lord: Body,
    pub pada: u8,
    /// Fraction of the nakshatra already traversed, in [0, 1)
    pub progress: f64,
}

fn build_nakshatra_table() -> Vec<NakshatraRecord> {
    NAKSHATRA_NAMES
        .iter()
        .enumerate()
        .map(|(idx, &name)| {
            let start = idx as f64 * NAKSHATRA_SEGMENT_SIZE;
            NakshatraRecord {
                index: idx,
                name,
                lord: NAKSHATRA_LORD_SEQUENCE[idx % 9],
                start,
                end: start + NAKSHATRA_SEGMENT_SIZE,
            }
        })
        .collect()
}

lazy_static::lazy_static! {
    static ref NAKSHATRA_TABLE: Vec<NakshatraRecord> = build_nakshatra_table();
}

pub fn nakshatra_table() -> &'static [NakshatraRecord] {
    &NAKSHATRA_TABLE
}

/// Index (0..27) of the nakshatra containing a longitude.
pub fn nakshatra_index(longitude: f64) -> usize {
    let lon = normalize_degrees(longitude);
    ((lon * 27.0 / 360.0).floor() as usize).min(26)
}

/// Pada (1..=4) within the containing nakshatra.
pub fn pada_of(longitude: f64) -> u8 {
    let lon = normalize_degrees(longitude);
    let quarter = ((lon * 108.0 / 360.0).floor() as usize).min(107);
    (quarter % 4) as u8 + 1
}

pub fn nakshatra_lord(index: usize) -> Body {
    NAKSHATRA_LORD_SEQUENCE[index % 9]
}

/// Full placement (name, lord, pada, progress) for a longitude.
pub fn nakshatra_of(longitude: f64) -> NakshatraPlacement {
    let lon = normalize_degrees(longitude);
    let entry = &NAKSHATRA_TABLE[nakshatra_index(lon)];

    NakshatraPlacement {
        index: entry.index,
        name: entry.name.to_string(),
        lord: entry.lord,
        pada: pada_of(lon),
        progress: (lon * 27.0 / 360.0 - entry.index as f64).clamp(0.0, 1.0),
    }
}
