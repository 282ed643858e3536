//! Signs (rashis), sign lords and whole-sign houses.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::ephemeris::normalize::normalize_degrees;
use crate::ephemeris::types::Body;

pub const SIGN_SIZE: f64 = 30.0;

pub const KENDRA_HOUSES: [u8; 4] = [1, 4, 7, 10];
pub const TRIKONA_HOUSES: [u8; 3] = [1, 5, 9];
pub const DUSTHANA_HOUSES: [u8; 3] = [6, 8, 12];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Sign {
    Aries,
    Taurus,
    Gemini,
    Cancer,
    Leo,
    Virgo,
    Libra,
    Scorpio,
    Sagittarius,
    Capricorn,
    Aquarius,
    Pisces,
}

/// Movable / fixed / dual quality of a sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Modality {
    Movable,
    Fixed,
    Dual,
}

// (sign, regional name, lord)
const SIGN_TABLE: [(Sign, &str, Body); 12] = [
    (Sign::Aries, "Medam", Body::Mars),
    (Sign::Taurus, "Edavam", Body::Venus),
    (Sign::Gemini, "Mithunam", Body::Mercury),
    (Sign::Cancer, "Karkidakam", Body::Moon),
    (Sign::Leo, "Chingam", Body::Sun),
    (Sign::Virgo, "Kanni", Body::Mercury),
    (Sign::Libra, "Thulam", Body::Venus),
    (Sign::Scorpio, "Vrischikam", Body::Mars),
    (Sign::Sagittarius, "Dhanu", Body::Jupiter),
    (Sign::Capricorn, "Makaram", Body::Saturn),
    (Sign::Aquarius, "Kumbham", Body::Saturn),
    (Sign::Pisces, "Meenam", Body::Jupiter),
];

impl Sign {
    pub const ALL: [Sign; 12] = [
        Sign::Aries,
        Sign::Taurus,
        Sign::Gemini,
        Sign::Cancer,
        Sign::Leo,
        Sign::Virgo,
        Sign::Libra,
        Sign::Scorpio,
        Sign::Sagittarius,
        Sign::Capricorn,
        Sign::Aquarius,
        Sign::Pisces,
    ];

    /// Zero-based position in the zodiac (Aries = 0).
    pub const fn index(self) -> usize {
        self as usize
    }

    pub fn from_index(index: usize) -> Sign {
        Sign::ALL[index % 12]
    }

    pub const fn name(self) -> &'static str {
        match self {
            Sign::Aries => "Aries",
            Sign::Taurus => "Taurus",
            Sign::Gemini => "Gemini",
            Sign::Cancer => "Cancer",
            Sign::Leo => "Leo",
            Sign::Virgo => "Virgo",
            Sign::Libra => "Libra",
            Sign::Scorpio => "Scorpio",
            Sign::Sagittarius => "Sagittarius",
            Sign::Capricorn => "Capricorn",
            Sign::Aquarius => "Aquarius",
            Sign::Pisces => "Pisces",
        }
    }

    /// Malayalam name (Medam, Edavam, ...).
    pub fn regional_name(self) -> &'static str {
        SIGN_TABLE[self.index()].1
    }

    /// Look a sign up by English or regional name, case-insensitively.
    pub fn from_name(name: &str) -> Option<Sign> {
        let needle = name.trim();
        SIGN_TABLE
            .iter()
            .find(|(sign, regional, _)| {
                sign.name().eq_ignore_ascii_case(needle) || regional.eq_ignore_ascii_case(needle)
            })
            .map(|(sign, _, _)| *sign)
    }

    pub fn lord(self) -> Body {
        SIGN_TABLE[self.index()].2
    }

    pub fn modality(self) -> Modality {
        match self.index() % 3 {
            0 => Modality::Movable,
            1 => Modality::Fixed,
            _ => Modality::Dual,
        }
    }

    pub fn start_degree(self) -> f64 {
        self.index() as f64 * SIGN_SIZE
    }

    /// Sign `n` steps forward (n may be negative).
    pub fn offset(self, n: i32) -> Sign {
        Sign::ALL[(self.index() as i32 + n).rem_euclid(12) as usize]
    }
}

impl fmt::Display for Sign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Sign containing a longitude. Values at a boundary belong to the later sign.
pub fn sign_of(longitude: f64) -> Sign {
    let index = (normalize_degrees(longitude) / SIGN_SIZE).floor() as usize;
    Sign::ALL[index.min(11)]
}

pub fn sign_lord(sign: Sign) -> Body {
    sign.lord()
}

/// Degrees elapsed within the sign, in [0, 30).
pub fn degree_in_sign(longitude: f64) -> f64 {
    let lon = normalize_degrees(longitude);
    lon - sign_of(lon).start_degree()
}

/// House (1..=12) counted from the ascendant in 30-degree steps.
pub fn house_of(longitude: f64, ascendant: f64) -> u8 {
    let relative = normalize_degrees(longitude - ascendant);
    ((relative / SIGN_SIZE).floor() as u8).min(11) + 1
}

/// House `n` places on from `house` (n = 1 returns `house` itself).
pub fn nth_house_from(house: u8, n: u8) -> u8 {
    ((house as u16 - 1 + n as u16 - 1) % 12) as u8 + 1
}

pub fn is_kendra(house: u8) -> bool {
    KENDRA_HOUSES.contains(&house)
}

pub fn is_trikona(house: u8) -> bool {
    TRIKONA_HOUSES.contains(&house)
}

pub fn is_dusthana(house: u8) -> bool {
    DUSTHANA_HOUSES.contains(&house)
}

/// Whole-sign house -> sign map, house 1 being the ascendant's sign.
pub fn house_signs(ascendant_sign: Sign) -> BTreeMap<u8, Sign> {
    (1..=12u8)
        .map(|house| (house, ascendant_sign.offset(house as i32 - 1)))
        .collect()
}

/// Whole-sign house -> lord map.
pub fn house_lords(ascendant_sign: Sign) -> BTreeMap<u8, Body> {
    house_signs(ascendant_sign)
        .into_iter()
        .map(|(house, sign)| (house, sign.lord()))
        .collect()
}
