//! Saturn and Jupiter transits counted from the natal Moon sign.

use serde::{Deserialize, Serialize};

use crate::ephemeris::types::{Body, Positions};
use crate::vedic::rashi::{sign_of, Sign};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SadeSatiPhase {
    Rising,
    Peak,
    Setting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status")]
pub enum SaturnTransit {
    #[serde(rename = "Sade Sati")]
    SadeSati { phase: SadeSatiPhase },
    /// Kantaka Shani, 4th or 8th from the Moon
    Dhaiya { house: u8 },
    Clear,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum JupiterTransit {
    Favorable,
    Neutral,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransitAssessment {
    pub natal_moon_sign: Sign,
    pub saturn_sign: Option<Sign>,
    pub jupiter_sign: Option<Sign>,
    pub saturn: Option<SaturnTransit>,
    pub jupiter: Option<JupiterTransit>,
}

/// Position of `transit` counted from `natal`, where `natal` itself is 1.
pub fn nth_from(natal: Sign, transit: Sign) -> u8 {
    ((transit.index() + 12 - natal.index()) % 12) as u8 + 1
}

pub fn saturn_transit(natal_moon: Sign, saturn: Sign) -> SaturnTransit {
    match nth_from(natal_moon, saturn) {
        12 => SaturnTransit::SadeSati { phase: SadeSatiPhase::Rising },
        1 => SaturnTransit::SadeSati { phase: SadeSatiPhase::Peak },
        2 => SaturnTransit::SadeSati { phase: SadeSatiPhase::Setting },
        house @ (4 | 8) => SaturnTransit::Dhaiya { house },
        _ => SaturnTransit::Clear,
    }
}

pub fn jupiter_transit(natal_moon: Sign, jupiter: Sign) -> JupiterTransit {
    match nth_from(natal_moon, jupiter) {
        2 | 5 | 7 | 9 | 11 => JupiterTransit::Favorable,
        _ => JupiterTransit::Neutral,
    }
}

/// Assess current Saturn and Jupiter positions against the natal Moon sign.
pub fn assess_transits(natal_moon_sign: Sign, positions_now: &Positions) -> TransitAssessment {
    let saturn_sign = positions_now.longitude(Body::Saturn).map(sign_of);
    let jupiter_sign = positions_now.longitude(Body::Jupiter).map(sign_of);

    TransitAssessment {
        natal_moon_sign,
        saturn_sign,
        jupiter_sign,
        saturn: saturn_sign.map(|s| saturn_transit(natal_moon_sign, s)),
        jupiter: jupiter_sign.map(|s| jupiter_transit(natal_moon_sign, s)),
    }
}
