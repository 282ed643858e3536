//! Sidereal body positions and the ascendant.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ephemeris::adapter::{Ephemeris, EphemerisError};
use crate::ephemeris::normalize::{normalize_degrees, round_longitude};
use crate::ephemeris::types::{Body, BodyPosition, GeoLocation, Instant, Positions};
use crate::vedic::rashi::{sign_of, Sign};

/// Lagna. `degraded` is set when the adapter could not supply it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Ascendant {
    pub longitude: f64,
    pub sign: Option<Sign>,
    pub sign_name: String,
    pub degraded: bool,
}

impl Ascendant {
    pub fn new(longitude: f64) -> Self {
        let lon = normalize_degrees(longitude);
        let sign = sign_of(lon);
        Self {
            longitude: lon,
            sign: Some(sign),
            sign_name: sign.name().to_string(),
            degraded: false,
        }
    }

    pub fn unknown() -> Self {
        Self {
            longitude: 0.0,
            sign: None,
            sign_name: "Unknown".to_string(),
            degraded: true,
        }
    }
}

/// Query the eight ephemeris bodies and derive Ketu opposite Rahu.
pub fn compute_positions(ephemeris: &dyn Ephemeris, instant: &Instant) -> Result<Positions, EphemerisError> {
    let mut bodies = BTreeMap::new();

    for body in Body::ALL.iter().copied().filter(|b| *b != Body::Ketu) {
        let (longitude, speed) = ephemeris.longitude_and_speed(instant, body)?;
        if !longitude.is_finite() {
            return Err(EphemerisError::InvalidData {
                what: format!("{} longitude", body),
                value: longitude,
            });
        }
        if !speed.is_finite() {
            return Err(EphemerisError::InvalidData {
                what: format!("{} speed", body),
                value: speed,
            });
        }
        bodies.insert(
            body,
            BodyPosition {
                longitude: round_longitude(longitude),
                speed,
                retrograde: speed < 0.0,
            },
        );
    }

    let rahu = bodies.get(&Body::Rahu).copied().ok_or_else(|| EphemerisError::CalculationFailed {
        body: Body::Rahu,
        julian_day: instant.julian_day,
        message: "Rahu missing; cannot derive Ketu".to_string(),
    })?;
    bodies.insert(
        Body::Ketu,
        BodyPosition {
            longitude: round_longitude(rahu.longitude + 180.0),
            speed: -rahu.speed,
            retrograde: !rahu.retrograde,
        },
    );

    Ok(Positions {
        instant: *instant,
        bodies,
    })
}

/// Sidereal ascendant; falls back to `Ascendant::unknown()` on any failure.
pub fn compute_ascendant(ephemeris: &dyn Ephemeris, instant: &Instant, location: &GeoLocation) -> Ascendant {
    let sidereal = ephemeris
        .tropical_ascendant(instant, location)
        .and_then(|tropical| Ok(tropical - ephemeris.ayanamsa(instant)?));

    match sidereal {
        Ok(value) if value.is_finite() => Ascendant::new(value),
        Ok(value) => {
            log::warn!("Ascendant is not finite ({}); using Unknown lagna", value);
            Ascendant::unknown()
        }
        Err(e) => {
            log::warn!("Ascendant calculation failed: {}; using Unknown lagna", e);
            Ascendant::unknown()
        }
    }
}
