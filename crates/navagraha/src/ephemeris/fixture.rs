//! Table-driven ephemeris.
//!
//! Replays recorded values instead of computing them. Used for golden tests,
//! benchmarks and callers that already hold positions from elsewhere.

use std::collections::BTreeMap;

use crate::ephemeris::adapter::{Ephemeris, EphemerisError};
use crate::ephemeris::types::{Body, GeoLocation, Instant};

#[derive(Debug, Clone, Default)]
pub struct FixedEphemeris {
    bodies: BTreeMap<Body, (f64, f64)>,
    ascendant: Option<f64>,
    ayanamsa: Option<f64>,
}

impl FixedEphemeris {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a body's longitude and speed in the adapter's frame.
    pub fn with_body(mut self, body: Body, longitude: f64, speed: f64) -> Self {
        self.bodies.insert(body, (longitude, speed));
        self
    }

    pub fn with_tropical_ascendant(mut self, degrees: f64) -> Self {
        self.ascendant = Some(degrees);
        self
    }

    pub fn with_ayanamsa(mut self, degrees: f64) -> Self {
        self.ayanamsa = Some(degrees);
        self
    }
}

impl Ephemeris for FixedEphemeris {
    fn longitude_and_speed(&self, instant: &Instant, body: Body) -> Result<(f64, f64), EphemerisError> {
        self.bodies
            .get(&body)
            .copied()
            .ok_or_else(|| EphemerisError::CalculationFailed {
                body,
                julian_day: instant.julian_day,
                message: "no recorded position".to_string(),
            })
    }

    fn tropical_ascendant(&self, instant: &Instant, _location: &GeoLocation) -> Result<f64, EphemerisError> {
        self.ascendant.ok_or_else(|| EphemerisError::HouseCalculationFailed {
            message: format!("no recorded ascendant at JD {}", instant.julian_day),
        })
    }

    fn ayanamsa(&self, instant: &Instant) -> Result<f64, EphemerisError> {
        self.ayanamsa.ok_or_else(|| EphemerisError::InvalidData {
            what: format!("ayanamsa at JD {}", instant.julian_day),
            value: f64::NAN,
        })
    }
}
