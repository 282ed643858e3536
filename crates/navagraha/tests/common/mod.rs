#![allow(dead_code)]

use chrono::{TimeZone, Utc};
use navagraha::ephemeris::types::{BodyPosition, Positions};
use navagraha::vedic::{build_chart_state, Ascendant, ChartState};
use navagraha::{Body, FixedEphemeris, Instant};

/// Recorded sidereal positions for 1995-01-01 12:00 IST, New Delhi.
pub fn golden_ephemeris() -> FixedEphemeris {
    FixedEphemeris::new()
        .with_body(Body::Sun, 256.80, 1.019)
        .with_body(Body::Moon, 254.62, 12.21)
        .with_body(Body::Mars, 130.50, 0.02)
        .with_body(Body::Mercury, 268.40, 1.58)
        .with_body(Body::Jupiter, 217.30, 0.21)
        .with_body(Body::Venus, 214.50, 1.03)
        .with_body(Body::Saturn, 313.50, 0.07)
        .with_body(Body::Rahu, 201.80, -0.053)
        .with_tropical_ascendant(14.80)
        .with_ayanamsa(23.79)
}

/// Chart from plain longitudes, all bodies direct.
pub fn chart_from(entries: &[(Body, f64)], ascendant: Option<f64>) -> ChartState {
    let positions = Positions {
        instant: Instant::from_utc(Utc.with_ymd_and_hms(2000, 1, 1, 0, 0, 0).unwrap()),
        bodies: entries
            .iter()
            .map(|(body, lon)| {
                (
                    *body,
                    BodyPosition {
                        longitude: *lon,
                        speed: 1.0,
                        retrograde: false,
                    },
                )
            })
            .collect(),
    };
    let ascendant = ascendant.map(Ascendant::new).unwrap_or_else(Ascendant::unknown);
    build_chart_state(&positions, ascendant)
}
