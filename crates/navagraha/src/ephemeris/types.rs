use chrono::{DateTime, FixedOffset, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::error::ValidationError;

/// The nine grahas, in canonical chart order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Body {
    Sun,
    Moon,
    Mars,
    Mercury,
    Jupiter,
    Venus,
    Saturn,
    Rahu,
    Ketu,
}

impl Body {
    pub const ALL: [Body; 9] = [
        Body::Sun,
        Body::Moon,
        Body::Mars,
        Body::Mercury,
        Body::Jupiter,
        Body::Venus,
        Body::Saturn,
        Body::Rahu,
        Body::Ketu,
    ];

    /// The seven visible bodies (everything except the lunar nodes).
    pub const CLASSICAL: [Body; 7] = [
        Body::Sun,
        Body::Moon,
        Body::Mars,
        Body::Mercury,
        Body::Jupiter,
        Body::Venus,
        Body::Saturn,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Body::Sun => "Sun",
            Body::Moon => "Moon",
            Body::Mars => "Mars",
            Body::Mercury => "Mercury",
            Body::Jupiter => "Jupiter",
            Body::Venus => "Venus",
            Body::Saturn => "Saturn",
            Body::Rahu => "Rahu",
            Body::Ketu => "Ketu",
        }
    }

    pub const fn is_node(self) -> bool {
        matches!(self, Body::Rahu | Body::Ketu)
    }
}

impl fmt::Display for Body {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Geographic location coordinates
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoLocation {
    pub lat: f64,
    pub lon: f64,
}

impl GeoLocation {
    pub fn new(lat: f64, lon: f64) -> Result<Self, ValidationError> {
        if !lat.is_finite() || !(-90.0..=90.0).contains(&lat) {
            return Err(ValidationError::InvalidLatitude { value: lat });
        }
        if !lon.is_finite() || !(-180.0..=180.0).contains(&lon) {
            return Err(ValidationError::InvalidLongitude { value: lon });
        }
        Ok(Self { lat, lon })
    }
}

/// A calculation-ready timestamp.
///
/// `local` is the civil time as entered, `utc` the same moment in UT and
/// `julian_day` the UT Julian day handed to the ephemeris.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Instant {
    pub local: NaiveDateTime,
    pub utc: DateTime<Utc>,
    #[serde(rename = "julianDay")]
    pub julian_day: f64,
}

const UNIX_EPOCH_JD: f64 = 2_440_587.5;
const SECONDS_PER_DAY: f64 = 86_400.0;

impl Instant {
    /// Interpret a civil date/time at a fixed offset east of UTC (in minutes).
    pub fn from_local(local: NaiveDateTime, utc_offset_minutes: i32) -> Result<Self, ValidationError> {
        let offset = FixedOffset::east_opt(utc_offset_minutes * 60)
            .ok_or(ValidationError::InvalidUtcOffset { minutes: utc_offset_minutes })?;
        let utc = offset
            .from_local_datetime(&local)
            .single()
            .ok_or_else(|| ValidationError::AmbiguousLocalTime { local: local.to_string() })?
            .with_timezone(&Utc);
        Ok(Self {
            local,
            utc,
            julian_day: julian_day_from_utc(utc),
        })
    }

    pub fn from_utc(utc: DateTime<Utc>) -> Self {
        Self {
            local: utc.naive_utc(),
            utc,
            julian_day: julian_day_from_utc(utc),
        }
    }
}

/// UT Julian day for a UTC timestamp (Gregorian calendar).
pub fn julian_day_from_utc(utc: DateTime<Utc>) -> f64 {
    let seconds = utc.timestamp() as f64 + f64::from(utc.timestamp_subsec_nanos()) / 1e9;
    UNIX_EPOCH_JD + seconds / SECONDS_PER_DAY
}

/// Sidereal position of one body
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BodyPosition {
    /// Longitude in degrees (0-360), rounded to two decimals
    pub longitude: f64,
    /// Speed in longitude (degrees per day)
    pub speed: f64,
    pub retrograde: bool,
}

/// Positions of all nine bodies at one instant
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Positions {
    pub instant: Instant,
    pub bodies: BTreeMap<Body, BodyPosition>,
}

impl Positions {
    pub fn get(&self, body: Body) -> Option<&BodyPosition> {
        self.bodies.get(&body)
    }

    pub fn longitude(&self, body: Body) -> Option<f64> {
        self.bodies.get(&body).map(|p| p.longitude)
    }
}
