use thiserror::Error;

use crate::ephemeris::EphemerisError;
use crate::vedic::dashas::DashaError;

/// Rejected request input. Raised before any computation runs.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("Invalid birth date '{input}': expected YYYY-MM-DD")]
    InvalidDate { input: String },
    #[error("Invalid birth time '{input}': expected HH:MM")]
    InvalidTime { input: String },
    #[error("Latitude {value} is outside [-90, 90]")]
    InvalidLatitude { value: f64 },
    #[error("Longitude {value} is outside [-180, 180]")]
    InvalidLongitude { value: f64 },
    #[error("UTC offset of {minutes} minutes is out of range")]
    InvalidUtcOffset { minutes: i32 },
    #[error("Local time {local} does not map to a single UTC instant")]
    AmbiguousLocalTime { local: String },
}

/// Errors surfaced by the chart orchestrator.
#[derive(Error, Debug)]
pub enum ChartError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Ephemeris(#[from] EphemerisError),
    #[error(transparent)]
    Dasha(#[from] DashaError),
}
