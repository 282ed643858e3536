//! Angle arithmetic and birth-input validation.

use chrono::{Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use std::ops::RangeInclusive;
use serde::{Deserialize, Serialize};

use crate::ephemeris::types::GeoLocation;
use crate::error::ValidationError;
use crate::vedic::rashi::sign_of;

/// Birth years accepted by `parse_birth_input`, the four-digit `YYYY` range.
pub const SUPPORTED_YEARS: RangeInclusive<i32> = 1..=9999;

/// Normalize degrees to [0, 360).
pub fn normalize_degrees(value: f64) -> f64 {
    let normalized = value.rem_euclid(360.0);
    // A tiny negative input rounds up to exactly 360.0
    if normalized >= 360.0 {
        0.0
    } else {
        normalized
    }
}

/// Smallest separation between two longitudes, in [0, 180].
pub fn angular_difference(a: f64, b: f64) -> f64 {
    let diff = normalize_degrees(a - b);
    if diff > 180.0 {
        360.0 - diff
    } else {
        diff
    }
}

/// Round a longitude to two decimals without carrying 359.995.. over to 0.
pub fn round_longitude(value: f64) -> f64 {
    let rounded = (normalize_degrees(value) * 100.0).round() / 100.0;
    if rounded >= 360.0 {
        359.99
    } else {
        rounded
    }
}

/// Render a longitude as `D°M' (Sign)`.
pub fn format_degrees(value: f64) -> String {
    let lon = normalize_degrees(value);
    let sign = sign_of(lon);
    let within = lon - sign.start_degree();
    let mut degrees = within.floor() as u32;
    let mut minutes = ((within - within.floor()) * 60.0).round() as u32;
    if minutes == 60 {
        degrees += 1;
        minutes = 0;
    }
    format!("{}°{:02}' ({})", degrees, minutes, sign.name())
}

/// Validated birth data.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BirthInput {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub location: GeoLocation,
}

impl BirthInput {
    pub fn local_datetime(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Parse `YYYY-MM-DD`, `HH:MM` (or `HH:MM:SS`) and coordinates.
pub fn parse_birth_input(date: &str, time: &str, lat: f64, lon: f64) -> Result<BirthInput, ValidationError> {
    let date_str = date.trim();
    // %Y also takes signed years far beyond what the timeline can represent
    let parsed_date = NaiveDate::parse_from_str(date_str, "%Y-%m-%d")
        .ok()
        .filter(|d| SUPPORTED_YEARS.contains(&d.year()))
        .ok_or_else(|| ValidationError::InvalidDate {
            input: date.to_string(),
        })?;

    let time_str = time.trim();
    let parsed_time = NaiveTime::parse_from_str(time_str, "%H:%M")
        .or_else(|_| NaiveTime::parse_from_str(time_str, "%H:%M:%S"))
        .map_err(|_| ValidationError::InvalidTime {
            input: time.to_string(),
        })?;

    let location = GeoLocation::new(lat, lon)?;

    Ok(BirthInput {
        date: parsed_date,
        time: parsed_time,
        location,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_year_outside_supported_range_rejected() {
        for date in ["+262140-01-01", "0000-06-01", "-0500-03-21", "+10000-01-01"] {
            assert!(
                matches!(parse_birth_input(date, "12:00", 0.0, 0.0), Err(ValidationError::InvalidDate { .. })),
                "{}",
                date
            );
        }
        assert!(parse_birth_input("0001-01-01", "00:00", 0.0, 0.0).is_ok());
        assert!(parse_birth_input("9999-12-31", "23:59", 0.0, 0.0).is_ok());
    }

    #[test]
    fn test_normalize_degrees() {
        assert_eq!(normalize_degrees(0.0), 0.0);
        assert_eq!(normalize_degrees(360.0), 0.0);
        assert_eq!(normalize_degrees(720.0), 0.0);
        assert_eq!(normalize_degrees(-10.0), 350.0);
        assert_eq!(normalize_degrees(370.0), 10.0);
        assert!(normalize_degrees(-1e-15) < 360.0);
    }

    #[test]
    fn test_angular_difference() {
        assert_eq!(angular_difference(10.0, 350.0), 20.0);
        assert_eq!(angular_difference(350.0, 10.0), 20.0);
        assert_eq!(angular_difference(0.0, 180.0), 180.0);
        assert_eq!(angular_difference(45.0, 45.0), 0.0);
    }

    #[test]
    fn test_round_longitude_never_wraps() {
        assert_eq!(round_longitude(123.456), 123.46);
        assert_eq!(round_longitude(359.999), 359.99);
        assert_eq!(round_longitude(-0.001), 359.99);
        assert_eq!(round_longitude(360.0), 0.0);
    }

    #[test]
    fn test_format_degrees() {
        assert_eq!(format_degrees(45.5), "15°30' (Taurus)");
        assert_eq!(format_degrees(0.0), "0°00' (Aries)");
    }

    #[test]
    fn test_parse_birth_input() {
        let input = parse_birth_input("1995-01-01", "12:00", 28.6139, 77.2090).unwrap();
        assert_eq!(input.date, NaiveDate::from_ymd_opt(1995, 1, 1).unwrap());
        assert_eq!(input.time, NaiveTime::from_hms_opt(12, 0, 0).unwrap());

        assert!(matches!(
            parse_birth_input("1995-13-01", "12:00", 0.0, 0.0),
            Err(ValidationError::InvalidDate { .. })
        ));
        assert!(matches!(
            parse_birth_input("1995-01-01", "25:00", 0.0, 0.0),
            Err(ValidationError::InvalidTime { .. })
        ));
        assert!(matches!(
            parse_birth_input("1995-01-01", "12:00", 95.0, 0.0),
            Err(ValidationError::InvalidLatitude { .. })
        ));
    }
}
