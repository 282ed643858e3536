//! Vimshottari dasha calculations for Vedic astrology.
//!
//! Dashas are time periods ruled by planets, calculated based on the Moon's nakshatra.
//! Each period is subdivided into nine sub-periods in the same proportions as
//! the full 120-year cycle, starting from the period's own lord.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ephemeris::types::Body;
use crate::vedic::nakshatra::nakshatra_of;

pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;
pub const VIMSHOTTARI_YEAR_DAYS: f64 = 365.25;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DashaLevel {
    Mahadasha,
    Antardasha,
    Pratyantardasha,
}

const DEPTH_LEVELS: &[DashaLevel] = &[
    DashaLevel::Mahadasha,
    DashaLevel::Antardasha,
    DashaLevel::Pratyantardasha,
];

impl DashaLevel {
    fn depth_index(self) -> usize {
        DEPTH_LEVELS.iter().position(|&d| d == self).unwrap_or(0)
    }
}

type PlanetYears = (Body, f64);

const VIMSHOTTARI_SEQUENCE: &[PlanetYears] = &[
    (Body::Ketu, 7.0),
    (Body::Venus, 20.0),
    (Body::Sun, 6.0),
    (Body::Moon, 10.0),
    (Body::Mars, 7.0),
    (Body::Rahu, 18.0),
    (Body::Jupiter, 16.0),
    (Body::Saturn, 19.0),
    (Body::Mercury, 17.0),
];

pub fn dasha_years(lord: Body) -> f64 {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .find(|(planet, _)| *planet == lord)
        .map_or(0.0, |(_, years)| *years)
}

fn sequence_index(lord: Body) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|(planet, _)| *planet == lord)
        .unwrap_or(0)
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum DashaError {
    #[error("{lord} mahadasha starting {start} runs past the representable date range")]
    OutOfRange { lord: Body, start: DateTime<Utc> },
}

/// One node of the dasha tree. Children tile `[start, end)` exactly.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaPeriod {
    pub lord: Body,
    pub level: DashaLevel,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub children: Vec<DashaPeriod>,
}

impl DashaPeriod {
    /// Half-open containment: `start <= at < end`.
    pub fn contains(&self, at: DateTime<Utc>) -> bool {
        self.start <= at && at < self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashaTimeline {
    #[serde(rename = "birthDateTime")]
    pub birth_date_time: DateTime<Utc>,
    pub depth: DashaLevel,
    /// Lord of the Moon's nakshatra; rules the first mahadasha
    pub starting_lord: Body,
    /// Years of the first mahadasha left at birth
    pub balance_years: f64,
    pub periods: Vec<DashaPeriod>,
}

/// Lord, level and bounds of an active period, without its subtree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ActivePeriod {
    pub lord: Body,
    pub level: DashaLevel,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

impl From<&DashaPeriod> for ActivePeriod {
    fn from(period: &DashaPeriod) -> Self {
        Self {
            lord: period.lord,
            level: period.level,
            start: period.start,
            end: period.end,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrentDasha {
    pub mahadasha: ActivePeriod,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub antardasha: Option<ActivePeriod>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub pratyantardasha: Option<ActivePeriod>,
}

/// Build the Vimshottari tree from the Moon's sidereal longitude.
///
/// The nine mahadashas make one pass through the sequence starting at the
/// Moon's nakshatra lord; the first one only runs for the unelapsed share.
pub fn build_vimshottari_timeline(
    moon_longitude: f64,
    birth: DateTime<Utc>,
    depth: DashaLevel,
) -> Result<DashaTimeline, DashaError> {
    let nakshatra = nakshatra_of(moon_longitude);
    let start_index = sequence_index(nakshatra.lord);
    let target_depth_index = depth.depth_index();
    let balance_years = dasha_years(nakshatra.lord) * (1.0 - nakshatra.progress);

    let mut current_start = birth;
    let mut periods = Vec::with_capacity(VIMSHOTTARI_SEQUENCE.len());

    for offset in 0..VIMSHOTTARI_SEQUENCE.len() {
        let seq_index = (start_index + offset) % VIMSHOTTARI_SEQUENCE.len();
        let (planet, years) = VIMSHOTTARI_SEQUENCE[seq_index];

        let effective_years = if offset == 0 { balance_years } else { years };
        let days = (effective_years * VIMSHOTTARI_YEAR_DAYS) as i64;
        let end = current_start
            .checked_add_signed(Duration::days(days))
            .ok_or(DashaError::OutOfRange {
                lord: planet,
                start: current_start,
            })?;

        let period = build_period(planet, current_start, end, 0, target_depth_index);
        current_start = period.end;
        periods.push(period);
    }

    Ok(DashaTimeline {
        birth_date_time: birth,
        depth,
        starting_lord: nakshatra.lord,
        balance_years,
        periods,
    })
}

fn build_period(
    planet: Body,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    level_index: usize,
    target_depth_index: usize,
) -> DashaPeriod {
    let level = DEPTH_LEVELS[level_index.min(DEPTH_LEVELS.len() - 1)];
    let mut period = DashaPeriod {
        lord: planet,
        level,
        start,
        end,
        children: Vec::new(),
    };

    if level_index >= target_depth_index {
        return period;
    }

    let span_seconds = (end - start).num_seconds() as f64;
    let sequence_start = sequence_index(planet);
    let mut child_start = start;

    for offset in 0..VIMSHOTTARI_SEQUENCE.len() {
        let child_index = (sequence_start + offset) % VIMSHOTTARI_SEQUENCE.len();
        let (child_planet, child_years) = VIMSHOTTARI_SEQUENCE[child_index];

        // Last child absorbs truncation so the parent is tiled exactly
        let child_end = if offset + 1 == VIMSHOTTARI_SEQUENCE.len() {
            end
        } else {
            let seconds = (span_seconds * child_years / VIMSHOTTARI_TOTAL_YEARS) as i64;
            child_start
                .checked_add_signed(Duration::seconds(seconds))
                .map_or(end, |t| t.min(end))
        };

        let child = build_period(child_planet, child_start, child_end, level_index + 1, target_depth_index);
        child_start = child.end;
        period.children.push(child);
    }

    period
}

/// Active periods at `at`, one per generated level.
///
/// Returns `None` when `at` falls outside every mahadasha.
pub fn current_periods(timeline: &DashaTimeline, at: DateTime<Utc>) -> Option<CurrentDasha> {
    let Some(maha) = timeline.periods.iter().find(|p| p.contains(at)) else {
        log::debug!("No mahadasha contains {}", at);
        return None;
    };
    let antar = maha.children.iter().find(|p| p.contains(at));
    let pratyantar = antar.and_then(|a| a.children.iter().find(|p| p.contains(at)));

    Some(CurrentDasha {
        mahadasha: maha.into(),
        antardasha: antar.map(ActivePeriod::from),
        pratyantardasha: pratyantar.map(ActivePeriod::from),
    })
}
