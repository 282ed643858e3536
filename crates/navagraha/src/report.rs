//! Chart report orchestration.
//!
//! Runs every engine stage in dependency order for one request and collects
//! the results into a single serializable report.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::ephemeris::adapter::Ephemeris;
use crate::ephemeris::normalize::{format_degrees, BirthInput};
use crate::ephemeris::types::{Body, Instant};
use crate::error::ChartError;
use crate::settings::EngineSettings;
use crate::vedic::chart::{build_chart_state, ChartState};
use crate::vedic::dashas::{build_vimshottari_timeline, current_periods, CurrentDasha, DashaTimeline};
use crate::vedic::drishti::{compute_aspects, compute_sign_aspects, BodyAspects};
use crate::vedic::house_score::{
    angular_occupancy, compute_house_scores, empty_houses, AngularOccupancy, EmptyHouse, HouseScores,
};
use crate::vedic::positions::{compute_ascendant, compute_positions};
use crate::vedic::rashi::Sign;
use crate::vedic::rules::{detect_doshas, detect_yogas, Finding, RuleContext};
use crate::vedic::strength::{evaluate_strengths, BodyStrength};
use crate::vedic::transit::{assess_transits, TransitAssessment};
use crate::vedic::vargas::{build_divisional_charts, DivisionalChart, DivisionalScheme};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartRequest {
    pub birth: BirthInput,
    /// Reference time for current dasha and transits
    pub now: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrongestHouse {
    pub house: u8,
    pub score: i32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartReport {
    pub request: ChartRequest,
    pub chart: ChartState,
    /// `D°M' (Sign)` rendering of each body and the lagna
    pub formatted: BTreeMap<String, String>,
    pub divisional_charts: BTreeMap<DivisionalScheme, DivisionalChart>,
    pub strengths: BTreeMap<Body, BodyStrength>,
    pub aspects: BTreeMap<Body, BodyAspects>,
    pub sign_aspects: BTreeMap<Body, Vec<Sign>>,
    pub house_scores: HouseScores,
    pub strongest_house: Option<StrongestHouse>,
    pub empty_houses: Vec<EmptyHouse>,
    pub angular_occupancy: AngularOccupancy,
    pub dasha: DashaTimeline,
    pub current_dasha: Option<CurrentDasha>,
    pub yogas: Vec<Finding>,
    pub doshas: Vec<Finding>,
    pub transits: Option<TransitAssessment>,
}

fn formatted_positions(chart: &ChartState) -> BTreeMap<String, String> {
    let mut formatted: BTreeMap<String, String> = chart
        .bodies
        .iter()
        .map(|(body, placement)| (body.to_string(), format_degrees(placement.longitude)))
        .collect();
    if !chart.ascendant.degraded {
        formatted.insert("Lagna".to_string(), format_degrees(chart.ascendant.longitude));
    }
    formatted
}

/// Build the full report for one birth request.
pub fn generate_chart_report(
    ephemeris: &dyn Ephemeris,
    settings: &EngineSettings,
    request: &ChartRequest,
) -> Result<ChartReport, ChartError> {
    let birth = &request.birth;
    let instant = Instant::from_local(birth.local_datetime(), settings.utc_offset_minutes)?;
    log::info!(
        "Generating chart for {} (UTC {}) at {:.4}, {:.4}",
        instant.local,
        instant.utc,
        birth.location.lat,
        birth.location.lon
    );

    // Position
    let positions = compute_positions(ephemeris, &instant)?;
    let ascendant = compute_ascendant(ephemeris, &instant, &birth.location);

    // Structure and divisional charts
    let chart = build_chart_state(&positions, ascendant);
    let divisional_charts = build_divisional_charts(&chart);

    // Strength and aspects
    let strengths = evaluate_strengths(&chart);
    let aspects = compute_aspects(&chart);
    let sign_aspects = compute_sign_aspects(&chart);

    // Scores, periods, rules, transits
    let house_scores = compute_house_scores(&chart);
    let strongest_house = house_scores
        .strongest()
        .map(|(house, score)| StrongestHouse { house, score });

    let moon_longitude = chart.longitude(Body::Moon).unwrap_or_default();
    let dasha = build_vimshottari_timeline(moon_longitude, instant.utc, settings.dasha_depth)?;
    let current_dasha = current_periods(&dasha, request.now);

    let ctx = RuleContext::new(&chart, &divisional_charts);
    let yogas = detect_yogas(&ctx);
    let doshas = detect_doshas(&ctx);
    log::debug!("{} yogas, {} doshas", yogas.len(), doshas.len());

    let transits = match chart.sign(Body::Moon) {
        Some(moon_sign) => {
            let now_positions = compute_positions(ephemeris, &Instant::from_utc(request.now))?;
            Some(assess_transits(moon_sign, &now_positions))
        }
        None => None,
    };

    Ok(ChartReport {
        request: request.clone(),
        formatted: formatted_positions(&chart),
        empty_houses: empty_houses(&chart),
        angular_occupancy: angular_occupancy(&chart),
        chart,
        divisional_charts,
        strengths,
        aspects,
        sign_aspects,
        house_scores,
        strongest_house,
        dasha,
        current_dasha,
        yogas,
        doshas,
        transits,
    })
}
