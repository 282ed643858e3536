//! Dosha (affliction) detectors.

use crate::ephemeris::normalize::{angular_difference, normalize_degrees};
use crate::ephemeris::types::Body;
use crate::vedic::chart::ChartState;
use crate::vedic::rules::Finding;

const MANGLIK_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];
const PITRA_ORB: f64 = 8.0;

/// Mars in 1, 2, 4, 7, 8 or 12 counted from the lagna or from the Moon.
pub fn manglik(chart: &ChartState) -> Option<Finding> {
    let mars = chart.house(Body::Mars)?;
    let from_lagna = MANGLIK_HOUSES.contains(&mars);
    let from_moon = chart
        .house(Body::Moon)
        .map_or(false, |moon| MANGLIK_HOUSES.contains(&(((mars + 12 - moon) % 12) + 1)));

    (from_lagna || from_moon).then(|| {
        let basis = match (from_lagna, from_moon) {
            (true, true) => "the lagna and the Moon",
            (true, false) => "the lagna",
            _ => "the Moon",
        };
        Finding::dosha("Manglik Dosha", format!("Mars in a Manglik house from {}.", basis))
    })
}

/// Every classical body inside one half of the zodiac bounded by the nodes.
///
/// Either arc qualifies, Rahu to Ketu or Ketu to Rahu, including the one
/// that wraps through 0° Aries.
pub fn kaal_sarp(chart: &ChartState) -> Option<Finding> {
    let rahu = chart.longitude(Body::Rahu)?;
    let offsets: Vec<f64> = Body::CLASSICAL
        .iter()
        .map(|body| chart.longitude(*body).map(|lon| normalize_degrees(lon - rahu)))
        .collect::<Option<Vec<_>>>()?;

    let rahu_to_ketu = offsets.iter().all(|d| *d <= 180.0);
    let ketu_to_rahu = offsets.iter().all(|d| *d >= 180.0 || *d == 0.0);
    (rahu_to_ketu || ketu_to_rahu)
        .then(|| Finding::dosha("Kaal Sarp Dosha", "All planets hemmed within the Rahu-Ketu axis."))
}

/// Sun within 8 degrees of Rahu, Ketu or Saturn.
pub fn pitra(chart: &ChartState) -> Option<Finding> {
    let sun = chart.longitude(Body::Sun)?;
    [Body::Rahu, Body::Ketu, Body::Saturn].iter().find_map(|afflicter| {
        let lon = chart.longitude(*afflicter)?;
        (angular_difference(sun, lon) <= PITRA_ORB)
            .then(|| Finding::dosha("Pitra Dosha", format!("Sun afflicted by {}.", afflicter)))
    })
}
