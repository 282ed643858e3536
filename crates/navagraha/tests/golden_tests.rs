mod common;

use chrono::{TimeZone, Utc};
use navagraha::ephemeris::parse_birth_input;
use navagraha::vedic::transit::{JupiterTransit, SaturnTransit};
use navagraha::vedic::{DashaLevel, Dignity, DivisionalScheme, FindingKind, Sign};
use navagraha::{generate_chart_report, Body, ChartReport, ChartRequest, EngineSettings};

fn golden_report() -> ChartReport {
    let request = ChartRequest {
        birth: parse_birth_input("1995-01-01", "12:00", 28.6139, 77.2090).unwrap(),
        now: Utc.with_ymd_and_hms(2024, 6, 1, 0, 0, 0).unwrap(),
    };
    generate_chart_report(&common::golden_ephemeris(), &EngineSettings::default(), &request).unwrap()
}

#[test]
fn test_golden_instant() {
    let report = golden_report();
    assert_eq!(report.chart.instant.utc, Utc.with_ymd_and_hms(1995, 1, 1, 6, 30, 0).unwrap());
}

#[test]
fn test_golden_ascendant_and_houses() {
    let report = golden_report();
    let chart = &report.chart;
    assert!((chart.ascendant.longitude - 351.01).abs() < 1e-9);
    assert_eq!(chart.ascendant.sign, Some(Sign::Pisces));
    assert!(!chart.ascendant.degraded);

    let expected = [
        (Body::Sun, Sign::Sagittarius, 9),
        (Body::Moon, Sign::Sagittarius, 9),
        (Body::Mars, Sign::Leo, 5),
        (Body::Mercury, Sign::Sagittarius, 10),
        (Body::Jupiter, Sign::Scorpio, 8),
        (Body::Venus, Sign::Scorpio, 8),
        (Body::Saturn, Sign::Aquarius, 11),
        (Body::Rahu, Sign::Libra, 8),
        (Body::Ketu, Sign::Aries, 2),
    ];
    for (body, sign, house) in expected {
        assert_eq!(chart.sign(body), Some(sign), "{} sign", body);
        assert_eq!(chart.house(body), Some(house), "{} house", body);
    }
    assert_eq!(chart.occupants(8), &[Body::Jupiter, Body::Venus, Body::Rahu]);
}

#[test]
fn test_golden_nodes() {
    let report = golden_report();
    let rahu = report.chart.placement(Body::Rahu).unwrap();
    let ketu = report.chart.placement(Body::Ketu).unwrap();
    assert_eq!(ketu.longitude, 21.8);
    assert!(rahu.retrograde);
    assert!(!ketu.retrograde);
}

#[test]
fn test_golden_moon_nakshatra() {
    let report = golden_report();
    let moon = report.chart.placement(Body::Moon).unwrap();
    assert_eq!(moon.nakshatra.name, "Purva Ashadha");
    assert_eq!(moon.nakshatra.lord, Body::Venus);
    assert_eq!(moon.nakshatra.pada, 1);
}

#[test]
fn test_golden_strength() {
    let report = golden_report();
    let chart = &report.chart;
    assert_eq!(chart.placement(Body::Saturn).unwrap().dignity, Dignity::OwnSign);
    assert_eq!(chart.placement(Body::Sun).unwrap().dignity, Dignity::Neutral);
    assert!(chart.placement(Body::Moon).unwrap().combust);
    assert!(chart.placement(Body::Mercury).unwrap().combust);
    assert!(!chart.placement(Body::Venus).unwrap().combust);
    assert_eq!(report.strengths[&Body::Saturn].index, 0.5);
}

#[test]
fn test_golden_house_scores() {
    let report = golden_report();
    let expected = [0, -2, 1, 0, 1, -1, 0, 1, -3, 1, -1, -1];
    for (i, score) in expected.iter().enumerate() {
        assert_eq!(report.house_scores.score(i as u8 + 1), *score, "house {}", i + 1);
    }
    assert_eq!(report.house_scores.total, -4);
    let strongest = report.strongest_house.unwrap();
    assert_eq!((strongest.house, strongest.score), (3, 1));
}

#[test]
fn test_golden_divisional() {
    let report = golden_report();
    let d9 = &report.divisional_charts[&DivisionalScheme::D9];
    assert_eq!(d9.sign(Body::Sun), Some(Sign::Virgo));
    assert_eq!(d9.sign(Body::Mercury), Some(Sign::Sagittarius));
    assert_eq!(d9.sign(Body::Saturn), Some(Sign::Aquarius));
    assert_eq!(d9.sign(Body::Mars), Some(Sign::Cancer));
    assert_eq!(report.divisional_charts.len(), 4);
}

#[test]
fn test_golden_findings() {
    let report = golden_report();
    let labels: Vec<(&str, &str)> = report
        .yogas
        .iter()
        .map(|f| (f.label.as_str(), f.explanation.as_str()))
        .collect();
    assert_eq!(
        labels,
        vec![
            ("Vipareeta Raja Yoga", "Rahu and Venus in dusthanas."),
            ("Vargottama", "Mercury occupies Sagittarius in both rasi and navamsa."),
            ("Vargottama", "Saturn occupies Aquarius in both rasi and navamsa."),
        ]
    );
    assert!(report.yogas.iter().all(|f| f.kind == FindingKind::Yoga));
    assert!(report.doshas.is_empty());
}

#[test]
fn test_golden_dasha() {
    let report = golden_report();
    let dasha = &report.dasha;
    assert_eq!(dasha.starting_lord, Body::Venus);
    assert_eq!(dasha.depth, DashaLevel::Pratyantardasha);
    assert_eq!(dasha.periods[0].end, Utc.with_ymd_and_hms(2013, 1, 26, 6, 30, 0).unwrap());
    assert_eq!(dasha.periods[2].lord, Body::Moon);
    assert_eq!(dasha.periods[2].start, Utc.with_ymd_and_hms(2019, 1, 26, 6, 30, 0).unwrap());
    assert_eq!(dasha.periods[8].end, Utc.with_ymd_and_hms(2113, 1, 23, 6, 30, 0).unwrap());

    let current = report.current_dasha.as_ref().unwrap();
    assert_eq!(current.mahadasha.lord, Body::Moon);
    assert_eq!(current.antardasha.unwrap().lord, Body::Saturn);
    assert_eq!(current.pratyantardasha.unwrap().lord, Body::Mars);
}

#[test]
fn test_golden_transits() {
    let report = golden_report();
    let transits = report.transits.as_ref().unwrap();
    assert_eq!(transits.natal_moon_sign, Sign::Sagittarius);
    assert_eq!(transits.saturn, Some(SaturnTransit::Clear));
    assert_eq!(transits.jupiter, Some(JupiterTransit::Neutral));
}

#[test]
fn test_golden_report_serializes() {
    let report = golden_report();
    let json = serde_json::to_value(&report).unwrap();
    assert!(json.get("chart").is_some());
    assert!(json.get("yogas").unwrap().is_array());
    assert_eq!(json["formatted"]["Lagna"], "21°01' (Pisces)");
}

#[test]
fn test_golden_is_reproducible() {
    assert_eq!(golden_report(), golden_report());
}
