mod common;

use std::collections::BTreeMap;

use common::chart_from;
use navagraha::vedic::rules::{DOSHA_CATALOG, YOGA_CATALOG};
use navagraha::vedic::{
    build_divisional_charts, detect_doshas, detect_yogas, evaluate_rules, ChartState, Finding, FindingKind, Rule,
    RuleContext,
};
use navagraha::Body;

fn run(rule: Rule, chart: &ChartState) -> Vec<Finding> {
    let vargas = build_divisional_charts(chart);
    rule.evaluate(&RuleContext::new(chart, &vargas))
}

fn explanations(findings: &[Finding]) -> Vec<&str> {
    findings.iter().map(|f| f.explanation.as_str()).collect()
}

#[test]
fn test_gajakesari() {
    let chart = chart_from(&[(Body::Moon, 95.0), (Body::Jupiter, 185.0)], Some(0.0));
    assert_eq!(run(Rule::Gajakesari, &chart).len(), 1);

    let chart = chart_from(&[(Body::Moon, 95.0), (Body::Jupiter, 215.0)], Some(0.0));
    assert!(run(Rule::Gajakesari, &chart).is_empty());
}

#[test]
fn test_budhaditya_needs_same_sign_and_orb() {
    let close = chart_from(&[(Body::Sun, 100.0), (Body::Mercury, 108.0)], Some(0.0));
    assert_eq!(run(Rule::Budhaditya, &close)[0].label, "Budhaditya Yoga");

    let wide = chart_from(&[(Body::Sun, 100.0), (Body::Mercury, 118.0)], Some(0.0));
    assert!(run(Rule::Budhaditya, &wide).is_empty());

    let across_signs = chart_from(&[(Body::Sun, 58.0), (Body::Mercury, 62.0)], Some(0.0));
    assert!(run(Rule::Budhaditya, &across_signs).is_empty());
}

#[test]
fn test_chandra_mangala() {
    let chart = chart_from(&[(Body::Moon, 200.0), (Body::Mars, 205.0)], Some(0.0));
    assert_eq!(run(Rule::ChandraMangala, &chart)[0].explanation, "Moon and Mars conjunct.");
}

#[test]
fn test_dhana_one_finding_per_body() {
    let chart = chart_from(
        &[(Body::Jupiter, 35.0), (Body::Venus, 305.0), (Body::Mercury, 100.0)],
        Some(0.0),
    );
    let findings = run(Rule::Dhana, &chart);
    assert_eq!(explanations(&findings), vec!["Jupiter in house 2.", "Venus in house 11."]);
}

#[test]
fn test_vipareeta_raja_skips_unplaced_lords() {
    // Mercury's lord Mars is absent; Saturn in Virgo has Mercury in the 8th
    let chart = chart_from(&[(Body::Saturn, 155.0), (Body::Mercury, 215.0)], Some(0.0));
    let findings = run(Rule::VipareetaRaja, &chart);
    assert_eq!(explanations(&findings), vec!["Saturn and Mercury in dusthanas."]);
}

#[test]
fn test_kemadruma() {
    let lonely = chart_from(&[(Body::Moon, 95.0), (Body::Sun, 200.0)], Some(0.0));
    assert_eq!(run(Rule::Kemadruma, &lonely).len(), 1);

    let supported = chart_from(&[(Body::Moon, 95.0), (Body::Sun, 125.0)], Some(0.0));
    assert!(run(Rule::Kemadruma, &supported).is_empty());
}

#[test]
fn test_kemadruma_wraps_to_twelfth_house() {
    let twelfth_occupied = chart_from(&[(Body::Moon, 10.0), (Body::Sun, 350.0)], Some(0.0));
    assert!(run(Rule::Kemadruma, &twelfth_occupied).is_empty());

    let empty_sides = chart_from(&[(Body::Moon, 10.0), (Body::Sun, 200.0)], Some(0.0));
    assert_eq!(run(Rule::Kemadruma, &empty_sides).len(), 1);
}

#[test]
fn test_neecha_bhanga_raja() {
    let cancelled = chart_from(&[(Body::Saturn, 10.0), (Body::Venus, 20.0)], Some(0.0));
    assert_eq!(run(Rule::NeechaBhangaRaja, &cancelled).len(), 1);

    let apart = chart_from(&[(Body::Saturn, 10.0), (Body::Venus, 40.0)], Some(0.0));
    assert!(run(Rule::NeechaBhangaRaja, &apart).is_empty());
}

#[test]
fn test_raja_kendra_and_trikona_lords_together() {
    // Aries lagna: Moon rules the 4th, Jupiter the 9th
    let chart = chart_from(&[(Body::Moon, 100.0), (Body::Jupiter, 105.0)], Some(0.0));
    let findings = run(Rule::Raja, &chart);
    assert_eq!(
        explanations(&findings),
        vec!["Moon (Kendra lord) with Jupiter (Trikona lord) in house 4."]
    );
}

#[test]
fn test_raja_reports_each_pair_once() {
    // Leo lagna: Sun and Mars both rule a kendra and a trikona
    let chart = chart_from(&[(Body::Sun, 130.0), (Body::Mars, 135.0)], Some(120.0));
    let findings = run(Rule::Raja, &chart);
    assert_eq!(
        explanations(&findings),
        vec!["Sun (Kendra lord) with Mars (Trikona lord) in house 1."]
    );
}

#[test]
fn test_raja_never_pairs_a_lord_with_itself() {
    // Aries lagna: Mars rules the 1st, a kendra and a trikona at once
    let chart = chart_from(&[(Body::Mars, 5.0), (Body::Saturn, 200.0)], Some(0.0));
    assert!(run(Rule::Raja, &chart).is_empty());
}

#[test]
fn test_raja_skipped_without_ascendant() {
    let chart = chart_from(&[(Body::Moon, 100.0), (Body::Jupiter, 105.0)], None);
    assert!(run(Rule::Raja, &chart).is_empty());
    assert!(run(Rule::Lakshmi, &chart).is_empty());
    assert!(run(Rule::Dhanya, &chart).is_empty());
}

#[test]
fn test_parivartana_once_per_pair() {
    let chart = chart_from(&[(Body::Sun, 100.0), (Body::Moon, 130.0)], Some(0.0));
    let findings = run(Rule::Parivartana, &chart);
    assert_eq!(
        explanations(&findings),
        vec!["Sun and Moon exchange signs Cancer and Leo."]
    );
}

#[test]
fn test_pancha_mahapurusha() {
    let chart = chart_from(
        &[(Body::Mars, 5.0), (Body::Jupiter, 95.0), (Body::Saturn, 305.0)],
        Some(0.0),
    );
    let labels: Vec<String> = run(Rule::PanchaMahapurusha, &chart).into_iter().map(|f| f.label).collect();
    assert_eq!(labels, vec!["Ruchaka Yoga", "Hamsa Yoga"]);
}

#[test]
fn test_arishta_bhanga() {
    let chart = chart_from(
        &[
            (Body::Moon, 100.0),
            (Body::Venus, 105.0),
            (Body::Jupiter, 10.0),
            (Body::Mercury, 200.0),
        ],
        Some(0.0),
    );
    let findings = run(Rule::ArishtaBhanga, &chart);
    assert_eq!(
        explanations(&findings),
        vec!["Jupiter protects Lagna/Moon.", "Venus protects Lagna/Moon."]
    );
}

#[test]
fn test_lakshmi_picks_first_benefic() {
    let chart = chart_from(
        &[(Body::Mars, 95.0), (Body::Mercury, 102.0), (Body::Venus, 100.0)],
        Some(0.0),
    );
    let findings = run(Rule::Lakshmi, &chart);
    assert_eq!(
        explanations(&findings),
        vec!["Lagna lord Mars strong with Venus in house 4."]
    );
}

#[test]
fn test_saraswati() {
    let chart = chart_from(
        &[(Body::Jupiter, 35.0), (Body::Venus, 125.0), (Body::Mercury, 245.0)],
        Some(0.0),
    );
    assert_eq!(run(Rule::Saraswati, &chart).len(), 1);

    let missing = chart_from(&[(Body::Jupiter, 35.0), (Body::Venus, 125.0)], Some(0.0));
    assert!(run(Rule::Saraswati, &missing).is_empty());
}

#[test]
fn test_dhanya() {
    // Aries lagna: Venus rules the 2nd, Saturn the 11th
    let chart = chart_from(&[(Body::Venus, 305.0), (Body::Saturn, 35.0)], Some(0.0));
    assert_eq!(run(Rule::Dhanya, &chart).len(), 1);
}

#[test]
fn test_vargottama_uses_navamsa() {
    let chart = chart_from(&[(Body::Sun, 1.0), (Body::Moon, 100.0)], Some(0.0));
    let findings = run(Rule::Vargottama, &chart);
    assert_eq!(
        explanations(&findings),
        vec!["Sun occupies Aries in both rasi and navamsa."]
    );

    let no_vargas = BTreeMap::new();
    assert!(Rule::Vargottama
        .evaluate(&RuleContext::new(&chart, &no_vargas))
        .is_empty());
}

#[test]
fn test_manglik_from_lagna_and_moon() {
    let from_lagna = chart_from(&[(Body::Mars, 5.0)], Some(0.0));
    assert_eq!(
        explanations(&run(Rule::Manglik, &from_lagna)),
        vec!["Mars in a Manglik house from the lagna."]
    );

    let from_moon = chart_from(&[(Body::Mars, 65.0), (Body::Moon, 35.0)], Some(0.0));
    assert_eq!(
        explanations(&run(Rule::Manglik, &from_moon)),
        vec!["Mars in a Manglik house from the Moon."]
    );

    let clear = chart_from(&[(Body::Mars, 65.0), (Body::Moon, 5.0)], Some(0.0));
    assert!(run(Rule::Manglik, &clear).is_empty());
}

fn hemmed(offsets: [f64; 7]) -> ChartState {
    let mut entries: Vec<(Body, f64)> = Body::CLASSICAL.iter().copied().zip(offsets).collect();
    entries.push((Body::Rahu, 0.0));
    chart_from(&entries, Some(0.0))
}

#[test]
fn test_kaal_sarp_either_side_of_axis() {
    let rahu_side = hemmed([10.0, 30.0, 50.0, 70.0, 90.0, 110.0, 170.0]);
    assert_eq!(run(Rule::KaalSarp, &rahu_side).len(), 1);

    let ketu_side = hemmed([190.0, 210.0, 250.0, 270.0, 300.0, 320.0, 350.0]);
    assert_eq!(run(Rule::KaalSarp, &ketu_side).len(), 1);

    let broken = hemmed([10.0, 30.0, 50.0, 70.0, 90.0, 110.0, 200.0]);
    assert!(run(Rule::KaalSarp, &broken).is_empty());
}

#[test]
fn test_pitra() {
    let afflicted = chart_from(&[(Body::Sun, 100.0), (Body::Saturn, 106.0)], Some(0.0));
    assert_eq!(
        explanations(&run(Rule::Pitra, &afflicted)),
        vec!["Sun afflicted by Saturn."]
    );

    let clear = chart_from(&[(Body::Sun, 100.0), (Body::Saturn, 120.0)], Some(0.0));
    assert!(run(Rule::Pitra, &clear).is_empty());
}

#[test]
fn test_catalogs_are_deterministic_and_typed() {
    let chart = chart_from(
        &[
            (Body::Sun, 100.0),
            (Body::Moon, 130.0),
            (Body::Mars, 5.0),
            (Body::Jupiter, 95.0),
            (Body::Saturn, 106.0),
        ],
        Some(0.0),
    );
    let vargas = build_divisional_charts(&chart);
    let ctx = RuleContext::new(&chart, &vargas);

    let yogas = detect_yogas(&ctx);
    let doshas = detect_doshas(&ctx);
    assert_eq!(yogas, detect_yogas(&ctx));
    assert_eq!(doshas, evaluate_rules(&DOSHA_CATALOG, &ctx));
    assert!(yogas.iter().all(|f| f.kind == FindingKind::Yoga));
    assert!(!doshas.is_empty());
    assert!(doshas.iter().all(|f| f.kind == FindingKind::Dosha));
    assert!(YOGA_CATALOG.iter().all(|rule| rule.kind() == FindingKind::Yoga));
}
