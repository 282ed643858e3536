//! Named pattern rules evaluated against a built chart.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::vedic::chart::ChartState;
use crate::vedic::doshas;
use crate::vedic::vargas::{DivisionalChart, DivisionalScheme};
use crate::vedic::yogas;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FindingKind {
    Yoga,
    Dosha,
}

/// A fired rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Finding {
    pub kind: FindingKind,
    pub label: String,
    pub explanation: String,
}

impl Finding {
    pub fn yoga(label: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            kind: FindingKind::Yoga,
            label: label.into(),
            explanation: explanation.into(),
        }
    }

    pub fn dosha(label: impl Into<String>, explanation: impl Into<String>) -> Self {
        Self {
            kind: FindingKind::Dosha,
            label: label.into(),
            explanation: explanation.into(),
        }
    }
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.explanation)
    }
}

/// Read-only inputs shared by every rule.
#[derive(Debug, Clone, Copy)]
pub struct RuleContext<'a> {
    pub chart: &'a ChartState,
    pub vargas: &'a BTreeMap<DivisionalScheme, DivisionalChart>,
}

impl<'a> RuleContext<'a> {
    pub fn new(chart: &'a ChartState, vargas: &'a BTreeMap<DivisionalScheme, DivisionalChart>) -> Self {
        Self { chart, vargas }
    }

    pub fn varga(&self, scheme: DivisionalScheme) -> Option<&'a DivisionalChart> {
        self.vargas.get(&scheme)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Rule {
    Gajakesari,
    Budhaditya,
    ChandraMangala,
    Dhana,
    VipareetaRaja,
    Kemadruma,
    NeechaBhangaRaja,
    Raja,
    Parivartana,
    PanchaMahapurusha,
    ArishtaBhanga,
    Lakshmi,
    Saraswati,
    Dhanya,
    Vargottama,
    Manglik,
    KaalSarp,
    Pitra,
}

/// Yoga rules in emission order.
pub const YOGA_CATALOG: [Rule; 15] = [
    Rule::Gajakesari,
    Rule::Budhaditya,
    Rule::ChandraMangala,
    Rule::Dhana,
    Rule::VipareetaRaja,
    Rule::Kemadruma,
    Rule::NeechaBhangaRaja,
    Rule::Raja,
    Rule::Parivartana,
    Rule::PanchaMahapurusha,
    Rule::ArishtaBhanga,
    Rule::Lakshmi,
    Rule::Saraswati,
    Rule::Dhanya,
    Rule::Vargottama,
];

pub const DOSHA_CATALOG: [Rule; 3] = [Rule::Manglik, Rule::KaalSarp, Rule::Pitra];

impl Rule {
    pub fn kind(self) -> FindingKind {
        match self {
            Rule::Manglik | Rule::KaalSarp | Rule::Pitra => FindingKind::Dosha,
            _ => FindingKind::Yoga,
        }
    }

    /// Findings produced by this rule; empty when it does not fire.
    pub fn evaluate(self, ctx: &RuleContext<'_>) -> Vec<Finding> {
        let chart = ctx.chart;
        match self {
            Rule::Gajakesari => yogas::gajakesari(chart).into_iter().collect(),
            Rule::Budhaditya => yogas::budhaditya(chart).into_iter().collect(),
            Rule::ChandraMangala => yogas::chandra_mangala(chart).into_iter().collect(),
            Rule::Dhana => yogas::dhana(chart),
            Rule::VipareetaRaja => yogas::vipareeta_raja(chart).into_iter().collect(),
            Rule::Kemadruma => yogas::kemadruma(chart).into_iter().collect(),
            Rule::NeechaBhangaRaja => yogas::neecha_bhanga_raja(chart).into_iter().collect(),
            Rule::Raja => yogas::raja(chart),
            Rule::Parivartana => yogas::parivartana(chart),
            Rule::PanchaMahapurusha => yogas::pancha_mahapurusha(chart),
            Rule::ArishtaBhanga => yogas::arishta_bhanga(chart),
            Rule::Lakshmi => yogas::lakshmi(chart).into_iter().collect(),
            Rule::Saraswati => yogas::saraswati(chart).into_iter().collect(),
            Rule::Dhanya => yogas::dhanya(chart).into_iter().collect(),
            Rule::Vargottama => ctx
                .varga(DivisionalScheme::D9)
                .map(|navamsa| yogas::vargottama(chart, navamsa))
                .unwrap_or_default(),
            Rule::Manglik => doshas::manglik(chart).into_iter().collect(),
            Rule::KaalSarp => doshas::kaal_sarp(chart).into_iter().collect(),
            Rule::Pitra => doshas::pitra(chart).into_iter().collect(),
        }
    }
}

/// Run a catalog in order, concatenating findings.
pub fn evaluate_rules(catalog: &[Rule], ctx: &RuleContext<'_>) -> Vec<Finding> {
    catalog.iter().flat_map(|rule| rule.evaluate(ctx)).collect()
}

pub fn detect_yogas(ctx: &RuleContext<'_>) -> Vec<Finding> {
    evaluate_rules(&YOGA_CATALOG, ctx)
}

pub fn detect_doshas(ctx: &RuleContext<'_>) -> Vec<Finding> {
    evaluate_rules(&DOSHA_CATALOG, ctx)
}
