pub mod chart;
pub mod dashas;
pub mod doshas;
pub mod drishti;
pub mod house_score;
pub mod nakshatra;
pub mod positions;
pub mod rashi;
pub mod rules;
pub mod strength;
pub mod transit;
pub mod vargas;
pub mod yogas;

pub use chart::{build_chart_state, BodyPlacement, ChartState};
pub use dashas::{build_vimshottari_timeline, current_periods, CurrentDasha, DashaError, DashaLevel, DashaPeriod, DashaTimeline};
pub use drishti::{compute_aspects, compute_sign_aspects, BodyAspects};
pub use house_score::{angular_occupancy, compute_house_scores, empty_houses, AngularOccupancy, EmptyHouse, HouseScores};
pub use nakshatra::{nakshatra_of, NakshatraPlacement};
pub use positions::{compute_ascendant, compute_positions, Ascendant};
pub use rashi::{house_of, sign_lord, sign_of, Sign};
pub use rules::{detect_doshas, detect_yogas, evaluate_rules, Finding, FindingKind, Rule, RuleContext};
pub use strength::{evaluate_strengths, BodyStrength, Dignity};
pub use transit::{assess_transits, TransitAssessment};
pub use vargas::{build_divisional_charts, divisional_sign, DivisionalChart, DivisionalScheme};
