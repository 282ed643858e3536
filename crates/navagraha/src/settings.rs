//! Engine settings.
//!
//! Everything the adapter and orchestrator need is passed in through this
//! struct; nothing is configured process-wide.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::vedic::dashas::DashaLevel;

/// Indian Standard Time, +05:30.
pub const DEFAULT_UTC_OFFSET_MINUTES: i32 = 330;

/// Which lunar node model supplies Rahu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LunarNodeKind {
    #[default]
    Mean,
    True,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineSettings {
    /// Offset of the birth-time civil clock east of UTC, in minutes
    pub utc_offset_minutes: i32,
    /// Ayanamsa name, e.g. "lahiri"
    pub ayanamsa: String,
    pub lunar_node: LunarNodeKind,
    /// Swiss Ephemeris data directory
    pub ephemeris_path: Option<PathBuf>,
    /// Deepest dasha level generated in the timeline
    pub dasha_depth: DashaLevel,
}

impl Default for EngineSettings {
    fn default() -> Self {
        Self {
            utc_offset_minutes: DEFAULT_UTC_OFFSET_MINUTES,
            ayanamsa: "lahiri".to_string(),
            lunar_node: LunarNodeKind::Mean,
            ephemeris_path: None,
            dasha_depth: DashaLevel::Pratyantardasha,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = EngineSettings::default();
        assert_eq!(settings.utc_offset_minutes, 330);
        assert_eq!(settings.ayanamsa, "lahiri");
        assert_eq!(settings.lunar_node, LunarNodeKind::Mean);
        assert_eq!(settings.dasha_depth, DashaLevel::Pratyantardasha);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: EngineSettings =
            serde_json::from_str(r#"{"utc_offset_minutes": 0, "lunar_node": "true"}"#).unwrap();
        assert_eq!(settings.utc_offset_minutes, 0);
        assert_eq!(settings.lunar_node, LunarNodeKind::True);
        assert_eq!(settings.ayanamsa, "lahiri");
    }
}
