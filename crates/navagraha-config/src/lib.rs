use navagraha::EngineSettings;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Relative locations tried when no explicit config path is given.
const DEFAULT_PATHS: [&str; 2] = ["configs/navagraha.toml", "../../configs/navagraha.toml"];

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    engine: Option<EngineSettings>,
}

/// Parse the `[engine]` table of a config document. Absent keys keep their defaults.
pub fn parse_engine_settings(text: &str) -> anyhow::Result<EngineSettings> {
    let root: RootConfigToml =
        toml::from_str(text).map_err(|e| anyhow::anyhow!("Failed to parse [engine] settings: {e}"))?;
    Ok(root.engine.unwrap_or_default())
}

/// Load engine settings.
///
/// An explicit path must exist. Without one, the common relative paths are
/// tried and defaults are used when none is present.
pub fn load_engine_settings(path: Option<&Path>) -> anyhow::Result<EngineSettings> {
    if let Some(path) = path {
        let text = fs::read_to_string(path)
            .map_err(|e| anyhow::anyhow!("Could not read config {}: {e}", path.display()))?;
        return parse_engine_settings(&text);
    }

    for p in &DEFAULT_PATHS {
        if let Ok(text) = fs::read_to_string(p) {
            log::debug!("Loaded engine settings from {}", p);
            return parse_engine_settings(&text);
        }
    }
    log::debug!("No config found in {:?}; using defaults", DEFAULT_PATHS);
    Ok(EngineSettings::default())
}
