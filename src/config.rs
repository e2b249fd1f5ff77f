//! Config file load/save (JSON)

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::CorrectionError;

/// Correction settings
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CorrectionConfig {
    /// Run the syllable reordering engine on committed text
    #[serde(default = "default_quick_fixes")]
    pub quick_fixes: bool,
    /// Insert ZWNJ around ေ and ္ for shapers that misplace them
    #[serde(default)]
    pub jelly_bean_fix: bool,
}

fn default_quick_fixes() -> bool {
    true
}

impl Default for CorrectionConfig {
    fn default() -> Self {
        Self {
            quick_fixes: default_quick_fixes(),
            jelly_bean_fix: false,
        }
    }
}

/// Config file path: ~/.config/zawgyi-correction/config.json
pub fn config_path() -> PathBuf {
    let home = std::env::var("HOME")
        .ok()
        .map(PathBuf::from)
        .filter(|p| p.is_absolute() && p.is_dir())
        .unwrap_or_else(|| PathBuf::from("/var/tmp"));
    home.join(".config")
        .join("zawgyi-correction")
        .join("config.json")
}

/// Load the config from the default path
pub fn load_config() -> CorrectionConfig {
    load_config_from(&config_path())
}

/// Load a config file (defaults when missing or unparsable)
pub fn load_config_from(path: &Path) -> CorrectionConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("ignoring invalid config {}: {}", path.display(), e);
            CorrectionConfig::default()
        }),
        Err(_) => CorrectionConfig::default(),
    }
}

/// Save the config to the default path
pub fn save_config(config: &CorrectionConfig) -> Result<(), CorrectionError> {
    save_config_to(&config_path(), config)
}

/// Save a config file, creating parent directories
pub fn save_config_to(path: &Path, config: &CorrectionConfig) -> Result<(), CorrectionError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let json =
        serde_json::to_string_pretty(config).map_err(|e| CorrectionError::Config(e.to_string()))?;
    fs::write(path, json)?;
    Ok(())
}
