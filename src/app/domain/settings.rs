use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::app::infrastructure::error::SwapError;

pub const DEFAULT_YIELD_INTERVAL: usize = 500;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwapSettings {
    /// Yield to the host every this many nodes while scanning (0 disables)
    #[serde(default = "default_yield_interval")]
    pub yield_interval: usize,

    /// Leave hidden text inside component instances out of both the scan and
    /// the remap
    #[serde(default = "default_skip_invisible_instance_children")]
    pub skip_invisible_instance_children: bool,

    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_yield_interval() -> usize {
    DEFAULT_YIELD_INTERVAL
}

fn default_skip_invisible_instance_children() -> bool {
    true
}

fn default_log_level() -> String {
    "warn".to_string()
}

impl Default for SwapSettings {
    fn default() -> Self {
        Self {
            yield_interval: default_yield_interval(),
            skip_invisible_instance_children: default_skip_invisible_instance_children(),
            log_level: default_log_level(),
        }
    }
}

impl SwapSettings {
    /// Load settings from the default location, or defaults if absent
    pub fn load() -> Self {
        Self::load_from(&Self::get_config_path())
    }

    /// Load settings from `path`. Missing or unparsable files yield defaults.
    pub fn load_from(path: &Path) -> Self {
        match fs::read_to_string(path) {
            Ok(contents) => match serde_json::from_str(&contents) {
                Ok(settings) => settings,
                Err(e) => {
                    log::warn!("Failed to parse settings: {}. Using defaults.", e);
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }

    /// Save settings to the default location
    pub fn save(&self) -> Result<(), SwapError> {
        self.save_to(&Self::get_config_path())
    }

    pub fn save_to(&self, path: &Path) -> Result<(), SwapError> {
        // Ensure parent directory exists
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }

        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;

        Ok(())
    }

    /// Get config file path (cross-platform)
    pub fn get_config_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push("style-swap");
        path.push("settings.json");
        path
    }
}
