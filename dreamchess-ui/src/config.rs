//! Front-end settings, read from an optional JSON file

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::app::WindowConfig;
use crate::error::ConfigError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Holds `font.png`, `font.wid`, `menu_title.png` and the theme directories.
    pub data_dir: PathBuf,
    pub window: WindowConfig,
    /// Frames per second at most; 0 for no limit.
    pub fps_cap: u32,
    pub show_fps: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("data"),
            window: WindowConfig::default(),
            fps_cap: 0,
            show_fps: false,
        }
    }
}

impl UiConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        debug!(path = %path.display(), "config loaded");
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<(), ConfigError> {
        fs::write(path, serde_json::to_string_pretty(self)?)?;
        Ok(())
    }
}
