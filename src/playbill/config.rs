use crate::error::{PlaybillError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_SEPARATOR: &str = "----------------------------------";

/// Presentation settings for a screening, stored in .playbill/config.json
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlaybillConfig {
    /// Text of the line printed between sections
    #[serde(default = "default_separator")]
    pub separator: String,

    /// Whether separator steps produce output at all
    #[serde(default = "default_true")]
    pub show_separators: bool,

    /// Whether registering an observer prints "adding Observer: <name>"
    #[serde(default = "default_true")]
    pub announce_observers: bool,
}

fn default_separator() -> String {
    DEFAULT_SEPARATOR.to_string()
}

fn default_true() -> bool {
    true
}

impl Default for PlaybillConfig {
    fn default() -> Self {
        Self {
            separator: default_separator(),
            show_separators: true,
            announce_observers: true,
        }
    }
}

impl PlaybillConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(PlaybillError::Io)?;
        let config: PlaybillConfig =
            serde_json::from_str(&content).map_err(PlaybillError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(PlaybillError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(PlaybillError::Serialization)?;
        fs::write(config_path, content).map_err(PlaybillError::Io)?;
        Ok(())
    }
}
