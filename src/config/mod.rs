//! Application settings
//!
//! Settings live in `~/.chorestar/config.toml`. Every field has a serde
//! default so a partial (or missing) file still yields a usable config.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// User-facing application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Base URL of the family backend (empty = run on sample data)
    #[serde(default)]
    pub server_url: String,

    /// Theme override for the dashboard chrome.
    ///
    /// Each child still celebrates with their own theme; this only picks
    /// the bundle used when no child context is available.
    #[serde(default = "default_theme")]
    pub theme: String,

    /// Play theme sounds on task completion
    #[serde(default = "default_sound_enabled")]
    pub sound_enabled: bool,

    /// Playback volume, 0.0 - 1.0
    #[serde(default = "default_volume")]
    pub volume: f32,

    /// HTTP timeout for backend calls, in seconds
    #[serde(default = "default_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_theme() -> String {
    "default".to_string()
}

fn default_sound_enabled() -> bool {
    true
}

fn default_volume() -> f32 {
    0.5
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            server_url: String::new(),
            theme: default_theme(),
            sound_enabled: default_sound_enabled(),
            volume: default_volume(),
            request_timeout_secs: default_timeout_secs(),
        }
    }
}

impl Settings {
    /// Get the config directory path (~/.chorestar/)
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".chorestar")
    }

    /// Get the config file path (~/.chorestar/config.toml)
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Load settings from the default location, falling back to defaults
    /// if the file does not exist.
    pub fn load() -> Result<Self> {
        let path = Self::config_path();
        if !path.exists() {
            return Ok(Self::default());
        }
        Self::from_file(&path)
    }

    /// Load settings from a specific file.
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let settings: Settings = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(settings)
    }

    /// Save settings to a file, creating parent directories as needed.
    pub fn save_to_file(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize settings")?;
        std::fs::write(path, content)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Whether a backend server is configured.
    pub fn has_server(&self) -> bool {
        !self.server_url.trim().is_empty()
    }
}
