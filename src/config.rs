// ABOUTME: Application configuration loaded from ~/.classroom-notify/config.toml
// Missing files and missing keys fall back to defaults

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_DURATION_MS: u64 = 3000;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path:?}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub notifications: NotificationConfig,
    pub ui: UiConfig,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    /// Used by the success/error/info shortcuts. Zero keeps toasts until dismissed.
    pub default_duration_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self {
            default_duration_ms: DEFAULT_DURATION_MS,
        }
    }
}

impl NotificationConfig {
    pub fn default_duration(&self) -> Duration {
        Duration::from_millis(self.default_duration_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    pub max_visible: usize,
    pub toast_width: u16,
    pub show_progress: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            max_visible: 5,
            toast_width: 50,
            show_progress: true,
        }
    }
}

impl AppConfig {
    pub fn default_path() -> PathBuf {
        dirs::home_dir()
            .map(|home| home.join(".classroom-notify"))
            .unwrap_or_else(|| PathBuf::from(".classroom-notify"))
            .join("config.toml")
    }

    /// Load from `path`, or the default location when `None`. A missing file yields defaults.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(Path::to_path_buf).unwrap_or_else(Self::default_path);

        if !path.exists() {
            info!("No config file at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path).map_err(|source| ConfigError::Io {
            path: path.clone(),
            source,
        })?;
        let config = toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.clone(),
            source,
        })?;

        info!("Loaded config from {:?}", path);
        Ok(config)
    }
}
