//! Plugin configuration.
//!
//! Defaults match the directories the AI side polls. A JSON file named by
//! `GSS_CONFIG_PATH` can override any field.

use crate::error::ConfigError;
use crate::scenario::ScenarioKind;
use crate::writer::RetryPolicy;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::{env, fs};

pub const CONFIG_PATH_ENV: &str = "GSS_CONFIG_PATH";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginConfig {
    /// Shared directory for L'Arc, UAF and Cook snapshots.
    pub game_data_dir: PathBuf,
    /// The plugin's own directory, used by Legend and hot springs.
    pub plugin_data_dir: PathBuf,
    pub retry: RetryPolicy,
    /// Event database used by the choice-event scanner.
    pub events_path: Option<PathBuf>,
}

impl Default for PluginConfig {
    fn default() -> Self {
        Self {
            game_data_dir: default_game_data_dir(),
            plugin_data_dir: Path::new("PluginData").join("SendGameStatusPlugin"),
            retry: RetryPolicy::default(),
            events_path: None,
        }
    }
}

fn default_game_data_dir() -> PathBuf {
    dirs::data_local_dir()
        .map(|dir| dir.join("UmamusumeResponseAnalyzer").join("GameData"))
        .unwrap_or_else(|| PathBuf::from("GameData"))
}

impl PluginConfig {
    /// Output directory for `kind`.
    pub fn output_dir(&self, kind: ScenarioKind) -> &Path {
        if kind.uses_plugin_dir() {
            &self.plugin_data_dir
        } else {
            &self.game_data_dir
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)
            .map_err(|source| ConfigError::Read { path: path.to_path_buf(), source })?;
        let config = Self::from_json(&content)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        config.validate()?;
        Ok(config)
    }

    /// Load from the file named by `GSS_CONFIG_PATH`, or defaults when the
    /// variable is unset or blank.
    pub fn from_env() -> Result<Self, ConfigError> {
        let Ok(path) = env::var(CONFIG_PATH_ENV) else {
            return Ok(Self::default());
        };
        let path = path.trim();
        if path.is_empty() {
            return Ok(Self::default());
        }
        Self::load(Path::new(path))
    }

    /// Like [`PluginConfig::from_env`], but a broken file only costs a
    /// warning.
    pub fn from_env_or_default() -> Self {
        Self::from_env().unwrap_or_else(|e| {
            log::warn!("Using default plugin config: {}", e);
            Self::default()
        })
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::Invalid("retry.max_attempts must be at least 1".into()));
        }
        if self.game_data_dir.as_os_str().is_empty() || self.plugin_data_dir.as_os_str().is_empty()
        {
            return Err(ConfigError::Invalid("output directories must not be empty".into()));
        }
        Ok(())
    }
}

static CONFIG: Lazy<PluginConfig> = Lazy::new(PluginConfig::from_env_or_default);

/// Process-wide config, loaded from the environment on first use.
pub fn config() -> &'static PluginConfig {
    &CONFIG
}
