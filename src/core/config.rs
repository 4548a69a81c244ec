use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Default metrics endpoint for a locally running collector.
pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000";

/// Default poll interval in milliseconds.
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 2000;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Base URL of the metrics endpoint
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    /// Poll interval in milliseconds
    #[serde(default = "default_poll_interval")]
    pub poll_interval_ms: u64,
    /// Whether polling starts enabled
    #[serde(default = "default_auto_poll")]
    pub auto_poll: bool,
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

fn default_poll_interval() -> u64 {
    DEFAULT_POLL_INTERVAL_MS
}

fn default_auto_poll() -> bool {
    true
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            poll_interval_ms: default_poll_interval(),
            auto_poll: default_auto_poll(),
        }
    }
}

impl DashboardConfig {
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::get_config_path()?)
    }

    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::get_config_path()?)
    }

    /// Load from an explicit path. Missing, empty, or corrupt files all
    /// yield the default config.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config = if !config_path.exists() {
            DashboardConfig::default()
        } else {
            let data = fs::read(config_path)
                .with_context(|| format!("Failed to read config file: {:?}", config_path))?;

            // If the file is empty or corrupted, return default config
            if data.is_empty() {
                DashboardConfig::default()
            } else {
                serde_json::from_slice(&data).unwrap_or_default()
            }
        };

        Ok(config)
    }

    /// Save to an explicit path, creating parent directories as needed.
    pub fn save_to(&self, config_path: &Path) -> Result<()> {
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory: {:?}", parent))?;
        }

        let data =
            serde_json::to_vec_pretty(self).with_context(|| "Failed to serialize config")?;

        fs::write(config_path, data)
            .with_context(|| format!("Failed to write config file: {:?}", config_path))?;

        Ok(())
    }

    fn get_config_path() -> Result<PathBuf> {
        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("hostdash").join("config.json"))
    }
}
