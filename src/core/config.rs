use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::platform::ThermalThresholds;

/// Optional, read-only configuration.
///
/// Every field has a default, so a missing file or a partial file is valid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeviceConfig {
    /// How often desktop platforms re-check the thermal state. `0` disables
    /// polling; notifications then only arrive from explicit posts.
    pub thermal_poll_interval_ms: u64,
    pub notification_capacity: usize,
    /// Device name used when the OS reports neither a friendly name nor a
    /// host name.
    pub fallback_name: String,
    pub thermal_thresholds: ThermalThresholds,
}

impl Default for DeviceConfig {
    fn default() -> Self {
        Self {
            thermal_poll_interval_ms: 5_000,
            notification_capacity: 16,
            fallback_name: "localhost".to_string(),
            thermal_thresholds: ThermalThresholds::default(),
        }
    }
}

impl DeviceConfig {
    /// Environment variable pointing at an explicit config file.
    pub const PATH_ENV: &'static str = "DEVICE_FACTS_CONFIG";

    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            log::debug!("No config at {:?}, using defaults", config_path);
            return Ok(DeviceConfig::default());
        }

        Self::load_from(&config_path)
    }

    /// Load from a specific file. An empty file yields the defaults.
    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read(path)
            .with_context(|| format!("Failed to read config file: {:?}", path))?;

        if data.iter().all(u8::is_ascii_whitespace) {
            return Ok(DeviceConfig::default());
        }

        let config: DeviceConfig = serde_json::from_slice(&data)
            .with_context(|| format!("Failed to parse config file: {:?}", path))?;

        log::debug!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Like [`DeviceConfig::load`], but logs failures and falls back to the
    /// defaults.
    pub fn load_or_default() -> Self {
        Self::load().unwrap_or_else(|e| {
            log::warn!("Failed to load device-facts config, using defaults: {:#}", e);
            DeviceConfig::default()
        })
    }

    pub fn thermal_poll_interval(&self) -> Option<Duration> {
        (self.thermal_poll_interval_ms > 0)
            .then(|| Duration::from_millis(self.thermal_poll_interval_ms))
    }

    fn get_config_path() -> Result<PathBuf> {
        if let Some(path) = std::env::var_os(Self::PATH_ENV).filter(|p| !p.is_empty()) {
            return Ok(PathBuf::from(path));
        }

        let config_dir =
            dirs::config_dir().with_context(|| "Could not determine config directory")?;

        Ok(config_dir.join("device-facts").join("config.json"))
    }
}
