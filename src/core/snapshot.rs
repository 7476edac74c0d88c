use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::config::DeviceConfig;
use super::types::{InterfaceIdiom, OperatingSystemVersion, ThermalState};
use crate::error::Result;
use crate::platform::{self, BatteryProvider, DevicePlatform, SystemBattery};

/// Immutable record of device facts at the moment of capture.
///
/// Every field is read fresh from the collaborators; nothing is shared with
/// [`LiveDeviceInfo`](super::live::LiveDeviceInfo). Capture a new snapshot to
/// observe newer values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeviceSnapshot {
    name: String,
    user_name: Option<String>,
    model: String,
    system_name: String,
    system_version: String,
    operating_system_version: OperatingSystemVersion,
    processor_count: usize,
    active_processor_count: usize,
    thermal_state: ThermalState,
    interface_idiom: InterfaceIdiom,
    #[serde(deserialize_with = "percentage::deserialize")]
    battery_percentage: u8,
    is_low_power_mode_enabled: bool,
    is_battery_monitoring_enabled: bool,
    #[serde(with = "uptime_seconds")]
    system_uptime: Duration,
}

impl DeviceSnapshot {
    /// Capture from the platform this crate was built for and the system
    /// battery.
    pub fn capture() -> Self {
        let config = DeviceConfig::load_or_default();
        let platform = platform::current(&config);
        Self::capture_from(platform.as_ref(), &SystemBattery::new())
    }

    pub fn capture_from(platform: &dyn DevicePlatform, battery: &dyn BatteryProvider) -> Self {
        Self {
            name: platform.name(),
            user_name: platform.user_name(),
            model: platform.model(),
            system_name: platform.system_name(),
            system_version: platform.system_version(),
            operating_system_version: platform.operating_system_version(),
            processor_count: platform.processor_count(),
            active_processor_count: platform.active_processor_count(),
            thermal_state: platform.thermal_state(),
            interface_idiom: platform.interface_idiom(),
            battery_percentage: battery.percentage().min(100),
            is_low_power_mode_enabled: battery.is_low_power_mode_enabled(),
            is_battery_monitoring_enabled: battery.is_monitoring_enabled(),
            system_uptime: Duration::from_secs(platform.system_uptime().as_secs()),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn to_json_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Decode a snapshot. Malformed input is a [`DeviceError::Decode`].
    ///
    /// [`DeviceError::Decode`]: crate::error::DeviceError::Decode
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn system_name(&self) -> &str {
        &self.system_name
    }

    pub fn system_version(&self) -> &str {
        &self.system_version
    }

    pub fn operating_system_version(&self) -> OperatingSystemVersion {
        self.operating_system_version
    }

    pub fn processor_count(&self) -> usize {
        self.processor_count
    }

    pub fn active_processor_count(&self) -> usize {
        self.active_processor_count
    }

    pub fn thermal_state(&self) -> ThermalState {
        self.thermal_state
    }

    pub fn interface_idiom(&self) -> InterfaceIdiom {
        self.interface_idiom
    }

    /// Battery charge, always within `0..=100`.
    pub fn battery_percentage(&self) -> u8 {
        self.battery_percentage
    }

    pub fn is_low_power_mode_enabled(&self) -> bool {
        self.is_low_power_mode_enabled
    }

    pub fn is_battery_monitoring_enabled(&self) -> bool {
        self.is_battery_monitoring_enabled
    }

    /// Time since boot when the snapshot was captured, whole seconds.
    pub fn system_uptime(&self) -> Duration {
        self.system_uptime
    }

    /// True when both snapshots agree on every field except uptime.
    pub fn same_device_state(&self, other: &DeviceSnapshot) -> bool {
        let mut other = other.clone();
        other.system_uptime = self.system_uptime;
        *self == other
    }
}

mod percentage {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer};

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u8, D::Error> {
        let value = u8::deserialize(deserializer)?;
        if value > 100 {
            return Err(D::Error::custom(format!(
                "battery percentage {} is outside 0..=100",
                value
            )));
        }
        Ok(value)
    }
}

/// `Duration` as fractional seconds.
mod uptime_seconds {
    use serde::de::Error;
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S: Serializer>(uptime: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(uptime.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let seconds = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(seconds).map_err(D::Error::custom)
    }
}
