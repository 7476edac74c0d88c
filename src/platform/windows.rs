//! Windows device facts from the registry and `sysinfo`.

use winreg::enums::HKEY_LOCAL_MACHINE;
use winreg::RegKey;

use super::{common, thermal, DevicePlatform, ThermalThresholds};
use crate::core::config::DeviceConfig;
use crate::core::types::{OperatingSystemVersion, ThermalState};

const BIOS_KEY: &str = r"HARDWARE\DESCRIPTION\System\BIOS";

#[derive(Debug, Clone)]
pub struct WindowsPlatform {
    fallback_name: String,
    thresholds: ThermalThresholds,
}

impl WindowsPlatform {
    pub fn new(config: &DeviceConfig) -> Self {
        Self {
            fallback_name: config.fallback_name.clone(),
            thresholds: config.thermal_thresholds,
        }
    }
}

impl DevicePlatform for WindowsPlatform {
    fn name(&self) -> String {
        common::host_name(&self.fallback_name)
    }

    /// `SystemProductName` from the BIOS registry key.
    fn model(&self) -> String {
        let hklm = RegKey::predef(HKEY_LOCAL_MACHINE);
        hklm.open_subkey(BIOS_KEY)
            .and_then(|bios| bios.get_value::<String, _>("SystemProductName"))
            .map(|model| model.trim().to_string())
            .ok()
            .filter(|model| !model.is_empty())
            .unwrap_or_else(|| "PC".to_string())
    }

    fn system_name(&self) -> String {
        "Windows".to_string()
    }

    fn system_version(&self) -> String {
        common::os_version().unwrap_or_else(|| "Unknown".to_string())
    }

    fn operating_system_version(&self) -> OperatingSystemVersion {
        common::os_version()
            .map(|raw| OperatingSystemVersion::parse_lenient(&raw))
            .unwrap_or_default()
    }

    fn operating_system_version_string(&self) -> String {
        let long = common::long_os_version().unwrap_or_else(|| self.system_version());
        match common::kernel_version() {
            Some(build) => format!("{} (Build {})", long, build),
            None => long,
        }
    }

    fn thermal_state(&self) -> ThermalState {
        thermal::thermal_state_from_sensors(&self.thresholds)
    }
}
