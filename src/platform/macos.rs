//! macOS device facts from `scutil`, `sysctl`, `id` and `pmset`.

use super::{common, thermal, DevicePlatform, ThermalThresholds};
use crate::core::config::DeviceConfig;
use crate::core::types::{InterfaceIdiom, OperatingSystemVersion, ThermalState};

#[derive(Debug, Clone)]
pub struct MacPlatform {
    fallback_name: String,
    thresholds: ThermalThresholds,
}

impl MacPlatform {
    pub fn new(config: &DeviceConfig) -> Self {
        Self {
            fallback_name: config.fallback_name.clone(),
            thresholds: config.thermal_thresholds,
        }
    }
}

impl DevicePlatform for MacPlatform {
    /// Localized computer name, falling back to the host name.
    fn name(&self) -> String {
        common::command_output("scutil", &["--get", "ComputerName"])
            .unwrap_or_else(|| common::host_name(&self.fallback_name))
    }

    fn full_user_name(&self) -> Option<String> {
        common::command_output("id", &["-F"])
    }

    fn model(&self) -> String {
        common::command_output("sysctl", &["-n", "hw.model"]).unwrap_or_else(|| "Mac".to_string())
    }

    fn system_name(&self) -> String {
        "macOS".to_string()
    }

    fn system_version(&self) -> String {
        let version = self.operating_system_version();
        format!("{}.{}", version.major_version, version.minor_version)
    }

    fn operating_system_version(&self) -> OperatingSystemVersion {
        common::os_version()
            .map(|raw| OperatingSystemVersion::parse_lenient(&raw))
            .unwrap_or_default()
    }

    fn operating_system_version_string(&self) -> String {
        let version = common::os_version().unwrap_or_else(|| self.system_version());
        match common::command_output("sysctl", &["-n", "kern.osversion"]) {
            Some(build) => format!("Version {} (Build {})", version, build),
            None => format!("Version {}", version),
        }
    }

    fn interface_idiom(&self) -> InterfaceIdiom {
        InterfaceIdiom::Mac
    }

    /// Tier from the CPU speed limit, or from sensors when `pmset` is
    /// unavailable.
    fn thermal_state(&self) -> ThermalState {
        match common::command_output("pmset", &["-g", "therm"]) {
            Some(output) => thermal::parse_pmset_therm(&output).unwrap_or(ThermalState::Nominal),
            None => thermal::thermal_state_from_sensors(&self.thresholds),
        }
    }
}
