use super::{common, thermal, DevicePlatform, ThermalThresholds};
use crate::core::config::DeviceConfig;
use crate::core::types::{OperatingSystemVersion, ThermalState};

/// `sysinfo`-only platform, used on targets without a dedicated
/// implementation.
#[derive(Debug, Clone)]
pub struct GenericPlatform {
    fallback_name: String,
    thresholds: ThermalThresholds,
}

impl GenericPlatform {
    pub fn new(config: &DeviceConfig) -> Self {
        Self {
            fallback_name: config.fallback_name.clone(),
            thresholds: config.thermal_thresholds,
        }
    }
}

impl DevicePlatform for GenericPlatform {
    fn name(&self) -> String {
        common::host_name(&self.fallback_name)
    }

    fn model(&self) -> String {
        family_name().to_string()
    }

    fn system_name(&self) -> String {
        common::os_name().unwrap_or_else(|| family_name().to_string())
    }

    fn system_version(&self) -> String {
        common::os_version()
            .or_else(common::kernel_version)
            .unwrap_or_else(|| "Unknown".to_string())
    }

    fn operating_system_version(&self) -> OperatingSystemVersion {
        common::os_version()
            .or_else(common::kernel_version)
            .map(|raw| OperatingSystemVersion::parse_lenient(&raw))
            .unwrap_or_default()
    }

    fn operating_system_version_string(&self) -> String {
        common::long_os_version().unwrap_or_else(|| self.system_version())
    }

    fn thermal_state(&self) -> ThermalState {
        thermal::thermal_state_from_sensors(&self.thresholds)
    }
}

/// Platform family name of the build target, e.g. `"Linux"` or `"FreeBSD"`.
pub fn family_name() -> &'static str {
    match std::env::consts::OS {
        "linux" => "Linux",
        "macos" => "Mac",
        "windows" => "PC",
        "ios" => "iPhone",
        "android" => "Android",
        "freebsd" => "FreeBSD",
        "netbsd" => "NetBSD",
        "openbsd" => "OpenBSD",
        _ => "Unknown",
    }
}
