//! Linux device facts from procfs, sysfs and `/etc`.

use std::path::{Path, PathBuf};

use super::{common, thermal, DevicePlatform, ThermalThresholds};
use crate::core::config::DeviceConfig;
use crate::core::types::{OperatingSystemVersion, ThermalState};

const MACHINE_INFO_PATH: &str = "/etc/machine-info";
const PASSWD_PATH: &str = "/etc/passwd";

/// Model sources, most specific first. Device-tree covers ARM boards
/// (Raspberry Pi, Jetson), DMI covers x86 firmware.
const MODEL_PATHS: [&str; 3] = [
    "/sys/firmware/devicetree/base/model",
    "/sys/class/dmi/id/product_name",
    "/sys/class/dmi/id/board_name",
];

/// Placeholder strings OEM firmware leaves in DMI fields.
const PLACEHOLDER_MODELS: [&str; 5] = [
    "To Be Filled By O.E.M.",
    "System Product Name",
    "Default string",
    "Not Applicable",
    "None",
];

#[derive(Debug, Clone)]
pub struct LinuxPlatform {
    fallback_name: String,
    thresholds: ThermalThresholds,
    model_paths: Vec<PathBuf>,
}

impl LinuxPlatform {
    pub fn new(config: &DeviceConfig) -> Self {
        Self {
            fallback_name: config.fallback_name.clone(),
            thresholds: config.thermal_thresholds,
            model_paths: MODEL_PATHS.iter().map(PathBuf::from).collect(),
        }
    }

    fn passwd_entry(&self) -> Option<PasswdEntry> {
        // SAFETY: getuid has no preconditions and cannot fail.
        let uid = unsafe { libc::getuid() };
        let content = std::fs::read_to_string(PASSWD_PATH).ok()?;
        find_passwd_entry(&content, uid)
    }
}

impl DevicePlatform for LinuxPlatform {
    fn name(&self) -> String {
        common::read_trimmed(Path::new(MACHINE_INFO_PATH))
            .and_then(|content| parse_pretty_hostname(&content))
            .unwrap_or_else(|| common::host_name(&self.fallback_name))
    }

    fn user_name(&self) -> Option<String> {
        common::env_user_name().or_else(|| self.passwd_entry().map(|entry| entry.name))
    }

    fn full_user_name(&self) -> Option<String> {
        self.passwd_entry().and_then(|entry| entry.full_name)
    }

    fn model(&self) -> String {
        self.model_paths
            .iter()
            .filter_map(|path| common::read_trimmed(path))
            .find(|model| !PLACEHOLDER_MODELS.contains(&model.as_str()))
            .unwrap_or_else(|| "Linux".to_string())
    }

    fn system_name(&self) -> String {
        common::os_name().unwrap_or_else(|| "Linux".to_string())
    }

    fn system_version(&self) -> String {
        common::os_version()
            .or_else(common::kernel_version)
            .unwrap_or_else(|| "Unknown".to_string())
    }

    /// Structured version of the running kernel.
    fn operating_system_version(&self) -> OperatingSystemVersion {
        common::kernel_version()
            .map(|release| OperatingSystemVersion::parse_lenient(&release))
            .unwrap_or_default()
    }

    fn operating_system_version_string(&self) -> String {
        let distro = common::long_os_version().unwrap_or_else(|| self.system_name());
        match common::kernel_version() {
            Some(kernel) => format!("{} (kernel {})", distro, kernel),
            None => distro,
        }
    }

    fn thermal_state(&self) -> ThermalState {
        thermal::thermal_state_from_sensors(&self.thresholds)
    }
}

/// `PRETTY_HOSTNAME` from machine-info(5), unquoted.
pub fn parse_pretty_hostname(content: &str) -> Option<String> {
    content
        .lines()
        .filter_map(|line| line.trim().strip_prefix("PRETTY_HOSTNAME="))
        .map(|value| value.trim().trim_matches(|c: char| c == '"' || c == '\''))
        .find(|value| !value.is_empty())
        .map(str::to_string)
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PasswdEntry {
    pub name: String,
    pub full_name: Option<String>,
}

/// Find the passwd(5) line for `uid`. The full name is the first
/// comma-separated GECOS field.
pub fn find_passwd_entry(content: &str, uid: u32) -> Option<PasswdEntry> {
    content.lines().find_map(|line| {
        let fields: Vec<&str> = line.split(':').collect();
        if fields.len() < 5 || fields[2].parse::<u32>().ok()? != uid {
            return None;
        }

        let full_name = fields[4]
            .split(',')
            .next()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string);

        Some(PasswdEntry {
            name: fields[0].to_string(),
            full_name,
        })
    })
}
