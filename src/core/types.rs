use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::DeviceError;

/// Device heat / throttling tier, as reported by the operating system.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ThermalState {
    #[default]
    Nominal,
    Fair,
    Serious,
    Critical,
}

impl ThermalState {
    pub const ALL: [ThermalState; 4] = [
        ThermalState::Nominal,
        ThermalState::Fair,
        ThermalState::Serious,
        ThermalState::Critical,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ThermalState::Nominal => "nominal",
            ThermalState::Fair => "fair",
            ThermalState::Serious => "serious",
            ThermalState::Critical => "critical",
        }
    }

    /// True once the device is expected to throttle (serious or worse).
    pub fn is_throttling(&self) -> bool {
        *self >= ThermalState::Serious
    }
}

impl fmt::Display for ThermalState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThermalState {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ThermalState::ALL
            .into_iter()
            .find(|state| state.as_str() == s)
            .ok_or_else(|| DeviceError::invalid_value(format!("unknown thermal state '{}'", s)))
    }
}

/// Form-factor category of the device.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum InterfaceIdiom {
    CarPlay,
    Mac,
    Phone,
    Pad,
    Tv,
    Watch,
    Vision,
    #[default]
    Unspecified,
}

impl InterfaceIdiom {
    pub const ALL: [InterfaceIdiom; 8] = [
        InterfaceIdiom::CarPlay,
        InterfaceIdiom::Mac,
        InterfaceIdiom::Phone,
        InterfaceIdiom::Pad,
        InterfaceIdiom::Tv,
        InterfaceIdiom::Watch,
        InterfaceIdiom::Vision,
        InterfaceIdiom::Unspecified,
    ];

    /// Idiom of the target this crate was built for.
    pub const fn current() -> Self {
        if cfg!(target_os = "macos") {
            InterfaceIdiom::Mac
        } else if cfg!(any(target_os = "ios", target_os = "android")) {
            InterfaceIdiom::Phone
        } else if cfg!(target_os = "tvos") {
            InterfaceIdiom::Tv
        } else if cfg!(target_os = "watchos") {
            InterfaceIdiom::Watch
        } else if cfg!(target_os = "visionos") {
            InterfaceIdiom::Vision
        } else {
            InterfaceIdiom::Unspecified
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            InterfaceIdiom::CarPlay => "carPlay",
            InterfaceIdiom::Mac => "mac",
            InterfaceIdiom::Phone => "phone",
            InterfaceIdiom::Pad => "pad",
            InterfaceIdiom::Tv => "tv",
            InterfaceIdiom::Watch => "watch",
            InterfaceIdiom::Vision => "vision",
            InterfaceIdiom::Unspecified => "unspecified",
        }
    }
}

impl fmt::Display for InterfaceIdiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for InterfaceIdiom {
    type Err = DeviceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        InterfaceIdiom::ALL
            .into_iter()
            .find(|idiom| idiom.as_str() == s)
            .ok_or_else(|| DeviceError::invalid_value(format!("unknown interface idiom '{}'", s)))
    }
}

/// Structured operating system version.
///
/// Encodes with the keys `major`, `minor` and `patch` regardless of the Rust
/// field names.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct OperatingSystemVersion {
    #[serde(rename = "major")]
    pub major_version: u32,
    #[serde(rename = "minor")]
    pub minor_version: u32,
    #[serde(rename = "patch")]
    pub patch_version: u32,
}

impl OperatingSystemVersion {
    pub const fn new(major_version: u32, minor_version: u32, patch_version: u32) -> Self {
        Self {
            major_version,
            minor_version,
            patch_version,
        }
    }

    /// Parse the leading numeric components of a platform version string.
    ///
    /// `"6.8.0-45-generic"` gives `6.8.0`, `"14.2"` gives `14.2.0`. Missing or
    /// non-numeric components become zero, so this never fails.
    pub fn parse_lenient(raw: &str) -> Self {
        let mut parts = raw
            .trim()
            .split(|c: char| !c.is_ascii_digit())
            .take_while(|part| !part.is_empty())
            .take(3)
            .map(|part| part.parse::<u32>().unwrap_or(0));

        Self {
            major_version: parts.next().unwrap_or(0),
            minor_version: parts.next().unwrap_or(0),
            patch_version: parts.next().unwrap_or(0),
        }
    }
}

impl fmt::Display for OperatingSystemVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}.{}.{}",
            self.major_version, self.minor_version, self.patch_version
        )
    }
}
