// Platform-specific code module

pub mod battery;
pub mod common;
pub mod fixed;
pub mod generic;
pub mod thermal;

#[cfg(target_os = "linux")]
pub mod linux;
#[cfg(target_os = "macos")]
pub mod macos;
#[cfg(windows)]
pub mod windows;

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use crate::core::config::DeviceConfig;
use crate::core::types::{InterfaceIdiom, OperatingSystemVersion, ThermalState};

// Re-exports para imports limpios
pub use battery::{BatteryProvider, SystemBattery};
pub use fixed::{FixedBattery, FixedPlatform};
pub use generic::GenericPlatform;
pub use thermal::ThermalThresholds;

/// Device-info collaborator, implemented once per target platform.
///
/// Every method is infallible: implementations substitute a fallback value
/// when the underlying OS API is unavailable.
pub trait DevicePlatform: Send + Sync {
    /// Friendly device name.
    fn name(&self) -> String;

    fn user_name(&self) -> Option<String> {
        common::env_user_name()
    }

    fn full_user_name(&self) -> Option<String> {
        None
    }

    /// Hardware model identifier, or the platform family name.
    fn model(&self) -> String;

    fn system_name(&self) -> String;

    fn system_version(&self) -> String;

    fn operating_system_version(&self) -> OperatingSystemVersion;

    fn operating_system_version_string(&self) -> String;

    fn processor_count(&self) -> usize {
        common::processor_count()
    }

    fn active_processor_count(&self) -> usize {
        common::active_processor_count()
    }

    fn interface_idiom(&self) -> InterfaceIdiom {
        InterfaceIdiom::current()
    }

    fn thermal_state(&self) -> ThermalState;

    fn system_uptime(&self) -> Duration {
        common::system_uptime()
    }

    fn environment(&self) -> HashMap<String, String> {
        common::environment()
    }
}

/// Platform implementation for the target this crate was built for.
pub fn current(config: &DeviceConfig) -> Arc<dyn DevicePlatform> {
    #[cfg(target_os = "linux")]
    {
        Arc::new(linux::LinuxPlatform::new(config))
    }

    #[cfg(target_os = "macos")]
    {
        Arc::new(macos::MacPlatform::new(config))
    }

    #[cfg(windows)]
    {
        Arc::new(windows::WindowsPlatform::new(config))
    }

    #[cfg(not(any(windows, target_os = "linux", target_os = "macos")))]
    {
        Arc::new(GenericPlatform::new(config))
    }
}
