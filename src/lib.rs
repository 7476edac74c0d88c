// device-facts - Public API

// Re-export error types
pub mod error;
pub use error::{DeviceError, Result};

// Module declarations
pub mod core;
pub mod platform;

// Re-export commonly used types
pub use core::config::DeviceConfig;
pub use core::live::LiveDeviceInfo;
pub use core::notifications::{DeviceNotification, NotificationCenter};
pub use core::snapshot::DeviceSnapshot;
pub use core::types::{InterfaceIdiom, OperatingSystemVersion, ThermalState};
pub use platform::{BatteryProvider, DevicePlatform, FixedBattery, FixedPlatform, SystemBattery};

/// Initialize logging from `RUST_LOG`, defaulting to `info`.
///
/// Safe to call more than once; only the first call installs the logger.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .try_init();
}
