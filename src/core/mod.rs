// Core device model

pub mod attributes;
pub mod config;
pub mod live;
pub mod notifications;
pub mod snapshot;
mod subscription;
pub mod types;

// Re-export commonly used items
pub use attributes::{Field, FieldValue, LosslessString, LIVE_FIELDS};
pub use config::DeviceConfig;
pub use live::LiveDeviceInfo;
pub use notifications::{DeviceNotification, NotificationCenter};
pub use snapshot::DeviceSnapshot;
pub use types::{InterfaceIdiom, OperatingSystemVersion, ThermalState};
