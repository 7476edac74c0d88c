//! Live, process-wide view of the device.
//!
//! Static facts (name, model, OS name and version, idiom) are read once at
//! construction. Counters that the OS keeps moving (uptime, processor
//! availability) are forwarded to the platform on every access. The thermal
//! state is the only pushed field: it is republished whenever the
//! notification center delivers [`DeviceNotification::ThermalStateDidChange`].
//!
//! [`DeviceNotification::ThermalStateDidChange`]: super::notifications::DeviceNotification

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use once_cell::sync::OnceCell;
use tokio::sync::watch;

use super::attributes;
use super::config::DeviceConfig;
use super::notifications::NotificationCenter;
use super::subscription::ThermalSubscription;
use super::types::{InterfaceIdiom, OperatingSystemVersion, ThermalState};
use crate::platform::{self, BatteryProvider, DevicePlatform, SystemBattery};

static CURRENT: OnceCell<LiveDeviceInfo> = OnceCell::new();

pub struct LiveDeviceInfo {
    name: String,
    user_name: Option<String>,
    full_user_name: Option<String>,
    model: String,
    system_name: String,
    system_version: String,
    interface_idiom: InterfaceIdiom,
    thermal_state: watch::Receiver<ThermalState>,
    notifications: NotificationCenter,
    platform: Arc<dyn DevicePlatform>,
    battery: Arc<dyn BatteryProvider>,
    subscription: Option<ThermalSubscription>,
}

impl LiveDeviceInfo {
    /// The process-wide instance, built on first access from the platform
    /// this crate was compiled for and the on-disk configuration.
    ///
    /// It is never torn down.
    pub fn current() -> &'static LiveDeviceInfo {
        CURRENT.get_or_init(|| {
            let config = DeviceConfig::load_or_default();
            let platform = platform::current(&config);
            LiveDeviceInfo::new(platform, Arc::new(SystemBattery::new()), &config)
        })
    }

    /// Build an instance over explicit collaborators.
    ///
    /// If the thermal subscription cannot be started, the instance still
    /// works but keeps the thermal state read at construction.
    pub fn new(
        platform: Arc<dyn DevicePlatform>,
        battery: Arc<dyn BatteryProvider>,
        config: &DeviceConfig,
    ) -> Self {
        let (publisher, thermal_state) = watch::channel(platform.thermal_state());
        let notifications = NotificationCenter::new(config.notification_capacity);

        let subscription = match ThermalSubscription::start(
            platform.clone(),
            &notifications,
            publisher,
            config.thermal_poll_interval(),
        ) {
            Ok(subscription) => Some(subscription),
            Err(e) => {
                log::warn!("Thermal state updates unavailable: {}", e);
                None
            }
        };

        let device = Self {
            name: platform.name(),
            user_name: platform.user_name(),
            full_user_name: platform.full_user_name(),
            model: platform.model(),
            system_name: platform.system_name(),
            system_version: platform.system_version(),
            interface_idiom: platform.interface_idiom(),
            thermal_state,
            notifications,
            platform,
            battery,
            subscription,
        };

        log::debug!(
            "Device info ready: {} ({} {}, {})",
            device.name,
            device.system_name,
            device.system_version,
            device.model
        );

        device
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn user_name(&self) -> Option<&str> {
        self.user_name.as_deref()
    }

    pub fn full_user_name(&self) -> Option<&str> {
        self.full_user_name.as_deref()
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

    pub fn interface_idiom(&self) -> InterfaceIdiom {
        self.interface_idiom
    }

    pub fn operating_system_version(&self) -> OperatingSystemVersion {
        self.platform.operating_system_version()
    }

    pub fn operating_system_version_string(&self) -> String {
        self.platform.operating_system_version_string()
    }

    pub fn processor_count(&self) -> usize {
        self.platform.processor_count()
    }

    pub fn active_processor_count(&self) -> usize {
        self.platform.active_processor_count()
    }

    pub fn system_uptime(&self) -> Duration {
        self.platform.system_uptime()
    }

    pub fn environment(&self) -> HashMap<String, String> {
        self.platform.environment()
    }

    /// Last published thermal state.
    pub fn thermal_state(&self) -> ThermalState {
        *self.thermal_state.borrow()
    }

    /// Receiver that wakes on every republished thermal state.
    pub fn subscribe_thermal_state(&self) -> watch::Receiver<ThermalState> {
        self.thermal_state.clone()
    }

    /// Center the thermal subscription listens on. Posting here simulates
    /// (or forwards) an OS change notification.
    pub fn notifications(&self) -> &NotificationCenter {
        &self.notifications
    }

    pub fn battery(&self) -> &dyn BatteryProvider {
        self.battery.as_ref()
    }

    /// Whether thermal notifications are being followed.
    pub fn is_live(&self) -> bool {
        self.subscription.is_some()
    }

    /// Field name to string value, for every field with a lossless string
    /// form. Structured fields are skipped.
    pub fn attributes(&self) -> BTreeMap<String, String> {
        attributes::collect(self)
    }
}

impl fmt::Debug for LiveDeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LiveDeviceInfo")
            .field("name", &self.name)
            .field("user_name", &self.user_name)
            .field("model", &self.model)
            .field("system_name", &self.system_name)
            .field("system_version", &self.system_version)
            .field("interface_idiom", &self.interface_idiom)
            .field("thermal_state", &self.thermal_state())
            .field("live", &self.is_live())
            .finish_non_exhaustive()
    }
}
