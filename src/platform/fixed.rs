//! In-memory collaborators.
//!
//! [`FixedPlatform`] and [`FixedBattery`] return whatever they were built
//! with. They let callers inject known device facts (tests, previews, replay
//! of recorded data) without touching the host. Thermal state, uptime and the
//! battery values can be changed after construction to simulate the OS.

use std::collections::HashMap;
use std::time::Duration;

use parking_lot::RwLock;

use super::battery::BatteryProvider;
use super::DevicePlatform;
use crate::core::types::{InterfaceIdiom, OperatingSystemVersion, ThermalState};

#[derive(Debug)]
pub struct FixedPlatform {
    pub name: String,
    pub user_name: Option<String>,
    pub full_user_name: Option<String>,
    pub model: String,
    pub system_name: String,
    pub system_version: String,
    pub operating_system_version: OperatingSystemVersion,
    pub operating_system_version_string: String,
    pub processor_count: usize,
    pub active_processor_count: usize,
    pub interface_idiom: InterfaceIdiom,
    pub environment: HashMap<String, String>,
    thermal_state: RwLock<ThermalState>,
    system_uptime: RwLock<Duration>,
}

impl FixedPlatform {
    pub fn new() -> Self {
        Self {
            name: "test-device".to_string(),
            user_name: Some("tester".to_string()),
            full_user_name: Some("Test User".to_string()),
            model: "TestModel1,1".to_string(),
            system_name: "TestOS".to_string(),
            system_version: "14.2".to_string(),
            operating_system_version: OperatingSystemVersion::new(14, 2, 1),
            operating_system_version_string: "Version 14.2.1 (Build 23C71)".to_string(),
            processor_count: 8,
            active_processor_count: 8,
            interface_idiom: InterfaceIdiom::Mac,
            environment: HashMap::new(),
            thermal_state: RwLock::new(ThermalState::Nominal),
            system_uptime: RwLock::new(Duration::from_secs(3_600)),
        }
    }

    pub fn with_thermal_state(self, state: ThermalState) -> Self {
        self.set_thermal_state(state);
        self
    }

    pub fn with_system_uptime(self, uptime: Duration) -> Self {
        self.set_system_uptime(uptime);
        self
    }

    /// Change the thermal state the platform reports from now on.
    ///
    /// This does not notify anyone; post a notification to simulate the OS.
    pub fn set_thermal_state(&self, state: ThermalState) {
        *self.thermal_state.write() = state;
    }

    pub fn set_system_uptime(&self, uptime: Duration) {
        *self.system_uptime.write() = uptime;
    }
}

impl Default for FixedPlatform {
    fn default() -> Self {
        Self::new()
    }
}

impl DevicePlatform for FixedPlatform {
    fn name(&self) -> String {
        self.name.clone()
    }

    fn user_name(&self) -> Option<String> {
        self.user_name.clone()
    }

    fn full_user_name(&self) -> Option<String> {
        self.full_user_name.clone()
    }

    fn model(&self) -> String {
        self.model.clone()
    }

    fn system_name(&self) -> String {
        self.system_name.clone()
    }

    fn system_version(&self) -> String {
        self.system_version.clone()
    }

    fn operating_system_version(&self) -> OperatingSystemVersion {
        self.operating_system_version
    }

    fn operating_system_version_string(&self) -> String {
        self.operating_system_version_string.clone()
    }

    fn processor_count(&self) -> usize {
        self.processor_count
    }

    fn active_processor_count(&self) -> usize {
        self.active_processor_count
    }

    fn interface_idiom(&self) -> InterfaceIdiom {
        self.interface_idiom
    }

    fn thermal_state(&self) -> ThermalState {
        *self.thermal_state.read()
    }

    fn system_uptime(&self) -> Duration {
        *self.system_uptime.read()
    }

    fn environment(&self) -> HashMap<String, String> {
        self.environment.clone()
    }
}

/// Battery collaborator returning preset values, unvalidated.
#[derive(Debug)]
pub struct FixedBattery {
    percentage: RwLock<u8>,
    low_power_mode: RwLock<bool>,
    monitoring_enabled: bool,
}

impl FixedBattery {
    pub fn new(percentage: u8) -> Self {
        Self {
            percentage: RwLock::new(percentage),
            low_power_mode: RwLock::new(false),
            monitoring_enabled: true,
        }
    }

    pub fn with_monitoring(mut self, enabled: bool) -> Self {
        self.monitoring_enabled = enabled;
        self
    }

    pub fn set_percentage(&self, percentage: u8) {
        *self.percentage.write() = percentage;
    }

    pub fn set_low_power_mode(&self, enabled: bool) {
        *self.low_power_mode.write() = enabled;
    }
}

impl BatteryProvider for FixedBattery {
    fn percentage(&self) -> u8 {
        *self.percentage.read()
    }

    fn is_low_power_mode_enabled(&self) -> bool {
        *self.low_power_mode.read()
    }

    fn is_monitoring_enabled(&self) -> bool {
        self.monitoring_enabled
    }
}
