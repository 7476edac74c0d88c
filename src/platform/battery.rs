use crate::error::Result;

/// Battery collaborator.
///
/// Implementations report a percentage in `0..=100`; callers read the values
/// without validating them.
pub trait BatteryProvider: Send + Sync {
    fn percentage(&self) -> u8;
    fn is_low_power_mode_enabled(&self) -> bool;
    fn is_monitoring_enabled(&self) -> bool;
}

/// Reads the first system battery through the `battery` crate.
///
/// Every call reads fresh. Machines without a battery (or where reading it
/// fails) report 100% with monitoring disabled, i.e. mains powered.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemBattery;

impl SystemBattery {
    pub fn new() -> Self {
        Self
    }

    fn read_percentage() -> Result<Option<u8>> {
        let manager = battery::Manager::new()?;
        let mut batteries = manager.batteries()?;

        match batteries.next() {
            Some(first) => {
                let first = first?;
                let percent = first
                    .state_of_charge()
                    .get::<battery::units::ratio::percent>();
                Ok(Some(percent_to_u8(percent)))
            }
            None => Ok(None),
        }
    }
}

impl BatteryProvider for SystemBattery {
    fn percentage(&self) -> u8 {
        match Self::read_percentage() {
            Ok(Some(percent)) => percent,
            Ok(None) => 100,
            Err(e) => {
                log::debug!("Failed to read battery: {}", e);
                100
            }
        }
    }

    fn is_low_power_mode_enabled(&self) -> bool {
        low_power_mode()
    }

    fn is_monitoring_enabled(&self) -> bool {
        matches!(Self::read_percentage(), Ok(Some(_)))
    }
}

/// Round a percentage and clamp it to `0..=100`.
pub fn percent_to_u8(percent: f32) -> u8 {
    if !percent.is_finite() {
        return 0;
    }
    percent.round().clamp(0.0, 100.0) as u8
}

#[cfg(target_os = "linux")]
fn low_power_mode() -> bool {
    use std::path::Path;

    crate::platform::common::read_trimmed(Path::new("/sys/firmware/acpi/platform_profile"))
        .is_some_and(|profile| profile == "low-power")
}

#[cfg(target_os = "macos")]
fn low_power_mode() -> bool {
    crate::platform::common::command_output("pmset", &["-g"])
        .is_some_and(|output| parse_pmset_low_power(&output))
}

#[cfg(not(any(target_os = "linux", target_os = "macos")))]
fn low_power_mode() -> bool {
    false
}

/// Parse the `lowpowermode` line of `pmset -g`.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub fn parse_pmset_low_power(output: &str) -> bool {
    output.lines().any(|line| {
        let mut parts = line.split_whitespace();
        parts.next() == Some("lowpowermode") && parts.next() == Some("1")
    })
}
