//! Thermal state derivation and change notification.
//!
//! Desktop kernels expose temperatures rather than a throttling tier, so the
//! tier is derived from sensor readings against [`ThermalThresholds`]. Since
//! no OS notification exists there either, [`thermal_notifier_task`] polls the
//! platform and posts a notification whenever the tier changes.

use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use sysinfo::Components;
use tokio::sync::broadcast;
use tokio::time::{interval, MissedTickBehavior};

use super::DevicePlatform;
use crate::core::notifications::{DeviceNotification, NotificationCenter};
use crate::core::types::ThermalState;

/// Temperatures (°C) at which each thermal tier begins.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThermalThresholds {
    pub fair_celsius: f32,
    pub serious_celsius: f32,
    pub critical_celsius: f32,
}

impl Default for ThermalThresholds {
    fn default() -> Self {
        Self {
            fair_celsius: 70.0,
            serious_celsius: 85.0,
            critical_celsius: 95.0,
        }
    }
}

/// Classify one sensor reading.
///
/// A sensor-reported critical temperature lowers the configured tiers when
/// it is below them; it never raises them.
pub fn classify_temperature(
    current_celsius: f32,
    sensor_critical_celsius: Option<f32>,
    thresholds: &ThermalThresholds,
) -> ThermalState {
    if !current_celsius.is_finite() {
        return ThermalState::Nominal;
    }

    let critical = sensor_critical_celsius
        .filter(|c| c.is_finite() && *c > 0.0)
        .map_or(thresholds.critical_celsius, |c| {
            c.min(thresholds.critical_celsius)
        });
    let serious = thresholds.serious_celsius.min(critical);
    let fair = thresholds.fair_celsius.min(serious);

    if current_celsius >= critical {
        ThermalState::Critical
    } else if current_celsius >= serious {
        ThermalState::Serious
    } else if current_celsius >= fair {
        ThermalState::Fair
    } else {
        ThermalState::Nominal
    }
}

/// Worst tier across a set of `(current, critical)` readings.
pub fn classify_readings<I>(readings: I, thresholds: &ThermalThresholds) -> ThermalState
where
    I: IntoIterator<Item = (f32, Option<f32>)>,
{
    readings
        .into_iter()
        .map(|(current, critical)| classify_temperature(current, critical, thresholds))
        .max()
        .unwrap_or_default()
}

/// Thermal tier from the hardware sensors `sysinfo` can see.
///
/// Machines without readable sensors (VMs, containers) report nominal.
pub fn thermal_state_from_sensors(thresholds: &ThermalThresholds) -> ThermalState {
    let components = Components::new_with_refreshed_list();

    classify_readings(
        components
            .iter()
            .filter_map(|comp| comp.temperature().map(|t| (t, comp.critical()))),
        thresholds,
    )
}

/// Map a CPU speed limit percentage (100 = unthrottled) to a thermal tier.
pub fn classify_speed_limit(percent: u32) -> ThermalState {
    match percent {
        100.. => ThermalState::Nominal,
        80..=99 => ThermalState::Fair,
        50..=79 => ThermalState::Serious,
        _ => ThermalState::Critical,
    }
}

/// Parse `pmset -g therm` output.
///
/// Returns `None` when no speed limit is recorded, which macOS reports when
/// the machine has never been throttled.
#[cfg_attr(not(target_os = "macos"), allow(dead_code))]
pub fn parse_pmset_therm(output: &str) -> Option<ThermalState> {
    output.lines().find_map(|line| {
        let (key, value) = line.split_once('=')?;
        if key.trim() != "CPU_Speed_Limit" {
            return None;
        }
        value.trim().parse::<u32>().ok().map(classify_speed_limit)
    })
}

/// Poll the platform and post [`DeviceNotification::ThermalStateDidChange`]
/// whenever the tier differs from the last one seen.
///
/// Runs until `shutdown` fires.
pub async fn thermal_notifier_task(
    platform: Arc<dyn DevicePlatform>,
    center: NotificationCenter,
    period: Duration,
    mut last_seen: ThermalState,
    mut shutdown: broadcast::Receiver<()>,
) {
    log::debug!("Thermal notifier started (every {:?})", period);

    let mut ticker = interval(period);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Skip);
    // The first tick completes immediately; the caller already read the state.
    ticker.tick().await;

    loop {
        tokio::select! {
            _ = ticker.tick() => {
                let state = platform.thermal_state();
                if state != last_seen {
                    log::debug!("Thermal state moved from {} to {}", last_seen, state);
                    last_seen = state;
                    center.post(DeviceNotification::ThermalStateDidChange);
                }
            }
            _ = shutdown.recv() => {
                log::debug!("Thermal notifier shutting down");
                break;
            }
        }
    }
}
