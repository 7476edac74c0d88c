use device_facts::{
    DeviceConfig, DeviceNotification, FixedBattery, FixedPlatform, LiveDeviceInfo, ThermalState,
};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;

fn quiet_config() -> DeviceConfig {
    DeviceConfig {
        thermal_poll_interval_ms: 0,
        ..Default::default()
    }
}

async fn next_state(rx: &mut watch::Receiver<ThermalState>) -> ThermalState {
    tokio::time::timeout(Duration::from_secs(2), rx.changed())
        .await
        .expect("thermal state was not republished")
        .unwrap();
    *rx.borrow_and_update()
}

#[tokio::test]
async fn test_thermal_state_follows_every_notification() {
    let platform = Arc::new(FixedPlatform::new());
    let device = LiveDeviceInfo::new(
        platform.clone(),
        Arc::new(FixedBattery::new(50)),
        &quiet_config(),
    );
    let mut rx = device.subscribe_thermal_state();

    for state in [
        ThermalState::Fair,
        ThermalState::Serious,
        ThermalState::Critical,
        ThermalState::Nominal,
    ] {
        platform.set_thermal_state(state);
        device
            .notifications()
            .post(DeviceNotification::ThermalStateDidChange);
        assert_eq!(next_state(&mut rx).await, state);
    }
}

#[tokio::test]
async fn test_burst_of_notifications_settles_on_latest_state() {
    let platform = Arc::new(FixedPlatform::new());
    let config = DeviceConfig {
        thermal_poll_interval_ms: 0,
        notification_capacity: 1,
        ..Default::default()
    };
    let device = LiveDeviceInfo::new(platform.clone(), Arc::new(FixedBattery::new(50)), &config);
    let mut rx = device.subscribe_thermal_state();

    platform.set_thermal_state(ThermalState::Serious);
    for _ in 0..32 {
        device
            .notifications()
            .post(DeviceNotification::ThermalStateDidChange);
    }

    assert_eq!(next_state(&mut rx).await, ThermalState::Serious);
    assert_eq!(device.thermal_state(), ThermalState::Serious);
}

#[test]
fn test_independent_instances_do_not_share_state() {
    let hot = Arc::new(FixedPlatform::new().with_thermal_state(ThermalState::Critical));
    let cool = Arc::new(FixedPlatform::new());

    let first = LiveDeviceInfo::new(hot, Arc::new(FixedBattery::new(10)), &quiet_config());
    let second = LiveDeviceInfo::new(cool, Arc::new(FixedBattery::new(90)), &quiet_config());

    assert_eq!(first.thermal_state(), ThermalState::Critical);
    assert_eq!(second.thermal_state(), ThermalState::Nominal);
    assert_eq!(first.battery().percentage(), 10);
    assert_eq!(second.battery().percentage(), 90);
}

#[test]
fn test_current_is_a_singleton() {
    let first = LiveDeviceInfo::current();
    let second = LiveDeviceInfo::current();

    assert!(std::ptr::eq(first, second));
    assert!(!first.name().is_empty());
    assert!(first.processor_count() >= 1);
    assert!(first.battery().percentage() <= 100);
}

#[test]
fn test_current_uptime_advances() {
    let device = LiveDeviceInfo::current();
    let before = device.system_uptime();
    std::thread::sleep(Duration::from_millis(1_100));
    assert!(device.system_uptime() >= before);
}

#[tokio::test]
async fn test_notification_only_changes_thermal_state() {
    let platform = Arc::new(FixedPlatform::new());
    let device = LiveDeviceInfo::new(
        platform.clone(),
        Arc::new(FixedBattery::new(50)),
        &quiet_config(),
    );
    let mut rx = device.subscribe_thermal_state();
    let mut before = device.attributes();

    platform.set_thermal_state(ThermalState::Serious);
    device
        .notifications()
        .post(DeviceNotification::ThermalStateDidChange);
    assert_eq!(next_state(&mut rx).await, ThermalState::Serious);

    let mut after = device.attributes();
    assert_eq!(after.remove("thermalState").as_deref(), Some("serious"));
    assert_eq!(before.remove("thermalState").as_deref(), Some("nominal"));
    assert_eq!(before, after);
}
