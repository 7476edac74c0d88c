use device_facts::{
    DeviceError, DeviceSnapshot, FixedBattery, FixedPlatform, InterfaceIdiom,
    OperatingSystemVersion, ThermalState,
};
use std::time::Duration;

#[test]
fn test_snapshot_json_roundtrip() {
    let platform = FixedPlatform::new()
        .with_thermal_state(ThermalState::Serious)
        .with_system_uptime(Duration::from_secs(86_400 + 17));
    let battery = FixedBattery::new(12);
    battery.set_low_power_mode(true);

    let snapshot = DeviceSnapshot::capture_from(&platform, &battery);
    let decoded = DeviceSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
    assert_eq!(decoded, snapshot);

    let pretty = snapshot.to_json_pretty().unwrap();
    assert!(pretty.contains('\n'));
    assert_eq!(DeviceSnapshot::from_json(&pretty).unwrap(), snapshot);
}

#[test]
fn test_snapshot_without_user_name() {
    let mut platform = FixedPlatform::new();
    platform.user_name = None;

    let snapshot = DeviceSnapshot::capture_from(&platform, &FixedBattery::new(100));
    assert_eq!(snapshot.user_name(), None);

    let decoded = DeviceSnapshot::from_json(&snapshot.to_json().unwrap()).unwrap();
    assert_eq!(decoded.user_name(), None);
}

#[test]
fn test_snapshot_decodes_handwritten_json() {
    let json = r#"{
        "name": "kitchen-ipad",
        "userName": null,
        "model": "iPad13,4",
        "systemName": "iPadOS",
        "systemVersion": "17.1",
        "operatingSystemVersion": {"major": 17, "minor": 1, "patch": 0},
        "processorCount": 8,
        "activeProcessorCount": 8,
        "thermalState": "fair",
        "interfaceIdiom": "pad",
        "batteryPercentage": 100,
        "isLowPowerModeEnabled": false,
        "isBatteryMonitoringEnabled": true,
        "systemUptime": 1234.5
    }"#;

    let snapshot = DeviceSnapshot::from_json(json).unwrap();
    assert_eq!(snapshot.name(), "kitchen-ipad");
    assert_eq!(snapshot.operating_system_version(), OperatingSystemVersion::new(17, 1, 0));
    assert_eq!(snapshot.thermal_state(), ThermalState::Fair);
    assert_eq!(snapshot.interface_idiom(), InterfaceIdiom::Pad);
    assert_eq!(snapshot.battery_percentage(), 100);
    assert_eq!(snapshot.system_uptime(), Duration::from_millis(1_234_500));
}

#[test]
fn test_snapshot_missing_field_is_decode_error() {
    let json = r#"{"name": "partial"}"#;
    assert!(matches!(
        DeviceSnapshot::from_json(json),
        Err(DeviceError::Decode(_))
    ));
}

#[test]
fn test_snapshot_negative_uptime_is_decode_error() {
    let snapshot = DeviceSnapshot::capture_from(&FixedPlatform::new(), &FixedBattery::new(50));
    let json = snapshot
        .to_json()
        .unwrap()
        .replace("\"systemUptime\":3600.0", "\"systemUptime\":-1.0");

    assert!(matches!(
        DeviceSnapshot::from_json(&json),
        Err(DeviceError::Decode(_))
    ));
}

#[test]
fn test_snapshot_is_detached_from_platform() {
    let platform = FixedPlatform::new();
    let snapshot = DeviceSnapshot::capture_from(&platform, &FixedBattery::new(50));

    platform.set_thermal_state(ThermalState::Critical);
    assert_eq!(snapshot.thermal_state(), ThermalState::Nominal);
}

#[test]
fn test_capture_on_host_is_consistent() {
    let first = DeviceSnapshot::capture();
    let second = DeviceSnapshot::capture();

    assert!(first.battery_percentage() <= 100);
    assert!(first.processor_count() >= 1);
    assert!(first.active_processor_count() <= first.processor_count());
    assert!(!first.name().is_empty());
    assert_eq!(first.name(), second.name());
    assert_eq!(first.model(), second.model());
    assert_eq!(first.operating_system_version(), second.operating_system_version());
}
