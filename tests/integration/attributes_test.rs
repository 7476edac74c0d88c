use device_facts::core::attributes::{FieldValue, LIVE_FIELDS};
use device_facts::{
    DeviceConfig, FixedBattery, FixedPlatform, InterfaceIdiom, LiveDeviceInfo, ThermalState,
};
use std::sync::Arc;

fn quiet_config() -> DeviceConfig {
    DeviceConfig {
        thermal_poll_interval_ms: 0,
        ..Default::default()
    }
}

#[test]
fn test_attributes_contain_lossless_fields() {
    let device = LiveDeviceInfo::new(
        Arc::new(FixedPlatform::new()),
        Arc::new(FixedBattery::new(50)),
        &quiet_config(),
    );
    let attributes = device.attributes();

    assert_eq!(attributes["name"], "test-device");
    assert_eq!(attributes["userName"], "tester");
    assert_eq!(attributes["fullUserName"], "Test User");
    assert_eq!(attributes["model"], "TestModel1,1");
    assert_eq!(attributes["systemName"], "TestOS");
    assert_eq!(attributes["systemVersion"], "14.2");
    assert_eq!(
        attributes["operatingSystemVersionString"],
        "Version 14.2.1 (Build 23C71)"
    );
    assert_eq!(attributes["processorCount"], "8");
    assert_eq!(attributes["activeProcessorCount"], "8");
    assert_eq!(attributes["interfaceIdiom"], "mac");
    assert_eq!(attributes["thermalState"], "nominal");
}

#[test]
fn test_attributes_skip_structured_fields() {
    let device = LiveDeviceInfo::new(
        Arc::new(FixedPlatform::new()),
        Arc::new(FixedBattery::new(50)),
        &quiet_config(),
    );
    let attributes = device.attributes();

    for key in ["operatingSystemVersion", "systemUptime", "environment", "battery"] {
        assert!(!attributes.contains_key(key), "{} should be skipped", key);
    }
}

#[test]
fn test_attributes_skip_absent_optionals() {
    let mut platform = FixedPlatform::new();
    platform.user_name = None;
    platform.full_user_name = None;

    let device = LiveDeviceInfo::new(
        Arc::new(platform),
        Arc::new(FixedBattery::new(50)),
        &quiet_config(),
    );
    let attributes = device.attributes();

    assert!(!attributes.contains_key("userName"));
    assert!(!attributes.contains_key("fullUserName"));
    assert!(attributes.contains_key("name"));
}

#[test]
fn test_attribute_values_parse_back() {
    let device = LiveDeviceInfo::new(
        Arc::new(FixedPlatform::new().with_thermal_state(ThermalState::Critical)),
        Arc::new(FixedBattery::new(50)),
        &quiet_config(),
    );
    let attributes = device.attributes();

    let thermal: ThermalState = attributes["thermalState"].parse().unwrap();
    assert_eq!(thermal, device.thermal_state());

    let idiom: InterfaceIdiom = attributes["interfaceIdiom"].parse().unwrap();
    assert_eq!(idiom, device.interface_idiom());

    let count: usize = attributes["processorCount"].parse().unwrap();
    assert_eq!(count, device.processor_count());
}

#[test]
fn test_attributes_match_field_table() {
    let device = LiveDeviceInfo::new(
        Arc::new(FixedPlatform::new()),
        Arc::new(FixedBattery::new(50)),
        &quiet_config(),
    );
    let attributes = device.attributes();

    let text_fields = LIVE_FIELDS
        .iter()
        .filter(|field| matches!(field.read(&device), FieldValue::Text(_)))
        .count();
    assert_eq!(attributes.len(), text_fields);
}
