use device_facts::core::config::DeviceConfig;
use device_facts::platform::ThermalThresholds;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_config_default() {
    let config = DeviceConfig::default();
    assert_eq!(config.thermal_poll_interval_ms, 5_000);
    assert_eq!(config.notification_capacity, 16);
    assert_eq!(config.fallback_name, "localhost");
}

#[test]
fn test_config_load_full_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(
        &path,
        r#"{
            "thermal_poll_interval_ms": 250,
            "notification_capacity": 4,
            "fallback_name": "lab-bench",
            "thermal_thresholds": {
                "fair_celsius": 60.0,
                "serious_celsius": 75.0,
                "critical_celsius": 88.0
            }
        }"#,
    )
    .unwrap();

    let config = DeviceConfig::load_from(&path).unwrap();
    assert_eq!(
        config.thermal_poll_interval(),
        Some(std::time::Duration::from_millis(250))
    );
    assert_eq!(config.notification_capacity, 4);
    assert_eq!(config.fallback_name, "lab-bench");
    assert_eq!(
        config.thermal_thresholds,
        ThermalThresholds {
            fair_celsius: 60.0,
            serious_celsius: 75.0,
            critical_celsius: 88.0,
        }
    );
}

#[test]
fn test_config_unknown_keys_are_ignored() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"colour": "blue", "notification_capacity": 2}"#).unwrap();

    let config = DeviceConfig::load_from(&path).unwrap();
    assert_eq!(config.notification_capacity, 2);
    assert_eq!(config.fallback_name, "localhost");
}

#[test]
fn test_config_wrong_type_is_error() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    fs::write(&path, r#"{"thermal_poll_interval_ms": "fast"}"#).unwrap();

    assert!(DeviceConfig::load_from(&path).is_err());
}
