//! # Configuration Tests
//!
//! Defaults, partial JSON documents, file loading and validation.

use pretty_assertions::assert_eq;
use pulsar_harness::HarnessError;
use pulsar_harness::config::*;
use std::io::Write;

#[test]
fn test_config_default() {
    let config = HarnessConfig::default();
    assert_eq!(config.driver.pump_cycles, 10);
    assert_eq!(config.driver.max_cycles, None);
    assert_eq!(config.driver.settle, SettlePolicy::Pump);
    assert_eq!(config.scenario.trials, 1000);
    assert_eq!(config.scenario.bound, 1000);
    assert_eq!(config.scenario.seed, None);
}

#[test]
fn test_empty_document_is_default() {
    let config = HarnessConfig::from_json_str("{}").unwrap();
    assert_eq!(config, HarnessConfig::default());
}

#[test]
fn test_partial_sections_keep_field_defaults() {
    let json = r#"{
        "driver": { "pump_cycles": 4 },
        "scenario": { "seed": 7 }
    }"#;
    let config = HarnessConfig::from_json_str(json).unwrap();
    assert_eq!(
        config.driver,
        DriverConfig {
            pump_cycles: 4,
            max_cycles: None,
            settle: SettlePolicy::Pump,
        }
    );
    assert_eq!(
        config.scenario,
        ScenarioConfig {
            trials: 1000,
            bound: 1000,
            seed: Some(7),
        }
    );
}

#[test]
fn test_settle_policy_names() {
    let config =
        HarnessConfig::from_json_str(r#"{ "driver": { "settle": "single-cycle" } }"#).unwrap();
    assert_eq!(config.driver.settle, SettlePolicy::SingleCycle);
    assert_eq!("pump".parse::<SettlePolicy>(), Ok(SettlePolicy::Pump));
    assert!("half-cycle".parse::<SettlePolicy>().is_err());
}

#[test]
fn test_unknown_settle_policy_is_malformed() {
    let err = HarnessConfig::from_json_str(r#"{ "driver": { "settle": "forever" } }"#).unwrap_err();
    assert!(matches!(err, HarnessError::Config(_)));
}

#[test]
fn test_non_positive_bound_is_rejected() {
    let err = HarnessConfig::from_json_str(r#"{ "scenario": { "bound": 0 } }"#).unwrap_err();
    assert!(matches!(err, HarnessError::InvalidConfig(_)));
}

#[test]
fn test_zero_cycle_limit_is_rejected() {
    let err = HarnessConfig::from_json_str(r#"{ "driver": { "max_cycles": 0 } }"#).unwrap_err();
    assert!(matches!(err, HarnessError::InvalidConfig(_)));
}

#[test]
fn test_zero_trials_is_rejected() {
    let err = HarnessConfig::from_json_str(r#"{ "scenario": { "trials": 0, "seed": 1 } }"#)
        .unwrap_err();
    assert!(matches!(err, HarnessError::InvalidConfig(msg) if msg.contains("trials")));
}

#[test]
fn test_zero_pump_is_rejected() {
    let err = HarnessConfig::from_json_str(r#"{ "driver": { "pump_cycles": 0, "max_cycles": 1000 } }"#)
        .unwrap_err();
    assert!(matches!(err, HarnessError::InvalidConfig(msg) if msg.contains("pump_cycles")));
}

#[test]
fn test_from_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{ "scenario": {{ "trials": 25, "bound": 50 }} }}"#).unwrap();
    let config = HarnessConfig::from_file(file.path()).unwrap();
    assert_eq!(config.scenario.trials, 25);
    assert_eq!(config.scenario.bound, 50);
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = HarnessConfig::from_file(dir.path().join("absent.json")).unwrap_err();
    assert!(matches!(err, HarnessError::Io(_)));
}
