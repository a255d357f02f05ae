//! Tests for facility configuration validation

use chrono::Weekday;
use pooltrack_ops::config::FacilityConfig;

#[test]
fn test_default_config_is_valid() {
    let cfg = FacilityConfig::default();
    assert!(cfg.validate().is_ok());
    assert_eq!(cfg.timezone, "Europe/Lisbon");
    assert_eq!(cfg.default_capacity, 120);
}

#[test]
fn test_config_invalid_capacity() {
    let cfg = FacilityConfig {
        default_capacity: 0,
        ..FacilityConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_invalid_timezone() {
    let cfg = FacilityConfig {
        timezone: String::new(),
        ..FacilityConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_config_invalid_audit_buffer() {
    let cfg = FacilityConfig {
        audit_buffer: 0,
        ..FacilityConfig::default()
    };
    assert!(cfg.validate().is_err());
}

#[test]
fn test_from_json_str_applies_defaults() {
    let cfg = FacilityConfig::from_json_str("{}").expect("empty object should parse");
    assert_eq!(cfg.timezone, "Europe/Lisbon");
    assert_eq!(cfg.default_capacity, 120);
    assert_eq!(cfg.audit_buffer, 1024);
}

#[test]
fn test_from_json_str_overrides() {
    let cfg = FacilityConfig::from_json_str(
        r#"{"timezone": "Europe/Madrid", "default_capacity": 80}"#,
    )
    .expect("valid config");
    assert_eq!(cfg.timezone, "Europe/Madrid");
    assert_eq!(cfg.default_capacity, 80);
}

#[test]
fn test_from_json_str_rejects_garbage() {
    assert!(FacilityConfig::from_json_str("not json").is_err());
    assert!(FacilityConfig::from_json_str(r#"{"default_capacity": 0}"#).is_err());
}

#[test]
fn test_opening_hours_weekend_differs() {
    let cfg = FacilityConfig::default();
    assert_eq!(cfg.opening_hours_for(Weekday::Sun), "09:00-19:00");
    assert_eq!(cfg.opening_hours_for(Weekday::Sat), "09:00-19:00");
    assert_eq!(cfg.opening_hours_for(Weekday::Wed), "10:00-19:00");
}

#[test]
fn test_opening_hours_missing_day_is_closed() {
    let cfg = FacilityConfig {
        opening_hours: std::collections::HashMap::new(),
        ..FacilityConfig::default()
    };
    assert_eq!(cfg.opening_hours_for(Weekday::Mon), "closed");
}
