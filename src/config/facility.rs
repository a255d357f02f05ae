//! Facility configuration models.

use std::collections::HashMap;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::core::occupancy::DEFAULT_CAPACITY;

/// Facility-level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FacilityConfig {
    /// IANA timezone name used for facility-local time.
    #[serde(default = "default_timezone")]
    pub timezone: String,
    /// Capacity used when the occupancy record is first created.
    #[serde(default = "default_capacity")]
    pub default_capacity: u32,
    /// Display strings for public opening hours, keyed by lowercase weekday
    /// name.
    #[serde(default = "default_opening_hours")]
    pub opening_hours: HashMap<String, String>,
    /// Bounded size of the in-memory audit buffer.
    #[serde(default = "default_audit_buffer")]
    pub audit_buffer: usize,
}

fn default_timezone() -> String {
    "Europe/Lisbon".into()
}

fn default_capacity() -> u32 {
    DEFAULT_CAPACITY
}

fn default_audit_buffer() -> usize {
    1024
}

fn default_opening_hours() -> HashMap<String, String> {
    // Weekends open an hour earlier.
    [
        ("sunday", "09:00-19:00"),
        ("monday", "10:00-19:00"),
        ("tuesday", "10:00-19:00"),
        ("wednesday", "10:00-19:00"),
        ("thursday", "10:00-19:00"),
        ("friday", "10:00-19:00"),
        ("saturday", "09:00-19:00"),
    ]
    .into_iter()
    .map(|(day, hours)| (day.to_owned(), hours.to_owned()))
    .collect()
}

impl Default for FacilityConfig {
    fn default() -> Self {
        Self {
            timezone: default_timezone(),
            default_capacity: default_capacity(),
            opening_hours: default_opening_hours(),
            audit_buffer: default_audit_buffer(),
        }
    }
}

impl FacilityConfig {
    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), String> {
        if self.timezone.is_empty() {
            return Err("timezone must not be empty".into());
        }
        if self.default_capacity == 0 {
            return Err("default_capacity must be at least 1".into());
        }
        if self.audit_buffer == 0 {
            return Err("audit_buffer must be greater than 0".into());
        }
        Ok(())
    }

    /// Parse facility configuration from a JSON string and validate.
    pub fn from_json_str(input: &str) -> Result<Self, String> {
        let cfg: Self = serde_json::from_str(input).map_err(|e| format!("parse error: {e}"))?;
        cfg.validate()?;
        Ok(cfg)
    }

    /// Load configuration from `POOLTRACK_*` environment variables, reading a
    /// `.env` file first if one is present.
    pub fn from_env() -> Result<Self, String> {
        dotenvy::dotenv().ok();
        let mut cfg = Self::default();
        if let Ok(tz) = std::env::var("POOLTRACK_TIMEZONE") {
            cfg.timezone = tz;
        }
        if let Ok(capacity) = std::env::var("POOLTRACK_DEFAULT_CAPACITY") {
            cfg.default_capacity = capacity
                .parse()
                .map_err(|e| format!("invalid POOLTRACK_DEFAULT_CAPACITY: {e}"))?;
        }
        if let Ok(buffer) = std::env::var("POOLTRACK_AUDIT_BUFFER") {
            cfg.audit_buffer = buffer
                .parse()
                .map_err(|e| format!("invalid POOLTRACK_AUDIT_BUFFER: {e}"))?;
        }
        cfg.validate()?;
        Ok(cfg)
    }

    /// Opening-hours display string for a weekday; "closed" when undefined.
    pub fn opening_hours_for(&self, weekday: Weekday) -> String {
        let key = match weekday {
            Weekday::Mon => "monday",
            Weekday::Tue => "tuesday",
            Weekday::Wed => "wednesday",
            Weekday::Thu => "thursday",
            Weekday::Fri => "friday",
            Weekday::Sat => "saturday",
            Weekday::Sun => "sunday",
        };
        self.opening_hours
            .get(key)
            .cloned()
            .unwrap_or_else(|| "closed".into())
    }
}
