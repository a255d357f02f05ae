//! Tests for the facility clock and timezone fallback

use chrono::{NaiveDate, TimeZone, Utc};
use chrono_tz::Tz;
use pooltrack_ops::util::clock::{now_ms, FacilityClock, FixedClock, SystemClock};

#[test]
fn test_now_ms_is_nonzero() {
    assert!(now_ms() > 0);
}

#[test]
fn test_system_clock_resolves_known_zone() {
    let clock = SystemClock::for_zone("Europe/Lisbon");
    assert_eq!(clock.timezone().to_string(), "Europe/Lisbon");
}

#[test]
fn test_system_clock_falls_back_to_utc() {
    let clock = SystemClock::for_zone("Atlantis/Nowhere");
    assert_eq!(clock.timezone(), Tz::UTC);

    // With the UTC fallback, local time tracks UTC.
    let local = clock.local_now();
    let utc = clock.now_utc().naive_utc();
    assert!((local - utc).num_seconds().abs() < 2);
}

#[test]
fn test_fixed_clock_reports_pinned_instants() {
    let utc = Utc.with_ymd_and_hms(2026, 7, 10, 9, 0, 0).unwrap();
    let local = NaiveDate::from_ymd_opt(2026, 7, 10)
        .unwrap()
        .and_hms_opt(10, 0, 0)
        .unwrap();
    let clock = FixedClock::new(utc, local);

    assert_eq!(clock.now_utc(), utc);
    assert_eq!(clock.local_now(), local);
}

#[test]
fn test_init_tracing_is_idempotent() {
    pooltrack_ops::util::init_tracing();
    pooltrack_ops::util::init_tracing();
}
