//! Tests for the store backends

use chrono::{TimeZone, Utc};
use pooltrack_ops::core::audit::PostgresAuditSink;
use pooltrack_ops::core::{OccupancyStore, ShiftRegistry};
use pooltrack_ops::infra::store::memory::InMemoryShiftRegistry;
use pooltrack_ops::infra::store::postgres::{
    PostgresOccupancyStore, PostgresShiftRegistry, PostgresWorkerDirectory,
};

#[test]
fn test_in_memory_registry_starts_empty() {
    let registry = InMemoryShiftRegistry::new();
    assert!(registry.is_empty());
    assert_eq!(registry.len(), 0);
    assert!(registry.open_shifts().unwrap().is_empty());
}

#[test]
fn test_postgres_stubs_fail_until_wired() {
    let now = Utc.with_ymd_and_hms(2026, 7, 10, 9, 0, 0).unwrap();
    let mut store = PostgresOccupancyStore;
    assert!(store.load_or_init(now).is_err());

    let registry = PostgresShiftRegistry;
    assert!(registry.open_shifts().is_err());
}

#[test]
fn test_migrations_target_expected_tables() {
    assert!(PostgresOccupancyStore::migrations()[0].contains("pt_pool_status"));
    assert!(PostgresShiftRegistry::migrations()[0].contains("pt_shift_records"));
    assert!(PostgresWorkerDirectory::migrations()[0].contains("pt_workers"));
    assert!(PostgresAuditSink::migrations()[0].contains("pt_audit_events"));
}

#[test]
fn test_shift_schema_enforces_one_open_shift_per_worker() {
    let sql = PostgresShiftRegistry::migrations()[0];
    assert!(sql.contains("WHERE ended_at IS NULL"));
    assert!(sql.contains("UNIQUE INDEX"));
}
