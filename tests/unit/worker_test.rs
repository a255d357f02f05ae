//! Tests for worker lifecycle and the in-memory directory

use chrono::{TimeZone, Utc};
use pooltrack_ops::core::worker::{Worker, WorkerDirectory, WorkerId, WorkerRole, WorkerStatus};
use pooltrack_ops::infra::store::memory::InMemoryWorkerDirectory;

fn now() -> chrono::DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 7, 10, 9, 0, 0).unwrap()
}

#[test]
fn test_sequential_business_keys() {
    assert_eq!(WorkerId::sequential(1).to_string(), "W0001");
    assert_eq!(WorkerId::sequential(42).to_string(), "W0042");
    assert_eq!(WorkerId::sequential(12345).to_string(), "W12345");
}

#[test]
fn test_retire_and_reinstate() {
    let mut worker = Worker::new(WorkerId::from("W0001"), "Ana", WorkerRole::Lifeguard, now());
    assert!(worker.is_active());

    worker.retire(now());
    assert_eq!(worker.status, WorkerStatus::Retired);
    assert!(!worker.is_active());

    // Retiring again is a no-op, not an error.
    worker.retire(now());
    assert!(!worker.is_active());

    worker.reinstate(now());
    assert!(worker.is_active());
}

#[test]
fn test_next_worker_id_starts_at_one() {
    let directory = InMemoryWorkerDirectory::new();
    assert_eq!(directory.next_worker_id().unwrap().to_string(), "W0001");
}

#[test]
fn test_next_worker_id_skips_used_keys() {
    let mut directory = InMemoryWorkerDirectory::new();
    directory
        .upsert(Worker::new(WorkerId::from("W0007"), "Rui", WorkerRole::Bar, now()))
        .unwrap();
    directory
        .upsert(Worker::new(WorkerId::from("W0002"), "Ana", WorkerRole::Monitor, now()))
        .unwrap();
    // Keys outside the W#### scheme are ignored.
    directory
        .upsert(Worker::new(WorkerId::from("guest-1"), "Zé", WorkerRole::Bar, now()))
        .unwrap();

    assert_eq!(directory.next_worker_id().unwrap().to_string(), "W0008");
}

#[test]
fn test_upsert_replaces_and_all_sorts_by_name() {
    let mut directory = InMemoryWorkerDirectory::new();
    directory
        .upsert(Worker::new(WorkerId::from("W0001"), "Rui", WorkerRole::Bar, now()))
        .unwrap();
    directory
        .upsert(Worker::new(WorkerId::from("W0002"), "Ana", WorkerRole::Lifeguard, now()))
        .unwrap();

    let mut updated = directory.find(&WorkerId::from("W0001")).unwrap().unwrap();
    updated.retire(now());
    directory.upsert(updated).unwrap();

    let all = directory.all().unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].name, "Ana");
    assert_eq!(all[1].name, "Rui");
    assert_eq!(all[1].status, WorkerStatus::Retired);
}
