//! Tests for error display

use chrono::NaiveTime;
use pooltrack_ops::core::{ShiftError, StoreError};
use pooltrack_ops::core::worker::WorkerId;

#[test]
fn test_pool_closed_message() {
    assert_eq!(
        ShiftError::PoolClosed.to_string(),
        "cannot start a shift while the pool is closed"
    );
}

#[test]
fn test_outside_hours_carries_local_time() {
    let err = ShiftError::OutsideShiftHours {
        local_time: NaiveTime::from_hms_opt(3, 0, 0).unwrap(),
    };
    assert_eq!(
        err.to_string(),
        "shifts may only start between 09:00 and 19:00 (local time is 03:00:00)"
    );
}

#[test]
fn test_worker_errors_name_the_business_key() {
    assert_eq!(
        ShiftError::WorkerNotFound(WorkerId::from("W0009")).to_string(),
        "worker `W0009` not found"
    );
    assert_eq!(
        ShiftError::WorkerInactive(WorkerId::from("W0002")).to_string(),
        "worker `W0002` is retired"
    );
    assert_eq!(
        ShiftError::NoOpenShift(WorkerId::from("W0002")).to_string(),
        "worker `W0002` has no open shift"
    );
}

#[test]
fn test_store_error_passthrough() {
    let err: ShiftError = StoreError::Backend("connection refused".into()).into();
    assert_eq!(err.to_string(), "backend error: connection refused");
}
