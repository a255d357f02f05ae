//! Error types for occupancy and shift operations.

use chrono::NaiveTime;
use thiserror::Error;

use crate::core::worker::WorkerId;

/// Expected, user-facing rejections from shift operations.
///
/// These are business rejections, not failures: each carries enough context
/// for a caller to display a meaningful message. The gate order in
/// `ShiftController::start_shift` determines which one a caller sees when
/// several conditions fail at once.
#[derive(Debug, Error)]
pub enum ShiftError {
    /// Shifts cannot start while the pool is closed.
    #[error("cannot start a shift while the pool is closed")]
    PoolClosed,
    /// Outside the valid start window.
    #[error("shifts may only start between 09:00 and 19:00 (local time is {local_time})")]
    OutsideShiftHours {
        /// Facility-local time at the moment of the attempt.
        local_time: NaiveTime,
    },
    /// No worker with the given business key.
    #[error("worker `{0}` not found")]
    WorkerNotFound(WorkerId),
    /// Worker exists but has been retired.
    #[error("worker `{0}` is retired")]
    WorkerInactive(WorkerId),
    /// No open shift to end.
    #[error("worker `{0}` has no open shift")]
    NoOpenShift(WorkerId),
    /// Failure from a storage backend.
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Errors produced by storage backends.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Backend-specific failure with context.
    #[error("backend error: {0}")]
    Backend(String),
}

/// Application-facing result using anyhow for higher-level contexts.
pub type AppResult<T> = Result<T, anyhow::Error>;
