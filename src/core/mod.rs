//! Domain logic: occupancy, shifts, workers, and closing side effects.

pub mod audit;
pub mod closing;
pub mod error;
pub mod occupancy;
pub mod shift;
pub mod worker;

pub use audit::{build_audit_event, AuditEvent, AuditSink, InMemoryAuditSink, PostgresAuditSink};
pub use closing::{
    CloseHook, CloseOutcome, CloseStep, CloseWarning, ClosingOrchestrator, ReportGenerator,
};
pub use error::{AppResult, ShiftError, StoreError};
pub use occupancy::{
    OccupancyController, OccupancyState, OccupancyStore, SetOpenOutcome, VisitorCounter,
    DEFAULT_CAPACITY,
};
pub use shift::{
    current_shift_label, is_within_shift_window, OnDutyRoster, OnDutyWorker, ShiftController,
    ShiftLabel, ShiftRecord, ShiftRegistry, ShiftStart, ShiftStats, ShiftWindow,
};
pub use worker::{Worker, WorkerDirectory, WorkerId, WorkerRole, WorkerStatus};
