//! Worker identity, roles, and the active/retired lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::StoreError;

/// Business key identifying a worker (e.g. `W0001`).
///
/// Shift records and lookups are addressed by this key, not by any
/// storage-level surrogate id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct WorkerId(pub String);

impl WorkerId {
    /// Format the `n`th sequential business key (`W0001`, `W0002`, ...).
    pub fn sequential(n: u32) -> Self {
        Self(format!("W{n:04}"))
    }
}

impl std::fmt::Display for WorkerId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for WorkerId {
    fn from(value: &str) -> Self {
        Self(value.to_owned())
    }
}

/// Staff roles at the facility.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum WorkerRole {
    /// Poolside lifeguard.
    Lifeguard,
    /// Bar staff.
    Bar,
    /// Facility monitor.
    Monitor,
    /// Ticket desk staff.
    TicketDesk,
}

impl WorkerRole {
    /// Stable string form used as grouping key in counts and reports.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Lifeguard => "lifeguard",
            Self::Bar => "bar",
            Self::Monitor => "monitor",
            Self::TicketDesk => "ticket_desk",
        }
    }
}

/// Worker lifecycle state.
///
/// Workers are never deleted; removal retires them, and retired workers can
/// be reinstated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WorkerStatus {
    /// Eligible for shifts.
    Active,
    /// Soft-deleted; cannot start shifts.
    Retired,
}

/// A staff member known to the facility.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Worker {
    /// Business key.
    pub worker_id: WorkerId,
    /// Display name.
    pub name: String,
    /// Assigned role.
    pub role: WorkerRole,
    /// Lifecycle state.
    pub status: WorkerStatus,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last administrative change.
    pub updated_at: DateTime<Utc>,
}

impl Worker {
    /// Create an active worker.
    pub fn new(
        worker_id: WorkerId,
        name: impl Into<String>,
        role: WorkerRole,
        now: DateTime<Utc>,
    ) -> Self {
        Self {
            worker_id,
            name: name.into(),
            role,
            status: WorkerStatus::Active,
            created_at: now,
            updated_at: now,
        }
    }

    /// Whether the worker may start shifts.
    pub fn is_active(&self) -> bool {
        self.status == WorkerStatus::Active
    }

    /// Retire the worker (soft delete). Idempotent.
    pub fn retire(&mut self, now: DateTime<Utc>) {
        self.status = WorkerStatus::Retired;
        self.updated_at = now;
    }

    /// Return a retired worker to active duty. Idempotent.
    pub fn reinstate(&mut self, now: DateTime<Utc>) {
        self.status = WorkerStatus::Active;
        self.updated_at = now;
    }
}

/// Lookup and administration of workers by business key.
pub trait WorkerDirectory: Send {
    /// Find a worker by business key.
    fn find(&self, worker_id: &WorkerId) -> Result<Option<Worker>, StoreError>;
    /// Insert or replace a worker record.
    fn upsert(&mut self, worker: Worker) -> Result<(), StoreError>;
    /// All known workers, ordered by name.
    fn all(&self) -> Result<Vec<Worker>, StoreError>;
    /// Next unused sequential business key.
    fn next_worker_id(&self) -> Result<WorkerId, StoreError>;
}
