//! Postgres-backed store adapters (schema and interface stubs).

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::error::StoreError;
use crate::core::occupancy::{OccupancyState, OccupancyStore};
use crate::core::shift::{ShiftRecord, ShiftRegistry};
use crate::core::worker::{Worker, WorkerDirectory, WorkerId};

fn not_wired() -> StoreError {
    StoreError::Backend("postgres store not wired to database client".into())
}

/// Postgres occupancy store placeholder.
pub struct PostgresOccupancyStore;

impl PostgresOccupancyStore {
    /// Migration statements for the occupancy record.
    pub fn migrations() -> &'static [&'static str] {
        &[
            r#"
CREATE TABLE IF NOT EXISTS pt_pool_status (
    id SMALLINT PRIMARY KEY DEFAULT 1 CHECK (id = 1),
    current_count INT NOT NULL DEFAULT 0 CHECK (current_count >= 0),
    max_capacity INT NOT NULL DEFAULT 120 CHECK (max_capacity >= 1),
    is_open BOOLEAN NOT NULL DEFAULT TRUE,
    last_updated TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    CHECK (current_count <= max_capacity)
);
"#,
        ]
    }
}

impl OccupancyStore for PostgresOccupancyStore {
    fn load_or_init(&mut self, _now: DateTime<Utc>) -> Result<OccupancyState, StoreError> {
        Err(not_wired())
    }

    fn save(&mut self, _state: &OccupancyState) -> Result<(), StoreError> {
        Err(not_wired())
    }
}

/// Postgres shift registry placeholder.
pub struct PostgresShiftRegistry;

impl PostgresShiftRegistry {
    /// Migration statements for shift records.
    pub fn migrations() -> &'static [&'static str] {
        &[
            r#"
CREATE TABLE IF NOT EXISTS pt_shift_records (
    id UUID PRIMARY KEY,
    worker_id TEXT NOT NULL,
    role TEXT NOT NULL,
    label TEXT NOT NULL,
    started_at TIMESTAMPTZ NOT NULL,
    ended_at TIMESTAMPTZ
);
CREATE UNIQUE INDEX IF NOT EXISTS idx_pt_shift_open_per_worker
    ON pt_shift_records (worker_id) WHERE ended_at IS NULL;
CREATE INDEX IF NOT EXISTS idx_pt_shift_records_started ON pt_shift_records (started_at);
"#,
        ]
    }
}

impl ShiftRegistry for PostgresShiftRegistry {
    fn open_shift(&self, _worker_id: &WorkerId) -> Result<Option<ShiftRecord>, StoreError> {
        Err(not_wired())
    }

    fn insert(&mut self, _record: ShiftRecord) -> Result<(), StoreError> {
        Err(not_wired())
    }

    fn end_shift(
        &mut self,
        _worker_id: &WorkerId,
        _ended_at: DateTime<Utc>,
    ) -> Result<Option<ShiftRecord>, StoreError> {
        Err(not_wired())
    }

    fn end_all(&mut self, _ended_at: DateTime<Utc>) -> Result<usize, StoreError> {
        Err(not_wired())
    }

    fn open_shifts(&self) -> Result<Vec<ShiftRecord>, StoreError> {
        Err(not_wired())
    }

    fn completed_between(
        &self,
        _from: NaiveDate,
        _to: NaiveDate,
    ) -> Result<Vec<ShiftRecord>, StoreError> {
        Err(not_wired())
    }
}

/// Postgres worker directory placeholder.
pub struct PostgresWorkerDirectory;

impl PostgresWorkerDirectory {
    /// Migration statements for the worker directory.
    pub fn migrations() -> &'static [&'static str] {
        &[
            r#"
CREATE TABLE IF NOT EXISTS pt_workers (
    worker_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    role TEXT NOT NULL,
    status TEXT NOT NULL DEFAULT 'active',
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW(),
    updated_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
CREATE INDEX IF NOT EXISTS idx_pt_workers_name ON pt_workers (name);
"#,
        ]
    }
}

impl WorkerDirectory for PostgresWorkerDirectory {
    fn find(&self, _worker_id: &WorkerId) -> Result<Option<Worker>, StoreError> {
        Err(not_wired())
    }

    fn upsert(&mut self, _worker: Worker) -> Result<(), StoreError> {
        Err(not_wired())
    }

    fn all(&self) -> Result<Vec<Worker>, StoreError> {
        Err(not_wired())
    }

    fn next_worker_id(&self) -> Result<WorkerId, StoreError> {
        Err(not_wired())
    }
}
