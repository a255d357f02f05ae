//! In-memory store backends for development and testing.

use chrono::{DateTime, NaiveDate, Utc};

use crate::core::error::StoreError;
use crate::core::occupancy::{OccupancyState, OccupancyStore};
use crate::core::shift::{ShiftRecord, ShiftRegistry};
use crate::core::worker::{Worker, WorkerDirectory, WorkerId};

/// In-memory holder of the single occupancy record.
pub struct InMemoryOccupancyStore {
    default_capacity: u32,
    state: Option<OccupancyState>,
}

impl InMemoryOccupancyStore {
    /// Create an empty store; the record is created on first access with the
    /// given capacity.
    pub fn new(default_capacity: u32) -> Self {
        Self {
            default_capacity,
            state: None,
        }
    }
}

impl OccupancyStore for InMemoryOccupancyStore {
    fn load_or_init(&mut self, now: DateTime<Utc>) -> Result<OccupancyState, StoreError> {
        if let Some(state) = &self.state {
            return Ok(state.clone());
        }
        let state = OccupancyState::initial(self.default_capacity, now);
        self.state = Some(state.clone());
        Ok(state)
    }

    fn save(&mut self, state: &OccupancyState) -> Result<(), StoreError> {
        self.state = Some(state.clone());
        Ok(())
    }
}

/// In-memory shift registry.
#[derive(Default)]
pub struct InMemoryShiftRegistry {
    records: Vec<ShiftRecord>,
}

impl InMemoryShiftRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Total record count, open and completed.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the registry holds no records at all.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl ShiftRegistry for InMemoryShiftRegistry {
    fn open_shift(&self, worker_id: &WorkerId) -> Result<Option<ShiftRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .find(|r| r.worker_id == *worker_id && r.ended_at.is_none())
            .cloned())
    }

    fn insert(&mut self, record: ShiftRecord) -> Result<(), StoreError> {
        self.records.push(record);
        Ok(())
    }

    fn end_shift(
        &mut self,
        worker_id: &WorkerId,
        ended_at: DateTime<Utc>,
    ) -> Result<Option<ShiftRecord>, StoreError> {
        let open = self
            .records
            .iter_mut()
            .find(|r| r.worker_id == *worker_id && r.ended_at.is_none());
        Ok(open.map(|record| {
            record.ended_at = Some(ended_at);
            record.clone()
        }))
    }

    fn end_all(&mut self, ended_at: DateTime<Utc>) -> Result<usize, StoreError> {
        let mut count = 0;
        for record in self.records.iter_mut().filter(|r| r.ended_at.is_none()) {
            record.ended_at = Some(ended_at);
            count += 1;
        }
        Ok(count)
    }

    fn open_shifts(&self) -> Result<Vec<ShiftRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.ended_at.is_none())
            .cloned()
            .collect())
    }

    fn completed_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ShiftRecord>, StoreError> {
        Ok(self
            .records
            .iter()
            .filter(|r| {
                let date = r.started_at.date_naive();
                r.ended_at.is_some() && date >= from && date <= to
            })
            .cloned()
            .collect())
    }
}

/// In-memory worker directory.
#[derive(Default)]
pub struct InMemoryWorkerDirectory {
    workers: Vec<Worker>,
}

impl InMemoryWorkerDirectory {
    /// Create an empty directory.
    pub fn new() -> Self {
        Self::default()
    }
}

impl WorkerDirectory for InMemoryWorkerDirectory {
    fn find(&self, worker_id: &WorkerId) -> Result<Option<Worker>, StoreError> {
        Ok(self
            .workers
            .iter()
            .find(|w| w.worker_id == *worker_id)
            .cloned())
    }

    fn upsert(&mut self, worker: Worker) -> Result<(), StoreError> {
        match self
            .workers
            .iter_mut()
            .find(|w| w.worker_id == worker.worker_id)
        {
            Some(existing) => *existing = worker,
            None => self.workers.push(worker),
        }
        Ok(())
    }

    fn all(&self) -> Result<Vec<Worker>, StoreError> {
        let mut workers = self.workers.clone();
        workers.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(workers)
    }

    fn next_worker_id(&self) -> Result<WorkerId, StoreError> {
        let highest = self
            .workers
            .iter()
            .filter_map(|w| w.worker_id.0.strip_prefix('W'))
            .filter_map(|digits| digits.parse::<u32>().ok())
            .max()
            .unwrap_or(0);
        Ok(WorkerId::sequential(highest + 1))
    }
}
