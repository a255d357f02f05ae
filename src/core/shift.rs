//! Shift records, time windows, and the controller gating shift starts.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, NaiveDate, NaiveTime, Timelike, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::core::audit::{build_audit_event, AuditSink};
use crate::core::error::{ShiftError, StoreError};
use crate::core::occupancy::OccupancyStore;
use crate::core::worker::{WorkerDirectory, WorkerId, WorkerRole};
use crate::util::clock::FacilityClock;

/// Morning/afternoon classification attached to a shift.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ShiftLabel {
    /// 09:00 to 14:00 facility-local.
    Morning,
    /// 14:00 to 19:00 facility-local.
    Afternoon,
}

impl ShiftLabel {
    /// Stable string form.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Afternoon => "afternoon",
        }
    }
}

impl std::fmt::Display for ShiftLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Label for the given facility-local time.
///
/// Everything outside [09:00, 14:00) maps to afternoon, including hours the
/// valid-start window would reject; validity is `is_within_shift_window`'s
/// job, and the two are deliberately separate functions.
pub fn current_shift_label(local: NaiveTime) -> ShiftLabel {
    if (9..14).contains(&local.hour()) {
        ShiftLabel::Morning
    } else {
        ShiftLabel::Afternoon
    }
}

/// True iff shifts may start at this facility-local time ([09:00, 19:00)).
pub fn is_within_shift_window(local: NaiveTime) -> bool {
    (9..19).contains(&local.hour())
}

/// One worker's on-duty interval. `ended_at == None` means on duty.
///
/// At most one record per worker may be open at any moment; the registry
/// backends uphold this through the controller's start gate.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftRecord {
    /// Record id.
    pub id: Uuid,
    /// Business key of the worker on duty.
    pub worker_id: WorkerId,
    /// Role copied at shift start; never re-derived from the directory.
    pub role: WorkerRole,
    /// Morning/afternoon classification.
    pub label: ShiftLabel,
    /// When the shift started.
    pub started_at: DateTime<Utc>,
    /// When the shift ended; `None` while open.
    pub ended_at: Option<DateTime<Utc>>,
}

/// Registry of shift records.
pub trait ShiftRegistry: Send {
    /// The worker's open shift, if any.
    fn open_shift(&self, worker_id: &WorkerId) -> Result<Option<ShiftRecord>, StoreError>;
    /// Store a newly started shift.
    fn insert(&mut self, record: ShiftRecord) -> Result<(), StoreError>;
    /// End the worker's open shift; returns the closed record if one existed.
    fn end_shift(
        &mut self,
        worker_id: &WorkerId,
        ended_at: DateTime<Utc>,
    ) -> Result<Option<ShiftRecord>, StoreError>;
    /// End every open shift; returns how many were closed.
    fn end_all(&mut self, ended_at: DateTime<Utc>) -> Result<usize, StoreError>;
    /// All currently-open records.
    fn open_shifts(&self) -> Result<Vec<ShiftRecord>, StoreError>;
    /// Completed shifts whose start date falls within `[from, to]`.
    fn completed_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ShiftRecord>, StoreError>;
}

/// Successful shift start.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftStart {
    /// Label assigned to the shift.
    pub label: ShiftLabel,
    /// When the shift started.
    pub started_at: DateTime<Utc>,
    /// True when the worker was already on duty and the existing shift was
    /// reported instead of a new one being created.
    pub resumed: bool,
}

/// Current label plus start-window validity, for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftWindow {
    /// Label for the current local time.
    pub label: ShiftLabel,
    /// Whether a shift may start right now.
    pub within_window: bool,
    /// Facility-local time the query was evaluated at.
    pub local_time: NaiveTime,
}

/// One worker on the public "who's on duty" display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnDutyWorker {
    /// Business key.
    pub worker_id: WorkerId,
    /// Display name, if the directory still knows the worker.
    pub name: String,
    /// Role copied at shift start.
    pub role: WorkerRole,
    /// Shift classification.
    pub label: ShiftLabel,
    /// When the shift started.
    pub started_at: DateTime<Utc>,
}

/// On-duty counts per role plus the roster, ordered by role then name.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnDutyRoster {
    /// Open shifts per role.
    pub counts: HashMap<String, usize>,
    /// Workers currently on duty.
    pub workers: Vec<OnDutyWorker>,
}

/// Per-worker totals of completed shifts over a reporting period.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftStats {
    /// Business key.
    pub worker_id: WorkerId,
    /// Display name, if known.
    pub name: String,
    /// Current directory role; the role recorded on the shifts when the
    /// directory no longer knows the worker.
    pub role: WorkerRole,
    /// Completed morning shifts.
    pub morning: u32,
    /// Completed afternoon shifts.
    pub afternoon: u32,
    /// Completed shifts overall.
    pub total: u32,
}

/// Decides whether a worker may start or stop a shift, and what shift label
/// applies right now.
///
/// Consults the occupancy store (is the pool open?) and the facility clock
/// (is it a valid hour?) before admitting a start. Window validity is
/// evaluated at call time; there is no background scheduling.
pub struct ShiftController<S, R, W> {
    occupancy: Arc<Mutex<S>>,
    registry: Arc<Mutex<R>>,
    directory: Arc<Mutex<W>>,
    clock: Arc<dyn FacilityClock>,
    audit: Option<Arc<Mutex<Box<dyn AuditSink>>>>,
}

impl<S, R, W> ShiftController<S, R, W>
where
    S: OccupancyStore,
    R: ShiftRegistry,
    W: WorkerDirectory,
{
    /// Create a controller over shared stores and a clock.
    pub fn new(
        occupancy: Arc<Mutex<S>>,
        registry: Arc<Mutex<R>>,
        directory: Arc<Mutex<W>>,
        clock: Arc<dyn FacilityClock>,
    ) -> Self {
        Self {
            occupancy,
            registry,
            directory,
            clock,
            audit: None,
        }
    }

    /// Attach an audit sink.
    pub fn with_audit(mut self, audit: Arc<Mutex<Box<dyn AuditSink>>>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Start a shift for `worker_id`, defaulting the label to the one for the
    /// current local time.
    ///
    /// Gate order is fixed: closed pool, then hours, then existing shift
    /// (idempotent success), then worker existence, then worker lifecycle.
    /// Reordering would change which rejection a caller sees when several
    /// conditions fail at once.
    pub fn start_shift(
        &self,
        worker_id: &WorkerId,
        requested: Option<ShiftLabel>,
    ) -> Result<ShiftStart, ShiftError> {
        let now = self.clock.now_utc();

        let is_open = {
            let mut store = self.occupancy.lock();
            store.load_or_init(now)?.is_open
        };
        if !is_open {
            return Err(ShiftError::PoolClosed);
        }

        let local = self.clock.local_now().time();
        if !is_within_shift_window(local) {
            return Err(ShiftError::OutsideShiftHours { local_time: local });
        }

        if let Some(existing) = self.registry.lock().open_shift(worker_id)? {
            // Starting twice is tolerated; report the shift already underway.
            tracing::debug!(worker = %worker_id, "shift start ignored: already on duty");
            return Ok(ShiftStart {
                label: existing.label,
                started_at: existing.started_at,
                resumed: true,
            });
        }

        let worker = self
            .directory
            .lock()
            .find(worker_id)?
            .ok_or_else(|| ShiftError::WorkerNotFound(worker_id.clone()))?;
        if !worker.is_active() {
            return Err(ShiftError::WorkerInactive(worker_id.clone()));
        }

        let label = requested.unwrap_or_else(|| current_shift_label(local));
        let record = ShiftRecord {
            id: Uuid::new_v4(),
            worker_id: worker_id.clone(),
            role: worker.role,
            label,
            started_at: now,
            ended_at: None,
        };
        self.registry.lock().insert(record)?;

        self.record_audit(worker_id, "shift-start", Some(label.to_string()));
        tracing::info!(worker = %worker_id, %label, "shift started");

        Ok(ShiftStart {
            label,
            started_at: now,
            resumed: false,
        })
    }

    /// End the worker's open shift.
    ///
    /// A second call fails with `NoOpenShift` rather than touching the
    /// already-closed record.
    pub fn end_shift(&self, worker_id: &WorkerId) -> Result<ShiftRecord, ShiftError> {
        let now = self.clock.now_utc();
        let closed = self.registry.lock().end_shift(worker_id, now)?;
        match closed {
            Some(record) => {
                self.record_audit(worker_id, "shift-end", None);
                tracing::info!(worker = %worker_id, "shift ended");
                Ok(record)
            }
            None => Err(ShiftError::NoOpenShift(worker_id.clone())),
        }
    }

    /// Current shift label plus start-window validity.
    pub fn shift_window(&self) -> ShiftWindow {
        let local = self.clock.local_now().time();
        ShiftWindow {
            label: current_shift_label(local),
            within_window: is_within_shift_window(local),
            local_time: local,
        }
    }

    /// Open shifts grouped by role, for public "who's on duty" displays.
    pub fn active_shift_counts(&self) -> Result<HashMap<String, usize>, StoreError> {
        let open = self.registry.lock().open_shifts()?;
        let mut counts = HashMap::new();
        for record in open {
            *counts.entry(record.role.as_str().to_owned()).or_insert(0) += 1;
        }
        Ok(counts)
    }

    /// On-duty counts plus the named roster, ordered by role then name.
    pub fn on_duty_roster(&self) -> Result<OnDutyRoster, StoreError> {
        let open = self.registry.lock().open_shifts()?;
        let mut counts = HashMap::new();
        let mut workers = Vec::with_capacity(open.len());
        for record in open {
            *counts.entry(record.role.as_str().to_owned()).or_insert(0) += 1;
            let name = self
                .directory
                .lock()
                .find(&record.worker_id)?
                .map(|w| w.name)
                .unwrap_or_default();
            workers.push(OnDutyWorker {
                worker_id: record.worker_id,
                name,
                role: record.role,
                label: record.label,
                started_at: record.started_at,
            });
        }
        workers.sort_by(|a, b| (a.role, &a.name).cmp(&(b.role, &b.name)));
        Ok(OnDutyRoster { counts, workers })
    }

    /// Per-worker morning/afternoon totals over completed shifts whose start
    /// date falls within `[from, to]`, ordered by name.
    pub fn shift_stats(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ShiftStats>, StoreError> {
        let completed = self.registry.lock().completed_between(from, to)?;
        let mut grouped: HashMap<WorkerId, Vec<ShiftRecord>> = HashMap::new();
        for record in completed {
            grouped.entry(record.worker_id.clone()).or_default().push(record);
        }

        let mut stats = Vec::with_capacity(grouped.len());
        for (worker_id, records) in grouped {
            // Name and role come from the directory so a reassignment shows
            // up in the stats; only unknown workers fall back to the role
            // recorded on their shifts.
            let (name, role) = match self.directory.lock().find(&worker_id)? {
                Some(worker) => (worker.name, worker.role),
                None => (String::new(), records[0].role),
            };
            let morning =
                u32::try_from(records.iter().filter(|r| r.label == ShiftLabel::Morning).count())
                    .unwrap_or(u32::MAX);
            let afternoon = u32::try_from(
                records.iter().filter(|r| r.label == ShiftLabel::Afternoon).count(),
            )
            .unwrap_or(u32::MAX);
            stats.push(ShiftStats {
                worker_id,
                name,
                role,
                morning,
                afternoon,
                total: morning + afternoon,
            });
        }
        stats.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(stats)
    }

    /// Completed shift history for one worker within `[from, to]`, most
    /// recent first.
    pub fn worker_shifts(
        &self,
        worker_id: &WorkerId,
        from: NaiveDate,
        to: NaiveDate,
    ) -> Result<Vec<ShiftRecord>, StoreError> {
        let mut shifts: Vec<ShiftRecord> = self
            .registry
            .lock()
            .completed_between(from, to)?
            .into_iter()
            .filter(|r| r.worker_id == *worker_id)
            .collect();
        shifts.sort_by(|a, b| b.started_at.cmp(&a.started_at));
        Ok(shifts)
    }

    fn record_audit(&self, worker_id: &WorkerId, action: &str, detail: Option<String>) {
        if let Some(audit) = &self.audit {
            let mut sink = audit.lock();
            sink.record(build_audit_event(
                "shift",
                worker_id.to_string(),
                action,
                detail,
            ));
        }
    }
}
