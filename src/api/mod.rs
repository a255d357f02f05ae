//! Transport-facing request/response models.
//!
//! The HTTP/SOAP layer lives outside this crate; these are the serde shapes
//! it exchanges with the controllers.

use std::collections::HashMap;

use chrono::{DateTime, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::occupancy::OccupancyState;
use crate::core::shift::{OnDutyRoster, ShiftLabel, ShiftStart, ShiftWindow};
use crate::core::worker::{Worker, WorkerRole, WorkerStatus};

/// Occupancy snapshot exposed to callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PoolStatusResponse {
    /// People currently inside.
    pub current_count: u32,
    /// Admission ceiling.
    pub max_capacity: u32,
    /// Whether the pool is open.
    pub is_open: bool,
    /// Timestamp of the last mutation.
    pub last_updated: DateTime<Utc>,
    /// Display string for today's public opening hours.
    pub today_opening_hours: String,
}

impl PoolStatusResponse {
    /// Build a response from controller state plus the configured opening
    /// hours for today.
    pub fn from_state(state: &OccupancyState, today_opening_hours: String) -> Self {
        Self {
            current_count: state.current_count,
            max_capacity: state.max_capacity,
            is_open: state.is_open,
            last_updated: state.last_updated,
            today_opening_hours,
        }
    }
}

/// Request to start a shift, keyed by worker business id.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StartShiftRequest {
    /// Worker business key.
    pub worker_id: String,
    /// Optional label override; defaults to the label for the current local
    /// time.
    pub label: Option<ShiftLabel>,
}

/// Shift start acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftStartResponse {
    /// Worker business key.
    pub worker_id: String,
    /// Label assigned to the shift.
    pub label: ShiftLabel,
    /// When the shift started.
    pub started_at: DateTime<Utc>,
    /// True when the worker was already on duty.
    pub resumed: bool,
}

impl ShiftStartResponse {
    /// Build a response from a start outcome.
    pub fn from_start(worker_id: impl Into<String>, start: &ShiftStart) -> Self {
        Self {
            worker_id: worker_id.into(),
            label: start.label,
            started_at: start.started_at,
            resumed: start.resumed,
        }
    }
}

/// Current shift label plus start-window validity.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShiftWindowResponse {
    /// Label for the current local time.
    pub label: ShiftLabel,
    /// Whether a shift may start right now.
    pub within_window: bool,
    /// Facility-local time the query was evaluated at.
    pub local_time: NaiveTime,
}

impl ShiftWindowResponse {
    /// Build a response from a window query.
    pub fn from_window(window: &ShiftWindow) -> Self {
        Self {
            label: window.label,
            within_window: window.within_window,
            local_time: window.local_time,
        }
    }
}

/// One on-duty worker on the public display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnDutyWorkerView {
    /// Worker business key.
    pub worker_id: String,
    /// Display name.
    pub name: String,
    /// Role copied at shift start.
    pub role: WorkerRole,
    /// Shift classification.
    pub label: ShiftLabel,
    /// When the shift started.
    pub started_at: DateTime<Utc>,
}

/// Who is on duty right now: counts per role plus the named roster.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OnDutyResponse {
    /// Open shifts per role.
    pub counts: HashMap<String, usize>,
    /// Workers currently on duty, ordered by role then name.
    pub workers: Vec<OnDutyWorkerView>,
}

impl OnDutyResponse {
    /// Build a response from the controller's roster.
    pub fn from_roster(roster: &OnDutyRoster) -> Self {
        Self {
            counts: roster.counts.clone(),
            workers: roster
                .workers
                .iter()
                .map(|w| OnDutyWorkerView {
                    worker_id: w.worker_id.to_string(),
                    name: w.name.clone(),
                    role: w.role,
                    label: w.label,
                    started_at: w.started_at,
                })
                .collect(),
        }
    }
}

/// Worker record exposed to administrative callers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerView {
    /// Worker business key.
    pub worker_id: String,
    /// Display name.
    pub name: String,
    /// Assigned role.
    pub role: WorkerRole,
    /// Lifecycle state.
    pub status: WorkerStatus,
}

impl WorkerView {
    /// Build a view from a directory record.
    pub fn from_worker(worker: &Worker) -> Self {
        Self {
            worker_id: worker.worker_id.to_string(),
            name: worker.name.clone(),
            role: worker.role,
            status: worker.status,
        }
    }
}
