//! Occupancy state and the controller that is its sole mutator.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::audit::{build_audit_event, AuditSink};
use crate::core::closing::{CloseHook, CloseOutcome};
use crate::core::error::StoreError;
use crate::util::clock::FacilityClock;

/// Maximum capacity used when the occupancy record is first created.
pub const DEFAULT_CAPACITY: u32 = 120;

/// The single mutable occupancy record for the facility.
///
/// Invariant: `current_count <= max_capacity` after every operation. The
/// record is created once at first access and never deleted; a reset zeroes
/// it instead of removing it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OccupancyState {
    /// People currently inside.
    pub current_count: u32,
    /// Admission ceiling; never below 1.
    pub max_capacity: u32,
    /// Whether the pool is open to the public.
    pub is_open: bool,
    /// Timestamp of the last mutation.
    pub last_updated: DateTime<Utc>,
}

impl OccupancyState {
    /// Initial record: empty, given capacity, open.
    pub fn initial(max_capacity: u32, now: DateTime<Utc>) -> Self {
        Self {
            current_count: 0,
            max_capacity: max_capacity.max(1),
            is_open: true,
            last_updated: now,
        }
    }
}

/// Persistence seam for the single occupancy record.
///
/// Implementations are held behind a mutex by the controller, so each
/// read-modify-write cycle is serialized per record; persistence below that
/// is last write wins.
pub trait OccupancyStore: Send {
    /// Load the record, creating the initial one if absent.
    fn load_or_init(&mut self, now: DateTime<Utc>) -> Result<OccupancyState, StoreError>;
    /// Overwrite the record.
    fn save(&mut self, state: &OccupancyState) -> Result<(), StoreError>;
}

/// Consumer of "visitor admitted" events (the external daily-visitor
/// counter). Invoked once per successful admission.
#[async_trait]
pub trait VisitorCounter: Send + Sync {
    /// Record one admission for today.
    async fn increment_daily_visitors(&self) -> anyhow::Result<()>;
}

/// Result of `set_open`: the committed state plus, on an Open to Closed
/// transition, the outcome of the best-effort closing side effects.
#[derive(Debug, Clone)]
pub struct SetOpenOutcome {
    /// State after the transition committed.
    pub state: OccupancyState,
    /// Closing side-effect outcome; `None` when no Open to Closed transition
    /// happened or no hook is attached.
    pub close: Option<CloseOutcome>,
}

/// Sole mutator of the occupancy record; all counter changes pass through it.
///
/// Out-of-range counts and capacities are corrected by clamping, never
/// rejected: `enter` past capacity and `exit` at zero are silent no-ops.
pub struct OccupancyController<S, V> {
    store: Arc<Mutex<S>>,
    visitors: V,
    clock: Arc<dyn FacilityClock>,
    closing: Option<Arc<dyn CloseHook>>,
    audit: Option<Arc<Mutex<Box<dyn AuditSink>>>>,
}

impl<S, V> OccupancyController<S, V>
where
    S: OccupancyStore,
    V: VisitorCounter,
{
    /// Create a controller over a shared store.
    pub fn new(store: Arc<Mutex<S>>, visitors: V, clock: Arc<dyn FacilityClock>) -> Self {
        Self {
            store,
            visitors,
            clock,
            closing: None,
            audit: None,
        }
    }

    /// Attach the hook run on the Open to Closed transition.
    pub fn with_close_hook(mut self, hook: Arc<dyn CloseHook>) -> Self {
        self.closing = Some(hook);
        self
    }

    /// Attach an audit sink.
    pub fn with_audit(mut self, audit: Arc<Mutex<Box<dyn AuditSink>>>) -> Self {
        self.audit = Some(audit);
        self
    }

    /// Current state, creating the initial record on first access.
    pub fn status(&self) -> Result<OccupancyState, StoreError> {
        let now = self.clock.now_utc();
        self.store.lock().load_or_init(now)
    }

    /// Admit one visitor.
    ///
    /// No-op while closed or at capacity; otherwise increments the count and
    /// notifies the daily-visitor counter. A counter failure is logged and
    /// swallowed since the admission has already committed.
    pub async fn enter(&self) -> Result<OccupancyState, StoreError> {
        let now = self.clock.now_utc();
        let (state, admitted) = {
            let mut store = self.store.lock();
            let mut state = store.load_or_init(now)?;
            if !state.is_open {
                tracing::debug!("entry ignored: pool is closed");
                (state, false)
            } else if state.current_count < state.max_capacity {
                state.current_count += 1;
                state.last_updated = now;
                store.save(&state)?;
                (state, true)
            } else {
                tracing::debug!(capacity = state.max_capacity, "entry ignored: at capacity");
                (state, false)
            }
        };

        if admitted {
            self.record_audit("admit", Some(format!("count={}", state.current_count)));
            if let Err(e) = self.visitors.increment_daily_visitors().await {
                tracing::warn!("daily visitor counter failed: {e:#}");
            }
        }
        Ok(state)
    }

    /// Record one visitor leaving. No-op at zero; never an error.
    pub fn exit(&self) -> Result<OccupancyState, StoreError> {
        let now = self.clock.now_utc();
        let mut store = self.store.lock();
        let mut state = store.load_or_init(now)?;
        if state.current_count > 0 {
            state.current_count -= 1;
            state.last_updated = now;
            store.save(&state)?;
        }
        Ok(state)
    }

    /// Overwrite the count, clamped into `[0, max_capacity]`.
    pub fn set_count(&self, value: i64) -> Result<OccupancyState, StoreError> {
        let now = self.clock.now_utc();
        let mut store = self.store.lock();
        let mut state = store.load_or_init(now)?;
        state.current_count =
            u32::try_from(value.clamp(0, i64::from(state.max_capacity))).unwrap_or(0);
        state.last_updated = now;
        store.save(&state)?;
        Ok(state)
    }

    /// Change the capacity, clamped to a minimum of 1.
    ///
    /// Lowers the count to match when the new capacity is below it, so the
    /// occupancy invariant holds even transiently across this call.
    pub fn set_capacity(&self, value: i64) -> Result<OccupancyState, StoreError> {
        let now = self.clock.now_utc();
        let mut store = self.store.lock();
        let mut state = store.load_or_init(now)?;
        state.max_capacity = u32::try_from(value.clamp(1, i64::from(u32::MAX))).unwrap_or(1);
        state.current_count = state.current_count.min(state.max_capacity);
        state.last_updated = now;
        store.save(&state)?;
        Ok(state)
    }

    /// Open or close the pool.
    ///
    /// Closing zeroes the count. The Open to Closed transition additionally
    /// runs the closing hook after the state has committed; hook failures
    /// surface as warnings in the outcome and never roll the transition back.
    pub async fn set_open(&self, open: bool) -> Result<SetOpenOutcome, StoreError> {
        let now = self.clock.now_utc();
        let (state, was_open) = {
            let mut store = self.store.lock();
            let mut state = store.load_or_init(now)?;
            let was_open = state.is_open;
            state.is_open = open;
            if !open {
                state.current_count = 0;
            }
            state.last_updated = now;
            store.save(&state)?;
            (state, was_open)
        };

        let close = if was_open && !open {
            self.record_audit("close", None);
            tracing::info!("pool closed");
            match &self.closing {
                Some(hook) => Some(hook.on_close(now).await),
                None => None,
            }
        } else {
            if open && !was_open {
                self.record_audit("open", None);
                tracing::info!("pool opened");
            }
            None
        };

        Ok(SetOpenOutcome { state, close })
    }

    /// Administrative hard reset: count zeroed, pool closed, unconditionally.
    ///
    /// Deliberately bypasses the closing hook; this is an override, not a
    /// business close event.
    pub fn reset(&self) -> Result<OccupancyState, StoreError> {
        let now = self.clock.now_utc();
        let mut store = self.store.lock();
        let mut state = store.load_or_init(now)?;
        state.current_count = 0;
        state.is_open = false;
        state.last_updated = now;
        store.save(&state)?;
        drop(store);
        self.record_audit("reset", None);
        tracing::info!("occupancy record reset");
        Ok(state)
    }

    fn record_audit(&self, action: &str, detail: Option<String>) {
        if let Some(audit) = &self.audit {
            let mut sink = audit.lock();
            sink.record(build_audit_event("occupancy", "pool", action, detail));
        }
    }
}
