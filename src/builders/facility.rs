//! Assemble a facility from configuration using in-memory backends.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::FacilityConfig;
use crate::core::audit::{AuditSink, InMemoryAuditSink};
use crate::core::closing::{CloseHook, ClosingOrchestrator, ReportGenerator};
use crate::core::error::StoreError;
use crate::core::occupancy::{OccupancyController, VisitorCounter};
use crate::core::shift::ShiftController;
use crate::infra::store::memory::{
    InMemoryOccupancyStore, InMemoryShiftRegistry, InMemoryWorkerDirectory,
};
use crate::util::clock::{FacilityClock, SystemClock};

/// Controllers wired over shared in-memory state.
pub struct Facility<V> {
    /// Occupancy controller over the single facility record.
    pub occupancy: OccupancyController<InMemoryOccupancyStore, V>,
    /// Shift controller sharing the occupancy store and worker directory.
    pub shifts: ShiftController<InMemoryOccupancyStore, InMemoryShiftRegistry, InMemoryWorkerDirectory>,
    /// Worker directory handle for administration.
    pub directory: Arc<Mutex<InMemoryWorkerDirectory>>,
    /// Shared audit sink.
    pub audit: Arc<Mutex<Box<dyn AuditSink>>>,
}

/// Build a facility from configuration with in-memory backends.
///
/// The closing orchestrator is wired as the occupancy controller's close
/// hook over the same shift registry the shift controller uses.
pub fn build_facility<V>(
    cfg: &FacilityConfig,
    visitors: V,
    reports: Arc<dyn ReportGenerator>,
) -> Result<Facility<V>, StoreError>
where
    V: VisitorCounter,
{
    cfg.validate()
        .map_err(|e| StoreError::Backend(format!("config invalid: {e}")))?;

    let clock: Arc<dyn FacilityClock> = Arc::new(SystemClock::for_zone(&cfg.timezone));
    let occupancy_store = Arc::new(Mutex::new(InMemoryOccupancyStore::new(cfg.default_capacity)));
    let registry = Arc::new(Mutex::new(InMemoryShiftRegistry::new()));
    let directory = Arc::new(Mutex::new(InMemoryWorkerDirectory::new()));
    let audit: Arc<Mutex<Box<dyn AuditSink>>> =
        Arc::new(Mutex::new(Box::new(InMemoryAuditSink::new(cfg.audit_buffer))));

    let closing: Arc<dyn CloseHook> = Arc::new(
        ClosingOrchestrator::new(Arc::clone(&registry), reports).with_audit(Arc::clone(&audit)),
    );

    let occupancy =
        OccupancyController::new(Arc::clone(&occupancy_store), visitors, Arc::clone(&clock))
            .with_close_hook(closing)
            .with_audit(Arc::clone(&audit));

    let shifts = ShiftController::new(
        occupancy_store,
        registry,
        Arc::clone(&directory),
        clock,
    )
    .with_audit(Arc::clone(&audit));

    Ok(Facility {
        occupancy,
        shifts,
        directory,
        audit,
    })
}
