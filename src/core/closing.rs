//! Side effects of the pool-close transition.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use serde::{Deserialize, Serialize};

use crate::core::audit::{build_audit_event, AuditSink};
use crate::core::shift::ShiftRegistry;

/// External generator of the end-of-day report.
#[async_trait]
pub trait ReportGenerator: Send + Sync {
    /// Produce the daily report for a close at `closed_at`.
    async fn generate_daily_report(&self, closed_at: DateTime<Utc>) -> anyhow::Result<()>;
}

/// Hook run on the Open to Closed transition.
///
/// Infallible by contract: the close has already committed when the hook
/// runs, so failures are reported as warnings in the outcome, never as
/// errors that could fail the caller.
#[async_trait]
pub trait CloseHook: Send + Sync {
    /// Run the closing side effects.
    async fn on_close(&self, closed_at: DateTime<Utc>) -> CloseOutcome;
}

/// Which closing step produced a warning.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseStep {
    /// Ending every open shift.
    EndShifts,
    /// Requesting the daily report.
    DailyReport,
}

/// A captured, non-fatal failure from one closing step.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseWarning {
    /// Step that failed.
    pub step: CloseStep,
    /// Failure description.
    pub message: String,
}

/// Result of running the closing sequence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CloseOutcome {
    /// Timestamp the close was committed at.
    pub closed_at: DateTime<Utc>,
    /// How many open shifts were ended.
    pub shifts_ended: usize,
    /// Non-fatal failures from individual steps.
    pub warnings: Vec<CloseWarning>,
}

/// Sequences the two side effects of a pool-close event.
///
/// Ending shifts (staff safety) and report generation are independent;
/// neither may block the other, and neither may undo the close that
/// triggered them.
pub struct ClosingOrchestrator<R> {
    registry: Arc<Mutex<R>>,
    reports: Arc<dyn ReportGenerator>,
    audit: Option<Arc<Mutex<Box<dyn AuditSink>>>>,
}

impl<R: ShiftRegistry> ClosingOrchestrator<R> {
    /// Create an orchestrator over the shared shift registry and the report
    /// collaborator.
    pub fn new(registry: Arc<Mutex<R>>, reports: Arc<dyn ReportGenerator>) -> Self {
        Self {
            registry,
            reports,
            audit: None,
        }
    }

    /// Attach an audit sink for recording swallowed failures.
    pub fn with_audit(mut self, audit: Arc<Mutex<Box<dyn AuditSink>>>) -> Self {
        self.audit = Some(audit);
        self
    }

    fn record_warning(&self, warning: &CloseWarning) {
        if let Some(audit) = &self.audit {
            let mut sink = audit.lock();
            sink.record(build_audit_event(
                "closing",
                "pool",
                "close-warning",
                Some(format!("{:?}: {}", warning.step, warning.message)),
            ));
        }
    }
}

#[async_trait]
impl<R: ShiftRegistry + 'static> CloseHook for ClosingOrchestrator<R> {
    async fn on_close(&self, closed_at: DateTime<Utc>) -> CloseOutcome {
        let mut warnings = Vec::new();

        let shifts_ended = match self.registry.lock().end_all(closed_at) {
            Ok(count) => {
                tracing::info!(count, "ended open shifts at close");
                count
            }
            Err(e) => {
                tracing::warn!("failed to end open shifts: {e}");
                warnings.push(CloseWarning {
                    step: CloseStep::EndShifts,
                    message: e.to_string(),
                });
                0
            }
        };

        if let Err(e) = self.reports.generate_daily_report(closed_at).await {
            tracing::warn!("daily report generation failed: {e:#}");
            warnings.push(CloseWarning {
                step: CloseStep::DailyReport,
                message: format!("{e:#}"),
            });
        }

        for warning in &warnings {
            self.record_warning(warning);
        }

        CloseOutcome {
            closed_at,
            shifts_ended,
            warnings,
        }
    }
}
