//! Audit sink implementations.
//!
//! Facility events (admissions, open/close transitions, shift starts and
//! ends, swallowed closing failures) are recorded here as a non-fatal
//! diagnostic log. Provides an in-memory sink and Postgres schema
//! definitions for persistence.

use std::collections::VecDeque;

use uuid::Uuid;

use crate::util::clock::now_ms;

/// Audit event structure.
#[derive(Debug, Clone)]
pub struct AuditEvent {
    /// Event identifier.
    pub event_id: String,
    /// Component that produced the event (occupancy, shift, closing).
    pub scope: String,
    /// Entity the event concerns (worker business key, or `pool`).
    pub subject: String,
    /// Action taken (admit, open, close, reset, shift-start, shift-end,
    /// close-warning).
    pub action: String,
    /// Additional context.
    pub detail: Option<String>,
    /// Timestamp milliseconds.
    pub created_at_ms: u128,
}

/// Audit sink abstraction.
pub trait AuditSink: Send {
    /// Record an audit event.
    fn record(&mut self, event: AuditEvent);
}

/// In-memory audit sink for testing and dev.
pub struct InMemoryAuditSink {
    events: VecDeque<AuditEvent>,
    max_events: usize,
}

impl InMemoryAuditSink {
    /// Create a new in-memory sink with a bounded buffer.
    pub fn new(max_events: usize) -> Self {
        Self {
            events: VecDeque::with_capacity(max_events),
            max_events,
        }
    }

    /// Retrieve a snapshot of stored events.
    pub fn events(&self) -> Vec<AuditEvent> {
        self.events.iter().cloned().collect()
    }
}

impl AuditSink for InMemoryAuditSink {
    fn record(&mut self, event: AuditEvent) {
        if self.events.len() >= self.max_events {
            self.events.pop_front();
        }
        self.events.push_back(event);
    }
}

/// Postgres-backed audit sink (schema-only; DB I/O not wired).
pub struct PostgresAuditSink;

impl PostgresAuditSink {
    /// Returns SQL migration statements for the audit log.
    pub fn migrations() -> &'static [&'static str] {
        &[
            r#"
CREATE TABLE IF NOT EXISTS pt_audit_events (
    event_id TEXT PRIMARY KEY,
    scope TEXT NOT NULL,
    subject TEXT NOT NULL,
    action TEXT NOT NULL,
    detail TEXT,
    created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
);
CREATE INDEX IF NOT EXISTS idx_pt_audit_events_subject_created ON pt_audit_events (subject, created_at);
CREATE INDEX IF NOT EXISTS idx_pt_audit_events_scope ON pt_audit_events (scope);
"#,
        ]
    }
}

impl AuditSink for PostgresAuditSink {
    fn record(&mut self, _event: AuditEvent) {
        // Stub: actual DB writes require a runtime + client; left to integration layer.
    }
}

/// Helper to build an audit event from context.
pub fn build_audit_event(
    scope: impl Into<String>,
    subject: impl Into<String>,
    action: impl Into<String>,
    detail: Option<String>,
) -> AuditEvent {
    AuditEvent {
        event_id: Uuid::new_v4().to_string(),
        scope: scope.into(),
        subject: subject.into(),
        action: action.into(),
        detail,
        created_at_ms: now_ms(),
    }
}
