//! Tests for the audit sink

use pooltrack_ops::core::{build_audit_event, AuditSink, InMemoryAuditSink};

#[test]
fn test_in_memory_audit_sink() {
    let mut sink = InMemoryAuditSink::new(10);

    let event = build_audit_event("shift", "W0001", "shift-start", Some("morning".to_string()));
    sink.record(event.clone());

    let events = sink.events();
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].scope, "shift");
    assert_eq!(events[0].subject, "W0001");
    assert_eq!(events[0].action, "shift-start");
    assert_eq!(events[0].detail, Some("morning".to_string()));
}

#[test]
fn test_audit_sink_overflow() {
    let mut sink = InMemoryAuditSink::new(2);

    sink.record(build_audit_event("occupancy", "pool", "admit", None));
    sink.record(build_audit_event("occupancy", "pool", "close", None));
    sink.record(build_audit_event("occupancy", "pool", "reset", None));

    let events = sink.events();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].action, "close"); // First one popped
    assert_eq!(events[1].action, "reset");
}

#[test]
fn test_build_audit_event() {
    let event = build_audit_event("closing", "pool", "close-warning", Some("oops".to_string()));

    assert!(!event.event_id.is_empty());
    assert_eq!(event.scope, "closing");
    assert_eq!(event.subject, "pool");
    assert_eq!(event.action, "close-warning");
    assert_eq!(event.detail, Some("oops".to_string()));
    assert!(event.created_at_ms > 0);
}

#[test]
fn test_event_ids_are_unique() {
    let a = build_audit_event("occupancy", "pool", "admit", None);
    let b = build_audit_event("occupancy", "pool", "admit", None);
    assert_ne!(a.event_id, b.event_id);
}
