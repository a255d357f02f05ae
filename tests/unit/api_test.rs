//! Tests for the transport-facing models

use chrono::{NaiveTime, TimeZone, Utc};
use pooltrack_ops::api::{
    OnDutyResponse, PoolStatusResponse, ShiftStartResponse, ShiftWindowResponse,
    StartShiftRequest, WorkerView,
};
use pooltrack_ops::core::shift::{OnDutyRoster, OnDutyWorker, ShiftWindow};
use pooltrack_ops::core::worker::{Worker, WorkerId, WorkerRole, WorkerStatus};
use pooltrack_ops::core::{OccupancyState, ShiftLabel, ShiftStart};

#[test]
fn test_pool_status_response_carries_opening_hours() {
    let now = Utc.with_ymd_and_hms(2026, 7, 10, 9, 0, 0).unwrap();
    let state = OccupancyState::initial(120, now);

    let response = PoolStatusResponse::from_state(&state, "09:00-19:00".into());
    assert_eq!(response.current_count, 0);
    assert_eq!(response.max_capacity, 120);
    assert!(response.is_open);
    assert_eq!(response.today_opening_hours, "09:00-19:00");
}

#[test]
fn test_shift_start_response_from_outcome() {
    let now = Utc.with_ymd_and_hms(2026, 7, 10, 9, 0, 0).unwrap();
    let start = ShiftStart {
        label: ShiftLabel::Morning,
        started_at: now,
        resumed: true,
    };

    let response = ShiftStartResponse::from_start("W0001", &start);
    assert_eq!(response.worker_id, "W0001");
    assert_eq!(response.label, ShiftLabel::Morning);
    assert!(response.resumed);
}

#[test]
fn test_start_shift_request_label_is_optional() {
    let request: StartShiftRequest =
        serde_json::from_str(r#"{"worker_id": "W0001"}"#).expect("label may be omitted");
    assert_eq!(request.worker_id, "W0001");
    assert!(request.label.is_none());

    let request: StartShiftRequest =
        serde_json::from_str(r#"{"worker_id": "W0001", "label": "afternoon"}"#).expect("lowercase label");
    assert_eq!(request.label, Some(ShiftLabel::Afternoon));
}

#[test]
fn test_shift_window_response_mirrors_the_query() {
    let window = ShiftWindow {
        label: ShiftLabel::Afternoon,
        within_window: false,
        local_time: NaiveTime::from_hms_opt(20, 30, 0).unwrap(),
    };

    let response = ShiftWindowResponse::from_window(&window);
    assert_eq!(response.label, ShiftLabel::Afternoon);
    assert!(!response.within_window);
    assert_eq!(response.local_time, window.local_time);
}

#[test]
fn test_on_duty_response_flattens_the_roster() {
    let now = Utc.with_ymd_and_hms(2026, 7, 10, 9, 0, 0).unwrap();
    let roster = OnDutyRoster {
        counts: [("lifeguard".to_owned(), 1)].into_iter().collect(),
        workers: vec![OnDutyWorker {
            worker_id: WorkerId::from("W0001"),
            name: "Ana".into(),
            role: WorkerRole::Lifeguard,
            label: ShiftLabel::Morning,
            started_at: now,
        }],
    };

    let response = OnDutyResponse::from_roster(&roster);
    assert_eq!(response.counts.get("lifeguard"), Some(&1));
    assert_eq!(response.workers.len(), 1);
    assert_eq!(response.workers[0].worker_id, "W0001");
    assert_eq!(response.workers[0].name, "Ana");
    assert_eq!(response.workers[0].label, ShiftLabel::Morning);
}

#[test]
fn test_worker_view_from_directory_record() {
    let now = Utc.with_ymd_and_hms(2026, 7, 10, 9, 0, 0).unwrap();
    let mut worker = Worker::new(WorkerId::from("W0002"), "Rui", WorkerRole::Bar, now);
    worker.retire(now);

    let view = WorkerView::from_worker(&worker);
    assert_eq!(view.worker_id, "W0002");
    assert_eq!(view.role, WorkerRole::Bar);
    assert_eq!(view.status, WorkerStatus::Retired);
}
