//! Tests for the shift label and validity window functions

use chrono::NaiveTime;
use pooltrack_ops::core::{current_shift_label, is_within_shift_window, ShiftLabel};

fn at(hour: u32, minute: u32) -> NaiveTime {
    NaiveTime::from_hms_opt(hour, minute, 0).unwrap()
}

#[test]
fn test_morning_window() {
    assert_eq!(current_shift_label(at(9, 0)), ShiftLabel::Morning);
    assert_eq!(current_shift_label(at(13, 59)), ShiftLabel::Morning);
}

#[test]
fn test_afternoon_starts_at_fourteen() {
    assert_eq!(current_shift_label(at(14, 0)), ShiftLabel::Afternoon);
    assert_eq!(current_shift_label(at(18, 59)), ShiftLabel::Afternoon);
}

#[test]
fn test_label_falls_back_to_afternoon_outside_window() {
    // The label function does not gate on validity: out-of-window hours
    // still map to afternoon.
    assert_eq!(current_shift_label(at(3, 0)), ShiftLabel::Afternoon);
    assert_eq!(current_shift_label(at(20, 30)), ShiftLabel::Afternoon);
    assert_eq!(current_shift_label(at(8, 59)), ShiftLabel::Afternoon);
}

#[test]
fn test_validity_window_boundaries() {
    assert!(!is_within_shift_window(at(8, 59)));
    assert!(is_within_shift_window(at(9, 0)));
    assert!(is_within_shift_window(at(13, 0)));
    assert!(is_within_shift_window(at(18, 59)));
    assert!(!is_within_shift_window(at(19, 0)));
    assert!(!is_within_shift_window(at(3, 0)));
}
