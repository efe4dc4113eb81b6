//! Tests for appointment slot generation.

use agenda_core::slots::{generate_slots, generate_slots_str, slots_for, SlotRequest};
use agenda_core::{AgendaError, SchedulingConfig, TimeSlot, WallTime};

// ── Helpers ─────────────────────────────────────────────────────────────────

fn render(slots: &[TimeSlot]) -> Vec<String> {
    slots.iter().map(|s| s.to_string()).collect()
}

fn wall(s: &str) -> WallTime {
    WallTime::parse(s).unwrap()
}

// ── Production cadence ──────────────────────────────────────────────────────

#[test]
fn afternoon_window_with_buffer_fits_five_slots() {
    // 14:00-20:00, 75-minute cadence. A sixth slot would start at 20:15.
    let slots = generate_slots_str("14:00", "20:00", 60, 15).unwrap();
    assert_eq!(
        render(&slots),
        ["14:00", "15:15", "16:30", "17:45", "19:00"]
    );
}

#[test]
fn default_config_produces_production_slots() {
    let config = SchedulingConfig::default();
    let slots = slots_for(&config);
    assert_eq!(
        render(&slots),
        ["14:00", "15:15", "16:30", "17:45", "19:00"]
    );
}

#[test]
fn last_slot_may_end_exactly_at_window_end() {
    let slots = generate_slots_str("14:00", "15:00", 60, 0).unwrap();
    assert_eq!(render(&slots), ["14:00"]);
}

#[test]
fn window_up_to_end_of_day() {
    let slots = generate_slots_str("08:00", "24:00", 60, 0).unwrap();
    assert_eq!(slots.len(), 16);
    assert_eq!(slots.first().unwrap(), &"08:00");
    assert_eq!(slots.last().unwrap(), &"23:00");
}

#[test]
fn whole_day_window() {
    let slots = generate_slots(WallTime::MIDNIGHT, WallTime::END_OF_DAY, 90, 30);
    assert_eq!(slots.len(), 12);
    assert_eq!(slots.first().unwrap(), &"00:00");
    assert_eq!(slots.last().unwrap(), &"22:00");
}

#[test]
fn non_aligned_start_keeps_its_minutes() {
    let slots = generate_slots_str("9:10", "11:00", 45, 5).unwrap();
    assert_eq!(render(&slots), ["09:10", "10:00"]);
}

// ── Degenerate windows ──────────────────────────────────────────────────────

#[test]
fn appointment_longer_than_window_yields_nothing() {
    let slots = generate_slots_str("09:00", "09:30", 60, 0).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn zero_width_window_yields_nothing() {
    let slots = generate_slots_str("10:00", "10:00", 30, 0).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn inverted_window_yields_nothing() {
    let slots = generate_slots_str("18:00", "09:00", 30, 0).unwrap();
    assert!(slots.is_empty());
}

#[test]
fn zero_duration_terminates_with_no_slots() {
    assert!(generate_slots(wall("08:00"), wall("18:00"), 0, 0).is_empty());
    assert!(generate_slots(wall("08:00"), wall("18:00"), 0, 15).is_empty());
}

#[test]
fn negative_duration_terminates_with_no_slots() {
    assert!(generate_slots(wall("08:00"), wall("18:00"), -30, 45).is_empty());
}

#[test]
fn negative_buffer_yields_no_slots() {
    assert!(generate_slots(wall("08:00"), wall("18:00"), 30, -10).is_empty());
}

#[test]
fn huge_buffer_leaves_a_single_slot() {
    let slots = generate_slots_str("08:00", "12:00", 60, 500).unwrap();
    assert_eq!(render(&slots), ["08:00"]);
}

#[test]
fn extreme_durations_do_not_overflow() {
    assert!(generate_slots(wall("00:00"), wall("24:00"), i64::MAX, i64::MAX).is_empty());
    let slots = generate_slots(wall("00:00"), wall("24:00"), 60, i64::MAX);
    assert_eq!(render(&slots), ["00:00"]);
}

// ── Parsing ─────────────────────────────────────────────────────────────────

#[test]
fn non_numeric_start_is_a_configuration_error() {
    let err = generate_slots_str("ab:00", "20:00", 60, 15).unwrap_err();
    assert!(matches!(err, AgendaError::Configuration(_)), "got {:?}", err);
}

#[test]
fn non_numeric_end_minutes_is_a_configuration_error() {
    let err = generate_slots_str("14:00", "20:xx", 60, 15).unwrap_err();
    assert!(matches!(err, AgendaError::Configuration(_)));
}

#[test]
fn out_of_range_minutes_is_a_configuration_error() {
    assert!(generate_slots_str("14:60", "20:00", 60, 15).is_err());
    assert!(generate_slots_str("14:00", "25:00", 60, 15).is_err());
}

// ── Overrides ───────────────────────────────────────────────────────────────

#[test]
fn request_overrides_each_input_independently() {
    let config = SchedulingConfig::default();

    let morning = SlotRequest::from_config(&config)
        .start(wall("08:00"))
        .end(wall("10:00"))
        .generate();
    // Duration and buffer still come from config: 60 + 15.
    assert_eq!(render(&morning), ["08:00"]);

    let short = SlotRequest::from_config(&config)
        .appointment_minutes(30)
        .buffer_minutes(0)
        .generate();
    assert_eq!(short.len(), 12);
    assert_eq!(short.last().unwrap(), &"19:30");
}

#[test]
fn generation_is_idempotent() {
    let first = generate_slots_str("07:30", "19:45", 50, 10).unwrap();
    let second = generate_slots_str("07:30", "19:45", 50, 10).unwrap();
    assert_eq!(first, second);
}
