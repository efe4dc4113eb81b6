//! Tests for the start-date clamp and the current scheduling anchor.

use agenda_core::clamp::{clamp_to_start_date, current_anchor, current_anchor_now, local_today};
use agenda_core::SchedulingConfig;
use chrono::{NaiveDate, TimeZone, Utc};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

#[test]
fn candidate_before_start_is_raised_to_start() {
    let config = SchedulingConfig::default();
    assert_eq!(clamp_to_start_date(&config, date(2025, 1, 1)), date(2025, 11, 10));
}

#[test]
fn candidate_after_start_is_unchanged() {
    let config = SchedulingConfig::default();
    assert_eq!(clamp_to_start_date(&config, date(2025, 12, 1)), date(2025, 12, 1));
}

#[test]
fn candidate_on_start_is_unchanged() {
    let config = SchedulingConfig::default();
    assert_eq!(clamp_to_start_date(&config, date(2025, 11, 10)), date(2025, 11, 10));
}

#[test]
fn clamped_value_is_independent_of_config() {
    let config = SchedulingConfig::default();
    let mut clamped = clamp_to_start_date(&config, date(2024, 6, 1));
    clamped = clamped.succ_opt().unwrap();
    assert_eq!(clamped, date(2025, 11, 11));
    assert_eq!(config.start_date, date(2025, 11, 10));
}

#[test]
fn anchor_before_rollout_is_start_date() {
    let config = SchedulingConfig::default();
    let now = Utc.with_ymd_and_hms(2025, 6, 1, 12, 0, 0).unwrap();
    assert_eq!(current_anchor(&config, now), date(2025, 11, 10));
}

#[test]
fn anchor_after_rollout_is_local_today() {
    let config = SchedulingConfig::default();
    // 02:00 UTC on March 1st is still February 28th at UTC-3.
    let now = Utc.with_ymd_and_hms(2026, 3, 1, 2, 0, 0).unwrap();
    assert_eq!(local_today(&config, now), date(2026, 2, 28));
    assert_eq!(current_anchor(&config, now), date(2026, 2, 28));
}

#[test]
fn anchor_from_system_clock_is_never_before_start() {
    let config = SchedulingConfig::default();
    assert!(current_anchor_now(&config) >= config.start_date);
}
