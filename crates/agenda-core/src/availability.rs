//! Diff generated slots against already-booked appointment times.
//!
//! Booked times come from the persistence layer, which may return either
//! `HH:MM` or `HH:MM:SS`. Both forms are normalized before comparison;
//! anything unparseable is skipped rather than failing the whole day.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar::{is_working_day, weekday_name};
use crate::config::SchedulingConfig;
use crate::slots::slots_for;
use crate::time::{TimeSlot, WallTime};
use crate::weekday::WeekdayName;

/// A generated slot and whether it is already taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlotStatus {
    pub time: TimeSlot,
    pub booked: bool,
}

/// Bookable slots of one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAvailability {
    pub date: NaiveDate,
    pub weekday: WeekdayName,
    pub before_start: bool,
    pub working_day: bool,
    /// Empty unless the date is on/after the start date and a working day.
    pub slots: Vec<SlotStatus>,
}

impl DayAvailability {
    pub fn open(&self) -> impl Iterator<Item = TimeSlot> + '_ {
        self.slots.iter().filter(|s| !s.booked).map(|s| s.time)
    }

    pub fn open_count(&self) -> usize {
        self.open().count()
    }
}

fn booked_set<S: AsRef<str>>(booked: &[S]) -> BTreeSet<WallTime> {
    booked
        .iter()
        .filter_map(|raw| {
            let raw = raw.as_ref();
            match WallTime::parse_lenient(raw) {
                Ok(time) => Some(time),
                Err(err) => {
                    tracing::warn!(booked = %raw, error = %err, "Skipping unparseable booked time");
                    None
                }
            }
        })
        .collect()
}

/// Tag each slot with whether its start time appears in `booked`.
pub fn mark_booked<S: AsRef<str>>(slots: &[TimeSlot], booked: &[S]) -> Vec<SlotStatus> {
    let taken = booked_set(booked);
    slots
        .iter()
        .map(|slot| SlotStatus {
            time: *slot,
            booked: taken.contains(&slot.time()),
        })
        .collect()
}

/// Slots whose start time is not in `booked`, in their original order.
pub fn open_slots<S: AsRef<str>>(slots: &[TimeSlot], booked: &[S]) -> Vec<TimeSlot> {
    mark_booked(slots, booked)
        .into_iter()
        .filter(|s| !s.booked)
        .map(|s| s.time)
        .collect()
}

/// Combine the start-date clamp, working-day gate and slot generator for a
/// single date.
pub fn day_availability<S: AsRef<str>>(
    config: &SchedulingConfig,
    date: NaiveDate,
    booked: &[S],
) -> DayAvailability {
    let before_start = date < config.start_date;
    let working_day = is_working_day(config, date);

    let slots = if before_start || !working_day {
        Vec::new()
    } else {
        mark_booked(&slots_for(config), booked)
    };

    DayAvailability {
        date,
        weekday: weekday_name(date),
        before_start,
        working_day,
        slots,
    }
}
