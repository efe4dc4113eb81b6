//! Appointment slot generation.
//!
//! Walks a cursor from the window start in steps of
//! `appointment_minutes + buffer_minutes`, emitting every start time whose
//! appointment still ends at or before the window end. All arithmetic is in
//! integer minutes since midnight.

use crate::config::SchedulingConfig;
use crate::error::Result;
use crate::time::{TimeSlot, WallTime};

/// Generate appointment start times between `start` and `end`.
///
/// Returns an ascending, duplicate-free list where every slot `s` satisfies
/// `s >= start` and `s + appointment_minutes <= end`.
///
/// Returns an empty list when `appointment_minutes <= 0`, when
/// `buffer_minutes < 0`, or when `start >= end`.
pub fn generate_slots(
    start: WallTime,
    end: WallTime,
    appointment_minutes: i64,
    buffer_minutes: i64,
) -> Vec<TimeSlot> {
    if appointment_minutes <= 0 || buffer_minutes < 0 || start >= end {
        tracing::debug!(
            start = %start,
            end = %end,
            appointment_minutes,
            buffer_minutes,
            "Empty bookable window, no slots generated"
        );
        return Vec::new();
    }

    let step = appointment_minutes.saturating_add(buffer_minutes);
    let end_minutes = end.minutes();

    let mut slots = Vec::new();
    let mut cursor = start.minutes();
    while cursor.saturating_add(appointment_minutes) <= end_minutes {
        // cursor < end <= 24:00, so this never fails.
        if let Ok(slot) = TimeSlot::from_minutes(cursor) {
            slots.push(slot);
        }
        cursor = cursor.saturating_add(step);
    }

    tracing::debug!(count = slots.len(), start = %start, end = %end, "Generated slots");
    slots
}

/// Parse `HH:MM` bounds and generate slots.
///
/// # Errors
/// Returns `AgendaError::Configuration` if either bound is not a valid
/// `HH:MM` time. Degenerate windows are not errors; they yield `Ok(vec![])`.
pub fn generate_slots_str(
    start: &str,
    end: &str,
    appointment_minutes: i64,
    buffer_minutes: i64,
) -> Result<Vec<TimeSlot>> {
    let start = WallTime::parse(start)?;
    let end = WallTime::parse(end)?;
    Ok(generate_slots(start, end, appointment_minutes, buffer_minutes))
}

/// Slots for a configuration's default window and cadence.
pub fn slots_for(config: &SchedulingConfig) -> Vec<TimeSlot> {
    SlotRequest::from_config(config).generate()
}

/// Slot generation inputs, seeded from a [`SchedulingConfig`] with each of
/// the four values independently overridable.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlotRequest {
    pub start: WallTime,
    pub end: WallTime,
    pub appointment_minutes: i64,
    pub buffer_minutes: i64,
}

impl SlotRequest {
    pub fn from_config(config: &SchedulingConfig) -> Self {
        Self {
            start: config.start_time,
            end: config.end_time,
            appointment_minutes: config.appointment_duration_minutes,
            buffer_minutes: config.buffer_minutes,
        }
    }

    pub fn start(mut self, start: WallTime) -> Self {
        self.start = start;
        self
    }

    pub fn end(mut self, end: WallTime) -> Self {
        self.end = end;
        self
    }

    pub fn appointment_minutes(mut self, minutes: i64) -> Self {
        self.appointment_minutes = minutes;
        self
    }

    pub fn buffer_minutes(mut self, minutes: i64) -> Self {
        self.buffer_minutes = minutes;
        self
    }

    pub fn generate(&self) -> Vec<TimeSlot> {
        generate_slots(
            self.start,
            self.end,
            self.appointment_minutes,
            self.buffer_minutes,
        )
    }
}
