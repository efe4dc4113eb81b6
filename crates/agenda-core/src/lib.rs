//! # agenda-core
//!
//! Deterministic appointment-agenda computations for the MedCannLab
//! scheduling calendar.
//!
//! Everything here is a pure function over an explicitly passed
//! [`SchedulingConfig`]: no I/O beyond config loading, no shared mutable state,
//! safe to call once per rendered calendar cell.
//!
//! ## Quick start
//!
//! ```rust
//! use agenda_core::{generate_slots_str, is_working_day, SchedulingConfig};
//! use chrono::NaiveDate;
//!
//! let slots = generate_slots_str("14:00", "20:00", 60, 15).unwrap();
//! let rendered: Vec<String> = slots.iter().map(|s| s.to_string()).collect();
//! assert_eq!(rendered, ["14:00", "15:15", "16:30", "17:45", "19:00"]);
//!
//! let config = SchedulingConfig::default();
//! let wednesday = NaiveDate::from_ymd_opt(2025, 11, 12).unwrap();
//! assert!(is_working_day(&config, wednesday));
//! ```
//!
//! ## Modules
//!
//! - [`slots`] -- window + cadence → ordered `HH:MM` start times
//! - [`calendar`] -- working-day gate, month grid, next working day, month navigation
//! - [`clamp`] -- start-date clamp and current scheduling anchor
//! - [`availability`] -- diff generated slots against booked times
//! - [`config`] -- `SchedulingConfig`, per-professional `ScheduleDirectory`, JSON loading
//! - [`time`] -- `WallTime` / `TimeSlot` value types
//! - [`weekday`] -- pt-BR weekday labels
//! - [`error`] -- Error types

pub mod availability;
pub mod calendar;
pub mod clamp;
pub mod config;
pub mod error;
pub mod slots;
pub mod time;
pub mod weekday;

pub use availability::{day_availability, mark_booked, open_slots, DayAvailability, SlotStatus};
pub use calendar::{
    is_working_day, month_grid, next_month, next_working_day, previous_month, weekday_name,
    CalendarCell,
};
pub use clamp::{clamp_to_start_date, current_anchor, current_anchor_now, local_today};
pub use config::{ScheduleDirectory, ScheduleOverrides, SchedulingConfig};
pub use error::{AgendaError, Result};
pub use slots::{generate_slots, generate_slots_str, slots_for, SlotRequest};
pub use time::{TimeSlot, WallTime};
pub use weekday::WeekdayName;
