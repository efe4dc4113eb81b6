//! Working-day gate and calendar month helpers.
//!
//! Dates are [`NaiveDate`]s, i.e. already normalized to local midnight, so no
//! time-of-day or timezone drift can move a day across a boundary.

use chrono::{Datelike, Days, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::clamp::clamp_to_start_date;
use crate::config::SchedulingConfig;
use crate::error::{AgendaError, Result};
use crate::weekday::WeekdayName;

/// Cells in a month view: six Sunday-first weeks.
pub const GRID_CELLS: usize = 42;

/// How far [`next_working_day`] looks ahead before giving up.
pub const NEXT_WORKING_DAY_HORIZON: u64 = 14;

pub fn weekday_name(date: NaiveDate) -> WeekdayName {
    WeekdayName::from(date.weekday())
}

/// True iff `date` falls on a configured working day.
///
/// A configuration whose bookable window is invalid (see
/// [`SchedulingConfig::validate`]) has no working days at all.
pub fn is_working_day(config: &SchedulingConfig, date: NaiveDate) -> bool {
    if !config.is_valid() {
        return false;
    }
    config.working_days.contains(&weekday_name(date))
}

/// One cell of a month calendar view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CalendarCell {
    pub date: NaiveDate,
    pub weekday: WeekdayName,
    pub in_current_month: bool,
    pub is_today: bool,
    /// In the displayed month, not before the start date, and a working day.
    pub bookable: bool,
}

/// Build the 42-cell, Sunday-first grid for `year`/`month`.
///
/// Leading cells come from the previous month and trailing cells from the
/// next; those are never bookable.
///
/// # Errors
/// Returns `AgendaError::InvalidDate` if `year`/`month` do not name a month
/// chrono can represent.
pub fn month_grid(
    config: &SchedulingConfig,
    year: i32,
    month: u32,
    today: NaiveDate,
) -> Result<Vec<CalendarCell>> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| AgendaError::InvalidDate(format!("{:04}-{:02}", year, month)))?;

    let leading = u64::from(first.weekday().num_days_from_sunday());
    let grid_start = first
        .checked_sub_days(Days::new(leading))
        .ok_or_else(|| AgendaError::InvalidDate(format!("grid before {}", first)))?;

    (0..GRID_CELLS as u64)
        .map(|offset| {
            let date = grid_start
                .checked_add_days(Days::new(offset))
                .ok_or_else(|| AgendaError::InvalidDate(format!("grid after {}", first)))?;
            let in_current_month = date.year() == year && date.month() == month;
            Ok(CalendarCell {
                date,
                weekday: weekday_name(date),
                in_current_month,
                is_today: date == today,
                bookable: in_current_month
                    && date >= config.start_date
                    && is_working_day(config, date),
            })
        })
        .collect()
}

/// First working day on or after `from`, never earlier than the start date.
///
/// Scans at most [`NEXT_WORKING_DAY_HORIZON`] days past the clamped date and
/// returns `None` when nothing in that range is bookable (e.g. no working
/// days configured).
pub fn next_working_day(config: &SchedulingConfig, from: NaiveDate) -> Option<NaiveDate> {
    let start = clamp_to_start_date(config, from);
    (0..=NEXT_WORKING_DAY_HORIZON)
        .filter_map(|offset| start.checked_add_days(Days::new(offset)))
        .find(|date| is_working_day(config, *date))
}

/// First day of the month before `current`, clamped to the start date.
pub fn previous_month(config: &SchedulingConfig, current: NaiveDate) -> NaiveDate {
    let first = first_of_month(current);
    let previous = first.checked_sub_months(Months::new(1)).unwrap_or(first);
    clamp_to_start_date(config, previous)
}

/// First day of the month after `current`.
pub fn next_month(current: NaiveDate) -> NaiveDate {
    let first = first_of_month(current);
    first.checked_add_months(Months::new(1)).unwrap_or(first)
}

fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}
