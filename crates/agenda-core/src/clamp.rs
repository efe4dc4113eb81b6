//! Start-date clamping: nothing may be scheduled before the rollout date.

use chrono::{DateTime, NaiveDate, Utc};

use crate::config::SchedulingConfig;

/// `candidate` if it is on or after the configured start date, otherwise the
/// start date. Returns a fresh value; the config is only borrowed.
pub fn clamp_to_start_date(config: &SchedulingConfig, candidate: NaiveDate) -> NaiveDate {
    candidate.max(config.start_date)
}

/// Local calendar date of `now` in the config's UTC offset.
pub fn local_today(config: &SchedulingConfig, now: DateTime<Utc>) -> NaiveDate {
    now.with_timezone(&config.utc_offset).date_naive()
}

/// Default calendar viewport: `max(today, start_date)`.
pub fn current_anchor(config: &SchedulingConfig, now: DateTime<Utc>) -> NaiveDate {
    clamp_to_start_date(config, local_today(config, now))
}

/// [`current_anchor`] against the system clock.
pub fn current_anchor_now(config: &SchedulingConfig) -> NaiveDate {
    current_anchor(config, Utc::now())
}
