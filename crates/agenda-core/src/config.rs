//! Scheduling configuration: the bookable window, cadence and rollout date.
//!
//! A [`SchedulingConfig`] is an immutable value passed explicitly to every
//! computation. It is loaded from the JSON shape the web application uses
//! (`startDateISO`, `workingDays`, `startTime`, `endTime`,
//! `appointmentDurationMinutes`, `bufferMinutes`); missing keys inherit the
//! production defaults. A [`ScheduleDirectory`] adds optional per-professional
//! overrides on top of a shared default.

use std::collections::{BTreeMap, BTreeSet};
use std::path::Path;

use chrono::{DateTime, FixedOffset, NaiveDate, Offset, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};
use crate::time::WallTime;
use crate::weekday::WeekdayName;

/// Brasília time, the offset of the production `startDateISO`.
const DEFAULT_UTC_OFFSET_SECS: i32 = -3 * 3600;

fn default_start_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 10).unwrap_or_default()
}

fn default_utc_offset() -> FixedOffset {
    FixedOffset::east_opt(DEFAULT_UTC_OFFSET_SECS).unwrap_or_else(|| Utc.fix())
}

/// Bookable window, cadence and rollout date for one agenda.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SchedulingConfig {
    /// First calendar date on which anything may be booked.
    pub start_date: NaiveDate,
    /// Offset of the configured start instant; decides what "today" means.
    pub utc_offset: FixedOffset,
    pub working_days: BTreeSet<WeekdayName>,
    pub start_time: WallTime,
    pub end_time: WallTime,
    pub appointment_duration_minutes: i64,
    pub buffer_minutes: i64,
}

impl Default for SchedulingConfig {
    fn default() -> Self {
        Self {
            start_date: default_start_date(),
            utc_offset: default_utc_offset(),
            working_days: [
                WeekdayName::Tuesday,
                WeekdayName::Wednesday,
                WeekdayName::Thursday,
            ]
            .into_iter()
            .collect(),
            start_time: WallTime::from_hm_const(14, 0),
            end_time: WallTime::from_hm_const(20, 0),
            appointment_duration_minutes: 60,
            buffer_minutes: 15,
        }
    }
}

impl SchedulingConfig {
    /// Check the bookable-window invariants: `start_time < end_time`,
    /// a positive appointment duration and a non-negative buffer.
    pub fn validate(&self) -> Result<()> {
        if self.start_time >= self.end_time {
            return Err(AgendaError::Configuration(format!(
                "start time {} is not before end time {}",
                self.start_time, self.end_time
            )));
        }
        if self.appointment_duration_minutes <= 0 {
            return Err(AgendaError::Configuration(format!(
                "appointment duration must be positive, got {}",
                self.appointment_duration_minutes
            )));
        }
        if self.buffer_minutes < 0 {
            return Err(AgendaError::Configuration(format!(
                "buffer must be non-negative, got {}",
                self.buffer_minutes
            )));
        }
        Ok(())
    }

    pub fn is_valid(&self) -> bool {
        self.validate().is_ok()
    }

    /// Parse a JSON config object. Absent keys keep their default values.
    pub fn from_json(json: &str) -> Result<Self> {
        let overrides: ScheduleOverrides = serde_json::from_str(json)?;
        overrides.apply(&Self::default())
    }

    /// Serialize back into the JSON shape accepted by [`Self::from_json`].
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&ScheduleOverrides::from(self))?)
    }

    /// Start instant rendered as the `startDateISO` string (local midnight).
    pub fn start_date_iso(&self) -> String {
        format!(
            "{}T00:00:00{}",
            self.start_date.format("%Y-%m-%d"),
            self.utc_offset
        )
    }
}

/// Partial configuration as it appears on disk. Every key is optional so a
/// professional entry only needs to list what differs from the default.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleOverrides {
    #[serde(rename = "startDateISO", default, skip_serializing_if = "Option::is_none")]
    pub start_date_iso: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub working_days: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub appointment_duration_minutes: Option<i64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub buffer_minutes: Option<i64>,
}

impl ScheduleOverrides {
    /// Layer these overrides on top of `base`.
    ///
    /// Malformed times and dates are rejected. Unknown weekday labels are
    /// dropped with a warning so that day simply never becomes bookable.
    /// Window invariants are only warned about here; computations degrade to
    /// empty results when they do not hold.
    pub fn apply(&self, base: &SchedulingConfig) -> Result<SchedulingConfig> {
        let mut config = base.clone();

        if let Some(iso) = &self.start_date_iso {
            let (date, offset) = parse_start_date(iso, base.utc_offset)?;
            config.start_date = date;
            config.utc_offset = offset;
        }
        if let Some(labels) = &self.working_days {
            config.working_days = parse_working_days(labels);
        }
        if let Some(start) = &self.start_time {
            config.start_time = WallTime::parse(start)?;
        }
        if let Some(end) = &self.end_time {
            config.end_time = WallTime::parse(end)?;
        }
        if let Some(minutes) = self.appointment_duration_minutes {
            config.appointment_duration_minutes = minutes;
        }
        if let Some(minutes) = self.buffer_minutes {
            config.buffer_minutes = minutes;
        }

        if let Err(err) = config.validate() {
            tracing::warn!(error = %err, "Scheduling config has an empty bookable window");
        }
        Ok(config)
    }
}

impl From<&SchedulingConfig> for ScheduleOverrides {
    fn from(config: &SchedulingConfig) -> Self {
        Self {
            start_date_iso: Some(config.start_date_iso()),
            working_days: Some(
                config
                    .working_days
                    .iter()
                    .map(|day| day.label().to_string())
                    .collect(),
            ),
            start_time: Some(config.start_time.to_string()),
            end_time: Some(config.end_time.to_string()),
            appointment_duration_minutes: Some(config.appointment_duration_minutes),
            buffer_minutes: Some(config.buffer_minutes),
        }
    }
}

/// Parse `startDateISO`: an RFC 3339 instant (its local date and offset are
/// kept) or a bare `YYYY-MM-DD`, which keeps the inherited offset.
fn parse_start_date(iso: &str, fallback_offset: FixedOffset) -> Result<(NaiveDate, FixedOffset)> {
    if let Ok(instant) = DateTime::parse_from_rfc3339(iso) {
        return Ok((instant.date_naive(), *instant.offset()));
    }
    NaiveDate::parse_from_str(iso, "%Y-%m-%d")
        .map(|date| (date, fallback_offset))
        .map_err(|e| AgendaError::InvalidDate(format!("startDateISO {:?}: {}", iso, e)))
}

fn parse_working_days(labels: &[String]) -> BTreeSet<WeekdayName> {
    labels
        .iter()
        .filter_map(|label| match WeekdayName::from_label(label) {
            Ok(day) => Some(day),
            Err(_) => {
                tracing::warn!(label = %label, "Ignoring unknown weekday in workingDays");
                None
            }
        })
        .collect()
}

/// On-disk form of a [`ScheduleDirectory`]: default keys at the top level plus
/// an optional `professionals` map.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DirectoryFile {
    #[serde(flatten)]
    default: ScheduleOverrides,
    #[serde(default)]
    professionals: BTreeMap<String, ScheduleOverrides>,
}

/// The shared default agenda plus per-professional schedules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScheduleDirectory {
    pub default: SchedulingConfig,
    pub professionals: BTreeMap<String, SchedulingConfig>,
}

impl ScheduleDirectory {
    pub fn new(default: SchedulingConfig) -> Self {
        Self {
            default,
            professionals: BTreeMap::new(),
        }
    }

    /// Parse a directory file. Professional entries inherit every key they
    /// omit from the file's top-level default.
    pub fn from_json(json: &str) -> Result<Self> {
        let file: DirectoryFile = serde_json::from_str(json)?;
        let default = file.default.apply(&SchedulingConfig::default())?;

        let professionals = file
            .professionals
            .iter()
            .map(|(id, overrides)| Ok((id.clone(), overrides.apply(&default)?)))
            .collect::<Result<BTreeMap<_, _>>>()?;

        Ok(Self {
            default,
            professionals,
        })
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        tracing::debug!(path = %path.display(), "Loaded scheduling config");
        Self::from_json(&json)
    }

    pub fn with_professional(mut self, id: impl Into<String>, config: SchedulingConfig) -> Self {
        self.professionals.insert(id.into(), config);
        self
    }

    /// The schedule for `id`, or the shared default when none is configured.
    pub fn for_professional(&self, id: &str) -> &SchedulingConfig {
        self.professionals.get(id).unwrap_or(&self.default)
    }

    /// Resolve an optional professional id to a schedule.
    pub fn resolve(&self, professional: Option<&str>) -> &SchedulingConfig {
        match professional {
            Some(id) => self.for_professional(id),
            None => &self.default,
        }
    }
}
