//! WASM bindings for agenda-core.
//!
//! Exposes slot generation, the working-day gate, the start-date clamp and
//! the calendar helpers to the web calendar UI via `wasm-bindgen`. Complex
//! values cross the boundary as JSON strings; dates are `YYYY-MM-DD`.
//!
//! Every function takes the scheduling config as a JSON string in the same
//! shape as the app's `SCHEDULING_CONFIG` object. An empty string selects the
//! built-in production defaults.
//!
//! ## Build process
//!
//! ```sh
//! cargo build -p agenda-wasm --target wasm32-unknown-unknown --release
//! wasm-bindgen --target web --out-dir web/wasm/ \
//!   target/wasm32-unknown-unknown/release/agenda_wasm.wasm
//! ```

use std::fmt::Display;

use agenda_core::{SchedulingConfig, WallTime};
use chrono::{DateTime, NaiveDate, Utc};
use serde::Serialize;
use wasm_bindgen::prelude::*;

// ---------------------------------------------------------------------------
// Helpers: parse boundary inputs into agenda-core types
// ---------------------------------------------------------------------------

fn parse_config(json: &str) -> agenda_core::Result<SchedulingConfig> {
    if json.trim().is_empty() {
        return Ok(SchedulingConfig::default());
    }
    SchedulingConfig::from_json(json)
}

fn parse_date(s: &str) -> agenda_core::Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| agenda_core::AgendaError::InvalidDate(format!("{:?}: {}", s, e)))
}

fn parse_booked(json: &str) -> agenda_core::Result<Vec<String>> {
    if json.trim().is_empty() {
        return Ok(Vec::new());
    }
    Ok(serde_json::from_str(json)?)
}

fn format_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| js_err(format!("Serialization error: {}", e)))
}

fn js_err(e: impl Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

// ---------------------------------------------------------------------------
// WASM exports
// ---------------------------------------------------------------------------

/// Generate appointment start times for an explicit window and cadence.
///
/// Returns a JSON array of `HH:MM` strings. Throws if either bound is not a
/// valid `HH:MM` time; degenerate windows return `[]`.
#[wasm_bindgen(js_name = "generateSlots")]
pub fn generate_slots(
    start_time: &str,
    end_time: &str,
    appointment_minutes: i32,
    buffer_minutes: i32,
) -> Result<String, JsValue> {
    let slots = agenda_core::generate_slots_str(
        start_time,
        end_time,
        i64::from(appointment_minutes),
        i64::from(buffer_minutes),
    )
    .map_err(js_err)?;
    to_json(&slots)
}

/// Generate appointment start times from a config's window and cadence.
#[wasm_bindgen(js_name = "slotsForConfig")]
pub fn slots_for_config(config_json: &str) -> Result<String, JsValue> {
    let config = parse_config(config_json).map_err(js_err)?;
    to_json(&agenda_core::slots_for(&config))
}

/// Whether `date` (`YYYY-MM-DD`) is a bookable weekday under the config.
#[wasm_bindgen(js_name = "isWorkingDay")]
pub fn is_working_day(config_json: &str, date: &str) -> Result<bool, JsValue> {
    let config = parse_config(config_json).map_err(js_err)?;
    let date = parse_date(date).map_err(js_err)?;
    Ok(agenda_core::is_working_day(&config, date))
}

/// Clamp `date` to the configured start date. Returns `YYYY-MM-DD`.
#[wasm_bindgen(js_name = "clampToStartDate")]
pub fn clamp_to_start_date(config_json: &str, date: &str) -> Result<String, JsValue> {
    let config = parse_config(config_json).map_err(js_err)?;
    let date = parse_date(date).map_err(js_err)?;
    Ok(format_date(agenda_core::clamp_to_start_date(&config, date)))
}

/// `max(today, startDate)` as `YYYY-MM-DD`.
///
/// `now` is an optional RFC 3339 instant; the system clock is used when absent.
#[wasm_bindgen(js_name = "currentAnchor")]
pub fn current_anchor(config_json: &str, now: Option<String>) -> Result<String, JsValue> {
    let config = parse_config(config_json).map_err(js_err)?;
    let now = match now.as_deref() {
        Some(s) => DateTime::parse_from_rfc3339(s)
            .map_err(|e| js_err(format!("Invalid datetime '{}': {}", s, e)))?
            .with_timezone(&Utc),
        None => Utc::now(),
    };
    Ok(format_date(agenda_core::current_anchor(&config, now)))
}

/// The 42-cell, Sunday-first month grid as a JSON array of cells with
/// `date`, `weekday`, `in_current_month`, `is_today` and `bookable`.
#[wasm_bindgen(js_name = "monthGrid")]
pub fn month_grid(config_json: &str, year: i32, month: u32, today: &str) -> Result<String, JsValue> {
    let config = parse_config(config_json).map_err(js_err)?;
    let today = parse_date(today).map_err(js_err)?;
    let cells = agenda_core::month_grid(&config, year, month, today).map_err(js_err)?;
    to_json(&cells)
}

/// First working day on or after `from`, clamped to the start date.
/// Returns `undefined` when none falls within the next two weeks.
#[wasm_bindgen(js_name = "nextWorkingDay")]
pub fn next_working_day(config_json: &str, from: &str) -> Result<Option<String>, JsValue> {
    let config = parse_config(config_json).map_err(js_err)?;
    let from = parse_date(from).map_err(js_err)?;
    Ok(agenda_core::next_working_day(&config, from).map(format_date))
}

/// Slots of `date` with booked flags.
///
/// `booked_json` is a JSON array of already-booked times (`HH:MM` or
/// `HH:MM:SS`) fetched from the database; an empty string means none.
#[wasm_bindgen(js_name = "dayAvailability")]
pub fn day_availability(config_json: &str, date: &str, booked_json: &str) -> Result<String, JsValue> {
    let config = parse_config(config_json).map_err(js_err)?;
    let date = parse_date(date).map_err(js_err)?;
    let booked = parse_booked(booked_json).map_err(js_err)?;
    to_json(&agenda_core::day_availability(&config, date, &booked))
}

/// Normalize an `HH:MM` time string (e.g. `"9:05"` → `"09:05"`).
#[wasm_bindgen(js_name = "normalizeTime")]
pub fn normalize_time(time: &str) -> Result<String, JsValue> {
    WallTime::parse(time).map(|t| t.to_string()).map_err(js_err)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_string_is_the_default() {
        assert_eq!(parse_config("").unwrap(), SchedulingConfig::default());
        assert_eq!(parse_config("  ").unwrap(), SchedulingConfig::default());
    }

    #[test]
    fn config_json_is_applied() {
        let config = parse_config(r#"{"bufferMinutes":0}"#).unwrap();
        assert_eq!(config.buffer_minutes, 0);
    }

    #[test]
    fn dates_round_trip_through_iso_format() {
        let date = parse_date("2025-11-12").unwrap();
        assert_eq!(format_date(date), "2025-11-12");
        assert!(parse_date("12/11/2025").is_err());
    }

    #[test]
    fn booked_list_parses_json_array() {
        assert_eq!(parse_booked(r#"["14:00","15:15:00"]"#).unwrap(), ["14:00", "15:15:00"]);
        assert!(parse_booked("").unwrap().is_empty());
        assert!(parse_booked("14:00").is_err());
    }
}
