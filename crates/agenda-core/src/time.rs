//! Wall-clock times of day.
//!
//! [`WallTime`] bounds a bookable window (`00:00` through `24:00`), while
//! [`TimeSlot`] is a generated appointment start time rendered as a
//! zero-padded 24-hour `HH:MM` string. Both are plain minute counts since
//! midnight, so ordering and arithmetic are integer operations with no rounding.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};

/// Minutes in a full day; `24:00` is the latest representable window bound.
pub const MINUTES_PER_DAY: i64 = 24 * 60;

/// A wall-clock time of day, stored as minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct WallTime(u16);

impl WallTime {
    pub const MIDNIGHT: WallTime = WallTime(0);
    pub const END_OF_DAY: WallTime = WallTime(MINUTES_PER_DAY as u16);

    /// Compile-time constructor for known-good constants.
    pub(crate) const fn from_hm_const(hour: u16, minute: u16) -> Self {
        WallTime(hour * 60 + minute)
    }

    /// Build from hour and minute components, rejecting anything outside
    /// `00:00..=24:00`.
    pub fn from_hm(hour: u32, minute: u32) -> Result<Self> {
        if minute > 59 || hour > 24 || (hour == 24 && minute != 0) {
            return Err(AgendaError::Configuration(format!(
                "time out of range: {:02}:{:02}",
                hour, minute
            )));
        }
        Ok(WallTime((hour * 60 + minute) as u16))
    }

    /// Build from a minute offset since midnight.
    pub fn from_minutes(minutes: i64) -> Result<Self> {
        if !(0..=MINUTES_PER_DAY).contains(&minutes) {
            return Err(AgendaError::Configuration(format!(
                "minute offset out of range: {}",
                minutes
            )));
        }
        Ok(WallTime(minutes as u16))
    }

    /// Parse a strict `H:MM` / `HH:MM` string.
    pub fn parse(value: &str) -> Result<Self> {
        let (hour, minute) = split_clock(value, false)?;
        Self::from_hm(hour, minute)
    }

    /// Parse `HH:MM` or `HH:MM:SS`, discarding seconds. Database `time`
    /// columns come back in the long form.
    pub fn parse_lenient(value: &str) -> Result<Self> {
        let (hour, minute) = split_clock(value, true)?;
        Self::from_hm(hour, minute)
    }

    pub fn minutes(self) -> i64 {
        i64::from(self.0)
    }

    pub fn hour(self) -> u32 {
        u32::from(self.0) / 60
    }

    pub fn minute(self) -> u32 {
        u32::from(self.0) % 60
    }
}

impl fmt::Display for WallTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}:{:02}", self.hour(), self.minute())
    }
}

impl FromStr for WallTime {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for WallTime {
    type Error = AgendaError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<WallTime> for String {
    fn from(value: WallTime) -> Self {
        value.to_string()
    }
}

/// A bookable appointment start time, always before `24:00`.
///
/// Two slots with the same clock value are interchangeable; the type carries
/// no identity beyond its `HH:MM` rendering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TimeSlot(WallTime);

impl TimeSlot {
    /// Build a slot at the given minute offset. Offsets at or past `24:00`
    /// cannot start an appointment and are rejected.
    pub fn from_minutes(minutes: i64) -> Result<Self> {
        if !(0..MINUTES_PER_DAY).contains(&minutes) {
            return Err(AgendaError::Configuration(format!(
                "slot start out of range: {}",
                minutes
            )));
        }
        Ok(TimeSlot(WallTime(minutes as u16)))
    }

    pub fn parse(value: &str) -> Result<Self> {
        Self::from_minutes(WallTime::parse(value)?.minutes())
    }

    pub fn minutes(self) -> i64 {
        self.0.minutes()
    }

    pub fn time(self) -> WallTime {
        self.0
    }
}

impl fmt::Display for TimeSlot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

impl FromStr for TimeSlot {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl TryFrom<String> for TimeSlot {
    type Error = AgendaError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<TimeSlot> for String {
    fn from(value: TimeSlot) -> Self {
        value.to_string()
    }
}

impl PartialEq<str> for TimeSlot {
    fn eq(&self, other: &str) -> bool {
        self.to_string() == other
    }
}

impl PartialEq<&str> for TimeSlot {
    fn eq(&self, other: &&str) -> bool {
        self.to_string() == *other
    }
}

/// Split a clock string into hour and minute, requiring ASCII digits only.
///
/// Hours take one or two digits; minutes (and seconds, when allowed) exactly two.
fn split_clock(value: &str, allow_seconds: bool) -> Result<(u32, u32)> {
    let invalid = || AgendaError::Configuration(format!("invalid time string: {:?}", value));

    let parts: Vec<&str> = value.split(':').collect();
    let (hour, minute) = match parts.as_slice() {
        [h, m] => (*h, *m),
        [h, m, s] if allow_seconds => {
            if !is_digits(s, 2, 2) || s.parse::<u32>().map_err(|_| invalid())? > 59 {
                return Err(invalid());
            }
            (*h, *m)
        }
        _ => return Err(invalid()),
    };

    if !is_digits(hour, 1, 2) || !is_digits(minute, 2, 2) {
        return Err(invalid());
    }

    let hour = hour.parse::<u32>().map_err(|_| invalid())?;
    let minute = minute.parse::<u32>().map_err(|_| invalid())?;
    Ok((hour, minute))
}

fn is_digits(s: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&s.len()) && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn midnight_parses_both_ways() {
        assert_eq!(WallTime::parse("00:00").unwrap(), WallTime::MIDNIGHT);
        assert_eq!(WallTime::parse("0:00").unwrap(), WallTime::MIDNIGHT);
        assert_eq!(WallTime::MIDNIGHT.to_string(), "00:00");
    }

    #[test]
    fn parses_single_digit_hour() {
        assert_eq!(WallTime::parse("9:05").unwrap().minutes(), 545);
    }

    #[test]
    fn end_of_day_is_the_only_hour_24() {
        assert_eq!(WallTime::parse("24:00").unwrap(), WallTime::END_OF_DAY);
        assert!(WallTime::parse("24:01").is_err());
        assert!(TimeSlot::parse("24:00").is_err());
    }

    #[test]
    fn lenient_parse_drops_seconds() {
        assert_eq!(WallTime::parse_lenient("14:00:00").unwrap().to_string(), "14:00");
        assert!(WallTime::parse("14:00:00").is_err());
    }

    #[test]
    fn rejects_signs_and_whitespace() {
        for bad in ["+9:00", "-1:00", " 9:00", "9:0", "ab:cd", "", "12"] {
            assert!(WallTime::parse(bad).is_err(), "{:?} should be rejected", bad);
        }
    }
}
