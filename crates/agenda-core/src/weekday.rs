//! Localized (pt-BR) weekday labels used by the agenda configuration.
//!
//! The mapping covers all seven days, numbered 0 = Sunday through 6 = Saturday,
//! regardless of how many of them are configured as bookable.

use std::fmt;
use std::str::FromStr;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

use crate::error::{AgendaError, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum WeekdayName {
    Sunday,
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
}

impl WeekdayName {
    /// All seven days in index order (Sunday first).
    pub const ALL: [WeekdayName; 7] = [
        WeekdayName::Sunday,
        WeekdayName::Monday,
        WeekdayName::Tuesday,
        WeekdayName::Wednesday,
        WeekdayName::Thursday,
        WeekdayName::Friday,
        WeekdayName::Saturday,
    ];

    /// The configuration label, e.g. `"Terça"`.
    pub fn label(self) -> &'static str {
        match self {
            WeekdayName::Sunday => "Domingo",
            WeekdayName::Monday => "Segunda",
            WeekdayName::Tuesday => "Terça",
            WeekdayName::Wednesday => "Quarta",
            WeekdayName::Thursday => "Quinta",
            WeekdayName::Friday => "Sexta",
            WeekdayName::Saturday => "Sábado",
        }
    }

    /// Three-letter label used for calendar column headers.
    pub fn short_label(self) -> &'static str {
        match self {
            WeekdayName::Sunday => "Dom",
            WeekdayName::Monday => "Seg",
            WeekdayName::Tuesday => "Ter",
            WeekdayName::Wednesday => "Qua",
            WeekdayName::Thursday => "Qui",
            WeekdayName::Friday => "Sex",
            WeekdayName::Saturday => "Sáb",
        }
    }

    /// Index with 0 = Sunday .. 6 = Saturday.
    pub fn index(self) -> u32 {
        self.to_chrono().num_days_from_sunday()
    }

    pub fn from_index(index: u32) -> Option<Self> {
        Self::ALL.get(index as usize).copied()
    }

    /// Exact label lookup. Unknown labels are an error, never a panic.
    pub fn from_label(label: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|day| day.label() == label)
            .ok_or_else(|| AgendaError::UnknownWeekday(label.to_string()))
    }

    pub fn to_chrono(self) -> Weekday {
        match self {
            WeekdayName::Sunday => Weekday::Sun,
            WeekdayName::Monday => Weekday::Mon,
            WeekdayName::Tuesday => Weekday::Tue,
            WeekdayName::Wednesday => Weekday::Wed,
            WeekdayName::Thursday => Weekday::Thu,
            WeekdayName::Friday => Weekday::Fri,
            WeekdayName::Saturday => Weekday::Sat,
        }
    }
}

impl From<Weekday> for WeekdayName {
    fn from(day: Weekday) -> Self {
        match day {
            Weekday::Sun => WeekdayName::Sunday,
            Weekday::Mon => WeekdayName::Monday,
            Weekday::Tue => WeekdayName::Tuesday,
            Weekday::Wed => WeekdayName::Wednesday,
            Weekday::Thu => WeekdayName::Thursday,
            Weekday::Fri => WeekdayName::Friday,
            Weekday::Sat => WeekdayName::Saturday,
        }
    }
}

impl fmt::Display for WeekdayName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for WeekdayName {
    type Err = AgendaError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_label(s)
    }
}

impl TryFrom<String> for WeekdayName {
    type Error = AgendaError;

    fn try_from(value: String) -> Result<Self> {
        Self::from_label(&value)
    }
}

impl From<WeekdayName> for String {
    fn from(value: WeekdayName) -> Self {
        value.label().to_string()
    }
}
