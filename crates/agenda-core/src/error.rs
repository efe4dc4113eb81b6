//! Error types for agenda-core operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AgendaError {
    /// A scheduling input (time string, window, duration) is malformed or
    /// violates the bookable-window invariants.
    #[error("Configuration error: {0}")]
    Configuration(String),

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Unknown weekday name: {0}")]
    UnknownWeekday(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AgendaError>;
