//! Error types for evently.

use chrono::{DateTime, Utc};
use thiserror::Error;

/// Reasons an event's stored time fields cannot form a schedule.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvalidSchedule {
    #[error("event has no start timestamp")]
    MissingStart,

    #[error("{field} is not a valid timestamp: '{value}'")]
    MalformedTimestamp { field: &'static str, value: String },

    #[error("{field} '{value}' does not exist in time zone {tz}")]
    NonexistentLocalTime {
        field: &'static str,
        value: String,
        tz: String,
    },

    #[error("end {end} is before start {start}")]
    EndBeforeStart {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },
}

/// Errors that can occur in evently operations.
#[derive(Error, Debug)]
pub enum EventlyError {
    #[error("Invalid schedule: {0}")]
    InvalidSchedule(#[from] InvalidSchedule),

    #[error("Invalid schedule for event '{id}': {source}")]
    InvalidRecord {
        id: String,
        #[source]
        source: InvalidSchedule,
    },

    #[error("Unknown time zone: {0}")]
    UnknownTimeZone(String),

    #[error("Unknown status '{0}'. Expected one of: upcoming, live, completed")]
    UnknownStatus(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

/// Result type alias for evently operations.
pub type EventlyResult<T> = Result<T, EventlyError>;
