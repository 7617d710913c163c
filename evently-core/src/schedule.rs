//! The time fields of an event that status classification depends on.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::error::InvalidSchedule;
use crate::instant::parse_instant;

/// Start instant and optional end instant of an event.
///
/// A schedule is a read-only projection rebuilt from the stored event every
/// time it is needed. It can only be built with a start, and never with an
/// end that precedes the start.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventSchedule {
    start: DateTime<Utc>,
    end: Option<DateTime<Utc>>,
}

impl EventSchedule {
    pub fn new(start: DateTime<Utc>, end: Option<DateTime<Utc>>) -> Result<Self, InvalidSchedule> {
        if let Some(end) = end {
            if end < start {
                return Err(InvalidSchedule::EndBeforeStart { start, end });
            }
        }

        Ok(EventSchedule { start, end })
    }

    /// Schedule for an event listed at a single moment, with no explicit end.
    pub fn single(start: DateTime<Utc>) -> Self {
        EventSchedule { start, end: None }
    }

    /// Parse start/end timestamp strings, naive values being local to `tz`.
    pub fn parse(start: &str, end: Option<&str>, tz: Tz) -> Result<Self, InvalidSchedule> {
        let start = parse_instant("start", start, tz)?;
        let end = end.map(|e| parse_instant("end", e, tz)).transpose()?;
        EventSchedule::new(start, end)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> Option<DateTime<Utc>> {
        self.end
    }

    pub fn is_single_instant(&self) -> bool {
        self.end.is_none()
    }
}
