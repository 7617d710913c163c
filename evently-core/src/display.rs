//! Everything a view needs to show about an event's timing, computed at once.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::classifier::Classifier;
use crate::schedule::EventSchedule;
use crate::status::Status;

/// Status plus display strings for one schedule at one instant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDisplay {
    pub status: Status,
    pub date_range: String,
    pub time_remaining: String,
}

impl Classifier {
    /// Classify and format against a single `now`, so the countdown always
    /// agrees with the status even right at a boundary.
    pub fn describe(&self, schedule: &EventSchedule, now: DateTime<Utc>) -> EventDisplay {
        let status = self.classify(schedule, now);

        EventDisplay {
            status,
            date_range: self.format_date_range(schedule),
            time_remaining: self.format_time_remaining(schedule, now, status),
        }
    }
}
