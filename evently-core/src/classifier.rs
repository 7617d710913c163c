//! Event status classification.
//!
//! An event with both a start and an end is live for the closed interval
//! between them. An event with only a start is treated as lasting the whole
//! calendar day it starts on, in the classifier's time zone.

use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use crate::instant::{end_of_day, local_date, start_of_day};
use crate::schedule::EventSchedule;
use crate::status::Status;

/// Classifies and formats schedules for viewers in one time zone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Classifier {
    tz: Tz,
}

impl Default for Classifier {
    fn default() -> Self {
        Classifier { tz: Tz::UTC }
    }
}

impl Classifier {
    pub fn new(tz: Tz) -> Self {
        Classifier { tz }
    }

    pub fn tz(&self) -> Tz {
        self.tz
    }

    /// The closed interval during which the event counts as live.
    pub fn live_window(&self, schedule: &EventSchedule) -> (DateTime<Utc>, DateTime<Utc>) {
        match schedule.end() {
            Some(end) => (schedule.start(), end),
            None => {
                let day = local_date(schedule.start(), self.tz);
                (start_of_day(day, self.tz), end_of_day(day, self.tz))
            }
        }
    }

    pub fn classify(&self, schedule: &EventSchedule, now: DateTime<Utc>) -> Status {
        let (window_start, window_end) = self.live_window(schedule);

        if now < window_start {
            Status::Upcoming
        } else if now > window_end {
            Status::Completed
        } else {
            Status::Live
        }
    }
}
