//! Human-readable schedule text.

use chrono::{DateTime, Utc};

use crate::classifier::Classifier;
use crate::instant::local_date;
use crate::schedule::EventSchedule;
use crate::status::Status;

const LONG_DATE_FORMAT: &str = "%B %-d, %Y";
const TIME_FORMAT: &str = "%-I:%M %p";

const MILLIS_PER_DAY: i64 = 24 * 60 * 60 * 1000;

impl Classifier {
    /// Format the schedule as a date range, e.g. "March 14, 2025 from 2:00 PM to 4:00 PM".
    pub fn format_date_range(&self, schedule: &EventSchedule) -> String {
        let start = schedule.start();

        let Some(end) = schedule.end() else {
            return self.format_date_time(start);
        };

        if local_date(start, self.tz()) == local_date(end, self.tz()) {
            format!(
                "{} from {} to {}",
                self.format_date(start),
                self.format_time(start),
                self.format_time(end)
            )
        } else {
            format!("{} to {}", self.format_date_time(start), self.format_date_time(end))
        }
    }

    /// Countdown phrase for events that have not started yet.
    ///
    /// `status` is the result of [`Classifier::classify`] for the same `now`,
    /// and anything but `Upcoming` yields an empty string.
    pub fn format_time_remaining(&self, schedule: &EventSchedule, now: DateTime<Utc>, status: Status) -> String {
        if status != Status::Upcoming {
            return String::new();
        }

        match days_remaining(schedule.start(), now) {
            0 => "Starting today".to_string(),
            1 => "Starting tomorrow".to_string(),
            days => format!("Starting in {days} days"),
        }
    }

    /// "March 14, 2025 at 2:30 PM"
    pub fn format_date_time(&self, instant: DateTime<Utc>) -> String {
        format!("{} at {}", self.format_date(instant), self.format_time(instant))
    }

    fn format_date(&self, instant: DateTime<Utc>) -> String {
        instant.with_timezone(&self.tz()).format(LONG_DATE_FORMAT).to_string()
    }

    fn format_time(&self, instant: DateTime<Utc>) -> String {
        instant.with_timezone(&self.tz()).format(TIME_FORMAT).to_string()
    }
}

/// Whole days until `start`, rounded up.
fn days_remaining(start: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    let millis = (start - now).num_milliseconds();
    let days = millis / MILLIS_PER_DAY;

    // Integer division truncates toward zero, which is already the ceiling
    // for negative values
    if millis % MILLIS_PER_DAY > 0 { days + 1 } else { days }
}
