//! Timestamp parsing and local calendar-day boundaries.
//!
//! Stored event timestamps come in a few shapes: RFC 3339 with an offset,
//! naive date-times meant in the viewer's zone, and bare dates. Everything is
//! normalized to `DateTime<Utc>` here; the zone only matters for naive input
//! and for deciding which calendar day an instant belongs to.

use chrono::{DateTime, Duration, LocalResult, NaiveDate, NaiveDateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;

use crate::error::InvalidSchedule;

/// Naive date-time layouts accepted after RFC 3339 fails.
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Step used to walk out of a DST gap.
const GAP_STEP_MINUTES: i64 = 15;

/// A day never has more than a few hours of gap, so this is generous.
const MAX_GAP_STEPS: usize = 4 * 24;

/// Parse a stored timestamp into an instant.
///
/// `field` names the record field for error reporting. Naive values are
/// interpreted in `tz`; ambiguous local times resolve to the earlier instant.
pub fn parse_instant(field: &'static str, text: &str, tz: Tz) -> Result<DateTime<Utc>, InvalidSchedule> {
    let text = text.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(text) {
        return Ok(dt.with_timezone(&Utc));
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(text, fmt).ok())
    {
        return match tz.from_local_datetime(&naive) {
            LocalResult::Single(dt) => Ok(dt.with_timezone(&Utc)),
            LocalResult::Ambiguous(earliest, _) => {
                log::debug!("{field} '{text}' is ambiguous in {tz}, using earliest");
                Ok(earliest.with_timezone(&Utc))
            }
            LocalResult::None => Err(InvalidSchedule::NonexistentLocalTime {
                field,
                value: text.to_string(),
                tz: tz.name().to_string(),
            }),
        };
    }

    // Bare dates mean the start of that day, wherever the day actually starts
    if let Ok(date) = NaiveDate::parse_from_str(text, DATE_FORMAT) {
        return Ok(start_of_day(date, tz));
    }

    Err(InvalidSchedule::MalformedTimestamp {
        field,
        value: text.to_string(),
    })
}

/// Calendar date of `instant` as seen in `tz`.
pub fn local_date(instant: DateTime<Utc>, tz: Tz) -> NaiveDate {
    instant.with_timezone(&tz).date_naive()
}

/// First existing instant of `date` in `tz` (local midnight, unless midnight
/// falls in a DST gap).
pub fn start_of_day(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    resolve_local(date.and_time(NaiveTime::MIN), tz, Direction::Forward)
}

/// Last instant of `date` in `tz` at millisecond precision (23:59:59.999
/// local, unless that falls in a DST gap).
pub fn end_of_day(date: NaiveDate, tz: Tz) -> DateTime<Utc> {
    let last = date.and_time(NaiveTime::MIN) + Duration::days(1) - Duration::milliseconds(1);
    resolve_local(last, tz, Direction::Backward)
}

#[derive(Debug, Clone, Copy)]
enum Direction {
    Forward,
    Backward,
}

/// Map a local wall-clock time to an instant, walking in `direction` out of
/// any DST gap. Folds pick the earliest instant going forward and the latest
/// going backward, so the resulting day window is as wide as possible.
fn resolve_local(naive: NaiveDateTime, tz: Tz, direction: Direction) -> DateTime<Utc> {
    let step = match direction {
        Direction::Forward => Duration::minutes(GAP_STEP_MINUTES),
        Direction::Backward => Duration::minutes(-GAP_STEP_MINUTES),
    };

    let mut candidate = naive;
    for _ in 0..MAX_GAP_STEPS {
        match (tz.from_local_datetime(&candidate), direction) {
            (LocalResult::Single(dt), _) => return dt.with_timezone(&Utc),
            (LocalResult::Ambiguous(earliest, _), Direction::Forward) => {
                return earliest.with_timezone(&Utc);
            }
            (LocalResult::Ambiguous(_, latest), Direction::Backward) => {
                return latest.with_timezone(&Utc);
            }
            (LocalResult::None, _) => {
                log::trace!("{candidate} does not exist in {tz}, stepping");
                candidate += step;
            }
        }
    }

    log::warn!("could not resolve {naive} in {tz}, treating it as UTC");
    naive.and_utc()
}
