//! Event records as stored by the upstream event service.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{EventlyError, EventlyResult, InvalidSchedule};
use crate::instant::parse_instant;
use crate::schedule::EventSchedule;

/// Raw event document. Only the fields that matter for classification and
/// display are kept; everything else in the document is ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventRecord {
    pub id: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,

    /// Older events carry a single `date` instead of `startDate`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl EventRecord {
    /// Derive the schedule, `startDate` taking precedence over `date`.
    pub fn schedule(&self, tz: Tz) -> Result<EventSchedule, InvalidSchedule> {
        let start = match (self.start_date.as_deref(), self.date.as_deref()) {
            (Some(start), _) => parse_instant("startDate", start, tz)?,
            (None, Some(date)) => parse_instant("date", date, tz)?,
            (None, None) => return Err(InvalidSchedule::MissingStart),
        };

        let end = self
            .end_date
            .as_deref()
            .map(|end| parse_instant("endDate", end, tz))
            .transpose()?;

        EventSchedule::new(start, end)
    }

    /// Like [`EventRecord::schedule`], but the error names the event.
    pub fn try_schedule(&self, tz: Tz) -> EventlyResult<EventSchedule> {
        self.schedule(tz).map_err(|source| EventlyError::InvalidRecord {
            id: self.id.clone(),
            source,
        })
    }

    pub fn display_title(&self) -> &str {
        self.title.as_deref().unwrap_or("(Untitled event)")
    }
}

/// Parse a JSON array of event records.
pub fn parse_records(json: &str) -> EventlyResult<Vec<EventRecord>> {
    serde_json::from_str(json).map_err(|e| EventlyError::Serialization(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};

    fn record(start: Option<&str>, end: Option<&str>, date: Option<&str>) -> EventRecord {
        EventRecord {
            id: "evt-1".to_string(),
            title: None,
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
            date: date.map(str::to_string),
        }
    }

    #[test]
    fn start_and_end_form_a_window() {
        let schedule = record(Some("2025-03-14T14:00:00Z"), Some("2025-03-14T16:00:00Z"), None)
            .schedule(Tz::UTC)
            .unwrap();
        assert_eq!(schedule.start(), Utc.with_ymd_and_hms(2025, 3, 14, 14, 0, 0).unwrap());
        assert_eq!(schedule.end(), Some(Utc.with_ymd_and_hms(2025, 3, 14, 16, 0, 0).unwrap()));
    }

    #[test]
    fn legacy_date_gives_single_instant() {
        let schedule = record(None, None, Some("2025-03-14T09:00:00Z")).schedule(Tz::UTC).unwrap();
        assert!(schedule.is_single_instant());
    }

    #[test]
    fn start_date_wins_over_legacy_date() {
        let schedule = record(Some("2025-03-14T14:00:00Z"), None, Some("2024-01-01"))
            .schedule(Tz::UTC)
            .unwrap();
        assert_eq!(schedule.start(), Utc.with_ymd_and_hms(2025, 3, 14, 14, 0, 0).unwrap());
    }

    #[test]
    fn no_start_is_rejected() {
        assert_eq!(
            record(None, Some("2025-03-14T16:00:00Z"), None).schedule(Tz::UTC),
            Err(InvalidSchedule::MissingStart)
        );
    }

    #[test]
    fn reversed_window_is_rejected() {
        let result = record(Some("2025-03-15T00:00:00Z"), Some("2025-03-14T00:00:00Z"), None)
            .schedule(Tz::UTC);
        assert!(matches!(result, Err(InvalidSchedule::EndBeforeStart { .. })));
    }

    #[test]
    fn try_schedule_names_the_event() {
        let err = record(Some("tbd"), None, None).try_schedule(Tz::UTC).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Invalid schedule for event 'evt-1': startDate is not a valid timestamp: 'tbd'"
        );
    }

    #[test]
    fn parses_camel_case_documents() {
        let json = r#"[
            {"id": "a", "title": "Launch", "startDate": "2025-03-14T14:00:00Z", "endDate": "2025-03-14T16:00:00Z", "capacity": 120},
            {"id": "b", "date": "2025-04-01"}
        ]"#;

        let records = parse_records(json).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].display_title(), "Launch");
        assert_eq!(records[0].end_date.as_deref(), Some("2025-03-14T16:00:00Z"));
        assert_eq!(records[1].display_title(), "(Untitled event)");
        assert_eq!(records[1].date.as_deref(), Some("2025-04-01"));
    }

    #[test]
    fn non_array_json_is_a_serialization_error() {
        assert!(matches!(
            parse_records(r#"{"id": "a"}"#),
            Err(EventlyError::Serialization(_))
        ));
    }
}
