use std::io::Read;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use evently_core::record::parse_records;
use evently_core::{Classifier, EventDisplay, EventRecord, EventlyError, Status};
use owo_colors::OwoColorize;
use serde::Serialize;

use crate::render::{Render, pluralize};

/// One classified event as shown in the listing.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListEntry {
    pub id: String,
    pub title: String,
    #[serde(flatten)]
    pub display: EventDisplay,
    #[serde(skip)]
    pub start: DateTime<Utc>,
}

#[derive(Debug, Default)]
pub struct Listing {
    pub entries: Vec<ListEntry>,
    /// Records whose time fields could not be turned into a schedule.
    pub skipped: Vec<EventlyError>,
}

pub fn run(
    classifier: &Classifier,
    file: &Path,
    statuses: &[Status],
    now: DateTime<Utc>,
    json: bool,
) -> Result<()> {
    let content = read_input(file)?;
    let records = parse_records(&content)
        .with_context(|| format!("Could not read event records from {}", file.display()))?;

    let listing = build_listing(classifier, &records, statuses, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&listing.entries)?);
    } else {
        print_listing(&listing);
    }

    Ok(())
}

fn read_input(file: &Path) -> Result<String> {
    if file == Path::new("-") {
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .context("Could not read stdin")?;
        return Ok(content);
    }

    std::fs::read_to_string(file).with_context(|| format!("Could not read {}", file.display()))
}

/// Classify every record against the same `now`, keeping only `statuses`
/// (all of them when empty). Live and upcoming events are ordered soonest
/// first, completed events most recent first.
pub fn build_listing(
    classifier: &Classifier,
    records: &[EventRecord],
    statuses: &[Status],
    now: DateTime<Utc>,
) -> Listing {
    let mut listing = Listing::default();

    for record in records {
        let schedule = match record.try_schedule(classifier.tz()) {
            Ok(schedule) => schedule,
            Err(e) => {
                log::warn!("Skipping: {e}");
                listing.skipped.push(e);
                continue;
            }
        };

        let display = classifier.describe(&schedule, now);
        if !statuses.is_empty() && !statuses.contains(&display.status) {
            continue;
        }

        listing.entries.push(ListEntry {
            id: record.id.clone(),
            title: record.display_title().to_string(),
            display,
            start: schedule.start(),
        });
    }

    listing.entries.sort_by(|a, b| {
        let group = |e: &ListEntry| {
            Status::DISPLAY_ORDER
                .iter()
                .position(|s| *s == e.display.status)
        };
        group(a).cmp(&group(b)).then_with(|| match a.display.status {
            Status::Completed => b.start.cmp(&a.start),
            _ => a.start.cmp(&b.start),
        })
    });

    listing
}

fn print_listing(listing: &Listing) {
    if listing.entries.is_empty() {
        println!("{}", "No events found".dimmed());
    }

    let mut current: Option<Status> = None;

    for entry in &listing.entries {
        if current != Some(entry.display.status) {
            if current.is_some() {
                println!();
            }
            println!("{}", entry.display.status.heading().bold());
            current = Some(entry.display.status);
        }

        println!("  {} {}", entry.title, format!("[{}]", entry.id).dimmed());
        println!("     {}", entry.display.render());
    }

    if !listing.skipped.is_empty() {
        let count = listing.skipped.len();
        println!();
        println!(
            "{}",
            format!("Skipped {} {} with invalid dates (run with -v for details)", count, pluralize("event", count))
                .yellow()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use chrono_tz::Tz;

    fn record(id: &str, start: Option<&str>, end: Option<&str>) -> EventRecord {
        EventRecord {
            id: id.to_string(),
            title: Some(format!("Event {id}")),
            start_date: start.map(str::to_string),
            end_date: end.map(str::to_string),
            date: None,
        }
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 12, 0, 0).unwrap()
    }

    fn sample() -> Vec<EventRecord> {
        vec![
            record("old", Some("2025-03-01T10:00:00Z"), Some("2025-03-01T12:00:00Z")),
            record("older", Some("2025-02-01T10:00:00Z"), None),
            record("later", Some("2025-03-20T10:00:00Z"), None),
            record("soon", Some("2025-03-15T10:00:00Z"), Some("2025-03-15T11:00:00Z")),
            record("today", Some("2025-03-14T18:00:00Z"), None),
            record("broken", Some("whenever"), None),
            record("reversed", Some("2025-03-14T18:00:00Z"), Some("2025-03-14T17:00:00Z")),
        ]
    }

    fn ids(listing: &Listing) -> Vec<&str> {
        listing.entries.iter().map(|e| e.id.as_str()).collect()
    }

    #[test]
    fn groups_live_then_upcoming_then_completed() {
        let listing = build_listing(&Classifier::new(Tz::UTC), &sample(), &[], now());
        assert_eq!(ids(&listing), vec!["today", "soon", "later", "old", "older"]);
    }

    #[test]
    fn invalid_records_are_skipped_not_guessed() {
        let listing = build_listing(&Classifier::new(Tz::UTC), &sample(), &[], now());
        assert_eq!(listing.skipped.len(), 2);
        assert!(listing.skipped.iter().all(|e| matches!(e, EventlyError::InvalidRecord { .. })));
    }

    #[test]
    fn filters_by_status() {
        let listing = build_listing(&Classifier::new(Tz::UTC), &sample(), &[Status::Upcoming], now());
        assert_eq!(ids(&listing), vec!["soon", "later"]);
        assert!(listing.entries.iter().all(|e| e.display.status == Status::Upcoming));

        let listing = build_listing(
            &Classifier::new(Tz::UTC),
            &sample(),
            &[Status::Live, Status::Completed],
            now(),
        );
        assert_eq!(ids(&listing), vec!["today", "old", "older"]);
    }

    #[test]
    fn entries_share_one_now() {
        let listing = build_listing(&Classifier::new(Tz::UTC), &sample(), &[Status::Upcoming], now());
        let soon = &listing.entries[0];
        assert_eq!(soon.display.time_remaining, "Starting tomorrow");
        assert_eq!(soon.display.date_range, "March 15, 2025 from 10:00 AM to 11:00 AM");
    }

    #[test]
    fn json_entry_is_flat() {
        let listing = build_listing(&Classifier::new(Tz::UTC), &sample(), &[Status::Live], now());
        let json = serde_json::to_value(&listing.entries).unwrap();

        assert_eq!(json[0]["id"], "today");
        assert_eq!(json[0]["title"], "Event today");
        assert_eq!(json[0]["status"], "live");
        assert_eq!(json[0]["dateRange"], "March 14, 2025 at 6:00 PM");
        assert_eq!(json[0]["timeRemaining"], "");
        assert!(json[0].get("start").is_none());
    }
}
