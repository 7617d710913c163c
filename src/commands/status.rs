use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use evently_core::{Classifier, EventSchedule};

use crate::render::Render;

pub fn run(
    classifier: &Classifier,
    start: &str,
    end: Option<&str>,
    now: DateTime<Utc>,
    json: bool,
) -> Result<()> {
    let schedule = EventSchedule::parse(start, end, classifier.tz()).context("Invalid schedule")?;
    log::debug!("Classifying {:?} at {now} in {}", schedule, classifier.tz());

    let display = classifier.describe(&schedule, now);

    if json {
        println!("{}", serde_json::to_string_pretty(&display)?);
    } else {
        println!("{}", display.render());
    }

    Ok(())
}
