//! Event lifecycle status and schedule text for evently.
//!
//! Given an event's start (and optional end) and an injected current instant,
//! this crate decides whether the event is upcoming, live or completed, and
//! renders its date range and countdown for viewers in an explicit time zone:
//! - `record` turns stored event documents into validated schedules
//! - `Classifier` classifies and formats schedules
//! - `config` holds the user's evently settings

pub mod classifier;
pub mod config;
pub mod display;
pub mod error;
mod format;
pub mod instant;
pub mod record;
pub mod schedule;
pub mod status;

pub use classifier::Classifier;
pub use display::EventDisplay;
pub use error::{EventlyError, EventlyResult, InvalidSchedule};
pub use record::EventRecord;
pub use schedule::EventSchedule;
pub use status::Status;
