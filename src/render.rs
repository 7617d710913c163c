//! TUI rendering traits for evently types.
//!
//! Extension traits that add colored terminal rendering to evently-core
//! types using owo_colors.

use evently_core::{EventDisplay, Status};
use owo_colors::OwoColorize;

/// Extension trait for TUI rendering with colors.
pub trait Render {
    fn render(&self) -> String;
}

impl Render for Status {
    fn render(&self) -> String {
        let badge = format!("{:<9}", self.as_str());
        match self {
            Status::Live => badge.green().bold().to_string(),
            Status::Upcoming => badge.blue().to_string(),
            Status::Completed => badge.dimmed().to_string(),
        }
    }
}

impl Render for EventDisplay {
    fn render(&self) -> String {
        if self.time_remaining.is_empty() {
            format!("{} {}", self.status.render(), self.date_range)
        } else {
            format!(
                "{} {} {}",
                self.status.render(),
                self.date_range,
                format!("({})", self.time_remaining).dimmed()
            )
        }
    }
}

/// Simple pluralization helper
pub fn pluralize(word: &str, count: usize) -> String {
    if count == 1 {
        word.to_string()
    } else {
        format!("{word}s")
    }
}
