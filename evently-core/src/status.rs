use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::EventlyError;

/// Where an event sits in its lifecycle relative to a given instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Upcoming,
    Live,
    Completed,
}

impl Status {
    /// Order used when grouping events for display: what is happening now
    /// first, then what is coming, then the past.
    pub const DISPLAY_ORDER: [Status; 3] = [Status::Live, Status::Upcoming, Status::Completed];

    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Upcoming => "upcoming",
            Status::Live => "live",
            Status::Completed => "completed",
        }
    }

    /// Section heading used by event dashboards.
    pub fn heading(&self) -> &'static str {
        match self {
            Status::Upcoming => "Upcoming",
            Status::Live => "Happening now",
            Status::Completed => "Past events",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Status {
    type Err = EventlyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "upcoming" => Ok(Status::Upcoming),
            "live" => Ok(Status::Live),
            "completed" => Ok(Status::Completed),
            _ => Err(EventlyError::UnknownStatus(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Live".parse::<Status>().unwrap(), Status::Live);
        assert_eq!(" upcoming ".parse::<Status>().unwrap(), Status::Upcoming);
        assert_eq!("COMPLETED".parse::<Status>().unwrap(), Status::Completed);
    }

    #[test]
    fn rejects_unknown_labels() {
        let err = "cancelled".parse::<Status>().unwrap_err();
        assert!(matches!(err, EventlyError::UnknownStatus(ref s) if s == "cancelled"));
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Live).unwrap(), "\"live\"");
        let parsed: Status = serde_json::from_str("\"completed\"").unwrap();
        assert_eq!(parsed, Status::Completed);
    }

    #[test]
    fn display_matches_label() {
        for status in Status::DISPLAY_ORDER {
            assert_eq!(status.to_string(), status.as_str());
        }
    }
}
