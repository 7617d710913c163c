//! Global evently configuration.

use std::path::{Path, PathBuf};

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

use crate::error::{EventlyError, EventlyResult};
use crate::status::Status;

/// Configuration at ~/.config/evently/config.toml
///
/// Every key is optional; a missing file is the same as an empty one.
#[derive(Debug, Default, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventlyConfig {
    /// IANA zone used for calendar-day decisions and display.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,

    /// Statuses `evently list` shows when none are given on the command line.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub list_statuses: Vec<Status>,
}

impl EventlyConfig {
    pub fn config_path() -> EventlyResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventlyError::Config("Could not determine config directory".into()))?
            .join("evently");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default location.
    pub fn load() -> EventlyResult<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> EventlyResult<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(EventlyConfig::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: EventlyConfig = toml::from_str(&content)
            .map_err(|e| EventlyError::Config(format!("{}: {e}", path.display())))?;

        log::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// The configured zone, if any.
    pub fn timezone(&self) -> EventlyResult<Option<Tz>> {
        self.timezone.as_deref().map(parse_timezone).transpose()
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventlyResult<()> {
        let contents = "\
# evently configuration

# Time zone used to decide which calendar day an event falls on
# (defaults to the system time zone):
# timezone = \"Europe/Berlin\"

# Statuses shown by `evently list` when no --status is given:
# list_statuses = [\"live\", \"upcoming\"]
";

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventlyError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventlyError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }
}

/// Parse an IANA time zone name such as "America/New_York".
pub fn parse_timezone(name: &str) -> EventlyResult<Tz> {
    name.trim()
        .parse::<Tz>()
        .map_err(|_| EventlyError::UnknownTimeZone(name.to_string()))
}
