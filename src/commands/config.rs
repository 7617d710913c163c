use anyhow::Result;
use chrono_tz::Tz;
use evently_core::config::EventlyConfig;
use owo_colors::OwoColorize;

pub fn run(config: &EventlyConfig, tz: Tz, init: bool) -> Result<()> {
    let path = EventlyConfig::config_path()?;

    if init {
        if path.exists() {
            println!("{}", format!("Config already exists at {}", path.display()).dimmed());
        } else {
            EventlyConfig::create_default_config(&path)?;
            println!("Created {}", path.display());
        }
    }

    println!("{} {}", "Config file:".bold(), path.display());
    println!("{} {}", "Time zone:".bold(), tz);

    let statuses = if config.list_statuses.is_empty() {
        "all".to_string()
    } else {
        config
            .list_statuses
            .iter()
            .map(|s| s.as_str())
            .collect::<Vec<_>>()
            .join(", ")
    };
    println!("{} {}", "Listed statuses:".bold(), statuses);

    Ok(())
}
