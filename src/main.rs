mod commands;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use chrono_tz::Tz;
use clap::{ArgAction, Parser, Subcommand};
use evently_core::config::{EventlyConfig, parse_timezone};
use evently_core::instant::parse_instant;
use evently_core::{Classifier, Status};

#[derive(Parser)]
#[command(name = "evently")]
#[command(about = "Classify events as upcoming, live or completed")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// IANA time zone for calendar days and display (e.g. "Europe/Berlin")
    #[arg(long, global = true)]
    tz: Option<String>,

    /// Evaluate as of this instant instead of the current time
    #[arg(long, global = true)]
    now: Option<String>,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true)]
    quiet: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Classify a single schedule
    Status {
        /// Start timestamp (RFC 3339, "2025-03-14T14:00" or "2025-03-14")
        #[arg(short, long)]
        start: String,

        /// End timestamp; without one the event lasts its whole start day
        #[arg(short, long)]
        end: Option<String>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Classify a JSON array of event records ("-" reads stdin)
    List {
        file: PathBuf,

        /// Only show events with this status (repeatable)
        #[arg(short, long)]
        status: Vec<Status>,

        /// Print JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Show the config file location and effective settings
    Config {
        /// Write a commented default config file if none exists
        #[arg(long)]
        init: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let config = EventlyConfig::load()?;
    let tz = resolve_timezone(cli.tz.as_deref(), &config)?;
    let classifier = Classifier::new(tz);

    match cli.command {
        Commands::Status { start, end, json } => {
            let now = resolve_now(cli.now.as_deref(), tz)?;
            commands::status::run(&classifier, &start, end.as_deref(), now, json)
        }
        Commands::List { file, status, json } => {
            let now = resolve_now(cli.now.as_deref(), tz)?;
            let statuses = if status.is_empty() {
                config.list_statuses.clone()
            } else {
                status
            };
            commands::list::run(&classifier, &file, &statuses, now, json)
        }
        Commands::Config { init } => commands::config::run(&config, tz, init),
    }
}

/// `--tz` wins over the config file, which wins over the system zone.
fn resolve_timezone(flag: Option<&str>, config: &EventlyConfig) -> Result<Tz> {
    if let Some(name) = flag {
        return Ok(parse_timezone(name)?);
    }

    if let Some(tz) = config.timezone()? {
        return Ok(tz);
    }

    Ok(system_timezone())
}

fn system_timezone() -> Tz {
    match iana_time_zone::get_timezone() {
        Ok(name) => parse_timezone(&name).unwrap_or_else(|e| {
            log::warn!("{e}, falling back to UTC");
            Tz::UTC
        }),
        Err(e) => {
            log::warn!("Could not detect system time zone ({e}), falling back to UTC");
            Tz::UTC
        }
    }
}

/// The instant everything in this run is evaluated against. Read once.
fn resolve_now(flag: Option<&str>, tz: Tz) -> Result<DateTime<Utc>> {
    match flag {
        Some(text) => parse_instant("now", text, tz).context("Invalid --now value"),
        None => Ok(Utc::now()),
    }
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Warn,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .init();
}
