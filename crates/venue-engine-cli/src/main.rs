//! `venue-sched` CLI — schedule events into venues from JSON documents.
//!
//! ## Usage
//!
//! ```sh
//! # Batch-schedule every request in the document (stdin → stdout)
//! cat plan.json | venue-sched schedule
//!
//! # Override the default start and write to a file
//! venue-sched schedule -i plan.json -o result.json --default-start 2026-03-16T09:00:00Z
//!
//! # Earliest venue/start for 40 people, 3 hours, from Monday 09:00
//! venue-sched find-slot -i plan.json --capacity 40 --duration 3 --earliest 2026-03-16T09:00:00
//!
//! # Check a single booking (exit code 2 when rejected)
//! venue-sched validate -i plan.json --venue hall --start 2026-03-16T10:00:00Z \
//!     --end 2026-03-16T12:00:00Z --capacity 30
//! ```
//!
//! The input document is `{"default_start"?, "requests"?, "venues"}`; see
//! `tests/fixtures/plan.json`.

use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use clap::{ArgAction, Parser, Subcommand};
use serde::{Deserialize, Serialize};
use std::io::{self, Read};
use std::process;
use tracing::Level;
use venue_engine::{
    create_schedule, find_first_available_slot, validator, EventRequest, RejectReason,
    TimeInterval, VenueInfo,
};

#[derive(Parser)]
#[command(
    name = "venue-sched",
    version,
    about = "Venue/event scheduling CLI"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Assign every request in the document to a venue and time
    Schedule {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Search floor for requests without a preferred start (overrides the document)
        #[arg(long)]
        default_start: Option<String>,
    },
    /// Find the earliest venue/start pair for a capacity and duration
    FindSlot {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Required attendee capacity (at least 1)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        capacity: u32,
        /// Duration in whole hours
        #[arg(long)]
        duration: u32,
        /// Earliest acceptable start
        #[arg(long)]
        earliest: String,
    },
    /// Check whether a single booking would be accepted by a venue
    Validate {
        /// Input file (reads from stdin if omitted)
        #[arg(short, long)]
        input: Option<String>,
        /// Venue id to check against
        #[arg(long)]
        venue: String,
        #[arg(long)]
        start: String,
        #[arg(long)]
        end: String,
        /// Required attendee capacity (at least 1)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..))]
        capacity: u32,
    },
}

/// The JSON document every subcommand reads.
#[derive(Deserialize)]
struct PlanDocument {
    #[serde(default)]
    default_start: Option<DateTime<Utc>>,
    #[serde(default)]
    requests: Vec<EventRequest>,
    venues: Vec<VenueInfo>,
}

#[derive(Serialize)]
struct SlotOutput<'a> {
    venue_id: &'a str,
    venue_name: &'a str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

#[derive(Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
enum ValidationOutput {
    Ok,
    Rejected { reason: RejectReason },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Schedule {
            input,
            output,
            default_start,
        } => {
            let mut doc = read_document(input.as_deref())?;
            let default_start = match default_start.as_deref() {
                Some(raw) => parse_datetime(raw)?,
                None => doc.default_start.context(
                    "No default start: pass --default-start or set \"default_start\" in the input",
                )?,
            };

            let result = create_schedule(&doc.requests, &mut doc.venues, default_start);
            tracing::info!(
                scheduled = result.scheduled.len(),
                unscheduled = result.unscheduled.len(),
                "schedule complete"
            );
            let json = serde_json::to_string_pretty(&result)?;
            write_output(output.as_deref(), &json)?;
        }
        Commands::FindSlot {
            input,
            capacity,
            duration,
            earliest,
        } => {
            let doc = read_document(input.as_deref())?;
            let earliest = parse_datetime(&earliest)?;

            let found = find_first_available_slot(&doc.venues, capacity, earliest, duration)
                .context("Invalid slot query")?;
            let json = match found {
                Some(m) => {
                    let interval = m
                        .interval(chrono::Duration::hours(i64::from(duration)))
                        .context("Slot end is out of range")?;
                    serde_json::to_string_pretty(&SlotOutput {
                        venue_id: &m.venue.id,
                        venue_name: &m.venue.name,
                        start: interval.start(),
                        end: interval.end(),
                    })?
                }
                None => "null".to_string(),
            };
            write_output(None, &json)?;
        }
        Commands::Validate {
            input,
            venue,
            start,
            end,
            capacity,
        } => {
            let doc = read_document(input.as_deref())?;
            let target = doc
                .venues
                .iter()
                .find(|v| v.id == venue)
                .with_context(|| format!("Unknown venue: {}", venue))?;
            let interval = TimeInterval::new(parse_datetime(&start)?, parse_datetime(&end)?)
                .context("Invalid booking window")?;

            let outcome = match validator::validate(target, &interval, capacity) {
                Ok(()) => ValidationOutput::Ok,
                Err(reason) => ValidationOutput::Rejected { reason },
            };
            write_output(None, &serde_json::to_string(&outcome)?)?;
            if matches!(outcome, ValidationOutput::Rejected { .. }) {
                process::exit(2);
            }
        }
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(io::stderr)
        .init();
}

/// Parse an ISO 8601 datetime string into `DateTime<Utc>`.
///
/// Accepts RFC 3339 (with offset) and naive local time, which is interpreted as UTC.
fn parse_datetime(s: &str) -> Result<DateTime<Utc>> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(s, "%Y-%m-%dT%H:%M:%S")
        .map(|ndt| ndt.and_utc())
        .with_context(|| format!("Invalid datetime '{}'", s))
}

fn read_document(path: Option<&str>) -> Result<PlanDocument> {
    let raw = read_input(path)?;
    serde_json::from_str(&raw).context("Failed to parse planning document")
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))
        }
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read from stdin")?;
            Ok(buf)
        }
    }
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            println!("{}", content);
        }
    }
    Ok(())
}
