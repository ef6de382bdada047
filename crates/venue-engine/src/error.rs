//! Error types for venue-engine operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Why a single booking was turned down by the conflict validator.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RejectReason {
    /// The venue can never host the required number of attendees.
    #[error("venue capacity is below the required capacity")]
    CapacityExceeded,

    /// The venue is large enough but the requested window is already booked.
    #[error("requested window overlaps an existing booking")]
    TimeConflict,
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ScheduleError {
    #[error("Invalid interval: start {start} is not before end {end}")]
    InvalidInterval {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    /// Carries the offending duration in minutes.
    #[error("Invalid duration: {0} minutes (must be positive)")]
    InvalidDuration(i64),

    #[error("Invalid required capacity: {0} (must be at least 1)")]
    InvalidCapacity(u32),

    #[error("Overlap: [{start}, {end}) is already booked")]
    Overlap {
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    },

    #[error("Time overflow: {0} plus the requested duration is out of range")]
    TimeOverflow(DateTime<Utc>),

    #[error("Booking rejected: {0}")]
    Rejected(#[from] RejectReason),
}

/// Participant registration failures on a single event.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RegistrationError {
    #[error("Event is at full capacity")]
    EventFull,

    #[error("Participant already registered")]
    AlreadyRegistered,
}

/// Errors raised by record stores and the event planner.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RecordError {
    #[error("Duplicate record id: {0}")]
    DuplicateId(String),

    #[error("Record not found: {0}")]
    NotFound(String),

    #[error("Venue {venue_id} is still referenced by {events} active event(s)")]
    VenueInUse { venue_id: String, events: usize },

    #[error(transparent)]
    Schedule(#[from] ScheduleError),

    #[error(transparent)]
    Registration(#[from] RegistrationError),
}

/// Convenience alias used throughout venue-engine.
pub type Result<T> = std::result::Result<T, ScheduleError>;
