//! Plain records consumed by the scheduling engine.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::availability::VenueAvailability;
use crate::error::{Result, ScheduleError};

/// A request to host an event somewhere, for some duration, for some attendees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRequest {
    pub id: String,
    pub title: String,
    /// Required duration in whole hours (must be > 0).
    pub duration_hours: u32,
    /// Search floor for this request; the run's default start is used when absent.
    #[serde(default)]
    pub preferred_start: Option<DateTime<Utc>>,
    /// Attendees the venue must be able to hold (must be >= 1).
    pub required_capacity: u32,
}

impl EventRequest {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        duration_hours: u32,
        required_capacity: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            duration_hours,
            preferred_start: None,
            required_capacity,
        }
    }

    pub fn with_preferred_start(mut self, start: DateTime<Utc>) -> Self {
        self.preferred_start = Some(start);
        self
    }

    /// The requested duration as a `chrono::Duration`.
    pub fn duration(&self) -> Duration {
        Duration::hours(i64::from(self.duration_hours))
    }

    /// Reject requests that can never be scheduled because they are malformed.
    ///
    /// # Errors
    /// `InvalidDuration` for a zero duration, `InvalidCapacity` for a zero
    /// required capacity.
    pub fn validate(&self) -> Result<()> {
        if self.duration_hours == 0 {
            return Err(ScheduleError::InvalidDuration(0));
        }
        if self.required_capacity == 0 {
            return Err(ScheduleError::InvalidCapacity(0));
        }
        Ok(())
    }
}

/// A bookable space with a total capacity and a timeline of existing bookings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VenueInfo {
    pub id: String,
    pub name: String,
    pub capacity: u32,
    pub location: String,
    #[serde(default, rename = "booked_intervals")]
    pub availability: VenueAvailability,
}

impl VenueInfo {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        capacity: u32,
        location: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            capacity,
            location: location.into(),
            availability: VenueAvailability::new(),
        }
    }

    pub fn with_availability(mut self, availability: VenueAvailability) -> Self {
        self.availability = availability;
        self
    }
}
