//! Greedy batch scheduler.
//!
//! # Algorithm
//!
//! 1. Take requests in the order the caller supplies them (no re-sorting).
//! 2. Search floor is the request's preferred start, else the run's default.
//! 3. Ask the slot finder for the earliest (venue, start) across all venues.
//! 4. Book the slot into that venue so later requests see it as a conflict.
//!
//! Per-request failures never abort the run; they land in `unscheduled` with a
//! reason. The engine holds no state between calls: the only mutation is to the
//! venue slice the caller passes in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::capacity;
use crate::interval::TimeInterval;
use crate::model::{EventRequest, VenueInfo};
use crate::slot_finder::find_first_available_slot;

/// One event placed into one venue.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledAssignment {
    pub event_id: String,
    pub venue_id: String,
    pub venue_name: String,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// Why a request ended up unscheduled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "snake_case")]
pub enum UnscheduledReason {
    /// No venue in the pool is large enough.
    CapacityExceeded,
    /// Capable venues exist but none yielded a representable window.
    TimeConflict,
    /// The chosen slot was taken when booking; indicates an upstream logic error.
    BookingOverlap,
    /// The request itself is malformed (zero duration or capacity).
    InvalidRequest(String),
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Unscheduled {
    pub event_id: String,
    pub reason: UnscheduledReason,
}

/// Outcome of a scheduling run.
///
/// `scheduled` is in processing order, not chronological order. Every input
/// request id appears exactly once across `scheduled` and `unscheduled`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduleResult {
    pub scheduled: Vec<ScheduledAssignment>,
    pub unscheduled: Vec<Unscheduled>,
}

impl ScheduleResult {
    pub fn unscheduled_ids(&self) -> Vec<&str> {
        self.unscheduled.iter().map(|u| u.event_id.as_str()).collect()
    }

    pub fn assignment_for(&self, event_id: &str) -> Option<&ScheduledAssignment> {
        self.scheduled.iter().find(|a| a.event_id == event_id)
    }

    pub fn assignments_for_venue<'a>(
        &'a self,
        venue_id: &'a str,
    ) -> impl Iterator<Item = &'a ScheduledAssignment> + 'a {
        self.scheduled.iter().filter(move |a| a.venue_id == venue_id)
    }
}

/// Schedule `requests` into `venues`, booking each placement into the venue it
/// was assigned to.
///
/// Callers that want idempotent re-runs should pass fresh venue copies each
/// time, or use [`plan_schedule`].
pub fn create_schedule(
    requests: &[EventRequest],
    venues: &mut [VenueInfo],
    default_start: DateTime<Utc>,
) -> ScheduleResult {
    let mut result = ScheduleResult::default();

    for request in requests {
        match place(request, venues, default_start) {
            Ok(assignment) => {
                tracing::debug!(
                    event = %assignment.event_id,
                    venue = %assignment.venue_id,
                    start = %assignment.start,
                    "scheduled"
                );
                result.scheduled.push(assignment);
            }
            Err(reason) => {
                tracing::debug!(event = %request.id, ?reason, "unscheduled");
                result.unscheduled.push(Unscheduled {
                    event_id: request.id.clone(),
                    reason,
                });
            }
        }
    }

    result
}

/// Run [`create_schedule`] against a private copy of `venues`.
pub fn plan_schedule(
    requests: &[EventRequest],
    venues: &[VenueInfo],
    default_start: DateTime<Utc>,
) -> ScheduleResult {
    let mut scratch = venues.to_vec();
    create_schedule(requests, &mut scratch, default_start)
}

fn place(
    request: &EventRequest,
    venues: &mut [VenueInfo],
    default_start: DateTime<Utc>,
) -> Result<ScheduledAssignment, UnscheduledReason> {
    request
        .validate()
        .map_err(|e| UnscheduledReason::InvalidRequest(e.to_string()))?;

    let floor = request.preferred_start.unwrap_or(default_start);
    let found = find_first_available_slot(
        venues,
        request.required_capacity,
        floor,
        request.duration_hours,
    )
    .map_err(|e| UnscheduledReason::InvalidRequest(e.to_string()))?
    .map(|m| (m.venue_index, m.start));

    let Some((venue_index, start)) = found else {
        let any_capable = venues
            .iter()
            .any(|v| capacity::fits(request.required_capacity, v.capacity));
        return Err(if any_capable {
            UnscheduledReason::TimeConflict
        } else {
            UnscheduledReason::CapacityExceeded
        });
    };

    let interval = TimeInterval::from_start(start, request.duration())
        .map_err(|_| UnscheduledReason::TimeConflict)?;
    let venue = &mut venues[venue_index];
    if let Err(e) = venue.availability.book(interval) {
        tracing::warn!(event = %request.id, venue = %venue.id, error = %e, "slot vanished before booking");
        return Err(UnscheduledReason::BookingOverlap);
    }

    Ok(ScheduledAssignment {
        event_id: request.id.clone(),
        venue_id: venue.id.clone(),
        venue_name: venue.name.clone(),
        start: interval.start(),
        end: interval.end(),
    })
}
