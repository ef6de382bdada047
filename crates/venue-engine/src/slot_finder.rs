//! Earliest (venue, start) search across a venue list.
//!
//! Venues are examined in the caller's order, which is also the tie-break: when
//! two venues offer the same earliest start, the one listed first wins. Venues
//! too small for the request are skipped before their timelines are consulted,
//! so a chronologically earlier slot in an undersized venue never wins.

use chrono::{DateTime, Duration, Utc};

use crate::capacity;
use crate::error::{Result, ScheduleError};
use crate::interval::TimeInterval;
use crate::model::VenueInfo;

/// A feasible slot found by [`find_first_available_slot`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SlotMatch<'a> {
    /// Position of `venue` in the input slice.
    pub venue_index: usize,
    pub venue: &'a VenueInfo,
    pub start: DateTime<Utc>,
}

impl SlotMatch<'_> {
    /// The window `[start, start + duration)` this match stands for.
    pub fn interval(&self, duration: Duration) -> Result<TimeInterval> {
        TimeInterval::from_start(self.start, duration)
    }
}

/// Find the chronologically earliest feasible slot across `venues`.
///
/// Read-only: the slot is not booked. Returns `Ok(None)` when no venue has
/// enough capacity (or every capable venue's timeline overflows).
///
/// # Errors
/// `InvalidDuration` when `duration_hours` is zero, `InvalidCapacity` when
/// `required_capacity` is zero.
pub fn find_first_available_slot(
    venues: &[VenueInfo],
    required_capacity: u32,
    earliest_start: DateTime<Utc>,
    duration_hours: u32,
) -> Result<Option<SlotMatch<'_>>> {
    if duration_hours == 0 {
        return Err(ScheduleError::InvalidDuration(0));
    }
    if required_capacity == 0 {
        return Err(ScheduleError::InvalidCapacity(0));
    }
    let duration = Duration::hours(i64::from(duration_hours));

    let mut best: Option<SlotMatch<'_>> = None;
    for (venue_index, venue) in venues.iter().enumerate() {
        if !capacity::fits(required_capacity, venue.capacity) {
            tracing::trace!(
                venue = %venue.id,
                capacity = venue.capacity,
                required_capacity,
                "skipping undersized venue"
            );
            continue;
        }
        let Some(start) = venue.availability.earliest_free_slot(earliest_start, duration) else {
            continue;
        };
        tracing::trace!(venue = %venue.id, %start, "candidate slot");

        // Strict comparison keeps the earlier venue on ties.
        if best.map_or(true, |b| start < b.start) {
            best = Some(SlotMatch {
                venue_index,
                venue,
                start,
            });
        }
    }

    Ok(best)
}
