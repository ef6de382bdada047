//! Per-venue booking timeline.
//!
//! Keeps a venue's booked intervals sorted by start (then end) and answers the
//! two questions every scheduler asks: is a window free, and where is the first
//! gap wide enough for a given duration.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};
use crate::interval::TimeInterval;

/// Sorted set of booked intervals for one venue.
///
/// Intervals supplied by the record layer may overlap each other; the gap walk
/// in [`earliest_free_slot`](Self::earliest_free_slot) tolerates that. Intervals
/// added through [`book`](Self::book) never overlap anything already stored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<TimeInterval>", into = "Vec<TimeInterval>")]
pub struct VenueAvailability {
    booked: Vec<TimeInterval>,
}

impl From<Vec<TimeInterval>> for VenueAvailability {
    fn from(mut booked: Vec<TimeInterval>) -> Self {
        booked.sort();
        Self { booked }
    }
}

impl From<VenueAvailability> for Vec<TimeInterval> {
    fn from(availability: VenueAvailability) -> Self {
        availability.booked
    }
}

impl VenueAvailability {
    pub fn new() -> Self {
        Self::default()
    }

    /// Booked intervals in chronological order.
    pub fn intervals(&self) -> &[TimeInterval] {
        &self.booked
    }

    pub fn len(&self) -> usize {
        self.booked.len()
    }

    pub fn is_empty(&self) -> bool {
        self.booked.is_empty()
    }

    /// True iff no stored interval overlaps `candidate`.
    pub fn is_free(&self, candidate: &TimeInterval) -> bool {
        self.booked
            .iter()
            // Sorted by start: nothing at or past candidate.end can overlap.
            .take_while(|iv| iv.start() < candidate.end())
            .all(|iv| !iv.overlaps(candidate))
    }

    /// Earliest start `>= not_before` such that `[start, start + duration)` is free.
    ///
    /// The timeline is unbounded past the last booking, so a venue is never full
    /// forever. Returns `None` only for a non-positive duration or when the
    /// candidate end is not representable.
    pub fn earliest_free_slot(
        &self,
        not_before: DateTime<Utc>,
        duration: Duration,
    ) -> Option<DateTime<Utc>> {
        if duration <= Duration::zero() {
            return None;
        }

        let mut cursor = not_before;
        for iv in &self.booked {
            if iv.end() <= cursor {
                continue;
            }
            // Gap between cursor and the next booking is wide enough.
            if cursor.checked_add_signed(duration)? <= iv.start() {
                return Some(cursor);
            }
            cursor = iv.end();
        }

        // Trailing open-ended gap after the last booking.
        cursor.checked_add_signed(duration)?;
        Some(cursor)
    }

    /// Insert `interval`, keeping the set sorted.
    ///
    /// # Errors
    /// Returns `ScheduleError::Overlap` if the window is not free.
    pub fn book(&mut self, interval: TimeInterval) -> Result<()> {
        if !self.is_free(&interval) {
            return Err(ScheduleError::Overlap {
                start: interval.start(),
                end: interval.end(),
            });
        }
        let at = self.booked.partition_point(|iv| *iv <= interval);
        self.booked.insert(at, interval);
        Ok(())
    }
}
