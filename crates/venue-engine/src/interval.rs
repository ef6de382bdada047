//! Half-open time intervals and the overlap predicate.
//!
//! An interval `[start, end)` includes its start instant and excludes its end
//! instant, so back-to-back bookings (one ends exactly when the next begins)
//! never conflict.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScheduleError};

/// A non-empty half-open time range. `start < end` always holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct TimeInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

/// Unchecked wire shape; converted through [`TimeInterval::new`].
#[derive(Deserialize)]
struct RawInterval {
    start: DateTime<Utc>,
    end: DateTime<Utc>,
}

impl TryFrom<RawInterval> for TimeInterval {
    type Error = ScheduleError;

    fn try_from(raw: RawInterval) -> Result<Self> {
        TimeInterval::new(raw.start, raw.end)
    }
}

impl TimeInterval {
    /// Build an interval, rejecting empty or inverted ranges.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidInterval` if `start >= end`.
    pub fn new(start: DateTime<Utc>, end: DateTime<Utc>) -> Result<Self> {
        if start >= end {
            return Err(ScheduleError::InvalidInterval { start, end });
        }
        Ok(Self { start, end })
    }

    /// Build the interval `[start, start + duration)`.
    ///
    /// # Errors
    /// Returns `ScheduleError::InvalidDuration` for a non-positive duration and
    /// `ScheduleError::TimeOverflow` if the end instant is out of range.
    pub fn from_start(start: DateTime<Utc>, duration: Duration) -> Result<Self> {
        if duration <= Duration::zero() {
            return Err(ScheduleError::InvalidDuration(duration.num_minutes()));
        }
        let end = start
            .checked_add_signed(duration)
            .ok_or(ScheduleError::TimeOverflow(start))?;
        Self::new(start, end)
    }

    pub fn start(&self) -> DateTime<Utc> {
        self.start
    }

    pub fn end(&self) -> DateTime<Utc> {
        self.end
    }

    pub fn duration(&self) -> Duration {
        self.end - self.start
    }

    /// Whether `instant` falls inside `[start, end)`.
    pub fn contains(&self, instant: DateTime<Utc>) -> bool {
        self.start <= instant && instant < self.end
    }

    /// Method form of [`overlaps`].
    pub fn overlaps(&self, other: &TimeInterval) -> bool {
        overlaps(self, other)
    }
}

/// Two intervals overlap iff `a.start < b.end && b.start < a.end`.
///
/// Adjacent intervals where one ends exactly when the other starts do NOT
/// overlap.
pub fn overlaps(a: &TimeInterval, b: &TimeInterval) -> bool {
    a.start < b.end && b.start < a.end
}
