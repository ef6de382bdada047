//! Single-booking conflict validation.
//!
//! Capacity is checked before time: a venue that can never host the request is
//! rejected without looking at its timeline.

use crate::capacity;
use crate::error::{RejectReason, Result, ScheduleError};
use crate::interval::TimeInterval;
use crate::model::VenueInfo;

/// Approve or reject booking `interval` into `venue` for `required_capacity`
/// attendees. Never mutates the venue.
pub fn validate(
    venue: &VenueInfo,
    interval: &TimeInterval,
    required_capacity: u32,
) -> std::result::Result<(), RejectReason> {
    if !capacity::fits(required_capacity, venue.capacity) {
        return Err(RejectReason::CapacityExceeded);
    }
    if !venue.availability.is_free(interval) {
        return Err(RejectReason::TimeConflict);
    }
    Ok(())
}

/// Validate and then commit a single booking.
///
/// # Errors
/// `InvalidCapacity` when `required_capacity` is zero, `Rejected` with the
/// first failing [`RejectReason`] otherwise.
pub fn book_single(
    venue: &mut VenueInfo,
    interval: TimeInterval,
    required_capacity: u32,
) -> Result<()> {
    if required_capacity == 0 {
        return Err(ScheduleError::InvalidCapacity(required_capacity));
    }
    validate(venue, &interval, required_capacity)?;
    venue.availability.book(interval)?;
    tracing::debug!(
        venue = %venue.id,
        start = %interval.start(),
        end = %interval.end(),
        "booked single event"
    );
    Ok(())
}
