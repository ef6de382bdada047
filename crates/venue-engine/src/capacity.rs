//! Attendee-capacity rule.
//!
//! This is the venue-size check used by the scheduler. It is unrelated to an
//! event's participant registration cap (see [`crate::planner::EventRecord`]).

/// A venue fits a request when its total capacity covers the required capacity.
pub fn fits(required_capacity: u32, venue_capacity: u32) -> bool {
    required_capacity <= venue_capacity
}
