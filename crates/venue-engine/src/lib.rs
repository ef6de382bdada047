//! # venue-engine
//!
//! Deterministic venue/event scheduling for event-planning applications.
//!
//! Assigns requested events to a finite set of venues over time without
//! producing capacity or time overlaps. Every operation is a synchronous,
//! in-memory computation over plain records; storage and presentation belong to
//! the caller.
//!
//! ## Modules
//!
//! - [`interval`] — Half-open `TimeInterval` and the overlap predicate
//! - [`availability`] — Per-venue booked timeline, free checks, earliest gap
//! - [`capacity`] — Venue capacity vs. required attendee capacity
//! - [`validator`] — Approve/reject a single booking (capacity, then time)
//! - [`slot_finder`] — Earliest feasible (venue, start) across a venue list
//! - [`scheduler`] — Greedy batch scheduling into a {scheduled, unscheduled} partition
//! - [`store`] — Narrow record-store interface with an in-memory implementation
//! - [`planner`] — Record-keeping facade: events, participants, venue snapshots
//! - [`error`] — Error types
//!
//! ## Quick start
//!
//! ```rust
//! use chrono::{TimeZone, Utc};
//! use venue_engine::{create_schedule, EventRequest, VenueInfo};
//!
//! let start = Utc.with_ymd_and_hms(2026, 3, 16, 9, 0, 0).unwrap();
//! let mut venues = vec![VenueInfo::new("hall", "Main Hall", 10, "Building A")];
//! let requests = vec![
//!     EventRequest::new("talk-1", "Opening", 2, 5),
//!     EventRequest::new("talk-2", "Keynote", 2, 5),
//! ];
//!
//! let result = create_schedule(&requests, &mut venues, start);
//! assert_eq!(result.scheduled.len(), 2);
//! assert_eq!(result.scheduled[1].start, start + chrono::Duration::hours(2));
//! ```

pub mod availability;
pub mod capacity;
pub mod error;
pub mod interval;
pub mod model;
pub mod planner;
pub mod scheduler;
pub mod slot_finder;
pub mod store;
pub mod validator;

pub use availability::VenueAvailability;
pub use error::{RecordError, RegistrationError, RejectReason, ScheduleError};
pub use interval::{overlaps, TimeInterval};
pub use model::{EventRequest, VenueInfo};
pub use planner::{EventCategory, EventPlanner, EventRecord, EventStatus, Participant};
pub use scheduler::{
    create_schedule, plan_schedule, ScheduleResult, ScheduledAssignment, Unscheduled,
    UnscheduledReason,
};
pub use slot_finder::{find_first_available_slot, SlotMatch};
pub use store::{InMemoryStore, Record, RecordStore};
