//! Record-keeping facade over venue and event stores.
//!
//! The planner owns the application's venues and booked events, books single
//! events through the conflict validator, manages participant registration, and
//! builds fresh venue snapshots for batch scheduling runs. Venue timelines are
//! always rebuilt from the stored events, so deleting or cancelling an event
//! frees its window for the next run.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::availability::VenueAvailability;
use crate::error::{RecordError, RegistrationError};
use crate::interval::TimeInterval;
use crate::model::{EventRequest, VenueInfo};
use crate::scheduler::{create_schedule, ScheduleResult};
use crate::store::{InMemoryStore, Record, RecordStore};
use crate::validator;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventCategory {
    Workshop,
    Conference,
    Festival,
    Seminar,
    #[default]
    General,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventStatus {
    #[default]
    Planned,
    Ongoing,
    Completed,
    /// Cancelled events stay on record but no longer occupy their venue.
    Cancelled,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub organization: String,
    #[serde(default)]
    pub dietary_restrictions: Vec<String>,
    #[serde(default)]
    pub accessibility_needs: String,
}

impl Participant {
    pub fn new(
        id: impl Into<String>,
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
            phone_number: String::new(),
            organization: String::new(),
            dietary_restrictions: Vec::new(),
            accessibility_needs: String::new(),
        }
    }

    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A booked event as kept by the record layer.
///
/// `max_participants` caps registrations for this event. It is a separate
/// notion from the venue capacity the scheduler checks.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub interval: TimeInterval,
    pub venue_id: String,
    pub max_participants: u32,
    #[serde(default)]
    pub organizer: String,
    #[serde(default)]
    pub category: EventCategory,
    #[serde(default)]
    pub status: EventStatus,
    #[serde(default)]
    participants: Vec<Participant>,
}

impl EventRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        interval: TimeInterval,
        venue_id: impl Into<String>,
        max_participants: u32,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            description: String::new(),
            interval,
            venue_id: venue_id.into(),
            max_participants,
            organizer: String::new(),
            category: EventCategory::default(),
            status: EventStatus::default(),
            participants: Vec::new(),
        }
    }

    pub fn with_category(mut self, category: EventCategory) -> Self {
        self.category = category;
        self
    }

    pub fn with_organizer(mut self, organizer: impl Into<String>) -> Self {
        self.organizer = organizer.into();
        self
    }

    /// # Errors
    /// `EventFull` once `max_participants` are registered, `AlreadyRegistered`
    /// for a participant id already on the list.
    pub fn register(&mut self, participant: Participant) -> Result<(), RegistrationError> {
        if self.is_full() {
            return Err(RegistrationError::EventFull);
        }
        if self.participants.iter().any(|p| p.id == participant.id) {
            return Err(RegistrationError::AlreadyRegistered);
        }
        self.participants.push(participant);
        Ok(())
    }

    pub fn unregister(&mut self, participant_id: &str) -> bool {
        let before = self.participants.len();
        self.participants.retain(|p| p.id != participant_id);
        self.participants.len() != before
    }

    pub fn participants(&self) -> &[Participant] {
        &self.participants
    }

    pub fn registered_count(&self) -> u32 {
        u32::try_from(self.participants.len()).unwrap_or(u32::MAX)
    }

    pub fn available_spots(&self) -> u32 {
        self.max_participants.saturating_sub(self.registered_count())
    }

    pub fn is_full(&self) -> bool {
        self.registered_count() >= self.max_participants
    }

    fn occupies_venue(&self) -> bool {
        self.status != EventStatus::Cancelled
    }
}

impl Record for VenueInfo {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Record for EventRecord {
    fn id(&self) -> &str {
        &self.id
    }
}

pub struct EventPlanner<V = InMemoryStore<VenueInfo>, E = InMemoryStore<EventRecord>> {
    venues: V,
    events: E,
}

impl EventPlanner {
    /// Planner backed by empty in-memory stores.
    pub fn new() -> Self {
        Self::with_stores(InMemoryStore::new(), InMemoryStore::new())
    }
}

impl Default for EventPlanner {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> EventPlanner<V, E>
where
    V: RecordStore<VenueInfo>,
    E: RecordStore<EventRecord>,
{
    pub fn with_stores(venues: V, events: E) -> Self {
        Self { venues, events }
    }

    // ── Venues ──────────────────────────────────────────────────────────────

    pub fn add_venue(&mut self, venue: VenueInfo) -> Result<(), RecordError> {
        self.venues.add(venue)
    }

    /// Remove a venue that no active event still occupies.
    ///
    /// Cancelled events do not hold a venue; they keep their dangling
    /// `venue_id` for the record.
    ///
    /// # Errors
    /// `NotFound` for an unknown venue, `VenueInUse` while non-cancelled events
    /// reference it.
    pub fn remove_venue(&mut self, venue_id: &str) -> Result<VenueInfo, RecordError> {
        let events = self
            .events
            .list()
            .into_iter()
            .filter(|e| e.venue_id == venue_id && e.occupies_venue())
            .count();
        if events > 0 {
            return Err(RecordError::VenueInUse {
                venue_id: venue_id.to_string(),
                events,
            });
        }
        self.venues
            .remove(venue_id)
            .ok_or_else(|| RecordError::NotFound(venue_id.to_string()))
    }

    pub fn venues(&self) -> Vec<&VenueInfo> {
        self.venues.list()
    }

    pub fn venue(&self, venue_id: &str) -> Option<&VenueInfo> {
        self.venues.find_by_id(venue_id)
    }

    /// True iff neither a stored, non-cancelled event at `venue_id` nor one of the
    /// venue's own pre-existing bookings overlaps `interval`.
    pub fn is_venue_available(&self, venue_id: &str, interval: &TimeInterval) -> bool {
        let events_clear = self
            .events
            .list()
            .into_iter()
            .filter(|e| e.venue_id == venue_id && e.occupies_venue())
            .all(|e| !e.interval.overlaps(interval));
        let bookings_clear = self
            .venues
            .find_by_id(venue_id)
            .map_or(true, |v| v.availability.is_free(interval));
        events_clear && bookings_clear
    }

    // ── Events ──────────────────────────────────────────────────────────────

    /// Book `record` into its venue and store it.
    ///
    /// `required_capacity` is the attendee count the venue must hold; it is
    /// checked before the time window.
    ///
    /// # Errors
    /// `NotFound` for an unknown venue, `DuplicateId` for a reused event id, and
    /// `Schedule` (wrapping `InvalidCapacity` or `Rejected`) when the validator
    /// turns the booking down.
    pub fn create_event(
        &mut self,
        record: EventRecord,
        required_capacity: u32,
    ) -> Result<(), RecordError> {
        if self.events.find_by_id(&record.id).is_some() {
            return Err(RecordError::DuplicateId(record.id));
        }
        let mut venue = self
            .venues
            .find_by_id(&record.venue_id)
            .map(|v| self.with_current_bookings(v))
            .ok_or_else(|| RecordError::NotFound(record.venue_id.clone()))?;

        validator::book_single(&mut venue, record.interval, required_capacity)?;
        tracing::debug!(event = %record.id, venue = %record.venue_id, "event created");
        self.events.add(record)
    }

    pub fn delete_event(&mut self, event_id: &str) -> Option<EventRecord> {
        self.events.remove(event_id)
    }

    /// Mark an event cancelled, releasing its venue window.
    pub fn cancel_event(&mut self, event_id: &str) -> Result<(), RecordError> {
        let event = self
            .events
            .find_by_id_mut(event_id)
            .ok_or_else(|| RecordError::NotFound(event_id.to_string()))?;
        event.status = EventStatus::Cancelled;
        Ok(())
    }

    pub fn event(&self, event_id: &str) -> Option<&EventRecord> {
        self.events.find_by_id(event_id)
    }

    pub fn events(&self) -> Vec<&EventRecord> {
        self.events.list()
    }

    /// Case-insensitive substring match on event titles.
    pub fn search_by_title(&self, query: &str) -> Vec<&EventRecord> {
        let needle = query.to_lowercase();
        self.events
            .list()
            .into_iter()
            .filter(|e| e.title.to_lowercase().contains(&needle))
            .collect()
    }

    /// Events starting strictly after `now`, earliest first.
    pub fn upcoming_events(&self, now: DateTime<Utc>) -> Vec<&EventRecord> {
        let mut upcoming: Vec<&EventRecord> = self
            .events
            .list()
            .into_iter()
            .filter(|e| e.interval.start() > now)
            .collect();
        upcoming.sort_by_key(|e| e.interval.start());
        upcoming
    }

    // ── Participants ────────────────────────────────────────────────────────

    pub fn register_participant(
        &mut self,
        event_id: &str,
        participant: Participant,
    ) -> Result<(), RecordError> {
        let event = self
            .events
            .find_by_id_mut(event_id)
            .ok_or_else(|| RecordError::NotFound(event_id.to_string()))?;
        event.register(participant)?;
        Ok(())
    }

    pub fn unregister_participant(
        &mut self,
        event_id: &str,
        participant_id: &str,
    ) -> Result<bool, RecordError> {
        let event = self
            .events
            .find_by_id_mut(event_id)
            .ok_or_else(|| RecordError::NotFound(event_id.to_string()))?;
        Ok(event.unregister(participant_id))
    }

    /// Registered participants, or an empty list for an unknown event.
    pub fn event_participants(&self, event_id: &str) -> &[Participant] {
        self.events
            .find_by_id(event_id)
            .map(EventRecord::participants)
            .unwrap_or(&[])
    }

    // ── Scheduling bridge ───────────────────────────────────────────────────

    /// Fresh copies of all venues whose timelines include every stored,
    /// non-cancelled event.
    pub fn venue_snapshot(&self) -> Vec<VenueInfo> {
        self.venues
            .list()
            .into_iter()
            .map(|v| self.with_current_bookings(v))
            .collect()
    }

    /// Batch-schedule `requests` against a fresh snapshot. Nothing is stored.
    pub fn schedule_requests(
        &self,
        requests: &[EventRequest],
        default_start: DateTime<Utc>,
    ) -> ScheduleResult {
        let mut venues = self.venue_snapshot();
        create_schedule(requests, &mut venues, default_start)
    }

    fn with_current_bookings(&self, venue: &VenueInfo) -> VenueInfo {
        let mut booked: Vec<TimeInterval> = venue.availability.intervals().to_vec();
        booked.extend(
            self.events
                .list()
                .into_iter()
                .filter(|e| e.venue_id == venue.id && e.occupies_venue())
                .map(|e| e.interval),
        );
        venue.clone().with_availability(VenueAvailability::from(booked))
    }
}

