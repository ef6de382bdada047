//! Property-based tests for the scheduling engine using proptest.
//!
//! These check invariants that must hold for *any* request/venue mix, not just
//! the hand-written scenarios in `scheduler_tests.rs`.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use venue_engine::{
    create_schedule, find_first_available_slot, overlaps, plan_schedule, EventRequest,
    TimeInterval, VenueAvailability, VenueInfo,
};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn base() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, 0, 0, 0).unwrap()
}

fn hour(h: u32) -> DateTime<Utc> {
    base() + Duration::hours(i64::from(h))
}

/// Non-overlapping pre-existing bookings built from (gap, length) pairs.
fn arb_bookings() -> impl Strategy<Value = Vec<TimeInterval>> {
    prop::collection::vec((0u32..6, 1u32..5), 0..5).prop_map(|pairs| {
        let mut cursor = 0;
        pairs
            .into_iter()
            .map(|(gap, len)| {
                let start = cursor + gap;
                cursor = start + len;
                TimeInterval::new(hour(start), hour(cursor)).unwrap()
            })
            .collect()
    })
}

fn arb_venues() -> impl Strategy<Value = Vec<VenueInfo>> {
    prop::collection::vec((0u32..40, arb_bookings()), 1..5).prop_map(|specs| {
        specs
            .into_iter()
            .enumerate()
            .map(|(i, (capacity, booked))| {
                VenueInfo::new(format!("v{i}"), format!("Venue {i}"), capacity, "Campus")
                    .with_availability(VenueAvailability::from(booked))
            })
            .collect()
    })
}

fn arb_requests() -> impl Strategy<Value = Vec<EventRequest>> {
    prop::collection::vec((1u32..7, 1u32..40, prop::option::of(0u32..48)), 0..12).prop_map(
        |specs| {
            specs
                .into_iter()
                .enumerate()
                .map(|(i, (hours, capacity, preferred))| {
                    let r = EventRequest::new(format!("e{i}"), format!("Event {i}"), hours, capacity);
                    match preferred {
                        Some(h) => r.with_preferred_start(hour(h)),
                        None => r,
                    }
                })
                .collect()
        },
    )
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 256,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn no_double_booking(venues in arb_venues(), requests in arb_requests()) {
        let mut venues = venues;
        let result = create_schedule(&requests, &mut venues, hour(8));

        for venue in &venues {
            let all = venue.availability.intervals();
            for w in all.windows(2) {
                prop_assert!(!overlaps(&w[0], &w[1]), "timeline overlap in {}", venue.id);
            }
            for a in result.assignments_for_venue(&venue.id) {
                let interval = TimeInterval::new(a.start, a.end).unwrap();
                prop_assert!(all.contains(&interval), "assignment missing from venue timeline");
            }
        }

        for (i, a) in result.scheduled.iter().enumerate() {
            for b in &result.scheduled[i + 1..] {
                if a.venue_id == b.venue_id {
                    prop_assert!(a.end <= b.start || b.end <= a.start,
                        "{} and {} overlap in {}", a.event_id, b.event_id, a.venue_id);
                }
            }
        }
    }

    #[test]
    fn capacity_respected(venues in arb_venues(), requests in arb_requests()) {
        let result = plan_schedule(&requests, &venues, hour(8));
        for a in &result.scheduled {
            let venue = venues.iter().find(|v| v.id == a.venue_id).unwrap();
            let request = requests.iter().find(|r| r.id == a.event_id).unwrap();
            prop_assert!(request.required_capacity <= venue.capacity);
        }
    }

    #[test]
    fn partition_is_complete(venues in arb_venues(), requests in arb_requests()) {
        let result = plan_schedule(&requests, &venues, hour(8));

        let mut seen: Vec<&str> = result.scheduled.iter().map(|a| a.event_id.as_str()).collect();
        seen.extend(result.unscheduled_ids());
        seen.sort_unstable();

        let mut expected: Vec<&str> = requests.iter().map(|r| r.id.as_str()).collect();
        expected.sort_unstable();

        prop_assert_eq!(seen, expected);
    }

    #[test]
    fn deterministic(venues in arb_venues(), requests in arb_requests()) {
        let first = plan_schedule(&requests, &venues, hour(8));
        let second = plan_schedule(&requests, &venues, hour(8));
        prop_assert_eq!(first, second);
    }

    #[test]
    fn assignments_respect_search_floor_and_duration(venues in arb_venues(), requests in arb_requests()) {
        let result = plan_schedule(&requests, &venues, hour(8));
        for a in &result.scheduled {
            let request = requests.iter().find(|r| r.id == a.event_id).unwrap();
            let floor = request.preferred_start.unwrap_or(hour(8));
            prop_assert!(a.start >= floor);
            prop_assert_eq!(a.end - a.start, request.duration());
        }
    }

    #[test]
    fn rebooked_venue_never_offers_slot_inside_new_booking(
        venues in arb_venues(),
        duration in 1u32..7,
        floor in 0u32..24,
    ) {
        let mut venues = venues;
        let found = find_first_available_slot(&venues, 1, hour(floor), duration)
            .unwrap()
            .map(|m| (m.venue_index, m.start));
        if let Some((idx, start)) = found {
            let booked = TimeInterval::from_start(start, Duration::hours(i64::from(duration))).unwrap();
            venues[idx].availability.book(booked).unwrap();

            let next = venues[idx]
                .availability
                .earliest_free_slot(hour(floor), Duration::hours(i64::from(duration)))
                .unwrap();
            prop_assert!(!booked.contains(next));
        }
    }

    #[test]
    fn slot_finder_is_minimal(
        venues in arb_venues(),
        capacity in 1u32..40,
        duration in 1u32..7,
        floor in 0u32..24,
    ) {
        let found = find_first_available_slot(&venues, capacity, hour(floor), duration).unwrap();
        let dur = Duration::hours(i64::from(duration));

        match found {
            Some(m) => {
                prop_assert!(m.venue.capacity >= capacity);
                let window = TimeInterval::from_start(m.start, dur).unwrap();
                prop_assert!(m.venue.availability.is_free(&window));
                // No capable venue offers an earlier start; earlier-listed venues
                // do not tie.
                for (i, v) in venues.iter().enumerate() {
                    if v.capacity < capacity {
                        continue;
                    }
                    let start = v.availability.earliest_free_slot(hour(floor), dur).unwrap();
                    prop_assert!(start >= m.start);
                    if i < m.venue_index {
                        prop_assert!(start > m.start);
                    }
                }
            }
            None => {
                prop_assert!(venues.iter().all(|v| v.capacity < capacity));
            }
        }
    }
}
