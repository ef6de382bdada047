//! Property-based tests for the venue timeline gap walk.
//!
//! `earliest_free_slot` is checked against a brute-force hour-by-hour scan over
//! arbitrary booked sets, including unsorted and mutually overlapping ones.

use chrono::{DateTime, Duration, TimeZone, Utc};
use proptest::prelude::*;
use venue_engine::{TimeInterval, VenueAvailability};

// ---------------------------------------------------------------------------
// Strategies
// ---------------------------------------------------------------------------

fn hour(h: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, 0, 0, 0).unwrap() + Duration::hours(i64::from(h))
}

/// Hour-aligned intervals in any order; they may overlap each other.
fn arb_intervals() -> impl Strategy<Value = Vec<TimeInterval>> {
    prop::collection::vec((0u32..48, 1u32..8), 0..10).prop_map(|pairs| {
        pairs
            .into_iter()
            .map(|(start, len)| TimeInterval::new(hour(start), hour(start + len)).unwrap())
            .collect()
    })
}

fn config() -> ProptestConfig {
    ProptestConfig {
        cases: 1000,
        ..ProptestConfig::default()
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// First hour-aligned start at or after `floor` whose window overlaps nothing.
/// Every booking ends before hour 56, so the scan always terminates.
fn brute_force_slot(booked: &[TimeInterval], floor: u32, duration: u32) -> DateTime<Utc> {
    (floor..)
        .map(|h| TimeInterval::new(hour(h), hour(h + duration)).unwrap())
        .find(|candidate| booked.iter().all(|b| !b.overlaps(candidate)))
        .map(|candidate| candidate.start())
        .unwrap()
}

// ---------------------------------------------------------------------------
// Properties
// ---------------------------------------------------------------------------

proptest! {
    #![proptest_config(config())]

    #[test]
    fn gap_walk_matches_brute_force_scan(
        booked in arb_intervals(),
        floor in 0u32..60,
        duration in 1u32..10,
    ) {
        let availability = VenueAvailability::from(booked.clone());
        let found = availability
            .earliest_free_slot(hour(floor), Duration::hours(i64::from(duration)));

        prop_assert_eq!(found, Some(brute_force_slot(&booked, floor, duration)));
    }

    #[test]
    fn is_free_matches_pairwise_check(
        booked in arb_intervals(),
        start in 0u32..60,
        len in 1u32..10,
    ) {
        let availability = VenueAvailability::from(booked.clone());
        let candidate = TimeInterval::new(hour(start), hour(start + len)).unwrap();
        let expected = booked.iter().all(|b| !b.overlaps(&candidate));

        prop_assert_eq!(availability.is_free(&candidate), expected);
    }
}
