use chrono::{Duration, TimeZone, Utc};
use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use std::hint::black_box;
use venue_engine::{plan_schedule, EventRequest, VenueInfo};

fn fixture(requests: usize, venues: usize) -> (Vec<EventRequest>, Vec<VenueInfo>) {
    let base = Utc.with_ymd_and_hms(2026, 3, 16, 8, 0, 0).unwrap();
    let requests = (0..requests)
        .map(|i| {
            let hours = (i % 4) as u32 + 1;
            let capacity = (i % 7) as u32 * 15 + 10;
            EventRequest::new(format!("e{i}"), format!("Event {i}"), hours, capacity)
                .with_preferred_start(base + Duration::hours((i % 24) as i64))
        })
        .collect();
    let venues = (0..venues)
        .map(|i| VenueInfo::new(format!("v{i}"), format!("Venue {i}"), (i as u32 + 1) * 20, "Campus"))
        .collect();
    (requests, venues)
}

fn bench_plan_schedule(c: &mut Criterion) {
    let base = Utc.with_ymd_and_hms(2026, 3, 16, 8, 0, 0).unwrap();
    let mut group = c.benchmark_group("plan_schedule");
    for &(n, m) in &[(50usize, 5usize), (200, 10), (1000, 20)] {
        let (requests, venues) = fixture(n, m);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("{n}x{m}")),
            &(requests, venues),
            |b, (requests, venues)| b.iter(|| plan_schedule(black_box(requests), black_box(venues), base)),
        );
    }
    group.finish();
}

criterion_group!(benches, bench_plan_schedule);
criterion_main!(benches);
