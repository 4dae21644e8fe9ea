//! Criterion benchmarks for the itinerary selector.
//!
//! Measures build time across candidate pool sizes (100, 500, 2000 events)
//! drawn from a fixed roster of touring performers, so that collisions and
//! repeat appearances are frequent.
//!
//! Run benchmarks with:
//! ```bash
//! cargo bench --package encore-core
//! ```

// Criterion macros generate code that triggers missing_docs warnings.
#![allow(missing_docs, reason = "Criterion macros generate undocumented code")]

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use encore_core::{Event, ItinerarySelector};

/// Candidate pool sizes to benchmark.
const POOL_SIZES: &[usize] = &[100, 500, 2000];

/// Distinct performers in the synthetic roster.
const ROSTER: usize = 64;

/// Distinct days the synthetic tour spans.
const DAYS: usize = 90;

/// Build a deterministic candidate pool of `size` events.
///
/// Performers and days cycle with coprime strides so the pool mixes
/// single-appearance acts, touring acts, and contested dates.
#[expect(
    clippy::cast_precision_loss,
    clippy::float_arithmetic,
    clippy::integer_division,
    clippy::integer_division_remainder_used,
    reason = "synthetic dates and coordinates are derived from small indices"
)]
fn candidate_pool(size: usize) -> Vec<Event> {
    (0..size)
        .map(|idx| {
            let performer = format!("act-{:02}", (idx * 7) % ROSTER);
            let day = (idx * 11) % DAYS;
            let date = format!("2024-{:02}-{:02}", 1 + day / 30, 1 + day % 28);
            let latitude = 35.0 + (idx % 17) as f64 * 0.75;
            let longitude = -9.0 + (idx % 23) as f64 * 0.9;
            Event::new(performer, date, format!("venue-{idx}"), latitude, longitude)
        })
        .collect()
}

fn bench_build_times(c: &mut Criterion) {
    let mut group = c.benchmark_group("itinerary_build");
    for &size in POOL_SIZES {
        let events = candidate_pool(size);
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), &events, |b, events| {
            b.iter(|| ItinerarySelector.build(std::hint::black_box(events)));
        });
    }
    group.finish();
}

criterion_group!(benches, bench_build_times);
criterion_main!(benches);
