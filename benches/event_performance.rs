use chrono::{Duration, NaiveDate};
use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use std::hint::black_box;
use sun_times::{SolarEvent, almanac};

fn benchmark_single_event(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2023, 6, 21).unwrap();
    let lat = 37.7749;
    let lon = -122.4194;

    c.bench_function("sunrise_single", |b| {
        b.iter(|| {
            almanac::sunrise_time_utc(black_box(date), black_box(lat), black_box(lon)).unwrap()
        })
    });

    c.bench_function("sunrise_hours_only", |b| {
        b.iter(|| {
            almanac::sunrise_hours_utc(
                black_box(2023),
                black_box(6),
                black_box(21),
                black_box(lat),
                black_box(lon),
            )
            .unwrap()
        })
    });
}

fn benchmark_year_sweep(c: &mut Criterion) {
    let mut group = c.benchmark_group("year_sweep");
    let start = NaiveDate::from_ymd_opt(2023, 1, 1).unwrap();

    // Both events for every day of the year at one location, the typical
    // almanac-table workload.
    for days in [30u64, 365] {
        group.throughput(Throughput::Elements(days * 2));
        group.bench_with_input(BenchmarkId::new("both_events", days), &days, |b, &days| {
            b.iter(|| {
                for offset in 0..days {
                    let date = start + Duration::days(offset as i64);
                    for event in [SolarEvent::Sunrise, SolarEvent::Sunset] {
                        let _ = almanac::event_time_utc(
                            black_box(date),
                            black_box(51.21),
                            black_box(21.01),
                            black_box(event),
                        )
                        .unwrap();
                    }
                }
            })
        });
    }

    group.finish();
}

fn benchmark_coordinate_grid(c: &mut Criterion) {
    let date = NaiveDate::from_ymd_opt(2023, 9, 23).unwrap();
    let coordinates: Vec<(f64, f64)> = (0..100)
        .map(|i| {
            let lat = -60.0 + (i as f64) * 1.2;
            let lon = -180.0 + (i as f64) * 3.6;
            (lat, lon)
        })
        .collect();

    let mut group = c.benchmark_group("coordinate_grid");
    group.throughput(Throughput::Elements(coordinates.len() as u64));
    group.bench_function("sunrise_100_locations", |b| {
        b.iter(|| {
            for &(lat, lon) in &coordinates {
                let _ = almanac::sunrise_time_utc(black_box(date), black_box(lat), black_box(lon));
            }
        })
    });
    group.finish();
}

criterion_group!(
    benches,
    benchmark_single_event,
    benchmark_year_sweep,
    benchmark_coordinate_grid
);
criterion_main!(benches);
