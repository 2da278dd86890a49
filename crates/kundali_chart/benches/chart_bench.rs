use chrono::{TimeZone, Utc};
use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_chart::{BirthDetails, ChartOptions, compute};
use kundali_ephem::{AnalyticEphemeris, EphemerisProvider};

fn chart_bench(c: &mut Criterion) {
    let birth = BirthDetails::new(
        Utc.with_ymd_and_hms(1990, 5, 15, 6, 30, 0).unwrap(),
        28.6139,
        77.2090,
    );
    let as_of = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let opts = ChartOptions::default();

    let mut group = c.benchmark_group("chart");
    group.bench_function("compute", |b| {
        b.iter(|| compute(black_box(&birth), as_of, &opts))
    });
    group.bench_function("all_body_states", |b| {
        b.iter(|| AnalyticEphemeris.all_body_states(black_box(2_448_026.77)))
    });
    group.finish();
}

criterion_group!(benches, chart_bench);
criterion_main!(benches);
