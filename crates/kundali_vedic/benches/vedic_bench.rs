use criterion::{Criterion, black_box, criterion_group, criterion_main};
use kundali_vedic::dasha::{DashaLevel, vimshottari, vimshottari_hierarchy};
use kundali_vedic::{
    NavamsaConvention, lagna, nakshatra_from_longitude, navamsa, rashi_from_longitude,
    tropical_ascendant_deg,
};

fn zodiac_bench(c: &mut Criterion) {
    let lon = 123.456;

    let mut group = c.benchmark_group("zodiac");
    group.bench_function("rashi_from_longitude", |b| {
        b.iter(|| rashi_from_longitude(black_box(lon)))
    });
    group.bench_function("nakshatra_from_longitude", |b| {
        b.iter(|| nakshatra_from_longitude(black_box(lon)))
    });
    group.bench_function("navamsa", |b| {
        b.iter(|| navamsa(black_box(lon), NavamsaConvention::Standard))
    });
    group.finish();
}

fn lagna_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("lagna");
    group.bench_function("tropical_ascendant_deg", |b| {
        b.iter(|| tropical_ascendant_deg(black_box(211.75), black_box(28.61)))
    });
    group.bench_function("lagna", |b| {
        b.iter(|| lagna(black_box(2_460_000.5), 28.61, 77.21, 89.5))
    });
    group.finish();
}

fn dasha_bench(c: &mut Criterion) {
    let birth = 2_448_026.770_833_333;

    let mut group = c.benchmark_group("dasha");
    group.bench_function("vimshottari_current", |b| {
        b.iter(|| vimshottari(black_box(birth), black_box(200.0), birth + 12_000.0))
    });
    group.bench_function("vimshottari_hierarchy_pratyantar", |b| {
        b.iter(|| vimshottari_hierarchy(black_box(birth), 200.0, DashaLevel::Pratyantar))
    });
    group.finish();
}

criterion_group!(benches, zodiac_bench, lagna_bench, dasha_bench);
criterion_main!(benches);
