use criterion::{Criterion, black_box, criterion_group, criterion_main};
use ziwei_calendar::{
    PillarOptions, SolarDate, SolarTerm, TimeIndex, lunar_to_solar, pillars, solar_term_date,
    solar_to_lunar,
};

fn lunar_bench(c: &mut Criterion) {
    let date = SolarDate {
        year: 2000,
        month: 8,
        day: 16,
    };

    let mut group = c.benchmark_group("lunar");
    group.bench_function("solar_to_lunar", |b| {
        b.iter(|| solar_to_lunar(black_box(date)))
    });
    group.bench_function("lunar_to_solar", |b| {
        b.iter(|| lunar_to_solar(black_box(2000), 7, 17, false))
    });
    group.finish();
}

fn solar_term_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("solar_term");
    group.bench_function("lichun", |b| {
        b.iter(|| solar_term_date(black_box(2024), SolarTerm::LiChun))
    });
    group.finish();
}

fn pillars_bench(c: &mut Criterion) {
    let date = SolarDate {
        year: 2000,
        month: 8,
        day: 16,
    };
    let time = TimeIndex::EARLY_ZI;

    let mut group = c.benchmark_group("pillars");
    group.bench_function("exact", |b| {
        b.iter(|| pillars(black_box(date), time, PillarOptions::default()))
    });
    group.finish();
}

criterion_group!(benches, lunar_bench, solar_term_bench, pillars_bench);
criterion_main!(benches);
