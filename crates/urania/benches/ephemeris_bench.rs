use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::chart::{BirthInput, NatalChartService, ServiceConfig};
use urania::ephemeris::{AnalyticEphemeris, EphemerisBackend};
use urania::houses::{HouseCalculator, HouseSystem};

fn bench_analytic_planets(c: &mut Criterion) {
    let eph = AnalyticEphemeris::new();

    c.bench_function("analytic_compute_planets", |b| {
        b.iter(|| eph.compute_planets(black_box(2446470.5)))
    });
}

fn bench_houses(c: &mut Criterion) {
    let calc = HouseCalculator::new();

    c.bench_function("compute_houses_placidus", |b| {
        b.iter(|| {
            calc.compute_houses(
                black_box(2446470.5),
                black_box(40.7128),
                black_box(-74.0060),
                HouseSystem::Placidus,
            )
        })
    });
}

fn bench_natal_chart(c: &mut Criterion) {
    let service = NatalChartService::new(ServiceConfig::analytic());
    service.init_blocking();
    let input = BirthInput::new("15.03.1985", "14:20", 40.7128, -74.0060, "placidus");

    c.bench_function("calculate_natal_chart", |b| {
        b.iter(|| service.calculate_natal_chart(black_box(&input)))
    });
}

criterion_group!(benches, bench_analytic_planets, bench_houses, bench_natal_chart);
criterion_main!(benches);
