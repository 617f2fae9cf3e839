use criterion::{black_box, criterion_group, criterion_main, Criterion};
use urania::aspects::AspectCalculator;
use urania::ephemeris::{AnalyticEphemeris, EphemerisBackend};

fn bench_compute_aspects(c: &mut Criterion) {
    let calculator = AspectCalculator::new();
    let planets = AnalyticEphemeris::new().compute_planets(2446470.5);

    c.bench_function("compute_aspects_12_bodies", |b| {
        b.iter(|| calculator.compute_aspects(black_box(&planets)))
    });
}

criterion_group!(benches, bench_compute_aspects);
criterion_main!(benches);
