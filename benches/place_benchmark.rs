//! Placement benchmark: Measure evasive placement throughput.
//!
//! The placer runs on every hover of the runaway button; even the
//! worst case (full retry budget plus fallback) should be trivially fast.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use keepsake::{Placer, PlacerConfig, Rect, Size};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn place_unconstrained(c: &mut Criterion) {
    let placer = Placer::new();
    let movable = Size::new(80, 40);
    let region = Size::new(300, 100);

    c.bench_function("place_unconstrained", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| {
            placer.place(
                &mut rng,
                black_box(movable),
                black_box(region),
                black_box(None),
            )
        })
    });
}

fn place_with_safe_zone(c: &mut Criterion) {
    let placer = Placer::new();
    let movable = Size::new(80, 40);
    let region = Size::new(300, 100);
    let safe = Rect::new(90, 20, 120, 60);

    c.bench_function("place_with_safe_zone", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| {
            placer.place(
                &mut rng,
                black_box(movable),
                black_box(region),
                black_box(Some(safe)),
            )
        })
    });
}

fn place_exhausting_retries(c: &mut Criterion) {
    // Zone covers the whole region: every draw overlaps, the full retry
    // budget burns, and the deterministic fallback engages.
    let placer = Placer::with_config(PlacerConfig::default());
    let movable = Size::new(80, 40);
    let region = Size::new(300, 100);
    let safe = Rect::new(0, 0, 300, 100);

    c.bench_function("place_exhausting_retries", |b| {
        let mut rng = SmallRng::seed_from_u64(42);
        b.iter(|| {
            placer.place(
                &mut rng,
                black_box(movable),
                black_box(region),
                black_box(Some(safe)),
            )
        })
    });
}

criterion_group!(
    benches,
    place_unconstrained,
    place_with_safe_zone,
    place_exhausting_retries
);
criterion_main!(benches);
