//! Benchmarks for trait application and frame resolution.
//!
//! Run with: cargo bench -p bulletin-layout --bench layout_bench

use bulletin_core::geometry::{EdgeInsets, Size};
use bulletin_core::size_class::TraitCollection;
use bulletin_layout::LayoutEngine;
use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

fn bench_apply_traits(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/apply_traits");

    group.bench_function("rotate_phone_tablet", |b| {
        let mut engine = LayoutEngine::default();
        b.iter(|| {
            engine.apply_traits(black_box(TraitCollection::phone_portrait()));
            engine.apply_traits(black_box(TraitCollection::tablet()));
        })
    });

    group.bench_function("idempotent_reapply", |b| {
        let mut engine = LayoutEngine::default();
        engine.apply_traits(TraitCollection::tablet());
        b.iter(|| black_box(engine.apply_traits(black_box(TraitCollection::tablet()))))
    });

    group.finish();
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("layout/resolve");

    for (name, traits, view) in [
        ("phone", TraitCollection::phone_portrait(), Size::new(375.0, 812.0)),
        ("tablet", TraitCollection::tablet(), Size::new(1024.0, 1366.0)),
    ] {
        let mut engine = LayoutEngine::default();
        engine.apply_traits(traits);
        engine.update_safe_area(EdgeInsets::new(44.0, 0.0, 34.0, 0.0));
        group.bench_function(name, |b| {
            b.iter(|| black_box(engine.resolve(black_box(view), |width| width * 0.5)))
        });
    }

    group.finish();
}

criterion_group!(benches, bench_apply_traits, bench_resolve);
criterion_main!(benches);
