use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use chordscale::prelude::*;

// ---------------------------------------------------------------------------------------------

pub fn explore_all(c: &mut Criterion) {
    let mut group = c.benchmark_group("Harmony");
    let catalog = ScaleCatalog::builtin();
    group.bench_function("Explore", |b| {
        b.iter(|| {
            for definition in catalog.iter() {
                for root in PITCH_CLASSES {
                    black_box(explore(catalog, root, definition.name(), Spelling::Flats).unwrap());
                }
            }
        })
    });
    group.finish();
}

pub fn harmonize_and_extend(c: &mut Criterion) {
    let mut group = c.benchmark_group("Harmony");
    let scale = Scale::try_from((PitchClass::Fs, "harmonic minor")).unwrap();
    group.bench_function("Harmonize", |b| {
        b.iter(|| black_box(harmonize(black_box(scale.notes()))))
    });
    group.bench_function("Extend", |b| {
        b.iter(|| black_box(extend(black_box(scale.notes()))))
    });
    group.finish();
}

pub fn lookup(c: &mut Criterion) {
    let mut group = c.benchmark_group("Harmony");
    let catalog = ScaleCatalog::builtin();
    group.bench_function("Lookup", |b| {
        b.iter(|| {
            black_box(catalog.get("Altered Scale (Super Locrian)"));
            black_box(catalog.get("harm minor"));
            black_box(catalog.get("penta maj"));
        })
    });
    group.bench_function("Parse Numerals", |b| {
        b.iter(|| black_box(Progression::from_numerals("ii7 – V7 – IMaj7 – vi – IV").unwrap()))
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = harmony;
    config = Criterion::default();
    targets = explore_all, harmonize_and_extend, lookup
}
