use std::hint::black_box;

use criterion::{criterion_group, Criterion};

use chordscale::prelude::*;

// ---------------------------------------------------------------------------------------------

fn create_configs() -> Vec<VoicingConfig> {
    let mut configs = Vec::new();
    for density in [
        Density::Triad,
        Density::Seventh,
        Density::Shell,
        Density::Extended,
    ] {
        for range in [
            VoicingRange::Close,
            VoicingRange::Spread,
            VoicingRange::Drop2,
            VoicingRange::Drop3,
            VoicingRange::Quartal,
        ] {
            for style in [
                PlaybackStyle::Block,
                PlaybackStyle::Arpeggio,
                PlaybackStyle::Descending,
                PlaybackStyle::Broken,
            ] {
                configs.push(
                    VoicingConfig::default()
                        .with_density(density)
                        .with_range(range)
                        .with_style(style),
                );
            }
        }
    }
    configs
}

// ---------------------------------------------------------------------------------------------

pub fn voice_chords(c: &mut Criterion) {
    let mut group = c.benchmark_group("Voicing");
    let configs = create_configs();
    let scale = Scale::try_from((PitchClass::Ds, "lydian dominant")).unwrap();
    let harmony = extend(scale.notes());
    group.bench_function("Voice & Schedule", |b| {
        b.iter(|| {
            for (_, chords) in harmony.iter() {
                for chord in chords {
                    for config in &configs {
                        black_box(voice_and_schedule(&chord.notes, config));
                    }
                }
            }
        })
    });
    group.bench_function("Voice Names", |b| {
        let names = ["Db", "F", "Ab", "C", "Eb", "G", "Bb"];
        b.iter(|| {
            for config in &configs {
                black_box(voice_names(&names, config));
            }
        })
    });
    group.finish();
}

pub fn schedule_progressions(c: &mut Criterion) {
    let mut group = c.benchmark_group("Voicing");
    let scale = Scale::try_from((PitchClass::A, "aeolian")).unwrap();
    let chord_scale = harmonize(scale.notes());
    let progressions = common_progressions(scale.definition());
    let config = VoicingConfig::default().with_range(VoicingRange::Drop2);
    group.bench_function("Schedule Progressions", |b| {
        b.iter(|| {
            let resolved = resolve_progressions(&progressions, &chord_scale);
            for progression in resolved.items {
                black_box(schedule_progression(&progression.chords, &config));
            }
        })
    });
    group.finish();
}

// ---------------------------------------------------------------------------------------------

criterion_group! {
    name = voicing;
    config = Criterion::default();
    targets = voice_chords, schedule_progressions
}
