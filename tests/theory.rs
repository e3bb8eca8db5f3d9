use pretty_assertions::assert_eq;

use chordscale::prelude::*;

// -------------------------------------------------------------------------------------------------

#[test]
fn scales_follow_their_intervals() {
    for definition in ScaleCatalog::builtin().iter() {
        for root in PITCH_CLASSES {
            let notes = generate_scale(root, definition.intervals());
            assert_eq!(notes.len(), definition.intervals().len());
            for (index, interval) in definition.intervals().iter().enumerate() {
                let next = notes[(index + 1) % notes.len()];
                assert_eq!(notes[index].semitones_to(next), interval % 12);
            }
        }
    }
}

#[test]
fn spelling_round_trips() {
    for pitch in PITCH_CLASSES {
        for name in [pitch.name(Spelling::Sharps), pitch.name(Spelling::Flats)] {
            assert_eq!(
                convert_spelling(convert_spelling(name, true), false),
                pitch.name(Spelling::Sharps)
            );
            let flats = convert_spelling(name, true);
            assert_eq!(convert_spelling(flats, true), flats);
            assert_eq!(
                convert_spelling(convert_spelling(flats, false), true),
                flats
            );
        }
    }
}

#[test]
fn c_ionian_chord_scale() -> Result<(), String> {
    let scale = Scale::try_from((PitchClass::C, "Ionian (Major)"))?;
    let chords = harmonize(scale.notes())
        .iter()
        .map(|chord| format!("{} ({})", chord.symbol, chord.root_position(Spelling::Sharps)))
        .collect::<Vec<_>>();
    assert_eq!(
        chords,
        vec![
            "CMaj7 (C-E-G-B)",
            "Dm7 (D-F-A-C)",
            "Em7 (E-G-B-D)",
            "FMaj7 (F-A-C-E)",
            "G7 (G-B-D-F)",
            "Am7 (A-C-E-G)",
            "Bm7b5 (B-D-F-A)",
        ]
    );
    Ok(())
}

#[test]
fn voicings() {
    use PitchClass::*;
    let triad = VoicingConfig::default()
        .with_density(Density::Triad)
        .with_range(VoicingRange::Close);
    assert_eq!(
        voice(&[C, E, G], &triad),
        vec![
            VoicedNote::new(C, 3),
            VoicedNote::new(E, 3),
            VoicedNote::new(G, 3)
        ]
    );

    let drop2 = VoicingConfig::default()
        .with_density(Density::Seventh)
        .with_range(VoicingRange::Drop2);
    let voiced = voice(&[G, B, D, F], &drop2);
    assert_eq!(voiced[1], VoicedNote::new(B, 2));
    for index in [0, 2, 3] {
        assert_eq!(voiced[index].octave, Octave::from(3_i8));
    }
}

#[test]
fn progressions() -> Result<(), String> {
    let scale = Scale::try_from((PitchClass::G, "mixolydian"))?;
    let chord_scale = harmonize(scale.notes());
    let chords = resolve_progression(&[0, 3, 4], &chord_scale).map_err(|err| err.to_string())?;
    assert_eq!(
        chords,
        vec![
            chord_scale[0].notes.clone(),
            chord_scale[3].notes.clone(),
            chord_scale[4].notes.clone(),
        ]
    );
    assert!(resolve_progression(&[0, 3, 4, 9], &chord_scale).is_err());
    Ok(())
}

#[test]
fn six_secondary_dominants() {
    for definition in ScaleCatalog::builtin().iter() {
        if !definition.is_heptatonic() {
            continue;
        }
        for root in PITCH_CLASSES {
            let harmony = extend(&generate_scale(root, definition.intervals()));
            assert_eq!(
                harmony.get(HarmonyCategory::SecondaryDominants).len(),
                6,
                "{} {}",
                root,
                definition.name()
            );
        }
    }
}

#[test]
fn explore_and_perform() -> Result<(), Box<dyn std::error::Error>> {
    struct Counter(usize);
    impl NotePlayer for Counter {
        fn play_note(&mut self, _note: &str, _length: std::time::Duration) -> anyhow::Result<()> {
            self.0 += 1;
            Ok(())
        }
        fn play_chord(
            &mut self,
            notes: &[String],
            _length: std::time::Duration,
        ) -> anyhow::Result<()> {
            self.0 += notes.len();
            Ok(())
        }
        fn release_all(&mut self) -> anyhow::Result<()> {
            Ok(())
        }
        fn wait(&mut self, _duration: std::time::Duration) -> anyhow::Result<()> {
            Ok(())
        }
    }

    let exploration = explore(
        ScaleCatalog::builtin(),
        PitchClass::try_from("D")?,
        "harm minor",
        Spelling::Flats,
    )?;
    assert_eq!(exploration.scale.definition().name(), "Harmonic Minor");
    assert_eq!(exploration.progressions.len(), 5);

    let mut performer = Performer::new(Counter(0)).with_spelling(Spelling::Flats);
    let config = VoicingConfig::default();
    for resolved in &exploration.progressions {
        performer.play_progression(&resolved.chords, &config)?;
    }
    // 3 + 3 + 4 + 4 + 4 four note chords
    assert_eq!(performer.player().0, 18 * 4);
    Ok(())
}
