//! Music theory computations for a scale and chord explorer: scales from a root and a scale
//! definition, their diatonic seventh chords, extended harmony, common progressions and voiced,
//! scheduled notes for playback.

pub mod pitch;
pub use pitch::{convert_spelling, Octave, PitchClass, Spelling, VoicedNote, PITCH_CLASSES};

pub mod catalog;
pub use catalog::{ScaleCatalog, ScaleDefinition, Step};

pub mod scale;
pub use scale::{generate_scale, Scale, ScaleNote};

pub mod chord;
pub use chord::{harmonize, ChordEntry, Harmonizer, QualityTable};

pub mod extended;
pub use extended::{extend, ExtendedChord, ExtendedHarmony, HarmonyCategory};

pub mod voicing;
pub use voicing::{voice, Schedule, ScheduledEvent, VoicingConfig};

pub mod progression;
pub use progression::{resolve_progression, Progression, ProgressionError};

pub mod diagnostics;
pub use diagnostics::{Diagnostic, Validated};

pub mod player;
pub use player::{NotePlayer, Performer};

pub mod explorer;
pub use explorer::{explore, Exploration};

pub mod prelude;

// -------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scale_to_voiced_progression() -> Result<(), String> {
        let scale = Scale::try_from((PitchClass::try_from("Eb")?, "major"))?;
        let chords = harmonize(scale.notes());
        let degrees = Progression::FIFTIES
            .resolve(&chords)
            .map_err(|err| err.to_string())?;

        let config = VoicingConfig::default()
            .with_density(voicing::Density::Triad)
            .with_range(voicing::VoicingRange::Spread);
        let voiced = degrees
            .iter()
            .map(|chord| {
                voice(chord, &config)
                    .iter()
                    .map(|note| note.name(Spelling::Flats))
                    .collect::<Vec<_>>()
                    .join(" ")
            })
            .collect::<Vec<_>>();
        assert_eq!(
            voiced,
            vec![
                "Eb3 G3 Bb4",
                "C3 Eb3 G4",
                "Ab3 C3 Eb4",
                "Bb3 D3 F4"
            ]
        );
        Ok(())
    }
}
