//! Full derived state of a root and scale selection, as displayed by a scale explorer.

use crate::{
    chord::Harmonizer,
    diagnostics::{validate_chord_scale, Diagnostic},
    extended::{extend_with_spelling, ExtendedHarmony},
    progression::{common_progressions, resolve_progressions, ResolvedProgression},
    ChordEntry, PitchClass, Scale, ScaleCatalog, ScaleNote, Spelling,
};

// -------------------------------------------------------------------------------------------------

/// Everything derived from a root, a scale name and a spelling preference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Exploration {
    pub scale: Scale,
    pub spelling: Spelling,
    /// Scale tones with their degree labels.
    pub degrees: Vec<ScaleNote>,
    /// Valid diatonic seventh chords. Empty for non heptatonic scales.
    pub chord_scale: Vec<ChordEntry>,
    pub extended: ExtendedHarmony,
    /// Common progressions of the scale's family, resolved against the chord scale.
    pub progressions: Vec<ResolvedProgression>,
    /// Chords and progressions which got dropped.
    pub diagnostics: Vec<Diagnostic>,
}

impl Exploration {
    /// Scale note names in the exploration's spelling.
    pub fn note_names(&self) -> Vec<&'static str> {
        self.scale.note_names(self.spelling)
    }
}

/// Recompute the full derived state of a root and scale selection. Fails when the scale name is
/// not part of the given catalog.
pub fn explore(
    catalog: &ScaleCatalog,
    root: PitchClass,
    scale_name: &str,
    spelling: Spelling,
) -> Result<Exploration, String> {
    let definition = catalog
        .get(scale_name)
        .ok_or_else(|| format!("Unknown scale '{}'", scale_name))?;
    let scale = Scale::new(root, definition);
    log::debug!("Exploring {} with {}", scale, spelling);

    let mut diagnostics = Vec::new();
    let (chord_scale, extended) = if scale.is_heptatonic() {
        let chords = Harmonizer::default()
            .with_spelling(spelling)
            .harmonize(scale.notes());
        let validated = validate_chord_scale(chords);
        diagnostics.extend(validated.diagnostics);
        (
            validated.items,
            extend_with_spelling(scale.notes(), spelling),
        )
    } else {
        (vec![], ExtendedHarmony::default())
    };

    let progressions = if chord_scale.is_empty() {
        vec![]
    } else {
        let resolved = resolve_progressions(&common_progressions(definition), &chord_scale);
        diagnostics.extend(resolved.diagnostics);
        resolved.items
    };

    Ok(Exploration {
        degrees: scale.notes_with_degrees(),
        scale,
        spelling,
        chord_scale,
        extended,
        progressions,
        diagnostics,
    })
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::extended::HarmonyCategory;
    use pretty_assertions::assert_eq;

    #[test]
    fn heptatonic() -> Result<(), String> {
        let exploration = explore(
            ScaleCatalog::builtin(),
            PitchClass::F,
            "Aeolian",
            Spelling::Flats,
        )?;
        assert_eq!(
            exploration.note_names(),
            vec!["F", "G", "Ab", "Bb", "C", "Db", "Eb"]
        );
        assert_eq!(exploration.degrees[2].degree, "♭3");
        assert_eq!(exploration.chord_scale.len(), 7);
        assert_eq!(exploration.chord_scale[2].symbol, "Abm7");
        assert_eq!(
            exploration.extended.get(HarmonyCategory::SecondaryDominants).len(),
            6
        );
        // the minor line cliché can't be resolved
        assert_eq!(exploration.progressions.len(), 5);
        assert_eq!(exploration.diagnostics.len(), 1);
        Ok(())
    }

    #[test]
    fn other_scales() -> Result<(), String> {
        let exploration = explore(
            ScaleCatalog::builtin(),
            PitchClass::A,
            "minor pentatonic",
            Spelling::Sharps,
        )?;
        assert_eq!(exploration.note_names(), vec!["A", "C", "D", "E", "G"]);
        assert!(exploration.chord_scale.is_empty());
        assert!(exploration.extended.is_empty());
        assert!(exploration.progressions.is_empty());
        assert!(exploration.diagnostics.is_empty());

        assert!(explore(
            ScaleCatalog::builtin(),
            PitchClass::A,
            "Wurst",
            Spelling::Sharps
        )
        .is_err());
        Ok(())
    }
}
