//! Musical scales based on a root `PitchClass` and a `ScaleDefinition`.

use crate::{PitchClass, ScaleCatalog, ScaleDefinition, Spelling};

// -------------------------------------------------------------------------------------------------

/// Generate the pitch classes of a scale: starting at `root`, emit the current pitch and advance
/// by each interval in turn. The last advance, which wraps back to the root, is not emitted, so
/// the result has as many notes as there are intervals.
pub fn generate_scale(root: PitchClass, intervals: &[u8]) -> Vec<PitchClass> {
    intervals
        .iter()
        .scan(root.index() as i32, |index, interval| {
            let pitch = PitchClass::from_semitone(*index);
            *index += *interval as i32;
            Some(pitch)
        })
        .collect()
}

// -------------------------------------------------------------------------------------------------

/// A scale tone with its degree label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleNote {
    pub note: PitchClass,
    pub degree: &'static str,
}

// -------------------------------------------------------------------------------------------------

/// A concrete scale: the pitch classes of a [`ScaleDefinition`], starting at a root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scale {
    root: PitchClass,
    definition: ScaleDefinition,
    notes: Vec<PitchClass>,
}

impl TryFrom<(PitchClass, &str)> for Scale {
    type Error = String;

    /// Try creating a scale from a root and a scale name of the built-in catalog.
    fn try_from((root, name): (PitchClass, &str)) -> Result<Self, String> {
        let definition = ScaleCatalog::builtin()
            .get(name)
            .ok_or_else(|| format!("Unknown scale '{}'", name))?;
        Ok(Self::new(root, definition))
    }
}

impl Scale {
    pub fn new(root: PitchClass, definition: &ScaleDefinition) -> Self {
        let notes = generate_scale(root, definition.intervals());
        Self {
            root,
            definition: definition.clone(),
            notes,
        }
    }

    pub fn root(&self) -> PitchClass {
        self.root
    }

    pub fn definition(&self) -> &ScaleDefinition {
        &self.definition
    }

    /// Pitch classes of the scale in ascending degree order.
    pub fn notes(&self) -> &[PitchClass] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    pub fn is_heptatonic(&self) -> bool {
        self.notes.len() == 7
    }

    /// Pitch class of the given zero based degree, if any.
    pub fn degree(&self, degree: usize) -> Option<PitchClass> {
        self.notes.get(degree).copied()
    }

    pub fn contains(&self, pitch: PitchClass) -> bool {
        self.notes.contains(&pitch)
    }

    /// Note names in the given spelling.
    pub fn note_names(&self, spelling: Spelling) -> Vec<&'static str> {
        self.notes.iter().map(|note| note.name(spelling)).collect()
    }

    /// Scale tones paired with their degree labels.
    pub fn notes_with_degrees(&self) -> Vec<ScaleNote> {
        self.notes
            .iter()
            .zip(self.definition.degree_labels())
            .map(|(note, degree)| ScaleNote {
                note: *note,
                degree: *degree,
            })
            .collect()
    }
}

impl std::fmt::Display for Scale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.root, self.definition.name())
    }
}

// --------------------------------------------------------------------------------------------------
