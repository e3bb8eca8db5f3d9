//! Named chord progressions, referencing scale degrees of a chord scale.

use std::borrow::Cow;

use derive_more::{Display, Error};

use crate::{
    diagnostics::{Diagnostic, DiagnosticKind, Validated},
    pitch::notation, ChordEntry, PitchClass, ScaleDefinition,
};

// -------------------------------------------------------------------------------------------------

/// How the degrees of a [`Progression`] get resolved.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ProgressionKind {
    /// Plain chord scale lookups.
    #[display("diatonic")]
    Diatonic,
    /// Needs chromatic voice leading between the degrees, which can't be resolved from a chord
    /// scale. Resolving such progressions fails with [`ProgressionError::Unsupported`].
    #[display("chromatic")]
    Chromatic,
}

// -------------------------------------------------------------------------------------------------

/// Reasons for rejecting a progression.
#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum ProgressionError {
    #[display("degree {degree} is out of range for a chord scale with {len} chords")]
    DegreeOutOfRange { degree: usize, len: usize },
    #[display("chord '{name}' at degree {degree} has no notes")]
    MissingNotes { degree: usize, name: String },
    #[display("'{name}' needs chromatic voice leading, which is not supported")]
    Unsupported { name: String },
}

// -------------------------------------------------------------------------------------------------

/// A named sequence of zero based scale degrees.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Progression {
    name: Cow<'static, str>,
    degrees: Cow<'static, [usize]>,
    description: Cow<'static, str>,
    kind: ProgressionKind,
}

impl Progression {
    const fn from_static(
        name: &'static str,
        degrees: &'static [usize],
        description: &'static str,
        kind: ProgressionKind,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            degrees: Cow::Borrowed(degrees),
            description: Cow::Borrowed(description),
            kind,
        }
    }

    pub const BASIC: Progression = Progression::from_static(
        "Basic I-IV-V",
        &[0, 3, 4],
        "The most fundamental progression in music",
        ProgressionKind::Diatonic,
    );
    pub const TWO_FIVE_ONE: Progression = Progression::from_static(
        "II-V-I",
        &[1, 4, 0],
        "Essential jazz progression",
        ProgressionKind::Diatonic,
    );
    pub const FIFTIES: Progression = Progression::from_static(
        "50s Progression",
        &[0, 5, 3, 4],
        "I-vi-IV-V progression, popular in doo-wop",
        ProgressionKind::Diatonic,
    );
    pub const CIRCLE: Progression = Progression::from_static(
        "Circle Progression",
        &[0, 3, 4, 5],
        "I-IV-V-vi, widely used in pop music",
        ProgressionKind::Diatonic,
    );
    pub const MINOR_LINE_CLICHE: Progression = Progression::from_static(
        "Minor Line Cliché",
        &[0, 0, 0, 0],
        "Descending chromatic line in minor context",
        ProgressionKind::Chromatic,
    );
    pub const ANDALUSIAN_CADENCE: Progression = Progression::from_static(
        "Andalusian Cadence",
        &[3, 2, 1, 0],
        "Common in Flamenco and rock music",
        ProgressionKind::Diatonic,
    );

    /// Create a new diatonic progression.
    pub fn new<N, D>(name: N, degrees: Vec<usize>, description: D) -> Self
    where
        N: Into<Cow<'static, str>>,
        D: Into<Cow<'static, str>>,
    {
        Self {
            name: name.into(),
            degrees: Cow::Owned(degrees),
            description: description.into(),
            kind: ProgressionKind::Diatonic,
        }
    }

    /// Create a new diatonic progression from a roman numeral string such as `I-vi-IV-V`
    /// or `ii7 V7 IMaj7`. Chord quality suffixes are ignored: qualities always come from the
    /// chord scale the progression gets resolved against.
    pub fn from_numerals(numerals: &str) -> Result<Self, String> {
        let degrees = notation::parse_numerals(numerals)?;
        Ok(Self::new(numerals.trim().to_string(), degrees, "Custom progression"))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn degrees(&self) -> &[usize] {
        &self.degrees
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn kind(&self) -> ProgressionKind {
        self.kind
    }

    /// Look up the root position notes of all chords of this progression in the given chord
    /// scale.
    pub fn resolve(
        &self,
        chord_scale: &[ChordEntry],
    ) -> Result<Vec<Vec<PitchClass>>, ProgressionError> {
        match self.kind {
            ProgressionKind::Diatonic => resolve_progression(&self.degrees, chord_scale),
            ProgressionKind::Chromatic => Err(ProgressionError::Unsupported {
                name: self.name.to_string(),
            }),
        }
    }
}

impl std::fmt::Display for Progression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.name, self.description)
    }
}

// -------------------------------------------------------------------------------------------------

/// Common progressions for the given scale. Minor family scales additionally offer the minor line
/// cliché and the Andalusian cadence.
pub fn common_progressions(definition: &ScaleDefinition) -> Vec<Progression> {
    let mut progressions = vec![
        Progression::BASIC,
        Progression::TWO_FIVE_ONE,
        Progression::FIFTIES,
        Progression::CIRCLE,
    ];
    if definition.is_minor_family() {
        progressions.push(Progression::MINOR_LINE_CLICHE);
        progressions.push(Progression::ANDALUSIAN_CADENCE);
    }
    progressions
}

/// Look up the root position notes of the given degrees in a chord scale. Rejects the whole
/// progression when any degree is out of range or references a chord without notes.
pub fn resolve_progression(
    degrees: &[usize],
    chord_scale: &[ChordEntry],
) -> Result<Vec<Vec<PitchClass>>, ProgressionError> {
    degrees
        .iter()
        .map(|&degree| {
            let chord = chord_scale
                .get(degree)
                .ok_or(ProgressionError::DegreeOutOfRange {
                    degree,
                    len: chord_scale.len(),
                })?;
            if chord.notes.is_empty() {
                return Err(ProgressionError::MissingNotes {
                    degree,
                    name: chord.name.clone(),
                });
            }
            Ok(chord.notes.clone())
        })
        .collect()
}

// -------------------------------------------------------------------------------------------------

/// A progression with the notes of its chords.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedProgression {
    pub progression: Progression,
    pub chords: Vec<Vec<PitchClass>>,
}

/// Resolve all given progressions, dropping those which can't be resolved.
pub fn resolve_progressions(
    progressions: &[Progression],
    chord_scale: &[ChordEntry],
) -> Validated<ResolvedProgression> {
    let mut validated = Validated::default();
    for progression in progressions {
        match progression.resolve(chord_scale) {
            Ok(chords) => validated.push(ResolvedProgression {
                progression: progression.clone(),
                chords,
            }),
            Err(err) => {
                let kind = match err {
                    ProgressionError::Unsupported { .. } => DiagnosticKind::UnsupportedProgression,
                    _ => DiagnosticKind::InvalidProgression,
                };
                validated.reject(Diagnostic::new(kind, progression.name(), err.to_string()));
            }
        }
    }
    validated
}

// --------------------------------------------------------------------------------------------------
