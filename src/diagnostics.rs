//! Filter and continue validation: collections keep their valid items and report what got
//! dropped as diagnostics instead of failing as a whole.

use derive_more::Display;

use crate::ChordEntry;

// -------------------------------------------------------------------------------------------------

/// What kind of problem a [`Diagnostic`] reports.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, Hash)]
pub enum DiagnosticKind {
    #[display("invalid chord")]
    InvalidChord,
    #[display("invalid progression")]
    InvalidProgression,
    #[display("unsupported progression")]
    UnsupportedProgression,
}

/// A dropped item and the reason it got dropped.
#[derive(Debug, Display, Clone, PartialEq, Eq)]
#[display("{kind} '{subject}': {message}")]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub subject: String,
    pub message: String,
}

impl Diagnostic {
    pub fn new<S: Into<String>, M: Into<String>>(
        kind: DiagnosticKind,
        subject: S,
        message: M,
    ) -> Self {
        Self {
            kind,
            subject: subject.into(),
            message: message.into(),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Valid items of a collection, along with diagnostics for all items that got filtered out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Validated<T> {
    pub items: Vec<T>,
    pub diagnostics: Vec<Diagnostic>,
}

impl<T> Default for Validated<T> {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            diagnostics: Vec::new(),
        }
    }
}

impl<T> Validated<T> {
    /// True when nothing got filtered out.
    pub fn is_clean(&self) -> bool {
        self.diagnostics.is_empty()
    }

    /// Drop the diagnostics, keeping the valid items only.
    pub fn into_items(self) -> Vec<T> {
        self.items
    }

    pub(crate) fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub(crate) fn reject(&mut self, diagnostic: Diagnostic) {
        log::warn!("Skipping {}", diagnostic);
        self.diagnostics.push(diagnostic);
    }
}

// -------------------------------------------------------------------------------------------------

/// Filter out chord entries which have no notes or no chord symbol.
pub fn validate_chord_scale<I>(chords: I) -> Validated<ChordEntry>
where
    I: IntoIterator<Item = ChordEntry>,
{
    let mut validated = Validated::default();
    for (degree, chord) in chords.into_iter().enumerate() {
        let subject = if chord.name.is_empty() {
            format!("degree {}", degree)
        } else {
            chord.name.clone()
        };
        if chord.notes.is_empty() {
            validated.reject(Diagnostic::new(
                DiagnosticKind::InvalidChord,
                subject,
                "chord has no notes",
            ));
        } else if chord.symbol.is_empty() {
            validated.reject(Diagnostic::new(
                DiagnosticKind::InvalidChord,
                subject,
                "chord has no symbol",
            ));
        } else {
            validated.push(chord);
        }
    }
    validated
}

// --------------------------------------------------------------------------------------------------
