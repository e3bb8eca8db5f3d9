//! The chordscale prelude.
//!
//! The purpose of this module is to alleviate imports of common chordscale types:
//!
//! ```
//! # #![allow(unused_imports)]
//! use chordscale::prelude::*;
//! ```

pub use super::{
    // pitch space, scales and chords
    chord::{DegreeQuality, Inversion, InvertedChord},
    diagnostics::{validate_chord_scale, DiagnosticKind},
    extended::extend_with_spelling,
    progression::{common_progressions, resolve_progressions, ProgressionKind, ResolvedProgression},
    voicing::{
        schedule, schedule_progression, schedule_scale, voice_and_schedule, voice_names, Density,
        PlaybackStyle, VoicingRange,
    },
    // all public basic types
    convert_spelling,
    explore,
    extend,
    generate_scale,
    harmonize,
    resolve_progression,
    voice,
    ChordEntry,
    Diagnostic,
    Exploration,
    ExtendedChord,
    ExtendedHarmony,
    Harmonizer,
    HarmonyCategory,
    NotePlayer,
    Octave,
    Performer,
    PitchClass,
    Progression,
    ProgressionError,
    QualityTable,
    Scale,
    ScaleCatalog,
    ScaleDefinition,
    ScaleNote,
    Schedule,
    ScheduledEvent,
    Spelling,
    Validated,
    VoicedNote,
    VoicingConfig,
    PITCH_CLASSES,
};
