//! The 12 tone chromatic pitch space, note spelling and octave assigned notes.

use std::collections::HashMap;

use derive_more::{Display, From, Into};
use lazy_static::lazy_static;

pub(crate) mod notation;

// -------------------------------------------------------------------------------------------------

/// Sharp spelled names of all pitch classes, the canonical 12 tone table.
pub const SHARP_NAMES: [&str; 12] = [
    "C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B",
];

/// Flat spelled names of all pitch classes.
pub const FLAT_NAMES: [&str; 12] = [
    "C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B",
];

lazy_static! {
    static ref SHARP_TO_FLAT: HashMap<&'static str, &'static str> = HashMap::from([
        ("C#", "Db"),
        ("D#", "Eb"),
        ("F#", "Gb"),
        ("G#", "Ab"),
        ("A#", "Bb"),
    ]);
    static ref FLAT_TO_SHARP: HashMap<&'static str, &'static str> = HashMap::from([
        ("Db", "C#"),
        ("Eb", "D#"),
        ("Gb", "F#"),
        ("Ab", "G#"),
        ("Bb", "A#"),
    ]);
}

// -------------------------------------------------------------------------------------------------

/// Preferred accidental when displaying a [`PitchClass`].
#[derive(Debug, Display, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Spelling {
    #[default]
    #[display("sharps")]
    Sharps,
    #[display("flats")]
    Flats,
}

impl Spelling {
    pub fn from_prefer_flats(prefer_flats: bool) -> Self {
        if prefer_flats {
            Self::Flats
        } else {
            Self::Sharps
        }
    }

    pub fn prefers_flats(&self) -> bool {
        *self == Self::Flats
    }
}

// -------------------------------------------------------------------------------------------------

/// One of the 12 chromatic steps of an octave. The subscript 's' means sharp.
///
/// Identity is positional: `C = 0`, `Cs = 1` ... `B = 11`. Spelling only affects how a pitch
/// class gets displayed, see [`PitchClass::name`].
#[repr(u8)]
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Hash)]
pub enum PitchClass {
    C = 0,
    Cs = 1,
    D = 2,
    Ds = 3,
    E = 4,
    F = 5,
    Fs = 6,
    G = 7,
    Gs = 8,
    A = 9,
    As = 10,
    B = 11,
}

/// All pitch classes in chromatic order.
pub const PITCH_CLASSES: [PitchClass; 12] = [
    PitchClass::C,
    PitchClass::Cs,
    PitchClass::D,
    PitchClass::Ds,
    PitchClass::E,
    PitchClass::F,
    PitchClass::Fs,
    PitchClass::G,
    PitchClass::Gs,
    PitchClass::A,
    PitchClass::As,
    PitchClass::B,
];

impl PitchClass {
    /// Position in the chromatic table: 0 = C, 1 = C# ...
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Pitch class at the given semitone distance from C, wrapping at the octave.
    pub fn from_semitone(semitone: i32) -> Self {
        PITCH_CLASSES[semitone.rem_euclid(12) as usize]
    }

    /// Name of the pitch class in the given spelling.
    pub fn name(&self, spelling: Spelling) -> &'static str {
        match spelling {
            Spelling::Sharps => SHARP_NAMES[self.index()],
            Spelling::Flats => FLAT_NAMES[self.index()],
        }
    }

    /// True for the five pitch classes which need an accidental.
    pub fn is_accidental(&self) -> bool {
        SHARP_NAMES[self.index()].len() > 1
    }

    /// return a new pitch class, transposed by the given amount of semitones.
    #[must_use]
    pub fn transposed(&self, semitones: i32) -> Self {
        Self::from_semitone(self.index() as i32 + semitones)
    }

    /// Ascending distance in semitones from this to the given pitch class in range `[0..12)`.
    pub fn semitones_to(&self, other: PitchClass) -> u8 {
        (other.index() as i32 - self.index() as i32).rem_euclid(12) as u8
    }
}

impl From<u8> for PitchClass {
    fn from(n: u8) -> Self {
        PITCH_CLASSES[(n % 12) as usize]
    }
}

impl From<PitchClass> for u8 {
    fn from(pitch_class: PitchClass) -> u8 {
        pitch_class as u8
    }
}

impl TryFrom<&str> for PitchClass {
    type Error = String;

    /// Try converting the given note name to a pitch class. Sharps (`#`, `♯`, `s`), flats
    /// (`b`, `♭`) and naturals (`♮`) are supported, octave values are not.
    fn try_from(s: &str) -> Result<Self, String> {
        notation::parse_pitch_class(s)
    }
}

impl std::fmt::Display for PitchClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name(Spelling::Sharps))
    }
}

// -------------------------------------------------------------------------------------------------

/// Convert a plain note name (without octave) to the preferred spelling.
///
/// Natural notes and notes that already are in the requested spelling pass through unchanged,
/// just like any unknown string does.
pub fn convert_spelling(note: &str, prefer_flats: bool) -> &str {
    if prefer_flats {
        SHARP_TO_FLAT.get(note).copied().unwrap_or(note)
    } else {
        FLAT_TO_SHARP.get(note).copied().unwrap_or(note)
    }
}

/// Join the given pitch classes with `-`, e.g. `C-E-G-B`.
pub fn join_names(notes: &[PitchClass], spelling: Spelling) -> String {
    notes
        .iter()
        .map(|note| note.name(spelling))
        .collect::<Vec<_>>()
        .join("-")
}

// -------------------------------------------------------------------------------------------------

/// Octave number of a [`VoicedNote`]. Octave 4 contains middle C.
#[derive(Debug, Display, From, Into, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Octave(i8);

impl Octave {
    /// Octave shifted by the given amount, or None when leaving the representable range.
    pub fn checked_add(&self, amount: i8) -> Option<Self> {
        self.0.checked_add(amount).map(Self)
    }
}

/// A pitch class with an assigned octave: a concrete, playable note.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct VoicedNote {
    pub pitch: PitchClass,
    pub octave: Octave,
}

impl VoicedNote {
    pub fn new(pitch: PitchClass, octave: i8) -> Self {
        Self {
            pitch,
            octave: Octave(octave),
        }
    }

    /// Note and octave string such as `Db3` in the given spelling, as consumed by note players.
    pub fn name(&self, spelling: Spelling) -> String {
        format!("{}{}", self.pitch.name(spelling), self.octave)
    }
}

impl TryFrom<&str> for VoicedNote {
    type Error = String;

    /// Try converting strings like `C4`, `Db3`, `F#_2` to a voiced note. Notes without an octave
    /// value get octave 4.
    fn try_from(s: &str) -> Result<Self, String> {
        let (pitch, octave) = notation::parse_note(s)?;
        Ok(Self::new(pitch, octave.unwrap_or(4)))
    }
}

impl std::fmt::Display for VoicedNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name(Spelling::Sharps))
    }
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pitch_class_conversion() {
        assert_eq!(PitchClass::from(0_u8), PitchClass::C);
        assert_eq!(PitchClass::from(13_u8), PitchClass::Cs);
        assert_eq!(PitchClass::from_semitone(-1), PitchClass::B);
        assert_eq!(u8::from(PitchClass::A), 9);
        assert_eq!(PitchClass::B.transposed(1), PitchClass::C);
        assert_eq!(PitchClass::C.transposed(-13), PitchClass::B);
        assert_eq!(PitchClass::A.semitones_to(PitchClass::C), 3);
        assert_eq!(PitchClass::C.semitones_to(PitchClass::C), 0);
    }

    #[test]
    fn pitch_class_names() {
        assert_eq!(PitchClass::Cs.to_string(), "C#");
        assert_eq!(PitchClass::Cs.name(Spelling::Flats), "Db");
        assert_eq!(PitchClass::E.name(Spelling::Flats), "E");
        assert!(PitchClass::As.is_accidental());
        assert!(!PitchClass::B.is_accidental());
        for pitch_class in PITCH_CLASSES {
            for spelling in [Spelling::Sharps, Spelling::Flats] {
                assert_eq!(
                    PitchClass::try_from(pitch_class.name(spelling)),
                    Ok(pitch_class)
                );
            }
        }
    }

    #[test]
    fn spelling_conversion() {
        assert_eq!(convert_spelling("C#", true), "Db");
        assert_eq!(convert_spelling("Db", true), "Db");
        assert_eq!(convert_spelling("Bb", false), "A#");
        assert_eq!(convert_spelling("A#", false), "A#");
        assert_eq!(convert_spelling("E", true), "E");
        assert_eq!(convert_spelling("H", true), "H");
        assert_eq!(convert_spelling("", false), "");

        for pitch_class in PITCH_CLASSES {
            let sharp = pitch_class.name(Spelling::Sharps);
            let flat = pitch_class.name(Spelling::Flats);
            for name in [sharp, flat] {
                for prefer_flats in [true, false] {
                    // idempotent
                    let once = convert_spelling(name, prefer_flats);
                    assert_eq!(convert_spelling(once, prefer_flats), once);
                    // flipping the preference twice returns to the first conversion
                    let flipped = convert_spelling(once, !prefer_flats);
                    assert_eq!(convert_spelling(flipped, prefer_flats), once);
                }
                // same result as spelling the pitch class directly
                assert_eq!(convert_spelling(convert_spelling(name, true), false), sharp);
                assert_eq!(convert_spelling(convert_spelling(name, false), true), flat);
                // spelling never changes identity
                assert_eq!(
                    PitchClass::try_from(convert_spelling(name, true)),
                    Ok(pitch_class)
                );
            }
        }
    }

    #[test]
    fn voiced_notes() -> Result<(), String> {
        assert_eq!(VoicedNote::try_from("C4")?, VoicedNote::new(PitchClass::C, 4));
        assert_eq!(VoicedNote::try_from("Db3")?, VoicedNote::new(PitchClass::Cs, 3));
        assert_eq!(VoicedNote::try_from("g")?, VoicedNote::new(PitchClass::G, 4));
        assert!(VoicedNote::try_from("x4").is_err());

        assert_eq!(VoicedNote::new(PitchClass::As, 2).to_string(), "A#2");
        assert_eq!(VoicedNote::new(PitchClass::As, 2).name(Spelling::Flats), "Bb2");
        assert_eq!(Octave::from(3_i8).checked_add(1), Some(Octave::from(4_i8)));
        assert_eq!(Octave::from(i8::MAX).checked_add(1), None);
        Ok(())
    }
}
