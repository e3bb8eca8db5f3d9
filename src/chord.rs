//! Diatonic seventh chords, built by stacking thirds on each degree of a seven tone scale.

use derive_more::Display;

use crate::{pitch::join_names, PitchClass, Spelling};

// -------------------------------------------------------------------------------------------------

/// Number of scale degrees the harmonizer and the extended harmony generator work on.
pub const HEPTATONIC: usize = 7;

// -------------------------------------------------------------------------------------------------

/// Inversion of a chord: how many chord tones got moved from the bottom to the top.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Inversion {
    #[display("1st Inv")]
    First = 1,
    #[display("2nd Inv")]
    Second,
    #[display("3rd Inv")]
    Third,
}

impl Inversion {
    /// Number of left rotations applied to the root position notes.
    pub fn ordinal(&self) -> usize {
        *self as usize
    }
}

/// Notes of a chord in a specific inversion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvertedChord {
    pub inversion: Inversion,
    pub notes: Vec<PitchClass>,
}

impl InvertedChord {
    /// Rotate the given root position notes by the inversion's ordinal.
    pub fn new(root_position: &[PitchClass], inversion: Inversion) -> Self {
        let mut notes = root_position.to_vec();
        let len = notes.len();
        if len > 0 {
            notes.rotate_left(inversion.ordinal() % len);
        }
        Self { inversion, notes }
    }

    /// Notes and inversion as string, e.g. `E-G-B-C (1st Inv)`.
    pub fn name(&self, spelling: Spelling) -> String {
        format!("{} ({})", join_names(&self.notes, spelling), self.inversion)
    }
}

// -------------------------------------------------------------------------------------------------

/// A chord derived from a scale degree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ChordEntry {
    /// Display name, e.g. `Dm7 / iim7`.
    pub name: String,
    /// Root and quality, e.g. `Dm7`.
    pub symbol: String,
    /// Chord tones in root position.
    pub notes: Vec<PitchClass>,
    /// First, second and third inversion.
    pub inversions: Vec<InvertedChord>,
    /// Harmonic function of the chord's scale degree.
    pub function: Option<String>,
}

impl ChordEntry {
    pub fn root(&self) -> Option<PitchClass> {
        self.notes.first().copied()
    }

    /// Root position notes as string, e.g. `C-E-G-B`.
    pub fn root_position(&self, spelling: Spelling) -> String {
        join_names(&self.notes, spelling)
    }
}

// -------------------------------------------------------------------------------------------------

/// Roman numeral, chord quality and harmonic function of a single scale degree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DegreeQuality {
    pub numeral: &'static str,
    pub quality: &'static str,
    pub function: &'static str,
}

impl DegreeQuality {
    pub const fn new(numeral: &'static str, quality: &'static str, function: &'static str) -> Self {
        Self {
            numeral,
            quality,
            function,
        }
    }
}

/// Positional chord quality table: assigns a fixed numeral and quality to each scale degree,
/// regardless of the actual intervals of the harmonized scale.
///
/// The default table is the major scale's harmonization. Applied to other scales, the labels
/// describe the major scale relationship and not the scale's actual chord qualities.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualityTable {
    degrees: [DegreeQuality; HEPTATONIC],
}

impl QualityTable {
    pub const MAJOR_POSITIONAL: QualityTable = QualityTable::new([
        DegreeQuality::new("I", "Maj7", "Tonic"),
        DegreeQuality::new("ii", "m7", "Supertonic"),
        DegreeQuality::new("iii", "m7", "Mediant"),
        DegreeQuality::new("IV", "Maj7", "Subdominant"),
        DegreeQuality::new("V", "7", "Dominant"),
        DegreeQuality::new("vi", "m7", "Submediant"),
        DegreeQuality::new("vii°", "m7b5", "Leading Tone"),
    ]);

    pub const fn new(degrees: [DegreeQuality; HEPTATONIC]) -> Self {
        Self { degrees }
    }

    /// Quality of the given zero based degree.
    pub fn degree(&self, degree: usize) -> Option<&DegreeQuality> {
        self.degrees.get(degree)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DegreeQuality> {
        self.degrees.iter()
    }
}

impl Default for QualityTable {
    fn default() -> Self {
        Self::MAJOR_POSITIONAL
    }
}

// -------------------------------------------------------------------------------------------------

/// Builds the diatonic seventh chord scale of a seven tone scale, labelling chords with a
/// [`QualityTable`].
#[derive(Debug, Clone, Default)]
pub struct Harmonizer {
    table: QualityTable,
    spelling: Spelling,
}

impl Harmonizer {
    pub fn new(table: QualityTable) -> Self {
        Self {
            table,
            spelling: Spelling::default(),
        }
    }

    /// Spelling used for chord symbols and names.
    #[must_use]
    pub fn with_spelling(self, spelling: Spelling) -> Self {
        Self { spelling, ..self }
    }

    pub fn table(&self) -> &QualityTable {
        &self.table
    }

    /// Create one seventh chord per scale degree. Chord `i` has `scale[i]` as root and stacks the
    /// third, fifth and seventh scale tones above it.
    ///
    /// Scales which do not have exactly seven notes can't be harmonized and yield an empty
    /// chord scale.
    pub fn harmonize(&self, scale: &[PitchClass]) -> Vec<ChordEntry> {
        if scale.len() != HEPTATONIC {
            log::warn!(
                "Can't harmonize a scale with {} notes: expected {} notes",
                scale.len(),
                HEPTATONIC
            );
            return vec![];
        }
        self.table
            .iter()
            .enumerate()
            .map(|(degree, quality)| self.chord(scale, degree, quality))
            .collect()
    }

    fn chord(&self, scale: &[PitchClass], degree: usize, quality: &DegreeQuality) -> ChordEntry {
        let root = scale[degree];
        let third = scale[(degree + 2) % HEPTATONIC];
        let fifth = scale[(degree + 4) % HEPTATONIC];
        let seventh = scale[(degree + 6) % HEPTATONIC];
        let notes = vec![root, third, fifth, seventh];

        let symbol = format!("{}{}", root.name(self.spelling), quality.quality);
        let name = format!("{} / {}{}", symbol, quality.numeral, quality.quality);
        let inversions = [Inversion::First, Inversion::Second, Inversion::Third]
            .into_iter()
            .map(|inversion| InvertedChord::new(&notes, inversion))
            .collect();
        ChordEntry {
            name,
            symbol,
            notes,
            inversions,
            function: Some(quality.function.to_string()),
        }
    }
}

/// Harmonize a seven tone scale with the major scale's positional quality table.
pub fn harmonize(scale: &[PitchClass]) -> Vec<ChordEntry> {
    Harmonizer::default().harmonize(scale)
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::generate_scale;
    use pretty_assertions::assert_eq;
    use PitchClass::*;

    #[test]
    fn c_ionian() {
        let chords = harmonize(&[C, D, E, F, G, A, B]);
        let symbols = chords
            .iter()
            .map(|chord| (chord.symbol.as_str(), chord.root_position(Spelling::Sharps)))
            .collect::<Vec<_>>();
        assert_eq!(
            symbols,
            vec![
                ("CMaj7", "C-E-G-B".to_string()),
                ("Dm7", "D-F-A-C".to_string()),
                ("Em7", "E-G-B-D".to_string()),
                ("FMaj7", "F-A-C-E".to_string()),
                ("G7", "G-B-D-F".to_string()),
                ("Am7", "A-C-E-G".to_string()),
                ("Bm7b5", "B-D-F-A".to_string()),
            ]
        );
        assert_eq!(chords[0].name, "CMaj7 / IMaj7");
        assert_eq!(chords[6].name, "Bm7b5 / vii°m7b5");
        assert_eq!(chords[4].function.as_deref(), Some("Dominant"));
        assert_eq!(chords[3].root(), Some(F));
    }

    #[test]
    fn inversions() {
        let chords = harmonize(&[C, D, E, F, G, A, B]);
        let inversions = chords[0]
            .inversions
            .iter()
            .map(|inversion| inversion.name(Spelling::Sharps))
            .collect::<Vec<_>>();
        assert_eq!(
            inversions,
            vec![
                "E-G-B-C (1st Inv)",
                "G-B-C-E (2nd Inv)",
                "B-C-E-G (3rd Inv)"
            ]
        );
        assert_eq!(Inversion::Third.ordinal(), 3);
        assert_eq!(
            InvertedChord::new(&[C, E, G], Inversion::Third).notes,
            vec![C, E, G]
        );
        assert!(InvertedChord::new(&[], Inversion::First).notes.is_empty());
    }

    #[test]
    fn positional_qualities_on_other_scales() {
        // qualities follow the degree position, not the scale's actual intervals
        let a_harmonic_minor = generate_scale(A, &[2, 1, 2, 2, 1, 3, 1]);
        let chords = harmonize(&a_harmonic_minor);
        assert_eq!(chords.len(), 7);
        assert_eq!(chords[0].symbol, "AMaj7");
        assert_eq!(chords[0].notes, vec![A, C, E, Gs]);
        assert_eq!(chords[6].symbol, "G#m7b5");
    }

    #[test]
    fn spelling_and_tables() {
        let f_major = generate_scale(F, &[2, 2, 1, 2, 2, 2, 1]);
        let chords = Harmonizer::default()
            .with_spelling(Spelling::Flats)
            .harmonize(&f_major);
        assert_eq!(chords[3].symbol, "BbMaj7");
        assert_eq!(chords[3].name, "BbMaj7 / IVMaj7");

        let minor_table = QualityTable::new([
            DegreeQuality::new("i", "m7", "Tonic"),
            DegreeQuality::new("ii°", "m7b5", "Supertonic"),
            DegreeQuality::new("III", "Maj7", "Mediant"),
            DegreeQuality::new("iv", "m7", "Subdominant"),
            DegreeQuality::new("v", "m7", "Dominant"),
            DegreeQuality::new("VI", "Maj7", "Submediant"),
            DegreeQuality::new("VII", "7", "Subtonic"),
        ]);
        let a_minor = generate_scale(A, &[2, 1, 2, 2, 1, 2, 2]);
        let chords = Harmonizer::new(minor_table).harmonize(&a_minor);
        assert_eq!(chords[0].name, "Am7 / im7");
        assert_eq!(chords[6].symbol, "G7");
    }

    #[test]
    fn non_heptatonic_scales() {
        assert!(harmonize(&[C, D, E, G, A]).is_empty());
        assert!(harmonize(&[]).is_empty());
    }
}
