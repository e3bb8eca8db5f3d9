//! Secondary dominants, added tone, suspended, extended and altered chords derived from the
//! degrees of a seven tone scale.
//!
//! Chords get built by picking scale tones at fixed positional offsets from each degree. Chord
//! qualities are implied by the resulting notes only: nothing here consults the harmonizer's
//! [`QualityTable`](crate::QualityTable).

use derive_more::Display;

use crate::{chord::HEPTATONIC, pitch::join_names, PitchClass, Spelling};

// -------------------------------------------------------------------------------------------------

/// Category of an [`ExtendedChord`].
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HarmonyCategory {
    #[display("Secondary Dominants")]
    SecondaryDominants,
    #[display("Extended Triads")]
    ExtendedTriads,
    #[display("Suspended Chords")]
    SuspendedChords,
    #[display("Added Tone Chords")]
    AddedToneChords,
    #[display("Extended 7th Chords")]
    ExtendedSevenths,
    #[display("Altered Dominants")]
    AlteredDominants,
    #[display("Upper Structure Triads")]
    UpperStructureTriads,
}

impl HarmonyCategory {
    /// All categories in display order.
    pub const ALL: [HarmonyCategory; 7] = [
        HarmonyCategory::SecondaryDominants,
        HarmonyCategory::ExtendedTriads,
        HarmonyCategory::SuspendedChords,
        HarmonyCategory::AddedToneChords,
        HarmonyCategory::ExtendedSevenths,
        HarmonyCategory::AlteredDominants,
        HarmonyCategory::UpperStructureTriads,
    ];

    fn index(&self) -> usize {
        *self as usize
    }
}

impl TryFrom<&str> for HarmonyCategory {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, String> {
        Self::ALL
            .into_iter()
            .find(|category| category.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| format!("Unknown harmony category '{}'", s))
    }
}

// -------------------------------------------------------------------------------------------------

/// A named chord with its notes, as produced by the extended harmony generator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtendedChord {
    pub name: String,
    pub notes: Vec<PitchClass>,
}

impl ExtendedChord {
    pub fn new<S: Into<String>>(name: S, notes: Vec<PitchClass>) -> Self {
        Self {
            name: name.into(),
            notes,
        }
    }

    pub fn root(&self) -> Option<PitchClass> {
        self.notes.first().copied()
    }

    /// Notes as string, e.g. `C-E-G-D`.
    pub fn note_names(&self, spelling: Spelling) -> String {
        join_names(&self.notes, spelling)
    }
}

// -------------------------------------------------------------------------------------------------

/// Extended chords of a scale, grouped by [`HarmonyCategory`]. All categories are always present,
/// but may be empty.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExtendedHarmony {
    categories: [Vec<ExtendedChord>; 7],
}

impl ExtendedHarmony {
    /// Chords of the given category.
    pub fn get(&self, category: HarmonyCategory) -> &[ExtendedChord] {
        &self.categories[category.index()]
    }

    /// Categories and their chords in display order.
    pub fn iter(&self) -> impl Iterator<Item = (HarmonyCategory, &[ExtendedChord])> {
        HarmonyCategory::ALL
            .into_iter()
            .map(move |category| (category, self.get(category)))
    }

    /// Total number of chords in all categories.
    pub fn len(&self) -> usize {
        self.categories.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn push(&mut self, category: HarmonyCategory, name: String, notes: Vec<PitchClass>) {
        self.categories[category.index()].push(ExtendedChord { name, notes });
    }
}

// -------------------------------------------------------------------------------------------------

/// Scale tones at the chord positions of a single degree.
struct DegreeTones {
    root: PitchClass,
    third: PitchClass,
    fifth: PitchClass,
    sixth: PitchClass,
    seventh: PitchClass,
    ninth: PitchClass,
    eleventh: PitchClass,
    thirteenth: PitchClass,
}

impl DegreeTones {
    fn new(scale: &[PitchClass], degree: usize) -> Self {
        let tone = |offset: usize| scale[(degree + offset) % HEPTATONIC];
        Self {
            root: tone(0),
            third: tone(2),
            fifth: tone(4),
            sixth: tone(5),
            seventh: tone(6),
            ninth: tone(1),
            eleventh: tone(3),
            thirteenth: tone(5),
        }
    }
}

/// Generate the extended harmony of a seven tone scale, naming chords with sharps.
pub fn extend(scale: &[PitchClass]) -> ExtendedHarmony {
    extend_with_spelling(scale, Spelling::Sharps)
}

/// Generate the extended harmony of a seven tone scale, naming chords in the given spelling.
///
/// Scales which do not have exactly seven notes yield an empty harmony.
pub fn extend_with_spelling(scale: &[PitchClass], spelling: Spelling) -> ExtendedHarmony {
    use HarmonyCategory::*;

    let mut harmony = ExtendedHarmony::default();
    if scale.len() != HEPTATONIC {
        log::warn!(
            "Can't generate extended harmony for a scale with {} notes: expected {} notes",
            scale.len(),
            HEPTATONIC
        );
        return harmony;
    }
    let name = |pitch: PitchClass| pitch.name(spelling);

    for degree in 0..HEPTATONIC {
        let DegreeTones {
            root,
            third,
            fifth,
            sixth,
            seventh,
            ninth,
            eleventh,
            thirteenth,
        } = DegreeTones::new(scale, degree);
        let r = name(root);

        // the leading tone has no secondary dominant
        if degree != HEPTATONIC - 1 {
            let dominant = scale[(degree + 3) % HEPTATONIC];
            harmony.push(
                SecondaryDominants,
                format!("{}7 → {}", name(dominant), r),
                vec![
                    dominant,
                    scale[(degree + 5) % HEPTATONIC],
                    root,
                    scale[(degree + 2) % HEPTATONIC],
                ],
            );
        }

        harmony.push(
            ExtendedTriads,
            format!("{}add9", r),
            vec![root, third, fifth, ninth],
        );

        harmony.push(
            SuspendedChords,
            format!("{}sus4", r),
            vec![root, eleventh, fifth],
        );
        harmony.push(
            SuspendedChords,
            format!("{}sus2", r),
            vec![root, ninth, fifth],
        );

        harmony.push(
            AddedToneChords,
            format!("{}6", r),
            vec![root, third, fifth, sixth],
        );
        harmony.push(
            AddedToneChords,
            format!("{}add11", r),
            vec![root, third, fifth, eleventh],
        );

        harmony.push(
            ExtendedSevenths,
            format!("{}9", r),
            vec![root, third, fifth, seventh, ninth],
        );
        harmony.push(
            ExtendedSevenths,
            format!("{}11", r),
            vec![root, third, fifth, seventh, ninth, eleventh],
        );
        harmony.push(
            ExtendedSevenths,
            format!("{}13", r),
            vec![root, third, fifth, seventh, ninth, eleventh, thirteenth],
        );

        // dominant degree only
        if degree == 4 {
            harmony.push(
                AlteredDominants,
                format!("{}7♭9", r),
                vec![root, third, fifth, seventh, scale[(degree + 1) % HEPTATONIC]],
            );
            harmony.push(
                AlteredDominants,
                format!("{}7♯9", r),
                vec![root, third, fifth, seventh, scale[(degree + 2) % HEPTATONIC]],
            );
            harmony.push(
                AlteredDominants,
                format!("{}7♭5", r),
                vec![root, third, scale[(degree + 6) % HEPTATONIC], seventh],
            );
        }

        harmony.push(
            UpperStructureTriads,
            format!("{}7/9", r),
            vec![
                root,
                third,
                fifth,
                seventh,
                ninth,
                scale[(degree + 3) % HEPTATONIC],
            ],
        );
    }
    harmony
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use crate::generate_scale;
    use pretty_assertions::assert_eq;
    use PitchClass::*;

    const C_IONIAN: [PitchClass; 7] = [C, D, E, F, G, A, B];

    #[test]
    fn categories() -> Result<(), String> {
        let harmony = extend(&C_IONIAN);
        let counts = harmony
            .iter()
            .map(|(category, chords)| (category.to_string(), chords.len()))
            .collect::<Vec<_>>();
        assert_eq!(
            counts,
            vec![
                ("Secondary Dominants".to_string(), 6),
                ("Extended Triads".to_string(), 7),
                ("Suspended Chords".to_string(), 14),
                ("Added Tone Chords".to_string(), 14),
                ("Extended 7th Chords".to_string(), 21),
                ("Altered Dominants".to_string(), 3),
                ("Upper Structure Triads".to_string(), 7),
            ]
        );
        assert_eq!(harmony.len(), 72);
        assert_eq!(
            HarmonyCategory::try_from("altered dominants")?,
            HarmonyCategory::AlteredDominants
        );
        assert!(HarmonyCategory::try_from("Quartal Chords").is_err());
        Ok(())
    }

    #[test]
    fn secondary_dominants() {
        for intervals in [
            [2, 2, 1, 2, 2, 2, 1],
            [2, 1, 2, 2, 1, 3, 1],
            [1, 2, 2, 1, 2, 2, 2],
        ] {
            for root in [C, Fs, As] {
                let scale = generate_scale(root, &intervals);
                let harmony = extend(&scale);
                assert_eq!(harmony.get(HarmonyCategory::SecondaryDominants).len(), 6);
            }
        }
        let harmony = extend(&C_IONIAN);
        let dominants = harmony.get(HarmonyCategory::SecondaryDominants);
        assert_eq!(dominants[0], ExtendedChord::new("F7 → C", vec![F, A, C, E]));
        assert_eq!(dominants[5].name, "D7 → A");
        assert_eq!(dominants[5].notes, vec![D, F, A, C]);
    }

    #[test]
    fn chord_tones() {
        let harmony = extend(&C_IONIAN);
        let find = |category: HarmonyCategory, name: &str| {
            harmony
                .get(category)
                .iter()
                .find(|chord| chord.name == name)
                .map(|chord| chord.notes.clone())
        };
        use HarmonyCategory::*;
        assert_eq!(find(ExtendedTriads, "Cadd9"), Some(vec![C, E, G, D]));
        assert_eq!(find(SuspendedChords, "Dsus4"), Some(vec![D, G, A]));
        assert_eq!(find(SuspendedChords, "Dsus2"), Some(vec![D, E, A]));
        assert_eq!(find(AddedToneChords, "F6"), Some(vec![F, A, C, D]));
        assert_eq!(find(AddedToneChords, "Cadd11"), Some(vec![C, E, G, F]));
        assert_eq!(find(ExtendedSevenths, "G9"), Some(vec![G, B, D, F, A]));
        assert_eq!(
            find(ExtendedSevenths, "C13"),
            Some(vec![C, E, G, B, D, F, A])
        );
        assert_eq!(find(AlteredDominants, "G7♭9"), Some(vec![G, B, D, F, A]));
        assert_eq!(find(AlteredDominants, "G7♯9"), Some(vec![G, B, D, F, B]));
        assert_eq!(find(AlteredDominants, "G7♭5"), Some(vec![G, B, F, F]));
        assert_eq!(find(AlteredDominants, "C7♭9"), None);
        assert_eq!(
            find(UpperStructureTriads, "A7/9"),
            Some(vec![A, C, E, G, B, D])
        );
    }

    #[test]
    fn spelling() {
        let b_flat_major = generate_scale(As, &[2, 2, 1, 2, 2, 2, 1]);
        let harmony = extend_with_spelling(&b_flat_major, Spelling::Flats);
        let triads = harmony.get(HarmonyCategory::ExtendedTriads);
        assert_eq!(triads[0].name, "Bbadd9");
        assert_eq!(triads[0].note_names(Spelling::Flats), "Bb-D-F-C");
        assert_eq!(triads[0].root(), Some(As));
        let harmony = extend(&b_flat_major);
        assert_eq!(harmony.get(HarmonyCategory::ExtendedTriads)[3].name, "D#add9");
    }

    #[test]
    fn non_heptatonic_scales() {
        let harmony = extend(&[C, D, E, G, A]);
        assert!(harmony.is_empty());
        assert_eq!(harmony.iter().count(), 7);
    }
}
