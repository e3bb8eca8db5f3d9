//! Catalog of named scale definitions: interval patterns, degree labels and descriptions.

use std::{borrow::Cow, collections::HashMap};

use derive_more::Display;
use lazy_static::lazy_static;

// -------------------------------------------------------------------------------------------------

/// A single step between two consecutive scale degrees.
#[derive(Debug, Display, Copy, Clone, PartialEq, Eq)]
pub enum Step {
    #[display("H")]
    Half,
    #[display("W")]
    Whole,
    #[display("W+H")]
    WholeHalf,
    #[display("{_0}")]
    Other(u8),
}

impl From<u8> for Step {
    fn from(semitones: u8) -> Self {
        match semitones {
            1 => Step::Half,
            2 => Step::Whole,
            3 => Step::WholeHalf,
            _ => Step::Other(semitones),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Immutable definition of a named scale.
///
/// `intervals` are the semitone distances between consecutive scale degrees and sum up to a
/// full octave.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScaleDefinition {
    name: Cow<'static, str>,
    alt_names: Cow<'static, str>,
    intervals: Cow<'static, [u8]>,
    description: Cow<'static, str>,
}

impl ScaleDefinition {
    const fn from_static(
        name: &'static str,
        alt_names: &'static str,
        intervals: &'static [u8],
        description: &'static str,
    ) -> Self {
        Self {
            name: Cow::Borrowed(name),
            alt_names: Cow::Borrowed(alt_names),
            intervals: Cow::Borrowed(intervals),
            description: Cow::Borrowed(description),
        }
    }

    /// Create a new scale definition. Fails when the intervals are empty, contain zero steps
    /// or do not add up to a full octave.
    pub fn new<N, I, D>(name: N, intervals: I, description: D) -> Result<Self, String>
    where
        N: Into<Cow<'static, str>>,
        I: Into<Cow<'static, [u8]>>,
        D: Into<Cow<'static, str>>,
    {
        let intervals = intervals.into();
        if intervals.is_empty() {
            return Err("Interval list can not be empty".to_string());
        }
        if intervals.contains(&0) {
            return Err("Intervals must be at least one semitone".to_string());
        }
        let octave = intervals.iter().map(|i| *i as u32).sum::<u32>();
        if octave != 12 {
            return Err(format!(
                "Intervals must add up to an octave (12 semitones), but add up to {}",
                octave
            ));
        }
        Ok(Self {
            name: name.into(),
            alt_names: Cow::Borrowed(""),
            intervals,
            description: description.into(),
        })
    }

    /// Display name, which also is the catalog key.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Alternative names the definition can be looked up with.
    pub fn alt_names(&self) -> impl Iterator<Item = &str> {
        self.alt_names.split(';').filter(|name| !name.is_empty())
    }

    /// Semitone steps between consecutive scale degrees.
    pub fn intervals(&self) -> &[u8] {
        &self.intervals
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    /// Number of scale degrees.
    pub fn len(&self) -> usize {
        self.intervals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.intervals.is_empty()
    }

    /// True for seven tone scales, the only ones which can be harmonized.
    pub fn is_heptatonic(&self) -> bool {
        self.len() == 7
    }

    /// True when the scale's name marks it as a minor scale, which enables minor only
    /// progressions.
    pub fn is_minor_family(&self) -> bool {
        self.name.to_lowercase().contains("minor")
    }

    /// Degree labels such as `"1"`, `"♭3"`, one per scale tone.
    pub fn degree_labels(&self) -> &'static [&'static str] {
        degree_labels(&self.name)
    }

    /// Intervals as whole and half steps.
    pub fn step_pattern(&self) -> Vec<Step> {
        self.intervals.iter().copied().map(Step::from).collect()
    }

    /// Intervals as whole and half steps string, e.g. `W-W-H-W-W-W-H`.
    pub fn step_pattern_string(&self) -> String {
        self.step_pattern()
            .iter()
            .map(|step| step.to_string())
            .collect::<Vec<_>>()
            .join("-")
    }

    fn matches(&self, normalized_name: &str) -> bool {
        normalize_name(&self.name) == normalized_name
            || self
                .alt_names()
                .any(|alt_name| normalize_name(alt_name) == normalized_name)
    }
}

impl TryFrom<&[u8]> for ScaleDefinition {
    type Error = String;

    /// Try converting the given interval list to a custom scale definition.
    fn try_from(intervals: &[u8]) -> Result<Self, String> {
        Self::new("custom scale", intervals.to_vec(), "")
    }
}

// -------------------------------------------------------------------------------------------------

// lower case, unify accidentals and resolve common abbreviations
fn normalize_name(name: &str) -> String {
    name.to_lowercase()
        .replace('♭', "b")
        .replace('♯', "#")
        .replace('♮', "natural ")
        .replace(['(', ')'], " ")
        .split_whitespace()
        .map(|v| match v {
            "aug" | "aug." => "augmented",
            "dim" | "dim." => "diminished",
            "dom" | "dom." => "dominant",
            "harm" | "harm." => "harmonic",
            "hung" | "hung." | "hungary" => "hungarian",
            "mel" | "mel." => "melodic",
            "min" => "minor",
            "maj" => "major",
            "nat" | "nat." => "natural",
            "penta" | "pent." => "pentatonic",
            "asc" | "asc." => "ascending",
            _ => v,
        })
        .collect::<Vec<_>>()
        .join(" ")
}

const DEFAULT_DEGREE_LABELS: [&str; 7] = ["1", "2", "3", "4", "5", "6", "7"];

lazy_static! {
    static ref DEGREE_LABELS: HashMap<&'static str, &'static [&'static str]> = {
        let labels: [(&'static str, &'static [&'static str]); 28] = [
            ("Ionian (Major)", &["1", "2", "3", "4", "5", "6", "7"]),
            ("Dorian", &["1", "2", "♭3", "4", "5", "6", "♭7"]),
            ("Phrygian", &["1", "♭2", "♭3", "4", "5", "♭6", "♭7"]),
            ("Lydian", &["1", "2", "3", "♯4", "5", "6", "7"]),
            ("Mixolydian", &["1", "2", "3", "4", "5", "6", "♭7"]),
            ("Aeolian (Natural Minor)", &["1", "2", "♭3", "4", "5", "♭6", "♭7"]),
            ("Locrian", &["1", "♭2", "♭3", "4", "♭5", "♭6", "♭7"]),
            // harmonic minor and its modes
            ("Harmonic Minor", &["1", "2", "♭3", "4", "5", "♭6", "7"]),
            ("Locrian ♮6", &["1", "♭2", "♭3", "4", "♭5", "6", "♭7"]),
            ("Ionian #5", &["1", "2", "3", "4", "♯5", "6", "7"]),
            ("Dorian #4", &["1", "2", "♭3", "♯4", "5", "6", "♭7"]),
            ("Phrygian Dominant", &["1", "♭2", "3", "4", "5", "♭6", "♭7"]),
            ("Lydian #2", &["1", "♯2", "3", "♯4", "5", "6", "7"]),
            ("UltraLocrian", &["1", "♭2", "♭3", "♭4", "♭5", "♭6", "♭7"]),
            // melodic minor and its modes
            ("Melodic Minor (Ascending)", &["1", "2", "♭3", "4", "5", "6", "7"]),
            ("Dorian ♭2", &["1", "♭2", "♭3", "4", "5", "6", "♭7"]),
            ("Lydian Augmented", &["1", "2", "3", "♯4", "♯5", "6", "7"]),
            ("Lydian Dominant", &["1", "2", "3", "♯4", "5", "6", "♭7"]),
            ("Mixolydian ♭6", &["1", "2", "3", "4", "5", "♭6", "♭7"]),
            ("Aeolian ♭5", &["1", "2", "♭3", "4", "♭5", "♭6", "♭7"]),
            ("Altered Scale (Super Locrian)", &["1", "♭2", "♭3", "♭4", "♭5", "♭6", "♭7"]),
            // other exotic scales
            ("Hungarian Minor", &["1", "2", "♭3", "♯4", "5", "♭6", "7"]),
            ("Hungarian Major", &["1", "♯2", "3", "♯4", "5", "6", "♭7"]),
            ("Neapolitan Major", &["1", "♭2", "♭3", "4", "5", "6", "7"]),
            ("Neapolitan Minor", &["1", "♭2", "♭3", "4", "5", "♭6", "7"]),
            ("Pentatonic Major", &["1", "2", "3", "5", "6"]),
            ("Pentatonic Minor", &["1", "♭3", "4", "5", "♭7"]),
            ("Blues Scale", &["1", "♭3", "4", "♭5", "5", "♭7"]),
        ];
        HashMap::from(labels)
    };
    static ref BUILTIN_CATALOG: ScaleCatalog = ScaleCatalog::new(SCALE_DEFINITIONS.to_vec());
}

/// Degree labels for the given scale name. Unknown scales fall back to the plain major scale
/// degrees `1` to `7`.
pub fn degree_labels(scale_name: &str) -> &'static [&'static str] {
    DEGREE_LABELS
        .get(scale_name)
        .copied()
        .unwrap_or(&DEFAULT_DEGREE_LABELS)
}

// -------------------------------------------------------------------------------------------------

/// An ordered set of [`ScaleDefinition`]s, looked up by name.
///
/// The built-in catalog is created once on first use and never changes. Custom catalogs can be
/// created with [`ScaleCatalog::new`] and passed along wherever the built-in one is accepted.
#[derive(Debug, Clone, Default)]
pub struct ScaleCatalog {
    scales: Vec<ScaleDefinition>,
}

impl ScaleCatalog {
    pub fn new(scales: Vec<ScaleDefinition>) -> Self {
        Self { scales }
    }

    /// The built-in catalog with all common modes, harmonic and melodic minor modes,
    /// pentatonic, blues and exotic scales.
    pub fn builtin() -> &'static ScaleCatalog {
        &BUILTIN_CATALOG
    }

    /// Scale names in catalog order.
    pub fn names(&self) -> Vec<&str> {
        self.scales.iter().map(|scale| scale.name()).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ScaleDefinition> {
        self.scales.iter()
    }

    pub fn len(&self) -> usize {
        self.scales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scales.is_empty()
    }

    /// Look up a definition by its name or by one of its alternative names. Lookup ignores case
    /// and resolves common abbreviations such as `maj`, `harm` or `penta`.
    pub fn get(&self, name: &str) -> Option<&ScaleDefinition> {
        if let Some(scale) = self.scales.iter().find(|scale| scale.name() == name) {
            return Some(scale);
        }
        let normalized_name = normalize_name(name);
        self.scales
            .iter()
            .find(|scale| scale.matches(&normalized_name))
    }
}

// -------------------------------------------------------------------------------------------------

const SCALE_DEFINITIONS: [ScaleDefinition; 30] = [
    ScaleDefinition::from_static(
        "Ionian (Major)",
        "major;ionian;natural major",
        &[2, 2, 1, 2, 2, 2, 1],
        "Bright, stable, and resolute. The Ionian mode features a major third and natural seventh that create a strong sense of resolution and completion.\n\n\
         The foundation of Western music theory, this scale emerged during the medieval period and became the basis for common practice harmony. Its natural tendency toward resolution makes it ubiquitous in classical, pop, and folk music, particularly for expressing joy, triumph, and straightforward emotional statements.",
    ),
    ScaleDefinition::from_static(
        "Dorian",
        "",
        &[2, 1, 2, 2, 2, 1, 2],
        "Minor and contemplative, yet uplifting. The Dorian mode's raised sixth degree gives it a distinctive floating quality that sets it apart from the natural minor scale.\n\n\
         Historically significant in medieval church music and Celtic folk traditions, this scale gained renewed prominence in modern music through modal jazz and rock. Notable examples include Miles Davis's \"So What\" and \"Scarborough Fair\". Its unique blend of minor tonality with a major sixth makes it particularly effective for both melancholic and hopeful expressions.",
    ),
    ScaleDefinition::from_static(
        "Phrygian",
        "",
        &[1, 2, 2, 2, 1, 2, 2],
        "Dark and exotic, with a distinctive flat second degree that creates immediate tension. The Phrygian mode evokes Mediterranean and Middle Eastern flavors.\n\n\
         Deeply rooted in Spanish Flamenco music and metal genres, this scale creates a sense of dramatic tension through its lowered second degree. Its sound can range from mysterious and ethereal to intensely dramatic, making it particularly effective in film scores and contemporary metal music.",
    ),
    ScaleDefinition::from_static(
        "Lydian",
        "",
        &[2, 2, 2, 1, 2, 2, 1],
        "Bright, ethereal, and slightly floating. The raised fourth degree creates a distinctive otherworldly quality that sets it apart from the major scale.\n\n\
         Popular in film scores and modern jazz, the Lydian mode gained prominence through composers like Debussy and jazz theorist George Russell. Its dreamy, floating quality makes it particularly effective for creating atmospheric and fantastical moods, often associated with wonder and discovery.",
    ),
    ScaleDefinition::from_static(
        "Mixolydian",
        "",
        &[2, 2, 1, 2, 2, 1, 2],
        "Warm and relaxed, with a bluesy edge. The Mixolydian mode's flatted seventh creates a dominant quality while maintaining a major tonality.\n\n\
         Fundamental to blues, rock, and Celtic music, this scale forms the basis of many guitar-driven genres. Its natural dominant quality makes it particularly suited for creating tension that doesn't demand resolution, heard in countless rock riffs and folk melodies.",
    ),
    ScaleDefinition::from_static(
        "Aeolian (Natural Minor)",
        "minor;aeolian;natural minor",
        &[2, 1, 2, 2, 1, 2, 2],
        "Dark and emotive, with a natural melancholic quality. The Aeolian mode provides the foundation for minor-key music with its characteristic minor third and sixth.\n\n\
         The most common minor scale in Western music, it emerged as a prominent mode during the Baroque period. Its versatility in expressing sadness, introspection, and drama makes it essential in classical, rock, and pop music, particularly for ballads and emotional pieces.",
    ),
    ScaleDefinition::from_static(
        "Locrian",
        "",
        &[1, 2, 2, 1, 2, 2, 2],
        "Intensely unstable and mysterious, with both a diminished fifth and a flat second. The Locrian mode is the most dissonant of the traditional modes.\n\n\
         Rarely used as a primary tonality due to its inherent instability, this scale finds its place in contemporary classical music and metal. Its unique combination of intervals makes it effective for creating extreme tension and otherworldly atmospheres.",
    ),
    ScaleDefinition::from_static(
        "Harmonic Minor",
        "",
        &[2, 1, 2, 2, 1, 3, 1],
        "Dramatic and exotic, with a characteristic augmented second interval. The raised seventh creates a strong pull toward the tonic while maintaining a minor quality.\n\n\
         Developed during the Baroque period to provide stronger cadences in minor keys, this scale is essential in classical and Middle Eastern music. Its distinctive sound combines Western functional harmony with an exotic flair, making it popular in metal, neoclassical, and fusion genres.",
    ),
    ScaleDefinition::from_static(
        "Melodic Minor (Ascending)",
        "melodic minor;jazz minor",
        &[2, 1, 2, 2, 2, 2, 1],
        "Smooth and sophisticated, combining minor and major qualities. The raised sixth and seventh degrees create a more fluid melodic line while ascending.\n\n\
         Originally developed to smooth out melodic lines in Baroque music, this scale became a cornerstone of jazz harmony in the 20th century. Its unique combination of minor and major elements makes it particularly useful for creating complex harmonic progressions and melodic lines.",
    ),
    ScaleDefinition::from_static(
        "Pentatonic Major",
        "major pentatonic",
        &[2, 2, 3, 2, 3],
        "Open, stable, and naturally consonant. The five-note structure eliminates all semitone intervals, creating a pure, harmonious sound.\n\n\
         Found in traditional music worldwide, from Celtic to East Asian cultures. Its absence of semitones makes it particularly accessible and naturally pleasing, explaining its prevalence in folk music and modern pop melodies.",
    ),
    ScaleDefinition::from_static(
        "Pentatonic Minor",
        "minor pentatonic",
        &[3, 2, 2, 3, 2],
        "Soulful and bluesy, with a natural flow that avoids semitone tensions. The minor pentatonic forms the backbone of blues and rock soloing.\n\n\
         Universal across cultures and particularly prominent in African-American music traditions, this scale is essential to blues, rock, and jazz. Its versatility and emotional directness make it the go-to choice for improvisation in many genres.",
    ),
    ScaleDefinition::from_static(
        "Blues Scale",
        "blues;minor blues",
        &[3, 2, 1, 1, 3, 2],
        "Raw and expressive, adding a flat fifth \"blue note\" to the minor pentatonic. This scale captures the essence of blues tonality.\n\n\
         Emerging from African-American musical traditions, the blues scale embodies the expressive microtonal inflections of early blues singers. Its addition of the flat fifth creates the characteristic tension that defines blues and rock music.",
    ),
    ScaleDefinition::from_static(
        "Locrian ♮6",
        "locrian natural 6;locrian #6",
        &[1, 2, 2, 1, 3, 1, 2],
        "Dark and enigmatic, featuring a natural sixth that provides a subtle contrast to its otherwise diminished character. This mode of the harmonic minor scale creates a unique tension.\n\n\
         A theoretical scale until the 20th century, it found its voice in contemporary classical and avant-garde jazz. Its combination of Locrian darkness with a natural sixth makes it useful for creating complex harmonic textures and modern jazz improvisation.",
    ),
    ScaleDefinition::from_static(
        "Ionian #5",
        "ionian augmented",
        &[2, 2, 1, 3, 1, 2, 1],
        "Bright and unexpected, combining major scale stability with an augmented fifth that creates a surprising lift. This mode of the harmonic minor adds intrigue to familiar territory.\n\n\
         Popular in modern jazz and fusion, this scale offers a fresh perspective on major tonality. Its augmented fifth creates interesting harmonic possibilities while maintaining the familiar Ionian framework, making it effective for contemporary composition and improvisation.",
    ),
    ScaleDefinition::from_static(
        "Dorian #4",
        "ukrainian dorian;romanian minor",
        &[2, 1, 3, 1, 2, 2, 1],
        "Mysterious and exotic, combining the soulful Dorian sound with a raised fourth that adds an unexpected Oriental flavor. The augmented fourth creates a distinctive tension point.\n\n\
         Emerging in 20th-century jazz and fusion, this scale bridges Western modal jazz with Eastern influences. Its unique interval structure makes it particularly effective for creating modal harmony with an exotic edge, often used in contemporary jazz and world fusion.",
    ),
    ScaleDefinition::from_static(
        "Phrygian Dominant",
        "phrygian major;spanish phrygian",
        &[1, 3, 1, 2, 1, 2, 2],
        "Intense and exotic, combining the characteristic flat second of Phrygian with a major third. This scale creates an immediately recognizable Spanish/Middle Eastern sound.\n\n\
         A cornerstone of Flamenco music and Middle Eastern traditions, this scale is also prominent in metal and fusion genres. Its unique combination of Western dominant function with Eastern melodic character makes it a powerful tool for cross-cultural musical expression.",
    ),
    ScaleDefinition::from_static(
        "Lydian #2",
        "",
        &[3, 1, 2, 1, 2, 2, 1],
        "Bright and otherworldly, featuring both a raised second and fourth degree. This unusual combination creates a distinctly ethereal quality.\n\n\
         A modern scale that gained popularity through contemporary classical and jazz fusion. Its wide initial interval and multiple raised degrees make it particularly effective for creating dreamlike, floating harmonies and modern jazz compositions.",
    ),
    ScaleDefinition::from_static(
        "UltraLocrian",
        "ultra locrian",
        &[1, 2, 1, 2, 2, 1, 3],
        "Extremely unstable and tense, featuring both diminished and double diminished intervals. The most altered and dissonant of the harmonic minor modes.\n\n\
         Primarily used in contemporary jazz and avant-garde music, this scale pushes harmonic boundaries to their limit. Its highly unstable nature makes it perfect for creating maximum tension and expressing extreme emotional states in modern composition.",
    ),
    ScaleDefinition::from_static(
        "Dorian ♭2",
        "phrygian #6",
        &[1, 2, 2, 2, 2, 1, 2],
        "Moody and sophisticated, combining the familiar Dorian sound with a flat second degree. This creates a unique blend of minor mode stability with Phrygian-like tension.\n\n\
         A key scale in modern jazz, particularly in the works of Miles Davis and other modal jazz pioneers. Its combination of familiar and exotic elements makes it particularly effective for contemporary jazz composition and improvisation.",
    ),
    ScaleDefinition::from_static(
        "Lydian Augmented",
        "",
        &[2, 2, 2, 2, 1, 2, 1],
        "Bright and expansive, featuring both a raised fourth and fifth. This creates an exceptionally open and spacious sound quality.\n\n\
         Popularized by modern jazz composers like Oliver Nelson and Wayne Shorter, this scale offers a more complex alternative to the standard Lydian mode. Its multiple raised degrees make it particularly effective for creating modern jazz harmonies and impressionistic colors.",
    ),
    ScaleDefinition::from_static(
        "Lydian Dominant",
        "overtone;acoustic",
        &[2, 2, 2, 1, 2, 1, 2],
        "Bright yet unresolved, combining the raised fourth of Lydian with a flatted seventh. Creates a sophisticated jazz-fusion sound.\n\n\
         Essential in modern jazz harmony, this scale is often used over dominant seventh chords with raised eleventh tensions. Its unique combination of Lydian brightness and dominant function makes it a favorite among jazz improvisers and composers.",
    ),
    ScaleDefinition::from_static(
        "Mixolydian ♭6",
        "aeolian dominant;hindu",
        &[2, 2, 1, 2, 1, 2, 2],
        "Warm and bittersweet, combining the dominant seventh quality with a minor sixth. Creates a more melancholic version of the Mixolydian sound.\n\n\
         Found in both jazz and film music, this scale offers a more complex emotional palette than standard Mixolydian. Its minor sixth adds a touch of darkness to the otherwise bright dominant sound, making it effective for creating nuanced emotional expressions.",
    ),
    ScaleDefinition::from_static(
        "Aeolian ♭5",
        "locrian #2;half diminished",
        &[2, 1, 2, 1, 2, 2, 2],
        "Dark and haunting, combining natural minor tonality with a diminished fifth. Creates an especially somber and unsettling mood.\n\n\
         Popular in contemporary classical and dark ambient music, this scale intensifies the minor tonality with its diminished fifth. Its unique interval structure makes it particularly effective for creating atmospheric and gothic moods.",
    ),
    ScaleDefinition::from_static(
        "Altered Scale (Super Locrian)",
        "altered;super locrian",
        &[1, 2, 1, 2, 2, 2, 2],
        "Highly unstable and altered, containing all the possible alterations of a dominant chord. Every scale degree except the root is flattened or sharpened.\n\n\
         Essential in modern jazz for playing over altered dominant chords, this scale emerged from the bebop era and became central to contemporary jazz harmony. Its highly altered nature makes it perfect for creating maximum harmonic tension before resolution.",
    ),
    ScaleDefinition::from_static(
        "Hungarian Minor",
        "double harmonic minor;hungarian gypsy",
        &[2, 1, 3, 1, 1, 3, 1],
        "Exotic and dramatic, featuring two augmented seconds that create a distinctly Eastern European character. Combines minor tonality with intense melodic tension.\n\n\
         Derived from Eastern European folk music, this scale became popular in classical music through composers like Liszt and Bartók. Its distinctive interval pattern makes it particularly effective for creating dramatic, ethnically-flavored melodies.",
    ),
    ScaleDefinition::from_static(
        "Hungarian Major",
        "",
        &[3, 1, 2, 1, 2, 1, 2],
        "Bright yet exotic, featuring an augmented second and several other unusual intervals. Creates a unique blend of major tonality with Eastern European character.\n\n\
         Popularized by Béla Bartók and other nationalist composers, this scale combines Western major tonality with Eastern European folk elements. Its unique interval structure makes it particularly effective for creating music that bridges classical and folk traditions.",
    ),
    ScaleDefinition::from_static(
        "Neapolitan Major",
        "",
        &[1, 2, 2, 2, 2, 2, 1],
        "Bright and mysterious, featuring a flat second degree that creates an immediate exotic color while maintaining a major tonality.\n\n\
         Originating in Italian Baroque music, this scale found new life in 20th-century classical music. Its combination of major scale stability with a Phrygian-like beginning makes it effective for creating both historical and contemporary musical expressions.",
    ),
    ScaleDefinition::from_static(
        "Neapolitan Minor",
        "",
        &[1, 2, 2, 2, 1, 3, 1],
        "Dark and dramatic, combining a flat second degree with harmonic minor characteristics. Creates a uniquely intense minor sound.\n\n\
         Developed during the Romantic era, this scale combines Baroque-era Neapolitan harmony with dramatic minor tonality. Its unique interval structure makes it particularly effective for creating intense emotional expressions in classical and contemporary contexts.",
    ),
    ScaleDefinition::from_static(
        "Gypsy Scale",
        "gypsy",
        &[1, 3, 1, 2, 1, 3, 1],
        "Dark and passionate, featuring two augmented seconds that create an unmistakable Eastern European character. The Gypsy scale combines Hungarian minor elements with Phrygian inflections.\n\n\
         Originating in Roma musical traditions, this scale became influential in classical music through composers like Liszt and Brahms. Its dramatic intervals make it particularly effective for creating intense, passionate melodies and exotic harmonies in both traditional and contemporary contexts.",
    ),
    ScaleDefinition::from_static(
        "Flamenco Scale",
        "flamenco",
        &[1, 3, 1, 2, 1, 2, 2],
        "Fiery and dramatic, identical to the Phrygian Dominant scale. Its flat second and major third create the characteristic Spanish sound.\n\n\
         Fundamental to Flamenco music and Spanish folk traditions, this scale embodies the passionate character of Andalusian music. Its unique interval structure makes it particularly effective for creating authentic Spanish musical expressions and modern fusion compositions.",
    ),
];

// --------------------------------------------------------------------------------------------------
