//! Turns abstract chords into octave assigned notes and schedules them for playback.

use std::time::Duration;

use derive_more::{Deref, Display};
use num_traits::ToPrimitive;

use crate::{Octave, PitchClass, Spelling, VoicedNote};

type Fraction = num_rational::Rational32;

// -------------------------------------------------------------------------------------------------

/// Selects how many and which chord tones get voiced.
#[derive(Debug, Display, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum Density {
    /// First three chord tones.
    #[display("triad")]
    Triad,
    /// First four chord tones.
    #[default]
    #[display("seventh")]
    Seventh,
    /// Root, fifth and the highest chord tone.
    #[display("shell")]
    Shell,
    /// Up to seven chord tones.
    #[display("extended")]
    Extended,
}

impl TryFrom<&str> for Density {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "triad" => Ok(Self::Triad),
            "seventh" | "7th" => Ok(Self::Seventh),
            "shell" => Ok(Self::Shell),
            "extended" => Ok(Self::Extended),
            _ => Err(format!(
                "Invalid density '{}': expected one of 'triad', 'seventh', 'shell', 'extended'",
                s
            )),
        }
    }
}

/// Octave assignment style of a voicing.
#[derive(Debug, Display, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum VoicingRange {
    #[default]
    #[display("close")]
    Close,
    #[display("spread")]
    Spread,
    #[display("drop2")]
    Drop2,
    #[display("drop3")]
    Drop3,
    #[display("quartal")]
    Quartal,
}

impl TryFrom<&str> for VoicingRange {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "close" => Ok(Self::Close),
            "spread" => Ok(Self::Spread),
            "drop2" | "drop-2" => Ok(Self::Drop2),
            "drop3" | "drop-3" => Ok(Self::Drop3),
            "quartal" => Ok(Self::Quartal),
            _ => Err(format!(
                "Invalid voicing range '{}': expected one of 'close', 'spread', 'drop2', 'drop3', 'quartal'",
                s
            )),
        }
    }
}

/// Timing of voiced notes. Never affects pitches.
#[derive(Debug, Display, Default, Copy, Clone, PartialEq, Eq, Hash)]
pub enum PlaybackStyle {
    #[default]
    #[display("block")]
    Block,
    #[display("arpeggio")]
    Arpeggio,
    #[display("ascending")]
    Ascending,
    #[display("descending")]
    Descending,
    #[display("broken")]
    Broken,
}

impl TryFrom<&str> for PlaybackStyle {
    type Error = String;

    fn try_from(s: &str) -> Result<Self, String> {
        match s.trim().to_ascii_lowercase().as_str() {
            "block" => Ok(Self::Block),
            "arpeggio" => Ok(Self::Arpeggio),
            "ascending" => Ok(Self::Ascending),
            "descending" => Ok(Self::Descending),
            "broken" => Ok(Self::Broken),
            _ => Err(format!(
                "Invalid playback style '{}': expected one of 'block', 'arpeggio', 'ascending', 'descending', 'broken'",
                s
            )),
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Voicing and playback settings.
#[derive(Debug, Clone, PartialEq)]
pub struct VoicingConfig {
    pub density: Density,
    pub range: VoicingRange,
    pub style: PlaybackStyle,
    beats_per_min: f32,
    base_octave: i8,
}

impl VoicingConfig {
    pub const MIN_TEMPO: f32 = 60.0;
    pub const MAX_TEMPO: f32 = 240.0;
    pub const DEFAULT_TEMPO: f32 = 120.0;
    pub const DEFAULT_BASE_OCTAVE: i8 = 3;

    #[must_use]
    pub fn with_density(self, density: Density) -> Self {
        Self { density, ..self }
    }

    #[must_use]
    pub fn with_range(self, range: VoicingRange) -> Self {
        Self { range, ..self }
    }

    #[must_use]
    pub fn with_style(self, style: PlaybackStyle) -> Self {
        Self { style, ..self }
    }

    /// Set tempo in beats per minute, clamped to `[MIN_TEMPO, MAX_TEMPO]`.
    #[must_use]
    pub fn with_tempo(self, beats_per_min: f32) -> Self {
        Self {
            beats_per_min: Self::clamp_tempo(beats_per_min),
            ..self
        }
    }

    #[must_use]
    pub fn with_base_octave(self, base_octave: i8) -> Self {
        Self {
            base_octave,
            ..self
        }
    }

    pub fn tempo(&self) -> f32 {
        self.beats_per_min
    }

    pub fn base_octave(&self) -> Octave {
        Octave::from(self.base_octave)
    }

    /// Duration of a single beat in seconds.
    pub fn seconds_per_beat(&self) -> f64 {
        60.0 / self.beats_per_min as f64
    }

    // NaN falls back to the default tempo.
    fn clamp_tempo(beats_per_min: f32) -> f32 {
        if beats_per_min.is_nan() {
            Self::DEFAULT_TEMPO
        } else {
            beats_per_min.clamp(Self::MIN_TEMPO, Self::MAX_TEMPO)
        }
    }
}

impl Default for VoicingConfig {
    fn default() -> Self {
        Self {
            density: Density::default(),
            range: VoicingRange::default(),
            style: PlaybackStyle::default(),
            beats_per_min: Self::DEFAULT_TEMPO,
            base_octave: Self::DEFAULT_BASE_OCTAVE,
        }
    }
}

// -------------------------------------------------------------------------------------------------

/// Pick the chord tones the given density retains.
pub fn filter_density<T: Clone>(notes: &[T], density: Density) -> Vec<T> {
    match density {
        Density::Triad => notes.iter().take(3).cloned().collect(),
        Density::Seventh => notes.iter().take(4).cloned().collect(),
        Density::Shell => {
            if notes.len() >= 3 {
                vec![
                    notes[0].clone(),
                    notes[2].clone(),
                    notes[notes.len() - 1].clone(),
                ]
            } else {
                notes.to_vec()
            }
        }
        Density::Extended => notes.iter().take(7).cloned().collect(),
    }
}

// Returns None when an octave leaves the representable range.
fn assign_octaves(
    notes: &[PitchClass],
    range: VoicingRange,
    base: Octave,
) -> Option<Vec<VoicedNote>> {
    let shifted =
        |amount: usize| -> Option<Octave> { base.checked_add(i8::try_from(amount).ok()?) };
    let dropped = |position: usize, index: usize| -> Option<Octave> {
        if notes.len() >= 4 && index == position {
            base.checked_add(-1)
        } else {
            Some(base)
        }
    };
    notes
        .iter()
        .enumerate()
        .map(|(index, pitch)| {
            let octave = match range {
                VoicingRange::Close => {
                    if index > 0 && pitch.index() <= notes[index - 1].index() {
                        shifted(1)?
                    } else {
                        base
                    }
                }
                VoicingRange::Spread => shifted(index / 2)?,
                VoicingRange::Drop2 => dropped(1, index)?,
                VoicingRange::Drop3 => dropped(2, index)?,
                VoicingRange::Quartal => shifted(index / 4)?,
            };
            Some(VoicedNote {
                pitch: *pitch,
                octave,
            })
        })
        .collect()
}

fn voice_filtered(notes: &[PitchClass], config: &VoicingConfig) -> Vec<VoicedNote> {
    if notes.is_empty() {
        return vec![];
    }
    let base = config.base_octave();
    assign_octaves(notes, config.range, base).unwrap_or_else(|| {
        log::warn!(
            "Failed to apply {} voicing at octave {}: using the base octave for all notes",
            config.range,
            base
        );
        notes
            .iter()
            .map(|pitch| VoicedNote {
                pitch: *pitch,
                octave: base,
            })
            .collect()
    })
}

/// Voice a chord: filter its tones by density, then assign octaves by range style.
///
/// An empty result means there's nothing to play. Voicing never fails: when octaves can't be
/// assigned, all notes get placed at the base octave.
pub fn voice(notes: &[PitchClass], config: &VoicingConfig) -> Vec<VoicedNote> {
    voice_filtered(&filter_density(notes, config.density), config)
}

/// Voice a chord given as note names. Density filtering applies to the names, unparsable names
/// get dropped afterwards.
pub fn voice_names<S: AsRef<str>>(names: &[S], config: &VoicingConfig) -> Vec<VoicedNote> {
    let names = names.iter().map(AsRef::as_ref).collect::<Vec<&str>>();
    let notes = filter_density(&names, config.density)
        .into_iter()
        .filter_map(|name| match PitchClass::try_from(name) {
            Ok(pitch) => Some(pitch),
            Err(err) => {
                log::debug!("Skipping note in voicing: {}", err);
                None
            }
        })
        .collect::<Vec<_>>();
    voice_filtered(&notes, config)
}

// -------------------------------------------------------------------------------------------------

/// Notes which get triggered together. Start and length are specified in beats.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScheduledEvent {
    pub notes: Vec<VoicedNote>,
    pub start: Fraction,
    pub length: Fraction,
}

impl ScheduledEvent {
    pub fn new(notes: Vec<VoicedNote>, start: Fraction, length: Fraction) -> Self {
        Self {
            notes,
            start,
            length,
        }
    }

    /// End of the event in beats.
    pub fn end(&self) -> Fraction {
        self.start + self.length
    }

    /// Note names with octave, as consumed by note players.
    pub fn note_names(&self, spelling: Spelling) -> Vec<String> {
        self.notes.iter().map(|note| note.name(spelling)).collect()
    }
}

/// Timestamped note events, ready to be realized by a note player.
#[derive(Debug, Clone, PartialEq, Deref)]
pub struct Schedule {
    beats_per_min: f32,
    #[deref]
    events: Vec<ScheduledEvent>,
}

impl Schedule {
    /// Create a new schedule. The tempo gets clamped like [`VoicingConfig::with_tempo`] does.
    pub fn new(beats_per_min: f32, events: Vec<ScheduledEvent>) -> Self {
        Self {
            beats_per_min: VoicingConfig::clamp_tempo(beats_per_min),
            events,
        }
    }

    pub fn tempo(&self) -> f32 {
        self.beats_per_min
    }

    pub fn events(&self) -> &[ScheduledEvent] {
        &self.events
    }

    /// End of the last sounding event in beats.
    pub fn length(&self) -> Fraction {
        self.events
            .iter()
            .map(ScheduledEvent::end)
            .max()
            .unwrap_or_else(|| Fraction::from_integer(0))
    }

    /// Convert a beat time to seconds at the schedule's tempo.
    pub fn beats_to_seconds(&self, beats: Fraction) -> f64 {
        beats.to_f64().unwrap_or(0.0) * 60.0 / self.beats_per_min as f64
    }

    /// Convert a beat time to a duration at the schedule's tempo. Negative beat times, and times
    /// which don't fit into a duration, yield a zero duration.
    pub fn beats_to_duration(&self, beats: Fraction) -> Duration {
        Duration::try_from_secs_f64(self.beats_to_seconds(beats)).unwrap_or(Duration::ZERO)
    }

    /// Start of the given event as offset from the schedule's onset.
    pub fn start_of(&self, event: &ScheduledEvent) -> Duration {
        self.beats_to_duration(event.start)
    }

    /// Sounding length of the given event.
    pub fn length_of(&self, event: &ScheduledEvent) -> Duration {
        self.beats_to_duration(event.length)
    }

    pub fn into_events(self) -> Vec<ScheduledEvent> {
        self.events
    }
}

// -------------------------------------------------------------------------------------------------

/// Schedule voiced notes with the configured playback style.
///
/// Block chords sound for a single beat. All other styles space their notes or note pairs half a
/// beat apart, and let each of them sound for two beats.
pub fn schedule(voiced: &[VoicedNote], config: &VoicingConfig) -> Schedule {
    let half_beats = |index: usize| Fraction::new(index as i32, 2);
    let sustain = Fraction::from_integer(2);
    let events = match config.style {
        PlaybackStyle::Block => {
            if voiced.is_empty() {
                vec![]
            } else {
                vec![ScheduledEvent::new(
                    voiced.to_vec(),
                    Fraction::from_integer(0),
                    Fraction::from_integer(1),
                )]
            }
        }
        PlaybackStyle::Arpeggio | PlaybackStyle::Ascending => voiced
            .iter()
            .enumerate()
            .map(|(index, note)| ScheduledEvent::new(vec![*note], half_beats(index), sustain))
            .collect(),
        PlaybackStyle::Descending => voiced
            .iter()
            .rev()
            .enumerate()
            .map(|(index, note)| ScheduledEvent::new(vec![*note], half_beats(index), sustain))
            .collect(),
        PlaybackStyle::Broken => voiced
            .chunks(2)
            .enumerate()
            .map(|(pair_index, pair)| {
                ScheduledEvent::new(pair.to_vec(), half_beats(pair_index), sustain)
            })
            .collect(),
    };
    Schedule::new(config.tempo(), events)
}

/// Voice a chord and schedule it with the configured playback style.
pub fn voice_and_schedule(notes: &[PitchClass], config: &VoicingConfig) -> Schedule {
    schedule(&voice(notes, config), config)
}

/// Schedule a scale run: each scale tone at octave 4 as an eighth note, one beat apart, followed
/// by the root one octave up as a quarter note.
pub fn schedule_scale(scale: &[PitchClass], config: &VoicingConfig) -> Schedule {
    let mut events = scale
        .iter()
        .enumerate()
        .map(|(index, pitch)| {
            ScheduledEvent::new(
                vec![VoicedNote::new(*pitch, 4)],
                Fraction::from_integer(index as i32),
                Fraction::new(1, 2),
            )
        })
        .collect::<Vec<_>>();
    if let Some(root) = scale.first() {
        events.push(ScheduledEvent::new(
            vec![VoicedNote::new(*root, 5)],
            Fraction::from_integer(scale.len() as i32),
            Fraction::from_integer(1),
        ));
    }
    Schedule::new(config.tempo(), events)
}

/// Schedule a chord progression: each chord voiced with the given config and played as a block
/// chord for two beats, one chord every two beats. Chords without voiced notes leave a rest.
pub fn schedule_progression<C: AsRef<[PitchClass]>>(
    chords: &[C],
    config: &VoicingConfig,
) -> Schedule {
    let events = chords
        .iter()
        .enumerate()
        .filter_map(|(index, chord)| {
            let voiced = voice(chord.as_ref(), config);
            if voiced.is_empty() {
                return None;
            }
            Some(ScheduledEvent::new(
                voiced,
                Fraction::from_integer(2 * index as i32),
                Fraction::from_integer(2),
            ))
        })
        .collect();
    Schedule::new(config.tempo(), events)
}

// --------------------------------------------------------------------------------------------------
