//! Realizes note schedules with an external note player.

use std::{
    sync::{
        atomic::{AtomicBool, Ordering},
        Arc,
    },
    time::Duration,
};

use crate::{
    voicing::{schedule_progression, schedule_scale, voice_and_schedule, Schedule},
    PitchClass, Spelling, VoicingConfig,
};

// -------------------------------------------------------------------------------------------------

/// External sound source which plays notes given as note and octave strings such as `Db3`.
///
/// Implementations are free to play notes asynchronously: the performer only expects the calls to
/// trigger the notes, and uses `wait` to realize the time between events.
pub trait NotePlayer {
    /// Trigger a single note for the given length.
    fn play_note(&mut self, note: &str, length: Duration) -> anyhow::Result<()>;
    /// Trigger all given notes at once for the given length.
    fn play_chord(&mut self, notes: &[String], length: Duration) -> anyhow::Result<()>;
    /// Stop all sounding notes.
    fn release_all(&mut self) -> anyhow::Result<()>;

    /// Wait until the next event is due. By default blocks the calling thread.
    fn wait(&mut self, duration: Duration) -> anyhow::Result<()> {
        std::thread::sleep(duration);
        Ok(())
    }
}

// -------------------------------------------------------------------------------------------------

/// Plays back [`Schedule`]s on a [`NotePlayer`].
///
/// Sounding notes get released before each new performance. When the player fails, the error is
/// logged and returned, and the performer is no longer playing.
pub struct Performer<P: NotePlayer> {
    player: P,
    spelling: Spelling,
    is_playing: Arc<AtomicBool>,
}

impl<P: NotePlayer> Performer<P> {
    pub fn new(player: P) -> Self {
        Self {
            player,
            spelling: Spelling::default(),
            is_playing: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Spelling of the note names that get passed to the player.
    #[must_use]
    pub fn with_spelling(self, spelling: Spelling) -> Self {
        Self { spelling, ..self }
    }

    pub fn is_playing(&self) -> bool {
        self.is_playing.load(Ordering::Relaxed)
    }

    /// Shared playback state, which can be watched from other threads or from within the note
    /// player while a performance is running.
    pub fn playing_state(&self) -> Arc<AtomicBool> {
        Arc::clone(&self.is_playing)
    }

    pub fn player(&self) -> &P {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut P {
        &mut self.player
    }

    pub fn into_player(self) -> P {
        self.player
    }

    /// Play all events of the given schedule.
    pub fn perform(&mut self, schedule: &Schedule) -> anyhow::Result<()> {
        self.is_playing.store(true, Ordering::Relaxed);
        let result = self.run(schedule);
        self.is_playing.store(false, Ordering::Relaxed);
        if let Err(err) = &result {
            log::error!("Playback failed: {}", err);
        }
        result
    }

    /// Voice and play a chord with the given voicing and playback settings.
    pub fn play_chord(
        &mut self,
        notes: &[PitchClass],
        config: &VoicingConfig,
    ) -> anyhow::Result<()> {
        self.perform(&voice_and_schedule(notes, config))
    }

    /// Play a scale run, followed by the root an octave up.
    pub fn play_scale(
        &mut self,
        scale: &[PitchClass],
        config: &VoicingConfig,
    ) -> anyhow::Result<()> {
        self.perform(&schedule_scale(scale, config))
    }

    /// Play a chord progression as voiced block chords.
    pub fn play_progression<C: AsRef<[PitchClass]>>(
        &mut self,
        chords: &[C],
        config: &VoicingConfig,
    ) -> anyhow::Result<()> {
        self.perform(&schedule_progression(chords, config))
    }

    fn run(&mut self, schedule: &Schedule) -> anyhow::Result<()> {
        self.player.release_all()?;
        let mut position = Duration::ZERO;
        for event in schedule.iter() {
            let start = schedule.start_of(event);
            if start > position {
                self.player.wait(start - position)?;
                position = start;
            }
            let length = schedule.length_of(event);
            let notes = event.note_names(self.spelling);
            match notes.as_slice() {
                [] => (),
                [note] => self.player.play_note(note, length)?,
                _ => self.player.play_chord(&notes, length)?,
            }
        }
        Ok(())
    }
}

// --------------------------------------------------------------------------------------------------
