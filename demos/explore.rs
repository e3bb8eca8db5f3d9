use std::time::Duration;

use simplelog::*;

use chordscale::prelude::*;

// -------------------------------------------------------------------------------------------------

/// Note player which logs all notes instead of playing them.
struct LoggingPlayer {
    realtime: bool,
}

impl NotePlayer for LoggingPlayer {
    fn play_note(&mut self, note: &str, length: Duration) -> anyhow::Result<()> {
        log::info!("♪ {} ({} ms)", note, length.as_millis());
        Ok(())
    }

    fn play_chord(&mut self, notes: &[String], length: Duration) -> anyhow::Result<()> {
        log::info!("♫ {} ({} ms)", notes.join(" "), length.as_millis());
        Ok(())
    }

    fn release_all(&mut self) -> anyhow::Result<()> {
        log::info!("release all");
        Ok(())
    }

    fn wait(&mut self, duration: Duration) -> anyhow::Result<()> {
        if self.realtime {
            std::thread::sleep(duration);
        }
        Ok(())
    }
}

// -------------------------------------------------------------------------------------------------

// usage: explore [ROOT] [SCALE] [--flats] [--realtime] [--style=STYLE]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    // init logging
    TermLogger::init(
        log::STATIC_MAX_LEVEL,
        ConfigBuilder::default().build(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )
    .unwrap_or_else(|err| {
        log::error!("init_logger error: {:?}", err);
    });

    // parse arguments
    let mut positional = Vec::new();
    let mut spelling = Spelling::Sharps;
    let mut realtime = false;
    let mut config = VoicingConfig::default();
    for arg in std::env::args().skip(1) {
        if arg == "--flats" {
            spelling = Spelling::Flats;
        } else if arg == "--realtime" {
            realtime = true;
        } else if let Some(style) = arg.strip_prefix("--style=") {
            config = config.with_style(PlaybackStyle::try_from(style)?);
        } else {
            positional.push(arg);
        }
    }
    let root = PitchClass::try_from(positional.first().map_or("C", String::as_str))?;
    let scale_name = positional.get(1).map_or("Ionian", String::as_str);

    let exploration = explore(ScaleCatalog::builtin(), root, scale_name, spelling)?;
    let definition = exploration.scale.definition();

    // scale
    println!("\nScale: {}", exploration.scale);
    println!("Notes: {}", exploration.note_names().join(" - "));
    println!(
        "Degrees: {}",
        exploration
            .degrees
            .iter()
            .map(|note| format!("{}={}", note.degree, note.note.name(spelling)))
            .collect::<Vec<_>>()
            .join(" ")
    );
    println!("Steps: {}", definition.step_pattern_string());
    println!("\n{}", definition.description());

    // chord scale
    if exploration.chord_scale.is_empty() {
        println!("\nNo chord scale: only seven tone scales can be harmonized.");
    } else {
        println!("\nChord Scale:");
        for chord in &exploration.chord_scale {
            println!(
                "  {:<22} {:<14} {}",
                chord.name,
                chord.root_position(spelling),
                chord.function.as_deref().unwrap_or_default()
            );
            for inversion in &chord.inversions {
                println!("  {:<22} {}", "", inversion.name(spelling));
            }
        }
    }

    // extended harmony
    if !exploration.extended.is_empty() {
        for (category, chords) in exploration.extended.iter() {
            println!("\n{}:", category);
            for chord in chords {
                println!("  {:<12} {}", chord.name, chord.note_names(spelling));
            }
        }
    }

    // progressions
    if !exploration.progressions.is_empty() {
        println!("\nProgressions:");
        for resolved in &exploration.progressions {
            println!("  {}", resolved.progression);
        }
    }
    for diagnostic in &exploration.diagnostics {
        println!("  (skipped {})", diagnostic);
    }

    // playback
    let mut performer = Performer::new(LoggingPlayer { realtime }).with_spelling(spelling);
    performer.play_scale(exploration.scale.notes(), &config)?;
    if let Some(tonic) = exploration.chord_scale.first() {
        performer.play_chord(&tonic.notes, &config)?;
    }
    if let Some(resolved) = exploration.progressions.first() {
        performer.play_progression(&resolved.chords, &config)?;
    }

    Ok(())
}
