//! Note name and roman numeral parsing, based on a small pest grammar.

use pest::{iterators::Pair, Parser};
use pest_derive::Parser;

use super::PitchClass;

// -------------------------------------------------------------------------------------------------

#[derive(Parser)]
#[grammar = "pitch/notation.pest"]
struct NotationParser {}

// -------------------------------------------------------------------------------------------------

fn letter_value(c: char) -> Option<i32> {
    match c.to_ascii_lowercase() {
        'c' => Some(0),
        'd' => Some(2),
        'e' => Some(4),
        'f' => Some(5),
        'g' => Some(7),
        'a' => Some(9),
        'b' => Some(11),
        _ => None,
    }
}

fn numeral_value(numeral: &str) -> Option<usize> {
    match numeral.to_ascii_lowercase().as_str() {
        "i" => Some(0),
        "ii" => Some(1),
        "iii" => Some(2),
        "iv" => Some(3),
        "v" => Some(4),
        "vi" => Some(5),
        "vii" => Some(6),
        _ => None,
    }
}

// the errors here should be unreachable unless there is a bug in the pest grammar
fn parse_pitch_class_pair(pair: Pair<Rule>) -> Result<PitchClass, String> {
    let mut key = None;
    let mut shift = 0;
    for p in pair.into_inner() {
        match p.as_rule() {
            Rule::letter => key = p.as_str().chars().next().and_then(letter_value),
            Rule::sharp => shift = 1,
            Rule::flat => shift = -1,
            _ => (),
        }
    }
    key.map(|key| PitchClass::from_semitone(key + shift))
        .ok_or_else(|| "missing note letter".to_string())
}

// -------------------------------------------------------------------------------------------------

/// Parse a plain pitch class name such as `C`, `c#`, `Db` or `B♭`.
pub(crate) fn parse_pitch_class(s: &str) -> Result<PitchClass, String> {
    let pitch = NotationParser::parse(Rule::pitch, s.trim())
        .map_err(|err| format!("invalid note name '{}': {}", s, err))?
        .next()
        .ok_or_else(|| format!("invalid note name '{}'", s))?;
    for p in pitch.into_inner() {
        if p.as_rule() == Rule::pitch_class {
            return parse_pitch_class_pair(p)
                .map_err(|err| format!("invalid note name '{}': {}", s, err));
        }
    }
    Err(format!("invalid note name '{}'", s))
}

/// Parse a note name with an optional octave such as `C4`, `F#-1`, `Eb_2` or `A`.
pub(crate) fn parse_note(s: &str) -> Result<(PitchClass, Option<i8>), String> {
    let note = NotationParser::parse(Rule::note, s.trim())
        .map_err(|err| format!("invalid note '{}': {}", s, err))?
        .next()
        .ok_or_else(|| format!("invalid note '{}'", s))?;
    let mut pitch_class = None;
    let mut octave = None;
    for p in note.into_inner() {
        match p.as_rule() {
            Rule::pitch_class => {
                pitch_class = Some(
                    parse_pitch_class_pair(p)
                        .map_err(|err| format!("invalid note '{}': {}", s, err))?,
                )
            }
            Rule::octave => {
                octave = Some(p.as_str().parse::<i8>().map_err(|err| {
                    format!("invalid note '{}' - octave '{}': {}", s, p.as_str(), err)
                })?)
            }
            _ => (),
        }
    }
    pitch_class
        .map(|pitch_class| (pitch_class, octave))
        .ok_or_else(|| format!("invalid note '{}'", s))
}

/// Parse a roman numeral progression such as `I-vi-IV-V` into zero based scale degrees.
/// Chord quality suffixes (`°`, `7`, `Maj7`, ...) are accepted but ignored.
pub(crate) fn parse_numerals(s: &str) -> Result<Vec<usize>, String> {
    let progression = NotationParser::parse(Rule::progression, s)
        .map_err(|err| format!("invalid progression '{}': {}", s, err))?
        .next()
        .ok_or_else(|| format!("invalid progression '{}'", s))?;
    let mut degrees = Vec::new();
    for degree in progression.into_inner() {
        if degree.as_rule() != Rule::degree {
            continue;
        }
        for p in degree.into_inner() {
            if p.as_rule() == Rule::numeral {
                let value = numeral_value(p.as_str())
                    .ok_or_else(|| format!("invalid roman numeral '{}'", p.as_str()))?;
                degrees.push(value);
            }
        }
    }
    Ok(degrees)
}

// --------------------------------------------------------------------------------------------------

#[cfg(test)]
mod test {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn pitch_classes() -> Result<(), String> {
        assert_eq!(parse_pitch_class("C")?, PitchClass::C);
        assert_eq!(parse_pitch_class("c#")?, PitchClass::Cs);
        assert_eq!(parse_pitch_class("Db")?, PitchClass::Cs);
        assert_eq!(parse_pitch_class("B♭")?, PitchClass::As);
        assert_eq!(parse_pitch_class("bb")?, PitchClass::As);
        assert_eq!(parse_pitch_class("Fs")?, PitchClass::Fs);
        assert_eq!(parse_pitch_class("Cb")?, PitchClass::B);
        assert_eq!(parse_pitch_class("B#")?, PitchClass::C);
        assert_eq!(parse_pitch_class("E♮")?, PitchClass::E);

        assert!(parse_pitch_class("").is_err());
        assert!(parse_pitch_class("H").is_err());
        assert!(parse_pitch_class("C4").is_err());
        assert!(parse_pitch_class("C##").is_err());
        Ok(())
    }

    #[test]
    fn notes() -> Result<(), String> {
        assert_eq!(parse_note("C4")?, (PitchClass::C, Some(4)));
        assert_eq!(parse_note("F#-1")?, (PitchClass::Fs, Some(-1)));
        assert_eq!(parse_note("Eb_2")?, (PitchClass::Ds, Some(2)));
        assert_eq!(parse_note("g 5")?, (PitchClass::G, Some(5)));
        assert_eq!(parse_note("A")?, (PitchClass::A, None));

        assert!(parse_note("x4").is_err());
        assert!(parse_note("c.2").is_err());
        assert!(parse_note("C400").is_err());
        Ok(())
    }

    #[test]
    fn numerals() -> Result<(), String> {
        assert_eq!(parse_numerals("I-IV-V")?, vec![0, 3, 4]);
        assert_eq!(parse_numerals("ii – V7 – IMaj7")?, vec![1, 4, 0]);
        assert_eq!(parse_numerals("I vi IV V")?, vec![0, 5, 3, 4]);
        assert_eq!(parse_numerals("iii-vii°")?, vec![2, 6]);

        assert!(parse_numerals("").is_err());
        assert!(parse_numerals("I-VIII").is_err());
        assert!(parse_numerals("I--V").is_err());
        Ok(())
    }
}
