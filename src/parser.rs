//! Handles parsing of note names and chord symbols.
//!
//! ```
//! use gamut::parser::{parse_chord, parse_note};
//! use gamut::{ChordPattern, Note};
//!
//! assert_eq!(parse_note("F#4").unwrap(), Note::F.sharp().at_octave(4));
//!
//! let chord = parse_chord("Bbm7").unwrap();
//! assert_eq!(chord.root, Note::B.flat());
//! assert_eq!(chord.pattern, ChordPattern::MINOR7);
//! ```

use std::str::FromStr;

use combine::parser::char::{digit, spaces, string};
use combine::{attempt, between, choice, eof, many, one_of, optional, sep_by1, token};
use combine::{ParseError, Parser, Stream};
use tracing::debug;

use crate::chord::{Chord, ChordPattern};
use crate::error::{Error, Result};
use crate::note::Note;
use crate::pitch::Pitch;
use crate::pitch_class::{PitchClass, DOUBLE_FLAT, DOUBLE_SHARP, FLAT, NATURAL, SHARP};

/// Parse an alteration written in ASCII (`#`, `b`, `##`, `bb`, `n`) or with
/// Unicode accidentals. The empty string is a natural.
pub fn parse_alteration(input: &str) -> Result<i8> {
    match input {
        "bb" | DOUBLE_FLAT => Ok(-2),
        "b" | FLAT => Ok(-1),
        "" | "n" | NATURAL => Ok(0),
        "#" | SHARP => Ok(1),
        "##" | DOUBLE_SHARP => Ok(2),
        _ => Err(Error::UnknownAlteration(input.to_string())),
    }
}

/// Parse a note such as `C`, `F#4`, `eb` or `B♭-1`.
///
/// ```text
/// Note : [A-Ga-g] Accidental* Octave?
///      ;
///
/// Octave : ('+' | '-')? [0-9]
///        ;
/// ```
pub fn parse_note(input: &str) -> Result<Note> {
    let ((base, accidentals, octave), _) = (pitch_class_parts(), optional(octave()))
        .map(|((base, accidentals), octave)| (base, accidentals, octave))
        .skip(eof())
        .parse(input)
        .map_err(|err| {
            debug!(input, %err, "rejected note");
            Error::CannotParseNote(input.to_string())
        })?;

    let pitch_class = pitch_class_from_parts(base, &accidentals)?;
    Ok(Note::new(pitch_class, octave.unwrap_or(0)))
}

/// Parse a note and return its pitch.
pub fn parse_pitch(input: &str) -> Result<Pitch> {
    parse_note(input).map(Note::pitch)
}

/// Parse a pitch class: a note without octave.
pub fn parse_pitch_class(input: &str) -> Result<PitchClass> {
    let ((base, accidentals), _) = pitch_class_parts()
        .skip(eof())
        .parse(input)
        .map_err(|err| {
            debug!(input, %err, "rejected pitch class");
            Error::CannotParseNote(input.to_string())
        })?;

    pitch_class_from_parts(base, &accidentals)
}

/// Recognizes an entire chord symbol, such as `F#mMaj7` or `C7(#5, b9)`.
///
/// ```text
/// Chord : Root ChordStandard Alterations
///       ;
///
/// Root : [A-Ga-g] Accidental*
///      ;
/// ```
///
/// See `chord_standard` and `chord_alterations` for the rest of the grammar.
pub fn parse_chord(input: &str) -> Result<Chord> {
    let (((base, accidentals), standard, alterations), _) =
        (pitch_class_parts(), chord_standard(), chord_alterations())
            .skip(eof())
            .parse(input)
            .map_err(|err| {
                debug!(input, %err, "rejected chord");
                Error::CannotParseChord(input.to_string())
            })?;

    let root = pitch_class_from_parts(base, &accidentals)?;
    let structure = Structure::new().merge(&standard).merge(&alterations);

    Ok(Chord::new(Note::from(root), structure.pattern()))
}

impl FromStr for Note {
    type Err = Error;

    fn from_str(input: &str) -> Result<Note> {
        parse_note(input)
    }
}

impl FromStr for PitchClass {
    type Err = Error;

    fn from_str(input: &str) -> Result<PitchClass> {
        parse_pitch_class(input)
    }
}

impl FromStr for Chord {
    type Err = Error;

    fn from_str(input: &str) -> Result<Chord> {
        parse_chord(input)
    }
}

fn pitch_class_from_parts(base: char, accidentals: &str) -> Result<PitchClass> {
    let alt = parse_alteration(accidentals)?;
    PitchClass::from_char(base.to_ascii_uppercase(), alt)
}

/// Parses a base letter followed by its accidentals, left unvalidated.
fn pitch_class_parts<Input>() -> impl Parser<Input, Output = (char, String)>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let base = one_of("ABCDEFGabcdefg".chars()).expected("Note: [A-G]");
    let accidentals = many::<String, _, _>(one_of("#b♯♭𝄪𝄫♮n".chars()));

    (base, accidentals)
}

fn octave<Input>() -> impl Parser<Input, Output = i8>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    (optional(one_of("+-".chars())), digit()).map(|(sign, digit): (Option<char>, char)| {
        let value = digit.to_digit(10).unwrap_or_default() as i8;
        if sign == Some('-') {
            -value
        } else {
            value
        }
    })
}

/// Parses a single chord accidental.
///
/// ```text
/// Accidental : 'b' '#' '♭' '♯'
///            ;
/// ```
fn accidental<Input>() -> impl Parser<Input, Output = i8>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    one_of("b#♭♯".chars()).map(|x| match x {
        '#' | '♯' => 1,
        _ => -1,
    })
}

/// A tone of a chord, named by its degree above the root.
#[derive(Copy, Clone, Debug, PartialEq)]
enum Tone {
    N1,
    N2,
    N3,
    N4,
    N5,
    N6,
    N7,
    N9,
    N11,
    N13,
}

/// The total number of `Tone` elements.
const TONE_COUNT: usize = 10;

const TONES: [Tone; TONE_COUNT] = [
    Tone::N1,
    Tone::N2,
    Tone::N3,
    Tone::N4,
    Tone::N5,
    Tone::N6,
    Tone::N7,
    Tone::N9,
    Tone::N11,
    Tone::N13,
];

/// A tone with its alteration, e.g. `(N5, -1)` for a flat fifth.
type Component = (Tone, i8);

impl Tone {
    fn index(self) -> usize {
        self as usize
    }

    /// Returns the semitones above the root for the unaltered tone.
    ///
    /// The unaltered seventh is the minor seventh, as found in a dominant
    /// chord. Ninths and above land in the extension octave.
    fn semitones(self) -> i8 {
        use self::Tone::*;

        match self {
            N1 => 0,
            N2 => 2,
            N3 => 4,
            N4 => 5,
            N5 => 7,
            N6 => 9,
            N7 => 10,
            N9 => 14,
            N11 => 17,
            N13 => 21,
        }
    }

    /// Returns the tones implied by an extended chord number.
    ///
    /// For example, a `C11` chord implicitly includes the lower extended
    /// intervals of the `7`th and `9`th within its representation.
    fn extended_components(self) -> &'static [Component] {
        use self::Tone::*;

        static COMPONENTS: [Component; 4] = [(N7, 0), (N9, 0), (N11, 0), (N13, 0)];

        match self {
            N6 => &[(N6, 0)],
            N7 => &COMPONENTS[..1],
            N9 => &COMPONENTS[..2],
            N11 => &COMPONENTS[..3],
            N13 => &COMPONENTS[..4],
            _ => &[],
        }
    }
}

/// The intervallic structure of a chord while it is being parsed.
///
/// Later components override earlier ones for the same tone, which is how
/// an alteration such as `(b5)` replaces the fifth of the standard chord.
#[derive(Clone, Debug, PartialEq)]
struct Structure([Option<i8>; TONE_COUNT]);

impl Structure {
    /// This will always have the root by default.
    fn new() -> Structure {
        Structure::from_component((Tone::N1, 0))
    }

    fn from_component(component: Component) -> Structure {
        Structure([None; TONE_COUNT]).insert(component)
    }

    fn insert(mut self, (tone, offset): Component) -> Structure {
        self.0[tone.index()] = Some(offset);
        self
    }

    fn insert_many(mut self, components: &[Component]) -> Structure {
        for &component in components {
            self = self.insert(component);
        }
        self
    }

    /// Merge two structures together with preference for elements within
    /// the `other` structure.
    fn merge(mut self, other: &Structure) -> Structure {
        for (mine, theirs) in self.0.iter_mut().zip(other.0.iter()) {
            if theirs.is_some() {
                *mine = *theirs;
            }
        }
        self
    }

    fn pattern(&self) -> ChordPattern {
        TONES
            .iter()
            .zip(self.0.iter())
            .filter_map(|(tone, offset)| offset.map(|offset| tone.semitones() + offset))
            .fold(ChordPattern::default(), |pattern, degree| pattern.add(Pitch(degree)))
    }
}

/// Parses a standard chord.
///
/// This will recognize standard chords based on a third/seventh interval with
/// a possible extended interval present.
///
/// ```text
/// ThirdQuality : 'min' | 'm' | '-' | 'dim' | '°' | 'aug' | '+'
///              | 'sus4' | 'sus2' | 'sus'
///              ;
///
/// SeventhQuality : 'Maj' | 'Ma' | 'M' | 'Δ'
///                ;
///
/// ExtendedInterval : '6' | '7' | '9' | '11' | '13'
///                  ;
///
/// ChordStandard : ThirdQuality? (SeventhQuality? ExtendedInterval)?
///               ;
/// ```
///
/// A diminished chord with an unqualified seventh takes the diminished
/// seventh, so `dim7` is the full diminished tetrad.
fn chord_standard<Input>() -> impl Parser<Input, Output = Structure>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let third = optional(choice([
        attempt(string("min")),
        attempt(string("m")),
        attempt(string("-")),
        attempt(string("dim")),
        attempt(string("°")),
        attempt(string("aug")),
        attempt(string("+")),
        attempt(string("sus4")),
        attempt(string("sus2")),
        attempt(string("sus")),
    ]))
    .map(|q| {
        let diminished = matches!(q, Some("dim") | Some("°"));
        let structure = match q {
            Some("min") | Some("m") | Some("-") => {
                Structure::from_component((Tone::N3, -1)).insert((Tone::N5, 0))
            }
            Some("dim") | Some("°") => {
                Structure::from_component((Tone::N3, -1)).insert((Tone::N5, -1))
            }
            Some("aug") | Some("+") => {
                Structure::from_component((Tone::N3, 0)).insert((Tone::N5, 1))
            }
            Some("sus2") => Structure::from_component((Tone::N2, 0)).insert((Tone::N5, 0)),
            Some(_) => Structure::from_component((Tone::N4, 0)).insert((Tone::N5, 0)),
            None => Structure::from_component((Tone::N3, 0)).insert((Tone::N5, 0)),
        };
        (structure, diminished)
    });

    let seventh = optional(choice([
        attempt(string("Maj")),
        attempt(string("Ma")),
        attempt(string("M")),
        attempt(string("Δ")),
    ]))
    .map(|q| q.is_some());

    let interval = choice([
        attempt(string("6")),
        attempt(string("7")),
        attempt(string("9")),
        attempt(string("11")),
        attempt(string("13")),
    ])
    .map(|q| match q {
        "6" => Tone::N6,
        "7" => Tone::N7,
        "9" => Tone::N9,
        "11" => Tone::N11,
        _ => Tone::N13,
    });

    (third, optional((seventh, interval))).map(|((third, diminished), extended)| {
        let structure = Structure::new().merge(&third);

        match extended {
            Some((_, Tone::N6)) => structure.insert_many(Tone::N6.extended_components()),
            Some((major, tone)) => {
                let seventh = if major {
                    1
                } else if diminished {
                    -1
                } else {
                    0
                };
                structure
                    .insert_many(tone.extended_components())
                    .insert((Tone::N7, seventh))
            }
            None => structure,
        }
    })
}

/// Parses a set of chord alterations that may appear at the end of a chord.
///
/// An example of a set of alterations is final enclosed group in the
/// chord, `C7(#5,b9)`.
///
/// ```text
/// Alteration : Accidental ('5' | '6' | '9' | '11' | '13')
///            ;
///
/// Alterations : '(' Alteration (',' Alteration)* ')'
///             ;
/// ```
fn chord_alterations<Input>() -> impl Parser<Input, Output = Structure>
where
    Input: Stream<Token = char>,
    Input::Error: ParseError<Input::Token, Input::Range, Input::Position>,
{
    let altered_tone = choice([
        attempt(string("5")),
        attempt(string("6")),
        attempt(string("9")),
        attempt(string("11")),
        attempt(string("13")),
    ])
    .map(|q| match q {
        "5" => Tone::N5,
        "6" => Tone::N6,
        "9" => Tone::N9,
        "11" => Tone::N11,
        _ => Tone::N13,
    });

    let alteration = (accidental(), altered_tone)
        .map(|(offset, tone)| Structure::from_component((tone, offset)));

    let separator = attempt((spaces(), token(','), spaces()));

    optional(between(
        (token('('), spaces()),
        (spaces(), token(')')),
        sep_by1::<Vec<Structure>, _, _, _>(alteration, separator),
    ))
    .map(|q| {
        q.unwrap_or_default()
            .iter()
            .fold(Structure([None; TONE_COUNT]), |acc, alteration| acc.merge(alteration))
    })
}
