//! Pitch classes: notes without an octave.
//!
//! A pitch class is what we reason about when asking whether a note belongs
//! to a chord or a scale: E belongs to C major regardless of the octave it is
//! played in. Every `PitchClass` is packed into a single byte:
//!
//! ```text
//! bit number : 76543210
//! values     : AAAAXBBB
//!
//! A: alteration, biased by +8 (4 bits)
//! X: unused
//! B: base letter, 0 = C .. 6 = B (3 bits)
//! ```
//!
//! Since the alteration is biased, an all-zero byte is never a valid pitch
//! class. `PitchClass::default()` is therefore the invalid sentinel.
//!
//! ```
//! use gamut::{Interval, PitchClass};
//!
//! let e_flat = PitchClass::C.transpose(Interval::MINOR_THIRD);
//! assert_eq!(e_flat, PitchClass::E.flat());
//! assert_eq!(e_flat.to_string(), "E♭");
//! ```

use std::fmt;

use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::pitch::{Pitch, SEMITONES_PER_OCTAVE};

/// The total number of base letters.
pub const BASE_COUNT: usize = 7;

/// The base letters, in pitch order starting from C.
pub const BASE_NAMES: [char; BASE_COUNT] = ['C', 'D', 'E', 'F', 'G', 'A', 'B'];

/// The natural pitch of each base letter, in the reference octave.
const BASE_PITCHES: [i8; BASE_COUNT] = [0, 2, 4, 5, 7, 9, 11];

pub const SHARP: &str = "♯";
pub const FLAT: &str = "♭";
pub const NATURAL: &str = "♮";
pub const DOUBLE_SHARP: &str = "𝄪";
pub const DOUBLE_FLAT: &str = "𝄫";

const ALT_BIAS: i8 = 8;

/// The lowest and highest alterations the packed byte can hold.
pub(crate) const MIN_ALT: i8 = -ALT_BIAS;
pub(crate) const MAX_ALT: i8 = (ALT_MASK >> 4) as i8 - ALT_BIAS;
const BASE_MASK: u8 = 0x0f;
const ALT_MASK: u8 = 0xf0;

/// An octave-independent note, e.g. `C♯` or `B♭`.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass::pack(0, 0);
    pub const D: PitchClass = PitchClass::pack(1, 0);
    pub const E: PitchClass = PitchClass::pack(2, 0);
    pub const F: PitchClass = PitchClass::pack(3, 0);
    pub const G: PitchClass = PitchClass::pack(4, 0);
    pub const A: PitchClass = PitchClass::pack(5, 0);
    pub const B: PitchClass = PitchClass::pack(6, 0);

    const fn pack(base: u8, alt: i8) -> PitchClass {
        PitchClass((base & BASE_MASK) | ((((alt + ALT_BIAS) as u8) << 4) & ALT_MASK))
    }

    /// Construct a `PitchClass` from a base letter and an alteration.
    ///
    /// The base must be an uppercase letter in `A..=G` and the alteration
    /// within `-2..=2` (double flat to double sharp).
    pub fn from_char(base: char, alt: i8) -> Result<PitchClass> {
        let index = BASE_NAMES
            .iter()
            .position(|&name| name == base)
            .ok_or(Error::InvalidBase(base))?;

        if !(-2..=2).contains(&alt) {
            return Err(Error::InvalidAlteration(alt));
        }

        Ok(PitchClass::pack(index as u8, alt))
    }

    /// Construct a natural `PitchClass` from a base index, where `0` is C.
    pub fn from_index(index: usize) -> Option<PitchClass> {
        if index < BASE_COUNT {
            Some(PitchClass::pack(index as u8, 0))
        } else {
            None
        }
    }

    /// Return the canonical spelling of the given pitch.
    ///
    /// Pitches that do not fall on a natural letter ("black keys") are always
    /// spelled as the flattened letter above them: `6` is `G♭`, never `F♯`.
    pub fn default_for(pitch: Pitch) -> PitchClass {
        const DEFAULT_SPELLING: [PitchClass; 12] = [
            PitchClass::C,
            PitchClass::D.flat(),
            PitchClass::D,
            PitchClass::E.flat(),
            PitchClass::E,
            PitchClass::F,
            PitchClass::G.flat(),
            PitchClass::G,
            PitchClass::A.flat(),
            PitchClass::A,
            PitchClass::B.flat(),
            PitchClass::B,
        ];

        DEFAULT_SPELLING[pitch.normalize().0 as usize]
    }

    /// Returns the base letter index, where `0` is C and `6` is B.
    pub const fn base(self) -> u8 {
        self.0 & BASE_MASK
    }

    /// Returns the base letter, or `None` if the base is out of range.
    pub fn base_name(self) -> Option<char> {
        BASE_NAMES.get(self.base() as usize).copied()
    }

    /// Returns the alteration: negative for flats, positive for sharps.
    pub const fn alt(self) -> i8 {
        ((self.0 & ALT_MASK) >> 4) as i8 - ALT_BIAS
    }

    /// Returns the raw packed byte.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Returns whether the base is a letter and the alteration is within
    /// double flat to double sharp.
    pub const fn is_valid(self) -> bool {
        let alt = self.alt();
        (self.base() as usize) < BASE_COUNT && -2 <= alt && alt <= 2
    }

    /// Returns whether both pitch classes sound the same, e.g. `C♯` and `D♭`.
    pub fn is_enharmonic(self, other: PitchClass) -> bool {
        self.pitch(0) == other.pitch(0)
    }

    /// Return the same letter with a single sharp, replacing any alteration.
    pub const fn sharp(self) -> PitchClass {
        self.with_alt(1)
    }

    /// Return the same letter with a single flat.
    pub const fn flat(self) -> PitchClass {
        self.with_alt(-1)
    }

    /// Return the same letter with a double sharp.
    pub const fn double_sharp(self) -> PitchClass {
        self.with_alt(2)
    }

    /// Return the same letter with a double flat.
    pub const fn double_flat(self) -> PitchClass {
        self.with_alt(-2)
    }

    /// Return the natural of the same letter.
    pub const fn natural(self) -> PitchClass {
        self.with_alt(0)
    }

    /// Replace the alteration, keeping the base letter.
    pub(crate) const fn with_alt(self, alt: i8) -> PitchClass {
        PitchClass::pack(self.base(), alt)
    }

    /// Return the pitch of this class at the given octave.
    pub fn pitch(self, octave: i8) -> Pitch {
        Pitch(natural_pitch(self.base()) + self.alt()).at_octave(octave)
    }

    /// Iterate over every pitch of this class within `from..=to`, ascending.
    ///
    /// The iterator is empty when `from > to`.
    pub fn pitches(self, from: Pitch, to: Pitch) -> Pitches {
        if from > to {
            return Pitches { next: 1, to: 0 };
        }

        let octave = i16::from(from.octave()) * i16::from(SEMITONES_PER_OCTAVE);
        let mut start = i16::from(self.pitch(0).0) + octave;
        while start < i16::from(from.0) {
            start += i16::from(SEMITONES_PER_OCTAVE);
        }

        Pitches { next: start, to: i16::from(to.0) }
    }

    /// Transpose the pitch class by the given interval.
    ///
    /// The base letter moves by the interval's steps and the alteration is
    /// whatever is needed to land on the interval's pitch.
    pub fn transpose(self, interval: Interval) -> PitchClass {
        let steps = i16::from(self.base()) + i16::from(interval.steps);
        let base = steps.rem_euclid(BASE_COUNT as i16) as u8;
        let target = self.pitch(0) + interval.semitones;

        PitchClass::pack(base, fold_alteration(target.normalize().0 - natural_pitch(base)))
    }
}

fn natural_pitch(base: u8) -> i8 {
    BASE_PITCHES.get(base as usize).copied().unwrap_or_default()
}

/// Fold an alteration into `-6..=6` by whole octaves.
pub(crate) fn fold_alteration(mut alt: i8) -> i8 {
    while alt < -6 {
        alt += SEMITONES_PER_OCTAVE;
    }
    while alt > 6 {
        alt -= SEMITONES_PER_OCTAVE;
    }
    alt
}

/// Returns the Unicode accidental for an alteration in `-2..=2`.
pub fn alteration_symbol(alt: i8) -> Option<&'static str> {
    match alt {
        -2 => Some(DOUBLE_FLAT),
        -1 => Some(FLAT),
        0 => Some(""),
        1 => Some(SHARP),
        2 => Some(DOUBLE_SHARP),
        _ => None,
    }
}

/// Writes an alteration, falling back to a signed count such as `(+3)`.
pub(crate) fn write_alteration(f: &mut fmt::Formatter, alt: i8) -> fmt::Result {
    match alteration_symbol(alt) {
        Some(symbol) => f.write_str(symbol),
        None => write!(f, "({:+})", alt),
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.base_name() {
            Some(name) if self.is_valid() => {
                write!(f, "{}", name)?;
                write_alteration(f, self.alt())
            }
            _ => f.write_str("<invalid>"),
        }
    }
}

impl fmt::Debug for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "PitchClass({})", self)
    }
}

/// An ascending iterator over the pitches of a `PitchClass` within a range.
///
/// Returned by `PitchClass::pitches`.
#[derive(Clone, Debug)]
pub struct Pitches {
    next: i16,
    to: i16,
}

impl Iterator for Pitches {
    type Item = Pitch;

    fn next(&mut self) -> Option<Pitch> {
        if self.next > self.to {
            return None;
        }

        let pitch = Pitch(self.next as i8);
        self.next += i16::from(SEMITONES_PER_OCTAVE);
        Some(pitch)
    }
}
