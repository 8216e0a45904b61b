//! Notes: pitch classes anchored to an octave.
//!
//! The octave of a `Note` is the octave of the pitch it sounds, not of its
//! letter. `C♭` sounds a semitone below `C`, so the `C♭` just below middle C
//! lives in octave `-1`:
//!
//! ```
//! use gamut::{Note, Pitch};
//!
//! let c_flat = Note::C.flat();
//! assert_eq!(c_flat.octave, -1);
//! assert_eq!(c_flat.pitch(), Pitch(-1));
//! ```

use std::fmt;

use crate::error::Result;
use crate::interval::Interval;
use crate::pitch::Pitch;
use crate::pitch_class::{fold_alteration, PitchClass, MAX_ALT, MIN_ALT};

/// How pitches that fall between natural letters are spelled.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Spelling {
    /// Flatten the letter above, e.g. `D♭`.
    #[default]
    Flats,

    /// Sharpen the letter below, e.g. `C♯`.
    Sharps,
}

/// A pitch class at a given octave.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Note {
    /// The octave-independent name
    pub pitch_class: PitchClass,

    /// The octave of the sounding pitch, `0` being the middle C octave
    pub octave: i8,
}

impl Note {
    pub const C: Note = Note::new(PitchClass::C, 0);
    pub const D: Note = Note::new(PitchClass::D, 0);
    pub const E: Note = Note::new(PitchClass::E, 0);
    pub const F: Note = Note::new(PitchClass::F, 0);
    pub const G: Note = Note::new(PitchClass::G, 0);
    pub const A: Note = Note::new(PitchClass::A, 0);
    pub const B: Note = Note::new(PitchClass::B, 0);

    /// Construct and return a new `Note`.
    pub const fn new(pitch_class: PitchClass, octave: i8) -> Note {
        Note { pitch_class, octave }
    }

    /// Spell the given pitch using the given base letter.
    ///
    /// The alteration is whatever brings the letter onto the pitch, e.g.
    /// `B` at pitch `0` is `B♯` in octave `0`.
    pub fn with_pitch(base: char, pitch: Pitch) -> Result<Note> {
        let natural = PitchClass::from_char(base, 0)?;
        let octave = pitch.octave();
        let alt = fold_alteration((pitch - natural.pitch(octave)).0);

        Ok(Note::new(natural.with_alt(alt), octave))
    }

    /// Return the closest note to the given pitch, spelling black keys with
    /// flats.
    pub fn closest(pitch: Pitch) -> Note {
        Note::closest_with(pitch, Spelling::Flats)
    }

    /// Return the closest note to the given pitch using the given spelling.
    pub fn closest_with(pitch: Pitch, spelling: Spelling) -> Note {
        const SHARP_SPELLING: [PitchClass; 12] = [
            PitchClass::C,
            PitchClass::C.sharp(),
            PitchClass::D,
            PitchClass::D.sharp(),
            PitchClass::E,
            PitchClass::F,
            PitchClass::F.sharp(),
            PitchClass::G,
            PitchClass::G.sharp(),
            PitchClass::A,
            PitchClass::A.sharp(),
            PitchClass::B,
        ];

        let pitch_class = match spelling {
            Spelling::Flats => PitchClass::default_for(pitch),
            Spelling::Sharps => SHARP_SPELLING[pitch.normalize().0 as usize],
        };

        Note::new(pitch_class, pitch.octave())
    }

    /// Return the pitch of this note.
    pub fn pitch(self) -> Pitch {
        self.pitch_class.pitch(self.octave)
    }

    /// Add one sharp to the note.
    ///
    /// The alteration saturates at `+7`, the most a pitch class can hold.
    pub fn sharp(self) -> Note {
        self.altered(self.pitch_class.alt().saturating_add(1))
    }

    /// Add one flat to the note.
    ///
    /// The alteration saturates at `-8`, the most a pitch class can hold.
    pub fn flat(self) -> Note {
        self.altered(self.pitch_class.alt().saturating_sub(1))
    }

    /// Replace the alteration with a double sharp.
    pub fn double_sharp(self) -> Note {
        self.altered(2)
    }

    /// Replace the alteration with a double flat.
    pub fn double_flat(self) -> Note {
        self.altered(-2)
    }

    /// Remove any alteration from the note.
    pub fn natural(self) -> Note {
        self.altered(0)
    }

    /// Replace the alteration and move the octave along with the sounding
    /// pitch, so that `B` sharpened lands on the next octave's C.
    fn altered(self, alt: i8) -> Note {
        let alt = alt.clamp(MIN_ALT, MAX_ALT);
        let pitch = self.pitch() + Pitch(alt - self.pitch_class.alt());
        Note::new(self.pitch_class.with_alt(alt), pitch.octave())
    }

    /// Move the note to the given octave.
    pub fn at_octave(self, octave: i8) -> Note {
        Note { octave, ..self }
    }

    /// Transpose the note by the given interval.
    pub fn transpose(self, interval: Interval) -> Note {
        let pitch = self.pitch() + interval.semitones;
        Note::new(self.pitch_class.transpose(interval), pitch.octave())
    }

    /// Returns whether both notes sound the same pitch.
    pub fn is_enharmonic(self, other: Note) -> bool {
        self.pitch() == other.pitch()
    }

    /// Returns whether this note sounds higher than `other`.
    pub fn is_higher_than(self, other: Note) -> bool {
        self.pitch() > other.pitch()
    }

    /// Returns the note's name without the octave, or an empty string for an
    /// invalid note.
    pub fn name(self) -> String {
        if self.pitch_class.is_valid() {
            self.pitch_class.to_string()
        } else {
            String::new()
        }
    }
}

impl From<PitchClass> for Note {
    fn from(pitch_class: PitchClass) -> Note {
        Note::new(pitch_class, 0)
    }
}

impl fmt::Display for Note {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.pitch_class, self.octave)
    }
}
