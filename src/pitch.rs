//! Absolute pitches measured in semitones.
//!
//! A `Pitch` is a signed semitone count where `0` is middle C. The same type
//! is used for pitch differences, which is why the named distances in the
//! `diff` module are plain `Pitch` values.

use std::fmt;
use std::ops::{Add, Neg, Sub};

/// The number of semitones in an octave.
pub const SEMITONES_PER_OCTAVE: i8 = 12;

/// A pitch (or a pitch difference) in semitones, relative to middle C.
///
/// The `i8` range covers more than ten octaves around middle C, which is far
/// more than a piano keyboard needs. Arithmetic wraps instead of panicking so
/// that every operation is total.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Pitch(pub i8);

impl Pitch {
    pub const C: Pitch = Pitch(0);
    pub const B_SHARP: Pitch = Pitch(0);
    pub const D_DOUBLE_FLAT: Pitch = Pitch(0);
    pub const B_DOUBLE_SHARP: Pitch = Pitch(1);
    pub const C_SHARP: Pitch = Pitch(1);
    pub const D_FLAT: Pitch = Pitch(1);
    pub const C_DOUBLE_SHARP: Pitch = Pitch(2);
    pub const D: Pitch = Pitch(2);
    pub const E_DOUBLE_FLAT: Pitch = Pitch(2);
    pub const D_SHARP: Pitch = Pitch(3);
    pub const E_FLAT: Pitch = Pitch(3);
    pub const D_DOUBLE_SHARP: Pitch = Pitch(4);
    pub const E: Pitch = Pitch(4);
    pub const F_FLAT: Pitch = Pitch(4);
    pub const E_SHARP: Pitch = Pitch(5);
    pub const F: Pitch = Pitch(5);
    pub const G_DOUBLE_FLAT: Pitch = Pitch(5);
    pub const E_DOUBLE_SHARP: Pitch = Pitch(6);
    pub const F_SHARP: Pitch = Pitch(6);
    pub const G_FLAT: Pitch = Pitch(6);
    pub const F_DOUBLE_SHARP: Pitch = Pitch(7);
    pub const G: Pitch = Pitch(7);
    pub const A_DOUBLE_FLAT: Pitch = Pitch(7);
    pub const G_SHARP: Pitch = Pitch(8);
    pub const A_FLAT: Pitch = Pitch(8);
    pub const G_DOUBLE_SHARP: Pitch = Pitch(9);
    pub const A: Pitch = Pitch(9);
    pub const B_DOUBLE_FLAT: Pitch = Pitch(9);
    pub const A_SHARP: Pitch = Pitch(10);
    pub const B_FLAT: Pitch = Pitch(10);
    pub const C_DOUBLE_FLAT: Pitch = Pitch(10);
    pub const A_DOUBLE_SHARP: Pitch = Pitch(11);
    pub const B: Pitch = Pitch(11);
    pub const C_FLAT: Pitch = Pitch(11);

    /// Transpose the pitch up or down by the given difference.
    ///
    /// Usable in `const` context. The `+` operator does the same.
    pub const fn transpose(self, diff: Pitch) -> Pitch {
        Pitch(self.0.wrapping_add(diff.0))
    }

    /// Bring the pitch back into the reference octave `[0, 11]`.
    ///
    /// Negative pitches wrap around, so `-1` normalizes to `11`.
    pub const fn normalize(self) -> Pitch {
        Pitch(self.0.rem_euclid(SEMITONES_PER_OCTAVE))
    }

    /// Return the octave of the pitch, where octave `0` spans `[0, 11]`.
    ///
    /// This is consistent with `normalize`:
    /// `p == p.normalize() + 12 * p.octave()` for every pitch.
    pub const fn octave(self) -> i8 {
        self.0.div_euclid(SEMITONES_PER_OCTAVE)
    }

    /// Move the pitch to the given octave, keeping its position in the octave.
    pub const fn at_octave(self, octave: i8) -> Pitch {
        Pitch(
            self.normalize()
                .0
                .wrapping_add(SEMITONES_PER_OCTAVE.wrapping_mul(octave)),
        )
    }
}

impl From<i8> for Pitch {
    fn from(value: i8) -> Pitch {
        Pitch(value)
    }
}

impl From<Pitch> for i8 {
    fn from(pitch: Pitch) -> i8 {
        pitch.0
    }
}

impl Add for Pitch {
    type Output = Pitch;

    fn add(self, rhs: Pitch) -> Pitch {
        self.transpose(rhs)
    }
}

impl Sub for Pitch {
    type Output = Pitch;

    fn sub(self, rhs: Pitch) -> Pitch {
        Pitch(self.0.wrapping_sub(rhs.0))
    }
}

impl Neg for Pitch {
    type Output = Pitch;

    fn neg(self) -> Pitch {
        Pitch(self.0.wrapping_neg())
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Named pitch differences, from unison to the major fourteenth.
///
/// Enharmonic intervals share a value (an augmented fourth and a diminished
/// fifth are both `6`); the naming only documents intent.
pub mod diff {
    use super::Pitch;

    pub const UNISON: Pitch = Pitch(0);
    pub const HALF_STEP: Pitch = Pitch(1);
    pub const MINOR_SECOND: Pitch = Pitch(1);
    pub const WHOLE_STEP: Pitch = Pitch(2);
    pub const MAJOR_SECOND: Pitch = Pitch(2);
    pub const DIMINISHED_THIRD: Pitch = Pitch(2);
    pub const AUGMENTED_SECOND: Pitch = Pitch(3);
    pub const MINOR_THIRD: Pitch = Pitch(3);
    pub const MAJOR_THIRD: Pitch = Pitch(4);
    pub const DIMINISHED_FOURTH: Pitch = Pitch(4);
    pub const PERFECT_FOURTH: Pitch = Pitch(5);
    pub const AUGMENTED_FOURTH: Pitch = Pitch(6);
    pub const DIMINISHED_FIFTH: Pitch = Pitch(6);
    pub const PERFECT_FIFTH: Pitch = Pitch(7);
    pub const AUGMENTED_FIFTH: Pitch = Pitch(8);
    pub const MINOR_SIXTH: Pitch = Pitch(8);
    pub const MAJOR_SIXTH: Pitch = Pitch(9);
    pub const DIMINISHED_SEVENTH: Pitch = Pitch(9);
    pub const MINOR_SEVENTH: Pitch = Pitch(10);
    pub const MAJOR_SEVENTH: Pitch = Pitch(11);
    pub const OCTAVE: Pitch = Pitch(12);
    pub const MINOR_NINTH: Pitch = Pitch(13);
    pub const MAJOR_NINTH: Pitch = Pitch(14);
    pub const AUGMENTED_NINTH: Pitch = Pitch(15);
    pub const MINOR_TENTH: Pitch = Pitch(15);
    pub const MAJOR_TENTH: Pitch = Pitch(16);
    pub const PERFECT_ELEVENTH: Pitch = Pitch(17);
    pub const AUGMENTED_ELEVENTH: Pitch = Pitch(18);
    pub const MINOR_THIRTEENTH: Pitch = Pitch(20);
    pub const MAJOR_THIRTEENTH: Pitch = Pitch(21);
    pub const MAJOR_FOURTEENTH: Pitch = Pitch(23);
}
