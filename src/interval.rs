//! Music intervals.

use std::fmt;

use crate::pitch::Pitch;

/// An interval between two notes.
///
/// `steps` counts diatonic steps (`0` is a unison, `1` a second, ...) and
/// `semitones` the pitch difference. Both are negative for descending
/// intervals. Keeping the two apart is what distinguishes, say, an augmented
/// second from a minor third.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interval {
    /// Scale degree difference
    pub steps: i8,

    /// Pitch difference
    pub semitones: Pitch,
}

impl Interval {
    pub const UNISON: Interval = Interval::new(0, 0);
    pub const MINOR_SECOND: Interval = Interval::new(1, 1);
    pub const MAJOR_SECOND: Interval = Interval::new(1, 2);
    pub const AUGMENTED_SECOND: Interval = Interval::new(1, 3);
    pub const MINOR_THIRD: Interval = Interval::new(2, 3);
    pub const MAJOR_THIRD: Interval = Interval::new(2, 4);
    pub const DIMINISHED_FOURTH: Interval = Interval::new(3, 4);
    pub const PERFECT_FOURTH: Interval = Interval::new(3, 5);
    pub const AUGMENTED_FOURTH: Interval = Interval::new(3, 6);
    pub const DIMINISHED_FIFTH: Interval = Interval::new(4, 6);
    pub const PERFECT_FIFTH: Interval = Interval::new(4, 7);
    pub const AUGMENTED_FIFTH: Interval = Interval::new(4, 8);
    pub const MINOR_SIXTH: Interval = Interval::new(5, 8);
    pub const MAJOR_SIXTH: Interval = Interval::new(5, 9);
    pub const DIMINISHED_SEVENTH: Interval = Interval::new(6, 9);
    pub const AUGMENTED_SIXTH: Interval = Interval::new(5, 10);
    pub const MINOR_SEVENTH: Interval = Interval::new(6, 10);
    pub const MAJOR_SEVENTH: Interval = Interval::new(6, 11);
    pub const OCTAVE: Interval = Interval::new(7, 12);
    pub const MINOR_NINTH: Interval = Interval::new(8, 13);
    pub const MAJOR_NINTH: Interval = Interval::new(8, 14);
    pub const AUGMENTED_NINTH: Interval = Interval::new(8, 15);
    pub const MINOR_TENTH: Interval = Interval::new(9, 15);
    pub const MAJOR_TENTH: Interval = Interval::new(9, 16);
    pub const PERFECT_ELEVENTH: Interval = Interval::new(10, 17);
    pub const AUGMENTED_ELEVENTH: Interval = Interval::new(10, 18);
    pub const MINOR_THIRTEENTH: Interval = Interval::new(12, 20);
    pub const MAJOR_THIRTEENTH: Interval = Interval::new(12, 21);
    pub const MAJOR_FOURTEENTH: Interval = Interval::new(13, 23);

    /// Construct and return a new `Interval`.
    pub const fn new(steps: i8, semitones: i8) -> Interval {
        Interval { steps, semitones: Pitch(semitones) }
    }

    /// Return the same interval, descending instead of ascending.
    pub const fn down(self) -> Interval {
        Interval::new(self.steps.wrapping_neg(), self.semitones.0.wrapping_neg())
    }
}

impl fmt::Display for Interval {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Interval({:+}, {:+})", self.steps, self.semitones.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn down() {
        assert_eq!(Interval::PERFECT_FIFTH.down(), Interval::new(-4, -7));
        assert_eq!(Interval::UNISON.down(), Interval::UNISON);
        assert_eq!(Interval::MINOR_NINTH.down().down(), Interval::MINOR_NINTH);
    }

    #[test]
    fn enharmonic_intervals_differ() {
        assert_ne!(Interval::MAJOR_SIXTH, Interval::DIMINISHED_SEVENTH);
        assert_eq!(
            Interval::MAJOR_SIXTH.semitones,
            Interval::DIMINISHED_SEVENTH.semitones
        );
    }
}
