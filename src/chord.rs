//! Defines types used to represent chords as compact bit patterns.
//!
//! These can be generated manually, but often one would want to use the
//! `parser` module in order to generate these from a string.
//!
//! ```
//! use gamut::chord::{Chord, ChordPattern};
//! use gamut::{diff, Interval, Note};
//!
//! /// Manual construction of a C6/9(#11)
//! let pattern = ChordPattern::MAJOR
//!     .add(diff::MAJOR_SIXTH)
//!     .add(diff::MAJOR_SECOND)
//!     .add(diff::AUGMENTED_FOURTH);
//!
//! assert_eq!(
//!     pattern.unpack().as_intervals(),
//!     vec![
//!         Interval::UNISON,
//!         Interval::MAJOR_THIRD,
//!         Interval::PERFECT_FIFTH,
//!         Interval::MAJOR_SIXTH,
//!         Interval::MAJOR_NINTH,
//!         Interval::AUGMENTED_ELEVENTH,
//!     ]
//! );
//!
//! let chord = Chord::new(Note::C, pattern);
//! assert_eq!(chord.notes().count(), 6);
//! ```
//!
//! A `ChordPattern` spans two octaves. When unpacked, the first octave holds
//! the base chord (triad or tetrad) and the second octave its extensions
//! (ninths and above).

use std::fmt;

use tracing::trace;

use crate::interval::Interval;
use crate::note::Note;
use crate::pitch::{diff, Pitch, SEMITONES_PER_OCTAVE};

/// The number of degrees a `ChordPattern` can hold: two octaves.
pub const CHORD_DEGREES: i8 = 2 * SEMITONES_PER_OCTAVE;

/// The intervals a chord degree may be named as, in ascending pitch order.
///
/// Semitones absent from this list (the base-octave minor second, the octave,
/// the major tenth, the upper fifth and minor fourteenth) are never named.
static SIEVE: [Interval; 19] = [
    Interval::UNISON,
    Interval::MAJOR_SECOND,
    Interval::MINOR_THIRD,
    Interval::MAJOR_THIRD,
    Interval::PERFECT_FOURTH,
    Interval::DIMINISHED_FIFTH,
    Interval::PERFECT_FIFTH,
    Interval::AUGMENTED_FIFTH,
    Interval::MAJOR_SIXTH,
    Interval::MINOR_SEVENTH,
    Interval::MAJOR_SEVENTH,
    Interval::MINOR_NINTH,
    Interval::MAJOR_NINTH,
    Interval::AUGMENTED_NINTH,
    Interval::PERFECT_ELEVENTH,
    Interval::AUGMENTED_ELEVENTH,
    Interval::MINOR_THIRTEENTH,
    Interval::MAJOR_THIRTEENTH,
    Interval::MAJOR_FOURTEENTH,
];

/// The set of degrees of a chord, relative to its root.
///
/// Bit `i` stands for the degree `i` semitones above the root, for `i` in
/// `0..24`. The pattern is a plain set: it may hold conflicting degrees such
/// as both thirds, which is expected while a chord is being built.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct ChordPattern(pub u32);

impl ChordPattern {
    /// Major triad (C: C E G)
    pub const MAJOR: ChordPattern = ChordPattern(0b000010010001);
    /// Minor triad (Cm: C E♭ G)
    pub const MINOR: ChordPattern = ChordPattern(0b000010001001);
    /// Diminished triad (Cdim: C E♭ G♭)
    pub const DIMINISHED: ChordPattern = ChordPattern(0b000001001001);
    /// Augmented triad (Caug: C E G♯)
    pub const AUGMENTED: ChordPattern = ChordPattern(0b000100010001);
    /// Suspended fourth (Csus4: C F G)
    pub const SUS4: ChordPattern = ChordPattern(0b000010100001);
    /// Major seventh (CMaj7: C E G B)
    pub const MAJOR7: ChordPattern = ChordPattern(0b100010010001);
    /// Major seventh without fifth (CMaj7 no5: C E B)
    pub const MAJOR7_NO5: ChordPattern = ChordPattern(0b100000010001);
    /// Dominant seventh (C7: C E G B♭)
    pub const SEVENTH: ChordPattern = ChordPattern(0b010010010001);
    /// Dominant seventh without fifth (C7 no5: C E B♭)
    pub const SEVENTH_NO5: ChordPattern = ChordPattern(0b010000010001);
    /// Minor seventh (Cm7: C E♭ G B♭)
    pub const MINOR7: ChordPattern = ChordPattern(0b010010001001);
    /// Minor seventh without fifth (Cm7 no5: C E♭ B♭)
    pub const MINOR7_NO5: ChordPattern = ChordPattern(0b010000001001);
    /// Half-diminished (Cm7♭5: C E♭ G♭ B♭)
    pub const MINOR7_FLAT5: ChordPattern = ChordPattern(0b010001001001);
    /// Diminished seventh (Cdim7: C E♭ G♭ B𝄫)
    pub const DIMINISHED7: ChordPattern = ChordPattern(0b001001001001);

    /// Count the degrees in the chord.
    pub fn count_notes(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Add a degree to the chord. This has no effect if the degree is
    /// already present or outside the pattern's two octaves.
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, degree: Pitch) -> ChordPattern {
        ChordPattern(self.0 | bit(degree))
    }

    /// Remove a degree from the chord. This has no effect if the degree is
    /// absent.
    pub fn omit(self, degree: Pitch) -> ChordPattern {
        ChordPattern(self.0 & !bit(degree))
    }

    /// Returns whether `other` is a subset of this chord.
    pub fn contains(self, other: ChordPattern) -> bool {
        self.0 & other.0 == other.0
    }

    /// Returns whether the degree is present. Degrees outside the
    /// pattern's two octaves never are.
    pub fn has_degree(self, degree: Pitch) -> bool {
        self.0 & bit(degree) != 0
    }

    /// Returns whether the chord holds at least one of the degrees.
    pub fn has_any_degree(self, degrees: &[Pitch]) -> bool {
        degrees.iter().any(|&degree| self.has_degree(degree))
    }

    /// Returns whether the chord holds every one of the degrees.
    ///
    /// An empty list is never satisfied.
    pub fn has_all_degrees(self, degrees: &[Pitch]) -> bool {
        !degrees.is_empty() && degrees.iter().all(|&degree| self.has_degree(degree))
    }

    /// Name each degree of the chord as an interval from the root.
    ///
    /// This is usually called on an unpacked pattern, where the octave of each
    /// degree tells a ninth from a second.
    pub fn as_intervals(self) -> Vec<Interval> {
        let mut intervals: Vec<Interval> = SIEVE
            .iter()
            .filter(|interval| self.has_degree(interval.semitones))
            .copied()
            .collect();

        // A diminished tetrad holds a diminished seventh, not a major sixth.
        if self.contains(ChordPattern::DIMINISHED7) {
            rename(&mut intervals, Interval::MAJOR_SIXTH, Interval::DIMINISHED_SEVENTH);
        }

        // Altered chord: ♯9 -> ♭10
        if self.contains(ChordPattern::SEVENTH_NO5)
            && self.has_all_degrees(&[diff::AUGMENTED_NINTH, diff::MINOR_THIRTEENTH])
        {
            rename(&mut intervals, Interval::AUGMENTED_NINTH, Interval::MINOR_TENTH);
        }

        intervals
    }

    /// Move the degrees that are conventionally voiced as extensions to the
    /// upper octave.
    ///
    /// The number of degrees never changes. Patterns built from the common
    /// chord constants plus added tones are unpacked in a single pass:
    /// unpacking them again has no effect.
    pub fn unpack(self) -> ChordPattern {
        // ♭2 always becomes ♭9
        let mut c = self.move_up(diff::MINOR_SECOND);

        // With a third, 2 and 4 become 9 and 11
        if c.has_any_degree(&[diff::MAJOR_THIRD, diff::MINOR_THIRD]) {
            c = c.move_up(diff::MAJOR_SECOND).move_up(diff::PERFECT_FOURTH);

            // ♯2 or ♭3 becomes ♯9 or ♭10
            if c.has_all_degrees(&[diff::MAJOR_THIRD, diff::MINOR_THIRD]) {
                c = c.move_up(diff::MINOR_THIRD);
            }
        }

        // sus4, 2 becomes 9
        if c.has_degree(diff::PERFECT_FOURTH) {
            c = c.move_up(diff::MAJOR_SECOND);
        }

        // Over a major triad the ♯4 is a ♯11, not a ♭5
        if c.has_all_degrees(&[diff::MAJOR_THIRD, diff::PERFECT_FIFTH]) {
            c = c.move_up(diff::AUGMENTED_FOURTH);
        }

        if c.contains(ChordPattern::DIMINISHED7) {
            c = c.move_up(diff::MAJOR_SEVENTH);
        } else if c.has_any_degree(&[diff::MAJOR_SEVENTH, diff::MINOR_SEVENTH]) {
            c = c.move_up(diff::MAJOR_SIXTH).move_up(diff::MINOR_SIXTH);
            if c.has_degree(diff::MAJOR_SEVENTH) {
                c = c.move_up(diff::DIMINISHED_FIFTH);
            }
        }

        // Altered chord: ♯5 -> ♭13
        if c.contains(ChordPattern::SEVENTH_NO5) && c.has_degree(diff::AUGMENTED_NINTH) {
            c = c.move_up(diff::AUGMENTED_FIFTH);
        }

        c
    }

    /// Move a degree up an octave, making it an extension.
    fn move_up(self, degree: Pitch) -> ChordPattern {
        if !self.has_degree(degree) {
            return self;
        }

        let moved = self.swap(degree, degree + diff::OCTAVE);
        if moved != self {
            trace!(%degree, from = ?self, to = ?moved, "moved chord degree up an octave");
        }
        moved
    }

    /// Swap two degrees, unless both or neither are present.
    fn swap(self, a: Pitch, b: Pitch) -> ChordPattern {
        let mask = bit(a) | bit(b);
        if (self.0 & mask).count_ones() != 1 {
            return self;
        }
        ChordPattern(self.0 ^ mask)
    }
}

fn bit(degree: Pitch) -> u32 {
    if (0..CHORD_DEGREES).contains(&degree.0) {
        1 << degree.0
    } else {
        0
    }
}

fn rename(intervals: &mut [Interval], from: Interval, to: Interval) {
    if let Some(slot) = intervals.iter_mut().find(|interval| **interval == from) {
        *slot = to;
    }
}

impl fmt::Display for ChordPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ChordPattern({:b})", self.0)
    }
}

impl fmt::Debug for ChordPattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ChordPattern({:024b})", self.0)
    }
}

/// A chord, as a root note and the pattern of degrees above it.
///
/// This is relative to a root note so a transposition is very cheap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chord {
    /// The base note
    pub root: Note,

    /// The degrees above the root
    pub pattern: ChordPattern,
}

impl Chord {
    /// Construct and return a new `Chord`.
    pub fn new(root: Note, pattern: ChordPattern) -> Chord {
        Chord { root, pattern }
    }

    /// Returns the intervals of the unpacked chord, from the root up.
    pub fn intervals(&self) -> Vec<Interval> {
        self.pattern.unpack().as_intervals()
    }

    /// Iterate over the notes of the unpacked chord, from the root up.
    pub fn notes(&self) -> impl Iterator<Item = Note> {
        let root = self.root;
        self.intervals()
            .into_iter()
            .map(move |interval| root.transpose(interval))
    }

    /// Iterate over the pitches of the unpacked chord, from the root up.
    pub fn pitches(&self) -> impl Iterator<Item = Pitch> {
        self.notes().map(Note::pitch)
    }

    /// Return the same chord built on another root.
    pub fn with_root(&self, root: Note) -> Chord {
        Chord { root, ..*self }
    }
}
