//! Scales and scale patterns.
//!
//! A `ScalePattern` is a bitwise representation of an octave: bit `i` is set
//! when the scale holds the pitch `i` semitones above its tonic. The major
//! scale (C D E F G A B) reads, from bit 11 down to bit 0:
//!
//! ```text
//! pattern:  101010110101
//! notes:    B A G FE D C
//! ```
//!
//! Every sequence derived from a pattern is produced lazily from the same
//! scan over its twelve bits, in ascending order.

use std::fmt;

use tracing::trace;

use crate::error::{Error, Result};
use crate::interval::Interval;
use crate::note::Note;
use crate::pitch::{Pitch, SEMITONES_PER_OCTAVE};
use crate::pitch_class::PitchClass;

const OCTAVE_MASK: u16 = 0b1111_1111_1111;

/// The pitches present in a scale, relative to its tonic.
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct ScalePattern(pub u16);

/// Names of the built-in scale patterns, including aliases.
static NAMES: [(&str, ScalePattern); 6] = [
    ("major", ScalePattern::MAJOR),
    ("natural major", ScalePattern::MAJOR),
    ("melodic minor", ScalePattern::MELODIC_MINOR),
    ("harmonic minor", ScalePattern::HARMONIC_MINOR),
    ("harmonic major", ScalePattern::HARMONIC_MAJOR),
    ("double harmonic major", ScalePattern::DOUBLE_HARMONIC_MAJOR),
];

impl ScalePattern {
    /// C D E F G A B
    pub const MAJOR: ScalePattern = ScalePattern(0b101010110101);
    /// C D E♭ F G A B
    pub const MELODIC_MINOR: ScalePattern = ScalePattern(0b101010101101);
    /// C D E♭ F G A♭ B
    pub const HARMONIC_MINOR: ScalePattern = ScalePattern(0b100110101101);
    /// C D E F G A♭ B
    pub const HARMONIC_MAJOR: ScalePattern = ScalePattern(0b100110110101);
    /// C D♭ E F G A♭ B
    pub const DOUBLE_HARMONIC_MAJOR: ScalePattern = ScalePattern(0b100110110011);

    /// Look up a built-in pattern by its English name, e.g. `"melodic minor"`.
    pub fn from_name(name: &str) -> Result<ScalePattern> {
        NAMES
            .iter()
            .find(|(label, _)| *label == name)
            .map(|&(_, pattern)| pattern)
            .ok_or_else(|| Error::UnknownScalePattern(name.to_string()))
    }

    /// Returns the English name of a built-in pattern.
    pub fn name(self) -> Option<&'static str> {
        NAMES
            .iter()
            .find(|&&(_, pattern)| pattern == self)
            .map(|&(label, _)| label)
    }

    /// Count the notes in the scale.
    pub fn count_notes(self) -> usize {
        (self.0 & OCTAVE_MASK).count_ones() as usize
    }

    fn has_semitone(self, semitone: u8) -> bool {
        self.0 & (1 << semitone) != 0
    }

    /// Iterate over the scale's intervals from the tonic, numbering degrees
    /// stepwise.
    ///
    /// Stepwise numbering suits heptatonic scales, where every note is one
    /// letter above the previous one.
    pub fn intervals(self) -> Intervals<'static> {
        Intervals { pattern: self, semitone: 0, index: 0, degrees: None }
    }

    /// Iterate over the scale's intervals from the tonic, using the given
    /// 1-based degree for each note.
    ///
    /// A major pentatonic scale (C D E G A) uses degrees `[1, 2, 3, 5, 6]`.
    /// The list must hold exactly one degree per note, none of them `0`.
    /// A list of the wrong length fails with `InvalidDegree` carrying the
    /// list length as its `degree`.
    pub fn intervals_with_degrees(self, degrees: &[u8]) -> Result<Intervals<'_>> {
        let count = self.count_notes();
        if degrees.len() != count {
            return Err(Error::InvalidDegree { degree: degrees.len(), count });
        }
        if degrees.contains(&0) {
            return Err(Error::InvalidDegree { degree: 0, count });
        }

        Ok(Intervals { pattern: self, semitone: 0, index: 0, degrees: Some(degrees) })
    }

    /// Iterate over the scale's pitches, starting on `root`.
    pub fn pitches(self, root: Pitch) -> impl Iterator<Item = Pitch> {
        self.intervals().map(move |interval| root + interval.semitones)
    }

    /// Iterate over the scale's pitch classes, spelled stepwise from `root`.
    pub fn pitch_classes(self, root: PitchClass) -> impl Iterator<Item = PitchClass> {
        self.intervals().map(move |interval| root.transpose(interval))
    }

    /// Iterate over the scale's pitch classes, spelled with the given
    /// 1-based degrees. See `intervals_with_degrees`.
    pub fn pitch_classes_with_degrees<'a>(
        self,
        root: PitchClass,
        degrees: &'a [u8],
    ) -> Result<impl Iterator<Item = PitchClass> + 'a> {
        Ok(self
            .intervals_with_degrees(degrees)?
            .map(move |interval| root.transpose(interval)))
    }

    /// Iterate over the scale's notes, starting on `root` and ascending.
    pub fn notes(self, root: Note) -> impl Iterator<Item = Note> {
        self.intervals().map(move |interval| root.transpose(interval))
    }

    /// Iterate over the scale's notes, spelled with the given 1-based degrees.
    pub fn notes_with_degrees<'a>(
        self,
        root: Note,
        degrees: &'a [u8],
    ) -> Result<impl Iterator<Item = Note> + 'a> {
        Ok(self
            .intervals_with_degrees(degrees)?
            .map(move |interval| root.transpose(interval)))
    }

    /// Compute the n-th mode of the pattern, `n` being a 1-based degree.
    ///
    /// The first mode is the pattern itself. Fails with `InvalidDegree` when
    /// `n` is not between `1` and the number of notes.
    pub fn mode(self, n: usize) -> Result<ScalePattern> {
        let count = self.count_notes();
        if n < 1 || n > count {
            return Err(Error::InvalidDegree { degree: n, count });
        }

        let mut offset = 0;
        for _ in 1..n {
            offset = (offset + 1) % SEMITONES_PER_OCTAVE as u8;
            while !self.has_semitone(offset) {
                offset = (offset + 1) % SEMITONES_PER_OCTAVE as u8;
            }
        }
        trace!(pattern = ?self, n, offset, "rotating scale pattern");

        let bits = self.0 & OCTAVE_MASK;
        let rotated = (bits >> offset) | ((bits << (12 - offset)) & OCTAVE_MASK);
        Ok(ScalePattern(rotated))
    }
}

impl fmt::Display for ScalePattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{:012b}", self.0)
    }
}

impl fmt::Debug for ScalePattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "ScalePattern({:012b})", self.0)
    }
}

/// An ascending iterator over the intervals of a `ScalePattern`.
#[derive(Clone, Debug)]
pub struct Intervals<'a> {
    pattern: ScalePattern,
    semitone: u8,
    index: usize,
    degrees: Option<&'a [u8]>,
}

impl<'a> Iterator for Intervals<'a> {
    type Item = Interval;

    fn next(&mut self) -> Option<Interval> {
        while self.semitone < SEMITONES_PER_OCTAVE as u8 {
            let semitone = self.semitone;
            self.semitone += 1;

            if self.pattern.has_semitone(semitone) {
                let steps = match self.degrees {
                    Some(degrees) => (*degrees.get(self.index)? as i8).wrapping_sub(1),
                    None => self.index as i8,
                };
                self.index += 1;
                return Some(Interval::new(steps, semitone as i8));
            }
        }
        None
    }
}

/// A scale: a root note and the pattern of pitches above it.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Scale {
    pub root: Note,
    pub pattern: ScalePattern,
}

impl Scale {
    /// Construct and return a new `Scale`.
    pub fn new(root: Note, pattern: ScalePattern) -> Scale {
        Scale { root, pattern }
    }

    /// Construct a `Scale` from a root note and a built-in pattern name.
    pub fn from_name(root: Note, name: &str) -> Result<Scale> {
        Ok(Scale::new(root, ScalePattern::from_name(name)?))
    }

    /// Iterate over the notes of the scale, ascending from its root.
    pub fn notes(&self) -> impl Iterator<Item = Note> {
        self.pattern.notes(self.root)
    }

    /// Iterate over the pitches of the scale, ascending from its root.
    pub fn pitches(&self) -> impl Iterator<Item = Pitch> {
        self.pattern.pitches(self.root.pitch())
    }

    /// Return the scale's n-th mode, rooted on its n-th note.
    pub fn mode(&self, n: usize) -> Result<Scale> {
        let pattern = self.pattern.mode(n)?;
        let root = self
            .notes()
            .nth(n - 1)
            .ok_or(Error::InvalidDegree { degree: n, count: self.pattern.count_notes() })?;

        Ok(Scale::new(root, pattern))
    }
}

impl fmt::Display for Scale {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Scale({}:{})", self.root, self.pattern)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn count_notes() {
        assert_eq!(ScalePattern::MAJOR.count_notes(), 7);
        assert_eq!(ScalePattern(0b001010010101).count_notes(), 5);
        assert_eq!(ScalePattern(0).count_notes(), 0);
    }

    #[test]
    fn pitches() {
        let cases = [
            (ScalePattern::MAJOR, [0, 2, 4, 5, 7, 9, 11]),
            (ScalePattern::MELODIC_MINOR, [0, 2, 3, 5, 7, 9, 11]),
            (ScalePattern::HARMONIC_MINOR, [0, 2, 3, 5, 7, 8, 11]),
            (ScalePattern::HARMONIC_MAJOR, [0, 2, 4, 5, 7, 8, 11]),
            (ScalePattern::DOUBLE_HARMONIC_MAJOR, [0, 1, 4, 5, 7, 8, 11]),
        ];

        for (pattern, want) in cases.iter() {
            let want: Vec<Pitch> = want.iter().map(|&p| Pitch(p)).collect();
            let have: Vec<Pitch> = pattern.pitches(Pitch::C).collect();
            assert_eq!(have, want, "{:?}", pattern.name());
        }

        let from_g: Vec<Pitch> = ScalePattern::MAJOR.pitches(Pitch::G).take(3).collect();
        assert_eq!(from_g, vec![Pitch(7), Pitch(9), Pitch(11)]);
    }

    #[test]
    fn intervals() {
        let have: Vec<Interval> = ScalePattern::MAJOR.intervals().collect();
        assert_eq!(
            have,
            vec![
                Interval::UNISON,
                Interval::MAJOR_SECOND,
                Interval::MAJOR_THIRD,
                Interval::PERFECT_FOURTH,
                Interval::PERFECT_FIFTH,
                Interval::MAJOR_SIXTH,
                Interval::MAJOR_SEVENTH,
            ]
        );
    }

    #[test]
    fn intervals_with_degrees() {
        let pentatonic = ScalePattern(0b001010010101);
        let have: Vec<Interval> = pentatonic
            .intervals_with_degrees(&[1, 2, 3, 5, 6])
            .unwrap()
            .collect();

        assert_eq!(
            have,
            vec![
                Interval::UNISON,
                Interval::MAJOR_SECOND,
                Interval::MAJOR_THIRD,
                Interval::PERFECT_FIFTH,
                Interval::MAJOR_SIXTH,
            ]
        );
    }

    #[test]
    fn intervals_with_invalid_degrees() {
        let pentatonic = ScalePattern(0b001010010101);

        assert_eq!(
            pentatonic.intervals_with_degrees(&[]).err(),
            Some(Error::InvalidDegree { degree: 0, count: 5 })
        );
        assert_eq!(
            pentatonic.intervals_with_degrees(&[1, 2, 3, 4, 5, 6, 7]).err(),
            Some(Error::InvalidDegree { degree: 7, count: 5 })
        );
        assert_eq!(
            pentatonic.intervals_with_degrees(&[0, 2, 3, 5, 6]).err(),
            Some(Error::InvalidDegree { degree: 0, count: 5 })
        );
    }

    #[test]
    fn pitch_classes() {
        let have: Vec<PitchClass> = ScalePattern::MAJOR.pitch_classes(PitchClass::F).collect();
        assert_eq!(
            have,
            vec![
                PitchClass::F,
                PitchClass::G,
                PitchClass::A,
                PitchClass::B.flat(),
                PitchClass::C,
                PitchClass::D,
                PitchClass::E,
            ]
        );

        let pentatonic = ScalePattern(0b001010010101);
        let have: Vec<PitchClass> = pentatonic
            .pitch_classes_with_degrees(PitchClass::E.flat(), &[1, 2, 3, 5, 6])
            .unwrap()
            .collect();
        assert_eq!(
            have,
            vec![
                PitchClass::E.flat(),
                PitchClass::F,
                PitchClass::G,
                PitchClass::B.flat(),
                PitchClass::C,
            ]
        );
    }

    #[test]
    fn notes() {
        let have: Vec<Note> = ScalePattern::MELODIC_MINOR.notes(Note::G).collect();
        assert_eq!(
            have,
            vec![
                Note::G,
                Note::A,
                Note::B.flat(),
                Note::C.at_octave(1),
                Note::D.at_octave(1),
                Note::E.at_octave(1),
                Note::F.sharp().at_octave(1),
            ]
        );

        let f_major: Vec<Pitch> = ScalePattern::MAJOR
            .notes(Note::F)
            .map(Note::pitch)
            .collect();
        assert_eq!(
            f_major,
            [5, 7, 9, 10, 12, 14, 16].iter().map(|&p| Pitch(p)).collect::<Vec<_>>()
        );
        assert_eq!(ScalePattern::MAJOR.notes(Note::F).nth(3), Some(Note::B.flat()));

        let pentatonic = ScalePattern(0b001010010101);
        let have: Vec<Note> = pentatonic
            .notes_with_degrees(Note::A, &[1, 3, 4, 5, 7])
            .unwrap()
            .collect();
        assert_eq!(have.len(), 5);
        assert_eq!(have[1], Note::new(PitchClass::C.flat(), 0));
    }

    #[test]
    fn mode() {
        assert_eq!(ScalePattern::MAJOR.mode(1), Ok(ScalePattern::MAJOR));
        assert_eq!(ScalePattern::MAJOR.mode(4), Ok(ScalePattern(0b101011010101)));
        assert_eq!(ScalePattern::MAJOR.mode(7), Ok(ScalePattern(0b010101101011)));
        assert_eq!(
            ScalePattern::MAJOR.mode(0),
            Err(Error::InvalidDegree { degree: 0, count: 7 })
        );
        assert_eq!(
            ScalePattern::MAJOR.mode(8),
            Err(Error::InvalidDegree { degree: 8, count: 7 })
        );
        assert!(ScalePattern(0).mode(1).is_err());
    }

    #[test]
    fn names() {
        assert_eq!(ScalePattern::from_name("natural major"), Ok(ScalePattern::MAJOR));
        assert_eq!(
            ScalePattern::from_name("harmonic minor"),
            Ok(ScalePattern::HARMONIC_MINOR)
        );
        assert_eq!(
            ScalePattern::from_name("bebop"),
            Err(Error::UnknownScalePattern("bebop".to_string()))
        );
        assert_eq!(ScalePattern::MAJOR.name(), Some("major"));
        assert_eq!(ScalePattern(0b1).name(), None);
    }

    #[test]
    fn scale() {
        let scale = Scale::from_name(Note::D, "major").unwrap();
        assert_eq!(scale.to_string(), "Scale(D0:101010110101)");

        let pitches: Vec<Pitch> = scale.pitches().collect();
        assert_eq!(pitches[6], Pitch(13));

        let dorian = Scale::new(Note::C, ScalePattern::MAJOR).mode(2).unwrap();
        assert_eq!(dorian.root, Note::D);
        assert_eq!(dorian.pattern, ScalePattern(0b011010101101));

        let names: Vec<String> = dorian.notes().map(|n| n.name()).collect();
        assert_eq!(names, vec!["D", "E", "F", "G", "A", "B", "C"]);
    }
}
