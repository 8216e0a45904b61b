//! Property-based tests for the arithmetic laws of pitches, pitch classes,
//! chord patterns and scale patterns.

use proptest::prelude::*;

use gamut::pitch_class::BASE_NAMES;
use gamut::{parse_chord, parse_note, ChordPattern, Interval, Note, Pitch, PitchClass, ScalePattern};

const CHORDS: [ChordPattern; 13] = [
    ChordPattern::MAJOR,
    ChordPattern::MINOR,
    ChordPattern::DIMINISHED,
    ChordPattern::AUGMENTED,
    ChordPattern::SUS4,
    ChordPattern::MAJOR7,
    ChordPattern::MAJOR7_NO5,
    ChordPattern::SEVENTH,
    ChordPattern::SEVENTH_NO5,
    ChordPattern::MINOR7,
    ChordPattern::MINOR7_NO5,
    ChordPattern::MINOR7_FLAT5,
    ChordPattern::DIMINISHED7,
];

/// Degrees commonly added to a chord within its base octave.
const BASE_ADDS: [i8; 9] = [1, 2, 3, 5, 6, 8, 9, 10, 11];

/// Degrees commonly added to a chord as explicit extensions.
const EXTENSION_ADDS: [i8; 8] = [13, 14, 15, 17, 18, 20, 21, 23];

const INTERVALS: [Interval; 20] = [
    Interval::UNISON,
    Interval::MINOR_SECOND,
    Interval::MAJOR_SECOND,
    Interval::AUGMENTED_SECOND,
    Interval::MINOR_THIRD,
    Interval::MAJOR_THIRD,
    Interval::DIMINISHED_FOURTH,
    Interval::PERFECT_FOURTH,
    Interval::AUGMENTED_FOURTH,
    Interval::DIMINISHED_FIFTH,
    Interval::PERFECT_FIFTH,
    Interval::AUGMENTED_FIFTH,
    Interval::MINOR_SIXTH,
    Interval::MAJOR_SIXTH,
    Interval::DIMINISHED_SEVENTH,
    Interval::MINOR_SEVENTH,
    Interval::MAJOR_SEVENTH,
    Interval::MINOR_NINTH,
    Interval::AUGMENTED_ELEVENTH,
    Interval::MAJOR_THIRTEENTH,
];

fn with_degrees(pattern: ChordPattern, degrees: &[i8], mask: u16) -> ChordPattern {
    degrees
        .iter()
        .enumerate()
        .filter(|&(i, _)| mask & (1 << i) != 0)
        .fold(pattern, |pattern, (_, &degree)| pattern.add(Pitch(degree)))
}

/// A chord constant with any set of added base-octave degrees.
fn base_chord() -> impl Strategy<Value = ChordPattern> {
    (0..CHORDS.len(), 0u16..(1 << BASE_ADDS.len()))
        .prop_map(|(index, mask)| with_degrees(CHORDS[index], &BASE_ADDS, mask))
}

/// A base chord with any set of added extensions on top.
fn extended_chord() -> impl Strategy<Value = ChordPattern> {
    (base_chord(), 0u16..(1 << EXTENSION_ADDS.len()))
        .prop_map(|(pattern, mask)| with_degrees(pattern, &EXTENSION_ADDS, mask))
}

fn pitch_class() -> impl Strategy<Value = PitchClass> {
    (0..BASE_NAMES.len(), -2i8..=2).prop_map(|(base, alt)| {
        PitchClass::from_char(BASE_NAMES[base], alt).expect("base and alteration are in range")
    })
}

fn interval() -> impl Strategy<Value = Interval> {
    prop::sample::select(INTERVALS.to_vec())
}

proptest! {
    #[test]
    fn normalize_and_octave_agree(value in any::<i8>()) {
        let pitch = Pitch(value);
        let normal = pitch.normalize().0;

        prop_assert!((0..12).contains(&normal));
        prop_assert_eq!(
            i16::from(normal) + 12 * i16::from(pitch.octave()),
            i16::from(value)
        );
    }

    #[test]
    fn transpose_round_trips(pc in pitch_class(), interval in interval()) {
        let there = pc.transpose(interval);

        prop_assert_eq!((there.pitch(0) - pc.pitch(0)).normalize(), interval.semitones.normalize());
        prop_assert_eq!(there.transpose(interval.down()), pc);
    }

    #[test]
    fn note_transpose_moves_pitch(pc in pitch_class(), octave in -3i8..=3, interval in interval()) {
        let note = Note::new(pc, octave);
        prop_assert_eq!(note.transpose(interval).pitch(), note.pitch() + interval.semitones);
    }

    #[test]
    fn add_and_omit(bits in 0u32..(1 << 24), degree in 0i8..24) {
        let pattern = ChordPattern(bits);
        let degree = Pitch(degree);

        prop_assert!(pattern.add(degree).has_degree(degree));
        prop_assert!(!pattern.omit(degree).has_degree(degree));
        prop_assert_eq!(pattern.add(degree).omit(degree), pattern.omit(degree));
        prop_assert_eq!(pattern.add(degree).add(degree), pattern.add(degree));
        prop_assert_eq!(
            pattern.add(degree).count_notes(),
            pattern.omit(degree).count_notes() + 1
        );
    }

    #[test]
    fn unpack_keeps_degree_count(pattern in extended_chord()) {
        prop_assert_eq!(pattern.unpack().count_notes(), pattern.count_notes());
    }

    #[test]
    fn unpack_is_idempotent(pattern in extended_chord()) {
        let unpacked = pattern.unpack();
        prop_assert_eq!(unpacked.unpack(), unpacked);
    }

    #[test]
    fn unpacked_degrees_are_all_named(pattern in base_chord()) {
        let unpacked = pattern.unpack();
        prop_assert_eq!(unpacked.as_intervals().len(), unpacked.count_notes());
    }

    #[test]
    fn modes_rotate_onto_a_note(bits in 0u16..(1 << 12)) {
        let pattern = ScalePattern(bits | 1);
        let count = pattern.count_notes();

        prop_assert_eq!(pattern.mode(1), Ok(pattern));
        prop_assert!(pattern.mode(0).is_err());
        prop_assert!(pattern.mode(count + 1).is_err());

        let mut rotated = pattern;
        for n in 2..=count {
            let mode = pattern.mode(n).expect("mode within the scale");
            prop_assert_eq!(mode.0 & 1, 1);
            prop_assert_eq!(mode.count_notes(), count);

            rotated = rotated.mode(2).expect("second mode exists");
            prop_assert_eq!(rotated, mode);
        }
        prop_assert_eq!(rotated.mode(2.min(count)), Ok(pattern));
    }

    #[test]
    fn parsing_never_panics(input in "\\PC{0,12}") {
        let _ = parse_note(&input);
        let _ = parse_chord(&input);
    }

    #[test]
    fn displayed_pitch_classes_parse_back(pc in pitch_class()) {
        prop_assert_eq!(pc.to_string().parse::<PitchClass>(), Ok(pc));
    }
}
