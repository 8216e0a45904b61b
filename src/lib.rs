//! # gamut
//!
//! A crate providing a number of core music primitives as small, copyable
//! values: pitches, pitch classes, notes, intervals, chords and scales.
//!
//! Chords and scales are bit patterns of degrees relative to a root, so they
//! are cheap to build, compare and transpose. The `parser` module turns note
//! names and chord symbols into these values.
//!
//! ```
//! use gamut::{parse_chord, Note, ScalePattern};
//!
//! let chord = parse_chord("Dm7").unwrap();
//! let names: Vec<String> = chord.notes().map(|note| note.name()).collect();
//! assert_eq!(names, vec!["D", "F", "A", "C"]);
//!
//! let dorian = ScalePattern::MAJOR.mode(2).unwrap();
//! let names: Vec<String> = dorian.notes(Note::D).map(|note| note.name()).collect();
//! assert_eq!(names, vec!["D", "E", "F", "G", "A", "B", "C"]);
//! ```

pub mod chord;
pub mod error;
pub mod interval;
pub mod locale;
pub mod note;
pub mod parser;
pub mod pitch;
pub mod pitch_class;
pub mod scale;

pub use crate::chord::{Chord, ChordPattern};
pub use crate::error::{Error, Result};
pub use crate::interval::Interval;
pub use crate::locale::Locale;
pub use crate::note::{Note, Spelling};
pub use crate::parser::{parse_alteration, parse_chord, parse_note, parse_pitch, parse_pitch_class};
pub use crate::pitch::{diff, Pitch};
pub use crate::pitch_class::PitchClass;
pub use crate::scale::{Scale, ScalePattern};
