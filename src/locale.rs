//! Localized names for notes and scales.
//!
//! A `Locale` is plain configuration: callers pick one and pass it to whatever
//! renders names. Nothing in the crate reads a process-wide locale.
//!
//! ```
//! use gamut::{Locale, Note};
//!
//! assert_eq!(Locale::FRENCH.note_name(Note::C.sharp()).unwrap(), "do♯");
//! assert_eq!(Locale::default().note_name(Note::A.at_octave(1)).unwrap(), "A1");
//! ```

use crate::error::{Error, Result};
use crate::note::Note;
use crate::pitch_class::{alteration_symbol, PitchClass, BASE_COUNT};
use crate::scale::{Scale, ScalePattern};

/// Names used when rendering notes and scales in a given language.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Locale {
    /// Base letter names, starting from C
    pub note_names: [&'static str; BASE_COUNT],

    /// Names of known scale patterns
    pub scale_names: &'static [(ScalePattern, &'static str)],
}

impl Locale {
    /// Letter names and English scale names.
    pub const ENGLISH: Locale = Locale {
        note_names: ["C", "D", "E", "F", "G", "A", "B"],
        scale_names: &[
            (ScalePattern::MAJOR, "major"),
            (ScalePattern::MELODIC_MINOR, "melodic minor"),
            (ScalePattern::HARMONIC_MINOR, "harmonic minor"),
            (ScalePattern::HARMONIC_MAJOR, "harmonic major"),
            (ScalePattern::DOUBLE_HARMONIC_MAJOR, "double harmonic major"),
        ],
    };

    /// Solfège names (do, ré, mi...) and French scale names.
    pub const FRENCH: Locale = Locale {
        note_names: ["do", "ré", "mi", "fa", "sol", "la", "si"],
        scale_names: &[
            (ScalePattern::MAJOR, "majeur"),
            (ScalePattern::MELODIC_MINOR, "mineur mélodique"),
            (ScalePattern::HARMONIC_MINOR, "mineur harmonique"),
            (ScalePattern::HARMONIC_MAJOR, "majeur harmonique"),
            (ScalePattern::DOUBLE_HARMONIC_MAJOR, "majeur double harmonique"),
        ],
    };

    /// Name a pitch class, e.g. `ré♭`.
    ///
    /// Fails if the pitch class has no printable base or alteration.
    pub fn pitch_class_name(&self, pitch_class: PitchClass) -> Result<String> {
        let base = self
            .note_names
            .get(pitch_class.base() as usize)
            .ok_or_else(|| Error::InvalidBase(char::from(b'A' + pitch_class.base())))?;
        let alt = alteration_symbol(pitch_class.alt())
            .ok_or(Error::InvalidAlteration(pitch_class.alt()))?;

        Ok(format!("{}{}", base, alt))
    }

    /// Name a note, suffixed by its octave unless it is the default octave.
    pub fn note_name(&self, note: Note) -> Result<String> {
        let mut name = self.pitch_class_name(note.pitch_class)?;
        if note.octave != 0 {
            name.push_str(&note.octave.to_string());
        }
        Ok(name)
    }

    /// Name a scale pattern, failing with `UnknownScalePattern` when the
    /// locale has no name for it.
    pub fn scale_pattern_name(&self, pattern: ScalePattern) -> Result<&'static str> {
        self.scale_names
            .iter()
            .find(|&&(known, _)| known == pattern)
            .map(|&(_, name)| name)
            .ok_or_else(|| Error::UnknownScalePattern(pattern.to_string()))
    }

    /// Name a scale, e.g. `sol mineur harmonique`.
    pub fn scale_name(&self, scale: &Scale) -> Result<String> {
        let root = self.note_name(scale.root)?;
        let pattern = self.scale_pattern_name(scale.pattern)?;
        Ok(format!("{} {}", root, pattern))
    }
}

impl Default for Locale {
    fn default() -> Locale {
        Locale::ENGLISH
    }
}
