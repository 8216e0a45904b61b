//! Errors returned when constructing or parsing music values.

use thiserror::Error;

/// The error type for every fallible operation in this crate.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Error {
    /// The base letter is not one of `A` to `G`.
    #[error("invalid base note '{0}', expected 'A' <= base <= 'G'")]
    InvalidBase(char),

    /// The alteration is outside the double-flat to double-sharp range.
    #[error("invalid alteration {0:+}, expected -2 <= alteration <= +2")]
    InvalidAlteration(i8),

    /// A mode index or a degree list does not match the scale.
    ///
    /// `degree` is the offending mode index or degree. When a degree list
    /// holds the wrong number of entries, it is the length of that list.
    #[error("invalid degree {degree} for a scale of {count} notes")]
    InvalidDegree { degree: usize, count: usize },

    #[error("unknown scale pattern {0:?}")]
    UnknownScalePattern(String),

    #[error("cannot parse note {0:?}")]
    CannotParseNote(String),

    #[error("unknown alteration {0:?}")]
    UnknownAlteration(String),

    #[error("cannot parse chord {0:?}")]
    CannotParseChord(String),
}

/// A `Result` alias where the error is this crate's `Error`.
pub type Result<T> = std::result::Result<T, Error>;
