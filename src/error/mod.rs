//! Errors reported by the conversions.

use core::fmt;
use thiserror::Error;

#[cfg(test)]
mod tests;

/// The reason a conversion rejected its input.
///
/// A conversion either succeeds completely or fails with exactly one of
/// these; there is no skipping or replacement of bad units.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// A unit that cannot begin a sequence: a UTF-8 continuation byte or a
    /// byte of 0xF8 and above where a lead byte was expected, or a UTF-16 low
    /// surrogate where a lead unit was expected.
    #[error("unit cannot begin a sequence")]
    MalformedLeadByte,

    /// The sequence ended where a continuation byte or the low half of a
    /// surrogate pair was required.
    #[error("sequence ended inside a multi-unit construct")]
    UnexpectedTerminator,

    /// A UTF-8 continuation position holds a byte outside 0x80..=0xBF.
    #[error("missing or malformed continuation byte")]
    MissingOrBadContinuation,

    /// A UTF-16 high surrogate is followed by something other than a low
    /// surrogate.
    #[error("high surrogate not followed by a low surrogate")]
    MismatchedSurrogateContext,

    /// A value in U+D800..=U+DFFF appeared where a scalar value is required.
    #[error("surrogate code point used as a scalar value")]
    SurrogateAsScalar,

    /// A value at or above 0x110000.
    #[error("value is outside the Unicode code space")]
    CodepointTooLarge,

    /// A value encoded with more units than its minimal form. Reported in
    /// preference to [`SurrogateAsScalar`](Self::SurrogateAsScalar) when a
    /// surrogate is itself encoded overlong.
    #[error("overlong encoding")]
    OverlongEncoding,

    /// The destination buffer could not be allocated.
    #[error("failed to allocate the destination buffer")]
    AllocationFailure,
}

impl ErrorKind {
    /// Returns the numeric status for this kind in the C interface of
    /// `direction`. Zero is reserved for success.
    ///
    /// Returns `-1` for kinds `direction` can never produce.
    pub fn status_code(self, direction: Direction) -> i32 {
        use ErrorKind::*;

        match direction {
            Direction::Utf16ToUtf8 => match self {
                MalformedLeadByte => 1,
                UnexpectedTerminator => 2,
                MismatchedSurrogateContext => 3,
                AllocationFailure => 4,
                _ => -1,
            },
            Direction::Utf8ToUtf16 | Direction::Utf8ToUtf32 => match self {
                MalformedLeadByte => 1,
                UnexpectedTerminator => 2,
                MissingOrBadContinuation => 3,
                SurrogateAsScalar => 4,
                CodepointTooLarge => 5,
                OverlongEncoding => 6,
                AllocationFailure => 7,
                MismatchedSurrogateContext => -1,
            },
            Direction::Utf32ToUtf8 => match self {
                SurrogateAsScalar => 1,
                CodepointTooLarge => 2,
                AllocationFailure => 3,
                _ => -1,
            },
        }
    }
}

/// A rejected conversion.
#[derive(Error, Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[error("{kind} (source unit {valid_up_to})")]
pub struct Error {
    kind: ErrorKind,
    valid_up_to: usize,
}

impl Error {
    #[inline]
    pub(crate) fn new(kind: ErrorKind, valid_up_to: usize) -> Error {
        Error { kind, valid_up_to }
    }

    /// Returns what was wrong with the input.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }

    /// Returns the index in the source up to which the input was verified.
    ///
    /// This is the position of the first unit of the rejected construct.
    /// For [`AllocationFailure`](ErrorKind::AllocationFailure) the whole input
    /// was verified and this is its length.
    #[inline]
    pub fn valid_up_to(&self) -> usize {
        self.valid_up_to
    }
}

/// One of the four supported conversions.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    Utf16ToUtf8,
    Utf8ToUtf16,
    Utf32ToUtf8,
    Utf8ToUtf32,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Direction::Utf16ToUtf8 => "UTF-16 -> UTF-8",
            Direction::Utf8ToUtf16 => "UTF-8 -> UTF-16",
            Direction::Utf32ToUtf8 => "UTF-32 -> UTF-8",
            Direction::Utf8ToUtf32 => "UTF-8 -> UTF-32",
        })
    }
}
