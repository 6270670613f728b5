//! Classification of decoded values before they are accepted as `char`.

use core::fmt;
use core::num::NonZeroU16;


/// The first value past the Unicode code space.
pub const CODE_SPACE_END: u32 = 0x11_0000;

/// A value in the Unicode code space, U+0000 to U+10FFFF, surrogates
/// included.
///
/// Decoders build a `CodePoint` from the raw value they assembled, which
/// rejects anything past the code space, and then ask for a `char`, which
/// rejects surrogates. The two failures stay distinct.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash)]
pub struct CodePoint {
    value: u32,
}

/// `U+` and at least four hexadecimal digits, e.g. `U+1F80F`.
impl fmt::Debug for CodePoint {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "U+{:04X}", self.value)
    }
}

impl CodePoint {
    /// Returns `None` if `value` is [`CODE_SPACE_END`] or above.
    #[inline]
    pub fn from_u32(value: u32) -> Option<CodePoint> {
        if value < CODE_SPACE_END {
            Some(CodePoint { value })
        } else {
            None
        }
    }

    /// Returns the scalar value, or `None` for a surrogate.
    #[inline]
    pub fn to_char(&self) -> Option<char> {
        match self.categorize() {
            CodePointCategory::Scalar(c) => Some(c),
            CodePointCategory::Surrogate(_) => None,
        }
    }

    /// Splits the code space into scalar values and surrogates.
    #[inline]
    pub fn categorize(&self) -> CodePointCategory {
        match self.value {
            // Safety: the arm bounds the value to the surrogate range.
            0xD800..=0xDFFF => CodePointCategory::Surrogate(unsafe {
                Surrogate::from_u16_unchecked(self.value as u16)
            }),
            // Safety: below CODE_SPACE_END and outside the surrogate range.
            _ => CodePointCategory::Scalar(unsafe { char::from_u32_unchecked(self.value) }),
        }
    }
}

/// A UTF-16 surrogate unit: U+D800 to U+DFFF.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Hash)]
pub struct Surrogate {
    // Never zero, so Option<Surrogate> stays 2 bytes.
    value: NonZeroU16,
}

impl fmt::Debug for Surrogate {
    #[inline]
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(formatter, "U+{:04X}", self.value.get())
    }
}

impl Surrogate {
    /// # Safety
    ///
    /// `value` must be in 0xD800..=0xDFFF.
    #[inline]
    unsafe fn from_u16_unchecked(value: u16) -> Surrogate {
        Surrogate {
            value: NonZeroU16::new_unchecked(value),
        }
    }

    /// Returns `None` unless `value` is in 0xD800..=0xDFFF.
    #[inline]
    pub fn from_u16(value: u16) -> Option<Surrogate> {
        match value {
            // Safety: checked by the pattern.
            0xD800..=0xDFFF => Some(unsafe { Surrogate::from_u16_unchecked(value) }),
            _ => None,
        }
    }

    #[inline]
    pub fn to_u16(&self) -> u16 {
        self.value.get()
    }

    /// `true` for a high (leading) surrogate, 0xD800..=0xDBFF; `false` for a
    /// low (trailing) one.
    #[inline]
    pub fn is_high_surrogate(&self) -> bool {
        self.value.get() < 0xDC00
    }
}

/// What a [`CodePoint`] turned out to be.
#[derive(Eq, PartialEq, Ord, PartialOrd, Clone, Copy, Debug)]
pub enum CodePointCategory {
    Scalar(char),
    Surrogate(Surrogate),
}
