//! Fixed-width code units and a forward-only cursor over them.

use core::fmt;
use core::iter::FusedIterator;
use core::slice;


mod private {
    pub trait Sealed {}
    impl Sealed for u8 {}
    impl Sealed for u16 {}
    impl Sealed for u32 {}
}

/// A fixed-width storage element of an encoding form: `u8`, `u16` or `u32`.
///
/// This trait is sealed and not meant to be implemented by an user of this
/// library.
pub trait CodeUnit: Copy + Eq + fmt::Debug + private::Sealed {
    /// The unit that terminates a sequence.
    const NUL: Self;
}

impl CodeUnit for u8 {
    const NUL: u8 = 0;
}

impl CodeUnit for u16 {
    const NUL: u16 = 0;
}

impl CodeUnit for u32 {
    const NUL: u32 = 0;
}

/// Views a null-terminated sequence as a slice, excluding the terminator.
///
/// A null `ptr` is viewed as an empty sequence.
///
/// # Safety
///
/// `ptr` must be null or point to a readable sequence of `U` ending with
/// [`U::NUL`](CodeUnit::NUL), which must not be mutated for `'a`.
pub unsafe fn from_ptr<'a, U: CodeUnit>(ptr: *const U) -> &'a [U] {
    if ptr.is_null() {
        return &[];
    }

    let mut len = 0;
    while *ptr.add(len) != U::NUL {
        len += 1;
    }
    slice::from_raw_parts(ptr, len)
}

/// A forward-only cursor over a source sequence.
///
/// The sequence ends at the first [`NUL`](CodeUnit::NUL) unit or at the end
/// of the slice, whichever comes first. Nothing past the terminator is ever
/// read.
#[derive(Clone, Debug)]
pub struct Units<'a, U> {
    units: &'a [U],
    position: usize,
}

impl<'a, U: CodeUnit> Units<'a, U> {
    #[inline]
    pub fn new(units: &'a [U]) -> Units<'a, U> {
        let end = units
            .iter()
            .position(|&unit| unit == U::NUL)
            .unwrap_or(units.len());
        Units {
            units: &units[..end],
            position: 0,
        }
    }

    /// Returns the number of units before the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len()
    }

    /// Returns whether the sequence holds no units before the terminator.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }

    /// Returns the index of the next unit.
    #[inline]
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns whether the cursor has reached the terminator.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.position == self.units.len()
    }

    /// Returns the next unit without consuming it, or `None` at the
    /// terminator.
    #[inline]
    pub fn peek(&self) -> Option<U> {
        self.units.get(self.position).copied()
    }
}

impl<U: CodeUnit> Iterator for Units<'_, U> {
    type Item = U;

    #[inline]
    fn next(&mut self) -> Option<U> {
        let unit = self.peek()?;
        self.position += 1;
        Some(unit)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.units.len() - self.position;
        (remaining, Some(remaining))
    }
}
impl<U: CodeUnit> FusedIterator for Units<'_, U> {}
