//! Owned, exactly sized, null-terminated conversion output.

use crate::error::ErrorKind;
use crate::units::CodeUnit;
use alloc::boxed::Box;
use alloc::vec::Vec;
use core::ops::Deref;
use core::{fmt, str};


/// A null-terminated sequence of code units produced by a successful
/// conversion.
///
/// The allocation holds exactly the converted units followed by one
/// [`NUL`](CodeUnit::NUL) unit. The buffer is exclusively owned; the
/// conversion keeps no reference to it.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct TerminatedBuf<U: CodeUnit> {
    units: Box<[U]>,
}

impl<U: CodeUnit> TerminatedBuf<U> {
    /// Returns the converted units, without the terminator.
    #[inline]
    pub fn as_units(&self) -> &[U] {
        &self.units[..self.units.len() - 1]
    }

    /// Returns the converted units followed by the terminator.
    #[inline]
    pub fn as_units_with_nul(&self) -> &[U] {
        &self.units
    }

    /// Returns the number of converted units, not counting the terminator.
    #[inline]
    pub fn len(&self) -> usize {
        self.units.len() - 1
    }

    /// Returns whether nothing but the terminator is held.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Consumes the buffer and returns the allocation, terminator included.
    #[inline]
    pub fn into_boxed_units_with_nul(self) -> Box<[U]> {
        self.units
    }

    /// Consumes the buffer and returns the converted units without the
    /// terminator.
    ///
    /// This does not copy the data.
    #[inline]
    pub fn into_vec(self) -> Vec<U> {
        let mut units = self.units.into_vec();
        units.pop();
        units
    }
}

impl TerminatedBuf<u8> {
    /// Returns the converted UTF-8 as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        // Safety: byte buffers are only built by the UTF-8 encoder from
        // scalar values.
        unsafe { str::from_utf8_unchecked(self.as_units()) }
    }
}

impl TerminatedBuf<u32> {
    /// Returns an iterator over the converted scalar values.
    #[inline]
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        // Safety: 32-bit buffers are only built from scalar values.
        self.as_units()
            .iter()
            .map(|&unit| unsafe { char::from_u32_unchecked(unit) })
    }
}

impl<U: CodeUnit> Deref for TerminatedBuf<U> {
    type Target = [U];

    #[inline]
    fn deref(&self) -> &[U] {
        self.as_units()
    }
}

impl<U: CodeUnit> AsRef<[U]> for TerminatedBuf<U> {
    #[inline]
    fn as_ref(&self) -> &[U] {
        self.as_units()
    }
}

impl<U: CodeUnit> fmt::Debug for TerminatedBuf<U> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_units()).finish()
    }
}

/// The write side of a conversion: a buffer reserved for exactly the length
/// the measuring pass computed.
pub(crate) struct Sink<U: CodeUnit> {
    units: Vec<U>,
    len: usize,
}

impl<U: CodeUnit> Sink<U> {
    /// Allocates room for `len` units and the terminator, without growing
    /// past that.
    pub(crate) fn with_len(len: usize) -> Result<Sink<U>, ErrorKind> {
        let capacity = len.checked_add(1).ok_or(ErrorKind::AllocationFailure)?;
        let mut units = Vec::new();
        units
            .try_reserve_exact(capacity)
            .map_err(|_| ErrorKind::AllocationFailure)?;
        Ok(Sink { units, len })
    }

    #[inline]
    pub(crate) fn push(&mut self, unit: U) {
        debug_assert!(self.units.len() < self.len, "sink overrun");
        self.units.push(unit);
    }

    #[inline]
    pub(crate) fn extend_from_slice(&mut self, units: &[U]) {
        debug_assert!(self.units.len() + units.len() <= self.len, "sink overrun");
        self.units.extend_from_slice(units);
    }

    /// Terminates the sequence and hands the allocation over.
    pub(crate) fn finish(mut self) -> TerminatedBuf<U> {
        debug_assert_eq!(self.units.len(), self.len, "sink underrun");
        self.units.push(U::NUL);
        TerminatedBuf {
            units: self.units.into_boxed_slice(),
        }
    }
}
