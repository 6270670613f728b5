//! The four conversions and the two-pass engine behind them.
//!
//! Each conversion first runs a measuring pass: it decodes the whole source
//! with the complete grammar of the source encoding and sums the number of
//! destination units each scalar value needs, writing nothing. Only if the
//! whole source is valid does it allocate a buffer of exactly that length
//! plus the terminator and run the materializing pass, which decodes with the
//! very same decoder and encodes into the buffer.

use crate::buf::{Sink, TerminatedBuf};
use crate::error::{Direction, Error, ErrorKind};
use crate::units::{CodeUnit, Units};
use crate::utf16::Utf16;
use crate::utf32::Utf32;
use crate::utf8::Utf8;


/// The grammar of a source encoding.
pub(crate) trait Decode {
    type Unit: CodeUnit;

    /// Decodes the construct starting at the cursor into one scalar value.
    ///
    /// Consumes the units of an accepted construct. Must not be called at the
    /// terminator.
    fn decode(units: &mut Units<'_, Self::Unit>) -> Result<char, ErrorKind>;
}

/// The layout of a destination encoding.
pub(crate) trait Encode {
    type Unit: CodeUnit;

    fn encoded_len(c: char) -> usize;

    /// Writes exactly `encoded_len(c)` units.
    fn encode(c: char, out: &mut Sink<Self::Unit>);
}

/// Converts a UTF-16 sequence to UTF-8.
///
/// The source ends at its first zero unit or at the end of the slice.
///
/// # Errors
///
/// - [`MalformedLeadByte`](ErrorKind::MalformedLeadByte): a low surrogate
///   where a lead unit was expected.
/// - [`UnexpectedTerminator`](ErrorKind::UnexpectedTerminator): a high
///   surrogate at the end of the sequence.
/// - [`MismatchedSurrogateContext`](ErrorKind::MismatchedSurrogateContext): a
///   high surrogate followed by anything but a low surrogate.
/// - [`AllocationFailure`](ErrorKind::AllocationFailure).
pub fn utf16_to_utf8(source: &[u16]) -> Result<TerminatedBuf<u8>, Error> {
    transcode::<Utf16, Utf8>(Direction::Utf16ToUtf8, source)
}

/// Converts a UTF-8 sequence to UTF-16.
///
/// The source ends at its first zero byte or at the end of the slice.
/// Scalar values from U+10000 up are written as surrogate pairs.
///
/// # Errors
///
/// - [`MalformedLeadByte`](ErrorKind::MalformedLeadByte): a continuation byte
///   or a byte of 0xF8 and above where a sequence should start.
/// - [`UnexpectedTerminator`](ErrorKind::UnexpectedTerminator): the sequence
///   ends inside a multi-byte sequence.
/// - [`MissingOrBadContinuation`](ErrorKind::MissingOrBadContinuation).
/// - [`OverlongEncoding`](ErrorKind::OverlongEncoding), which takes priority
///   over [`SurrogateAsScalar`](ErrorKind::SurrogateAsScalar).
/// - [`SurrogateAsScalar`](ErrorKind::SurrogateAsScalar).
/// - [`CodepointTooLarge`](ErrorKind::CodepointTooLarge).
/// - [`AllocationFailure`](ErrorKind::AllocationFailure).
pub fn utf8_to_utf16(source: &[u8]) -> Result<TerminatedBuf<u16>, Error> {
    transcode::<Utf8, Utf16>(Direction::Utf8ToUtf16, source)
}

/// Converts a UTF-32 sequence to UTF-8.
///
/// The source ends at its first zero unit or at the end of the slice.
///
/// # Errors
///
/// - [`SurrogateAsScalar`](ErrorKind::SurrogateAsScalar).
/// - [`CodepointTooLarge`](ErrorKind::CodepointTooLarge).
/// - [`AllocationFailure`](ErrorKind::AllocationFailure).
pub fn utf32_to_utf8(source: &[u32]) -> Result<TerminatedBuf<u8>, Error> {
    transcode::<Utf32, Utf8>(Direction::Utf32ToUtf8, source)
}

/// Converts a UTF-8 sequence to UTF-32.
///
/// Accepts and rejects exactly what [`utf8_to_utf16`] does.
pub fn utf8_to_utf32(source: &[u8]) -> Result<TerminatedBuf<u32>, Error> {
    transcode::<Utf8, Utf32>(Direction::Utf8ToUtf32, source)
}

fn transcode<D, E>(
    direction: Direction,
    source: &[D::Unit],
) -> Result<TerminatedBuf<E::Unit>, Error>
where
    D: Decode,
    E: Encode,
{
    let units = Units::new(source);

    let mut len = 0;
    decode_all::<D>(units.clone(), |c| len += E::encoded_len(c))
        .inspect_err(|err| log::debug!("{direction}: rejected input: {err}"))?;

    let mut sink = Sink::with_len(len).map_err(|kind| {
        log::warn!("{direction}: failed to allocate {len} destination units");
        Error::new(kind, units.len())
    })?;

    // The sink is dropped on failure, so nothing partial escapes.
    decode_all::<D>(units.clone(), |c| E::encode(c, &mut sink)).inspect_err(|err| {
        log::error!("{direction}: materializing pass rejected measured input: {err}")
    })?;

    log::trace!("{direction}: {} source units -> {len} destination units", units.len());
    Ok(sink.finish())
}

/// Decodes every construct up to the terminator and hands each scalar value
/// to `each`. Both passes go through here.
///
/// Stops at the first rejected construct, reporting where it starts.
fn decode_all<D: Decode>(
    mut units: Units<'_, D::Unit>,
    mut each: impl FnMut(char),
) -> Result<(), Error> {
    while !units.is_at_end() {
        let start = units.position();
        let c = D::decode(&mut units).map_err(|kind| Error::new(kind, start))?;
        each(c);
    }
    Ok(())
}
