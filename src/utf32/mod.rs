//! UTF-32: the 32-bit fixed-width form, one unit per scalar value.

use crate::buf::Sink;
use crate::codepoint::CodePoint;
use crate::error::ErrorKind;
use crate::transcode::{Decode, Encode};
use crate::units::Units;


pub(crate) struct Utf32;

impl Decode for Utf32 {
    type Unit = u32;

    #[inline]
    fn decode(units: &mut Units<'_, u32>) -> Result<char, ErrorKind> {
        let value = units.next().ok_or(ErrorKind::UnexpectedTerminator)?;
        CodePoint::from_u32(value)
            .ok_or(ErrorKind::CodepointTooLarge)?
            .to_char()
            .ok_or(ErrorKind::SurrogateAsScalar)
    }
}

impl Encode for Utf32 {
    type Unit = u32;

    #[inline]
    fn encoded_len(_: char) -> usize {
        1
    }

    #[inline]
    fn encode(c: char, out: &mut Sink<u32>) {
        out.push(c as u32);
    }
}
