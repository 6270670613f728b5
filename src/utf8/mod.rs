//! UTF-8: the 8-bit variable-width form.

use crate::buf::Sink;
use crate::codepoint::CodePoint;
use crate::error::ErrorKind;
use crate::transcode::{Decode, Encode};
use crate::units::Units;


/// Mask of the value bits of a continuation byte.
const CONT_MASK: u8 = 0b0011_1111;
const TAG_CONT: u8 = 0b1000_0000;
const TAG_TWO_B: u8 = 0b1100_0000;
const TAG_THREE_B: u8 = 0b1110_0000;
const TAG_FOUR_B: u8 = 0b1111_0000;
const MAX_ONE_B: u32 = 0x80;
const MAX_TWO_B: u32 = 0x800;
const MAX_THREE_B: u32 = 0x10000;

/// Smallest value each sequence width may carry; anything below is overlong.
const MIN_FOR_WIDTH: [u32; 5] = [0, 0, MAX_ONE_B, MAX_TWO_B, MAX_THREE_B];

pub(crate) struct Utf8;

/// Returns the length of the sequence a lead byte opens.
#[inline]
fn sequence_width(lead: u8) -> Result<usize, ErrorKind> {
    match lead {
        0x00..=0x7F => Ok(1),
        0x80..=0xBF => Err(ErrorKind::MalformedLeadByte),
        0xC0..=0xDF => Ok(2),
        0xE0..=0xEF => Ok(3),
        0xF0..=0xF7 => Ok(4),
        0xF8..=0xFF => Err(ErrorKind::MalformedLeadByte),
    }
}

#[inline]
const fn len_utf8(code: u32) -> usize {
    if code < MAX_ONE_B {
        1
    } else if code < MAX_TWO_B {
        2
    } else if code < MAX_THREE_B {
        3
    } else {
        4
    }
}

#[inline]
fn encode_utf8_raw(code: u32, dst: &mut [u8; 4]) -> &[u8] {
    let len = len_utf8(code);
    match len {
        1 => {
            dst[0] = code as u8;
        }
        2 => {
            dst[0] = (code >> 6 & 0x1F) as u8 | TAG_TWO_B;
            dst[1] = (code & 0x3F) as u8 | TAG_CONT;
        }
        3 => {
            dst[0] = (code >> 12 & 0x0F) as u8 | TAG_THREE_B;
            dst[1] = (code >> 6 & 0x3F) as u8 | TAG_CONT;
            dst[2] = (code & 0x3F) as u8 | TAG_CONT;
        }
        _ => {
            dst[0] = (code >> 18 & 0x07) as u8 | TAG_FOUR_B;
            dst[1] = (code >> 12 & 0x3F) as u8 | TAG_CONT;
            dst[2] = (code >> 6 & 0x3F) as u8 | TAG_CONT;
            dst[3] = (code & 0x3F) as u8 | TAG_CONT;
        }
    }
    &dst[..len]
}

impl Decode for Utf8 {
    type Unit = u8;

    /// Checks, in order: the lead byte, each continuation byte (terminator
    /// first, then range), then the decoded value (overlong, surrogate, too
    /// large). The first failure wins.
    fn decode(units: &mut Units<'_, u8>) -> Result<char, ErrorKind> {
        let lead = units.next().ok_or(ErrorKind::UnexpectedTerminator)?;
        let width = sequence_width(lead)?;
        if width == 1 {
            return Ok(lead as char);
        }

        // Only the bottom 5 bits for width 2, 4 bits for width 3, and 3 bits
        // for width 4.
        let mut code = (lead & (0x7F >> width)) as u32;
        for _ in 1..width {
            let byte = units.next().ok_or(ErrorKind::UnexpectedTerminator)?;
            if byte & !CONT_MASK != TAG_CONT {
                return Err(ErrorKind::MissingOrBadContinuation);
            }
            code = (code << 6) | (byte & CONT_MASK) as u32;
        }

        if code < MIN_FOR_WIDTH[width] {
            return Err(ErrorKind::OverlongEncoding);
        }
        CodePoint::from_u32(code)
            .ok_or(ErrorKind::CodepointTooLarge)?
            .to_char()
            .ok_or(ErrorKind::SurrogateAsScalar)
    }
}

impl Encode for Utf8 {
    type Unit = u8;

    #[inline]
    fn encoded_len(c: char) -> usize {
        len_utf8(c as u32)
    }

    #[inline]
    fn encode(c: char, out: &mut Sink<u8>) {
        let mut bytes = [0; 4];
        out.extend_from_slice(encode_utf8_raw(c as u32, &mut bytes));
    }
}
