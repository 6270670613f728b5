//! UTF-16: the 16-bit variable-width form, in native byte order.

use crate::buf::Sink;
use crate::codepoint::Surrogate;
use crate::error::ErrorKind;
use crate::transcode::{Decode, Encode};
use crate::units::Units;


pub(crate) struct Utf16;

/// Joins a high and a low surrogate into the supplementary scalar value
/// they encode.
#[inline]
fn join_pair(high: Surrogate, low: Surrogate) -> char {
    let high = (high.to_u16() - 0xD800) as u32;
    let low = (low.to_u16() - 0xDC00) as u32;
    // Safety: any high/low pair lands in 0x1_0000..=0x10_FFFF.
    unsafe { char::from_u32_unchecked(0x1_0000 + (high << 10 | low)) }
}

impl Decode for Utf16 {
    type Unit = u16;

    fn decode(units: &mut Units<'_, u16>) -> Result<char, ErrorKind> {
        let unit = units.next().ok_or(ErrorKind::UnexpectedTerminator)?;

        let high = match Surrogate::from_u16(unit) {
            None => {
                // Safety: every non-surrogate 16-bit value is a scalar value.
                return Ok(unsafe { char::from_u32_unchecked(unit as u32) });
            }
            Some(s) if !s.is_high_surrogate() => return Err(ErrorKind::MalformedLeadByte),
            Some(s) => s,
        };

        let next = units.peek().ok_or(ErrorKind::UnexpectedTerminator)?;
        match Surrogate::from_u16(next) {
            Some(low) if !low.is_high_surrogate() => {
                units.next();
                Ok(join_pair(high, low))
            }
            _ => Err(ErrorKind::MismatchedSurrogateContext),
        }
    }
}

impl Encode for Utf16 {
    type Unit = u16;

    #[inline]
    fn encoded_len(c: char) -> usize {
        if (c as u32) < 0x1_0000 {
            1
        } else {
            2
        }
    }

    #[inline]
    fn encode(c: char, out: &mut Sink<u16>) {
        let p = c as u32;
        if p >= 0x1_0000 {
            out.push(((p - 0x1_0000) >> 10) as u16 | 0xD800);
            out.push(((p - 0x1_0000) & 0x3FF) as u16 | 0xDC00);
        } else {
            out.push(p as u16);
        }
    }
}
