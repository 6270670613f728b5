#![cfg_attr(not(any(test, feature = "std")), no_std)]

//! # utfconv
//!
//! Validating conversion between null-terminated UTF-8, UTF-16 and UTF-32
//! code unit sequences.
//!
//! Every conversion runs in two passes over the source: the first validates
//! the whole input and measures the exact destination length, the second
//! fills a buffer allocated to exactly that length. Malformed input is
//! rejected before anything is allocated, and no partial output is ever
//! returned.
//!
//! ```
//! let utf8 = utfconv::utf16_to_utf8(&[0x61, 0xD83F, 0xDC0F, 0]).unwrap();
//! assert_eq!(utf8.as_str(), "a\u{1FC0F}");
//!
//! let err = utfconv::utf8_to_utf32(b"\xC0\x80\0").unwrap_err();
//! assert_eq!(err.kind(), utfconv::ErrorKind::OverlongEncoding);
//! ```
//!
//! UTF-16 and UTF-32 are not converted into each other directly; compose
//! the conversions through UTF-8.
extern crate alloc;

pub mod buf;
pub mod codepoint;
pub mod error;
#[cfg(feature = "ffi")]
pub mod ffi;
pub mod transcode;
pub mod units;

mod utf16;
mod utf32;
mod utf8;

pub use buf::TerminatedBuf;
pub use codepoint::CodePoint;
pub use error::{Direction, Error, ErrorKind};
pub use transcode::{utf16_to_utf8, utf32_to_utf8, utf8_to_utf16, utf8_to_utf32};
pub use units::{CodeUnit, Units};
