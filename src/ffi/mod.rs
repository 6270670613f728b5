//! C-compatible entry points.
//!
//! Each conversion takes a null-terminated source and an `int` status slot
//! and returns a freshly allocated null-terminated buffer, or null with a
//! non-zero status. Statuses follow [`ErrorKind::status_code`]. Buffers must
//! be released with the matching `utfconv_free_*` function.

use crate::error::{Direction, Error};
use crate::units::{self, CodeUnit};
use crate::TerminatedBuf;
use alloc::boxed::Box;
use core::ffi::c_int;
use core::ptr;

#[cfg(test)]
mod tests;

unsafe fn into_raw<U: CodeUnit>(
    result: Result<TerminatedBuf<U>, Error>,
    direction: Direction,
    status: *mut c_int,
) -> *mut U {
    let (code, out) = match result {
        Ok(buf) => (0, Box::into_raw(buf.into_boxed_units_with_nul()) as *mut U),
        Err(err) => (err.kind().status_code(direction), ptr::null_mut()),
    };
    if !status.is_null() {
        *status = code as c_int;
    }
    out
}

unsafe fn free_raw<U: CodeUnit>(buf: *mut U) {
    if buf.is_null() {
        return;
    }
    // Converted output never holds an interior nul.
    let len = units::from_ptr(buf).len() + 1;
    drop(Box::from_raw(ptr::slice_from_raw_parts_mut(buf, len)));
}

/// Converts native-endian UTF-16 to UTF-8.
///
/// # Safety
///
/// `utf16` must be null or a null-terminated sequence not mutated during the
/// call. `status` must be null or valid for writes.
#[no_mangle]
pub unsafe extern "C" fn utfconv_utf16_to_utf8(utf16: *const u16, status: *mut c_int) -> *mut u8 {
    let result = crate::utf16_to_utf8(units::from_ptr(utf16));
    into_raw(result, Direction::Utf16ToUtf8, status)
}

/// Converts UTF-8 to native-endian UTF-16.
///
/// # Safety
///
/// As for [`utfconv_utf16_to_utf8`].
#[no_mangle]
pub unsafe extern "C" fn utfconv_utf8_to_utf16(utf8: *const u8, status: *mut c_int) -> *mut u16 {
    let result = crate::utf8_to_utf16(units::from_ptr(utf8));
    into_raw(result, Direction::Utf8ToUtf16, status)
}

/// Converts native-endian UTF-32 to UTF-8.
///
/// # Safety
///
/// As for [`utfconv_utf16_to_utf8`].
#[no_mangle]
pub unsafe extern "C" fn utfconv_utf32_to_utf8(utf32: *const u32, status: *mut c_int) -> *mut u8 {
    let result = crate::utf32_to_utf8(units::from_ptr(utf32));
    into_raw(result, Direction::Utf32ToUtf8, status)
}

/// Converts UTF-8 to native-endian UTF-32.
///
/// # Safety
///
/// As for [`utfconv_utf16_to_utf8`].
#[no_mangle]
pub unsafe extern "C" fn utfconv_utf8_to_utf32(utf8: *const u8, status: *mut c_int) -> *mut u32 {
    let result = crate::utf8_to_utf32(units::from_ptr(utf8));
    into_raw(result, Direction::Utf8ToUtf32, status)
}

/// Releases a buffer returned by a conversion producing UTF-8.
///
/// # Safety
///
/// `utf8` must be null or a pointer returned by this library's UTF-8
/// producing functions that was not released yet.
#[no_mangle]
pub unsafe extern "C" fn utfconv_free_utf8(utf8: *mut u8) {
    free_raw(utf8)
}

/// Releases a buffer returned by [`utfconv_utf8_to_utf16`].
///
/// # Safety
///
/// `utf16` must be null or a pointer returned by [`utfconv_utf8_to_utf16`]
/// that was not released yet.
#[no_mangle]
pub unsafe extern "C" fn utfconv_free_utf16(utf16: *mut u16) {
    free_raw(utf16)
}

/// Releases a buffer returned by [`utfconv_utf8_to_utf32`].
///
/// # Safety
///
/// `utf32` must be null or a pointer returned by [`utfconv_utf8_to_utf32`]
/// that was not released yet.
#[no_mangle]
pub unsafe extern "C" fn utfconv_free_utf32(utf32: *mut u32) {
    free_raw(utf32)
}
