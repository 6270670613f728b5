use super::*;

#[test]
fn chained_conversion() {
    let utf16: [u16; 4] = [0x3050, 0xD87E, 0xDC0F, 0];
    let mut status: c_int = -1;

    unsafe {
        let utf8 = utfconv_utf16_to_utf8(utf16.as_ptr(), &mut status);
        assert_eq!(status, 0);
        assert_eq!(units::from_ptr(utf8), "ぐ\u{2F80F}".as_bytes());

        let utf32 = utfconv_utf8_to_utf32(utf8, &mut status);
        assert_eq!(status, 0);
        assert_eq!(units::from_ptr(utf32), [0x3050, 0x2F80F]);

        let back = utfconv_utf32_to_utf8(utf32, &mut status);
        assert_eq!(status, 0);
        assert_eq!(units::from_ptr(back), units::from_ptr(utf8));

        let utf16_back = utfconv_utf8_to_utf16(back, &mut status);
        assert_eq!(status, 0);
        assert_eq!(units::from_ptr(utf16_back), &utf16[..3]);

        utfconv_free_utf8(utf8);
        utfconv_free_utf32(utf32);
        utfconv_free_utf8(back);
        utfconv_free_utf16(utf16_back);
    }
}

#[test]
fn failure_returns_null_and_status() {
    let mut status: c_int = 0;

    unsafe {
        let lone: [u16; 2] = [0xD83F, 0];
        assert!(utfconv_utf16_to_utf8(lone.as_ptr(), &mut status).is_null());
        assert_eq!(status, 2);

        let overlong = *b"\xC0\x80\0";
        assert!(utfconv_utf8_to_utf16(overlong.as_ptr(), &mut status).is_null());
        assert_eq!(status, 6);
        assert!(utfconv_utf8_to_utf32(overlong.as_ptr(), &mut status).is_null());
        assert_eq!(status, 6);

        let surrogate: [u32; 2] = [0xD800, 0];
        assert!(utfconv_utf32_to_utf8(surrogate.as_ptr(), &mut status).is_null());
        assert_eq!(status, 1);
    }
}

#[test]
fn null_pointers() {
    let mut status: c_int = -1;

    unsafe {
        let empty = utfconv_utf8_to_utf16(ptr::null(), &mut status);
        assert_eq!(status, 0);
        assert!(!empty.is_null());
        assert_eq!(*empty, 0);
        utfconv_free_utf16(empty);

        let text = *b"a\0";
        let utf32 = utfconv_utf8_to_utf32(text.as_ptr(), ptr::null_mut());
        assert_eq!(units::from_ptr(utf32), [0x61]);
        utfconv_free_utf32(utf32);

        utfconv_free_utf8(ptr::null_mut());
    }
}
