use super::*;
use alloc::string::ToString;

#[test]
fn error_display() {
    let err = Error::new(ErrorKind::OverlongEncoding, 3);
    assert_eq!(err.to_string(), "overlong encoding (source unit 3)");
    assert_eq!(err.kind(), ErrorKind::OverlongEncoding);
    assert_eq!(err.valid_up_to(), 3);
}

#[test]
fn direction_display() {
    assert_eq!(Direction::Utf16ToUtf8.to_string(), "UTF-16 -> UTF-8");
    assert_eq!(Direction::Utf8ToUtf32.to_string(), "UTF-8 -> UTF-32");
}

#[test]
fn status_codes_utf16_to_utf8() {
    let d = Direction::Utf16ToUtf8;
    assert_eq!(ErrorKind::MalformedLeadByte.status_code(d), 1);
    assert_eq!(ErrorKind::UnexpectedTerminator.status_code(d), 2);
    assert_eq!(ErrorKind::MismatchedSurrogateContext.status_code(d), 3);
    assert_eq!(ErrorKind::AllocationFailure.status_code(d), 4);
    assert_eq!(ErrorKind::OverlongEncoding.status_code(d), -1);
}

#[test]
fn status_codes_from_utf8() {
    for d in [Direction::Utf8ToUtf16, Direction::Utf8ToUtf32] {
        assert_eq!(ErrorKind::MalformedLeadByte.status_code(d), 1);
        assert_eq!(ErrorKind::UnexpectedTerminator.status_code(d), 2);
        assert_eq!(ErrorKind::MissingOrBadContinuation.status_code(d), 3);
        assert_eq!(ErrorKind::SurrogateAsScalar.status_code(d), 4);
        assert_eq!(ErrorKind::CodepointTooLarge.status_code(d), 5);
        assert_eq!(ErrorKind::OverlongEncoding.status_code(d), 6);
        assert_eq!(ErrorKind::AllocationFailure.status_code(d), 7);
        assert_eq!(ErrorKind::MismatchedSurrogateContext.status_code(d), -1);
    }
}

#[test]
fn status_codes_utf32_to_utf8() {
    let d = Direction::Utf32ToUtf8;
    assert_eq!(ErrorKind::SurrogateAsScalar.status_code(d), 1);
    assert_eq!(ErrorKind::CodepointTooLarge.status_code(d), 2);
    assert_eq!(ErrorKind::AllocationFailure.status_code(d), 3);
    assert_eq!(ErrorKind::MalformedLeadByte.status_code(d), -1);
}
