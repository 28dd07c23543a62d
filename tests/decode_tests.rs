//! Tests for percent-decoding through the public API.

use uricode::*;

#[test]
fn test_hash_handling() {
    assert_eq!(decode("%23").unwrap(), "%23");
    assert_eq!(decode_component("%23").unwrap(), "#");
}

#[test]
fn test_decode_preserves_triplet_case() {
    assert_eq!(decode("a%2fb%2Fc").unwrap(), "a%2fb%2Fc");
}

#[test]
fn test_decode_mixed() {
    assert_eq!(
        decode("https://ex.com/%E2%82%AC%20price?x=%3D1").unwrap(),
        "https://ex.com/€ price?x=%3D1"
    );
    assert_eq!(
        decode_component("https://ex.com/%E2%82%AC%20price?x=%3D1").unwrap(),
        "https://ex.com/€ price?x==1"
    );
}

#[test]
fn test_decode_errors() {
    let cases: &[(&str, ErrorKind)] = &[
        ("%", ErrorKind::MalformedEscape),
        ("%2", ErrorKind::MalformedEscape),
        ("%2x", ErrorKind::MalformedEscape),
        ("%x2", ErrorKind::MalformedEscape),
        ("ok%20then%", ErrorKind::MalformedEscape),
        ("%FF", ErrorKind::InvalidUtf8),
        ("%C3", ErrorKind::InvalidUtf8),
        ("%C3%28", ErrorKind::InvalidUtf8),
        ("%ED%A0%80", ErrorKind::InvalidUtf8),
        ("%F0%82%82%AC", ErrorKind::InvalidUtf8),
    ];

    for (input, kind) in cases {
        assert_eq!(decode(input).unwrap_err().kind(), *kind, "decode({input:?})");
        assert_eq!(
            decode_component(input).unwrap_err().kind(),
            *kind,
            "decode_component({input:?})"
        );
    }
}

#[test]
fn test_malformed_reports_first_bad_percent() {
    assert_eq!(
        decode_component("a%20b%zz%").unwrap_err(),
        UriError::MalformedEscape { position: 5 }
    );
}

#[test]
fn test_invalid_utf8_offset() {
    assert_eq!(
        decode_component("ab%C3%A9%FF").unwrap_err(),
        UriError::InvalidUtf8 { valid_up_to: 4 }
    );
}
