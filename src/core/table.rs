//! Byte classification tables.
//!
//! Every predicate is a lookup into one constant 256-entry table, so all of them are
//! total over `u8`. Bytes outside the ASCII range carry no flags: they are never
//! alphanumeric, never a mark, never reserved, and are always escaped.

use crate::types::{CharClass, EscapePolicy};

const ALPHA: u8 = 1 << 0;
const DIGIT: u8 = 1 << 1;
const MARK: u8 = 1 << 2;
const RESERVED: u8 = 1 << 3;
const HEX: u8 = 1 << 4;

/// Sets `flag` on every byte of `bytes` in `table`.
const fn mark_bytes(mut table: [u8; 256], mut bytes: &[u8], flag: u8) -> [u8; 256] {
    while let [cur, rem @ ..] = bytes {
        table[*cur as usize] |= flag;
        bytes = rem;
    }
    table
}

const fn build() -> [u8; 256] {
    let mut table = [0u8; 256];
    table = mark_bytes(table, b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz", ALPHA);
    table = mark_bytes(table, b"0123456789", DIGIT);
    table = mark_bytes(table, b"-_.!~*'()", MARK);
    table = mark_bytes(table, b";/?:@&=+$,#", RESERVED);
    table = mark_bytes(table, b"0123456789ABCDEFabcdef", HEX);
    table
}

const TABLE: [u8; 256] = build();

#[inline]
const fn has(b: u8, flag: u8) -> bool {
    TABLE[b as usize] & flag != 0
}

/// `true` for ASCII letters and digits.
#[inline]
pub const fn is_alphanumeric(b: u8) -> bool {
    has(b, ALPHA | DIGIT)
}

/// `true` for the unreserved marks `- _ . ! ~ * ' ( )`.
#[inline]
pub const fn is_mark(b: u8) -> bool {
    has(b, MARK)
}

/// `true` for the reserved delimiters `; / ? : @ & = + $ , #`.
#[inline]
pub const fn is_reserved(b: u8) -> bool {
    has(b, RESERVED)
}

/// `true` for `0-9`, `A-F` and `a-f`.
#[inline]
pub const fn is_hex_digit(b: u8) -> bool {
    has(b, HEX)
}

/// `true` if `b` is written as-is under `policy`.
#[inline]
pub const fn is_unescaped(b: u8, policy: EscapePolicy) -> bool {
    match policy {
        EscapePolicy::Uri => has(b, ALPHA | DIGIT | MARK | RESERVED),
        EscapePolicy::Component => has(b, ALPHA | DIGIT | MARK),
    }
}

/// Classify a single byte.
pub const fn classify(b: u8) -> CharClass {
    if has(b, ALPHA | DIGIT | MARK) {
        CharClass::Unreserved
    } else if has(b, RESERVED) {
        CharClass::Reserved
    } else {
        CharClass::Other
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_marks_and_reserved_are_disjoint() {
        for b in 0..=255u8 {
            assert!(!(is_mark(b) && is_reserved(b)), "byte {b:#04x} in both sets");
        }
    }

    #[test]
    fn test_non_ascii_is_unclassified() {
        for b in 0x80..=0xFFu8 {
            assert_eq!(classify(b), CharClass::Other);
            assert!(!is_hex_digit(b));
            assert!(!is_unescaped(b, EscapePolicy::Uri));
        }
    }

    #[test]
    fn test_hash_is_reserved() {
        assert!(is_reserved(b'#'));
        assert!(is_unescaped(b'#', EscapePolicy::Uri));
        assert!(!is_unescaped(b'#', EscapePolicy::Component));
    }

    #[test]
    fn test_classify_matches_predicates() {
        for b in 0..=255u8 {
            let expected = if is_alphanumeric(b) || is_mark(b) {
                CharClass::Unreserved
            } else if is_reserved(b) {
                CharClass::Reserved
            } else {
                CharClass::Other
            };
            assert_eq!(classify(b), expected);
            assert_eq!(is_unescaped(b, EscapePolicy::Uri), expected.is_unescaped_in(EscapePolicy::Uri));
            assert_eq!(
                is_unescaped(b, EscapePolicy::Component),
                expected.is_unescaped_in(EscapePolicy::Component)
            );
        }
    }

    #[test]
    fn test_hex_digits() {
        let hex: Vec<u8> = (0..=255u8).filter(|&b| is_hex_digit(b)).collect();
        assert_eq!(hex, b"0123456789ABCDEFabcdef");
    }

    #[test]
    fn test_percent_and_space_are_escaped() {
        for policy in [EscapePolicy::Uri, EscapePolicy::Component] {
            assert!(!is_unescaped(b'%', policy));
            assert!(!is_unescaped(b' ', policy));
        }
    }
}
