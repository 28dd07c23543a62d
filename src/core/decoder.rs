//! Percent-decoding.
//!
//! Both decoders share one algorithm. Bytes other than `%` are copied through. A `%`
//! must be followed by two hex digits (either case), which are combined into one byte.
//! The decoded bytes must form valid UTF-8 as a whole.
//!
//! [`decode`] additionally leaves a triplet untouched when it would produce one of
//! `; / ? : @ & = + $ , #`, so decoding a URI never changes its structure.

use log::debug;

use crate::core::table::is_reserved;
use crate::error::{UriError, UriResult};
use crate::types::EscapePolicy;

/// Whether an escape that decodes to `byte` must be kept as written.
#[inline]
fn keeps_escaped(byte: u8, policy: EscapePolicy) -> bool {
    policy == EscapePolicy::Uri && is_reserved(byte)
}

fn decode_bytes(input: &[u8], policy: EscapePolicy) -> UriResult<String> {
    let mut out = Vec::new();
    out.try_reserve_exact(input.len())
        .map_err(|_| UriError::OutOfMemory {
            requested: input.len(),
        })?;

    let mut i = 0;
    while i < input.len() {
        let b = input[i];
        if b != b'%' {
            out.push(b);
            i += 1;
            continue;
        }

        let triplet = input
            .get(i..i + 3)
            .ok_or(UriError::MalformedEscape { position: i })?;
        let mut decoded = [0u8; 1];
        hex::decode_to_slice(&triplet[1..], &mut decoded)
            .map_err(|_| UriError::MalformedEscape { position: i })?;

        if keeps_escaped(decoded[0], policy) {
            out.extend_from_slice(triplet);
        } else {
            out.push(decoded[0]);
        }
        i += 3;
    }

    Ok(String::from_utf8(out)?)
}

/// Percent-decode `input` under `policy`.
///
/// # Errors
///
/// - [`UriError::MalformedEscape`] if a `%` is not followed by two hex digits.
/// - [`UriError::InvalidUtf8`] if the decoded bytes are not valid UTF-8.
/// - [`UriError::OutOfMemory`] if the output buffer cannot be reserved.
pub fn decode_with(input: &[u8], policy: EscapePolicy) -> UriResult<String> {
    let result = decode_bytes(input, policy);
    if let Err(err) = &result {
        debug!("{:?} decode of {} bytes failed: {}", policy, input.len(), err);
    }
    result
}

/// Decode a whole URI.
///
/// Escapes that resolve to a reserved character or to `#` are left as they are.
///
/// # Examples
///
/// ```
/// use uricode::decode;
///
/// assert_eq!(decode("foo%20bar").unwrap(), "foo bar");
/// assert_eq!(decode("a%2Fb%23c").unwrap(), "a%2Fb%23c");
/// ```
pub fn decode(encoded_uri: impl AsRef<[u8]>) -> UriResult<String> {
    decode_with(encoded_uri.as_ref(), EscapePolicy::Uri)
}

/// Decode a URI component. Every escape sequence is resolved.
///
/// # Examples
///
/// ```
/// use uricode::decode_component;
///
/// assert_eq!(decode_component("foo%2F%26").unwrap(), "foo/&");
/// ```
pub fn decode_component(encoded_component: impl AsRef<[u8]>) -> UriResult<String> {
    decode_with(encoded_component.as_ref(), EscapePolicy::Component)
}
