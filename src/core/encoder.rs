//! Percent-encoding.
//!
//! Input is treated as raw bytes. Multi-byte UTF-8 sequences are never decoded to code
//! points first: each byte that the policy does not allow is written as `%XX` on its own.

use crate::core::table::is_unescaped;
use crate::error::{UriError, UriResult};
use crate::types::EscapePolicy;

const HEX_UPPER: &[u8; 16] = b"0123456789ABCDEF";

/// Percent-encode `input` under `policy`.
///
/// The output is ASCII. Exactly one buffer is allocated, sized to the input length plus
/// two bytes for every escaped byte.
///
/// # Errors
///
/// Only [`UriError::OutOfMemory`], if that buffer cannot be reserved.
pub fn encode_with(input: &[u8], policy: EscapePolicy) -> UriResult<String> {
    let escaped = input.iter().filter(|&&b| !is_unescaped(b, policy)).count();
    let requested = input.len() + 2 * escaped;

    let mut out = String::new();
    out.try_reserve_exact(requested)
        .map_err(|_| UriError::OutOfMemory { requested })?;

    for &b in input {
        if is_unescaped(b, policy) {
            out.push(b as char);
            continue;
        }
        out.push('%');
        out.push(HEX_UPPER[(b >> 4) as usize] as char);
        out.push(HEX_UPPER[(b & 0x0F) as usize] as char);
    }

    Ok(out)
}

/// Encode a whole URI. Structural delimiters, including `#`, are left as they are.
///
/// # Examples
///
/// ```
/// use uricode::encode;
///
/// assert_eq!(encode("foo bar").unwrap(), "foo%20bar");
/// assert_eq!(encode("http://a.io/?q=1#top").unwrap(), "http://a.io/?q=1#top");
/// ```
pub fn encode(uri: impl AsRef<[u8]>) -> UriResult<String> {
    encode_with(uri.as_ref(), EscapePolicy::Uri)
}

/// Encode a single URI component. Anything other than a letter, a digit or one of
/// `- _ . ! ~ * ' ( )` is escaped.
///
/// # Examples
///
/// ```
/// use uricode::encode_component;
///
/// assert_eq!(encode_component("!@#$%^&*(").unwrap(), "!%40%23%24%25%5E%26*(");
/// ```
pub fn encode_component(component: impl AsRef<[u8]>) -> UriResult<String> {
    encode_with(component.as_ref(), EscapePolicy::Component)
}
