//! uricode - percent-encoding for URIs and URI components, plus link scanning
//!
//! This crate escapes and unescapes text for use in URIs, with the two policies known
//! from `encodeURI`/`encodeURIComponent`, and recognizes URL- and e-mail-shaped text.
//!
//! # Features
//!
//! - **Two escaping policies**: whole URIs keep their delimiters, components escape them
//! - **Byte-wise**: multi-byte UTF-8 is escaped one byte at a time, never re-interpreted
//! - **Validating decoder**: malformed escapes and invalid UTF-8 are reported as errors
//! - **Prefix scanners**: length of the URL or e-mail address at the start of a text
//! - **Link finder**: every URL and e-mail address in a text
//!
//! # Quick Start
//!
//! ```
//! use uricode::{decode, decode_component, encode, encode_component};
//! use uricode::{email_prefix_length, url_prefix_length};
//!
//! assert_eq!(encode("foo bar")?, "foo%20bar");
//! assert_eq!(encode_component("a/b?c")?, "a%2Fb%3Fc");
//!
//! assert_eq!(decode_component("foo%2F%26")?, "foo/&");
//! // escapes of reserved characters survive a whole-URI decode
//! assert_eq!(decode("foo%2F%20")?, "foo%2F ");
//!
//! assert_eq!(url_prefix_length("http://example.com/ rest"), Some(19));
//! assert_eq!(email_prefix_length("me@example.com, you"), Some(14));
//! # Ok::<(), uricode::UriError>(())
//! ```
//!
//! # Escaping policies
//!
//! | Bytes                          | `encode` | `encode_component` |
//! |--------------------------------|----------|--------------------|
//! | `A-Z a-z 0-9`                  | kept     | kept               |
//! | `- _ . ! ~ * ' ( )`            | kept     | kept               |
//! | `; / ? : @ & = + $ , #`        | kept     | escaped            |
//! | everything else, all non-ASCII | escaped  | escaped            |
//!
//! # Error Handling
//!
//! Encode and decode return `Result<String, UriError>`. Dropping the result releases it.
//! Decoding fails when:
//!
//! - A `%` is not followed by two hex digits ([`UriError::MalformedEscape`])
//! - The decoded bytes are not valid UTF-8 ([`UriError::InvalidUtf8`])
//!
//! The scanners never fail; "no match" is `None`.

// Re-export encoding and decoding functions
pub use self::core::{decode, decode_component, decode_with, encode, encode_component, encode_with};
pub use self::core::UriCodec;

// Re-export scanners
pub use scan::{email_prefix_length, links, url_prefix_length, LinkFinder, UrlScanner, DEFAULT_SCHEMES};

// Re-export public types
pub use error::{ErrorKind, UriError, UriResult};
pub use types::{CharClass, EscapePolicy, LinkKind, Span};
pub use self::core::{classify, is_alphanumeric, is_hex_digit, is_mark, is_reserved, is_unescaped};

// Module declarations
pub mod core;
pub mod error;
pub mod scan;
pub mod types;
