//! URL prefix scanning.
//!
//! Grammar: `scheme ":" body`, where `scheme` is one of a known set (compared
//! ASCII case-insensitively) and `body` is a run of bytes allowed unescaped in a URI or
//! `%XX` escapes. The body ends at a `'` or at the first byte that cannot appear in a
//! URI. Trailing sentence punctuation is then trimmed, and what is left must contain at
//! least one letter or digit.

use log::trace;

use crate::core::table::{is_alphanumeric, is_hex_digit, is_unescaped};
use crate::scan::trim_sentence_punctuation;
use crate::types::EscapePolicy;

/// Schemes recognized by [`UrlScanner::default`] and [`url_prefix_length`].
pub const DEFAULT_SCHEMES: &[&str] = &[
    "http", "https", "ftp", "ftps", "gopher", "mailto", "news", "nntp", "telnet", "wais", "file",
    "prospero",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Reading the scheme token.
    Scheme,
    /// Inside the body, after a complete character or escape.
    Body,
    /// Read `%`, expecting the first hex digit.
    EscapeHigh,
    /// Read `%X`, expecting the second hex digit.
    EscapeLow,
}

#[inline]
fn is_scheme_char(b: u8) -> bool {
    is_alphanumeric(b) || matches!(b, b'+' | b'-' | b'.')
}

/// Scanner for URL-shaped prefixes with a configurable scheme set.
///
/// # Examples
///
/// ```
/// use uricode::UrlScanner;
///
/// let scanner = UrlScanner::with_schemes(&["irc"]);
/// assert_eq!(scanner.prefix_length("irc:libera.chat/rust, join"), Some(20));
/// assert_eq!(scanner.prefix_length("http://example.com"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrlScanner<'a> {
    schemes: &'a [&'a str],
}

impl Default for UrlScanner<'static> {
    fn default() -> Self {
        Self {
            schemes: DEFAULT_SCHEMES,
        }
    }
}

impl<'a> UrlScanner<'a> {
    /// Create a scanner that recognizes only `schemes`.
    pub fn with_schemes(schemes: &'a [&'a str]) -> Self {
        Self { schemes }
    }

    /// The recognized schemes.
    pub fn schemes(&self) -> &'a [&'a str] {
        self.schemes
    }

    fn is_known_scheme(&self, token: &[u8]) -> bool {
        self.schemes
            .iter()
            .any(|scheme| scheme.as_bytes().eq_ignore_ascii_case(token))
    }

    /// Length of the longest URL at the start of `text`, or `None` if there is none.
    pub fn prefix_length(&self, text: impl AsRef<[u8]>) -> Option<usize> {
        let bytes = text.as_ref();
        let result = self.scan(bytes).ok();
        trace!("url prefix scan over {} bytes: {:?}", bytes.len(), result);
        result
    }

    /// First offset in `1..colon` where a known scheme ending at `colon` starts, or `colon`.
    fn known_suffix_start(&self, bytes: &[u8], colon: usize) -> usize {
        let longest = self.schemes.iter().map(|s| s.len()).max().unwrap_or(0);
        let from = colon.saturating_sub(longest).max(1);
        (from..colon)
            .find(|&s| bytes[s].is_ascii_alphabetic() && self.is_known_scheme(&bytes[s..colon]))
            .unwrap_or(colon)
    }

    /// `Ok(len)` for a match. Otherwise `Err(skip)`: no URL starts at any offset in `1..skip`.
    pub(crate) fn scan(&self, bytes: &[u8]) -> Result<usize, usize> {
        let mut state = State::Scheme;
        let mut body_start = 0;
        let mut end = 0;

        for (i, &b) in bytes.iter().enumerate() {
            state = match state {
                State::Scheme if i == 0 && !b.is_ascii_alphabetic() => return Err(1),
                State::Scheme if is_scheme_char(b) => State::Scheme,
                State::Scheme if b == b':' && self.is_known_scheme(&bytes[..i]) => {
                    body_start = i + 1;
                    end = body_start;
                    State::Body
                }
                State::Scheme if b == b':' => return Err(self.known_suffix_start(bytes, i)),
                State::Scheme => return Err(i),
                State::Body if b == b'%' => State::EscapeHigh,
                // quotes end a URL even though `'` is a mark
                State::Body if b != b'\'' && is_unescaped(b, EscapePolicy::Uri) => {
                    end = i + 1;
                    State::Body
                }
                State::EscapeHigh if is_hex_digit(b) => State::EscapeLow,
                State::EscapeLow if is_hex_digit(b) => {
                    end = i + 1;
                    State::Body
                }
                State::Body | State::EscapeHigh | State::EscapeLow => break,
            };
        }

        if state == State::Scheme {
            return Err(bytes.len());
        }

        let end = trim_sentence_punctuation(bytes, body_start, end);
        if !bytes[body_start..end].iter().any(|&b| is_alphanumeric(b)) {
            // any start inside the scheme reaches the same empty body
            return Err(body_start - 1);
        }
        Ok(end)
    }
}

/// Does `text` start with a URL?
///
/// Returns the byte length of the longest URL at offset 0, so `&text[..len]` is the URL,
/// or `None` when `text` does not start with one of [`DEFAULT_SCHEMES`] followed by `:`
/// and a body.
///
/// # Examples
///
/// ```
/// use uricode::url_prefix_length;
///
/// let text = "http://www.example.com/~a/b.html#x end!";
/// assert_eq!(url_prefix_length(text), Some(34));
/// assert_eq!(url_prefix_length("not a url"), None);
/// ```
pub fn url_prefix_length(text: impl AsRef<[u8]>) -> Option<usize> {
    UrlScanner::default().prefix_length(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_basic_urls() {
        assert_eq!(url_prefix_length("http://example.com"), Some(18));
        assert_eq!(url_prefix_length("https://example.com/a?b=c&d=e"), Some(29));
        assert_eq!(url_prefix_length("ftp://files.example.org/pub/x.tar.gz more"), Some(36));
    }

    #[test]
    fn test_scheme_is_case_insensitive() {
        assert_eq!(url_prefix_length("HTTP://EXAMPLE.COM"), Some(18));
        assert_eq!(url_prefix_length("MailTo:someone@example.com"), Some(26));
    }

    #[test]
    fn test_unknown_or_missing_scheme() {
        assert_eq!(url_prefix_length("www.example.com"), None);
        assert_eq!(url_prefix_length("javascript:alert(1)"), None);
        assert_eq!(url_prefix_length("http"), None);
        assert_eq!(url_prefix_length(""), None);
        assert_eq!(url_prefix_length(" http://example.com"), None);
        assert_eq!(url_prefix_length("1http://example.com"), None);
    }

    #[test]
    fn test_scheme_prefix_must_be_exact() {
        assert_eq!(url_prefix_length("httpx://example.com"), None);
        assert_eq!(url_prefix_length("ftps://example.com"), Some(18));
    }

    #[test]
    fn test_empty_body_is_not_a_url() {
        assert_eq!(url_prefix_length("http:"), None);
        assert_eq!(url_prefix_length("http:// x"), None);
        assert_eq!(url_prefix_length("http://."), None);
    }

    #[test]
    fn test_stops_at_disallowed_bytes() {
        assert_eq!(url_prefix_length("http://a.io/x<b>"), Some(13));
        assert_eq!(url_prefix_length("http://a.io/\"q\""), Some(12));
        assert_eq!(url_prefix_length("http://a.io\tz"), Some(11));
        assert_eq!(url_prefix_length("http://a.io/caf\u{e9}"), Some(15));
    }

    #[test]
    fn test_quote_ends_url() {
        assert_eq!(url_prefix_length("http://a.io/x' y"), Some(13));
        assert_eq!(url_prefix_length("http://a.io/it's"), Some(14));
        assert_eq!(url_prefix_length("http:'a.io'"), None);
    }

    #[test]
    fn test_escapes() {
        assert_eq!(url_prefix_length("http://a.io/%7Efred x"), Some(19));
        // a bare percent ends the URL before it
        assert_eq!(url_prefix_length("http://a.io/100%"), Some(15));
        assert_eq!(url_prefix_length("http://a.io/100%2"), Some(15));
        assert_eq!(url_prefix_length("http://a.io/100%zz"), Some(15));
    }

    #[test]
    fn test_trailing_punctuation_trimmed() {
        assert_eq!(url_prefix_length("http://a.io."), Some(11));
        assert_eq!(url_prefix_length("http://a.io/?!"), Some(12));
        assert_eq!(url_prefix_length("http://a.io/x, and"), Some(13));
        assert_eq!(url_prefix_length("http://a.io/x...;"), Some(13));
    }

    #[test]
    fn test_inner_punctuation_kept() {
        assert_eq!(url_prefix_length("http://a.io/b.c?d=1;e=2"), Some(23));
        assert_eq!(url_prefix_length("http://host:8080/"), Some(17));
    }

    #[test]
    fn test_custom_schemes() {
        let scanner = UrlScanner::with_schemes(&["svn+ssh"]);
        assert_eq!(scanner.schemes(), &["svn+ssh"]);
        assert_eq!(scanner.prefix_length("svn+ssh://repo/trunk"), Some(20));
        assert_eq!(scanner.prefix_length("https://repo/trunk"), None);
    }

    #[test]
    fn test_scan_reports_skip() {
        let scanner = UrlScanner::default();
        assert_eq!(scanner.scan(b"http://a"), Ok(8));
        assert_eq!(scanner.scan(b".http://a"), Err(1));
        assert_eq!(scanner.scan(b"abc def"), Err(3));
        assert_eq!(scanner.scan(b"a.a.a."), Err(6));
        // "http" inside the unknown token may still start a URL
        assert_eq!(scanner.scan(b"xhttp://a"), Err(1));
        assert_eq!(scanner.scan(b"abc:d"), Err(3));
        assert_eq!(scanner.scan(b"http:// x"), Err(4));
    }
}
