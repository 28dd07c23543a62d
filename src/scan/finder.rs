//! Finding every URL and e-mail address in a text.

use crate::core::table::is_alphanumeric;
use crate::scan::email;
use crate::scan::url::UrlScanner;
use crate::types::{LinkKind, Span};

/// Iterator over the links in a text.
///
/// A match is only attempted at the start of the text or right after a byte that is not
/// a letter or digit. URLs are tried before e-mail addresses, and scanning resumes after
/// the end of each match, so spans never overlap. A failed scan tells the finder how far
/// ahead that kind of link cannot start, so the whole text is walked in linear time.
///
/// # Examples
///
/// ```
/// use uricode::{LinkFinder, LinkKind};
///
/// let text = "docs at https://docs.rs/uricode, mail dev@example.org.";
/// let found: Vec<_> = LinkFinder::new(text).map(|span| (span.kind, span.as_str(text))).collect();
///
/// assert_eq!(found, vec![
///     (LinkKind::Url, Some("https://docs.rs/uricode")),
///     (LinkKind::Email, Some("dev@example.org")),
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct LinkFinder<'a> {
    text: &'a str,
    pos: usize,
    // No URL (or address) starts before these offsets.
    url_resume: usize,
    email_resume: usize,
    urls: bool,
    emails: bool,
    scanner: UrlScanner<'a>,
}

impl<'a> LinkFinder<'a> {
    /// Find both URLs and e-mail addresses in `text`.
    pub fn new(text: &'a str) -> Self {
        Self {
            text,
            pos: 0,
            url_resume: 0,
            email_resume: 0,
            urls: true,
            emails: true,
            scanner: UrlScanner::default(),
        }
    }

    /// Whether to report URLs.
    pub fn urls(mut self, enabled: bool) -> Self {
        self.urls = enabled;
        self
    }

    /// Whether to report e-mail addresses.
    pub fn emails(mut self, enabled: bool) -> Self {
        self.emails = enabled;
        self
    }

    /// Use `scanner` to recognize URLs.
    pub fn url_scanner(mut self, scanner: UrlScanner<'a>) -> Self {
        self.scanner = scanner;
        self
    }

    fn match_at(&mut self, start: usize) -> Option<Span> {
        let text = self.text;
        let rest = &text.as_bytes()[start..];

        if self.urls && start >= self.url_resume {
            match self.scanner.scan(rest) {
                Ok(len) => {
                    return Some(Span {
                        start,
                        len,
                        kind: LinkKind::Url,
                    });
                }
                Err(skip) => self.url_resume = start + skip.max(1),
            }
        }
        if self.emails && start >= self.email_resume {
            match email::scan(rest) {
                Ok(len) => {
                    return Some(Span {
                        start,
                        len,
                        kind: LinkKind::Email,
                    });
                }
                Err(skip) => self.email_resume = start + skip.max(1),
            }
        }
        None
    }
}

impl Iterator for LinkFinder<'_> {
    type Item = Span;

    fn next(&mut self) -> Option<Span> {
        let text = self.text;
        let bytes = text.as_bytes();

        while self.pos < bytes.len() {
            let start = self.pos;
            if start == 0 || !is_alphanumeric(bytes[start - 1]) {
                if let Some(span) = self.match_at(start) {
                    self.pos = span.end();
                    return Some(span);
                }
            }
            self.pos += 1;
        }

        None
    }
}

/// Iterate over every URL and e-mail address in `text`.
pub fn links(text: &str) -> LinkFinder<'_> {
    LinkFinder::new(text)
}
