//! Recognition of URL- and e-mail-shaped text.
//!
//! The prefix scanners only ever look at offset 0 of their input and report the length
//! of the longest match there, or `None`. [`LinkFinder`] walks a whole text and calls
//! them at every word boundary.

pub mod email;
pub mod finder;
pub mod url;

pub use self::email::email_prefix_length;
pub use self::finder::{links, LinkFinder};
pub use self::url::{url_prefix_length, UrlScanner, DEFAULT_SCHEMES};

/// English sentence punctuation that is dropped from the end of a match.
#[inline]
pub(crate) fn is_sentence_punctuation(b: u8) -> bool {
    matches!(b, b'.' | b',' | b';' | b':' | b'!' | b'?')
}

/// Move `end` back over trailing sentence punctuation, never past `floor`.
pub(crate) fn trim_sentence_punctuation(bytes: &[u8], floor: usize, mut end: usize) -> usize {
    while end > floor && is_sentence_punctuation(bytes[end - 1]) {
        end -= 1;
    }
    end
}
