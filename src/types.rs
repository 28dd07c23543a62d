//! Small value types shared by the codec and the scanners.

/// Which characters are left unescaped by the encoder and the decoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum EscapePolicy {
    /// Whole-URI escaping: structural delimiters (`; / ? : @ & = + $ , #`) are preserved.
    #[default]
    Uri,
    /// Component escaping: only alphanumerics and `- _ . ! ~ * ' ( )` are preserved.
    Component,
}

/// Classification of a single byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// Alphanumerics and the marks `- _ . ! ~ * ' ( )`. Never escaped.
    Unreserved,
    /// `; / ? : @ & = + $ , #`. Left alone in a URI, escaped in a component.
    Reserved,
    /// Everything else, including every non-ASCII byte. Always escaped.
    Other,
}

impl CharClass {
    /// Whether a byte of this class is written unescaped under `policy`.
    pub fn is_unescaped_in(self, policy: EscapePolicy) -> bool {
        match (self, policy) {
            (CharClass::Unreserved, _) => true,
            (CharClass::Reserved, EscapePolicy::Uri) => true,
            _ => false,
        }
    }
}

/// What kind of link a [`Span`] covers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LinkKind {
    /// A URL with a recognized scheme.
    Url,
    /// An e-mail address.
    Email,
}

/// A matched link inside a larger text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    /// Byte offset of the first byte of the match.
    pub start: usize,
    /// Byte length of the match.
    pub len: usize,
    /// Kind of link.
    pub kind: LinkKind,
}

impl Span {
    /// Byte offset one past the end of the match.
    pub fn end(&self) -> usize {
        self.start + self.len
    }

    /// Slice the matched text out of `text`.
    ///
    /// Returns `None` when the span does not fall on character boundaries of `text`,
    /// which happens when it was found in a different text.
    pub fn as_str<'a>(&self, text: &'a str) -> Option<&'a str> {
        text.get(self.start..self.end())
    }
}
