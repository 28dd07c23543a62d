//! A codec bound to one escaping policy.

use crate::core::decoder::decode_with;
use crate::core::encoder::encode_with;
use crate::error::UriResult;
use crate::types::EscapePolicy;

/// Percent codec with a fixed [`EscapePolicy`].
///
/// Useful when the policy is chosen at runtime rather than by picking between
/// [`encode`](crate::encode) and [`encode_component`](crate::encode_component).
///
/// # Examples
///
/// ```
/// use uricode::{EscapePolicy, UriCodec};
///
/// let codec = UriCodec::new(EscapePolicy::Component);
/// let encoded = codec.encode("a/b c").unwrap();
/// assert_eq!(encoded, "a%2Fb%20c");
/// assert_eq!(codec.decode(&encoded).unwrap(), "a/b c");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct UriCodec {
    policy: EscapePolicy,
}

impl UriCodec {
    /// Create a codec for `policy`.
    pub fn new(policy: EscapePolicy) -> Self {
        Self { policy }
    }

    /// The policy this codec applies.
    pub fn policy(&self) -> EscapePolicy {
        self.policy
    }

    /// Percent-encode `input`.
    pub fn encode(&self, input: impl AsRef<[u8]>) -> UriResult<String> {
        encode_with(input.as_ref(), self.policy)
    }

    /// Percent-decode `input`.
    pub fn decode(&self, input: impl AsRef<[u8]>) -> UriResult<String> {
        decode_with(input.as_ref(), self.policy)
    }
}
