//! Percent-encoding and percent-decoding.
//!
//! This module contains:
//! - The byte classification tables
//! - The encoder for URIs and URI components
//! - The decoder for URIs and URI components
//! - A codec bound to a runtime-selected policy

pub mod codec;
pub mod decoder;
pub mod encoder;
pub mod table;

// Re-export main functionality
pub use codec::UriCodec;
pub use decoder::{decode, decode_component, decode_with};
pub use encoder::{encode, encode_component, encode_with};
pub use table::{classify, is_alphanumeric, is_hex_digit, is_mark, is_reserved, is_unescaped};
