//! Error types for the charset engine.

use thiserror::Error;

/// Errors raised while encoding text into an ARIB STD-B24 byte stream.
///
/// Decoding never errors; see [`crate::Decoded::complete`].
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum EncodeError {
    /// The character at `index` (counted in characters, not bytes) has no
    /// cell in any graphic set the encoder uses.
    #[error("character U+{codepoint:04X} at position {index} is not representable in ARIB STD-B24")]
    Unencodable { index: usize, codepoint: u32 },
}
