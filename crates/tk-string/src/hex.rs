//! Lowercase hex encoding.

use ::hex::FromHexError;
use tk_core::{Result, TkError};

/// Digit alphabet of [`bytes_to_hex`] output.
pub const HEX_CHARS: &[u8; 16] = b"0123456789abcdef";

/// Encode bytes as lowercase hex, high nibble first. The result is always
/// twice as long as the input and carries no prefix or separators.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    ::hex::encode(bytes)
}

/// Decode a hex string produced by [`bytes_to_hex`]. Either case is accepted.
///
/// Lengths and positions in errors are byte offsets into `input`.
pub fn hex_to_bytes(input: &str) -> Result<Vec<u8>> {
    ::hex::decode(input).map_err(|e| match e {
        FromHexError::OddLength => TkError::OddHexLength(input.len()),
        FromHexError::InvalidHexCharacter { c, index } => TkError::InvalidHexDigit {
            position: index,
            // Everything before `index` is ASCII, so this is a char boundary.
            found: input.get(index..).and_then(|s| s.chars().next()).unwrap_or(c),
        },
        FromHexError::InvalidStringLength => TkError::InvalidArgument(e.to_string()),
    })
}
