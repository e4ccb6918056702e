//! Hex string conversion

use crate::error::TlvResult;

/// Decode a hex string into bytes
///
/// Accepts upper or lower case digits. Fails on odd length or non-hex characters.
pub fn hex_to_bytes(hex: &str) -> TlvResult<Vec<u8>> {
    Ok(::hex::decode(hex)?)
}

/// Encode bytes as uppercase hex, two characters per byte, no separators
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    ::hex::encode_upper(bytes)
}
