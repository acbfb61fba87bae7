//! Hex encoding for record payloads

use crate::error::DumpError;

/// Converts record bytes to and from document text
pub trait HexCodec {
    /// Lowercase, two characters per byte, no separators
    fn bytes_to_hex(&self, bytes: &[u8]) -> String;

    /// Case-insensitive; fails on odd length or non-hex characters
    fn hex_to_bytes(&self, text: &str) -> Result<Vec<u8>, DumpError>;
}

/// Default codec backed by the `hex` crate
#[derive(Debug, Clone, Copy, Default)]
pub struct LowerHex;

impl HexCodec for LowerHex {
    fn bytes_to_hex(&self, bytes: &[u8]) -> String {
        hex::encode(bytes)
    }

    fn hex_to_bytes(&self, text: &str) -> Result<Vec<u8>, DumpError> {
        hex::decode(text).map_err(|e| DumpError::InvalidHex {
            text: text.to_string(),
            reason: e.to_string(),
        })
    }
}
