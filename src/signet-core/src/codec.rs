//! Strict hex codec for the oracle boundary.
//!
//! Every byte string that crosses the oracle boundary travels as hex.
//! Decoding is strict: the empty string, odd lengths and characters
//! outside `[0-9a-fA-F]` are rejected before any crypto code sees the
//! value. Rejection reasons are static; the input is never echoed back.

use crate::error::OracleError;

/// Decode a hex string into bytes.
///
/// # Errors
///
/// Returns [`OracleError::InvalidInput`] for the empty string, an
/// odd-length string, or any non-hex character.
pub fn decode_hex(input: &str) -> Result<Vec<u8>, OracleError> {
    if input.is_empty() {
        return Err(OracleError::invalid_input("empty hex input"));
    }
    hex::decode(input).map_err(|e| match e {
        hex::FromHexError::OddLength => OracleError::invalid_input("odd-length hex input"),
        _ => OracleError::invalid_input("non-hex character in input"),
    })
}

/// Encode bytes as lowercase hex.
#[must_use]
pub fn encode_hex(bytes: &[u8]) -> String {
    hex::encode(bytes)
}
