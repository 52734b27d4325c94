//! Base58 encoding and decoding.
//!
//! Provides raw Base58 encode/decode with Bitcoin's modified alphabet.
//! No checksum layer is applied; callers that need integrity protection
//! layer it themselves.

use crate::EncodingError;

/// Bitcoin's modified Base58 alphabet.
///
/// Excludes 0, O, I, l to reduce visual ambiguity.
pub const ALPHABET: &[u8] = b"123456789ABCDEFGHJKLMNPQRSTUVWXYZabcdefghijkmnopqrstuvwxyz";

/// Encode a byte slice to a Base58 string.
///
/// Leading zero bytes are encoded as leading '1' characters. The empty
/// slice encodes to the empty string.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A Base58-encoded string.
pub fn encode(data: &[u8]) -> String {
    bs58::encode(data).with_alphabet(bs58::Alphabet::BITCOIN).into_string()
}

/// Decode a Base58 string to a byte vector.
///
/// Leading '1' characters decode to leading zero bytes.
///
/// # Arguments
/// * `s` - The Base58 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success, or [`EncodingError::InvalidCharacter`] for
/// characters outside the alphabet.
pub fn decode(s: &str) -> Result<Vec<u8>, EncodingError> {
    bs58::decode(s)
        .with_alphabet(bs58::Alphabet::BITCOIN)
        .into_vec()
        .map_err(|e| match e {
            bs58::decode::Error::InvalidCharacter { character, index } => {
                EncodingError::InvalidCharacter { character, index }
            }
            other => EncodingError::InvalidFormat(other.to_string()),
        })
}

/// Check that a string is well-formed Base58 and hand it back unchanged.
///
/// # Arguments
/// * `s` - The string to validate.
///
/// # Returns
/// The input string, or the decoding error.
pub fn require_base58(s: &str) -> Result<&str, EncodingError> {
    decode(s)?;
    Ok(s)
}
