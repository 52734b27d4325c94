//! Hexadecimal transcoding.
//!
//! Encoding emits lowercase digits; decoding accepts either case.

use crate::EncodingError;

/// Encode a byte slice to a lowercase hex string.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A hex string of twice the input length.
pub fn encode(data: &[u8]) -> String {
    ::hex::encode(data)
}

/// Encode a sub-range of a byte slice to a lowercase hex string.
///
/// # Arguments
/// * `data` - The source bytes.
/// * `offset` - Index of the first byte to encode.
/// * `length` - Number of bytes to encode.
///
/// # Returns
/// The encoding of `data[offset..offset + length]`, or
/// [`EncodingError::InvalidFormat`] when the range falls outside `data`.
pub fn encode_range(data: &[u8], offset: usize, length: usize) -> Result<String, EncodingError> {
    let end = offset
        .checked_add(length)
        .filter(|end| *end <= data.len())
        .ok_or_else(|| {
            EncodingError::InvalidFormat(format!(
                "range {offset}..{offset}+{length} out of bounds for {} bytes",
                data.len()
            ))
        })?;
    Ok(::hex::encode(&data[offset..end]))
}

/// Decode a hex string to a byte vector.
///
/// # Arguments
/// * `s` - The hex string to decode, in either case.
///
/// # Returns
/// `Ok(Vec<u8>)` on success. Non-hex characters map to
/// [`EncodingError::InvalidCharacter`]; an odd number of digits maps to
/// [`EncodingError::InvalidFormat`].
pub fn decode(s: &str) -> Result<Vec<u8>, EncodingError> {
    ::hex::decode(s).map_err(|e| match e {
        ::hex::FromHexError::InvalidHexCharacter { c, index } => {
            EncodingError::InvalidCharacter { character: c, index }
        }
        other => EncodingError::InvalidFormat(other.to_string()),
    })
}

/// Check that a string is well-formed hex and hand it back unchanged.
///
/// # Arguments
/// * `s` - The string to validate.
///
/// # Returns
/// The input string, or the decoding error.
pub fn require_hex(s: &str) -> Result<&str, EncodingError> {
    decode(s)?;
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_encode_lowercase() {
        assert_eq!(encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
        assert_eq!(encode(&[]), "");
    }

    #[test]
    fn test_hex_decode_case_insensitive() {
        let expected = vec![0xde, 0xad, 0xbe, 0xef];
        assert_eq!(decode("deadbeef").unwrap(), expected);
        assert_eq!(decode("DEADBEEF").unwrap(), expected);
        assert_eq!(decode("DeAdBeEf").unwrap(), expected);
    }

    #[test]
    fn test_hex_odd_length() {
        assert!(matches!(decode("abc"), Err(EncodingError::InvalidFormat(_))));
    }

    #[test]
    fn test_hex_invalid_character() {
        assert_eq!(
            decode("00zz"),
            Err(EncodingError::InvalidCharacter { character: 'z', index: 2 })
        );
    }

    #[test]
    fn test_hex_encode_range() {
        let data = [0x01u8, 0x02, 0x03, 0x04];
        assert_eq!(encode_range(&data, 1, 2).unwrap(), "0203");
        assert_eq!(encode_range(&data, 4, 0).unwrap(), "");
        assert!(encode_range(&data, 3, 2).is_err());
    }

    #[test]
    fn test_require_hex() {
        assert_eq!(require_hex("00ff").unwrap(), "00ff");
        assert!(require_hex("0g").is_err());
    }
}
