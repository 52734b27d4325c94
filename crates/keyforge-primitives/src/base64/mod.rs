//! Base64 transcoding with the standard alphabet and padding.

use ::base64::engine::general_purpose::STANDARD;
use ::base64::{DecodeError, Engine as _};

use crate::EncodingError;

/// Encode a byte slice to a Base64 string.
///
/// # Arguments
/// * `data` - The bytes to encode.
///
/// # Returns
/// A padded Base64 string over the standard alphabet.
pub fn encode(data: &[u8]) -> String {
    STANDARD.encode(data)
}

/// Encode a sub-range of a byte slice to a Base64 string.
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
    Ok(STANDARD.encode(&data[offset..end]))
}

/// Decode a Base64 string to a byte vector.
///
/// # Arguments
/// * `s` - The Base64 string to decode.
///
/// # Returns
/// `Ok(Vec<u8>)` on success. Characters outside the alphabet map to
/// [`EncodingError::InvalidCharacter`]; truncated input or malformed
/// padding maps to [`EncodingError::InvalidFormat`].
pub fn decode(s: &str) -> Result<Vec<u8>, EncodingError> {
    STANDARD.decode(s).map_err(|e| match e {
        DecodeError::InvalidByte(index, byte) => EncodingError::InvalidCharacter {
            character: byte as char,
            index,
        },
        other => EncodingError::InvalidFormat(other.to_string()),
    })
}

/// Check that a string is well-formed Base64 and hand it back unchanged.
///
/// # Arguments
/// * `s` - The string to validate.
///
/// # Returns
/// The input string, or the decoding error.
pub fn require_base64(s: &str) -> Result<&str, EncodingError> {
    decode(s)?;
    Ok(s)
}

#[cfg(test)]
mod tests {
    use super::*;

    // RFC 4648 section 10 test vectors.

    #[test]
    fn test_base64_rfc4648_vectors() {
        let vectors: [(&[u8], &str); 7] = [
            (b"", ""),
            (b"f", "Zg=="),
            (b"fo", "Zm8="),
            (b"foo", "Zm9v"),
            (b"foob", "Zm9vYg=="),
            (b"fooba", "Zm9vYmE="),
            (b"foobar", "Zm9vYmFy"),
        ];
        for (input, expected) in vectors {
            assert_eq!(encode(input), expected);
            assert_eq!(decode(expected).unwrap(), input);
        }
    }

    #[test]
    fn test_base64_binary_round_trip() {
        let input = hex::decode("00ff10203040506070").unwrap();
        assert_eq!(decode(&encode(&input)).unwrap(), input);
    }

    #[test]
    fn test_base64_invalid_character() {
        assert_eq!(
            decode("Zm9!"),
            Err(EncodingError::InvalidCharacter { character: '!', index: 3 })
        );
    }

    #[test]
    fn test_base64_truncated_input() {
        assert!(matches!(decode("Zm9"), Err(EncodingError::InvalidFormat(_))));
    }

    #[test]
    fn test_base64_encode_range() {
        let data = b"foobar";
        assert_eq!(encode_range(data, 0, 6).unwrap(), "Zm9vYmFy");
        assert_eq!(encode_range(data, 1, 3).unwrap(), encode(b"oob"));
        assert_eq!(encode_range(data, 6, 0).unwrap(), "");
    }

    #[test]
    fn test_base64_encode_range_out_of_bounds() {
        assert!(matches!(
            encode_range(b"ab", 1, 5),
            Err(EncodingError::InvalidFormat(_))
        ));
        assert!(matches!(
            encode_range(b"ab", usize::MAX, 2),
            Err(EncodingError::InvalidFormat(_))
        ));
    }

    #[test]
    fn test_require_base64() {
        assert_eq!(require_base64("Zm9vYg==").unwrap(), "Zm9vYg==");
        assert!(require_base64("not base64!").is_err());
    }
}
