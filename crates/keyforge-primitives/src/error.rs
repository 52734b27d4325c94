/// Error type for the Base58, Base64, and hex codecs.
///
/// Decoding reports the first offending character where the underlying
/// codec identifies one, and a structural description otherwise.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum EncodingError {
    #[error("invalid character {character:?} at index {index}")]
    InvalidCharacter { character: char, index: usize },

    #[error("invalid format: {0}")]
    InvalidFormat(String),
}

/// Error type for mnemonic encoding and decoding.
#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum MnemonicError {
    #[error("word not in the wordlist: {0}")]
    UnknownWord(String),

    #[error("checksum mismatch")]
    InvalidChecksum,

    #[error("invalid length: {0}")]
    InvalidLength(usize),
}
