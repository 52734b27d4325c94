/// Error type for canonical key encodings.
#[derive(Debug, thiserror::Error)]
pub enum KeyEncodingError {
    #[error("malformed key bytes: {0}")]
    MalformedBytes(String),
}

/// Error type for signature scheme operations.
#[derive(Debug, thiserror::Error)]
pub enum SignatureError {
    #[error("key does not belong to the {expected} scheme")]
    InvalidKey { expected: &'static str },

    #[error("unsupported signature algorithm: {0}")]
    UnsupportedAlgorithm(String),

    #[error("signing failed: {0}")]
    Signing(String),
}
