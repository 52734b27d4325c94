//! The algorithm-agnostic signature scheme interface.

use std::marker::PhantomData;

use crate::{KeyEncodingError, KeyPair, PrivateKey, PublicKey, SignatureError};

/// A digital signature algorithm behind a uniform, object-safe interface.
///
/// Implementations are stateless after construction and safe to share
/// across threads. Keys carry the tag of the scheme that produced them;
/// every operation taking a key fails with
/// [`SignatureError::InvalidKey`] when handed a key of another scheme.
pub trait SignatureScheme: Send + Sync {
    /// Registry name of this scheme.
    fn name(&self) -> &'static str;

    /// Generate a fresh key pair from the operating system RNG.
    fn generate_keypair(&self) -> Result<KeyPair, SignatureError>;

    /// Sign a message, returning the signature bytes.
    fn sign(&self, key: &PrivateKey, message: &[u8]) -> Result<Vec<u8>, SignatureError>;

    /// Verify a signature over a message.
    ///
    /// A signature that does not match, including one that does not
    /// parse, is `Ok(false)`, never an error. Only a key of the wrong
    /// scheme is an error.
    fn verify(
        &self,
        key: &PublicKey,
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, SignatureError>;

    /// Canonical byte encoding of a public key of this scheme.
    fn encode_public_key(&self, key: &PublicKey) -> Result<Vec<u8>, SignatureError>;

    /// Canonical byte encoding of a private key of this scheme.
    fn encode_private_key(&self, key: &PrivateKey) -> Result<Vec<u8>, SignatureError>;

    /// Rebuild a public key from its canonical encoding.
    fn public_key_from_encoding(&self, bytes: &[u8]) -> Result<PublicKey, KeyEncodingError>;

    /// Rebuild a private key from its canonical encoding.
    fn private_key_from_encoding(&self, bytes: &[u8]) -> Result<PrivateKey, KeyEncodingError>;

    /// Size of the public key encoding, or `None` when it depends on
    /// the key content.
    fn public_key_length(&self) -> Option<usize>;

    /// Size of the private key encoding, or `None` when it depends on
    /// the key content.
    fn private_key_length(&self) -> Option<usize>;

    /// Size of signatures, or `None` when it depends on content.
    fn signature_length(&self) -> Option<usize>;
}

/// Signs values of type `T` with a fixed private key.
///
/// A caller-supplied extractor pulls the bytes to sign out of the
/// value, so domain types can be signed without committing to a
/// serialization here. Reusable and safe for concurrent use.
pub struct Signer<'a, T, F>
where
    F: Fn(&T) -> Vec<u8>,
{
    scheme: &'a dyn SignatureScheme,
    key: &'a PrivateKey,
    extractor: F,
    _value: PhantomData<fn(&T)>,
}

impl<'a, T, F> Signer<'a, T, F>
where
    F: Fn(&T) -> Vec<u8>,
{
    /// Bind a scheme, a private key, and a byte extractor.
    pub fn new(scheme: &'a dyn SignatureScheme, key: &'a PrivateKey, extractor: F) -> Self {
        Signer { scheme, key, extractor, _value: PhantomData }
    }

    /// Sign the bytes the extractor pulls out of `value`.
    pub fn sign(&self, value: &T) -> Result<Vec<u8>, SignatureError> {
        self.scheme.sign(self.key, &(self.extractor)(value))
    }
}

/// Verifies signatures over values of type `T` with a fixed public key.
///
/// Counterpart of [`Signer`]; the extractor must pull out the same
/// bytes the signer saw.
pub struct Verifier<'a, T, F>
where
    F: Fn(&T) -> Vec<u8>,
{
    scheme: &'a dyn SignatureScheme,
    key: &'a PublicKey,
    extractor: F,
    _value: PhantomData<fn(&T)>,
}

impl<'a, T, F> Verifier<'a, T, F>
where
    F: Fn(&T) -> Vec<u8>,
{
    /// Bind a scheme, a public key, and a byte extractor.
    pub fn new(scheme: &'a dyn SignatureScheme, key: &'a PublicKey, extractor: F) -> Self {
        Verifier { scheme, key, extractor, _value: PhantomData }
    }

    /// Verify `signature` over the bytes extracted from `value`.
    pub fn verify(&self, value: &T, signature: &[u8]) -> Result<bool, SignatureError> {
        self.scheme.verify(self.key, &(self.extractor)(value), signature)
    }
}
