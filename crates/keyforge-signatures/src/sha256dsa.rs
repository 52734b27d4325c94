//! SHA-256 with DSA, over the RustCrypto `dsa` crate.
//!
//! Key pairs are generated on fresh 2048-bit parameters with a 256-bit
//! subgroup. Public keys encode as X.509 SubjectPublicKeyInfo documents
//! and private keys as PKCS#8 documents, both DER. Signatures are
//! DER-encoded (r, s) pairs. All of these sizes depend on content, so
//! every length accessor reports `None`.

use dsa::pkcs8::{DecodePrivateKey, DecodePublicKey, EncodePrivateKey, EncodePublicKey};
use dsa::signature::{DigestSigner, DigestVerifier, SignatureEncoding};
use dsa::{Components, KeySize, Signature, SigningKey, VerifyingKey};
use rand::rngs::OsRng;
use sha2::{Digest, Sha256};

use crate::{KeyEncodingError, KeyPair, PrivateKey, PublicKey, SignatureError, SignatureScheme};

/// Registry name of this scheme.
pub const NAME: &str = "sha256dsa";

/// SHA-256 with 2048/256-bit DSA.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256Dsa;

impl SignatureScheme for Sha256Dsa {
    fn name(&self) -> &'static str {
        NAME
    }

    fn generate_keypair(&self) -> Result<KeyPair, SignatureError> {
        let components = Components::generate(&mut OsRng, KeySize::DSA_2048_256);
        let signing = SigningKey::generate(&mut OsRng, components);
        let verifying = signing.verifying_key().clone();
        Ok(KeyPair {
            public: PublicKey::Sha256Dsa(verifying),
            private: PrivateKey::Sha256Dsa(signing),
        })
    }

    fn sign(&self, key: &PrivateKey, message: &[u8]) -> Result<Vec<u8>, SignatureError> {
        let signing = match key {
            PrivateKey::Sha256Dsa(signing) => signing,
            _ => return Err(SignatureError::InvalidKey { expected: NAME }),
        };
        let signature: Signature = signing
            .try_sign_digest(Sha256::new_with_prefix(message))
            .map_err(|e| SignatureError::Signing(e.to_string()))?;
        Ok(signature.to_vec())
    }

    fn verify(
        &self,
        key: &PublicKey,
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, SignatureError> {
        let verifying = match key {
            PublicKey::Sha256Dsa(verifying) => verifying,
            _ => return Err(SignatureError::InvalidKey { expected: NAME }),
        };
        let signature = match Signature::try_from(signature) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };
        Ok(verifying
            .verify_digest(Sha256::new_with_prefix(message), &signature)
            .is_ok())
    }

    fn encode_public_key(&self, key: &PublicKey) -> Result<Vec<u8>, SignatureError> {
        match key {
            PublicKey::Sha256Dsa(verifying) => verifying
                .to_public_key_der()
                .map(|document| document.as_bytes().to_vec())
                .map_err(|e| SignatureError::Signing(e.to_string())),
            _ => Err(SignatureError::InvalidKey { expected: NAME }),
        }
    }

    fn encode_private_key(&self, key: &PrivateKey) -> Result<Vec<u8>, SignatureError> {
        match key {
            PrivateKey::Sha256Dsa(signing) => signing
                .to_pkcs8_der()
                .map(|document| document.as_bytes().to_vec())
                .map_err(|e| SignatureError::Signing(e.to_string())),
            _ => Err(SignatureError::InvalidKey { expected: NAME }),
        }
    }

    fn public_key_from_encoding(&self, bytes: &[u8]) -> Result<PublicKey, KeyEncodingError> {
        VerifyingKey::from_public_key_der(bytes)
            .map(PublicKey::Sha256Dsa)
            .map_err(|e| KeyEncodingError::MalformedBytes(e.to_string()))
    }

    fn private_key_from_encoding(&self, bytes: &[u8]) -> Result<PrivateKey, KeyEncodingError> {
        SigningKey::from_pkcs8_der(bytes)
            .map(PrivateKey::Sha256Dsa)
            .map_err(|e| KeyEncodingError::MalformedBytes(e.to_string()))
    }

    fn public_key_length(&self) -> Option<usize> {
        None
    }

    fn private_key_length(&self) -> Option<usize> {
        None
    }

    fn signature_length(&self) -> Option<usize> {
        None
    }
}
