//! Ed25519 adapter over ed25519-dalek.
//!
//! Keys encode as the raw 32-byte forms defined by RFC 8032 and
//! signatures are the raw 64-byte form, so every size is fixed.

use ed25519_dalek::{Signature, Signer as _, SigningKey, Verifier as _, VerifyingKey};
use rand::rngs::OsRng;

use crate::{KeyEncodingError, KeyPair, PrivateKey, PublicKey, SignatureError, SignatureScheme};

/// Registry name of this scheme.
pub const NAME: &str = "ed25519";

/// Ed25519 as defined by RFC 8032.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ed25519;

impl SignatureScheme for Ed25519 {
    fn name(&self) -> &'static str {
        NAME
    }

    fn generate_keypair(&self) -> Result<KeyPair, SignatureError> {
        let signing = SigningKey::generate(&mut OsRng);
        Ok(KeyPair {
            public: PublicKey::Ed25519(signing.verifying_key()),
            private: PrivateKey::Ed25519(signing),
        })
    }

    fn sign(&self, key: &PrivateKey, message: &[u8]) -> Result<Vec<u8>, SignatureError> {
        let signing = match key {
            PrivateKey::Ed25519(signing) => signing,
            _ => return Err(SignatureError::InvalidKey { expected: NAME }),
        };
        Ok(signing.sign(message).to_bytes().to_vec())
    }

    fn verify(
        &self,
        key: &PublicKey,
        message: &[u8],
        signature: &[u8],
    ) -> Result<bool, SignatureError> {
        let verifying = match key {
            PublicKey::Ed25519(verifying) => verifying,
            _ => return Err(SignatureError::InvalidKey { expected: NAME }),
        };
        let signature = match Signature::from_slice(signature) {
            Ok(signature) => signature,
            Err(_) => return Ok(false),
        };
        Ok(verifying.verify(message, &signature).is_ok())
    }

    fn encode_public_key(&self, key: &PublicKey) -> Result<Vec<u8>, SignatureError> {
        match key {
            PublicKey::Ed25519(verifying) => Ok(verifying.to_bytes().to_vec()),
            _ => Err(SignatureError::InvalidKey { expected: NAME }),
        }
    }

    fn encode_private_key(&self, key: &PrivateKey) -> Result<Vec<u8>, SignatureError> {
        match key {
            PrivateKey::Ed25519(signing) => Ok(signing.to_bytes().to_vec()),
            _ => Err(SignatureError::InvalidKey { expected: NAME }),
        }
    }

    fn public_key_from_encoding(&self, bytes: &[u8]) -> Result<PublicKey, KeyEncodingError> {
        let bytes: [u8; 32] = bytes.try_into().map_err(|_| {
            KeyEncodingError::MalformedBytes(format!("expected 32 bytes, got {}", bytes.len()))
        })?;
        VerifyingKey::from_bytes(&bytes)
            .map(PublicKey::Ed25519)
            .map_err(|e| KeyEncodingError::MalformedBytes(e.to_string()))
    }

    fn private_key_from_encoding(&self, bytes: &[u8]) -> Result<PrivateKey, KeyEncodingError> {
        let bytes: [u8; 32] = bytes.try_into().map_err(|_| {
            KeyEncodingError::MalformedBytes(format!("expected 32 bytes, got {}", bytes.len()))
        })?;
        Ok(PrivateKey::Ed25519(SigningKey::from_bytes(&bytes)))
    }

    fn public_key_length(&self) -> Option<usize> {
        Some(32)
    }

    fn private_key_length(&self) -> Option<usize> {
        Some(32)
    }

    fn signature_length(&self) -> Option<usize> {
        Some(64)
    }
}
