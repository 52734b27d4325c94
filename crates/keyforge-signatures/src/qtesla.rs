//! Post-quantum lattice adapters at security levels 1 and 3.
//!
//! `qtesla1` and `qtesla3` are backed by the PQClean Dilithium
//! implementations (dilithium2 and dilithium3), which define the byte
//! layouts. Keys and signatures use the provider's raw byte forms, so
//! every size is fixed.

use pqcrypto_traits::sign::{DetachedSignature as _, PublicKey as _, SecretKey as _};

use crate::{KeyEncodingError, KeyPair, PrivateKey, PublicKey, SignatureError, SignatureScheme};

/// Registry name of the level-1 scheme.
pub const NAME_LEVEL_1: &str = "qtesla1";

/// Registry name of the level-3 scheme.
pub const NAME_LEVEL_3: &str = "qtesla3";

macro_rules! lattice_scheme {
    ($(#[$doc:meta])* $scheme:ident, $variant:ident, $provider:ident, $name:expr) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy, Default)]
        pub struct $scheme;

        impl SignatureScheme for $scheme {
            fn name(&self) -> &'static str {
                $name
            }

            fn generate_keypair(&self) -> Result<KeyPair, SignatureError> {
                let (public, private) = pqcrypto_dilithium::$provider::keypair();
                Ok(KeyPair {
                    public: PublicKey::$variant(public),
                    private: PrivateKey::$variant(private),
                })
            }

            fn sign(&self, key: &PrivateKey, message: &[u8]) -> Result<Vec<u8>, SignatureError> {
                let private = match key {
                    PrivateKey::$variant(private) => private,
                    _ => return Err(SignatureError::InvalidKey { expected: $name }),
                };
                let signature = pqcrypto_dilithium::$provider::detached_sign(message, private);
                Ok(signature.as_bytes().to_vec())
            }

            fn verify(
                &self,
                key: &PublicKey,
                message: &[u8],
                signature: &[u8],
            ) -> Result<bool, SignatureError> {
                let public = match key {
                    PublicKey::$variant(public) => public,
                    _ => return Err(SignatureError::InvalidKey { expected: $name }),
                };
                let signature =
                    match pqcrypto_dilithium::$provider::DetachedSignature::from_bytes(signature) {
                        Ok(signature) => signature,
                        Err(_) => return Ok(false),
                    };
                Ok(pqcrypto_dilithium::$provider::verify_detached_signature(
                    &signature, message, public,
                )
                .is_ok())
            }

            fn encode_public_key(&self, key: &PublicKey) -> Result<Vec<u8>, SignatureError> {
                match key {
                    PublicKey::$variant(public) => Ok(public.as_bytes().to_vec()),
                    _ => Err(SignatureError::InvalidKey { expected: $name }),
                }
            }

            fn encode_private_key(&self, key: &PrivateKey) -> Result<Vec<u8>, SignatureError> {
                match key {
                    PrivateKey::$variant(private) => Ok(private.as_bytes().to_vec()),
                    _ => Err(SignatureError::InvalidKey { expected: $name }),
                }
            }

            fn public_key_from_encoding(
                &self,
                bytes: &[u8],
            ) -> Result<PublicKey, KeyEncodingError> {
                pqcrypto_dilithium::$provider::PublicKey::from_bytes(bytes)
                    .map(PublicKey::$variant)
                    .map_err(|e| KeyEncodingError::MalformedBytes(e.to_string()))
            }

            fn private_key_from_encoding(
                &self,
                bytes: &[u8],
            ) -> Result<PrivateKey, KeyEncodingError> {
                pqcrypto_dilithium::$provider::SecretKey::from_bytes(bytes)
                    .map(PrivateKey::$variant)
                    .map_err(|e| KeyEncodingError::MalformedBytes(e.to_string()))
            }

            fn public_key_length(&self) -> Option<usize> {
                Some(pqcrypto_dilithium::$provider::public_key_bytes())
            }

            fn private_key_length(&self) -> Option<usize> {
                Some(pqcrypto_dilithium::$provider::secret_key_bytes())
            }

            fn signature_length(&self) -> Option<usize> {
                Some(pqcrypto_dilithium::$provider::signature_bytes())
            }
        }
    };
}

lattice_scheme!(
    /// The level-1 lattice scheme.
    QTesla1,
    QTesla1,
    dilithium2,
    NAME_LEVEL_1
);

lattice_scheme!(
    /// The level-3 lattice scheme.
    QTesla3,
    QTesla3,
    dilithium3,
    NAME_LEVEL_3
);

#[cfg(test)]
mod tests {
    use super::*;

    fn exercise(scheme: &dyn SignatureScheme) {
        let pair = scheme.generate_keypair().unwrap();

        let signature = scheme.sign(&pair.private, b"hello world").unwrap();
        assert_eq!(signature.len(), scheme.signature_length().unwrap());
        assert!(scheme.verify(&pair.public, b"hello world", &signature).unwrap());
        assert!(!scheme.verify(&pair.public, b"hello worlD", &signature).unwrap());
        assert!(!scheme.verify(&pair.public, b"hello world", b"junk").unwrap());

        let public_bytes = scheme.encode_public_key(&pair.public).unwrap();
        let private_bytes = scheme.encode_private_key(&pair.private).unwrap();
        assert_eq!(public_bytes.len(), scheme.public_key_length().unwrap());
        assert_eq!(private_bytes.len(), scheme.private_key_length().unwrap());

        let public = scheme.public_key_from_encoding(&public_bytes).unwrap();
        let private = scheme.private_key_from_encoding(&private_bytes).unwrap();
        let signature = scheme.sign(&private, b"payload").unwrap();
        assert!(scheme.verify(&public, b"payload", &signature).unwrap());
    }

    #[test]
    fn test_level_1_lifecycle() {
        exercise(&QTesla1);
    }

    #[test]
    fn test_level_3_lifecycle() {
        exercise(&QTesla3);
    }

    #[test]
    fn test_levels_do_not_mix() {
        let pair = QTesla1.generate_keypair().unwrap();
        assert!(matches!(
            QTesla3.sign(&pair.private, b"msg"),
            Err(SignatureError::InvalidKey { expected: NAME_LEVEL_3 })
        ));
    }
}
