//! Key material for the supported signature schemes.
//!
//! Keys are tagged with the scheme that produced them, wrapping the
//! provider's native key type. Feeding a key to a scheme of a different
//! tag fails with [`SignatureError::InvalidKey`].
//!
//! [`SignatureError::InvalidKey`]: crate::SignatureError::InvalidKey

use pqcrypto_dilithium::{dilithium2, dilithium3};

use crate::{ed25519, qtesla, sha256dsa};

/// A public key, tagged with the scheme that produced it.
#[derive(Clone)]
pub enum PublicKey {
    /// Ed25519 verifying key.
    Ed25519(ed25519_dalek::VerifyingKey),
    /// DSA verifying key on 2048/256-bit parameters.
    Sha256Dsa(dsa::VerifyingKey),
    /// Level-1 lattice public key.
    QTesla1(dilithium2::PublicKey),
    /// Level-3 lattice public key.
    QTesla3(dilithium3::PublicKey),
}

/// A private key, tagged with the scheme that produced it.
///
/// The Ed25519 variant zeroizes its seed on drop through the provider.
#[derive(Clone)]
pub enum PrivateKey {
    /// Ed25519 signing key.
    Ed25519(ed25519_dalek::SigningKey),
    /// DSA signing key on 2048/256-bit parameters.
    Sha256Dsa(dsa::SigningKey),
    /// Level-1 lattice secret key.
    QTesla1(dilithium2::SecretKey),
    /// Level-3 lattice secret key.
    QTesla3(dilithium3::SecretKey),
}

/// A freshly generated public/private key pair.
///
/// Owned by the caller that requested it; the library keeps no copy.
pub struct KeyPair {
    /// The public half.
    pub public: PublicKey,
    /// The private half.
    pub private: PrivateKey,
}

impl PublicKey {
    /// Registry name of the scheme this key belongs to.
    pub fn scheme_name(&self) -> &'static str {
        match self {
            PublicKey::Ed25519(_) => ed25519::NAME,
            PublicKey::Sha256Dsa(_) => sha256dsa::NAME,
            PublicKey::QTesla1(_) => qtesla::NAME_LEVEL_1,
            PublicKey::QTesla3(_) => qtesla::NAME_LEVEL_3,
        }
    }
}

impl PrivateKey {
    /// Registry name of the scheme this key belongs to.
    pub fn scheme_name(&self) -> &'static str {
        match self {
            PrivateKey::Ed25519(_) => ed25519::NAME,
            PrivateKey::Sha256Dsa(_) => sha256dsa::NAME,
            PrivateKey::QTesla1(_) => qtesla::NAME_LEVEL_1,
            PrivateKey::QTesla3(_) => qtesla::NAME_LEVEL_3,
        }
    }
}
