//! Keyforge - Algorithm-agnostic digital signatures.
//!
//! This crate exposes every supported signature algorithm behind one
//! object-safe [`SignatureScheme`] interface:
//! - `ed25519` (RFC 8032, raw 32-byte key encodings)
//! - `sha256dsa` (SHA-256 with 2048/256-bit DSA, DER encodings)
//! - `qtesla1` / `qtesla3` (post-quantum lattice schemes at security
//!   levels 1 and 3)
//!
//! Schemes are looked up by name through [`SignatureAlgorithms`] or
//! constructed directly via the [`registry`] functions. [`Signer`] and
//! [`Verifier`] bind a key and a byte extractor so arbitrary values can
//! be signed.

pub mod ed25519;
pub mod qtesla;
pub mod registry;
pub mod sha256dsa;

mod error;
mod keys;
mod scheme;

pub use error::{KeyEncodingError, SignatureError};
pub use keys::{KeyPair, PrivateKey, PublicKey};
pub use registry::SignatureAlgorithms;
pub use scheme::{SignatureScheme, Signer, Verifier};
