//! Keyforge - Encoding codecs, hashing, and mnemonic phrases.
//!
//! This crate provides the foundational building blocks shared by the
//! keyforge signature crates:
//! - Base58 encoding/decoding (Bitcoin alphabet, no checksum layer)
//! - Base64 and hexadecimal transcoding with sub-range overloads
//! - SHA-256 hashing
//! - Mnemonic phrases over a fixed 2048-word English wordlist

pub mod base58;
pub mod base64;
pub mod hash;
pub mod hex;
pub mod mnemonic;

mod error;
pub use error::{EncodingError, MnemonicError};
pub use mnemonic::Mnemonic;
