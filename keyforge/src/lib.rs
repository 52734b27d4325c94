#![deny(missing_docs)]

//! Keyforge - Cryptographic support toolkit.
//!
//! Re-exports all keyforge components for convenient single-crate usage.

pub use keyforge_primitives as primitives;
pub use keyforge_signatures as signatures;
