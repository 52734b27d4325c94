//! Name-based lookup of the supported signature schemes.

use std::collections::HashMap;
use std::sync::Arc;

use crate::ed25519::Ed25519;
use crate::qtesla::{QTesla1, QTesla3};
use crate::sha256dsa::Sha256Dsa;
use crate::{SignatureError, SignatureScheme};

/// Construct the Ed25519 scheme.
pub fn ed25519() -> Arc<dyn SignatureScheme> {
    Arc::new(Ed25519)
}

/// Construct the SHA-256-with-DSA scheme.
pub fn sha256dsa() -> Arc<dyn SignatureScheme> {
    Arc::new(Sha256Dsa)
}

/// Construct the level-1 lattice scheme.
pub fn qtesla1() -> Arc<dyn SignatureScheme> {
    Arc::new(QTesla1)
}

/// Construct the level-3 lattice scheme.
pub fn qtesla3() -> Arc<dyn SignatureScheme> {
    Arc::new(QTesla3)
}

/// Registry of every supported signature scheme, keyed by name.
///
/// Built once and immutable afterwards; share it by reference or clone
/// the cheap `Arc` handles it returns.
pub struct SignatureAlgorithms {
    schemes: HashMap<&'static str, Arc<dyn SignatureScheme>>,
}

impl SignatureAlgorithms {
    /// Build the registry with every supported scheme.
    pub fn new() -> Self {
        let mut schemes: HashMap<&'static str, Arc<dyn SignatureScheme>> = HashMap::new();
        for scheme in [ed25519(), sha256dsa(), qtesla1(), qtesla3()] {
            schemes.insert(scheme.name(), scheme);
        }
        SignatureAlgorithms { schemes }
    }

    /// Look up a scheme by its registry name.
    ///
    /// # Arguments
    /// * `name` - One of the supported names.
    ///
    /// # Returns
    /// A shared handle to the scheme, or
    /// [`SignatureError::UnsupportedAlgorithm`] carrying the name.
    pub fn of_name(&self, name: &str) -> Result<Arc<dyn SignatureScheme>, SignatureError> {
        self.schemes
            .get(name)
            .cloned()
            .ok_or_else(|| SignatureError::UnsupportedAlgorithm(name.to_string()))
    }

    /// Iterate over the supported scheme names.
    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.schemes.keys().copied()
    }
}

impl Default for SignatureAlgorithms {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_names() {
        let algorithms = SignatureAlgorithms::new();
        let mut names: Vec<&str> = algorithms.names().collect();
        names.sort_unstable();
        assert_eq!(names, ["ed25519", "qtesla1", "qtesla3", "sha256dsa"]);
    }

    #[test]
    fn test_of_name_resolves_each_scheme() {
        let algorithms = SignatureAlgorithms::new();
        for name in ["ed25519", "sha256dsa", "qtesla1", "qtesla3"] {
            assert_eq!(algorithms.of_name(name).unwrap().name(), name);
        }
    }

    #[test]
    fn test_of_name_unknown() {
        let algorithms = SignatureAlgorithms::new();
        assert!(matches!(
            algorithms.of_name("rot13"),
            Err(SignatureError::UnsupportedAlgorithm(name)) if name == "rot13"
        ));
    }
}
