//! Credential engine: one-way password hashing and verification.
//!
//! Hashes are Argon2id PHC strings (`$argon2id$v=19$m=...,t=...,p=...$salt$hash`),
//! so the parameters travel with each hash and can change without touching
//! stored rows or callers.

use argon2::password_hash::SaltString;
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use std::fmt;

use crate::error::AppError;

/// Salt size in bytes (before base64 encoding).
const SALT_LENGTH: usize = 16;

/// An encoded password hash, safe to persist.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedPassword(String);

impl HashedPassword {
    /// Wraps a hash read back from storage. No format check is done here;
    /// a malformed value simply never verifies.
    pub fn from_stored(encoded: String) -> Self {
        Self(encoded)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for HashedPassword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("HashedPassword(..)")
    }
}

/// Salted Argon2id hasher.
#[derive(Clone)]
pub struct CredentialEngine {
    argon2: Argon2<'static>,
}

impl CredentialEngine {
    /// Creates an engine with explicit Argon2 costs.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Hashing`] if the parameters are out of range.
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> Result<Self, AppError> {
        let params = Params::new(memory_kib, iterations, parallelism, None)
            .map_err(|e| AppError::hashing(format!("invalid argon2 parameters: {e}")))?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
        })
    }

    /// Hashes `password` with a fresh random salt.
    ///
    /// Two calls with the same input produce different strings that both verify.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Hashing`] if the OS entropy source fails.
    pub fn hash(&self, password: &str) -> Result<HashedPassword, AppError> {
        let mut salt_bytes = [0u8; SALT_LENGTH];
        getrandom::fill(&mut salt_bytes)
            .map_err(|e| AppError::hashing(format!("entropy source unavailable: {e}")))?;

        let salt = SaltString::encode_b64(&salt_bytes)
            .map_err(|e| AppError::hashing(e.to_string()))?;

        let hash = self
            .argon2
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AppError::hashing(e.to_string()))?;

        Ok(HashedPassword(hash.to_string()))
    }

    /// Checks `password` against a stored hash.
    ///
    /// Returns `false` on mismatch and on a malformed hash; never errors.
    /// The digest comparison inside `argon2` is constant-time.
    pub fn verify(&self, password: &str, hash: &HashedPassword) -> bool {
        let Ok(parsed) = PasswordHash::new(hash.as_str()) else {
            return false;
        };

        self.argon2
            .verify_password(password.as_bytes(), &parsed)
            .is_ok()
    }
}

impl Default for CredentialEngine {
    /// Argon2id with the crate's recommended default costs.
    fn default() -> Self {
        Self {
            argon2: Argon2::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine() -> CredentialEngine {
        CredentialEngine::with_params(4096, 1, 1).unwrap()
    }

    #[test]
    fn test_hash_then_verify() {
        let engine = engine();
        let hash = engine.hash("correct horse").unwrap();

        assert!(engine.verify("correct horse", &hash));
        assert!(!engine.verify("battery staple", &hash));
    }

    #[test]
    fn test_hash_is_salted() {
        let engine = engine();
        let first = engine.hash("pw").unwrap();
        let second = engine.hash("pw").unwrap();

        assert_ne!(first, second);
        assert!(engine.verify("pw", &first));
        assert!(engine.verify("pw", &second));
    }

    #[test]
    fn test_hash_format_is_phc() {
        let hash = engine().hash("pw").unwrap();

        assert!(hash.as_str().starts_with("$argon2id$v=19$"));
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        let engine = engine();

        assert!(!engine.verify("pw", &HashedPassword::from_stored(String::new())));
        assert!(!engine.verify(
            "pw",
            &HashedPassword::from_stored("plaintext-password".to_string())
        ));
    }

    #[test]
    fn test_verify_uses_params_embedded_in_hash() {
        let strong = CredentialEngine::with_params(8192, 2, 1).unwrap();
        let hash = strong.hash("pw").unwrap();

        assert!(engine().verify("pw", &hash));
    }

    #[test]
    fn test_empty_password_round_trips() {
        let engine = engine();
        let hash = engine.hash("").unwrap();

        assert!(engine.verify("", &hash));
        assert!(!engine.verify(" ", &hash));
    }

    #[test]
    fn test_invalid_params_rejected() {
        let result = CredentialEngine::with_params(1, 0, 0);

        assert!(matches!(result, Err(AppError::Hashing { .. })));
    }

    #[test]
    fn test_debug_does_not_leak_hash() {
        let hash = engine().hash("pw").unwrap();

        assert_eq!(format!("{hash:?}"), "HashedPassword(..)");
    }
}
