//! Password hashing behind a pluggable capability.
//!
//! The authenticator never sees the concrete algorithm; swapping it out is a
//! matter of providing another `PasswordHasherTrait` implementation.

use crate::errors::{DomainError, DomainResult};

/// Pluggable password hashing capability
pub trait PasswordHasherTrait: Send + Sync {
    /// Hash a plain password into a salted one-way digest
    fn hash(&self, password: &str) -> DomainResult<String>;

    /// Verify a plain password against a stored digest
    ///
    /// The comparison must not leak timing information about the digest.
    fn verify(&self, password: &str, digest: &str) -> DomainResult<bool>;
}

/// bcrypt implementation of the password hashing capability
pub struct BcryptPasswordHasher {
    cost: u32,
}

impl BcryptPasswordHasher {
    /// Create a hasher with the default work factor
    pub fn new() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }

    /// Create a hasher with an explicit work factor
    ///
    /// Lower costs are only appropriate in tests.
    pub fn with_cost(cost: u32) -> Self {
        Self { cost }
    }
}

impl Default for BcryptPasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl PasswordHasherTrait for BcryptPasswordHasher {
    fn hash(&self, password: &str) -> DomainResult<String> {
        bcrypt::hash(password, self.cost).map_err(|e| DomainError::Internal {
            message: format!("Failed to hash password: {}", e),
        })
    }

    fn verify(&self, password: &str, digest: &str) -> DomainResult<bool> {
        bcrypt::verify(password, digest).map_err(|e| DomainError::Internal {
            message: format!("Failed to verify password: {}", e),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // bcrypt's minimum cost keeps the tests fast
    fn hasher() -> BcryptPasswordHasher {
        BcryptPasswordHasher::with_cost(4)
    }

    #[test]
    fn test_hash_and_verify_roundtrip() {
        let hasher = hasher();
        let digest = hasher.hash("correct horse battery staple").unwrap();

        assert!(hasher.verify("correct horse battery staple", &digest).unwrap());
        assert!(!hasher.verify("wrong password", &digest).unwrap());
    }

    #[test]
    fn test_hashes_are_salted() {
        let hasher = hasher();
        let first = hasher.hash("password").unwrap();
        let second = hasher.hash("password").unwrap();

        assert_ne!(first, second);
    }

    #[test]
    fn test_verify_rejects_garbage_digest() {
        let hasher = hasher();
        assert!(hasher.verify("password", "not-a-bcrypt-digest").is_err());
    }
}
