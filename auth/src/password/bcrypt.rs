use bcrypt::non_truncating_hash;
use bcrypt::non_truncating_verify;

use super::errors::PasswordError;

/// Work factor applied to every stored hash.
pub const PASSWORD_COST: u32 = 10;

/// Password hashing implementation.
///
/// Salted bcrypt with a fixed work factor. Passwords beyond bcrypt's
/// 72-byte input limit are rejected rather than silently truncated.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl PasswordHasher {
    /// Create a new password hasher using [`PASSWORD_COST`].
    pub fn new() -> Self {
        Self {
            cost: PASSWORD_COST,
        }
    }

    /// Work factor this hasher applies.
    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a plaintext password.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// Modular crypt format hash (`$2b$10$...`), salt included
    ///
    /// # Errors
    /// * `HashingFailed` - bcrypt rejected the input (e.g. longer than 72 bytes)
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        non_truncating_hash(password, self.cost)
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Returns false on mismatch and on a malformed stored hash.
    pub fn verify(&self, password: &str, hash: &str) -> bool {
        non_truncating_verify(password, hash).unwrap_or(false)
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hash_and_verify() {
        let hasher = PasswordHasher::new();
        let password = "my_secure_password";

        let hash = hasher.hash(password).expect("Failed to hash password");

        assert!(hasher.verify(password, &hash));
        assert!(!hasher.verify("wrong_password", &hash));
    }

    #[test]
    fn test_hash_uses_fixed_cost() {
        let hasher = PasswordHasher::new();
        let hash = hasher.hash("correctpw").expect("Failed to hash password");

        assert_eq!(hasher.cost(), 10);
        assert!(hash.starts_with("$2b$10$"));
    }

    #[test]
    fn test_hash_is_salted() {
        let hasher = PasswordHasher::new();

        let first = hasher.hash("same_password").unwrap();
        let second = hasher.hash("same_password").unwrap();

        assert_ne!(first, second);
        assert!(hasher.verify("same_password", &first));
        assert!(hasher.verify("same_password", &second));
    }

    #[test]
    fn test_hash_rejects_overlong_password() {
        let hasher = PasswordHasher::new();
        let password = "x".repeat(73);

        let result = hasher.hash(&password);
        assert!(matches!(result, Err(PasswordError::HashingFailed(_))));
    }

    #[test]
    fn test_verify_malformed_hash_is_false() {
        let hasher = PasswordHasher::new();

        assert!(!hasher.verify("password", "invalid_hash"));
        assert!(!hasher.verify("password", ""));
    }
}
